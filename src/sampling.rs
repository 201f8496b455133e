//! Primitive random helpers shared by the layout and noise generators.

use log::warn;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::error::GenError;

/// Picks one integer from `[start, min(max_number, ceiling)]`, where values
/// strictly greater than `weight_range.0` and at most `weight_range.1` are
/// `weight_multiplier` times more likely than the rest. Every candidate keeps
/// positive probability.
///
/// A band upper bound reaching the candidate max is clamped with a warning:
/// the boost then covers the whole tail and the pick degenerates towards
/// uniform over a smaller band.
pub fn weighted_count<R: Rng + ?Sized>(
    rng: &mut R,
    max_number: u32,
    ceiling: Option<u32>,
    start: u32,
    weight_range: (u32, u32),
    weight_multiplier: u32,
) -> Result<u32, GenError> {
    if max_number < start {
        return Err(GenError::InvalidRange {
            max: max_number,
            start,
        });
    }
    let max = ceiling.map_or(max_number, |c| max_number.min(c));
    if max < start {
        return Err(GenError::InvalidRange { max, start });
    }

    let (lo, mut hi) = weight_range;
    if hi >= max {
        hi = max;
        warn!("weight band upper bound clamped to the candidate max ({max})");
    }

    let numbers: Vec<u32> = (start..=max).collect();
    let weights = numbers
        .iter()
        .map(|&n| if n > lo && n <= hi { weight_multiplier } else { 1 });
    let dist = WeightedIndex::new(weights).map_err(|e| GenError::Weights(e.to_string()))?;
    Ok(numbers[dist.sample(rng)])
}

/// Returns a run of spaces whose width is drawn from `widths` with the given
/// relative `weights` (same length, need not sum to 1).
pub fn random_spacing<R: Rng + ?Sized>(
    rng: &mut R,
    widths: &[usize],
    weights: &[f64],
) -> Result<String, GenError> {
    if widths.len() != weights.len() {
        return Err(GenError::Weights(format!(
            "{} widths but {} weights",
            widths.len(),
            weights.len()
        )));
    }
    let dist = WeightedIndex::new(weights).map_err(|e| GenError::Weights(e.to_string()))?;
    Ok(" ".repeat(widths[dist.sample(rng)]))
}

/// Draws `k` distinct indices from `0..weights.len()`, each draw proportional
/// to the weights of the items still remaining. Returned in draw order.
pub fn sample_weighted_distinct<R: Rng + ?Sized>(
    rng: &mut R,
    weights: &[f64],
    k: usize,
) -> Result<Vec<usize>, GenError> {
    if k > weights.len() {
        return Err(GenError::Weights(format!(
            "cannot draw {k} distinct items from {}",
            weights.len()
        )));
    }
    let mut remaining: Vec<usize> = (0..weights.len()).collect();
    let mut picked = Vec::with_capacity(k);
    for _ in 0..k {
        let dist = WeightedIndex::new(remaining.iter().map(|&i| weights[i]))
            .map_err(|e| GenError::Weights(e.to_string()))?;
        let slot = dist.sample(rng);
        picked.push(remaining.swap_remove(slot));
    }
    Ok(picked)
}

/// Draws `k` distinct integers uniformly from `[lo, hi)`, in draw order.
/// `k` is clamped to the size of the range.
pub fn sample_distinct_range<R: Rng + ?Sized>(
    rng: &mut R,
    lo: u32,
    hi: u32,
    k: usize,
) -> Vec<u32> {
    let len = hi.saturating_sub(lo) as usize;
    rand::seq::index::sample(rng, len, k.min(len))
        .into_iter()
        .map(|i| lo + i as u32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn weighted_count_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let n = weighted_count(&mut rng, 10, None, 5, (7, 11), 3).unwrap();
            assert!((5..=10).contains(&n), "out of bounds: {n}");
        }
    }

    #[test]
    fn weighted_count_rejects_empty_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = weighted_count(&mut rng, 3, None, 5, (7, 11), 3).unwrap_err();
        assert_eq!(err, GenError::InvalidRange { max: 3, start: 5 });
    }

    #[test]
    fn weighted_count_honors_ceiling() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let n = weighted_count(&mut rng, 50, Some(9), 5, (3, 5), 3).unwrap();
            assert!((5..=9).contains(&n), "ceiling ignored: {n}");
        }
    }

    #[test]
    fn weighted_count_prefers_the_boosted_band() {
        let mut rng = StdRng::seed_from_u64(13);
        let hits = (0..2000)
            .filter(|_| {
                let n = weighted_count(&mut rng, 20, None, 5, (7, 11), 3).unwrap();
                (8..=11).contains(&n)
            })
            .count();
        // 4 boosted values at weight 3 vs 12 plain: expected share 12/24.
        assert!(hits > 700, "boosted band underrepresented: {hits}/2000");
    }

    #[test]
    fn random_spacing_length_comes_from_the_width_set() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let s = random_spacing(&mut rng, &[1, 2, 3, 4], &[0.6, 0.2, 0.1, 0.1]).unwrap();
            assert!(s.chars().all(|c| c == ' '));
            assert!((1..=4).contains(&s.len()), "width {} not in set", s.len());
        }
    }

    #[test]
    fn random_spacing_rejects_mismatched_tables() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(random_spacing(&mut rng, &[1, 2], &[1.0]).is_err());
    }

    #[test]
    fn sample_weighted_distinct_returns_distinct_indices() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..200 {
            let mut picks =
                sample_weighted_distinct(&mut rng, &[0.3, 0.2, 0.2, 0.1, 0.1, 0.05, 0.05], 3)
                    .unwrap();
            assert_eq!(picks.len(), 3);
            picks.sort_unstable();
            picks.dedup();
            assert_eq!(picks.len(), 3, "duplicate index drawn");
        }
    }

    #[test]
    fn sample_weighted_distinct_skips_zero_weight_items() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..200 {
            let picks = sample_weighted_distinct(&mut rng, &[0.0, 1.0, 1.0], 2).unwrap();
            assert!(!picks.contains(&0), "zero-weight item drawn");
        }
    }

    #[test]
    fn sample_distinct_range_covers_the_half_open_band() {
        let mut rng = StdRng::seed_from_u64(29);
        let mut picks = sample_distinct_range(&mut rng, 10, 15, 5);
        picks.sort_unstable();
        assert_eq!(picks, vec![10, 11, 12, 13, 14]);
    }
}
