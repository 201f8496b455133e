//! Clutter generators.
//!
//! Two families live here. The ad hoc kinds ([`NoiseKind`]) produce one small
//! fragment each: stray symbols, digit runs, page-number look-alikes, filler
//! glyph rows, or word subsets lifted from a caller-supplied corpus of real
//! TOC phrases. Systemic noise is different: a book-level layout of recurring
//! fake back-matter sections ("References", "Exercises", …) re-rendered after
//! every chapter line, simulating the structural clutter real scans carry.

use itertools::Itertools;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::error::GenError;
use crate::sampling::{random_spacing, sample_weighted_distinct};

const SYMBOLS: &[u8] = b"!@#$%^&*()[]{}|;:,.<>?/~`_+-=";

const FORMATS: [&str; 12] = [
    "...............",
    "_______________",
    "---------------",
    "===============",
    "***************",
    "###############",
    "|||||||||||||||",
    "               ",
    "\t\t\t\t",
    "• • • • • • • •",
    "→ → → → → → →",
    "※ ※ ※ ※ ※ ※",
];

/// The selectable clutter categories. `Random` and `Subchapters` are
/// meta-kinds that uniformly pick among fixed subsets of the concrete ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseKind {
    Symbols,
    Numbers,
    PageNumbers,
    Formatting,
    Text,
    /// Uniformly one of the five concrete kinds.
    Random,
    /// Uniformly one of the kinds that read well between subchapter lines.
    Subchapters,
}

/// 1 to 3 random punctuation/symbol characters.
pub fn symbol_noise<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.random_range(1..=3);
    (0..len)
        .map(|_| SYMBOLS[rng.random_range(0..SYMBOLS.len())] as char)
        .collect()
}

/// 1 to 4 random decimal digits.
pub fn number_noise<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.random_range(1..=4);
    (0..len).map(|_| rng.random_range(b'0'..=b'9') as char).collect()
}

/// One of six realistic page-number shapes with numbers drawn from 1..=999.
pub fn page_number_noise<R: Rng + ?Sized>(rng: &mut R) -> String {
    let n = rng.random_range(1..=999);
    match rng.random_range(0..6) {
        0 => format!("Page {n}"),
        1 => format!("p. {n}"),
        2 => format!("pp. {n}-{}", rng.random_range(1..=999)),
        3 => format!("{n}"),
        4 => format!("[{n}]"),
        _ => format!("({n})"),
    }
}

/// One of twelve literal filler rows (dot leaders, rules, bullets, tabs, …).
pub fn formatting_noise<R: Rng + ?Sized>(rng: &mut R) -> String {
    FORMATS[rng.random_range(0..FORMATS.len())].to_string()
}

/// A random non-empty word subset of one random corpus phrase, original word
/// order preserved, rejoined with single spaces. Falls back to an empty
/// string when the corpus (or the chosen phrase) has nothing to offer.
pub fn text_noise<R: Rng + ?Sized>(rng: &mut R, corpus: &[String]) -> String {
    if corpus.is_empty() {
        return String::new();
    }
    let phrase = &corpus[rng.random_range(0..corpus.len())];
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.is_empty() {
        return String::new();
    }
    let keep = rng.random_range(1..=words.len());
    let mut ids = rand::seq::index::sample(rng, words.len(), keep).into_vec();
    ids.sort_unstable();
    ids.into_iter().map(|i| words[i]).join(" ")
}

/// Produces one clutter fragment of the requested kind.
pub fn random_noise<R: Rng + ?Sized>(rng: &mut R, kind: NoiseKind, corpus: &[String]) -> String {
    const ALL: [NoiseKind; 5] = [
        NoiseKind::Symbols,
        NoiseKind::Numbers,
        NoiseKind::PageNumbers,
        NoiseKind::Formatting,
        NoiseKind::Text,
    ];
    const BETWEEN_SUBCHAPTERS: [NoiseKind; 3] =
        [NoiseKind::Symbols, NoiseKind::Numbers, NoiseKind::Text];

    match kind {
        NoiseKind::Symbols => symbol_noise(rng),
        NoiseKind::Numbers => number_noise(rng),
        NoiseKind::PageNumbers => page_number_noise(rng),
        NoiseKind::Formatting => formatting_noise(rng),
        NoiseKind::Text => text_noise(rng, corpus),
        NoiseKind::Random => {
            let kind = ALL[rng.random_range(0..ALL.len())];
            random_noise(rng, kind, corpus)
        }
        NoiseKind::Subchapters => {
            let kind = BETWEEN_SUBCHAPTERS[rng.random_range(0..BETWEEN_SUBCHAPTERS.len())];
            random_noise(rng, kind, corpus)
        }
    }
}

/// The recurring-section vocabulary systemic noise draws from.
pub const SECTION_VOCABULARY: [&str; 7] = [
    "Exercises",
    "References",
    "Bibliography",
    "Notes",
    "Further Reading",
    "Contents",
    "Tables",
];
const SECTION_WEIGHTS: [f64; 7] = [0.3, 0.2, 0.2, 0.1, 0.1, 0.05, 0.05];
const SECTION_COUNT_WEIGHTS: [f64; 3] = [0.5, 0.35, 0.15];

const DEFAULT_SPACER_WIDTHS: [usize; 4] = [1, 2, 3, 4];
const DEFAULT_SPACER_WEIGHTS: [f64; 4] = [0.6, 0.2, 0.1, 0.1];

/// A book's recurring fake back-matter sections: 1 to 3 distinct names and a
/// per-section flag for whether a trailing page number renders.
#[derive(Debug, Clone)]
pub struct SystemicNoiseLayout {
    pub sections: Vec<&'static str>,
    pub add_numbers: Vec<bool>,
}

pub fn generate_systemic_noise_layout<R: Rng + ?Sized>(
    rng: &mut R,
) -> Result<SystemicNoiseLayout, GenError> {
    let count_dist = WeightedIndex::new(SECTION_COUNT_WEIGHTS)
        .map_err(|e| GenError::Weights(e.to_string()))?;
    let count = 1 + count_dist.sample(rng);
    let sections = sample_weighted_distinct(rng, &SECTION_WEIGHTS, count)?
        .into_iter()
        .map(|i| SECTION_VOCABULARY[i])
        .collect();
    let add_numbers = (0..count).map(|_| rng.random_bool(0.3)).collect();
    Ok(SystemicNoiseLayout {
        sections,
        add_numbers,
    })
}

/// Renders the systemic sections for one chapter.
///
/// A 30% coin decides whether one whole corpus phrase is spliced at a random
/// position among the sections. Has-number sections draw their page without
/// replacement from `[start_page, end_page)`; the first draw narrows the band
/// to `end_page - 2` to bias away from exact chapter-end collisions. An empty
/// or exhausted band renders as an empty string.
pub fn format_systemic_noise<R: Rng + ?Sized>(
    rng: &mut R,
    layout: &SystemicNoiseLayout,
    start_page: u32,
    end_page: u32,
    corpus: &[String],
) -> Result<String, GenError> {
    let splice = if rng.random_bool(0.3) && !corpus.is_empty() {
        // position may land past the last section, in which case nothing shows
        Some((
            rng.random_range(0..=layout.sections.len()),
            corpus[rng.random_range(0..corpus.len())].as_str(),
        ))
    } else {
        None
    };

    let mut out = String::new();
    let mut used: Vec<u32> = Vec::new();

    for (idx, section) in layout.sections.iter().enumerate() {
        if let Some((pos, phrase)) = splice
            && pos == idx
        {
            out.push_str(&random_spacing(rng, &DEFAULT_SPACER_WIDTHS, &DEFAULT_SPACER_WEIGHTS)?);
            out.push_str(phrase);
            out.push('\n');
        }

        let mut number = String::new();
        if layout.add_numbers[idx] {
            let hi = if used.is_empty() {
                end_page.saturating_sub(2)
            } else {
                end_page
            };
            if let Some(n) = draw_unused_page(rng, start_page, hi, &used) {
                used.push(n);
                number = n.to_string();
            }
        }

        out.push_str(section);
        out.push_str(&random_spacing(rng, &DEFAULT_SPACER_WIDTHS, &DEFAULT_SPACER_WEIGHTS)?);
        out.push_str(&number);
        out.push('\n');
    }
    Ok(out)
}

fn draw_unused_page<R: Rng + ?Sized>(
    rng: &mut R,
    start: u32,
    end: u32,
    used: &[u32],
) -> Option<u32> {
    let candidates: Vec<u32> = (start..end).filter(|n| !used.contains(n)).collect();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}
