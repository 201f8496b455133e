//! Per-book chapter line formatting.
//!
//! A book picks one [`ChapterLayout`] up front and reuses it for every
//! chapter line, so a generated document keeps a consistent visual shape.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::error::GenError;
use crate::sampling::random_spacing;

/// How the chapter number is rendered at the start of a chapter line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    /// `"Chapter 1: Title"`
    ChapterColon,
    /// `"1. Title"`
    Dotted,
    /// `"1 Title"`
    Bare,
    /// `"chapter 1 Title"`
    LowercaseChapter,
    /// `"Chapter 1 Title"`
    ChapterSpace,
}

impl NumberStyle {
    const CHOICES: [(NumberStyle, f64); 5] = [
        (NumberStyle::ChapterColon, 0.10),
        (NumberStyle::Dotted, 0.40),
        (NumberStyle::Bare, 0.40),
        (NumberStyle::LowercaseChapter, 0.05),
        (NumberStyle::ChapterSpace, 0.05),
    ];

    fn render(self, number: u32) -> String {
        match self {
            NumberStyle::ChapterColon => format!("Chapter {number}: "),
            NumberStyle::Dotted => format!("{number}. "),
            NumberStyle::Bare => format!("{number} "),
            NumberStyle::LowercaseChapter => format!("chapter {number} "),
            NumberStyle::ChapterSpace => format!("Chapter {number} "),
        }
    }
}

/// The formatting choices a book makes once for all of its chapter lines.
#[derive(Debug, Clone, Copy)]
pub struct ChapterLayout {
    pub number_style: NumberStyle,
    /// When set, the page number renders on its own line below the title.
    pub nextline_page_number: bool,
}

pub fn generate_chapter_layout<R: Rng + ?Sized>(rng: &mut R) -> Result<ChapterLayout, GenError> {
    let dist = WeightedIndex::new(NumberStyle::CHOICES.iter().map(|&(_, w)| w))
        .map_err(|e| GenError::Weights(e.to_string()))?;
    Ok(ChapterLayout {
        number_style: NumberStyle::CHOICES[dist.sample(rng)].0,
        nextline_page_number: rng.random_bool(0.15),
    })
}

const PAGE_SPACER_WEIGHTS: [f64; 6] = [0.5, 0.2, 0.1, 0.1, 0.05, 0.05];
const NEXTLINE_WIDTHS: [usize; 6] = [0, 1, 2, 3, 4, 5];
const INLINE_WIDTHS: [usize; 6] = [1, 2, 3, 4, 5, 6];

/// Renders one chapter line: templated number, title, then the start page
/// either inline after a random gap or on its own following line.
pub fn format_chapter<R: Rng + ?Sized>(
    rng: &mut R,
    layout: ChapterLayout,
    title: &str,
    number: u32,
    page_start: u32,
) -> Result<String, GenError> {
    let page = if layout.nextline_page_number {
        format!(
            "\n{}{page_start}",
            random_spacing(rng, &NEXTLINE_WIDTHS, &PAGE_SPACER_WEIGHTS)?
        )
    } else {
        format!(
            "{}{page_start}",
            random_spacing(rng, &INLINE_WIDTHS, &PAGE_SPACER_WEIGHTS)?
        )
    };
    Ok(format!("{}{title}{page}", layout.number_style.render(number)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn inline_layout_keeps_the_page_on_the_same_line() {
        let mut rng = StdRng::seed_from_u64(1);
        let layout = ChapterLayout {
            number_style: NumberStyle::Dotted,
            nextline_page_number: false,
        };
        let line = format_chapter(&mut rng, layout, "Origins", 3, 42).unwrap();
        assert!(line.starts_with("3. Origins"));
        assert!(!line.contains('\n'));
        assert!(line.ends_with("42"));
    }

    #[test]
    fn nextline_layout_moves_the_page_below_the_title() {
        let mut rng = StdRng::seed_from_u64(1);
        let layout = ChapterLayout {
            number_style: NumberStyle::ChapterColon,
            nextline_page_number: true,
        };
        let line = format_chapter(&mut rng, layout, "Origins", 1, 7).unwrap();
        let (head, tail) = line.split_once('\n').unwrap();
        assert_eq!(head, "Chapter 1: Origins");
        assert_eq!(tail.trim_start(), "7");
    }

    #[test]
    fn every_number_style_renders_its_template() {
        assert_eq!(NumberStyle::ChapterColon.render(4), "Chapter 4: ");
        assert_eq!(NumberStyle::Dotted.render(4), "4. ");
        assert_eq!(NumberStyle::Bare.render(4), "4 ");
        assert_eq!(NumberStyle::LowercaseChapter.render(4), "chapter 4 ");
        assert_eq!(NumberStyle::ChapterSpace.render(4), "Chapter 4 ");
    }

    #[test]
    fn generated_layouts_only_use_known_styles() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let layout = generate_chapter_layout(&mut rng).unwrap();
            assert!(NumberStyle::CHOICES.iter().any(|&(s, _)| s == layout.number_style));
        }
    }
}
