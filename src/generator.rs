//! The per-book generation orchestrator.
//!
//! One pass over a book draws its layout and noise toggles, picks a chapter
//! subset, threads a contiguous page range through the emitted chapters, and
//! accumulates the rendered prompt and the JSON label in lockstep.

use log::debug;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use tocgen_types::{Book, Chapter, Sample};

use crate::chapter_layout::{ChapterLayout, format_chapter, generate_chapter_layout};
use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::labels::format_label;
use crate::noise::{self, NoiseKind, SystemicNoiseLayout};
use crate::sampling::{sample_distinct_range, weighted_count};
use crate::subchapter_layout::format_subchapter;

const FIRST_PAGE_NUMBERS: [u32; 5] = [1, 2, 3, 4, 5];
const FIRST_PAGE_WEIGHTS: [u32; 5] = [6, 3, 3, 1, 1];

// Chapter page spans come from [5, 60), with [15, 35] three times as likely.
const PAGE_SPAN_MIN: u32 = 5;
const PAGE_SPAN_MAX: u32 = 60;
const PAGE_SPAN_BOOST_LO: u32 = 15;
const PAGE_SPAN_BOOST_HI: u32 = 35;
const PAGE_SPAN_BOOST: u32 = 3;

// Chapter subset sizing: at least 5, with (7, 11] boosted 3x.
const CHAPTER_SUBSET_START: u32 = 5;
const CHAPTER_SUBSET_BAND: (u32, u32) = (7, 11);
const CHAPTER_SUBSET_MULTIPLIER: u32 = 3;

const LABEL_OPEN: &str = "```json\n[\n";
const LABEL_CLOSE: &str = "\n]\n```";

/// Book-level toggles drawn once and reused for every chapter of a book.
struct BookPlan {
    layout: ChapterLayout,
    systemic: Option<SystemicNoiseLayout>,
    add_subchapters: bool,
    subchapter_numbers: bool,
    subchapter_pages: bool,
}

pub struct SyntheticGenerator {
    config: GeneratorConfig,
}

impl SyntheticGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates one [`Sample`] per input book, in input order.
    ///
    /// `toc_noise` is the corpus the text-noise kind samples its phrases
    /// from. A book with no chapters aborts the whole batch with
    /// [`GenError::InvalidRange`]; there is no partial output.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        books: &[Book],
        toc_noise: &[String],
    ) -> Result<Vec<Sample>, GenError> {
        books
            .iter()
            .map(|book| self.generate_book(rng, book, toc_noise))
            .collect()
    }

    fn generate_book<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        book: &Book,
        toc_noise: &[String],
    ) -> Result<Sample, GenError> {
        debug!("new book: {}", book.name);
        let chapter_count = book.chapter_count() as u32;

        let plan = self.draw_book_plan(rng)?;

        // Books below the sampler floor emit all of their chapters; an empty
        // book is malformed and fails the batch.
        let subset_size = if chapter_count < CHAPTER_SUBSET_START {
            if chapter_count == 0 {
                return Err(GenError::InvalidRange {
                    max: 0,
                    start: CHAPTER_SUBSET_START,
                });
            }
            chapter_count
        } else {
            weighted_count(
                rng,
                chapter_count,
                None,
                CHAPTER_SUBSET_START,
                CHAPTER_SUBSET_BAND,
                CHAPTER_SUBSET_MULTIPLIER,
            )?
        };
        // Draw order is emission order; labels re-index from 1 regardless of
        // the source numbering.
        let chapter_ids = sample_distinct_range(rng, 1, chapter_count + 1, subset_size as usize);

        let first_page_dist =
            WeightedIndex::new(FIRST_PAGE_WEIGHTS).map_err(|e| GenError::Weights(e.to_string()))?;
        let span_numbers: Vec<u32> = (PAGE_SPAN_MIN..PAGE_SPAN_MAX).collect();
        let span_dist = WeightedIndex::new(span_numbers.iter().map(|&n| {
            if (PAGE_SPAN_BOOST_LO..=PAGE_SPAN_BOOST_HI).contains(&n) {
                PAGE_SPAN_BOOST
            } else {
                1
            }
        }))
        .map_err(|e| GenError::Weights(e.to_string()))?;

        let mut prompt = String::new();
        let mut label = String::from(LABEL_OPEN);
        let mut prev_end_page: Option<u32> = None;
        let mut emitted = 0u32;

        for &chapter_id in &chapter_ids {
            // Gappy source numbering can leave a drawn identifier unmatched;
            // it is skipped, shrinking the emitted subset.
            let Some(chapter) = book.chapters.iter().find(|c| c.number == chapter_id) else {
                continue;
            };
            emitted += 1;
            let chapter_number = emitted;

            let start_page = match prev_end_page {
                None => FIRST_PAGE_NUMBERS[first_page_dist.sample(rng)],
                Some(end) => end + 1,
            };
            let end_page = start_page + span_numbers[span_dist.sample(rng)];
            prev_end_page = Some(end_page);
            debug!(
                "chapter {chapter_number} ({:?}): pages {start_page}..{end_page}",
                chapter.title
            );

            label.push_str(&format_label(
                chapter_number,
                &chapter.title,
                start_page,
                end_page,
            ));
            prompt.push_str(&format_chapter(
                rng,
                plan.layout,
                &chapter.title,
                chapter_number,
                start_page,
            )?);
            prompt.push('\n');

            if let Some(systemic) = &plan.systemic {
                prompt.push_str(&noise::format_systemic_noise(
                    rng, systemic, start_page, end_page, toc_noise,
                )?);
            }

            if chance(rng, self.config.chapter_random_noise) {
                prompt.push_str(&noise::random_noise(rng, NoiseKind::Random, toc_noise));
                prompt.push('\n');
            }

            if plan.add_subchapters && !chapter.subchapters.is_empty() {
                self.emit_subchapters(
                    rng,
                    chapter,
                    chapter_number,
                    start_page,
                    end_page,
                    &plan,
                    toc_noise,
                    &mut prompt,
                )?;
            }
        }

        if label.ends_with(",\n") {
            label.truncate(label.len() - 2);
        }
        label.push_str(LABEL_CLOSE);

        Ok(Sample { prompt, label })
    }

    fn draw_book_plan<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<BookPlan, GenError> {
        let layout = generate_chapter_layout(rng)?;
        let systemic = if chance(rng, self.config.chapter_systemic_noise) {
            Some(noise::generate_systemic_noise_layout(rng)?)
        } else {
            None
        };
        let add_subchapters = chance(rng, self.config.add_subchapter);
        let (subchapter_numbers, subchapter_pages) = if add_subchapters {
            (rng.random_bool(0.15), rng.random_bool(0.25))
        } else {
            (false, false)
        };
        Ok(BookPlan {
            layout,
            systemic,
            add_subchapters,
            subchapter_numbers,
            subchapter_pages,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn emit_subchapters<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        chapter: &Chapter,
        chapter_number: u32,
        start_page: u32,
        end_page: u32,
        plan: &BookPlan,
        toc_noise: &[String],
        prompt: &mut String,
    ) -> Result<(), GenError> {
        let available = chapter.subchapter_count() as u32;
        let mut count = rng.random_range(1..=available);

        // Pages are drawn without replacement from [start_page, end_page), so
        // the span bounds how many subchapters can render. A span too small
        // to leave room skips subchapters for this chapter entirely.
        let page_span = end_page - start_page;
        if page_span <= count {
            count = page_span.saturating_sub(2);
        }
        if count == 0 {
            return Ok(());
        }

        let picks = rand::seq::index::sample(rng, available as usize, count as usize);
        let mut pages = sample_distinct_range(rng, start_page, end_page, count as usize);
        pages.sort_unstable();

        // Positional numbering: the k-th emitted subchapter is labelled
        // `<chapter>.<k>` no matter which source subchapter it came from.
        for (slot, pick) in picks.into_iter().enumerate() {
            let subchapter = &chapter.subchapters[pick];
            let positional = format!("{}.{}", chapter_number, slot + 1);
            prompt.push_str(&format_subchapter(
                rng,
                &subchapter.title,
                &positional,
                pages[slot],
                plan.subchapter_numbers,
                plan.subchapter_pages,
            )?);
            if chance(rng, self.config.subchapter_random_noise) {
                prompt.push_str(&noise::random_noise(rng, NoiseKind::Subchapters, toc_noise));
                prompt.push('\n');
            }
        }
        Ok(())
    }
}

fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.random_bool(p.clamp(0.0, 1.0))
}
