//! # tocgen
//!
//! Synthetic table-of-contents sample generator. One pass turns a collection
//! of parsed [`Book`] records into `(prompt, label)` pairs: the prompt is a
//! randomized TOC rendering with layered noise, the label is the fenced JSON
//! ground truth for the chapters that were emitted.
//!
//! - **sampling**: weighted range picks, variable-width spacing, weighted
//!   distinct subsets
//! - **chapter_layout / subchapter_layout**: per-book line formatting styles
//! - **noise**: ad hoc clutter fragments and the recurring fake back-matter
//!   sections
//! - **labels**: the JSON ground-truth fragment formatter
//! - **generator**: the per-book orchestrator tying it all together
//!
//! All randomness flows through an explicit `&mut R where R: rand::Rng`
//! handle, so callers seed a [`rand::rngs::StdRng`] for deterministic output.

pub mod chapter_layout;
pub mod config;
pub mod error;
pub mod generator;
pub mod labels;
pub mod noise;
pub mod sampling;
pub mod subchapter_layout;

// Re-export foundation crates
pub use tocgen_parser::parse_structured_toc;
pub use tocgen_types::{Book, Chapter, Sample, Subchapter};

pub use config::GeneratorConfig;
pub use error::GenError;
pub use generator::SyntheticGenerator;
