//! Parser for the constrained TOC interchange format.
//!
//! The format is line-oriented: `"<id>. <name>"` opens a book,
//! `"Chapter <n>: <title>"` opens a chapter within the current book, and
//! `"<n>.<k> <title>"` appends a subchapter to the current chapter. Lines
//! matching none of the three patterns are skipped.

mod scanner;

pub use scanner::parse_structured_toc;
