use serde::{Deserialize, Serialize};

/// A parsed book: the structured input one generation pass consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub name: String,
    /// Chapters in source order. Source numbering may be non-contiguous.
    pub chapters: Vec<Chapter>,
}

impl Book {
    /// Number of parsed chapters, used to size the random chapter subset.
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }
}

/// One chapter of a parsed book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    /// Source chapter number, not necessarily contiguous across the book.
    pub number: u32,
    pub title: String,
    pub subchapters: Vec<Subchapter>,
}

impl Chapter {
    pub fn subchapter_count(&self) -> usize {
        self.subchapters.len()
    }
}

/// One subchapter, numbered `"<chapter>.<k>"` in the source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subchapter {
    pub number: String,
    pub title: String,
}
