use serde::{Deserialize, Serialize};

/// One rendered training sample: a synthetic TOC text and its ground truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    /// The full synthetic table-of-contents text for one book.
    pub prompt: String,
    /// A fenced JSON array string, one object per emitted chapter, holding
    /// `chapter_number`, `chapter_title`, `start_page` and `end_page`.
    pub label: String,
}
