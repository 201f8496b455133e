use std::sync::LazyLock;

use regex::Regex;
use tocgen_types::{Book, Chapter, Subchapter};

static BOOK_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.\s+(.+)").expect("BUG: invalid BOOK_TITLE_RE regex literal")
});

static CHAPTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[•*]?\s*Chapter\s+(\d+):\s+(.+)$")
        .expect("BUG: invalid CHAPTER_RE regex literal")
});

static SUBCHAPTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.(\d+)\s+(.+)$").expect("BUG: invalid SUBCHAPTER_RE regex literal")
});

/// Scans `text` line by line and returns every book found, in input order.
///
/// A chapter line outside any book, or a subchapter line outside any chapter,
/// is skipped, as is any line matching none of the three patterns. The book
/// pattern is checked first, so `"3.1 Title"` lands on the subchapter arm
/// only because the book pattern requires whitespace right after the dot.
pub fn parse_structured_toc(text: &str) -> Vec<Book> {
    let mut books: Vec<Book> = Vec::new();
    let mut in_chapter = false;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(caps) = BOOK_TITLE_RE.captures(line) {
            books.push(Book {
                id: caps[1].parse().unwrap_or(0),
                name: caps[2].trim().to_string(),
                chapters: Vec::new(),
            });
            in_chapter = false;
        } else if let Some(caps) = CHAPTER_RE.captures(line) {
            if let Some(book) = books.last_mut() {
                book.chapters.push(Chapter {
                    number: caps[1].parse().unwrap_or(0),
                    title: caps[2].trim().to_string(),
                    subchapters: Vec::new(),
                });
                in_chapter = true;
            }
        } else if let Some(caps) = SUBCHAPTER_RE.captures(line) {
            if in_chapter
                && let Some(chapter) = books.last_mut().and_then(|b| b.chapters.last_mut())
            {
                chapter.subchapters.push(Subchapter {
                    number: format!("{}.{}", &caps[1], &caps[2]),
                    title: caps[3].trim().to_string(),
                });
            }
        }
    }

    books
}
