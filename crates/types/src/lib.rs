pub mod book;
pub mod sample;

pub use book::{Book, Chapter, Subchapter};
pub use sample::Sample;
