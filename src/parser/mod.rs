//! Parser module: HTML normalization and text tokenization

pub mod html;
pub mod text;

pub use html::{decode_text, Anchor, Block, Heading, Image, NormalizedView};
pub use text::{count_occurrences, slugify, split_sentences, syllable_count, word_count, words};
