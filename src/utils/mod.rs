pub mod text;

pub use text::{CARD_MAX_WORDS, truncate_chars, truncate_words};
