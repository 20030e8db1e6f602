//! Utility modules

pub mod text;

pub use text::{ceil_char_boundary, floor_char_boundary, is_whole_word, is_word_char, unquote};
