//! Find/replace parameters shared by every cell editor
//!
//! The find/replace panel owns this record and writes to it. Search code only
//! ever reads it: at editor creation and on an explicit broadcast.

use serde::{Deserialize, Serialize};

/// The global find/replace record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindReplaceState {
    /// Text typed into the find field
    pub find_text: String,
    /// Text typed into the replace field
    pub replace_text: String,
    /// Case-sensitive search
    pub case_sensitive: bool,
    /// Treat the find text as a regular expression
    pub regexp: bool,
    /// Only match whole words
    pub whole_word: bool,
    /// Take the find and replace text verbatim, without `\n`-style escapes
    pub literal: bool,
}

impl FindReplaceState {
    /// Create a plain, case-insensitive search for `text`
    pub fn with_find_text(text: impl Into<String>) -> Self {
        Self {
            find_text: text.into(),
            ..Self::default()
        }
    }
}
