//! Tree-sitter parser state
//!
//! Owns one parser per language and caches the last tree of every editor so
//! that re-parsing after an edit is incremental.

use std::collections::HashMap;
use std::fmt;

use tree_sitter::{InputEdit, Language, Parser, Point, Tree};

use super::languages::LanguageId;
use crate::model::notebook::EditorId;

/// Cached parse state for an editor (enables incremental parsing)
struct CachedParse {
    /// The language this tree was parsed with
    language: LanguageId,
    /// The parsed tree
    tree: Tree,
    /// The source text that was parsed (needed for computing edits)
    source: String,
}

/// Convert a byte offset to a tree-sitter Point (row, column in bytes)
fn byte_to_point(text: &str, byte_offset: usize) -> Point {
    let mut row = 0usize;
    let mut col = 0usize;

    for &byte in text.as_bytes().iter().take(byte_offset) {
        if byte == b'\n' {
            row += 1;
            col = 0;
        } else {
            col += 1;
        }
    }

    Point { row, column: col }
}

/// Compute an InputEdit by diffing old and new source text.
/// Returns None if the sources are identical.
fn compute_incremental_edit(old_src: &str, new_src: &str) -> Option<InputEdit> {
    if old_src == new_src {
        return None;
    }

    let old_bytes = old_src.as_bytes();
    let new_bytes = new_src.as_bytes();

    // Common prefix
    let mut start = 0;
    let max_start = old_bytes.len().min(new_bytes.len());
    while start < max_start && old_bytes[start] == new_bytes[start] {
        start += 1;
    }

    // Common suffix, not overlapping the prefix
    let mut old_end = old_bytes.len();
    let mut new_end = new_bytes.len();
    while old_end > start && new_end > start && old_bytes[old_end - 1] == new_bytes[new_end - 1] {
        old_end -= 1;
        new_end -= 1;
    }

    Some(InputEdit {
        start_byte: start,
        old_end_byte: old_end,
        new_end_byte: new_end,
        start_position: byte_to_point(old_src, start),
        old_end_position: byte_to_point(old_src, old_end),
        new_end_position: byte_to_point(new_src, new_end),
    })
}

fn ts_language(language: LanguageId) -> Option<Language> {
    match language {
        LanguageId::Python => Some(tree_sitter_python::LANGUAGE.into()),
        LanguageId::JavaScript => Some(tree_sitter_javascript::LANGUAGE.into()),
        LanguageId::Rust => Some(tree_sitter_rust::LANGUAGE.into()),
        LanguageId::PlainText => None,
    }
}

/// Parser instances and per-editor tree cache (tree-sitter parsers are !Sync)
pub struct ParserState {
    parsers: HashMap<LanguageId, Parser>,
    cache: HashMap<EditorId, CachedParse>,
}

impl fmt::Debug for ParserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserState")
            .field("languages", &self.parsers.keys().collect::<Vec<_>>())
            .field("cached_editors", &self.cache.len())
            .finish()
    }
}

impl Default for ParserState {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserState {
    /// Create a new parser state with every supported language initialized
    pub fn new() -> Self {
        let mut state = Self {
            parsers: HashMap::new(),
            cache: HashMap::new(),
        };
        state.init_language(LanguageId::Python);
        state.init_language(LanguageId::JavaScript);
        state.init_language(LanguageId::Rust);
        state
    }

    fn init_language(&mut self, lang: LanguageId) {
        let Some(ts_lang) = ts_language(lang) else {
            return;
        };
        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&ts_lang) {
            tracing::error!("Failed to set language for {:?}: {}", lang, e);
            return;
        }
        self.parsers.insert(lang, parser);
    }

    /// Parse an editor's source, reusing its cached tree when possible.
    /// Returns `None` for plain text or if parsing fails.
    pub fn parse(&mut self, editor: EditorId, source: &str, language: LanguageId) -> Option<Tree> {
        if !language.has_parser() {
            self.cache.remove(&editor);
            return None;
        }

        let Some(parser) = self.parsers.get_mut(&language) else {
            tracing::warn!("No parser for language {:?}", language);
            return None;
        };

        if let Some(cached) = self.cache.get_mut(&editor) {
            if cached.language == language {
                let Some(edit) = compute_incremental_edit(&cached.source, source) else {
                    tracing::trace!("Source unchanged, reusing cached tree");
                    return Some(cached.tree.clone());
                };

                cached.tree.edit(&edit);
                tracing::trace!(
                    "Incremental parse for {:?}: edit at byte {}..{} -> {}..{}",
                    editor,
                    edit.start_byte,
                    edit.old_end_byte,
                    edit.start_byte,
                    edit.new_end_byte
                );

                if let Some(tree) = parser.parse(source, Some(&cached.tree)) {
                    cached.tree = tree.clone();
                    cached.source = source.to_owned();
                    return Some(tree);
                }
                tracing::warn!(
                    "Incremental parse failed for {:?}, falling back to full parse",
                    language
                );
            } else {
                tracing::debug!(
                    "Language changed from {:?} to {:?}, doing full parse",
                    cached.language,
                    language
                );
            }
            self.cache.remove(&editor);
        }

        let Some(tree) = parser.parse(source, None) else {
            tracing::error!("Parse failed for {:?}", language);
            return None;
        };
        self.cache.insert(
            editor,
            CachedParse {
                language,
                tree: tree.clone(),
                source: source.to_owned(),
            },
        );
        Some(tree)
    }

    /// Drop the cached tree of an editor (call when the editor is removed)
    pub fn forget(&mut self, editor: EditorId) {
        self.cache.remove(&editor);
    }
}
