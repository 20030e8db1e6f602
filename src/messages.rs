//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::notebook::EditorId;
use crate::model::range::{Selection, TextRange};
use crate::search::SearchSpec;
use crate::syntax::LanguageId;

/// Messages addressed to one cell editor
#[derive(Debug, Clone)]
pub enum EditorMsg {
    // === Editing ===
    /// Insert text at a byte offset
    InsertText { offset: usize, text: String },
    /// Delete a byte range
    DeleteRange(TextRange),
    /// Replace a byte range with new text
    ReplaceRange { range: TextRange, text: String },

    // === Selection ===
    /// Replace all selections
    SetSelections(Vec<Selection>),
    /// Collapse to a single cursor
    SetCursor(usize),

    // === Viewport ===
    /// Scroll so the given line is at the top
    ScrollTo(usize),
    /// Scroll viewport vertically (positive = down, negative = up)
    Scroll(i32),
    /// Viewport height changed
    Resize(usize),
    /// Fold the lines after `start_line` up to and including `end_line`
    Fold { start_line: usize, end_line: usize },
    /// Remove the fold starting at a line
    Unfold(usize),

    // === Search ===
    /// Set this editor's query without touching the others
    SetQuery(SearchSpec),
    /// Clear this editor's query
    ClearQuery,

    // === Navigation ===
    /// Jump to the first identifier with this name
    GoToDefinition(String),

    /// Take keyboard focus
    Focus,
    /// Toggle read-only
    SetReadOnly(bool),
}

/// Global search messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMsg {
    /// Push the global find/replace parameters to every writable editor
    Broadcast,
    /// Clear every writable editor, whatever the find panel holds
    Clear,
}

/// Notebook structure messages
#[derive(Debug, Clone)]
pub enum NotebookMsg {
    /// Append a cell
    AddCell {
        text: String,
        language: LanguageId,
        read_only: bool,
    },
    /// Remove a cell
    RemoveCell(EditorId),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Editor(EditorId, EditorMsg),
    Search(SearchMsg),
    Notebook(NotebookMsg),
}
