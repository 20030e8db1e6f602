//! Editor state - one cell editor: document, selections, viewport, search
//!
//! Every mutation goes through a method that knows what it changed and tells
//! the search highlighter, so decorations are always in sync with the
//! document, selections, viewport and query.

use tree_sitter::Tree;

use super::document::{Document, TextEdit};
use super::find_replace::FindReplaceState;
use super::notebook::EditorId;
use super::range::{Selection, TextRange};
use crate::highlight::{
    DecorationSet, HighlightInput, SearchHighlighter, ViewChanges, DEFAULT_HIGHLIGHT_MARGIN,
};
use crate::search::{SearchEffect, SearchQuery, SearchState};
use crate::syntax::find_definition;

/// A folded region: `start_line` stays visible, the lines after it up to and
/// including `end_line` are hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fold {
    pub start_line: usize,
    pub end_line: usize,
}

/// Viewport state - which lines of the document are on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-indexed)
    pub top_line: usize,
    /// Number of lines that fit in the viewport
    pub visible_lines: usize,
    /// Folded regions, sorted by start line, non-overlapping
    folds: Vec<Fold>,
}

impl Viewport {
    /// Create a new viewport with the given height
    pub fn new(visible_lines: usize) -> Self {
        Self {
            top_line: 0,
            visible_lines,
            folds: Vec::new(),
        }
    }

    pub fn folds(&self) -> &[Fold] {
        &self.folds
    }

    /// Check if a line is hidden inside a fold
    pub fn is_line_hidden(&self, line: usize) -> bool {
        self.folds
            .iter()
            .any(|f| line > f.start_line && line <= f.end_line)
    }

    fn fold_starting_at(&self, line: usize) -> Option<Fold> {
        self.folds.iter().copied().find(|f| f.start_line == line)
    }

    /// Add a fold. Folds overlapping the new one are replaced by it.
    pub fn fold(&mut self, start_line: usize, end_line: usize) -> bool {
        if end_line <= start_line {
            return false;
        }
        let fold = Fold {
            start_line,
            end_line,
        };
        self.folds
            .retain(|f| f.end_line < fold.start_line || f.start_line > fold.end_line);
        let at = self.folds.partition_point(|f| f.start_line < start_line);
        self.folds.insert(at, fold);
        true
    }

    /// Remove the fold starting at `start_line`
    pub fn unfold(&mut self, start_line: usize) -> bool {
        let before = self.folds.len();
        self.folds.retain(|f| f.start_line != start_line);
        self.folds.len() != before
    }

    /// Compute the visible byte ranges: one range per run of consecutive
    /// shown lines, split at every fold
    pub fn visible_ranges(&self, document: &Document) -> Vec<TextRange> {
        let line_count = document.line_count();
        let mut ranges = Vec::new();
        let mut run: Option<TextRange> = None;
        let mut shown = 0;
        let mut line = self.top_line;

        while line < line_count && shown < self.visible_lines {
            if self.is_line_hidden(line) {
                line += 1;
                continue;
            }
            shown += 1;
            let end = document.line_end(line);
            let current = run.get_or_insert(TextRange::new(document.line_start(line), end));
            current.to = end;

            match self.fold_starting_at(line) {
                Some(fold) => {
                    ranges.extend(run.take());
                    line = fold.end_line + 1;
                }
                None => line += 1,
            }
        }
        ranges.extend(run);
        ranges
    }

    /// Clamp `top_line` so the viewport does not start past the document end
    pub fn clamp_to(&mut self, document: &Document) {
        let max_top = document.line_count().saturating_sub(1);
        self.top_line = self.top_line.min(max_top);
    }

    /// Scroll so that `line` sits in the vertical center
    pub fn center_on(&mut self, line: usize, document: &Document) {
        self.top_line = line.saturating_sub(self.visible_lines / 2);
        self.clamp_to(document);
    }

    /// Shift folds after an edit that turned lines `first..=last_old` into
    /// `first..=last_new`. Folds touching the edited lines are dropped.
    fn map_folds(&mut self, first: usize, last_old: usize, last_new: usize) {
        if self.folds.is_empty() {
            return;
        }
        self.folds
            .retain(|f| f.end_line < first || f.start_line > last_old);
        for fold in &mut self.folds {
            if fold.start_line > last_old {
                fold.start_line = fold.start_line + last_new - last_old;
                fold.end_line = fold.end_line + last_new - last_old;
            }
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(40)
    }
}

/// Construction options shared by all editors of a notebook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    pub highlight_margin: usize,
    pub visible_lines: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            highlight_margin: DEFAULT_HIGHLIGHT_MARGIN,
            visible_lines: 40,
        }
    }
}

impl From<&crate::config::EditorConfig> for EditorOptions {
    fn from(config: &crate::config::EditorConfig) -> Self {
        Self {
            highlight_margin: config.highlight_margin,
            visible_lines: config.visible_lines,
        }
    }
}

/// One cell editor instance
#[derive(Debug, Clone)]
pub struct EditorState {
    pub id: EditorId,
    /// Read-only editors reject edits and are skipped by search broadcasts
    pub read_only: bool,
    /// Whether this editor has keyboard focus
    pub has_focus: bool,
    /// Latest syntax tree (None for plain text)
    pub syntax_tree: Option<Tree>,
    document: Document,
    /// Selections (primary at index 0, never empty)
    selections: Vec<Selection>,
    viewport: Viewport,
    visible_ranges: Vec<TextRange>,
    search: SearchState,
    highlighter: SearchHighlighter,
}

impl EditorState {
    /// Create an editor, seeding its search state from the global parameters
    pub fn new(
        id: EditorId,
        document: Document,
        params: &FindReplaceState,
        options: EditorOptions,
    ) -> Self {
        let viewport = Viewport::new(options.visible_lines);
        let visible_ranges = viewport.visible_ranges(&document);
        let selections = vec![Selection::cursor(0)];
        let search = SearchState::new(params);
        let highlighter = SearchHighlighter::new(
            options.highlight_margin,
            &HighlightInput {
                query: search.query(),
                document: &document,
                visible_ranges: &visible_ranges,
                selections: &selections,
            },
        );

        Self {
            id,
            read_only: false,
            has_focus: false,
            syntax_tree: None,
            document,
            selections,
            viewport,
            visible_ranges,
            search,
            highlighter,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Get the primary selection
    pub fn selection(&self) -> Selection {
        self.selections[0]
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn visible_ranges(&self) -> &[TextRange] {
        &self.visible_ranges
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// The currently active compiled query
    pub fn query(&self) -> &SearchQuery {
        self.search.query()
    }

    pub fn decorations(&self) -> &DecorationSet {
        self.highlighter.decorations()
    }

    // === Search ===

    /// Apply a `SetQuery`/`Clear` command
    pub fn apply_search(&mut self, effect: SearchEffect) {
        self.search.apply(effect);
        self.refresh(ViewChanges::QUERY);
    }

    // === Selection ===

    /// Replace all selections. Offsets are clamped to the document.
    pub fn set_selections(&mut self, selections: Vec<Selection>) {
        let mut selections: Vec<Selection> = selections
            .into_iter()
            .map(|s| {
                Selection::new(
                    self.document.align_offset(s.anchor),
                    self.document.align_offset(s.head),
                )
            })
            .collect();
        if selections.is_empty() {
            selections.push(Selection::cursor(0));
        }
        if selections == self.selections {
            return;
        }
        self.selections = selections;
        self.refresh(ViewChanges::SELECTION);
    }

    /// Collapse to a single cursor at `offset`
    pub fn set_cursor(&mut self, offset: usize) {
        self.set_selections(vec![Selection::cursor(offset)]);
    }

    // === Editing ===

    /// Replace a byte range with `text`. Returns the applied edit, or `None`
    /// if the editor is read-only.
    ///
    /// The syntax tree no longer describes the text afterwards and is dropped
    /// until [`AppModel::reparse`](crate::model::AppModel::reparse) runs.
    pub fn replace(&mut self, range: TextRange, text: &str) -> Option<TextEdit> {
        if self.read_only {
            tracing::debug!("Ignoring edit on read-only editor {:?}", self.id);
            return None;
        }

        let first_line = self.document.line_of_offset(range.from);
        let last_old = self.document.line_of_offset(range.to);
        let edit = self.document.replace(range, text);
        self.syntax_tree = None;
        let last_new = self
            .document
            .line_of_offset(edit.removed.from + edit.inserted_len);

        self.selections = self
            .selections
            .iter()
            .map(|s| s.map_through_edit(edit.removed, edit.inserted_len))
            .collect();
        self.viewport.map_folds(first_line, last_old, last_new);
        self.viewport.clamp_to(&self.document);
        self.visible_ranges = self.viewport.visible_ranges(&self.document);
        self.refresh(ViewChanges::DOCUMENT | ViewChanges::SELECTION | ViewChanges::VIEWPORT);
        Some(edit)
    }

    pub fn insert(&mut self, offset: usize, text: &str) -> Option<TextEdit> {
        self.replace(TextRange::new(offset, offset), text)
    }

    pub fn delete(&mut self, range: TextRange) -> Option<TextEdit> {
        self.replace(range, "")
    }

    // === Viewport ===

    /// Scroll so that `top_line` is the first visible line
    pub fn scroll_to(&mut self, top_line: usize) {
        self.viewport.top_line = top_line;
        self.viewport.clamp_to(&self.document);
        self.viewport_changed();
    }

    /// Scroll by a number of lines (positive = down)
    pub fn scroll_by(&mut self, delta: i32) {
        let top = if delta < 0 {
            self.viewport.top_line.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.viewport.top_line.saturating_add(delta as usize)
        };
        self.scroll_to(top);
    }

    /// Update viewport height (e.g., on resize)
    pub fn resize(&mut self, visible_lines: usize) {
        self.viewport.visible_lines = visible_lines;
        self.viewport_changed();
    }

    pub fn fold(&mut self, start_line: usize, end_line: usize) {
        if self.viewport.fold(start_line, end_line) {
            self.viewport_changed();
        }
    }

    pub fn unfold(&mut self, start_line: usize) {
        if self.viewport.unfold(start_line) {
            self.viewport_changed();
        }
    }

    /// Scroll `offset` into the vertical center of the view
    pub fn scroll_into_view_centered(&mut self, offset: usize) {
        let line = self.document.line_of_offset(offset);
        self.viewport.center_on(line, &self.document);
        self.viewport_changed();
    }

    fn viewport_changed(&mut self) {
        let ranges = self.viewport.visible_ranges(&self.document);
        if ranges == self.visible_ranges {
            return;
        }
        self.visible_ranges = ranges;
        self.refresh(ViewChanges::VIEWPORT);
    }

    // === Navigation ===

    /// Find the first identifier named `name` in this editor's syntax tree.
    /// Pure lookup, no side effects.
    pub fn find_definition(&self, name: &str) -> Option<usize> {
        let tree = self.syntax_tree.as_ref()?;
        find_definition(tree, &self.document.text(), self.document.language, name)
    }

    /// Jump to the definition of `name`: focus, collapse the selection at it
    /// and center it vertically. Returns false (and changes nothing) if no
    /// definition is found.
    pub fn go_to_definition(&mut self, name: &str) -> bool {
        let Some(offset) = self.find_definition(name) else {
            return false;
        };
        self.has_focus = true;
        self.set_cursor(offset);
        self.scroll_into_view_centered(offset);
        tracing::debug!("Go to definition of {:?} in {:?} at {}", name, self.id, offset);
        true
    }

    fn refresh(&mut self, changes: ViewChanges) {
        self.highlighter.update(
            changes,
            &HighlightInput {
                query: self.search.query(),
                document: &self.document,
                visible_ranges: &self.visible_ranges,
                selections: &self.selections,
            },
        );
    }

    /// Assert selection invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        debug_assert!(!self.selections.is_empty(), "Must have at least one selection");
        for sel in &self.selections {
            debug_assert!(
                sel.to() <= self.document.len(),
                "Selection {:?} past document end {}",
                sel,
                self.document.len()
            );
        }
    }

    #[cfg(not(debug_assertions))]
    pub fn assert_invariants(&self) {}
}
