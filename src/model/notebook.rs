//! Notebook - an ordered collection of cell editors sharing one search
//!
//! Each cell is an independent `EditorState`. The notebook owns the editors,
//! tracks which one has focus and hands out stable `EditorId`s.

use super::document::Document;
use super::editor::{EditorOptions, EditorState};
use super::find_replace::FindReplaceState;

/// Unique identifier for a cell editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EditorId(pub u64);

/// Source text of one cell, as split out of a notebook file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSource {
    pub text: String,
    pub read_only: bool,
}

/// Split notebook source into cells.
///
/// A line starting with `marker` opens a new cell and is not part of any
/// cell's text. If the marker line also contains `readonly`, the cell is
/// read-only. Text before the first marker becomes a cell of its own unless
/// it is blank.
pub fn split_cells(source: &str, marker: &str) -> Vec<CellSource> {
    let mut cells = Vec::new();
    let mut current = CellSource {
        text: String::new(),
        read_only: false,
    };
    let mut seen_marker = false;

    for line in source.split_inclusive('\n') {
        if !marker.is_empty() && line.starts_with(marker) {
            if seen_marker || !current.text.trim().is_empty() {
                cells.push(finish_cell(current));
            }
            current = CellSource {
                text: String::new(),
                read_only: line.contains("readonly"),
            };
            seen_marker = true;
        } else {
            current.text.push_str(line);
        }
    }

    if seen_marker || !current.text.trim().is_empty() {
        cells.push(finish_cell(current));
    }
    cells
}

fn finish_cell(mut cell: CellSource) -> CellSource {
    // The newline before the next marker belongs to the marker, not the cell
    if cell.text.ends_with('\n') {
        cell.text.pop();
        if cell.text.ends_with('\r') {
            cell.text.pop();
        }
    }
    cell
}

/// Ordered cell editors plus focus tracking
#[derive(Debug, Clone, Default)]
pub struct Notebook {
    editors: Vec<EditorState>,
    focused: Option<EditorId>,
    next_editor_id: u64,
    options: EditorOptions,
}

impl Notebook {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            editors: Vec::new(),
            focused: None,
            next_editor_id: 1,
            options,
        }
    }

    pub fn options(&self) -> EditorOptions {
        self.options
    }

    /// Append a cell editor. Its search state is seeded from `params`.
    pub fn add_cell(
        &mut self,
        document: Document,
        read_only: bool,
        params: &FindReplaceState,
    ) -> EditorId {
        let id = EditorId(self.next_editor_id.max(1));
        self.next_editor_id = id.0 + 1;

        let mut editor = EditorState::new(id, document, params, self.options);
        editor.read_only = read_only;
        self.editors.push(editor);
        tracing::debug!("Added cell {:?} (read_only: {})", id, read_only);
        id
    }

    /// Remove a cell editor. Focus is dropped if it was on that editor.
    pub fn remove_cell(&mut self, id: EditorId) -> Option<EditorState> {
        let index = self.editors.iter().position(|e| e.id == id)?;
        if self.focused == Some(id) {
            self.focused = None;
        }
        Some(self.editors.remove(index))
    }

    pub fn len(&self) -> usize {
        self.editors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }

    pub fn editor(&self, id: EditorId) -> Option<&EditorState> {
        self.editors.iter().find(|e| e.id == id)
    }

    pub fn editor_mut(&mut self, id: EditorId) -> Option<&mut EditorState> {
        self.editors.iter_mut().find(|e| e.id == id)
    }

    /// Editors in cell order
    pub fn editors(&self) -> impl Iterator<Item = &EditorState> {
        self.editors.iter()
    }

    pub fn editors_mut(&mut self) -> impl Iterator<Item = &mut EditorState> {
        self.editors.iter_mut()
    }

    /// 0-based position of an editor in cell order
    pub fn index_of(&self, id: EditorId) -> Option<usize> {
        self.editors.iter().position(|e| e.id == id)
    }

    pub fn focused(&self) -> Option<EditorId> {
        self.focused
    }

    pub fn focused_editor(&self) -> Option<&EditorState> {
        self.focused.and_then(|id| self.editor(id))
    }

    /// Move keyboard focus to `id`. Returns false if no such editor exists.
    pub fn focus(&mut self, id: EditorId) -> bool {
        if self.editor(id).is_none() {
            return false;
        }
        for editor in &mut self.editors {
            editor.has_focus = editor.id == id;
        }
        self.focused = Some(id);
        true
    }

    /// Jump to the definition of `name` inside editor `id`.
    ///
    /// On success the editor takes focus, its selection collapses to the
    /// start of the identifier and the line is scrolled to the center.
    /// Returns false and leaves every editor untouched otherwise.
    pub fn go_to_definition(&mut self, id: EditorId, name: &str) -> bool {
        let found = match self.editor_mut(id) {
            Some(editor) => editor.go_to_definition(name),
            None => false,
        };
        if found {
            self.focus(id);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notebook() -> Notebook {
        Notebook::new(EditorOptions::default())
    }

    #[test]
    fn test_split_cells() {
        let source = "# %%\nx = 1\n# %% readonly\ny = 2\nz = 3\n";
        let cells = split_cells(source, "# %%");
        assert_eq!(
            cells,
            vec![
                CellSource {
                    text: "x = 1".into(),
                    read_only: false
                },
                CellSource {
                    text: "y = 2\nz = 3".into(),
                    read_only: true
                },
            ]
        );
    }

    #[test]
    fn test_split_cells_keeps_preamble() {
        let cells = split_cells("import os\n# %%\nx = 1", "# %%");
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].text, "import os");
        assert_eq!(cells[1].text, "x = 1");
    }

    #[test]
    fn test_split_cells_without_marker() {
        let cells = split_cells("a\nb\n", "# %%");
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].text, "a\nb");
        assert!(split_cells("  \n", "# %%").is_empty());
    }

    #[test]
    fn test_split_cells_keeps_empty_cells_between_markers() {
        let cells = split_cells("# %%\n# %%\nx", "# %%");
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].text, "");
    }

    #[test]
    fn test_add_and_remove_cells() {
        let mut nb = notebook();
        let params = FindReplaceState::default();
        let a = nb.add_cell(Document::with_text("a"), false, &params);
        let b = nb.add_cell(Document::with_text("b"), true, &params);
        assert_ne!(a, b);
        assert_eq!(nb.len(), 2);
        assert!(nb.editor(b).is_some_and(|e| e.read_only));

        nb.focus(a);
        let removed = nb.remove_cell(a);
        assert!(removed.is_some());
        assert_eq!(nb.focused(), None);
        assert_eq!(nb.index_of(b), Some(0));
        assert!(nb.remove_cell(a).is_none());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut nb = notebook();
        let params = FindReplaceState::default();
        let a = nb.add_cell(Document::new(), false, &params);
        nb.remove_cell(a);
        let b = nb.add_cell(Document::new(), false, &params);
        assert_ne!(a, b);
    }

    #[test]
    fn test_focus_is_exclusive() {
        let mut nb = notebook();
        let params = FindReplaceState::default();
        let a = nb.add_cell(Document::new(), false, &params);
        let b = nb.add_cell(Document::new(), false, &params);
        assert!(nb.focus(a));
        assert!(nb.focus(b));
        let focused: Vec<_> = nb.editors().filter(|e| e.has_focus).map(|e| e.id).collect();
        assert_eq!(focused, vec![b]);
        assert!(!nb.focus(EditorId(999)));
        assert_eq!(nb.focused(), Some(b));
    }

    #[test]
    fn test_new_cells_seed_search_from_params() {
        let mut nb = notebook();
        let params = FindReplaceState::with_find_text("x");
        let id = nb.add_cell(Document::with_text("x x"), false, &params);
        assert_eq!(nb.editor(id).map(|e| e.decorations().len()), Some(2));
    }
}
