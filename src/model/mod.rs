//! Application model - the complete state of the notebook
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod editor;
pub mod find_replace;
pub mod notebook;
pub mod range;

pub use document::{Document, TextEdit};
pub use editor::{EditorOptions, EditorState, Fold, Viewport};
pub use find_replace::FindReplaceState;
pub use notebook::{split_cells, CellSource, EditorId, Notebook};
pub use range::{Selection, TextRange};

use crate::config::EditorConfig;
use crate::syntax::{LanguageId, ParserState};

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Cell editors in notebook order
    pub notebook: Notebook,
    /// Global find/replace parameters, written by the find panel
    pub find_replace: FindReplaceState,
    /// User configuration
    pub config: EditorConfig,
    /// Tree-sitter parsers and per-editor tree cache
    pub syntax: ParserState,
}

impl AppModel {
    /// Create an empty notebook. The find record starts from the configured defaults.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            notebook: Notebook::new(EditorOptions::from(&config)),
            find_replace: config.find.clone(),
            config,
            syntax: ParserState::new(),
        }
    }

    /// Append a cell and parse it
    pub fn add_cell(&mut self, text: &str, language: LanguageId, read_only: bool) -> EditorId {
        let document = Document::with_language(text, language);
        let id = self
            .notebook
            .add_cell(document, read_only, &self.find_replace);
        self.reparse(id);
        id
    }

    /// Split notebook source into cells with the configured marker and add them all
    pub fn load_notebook(&mut self, source: &str) -> Vec<EditorId> {
        let language = self.config.default_language;
        split_cells(source, &self.config.cell_marker)
            .into_iter()
            .map(|cell| self.add_cell(&cell.text, language, cell.read_only))
            .collect()
    }

    /// Remove a cell and drop its cached parse
    pub fn remove_cell(&mut self, id: EditorId) -> bool {
        self.syntax.forget(id);
        self.notebook.remove_cell(id).is_some()
    }

    /// Bring an editor's syntax tree up to date with its document
    pub fn reparse(&mut self, id: EditorId) {
        let Some(editor) = self.notebook.editor_mut(id) else {
            return;
        };
        let source = editor.document().text();
        editor.syntax_tree = self
            .syntax
            .parse(id, &source, editor.document().language);
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_notebook_uses_config() {
        let mut model = AppModel::default();
        let ids = model.load_notebook("# %%\nx = 1\n# %% readonly\nprint(x)\n");
        assert_eq!(ids.len(), 2);

        let first = model.notebook.editor(ids[0]).unwrap();
        assert_eq!(first.document().language, LanguageId::Python);
        assert!(first.syntax_tree.is_some());
        assert!(model.notebook.editor(ids[1]).unwrap().read_only);
    }

    #[test]
    fn test_plain_text_cells_have_no_tree() {
        let mut model = AppModel::default();
        let id = model.add_cell("x = 1", LanguageId::PlainText, false);
        assert!(model.notebook.editor(id).unwrap().syntax_tree.is_none());
    }

    #[test]
    fn test_new_cells_pick_up_find_defaults() {
        let mut config = EditorConfig::default();
        config.find.find_text = "x".into();
        let mut model = AppModel::new(config);
        let id = model.add_cell("x + x", LanguageId::Python, false);
        assert_eq!(model.notebook.editor(id).unwrap().decorations().len(), 2);
    }
}
