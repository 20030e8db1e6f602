//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use cellfind::config::EditorConfig;
use cellfind::highlight::MatchStyle;
use cellfind::model::{AppModel, EditorId, EditorState};
use cellfind::syntax::LanguageId;

/// Create a model with one Python cell per `(text, read_only)` pair
pub fn test_model(cells: &[(&str, bool)]) -> (AppModel, Vec<EditorId>) {
    test_model_with_config(EditorConfig::default(), cells)
}

pub fn test_model_with_config(
    config: EditorConfig,
    cells: &[(&str, bool)],
) -> (AppModel, Vec<EditorId>) {
    let mut model = AppModel::new(config);
    let ids = cells
        .iter()
        .map(|&(text, read_only)| model.add_cell(text, LanguageId::Python, read_only))
        .collect();
    (model, ids)
}

/// Borrow an editor that must exist
pub fn editor(model: &AppModel, id: EditorId) -> &EditorState {
    model
        .notebook
        .editor(id)
        .unwrap_or_else(|| panic!("No editor {:?}", id))
}

/// Decorated byte ranges of an editor
pub fn match_ranges(model: &AppModel, id: EditorId) -> Vec<(usize, usize)> {
    editor(model, id)
        .decorations()
        .iter()
        .map(|d| (d.from, d.to))
        .collect()
}

/// Decorated byte ranges with the selected style
pub fn selected_ranges(model: &AppModel, id: EditorId) -> Vec<(usize, usize)> {
    editor(model, id)
        .decorations()
        .iter()
        .filter(|d| d.style == MatchStyle::Selected)
        .map(|d| (d.from, d.to))
        .collect()
}

/// `line 0\nline 1\n...` with `count` lines
pub fn numbered_lines(count: usize) -> String {
    (0..count).map(|i| format!("line {}\n", i)).collect()
}
