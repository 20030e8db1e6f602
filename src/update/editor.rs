//! Editor update functions: edits, selection, viewport, per-editor search and navigation

use crate::commands::Cmd;
use crate::messages::EditorMsg;
use crate::model::{AppModel, EditorId, TextRange};
use crate::search::SearchEffect;

/// Handle messages addressed to one editor. Unknown editors are ignored.
pub fn update_editor(model: &mut AppModel, id: EditorId, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::InsertText { offset, text } => {
            apply_edit(model, id, TextRange::new(offset, offset), &text)
        }
        EditorMsg::DeleteRange(range) => apply_edit(model, id, range, ""),
        EditorMsg::ReplaceRange { range, text } => apply_edit(model, id, range, &text),

        EditorMsg::SetSelections(selections) => {
            model.notebook.editor_mut(id)?.set_selections(selections);
            Some(Cmd::redraw_editor(id))
        }
        EditorMsg::SetCursor(offset) => {
            model.notebook.editor_mut(id)?.set_cursor(offset);
            Some(Cmd::redraw_editor(id))
        }

        EditorMsg::ScrollTo(line) => {
            model.notebook.editor_mut(id)?.scroll_to(line);
            Some(Cmd::redraw_editor(id))
        }
        EditorMsg::Scroll(delta) => {
            model.notebook.editor_mut(id)?.scroll_by(delta);
            Some(Cmd::redraw_editor(id))
        }
        EditorMsg::Resize(visible_lines) => {
            model.notebook.editor_mut(id)?.resize(visible_lines);
            Some(Cmd::redraw_editor(id))
        }
        EditorMsg::Fold {
            start_line,
            end_line,
        } => {
            model.notebook.editor_mut(id)?.fold(start_line, end_line);
            Some(Cmd::redraw_editor(id))
        }
        EditorMsg::Unfold(start_line) => {
            model.notebook.editor_mut(id)?.unfold(start_line);
            Some(Cmd::redraw_editor(id))
        }

        EditorMsg::SetQuery(spec) => {
            model
                .notebook
                .editor_mut(id)?
                .apply_search(SearchEffect::SetQuery(spec));
            Some(Cmd::redraw_editor(id))
        }
        EditorMsg::ClearQuery => {
            model
                .notebook
                .editor_mut(id)?
                .apply_search(SearchEffect::Clear);
            Some(Cmd::redraw_editor(id))
        }

        EditorMsg::GoToDefinition(name) => {
            let previous = model.notebook.focused();
            if !model.notebook.go_to_definition(id, &name) {
                tracing::debug!("No definition of {:?} in {:?}", name, id);
                return None;
            }
            Some(focus_change(id, previous))
        }
        EditorMsg::Focus => {
            let previous = model.notebook.focused();
            if !model.notebook.focus(id) {
                return None;
            }
            Some(focus_change(id, previous))
        }
        EditorMsg::SetReadOnly(read_only) => {
            model.notebook.editor_mut(id)?.read_only = read_only;
            Some(Cmd::redraw_editor(id))
        }
    }
}

fn apply_edit(model: &mut AppModel, id: EditorId, range: TextRange, text: &str) -> Option<Cmd> {
    model.notebook.editor_mut(id)?.replace(range, text)?;
    model.reparse(id);
    Some(Cmd::redraw_editor(id))
}

fn focus_change(id: EditorId, previous: Option<EditorId>) -> Cmd {
    match previous {
        Some(prev) if prev != id => Cmd::RedrawEditors(vec![prev, id]),
        _ => Cmd::redraw_editor(id),
    }
}
