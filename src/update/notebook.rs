//! Notebook structure update functions

use crate::commands::Cmd;
use crate::messages::NotebookMsg;
use crate::model::AppModel;

pub fn update_notebook(model: &mut AppModel, msg: NotebookMsg) -> Option<Cmd> {
    match msg {
        NotebookMsg::AddCell {
            text,
            language,
            read_only,
        } => {
            model.add_cell(&text, language, read_only);
            Some(Cmd::Redraw)
        }
        NotebookMsg::RemoveCell(id) => {
            if model.remove_cell(id) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}
