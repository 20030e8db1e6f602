//! Global search update functions

use crate::commands::Cmd;
use crate::messages::SearchMsg;
use crate::model::AppModel;
use crate::search::{broadcast_clear, broadcast_query};

/// Push the global find/replace record (read, never written) to every writable editor
pub fn update_search(model: &mut AppModel, msg: SearchMsg) -> Option<Cmd> {
    let report = match msg {
        SearchMsg::Broadcast => broadcast_query(&model.find_replace, model.notebook.editors_mut()),
        SearchMsg::Clear => broadcast_clear(model.notebook.editors_mut()),
    };

    tracing::debug!(
        delivered = report.delivered.len(),
        skipped = report.skipped.len(),
        "Search broadcast"
    );
    Some(Cmd::RedrawEditors(report.delivered))
}
