//! Delivering the global search to every editor instance
//!
//! Read-only editors never receive a query: they are output views, and
//! highlighting inside them would be noise.

use super::query::SearchSpec;
use super::state::SearchEffect;
use crate::model::editor::EditorState;
use crate::model::find_replace::FindReplaceState;
use crate::model::notebook::EditorId;

/// Which editors a broadcast reached
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub delivered: Vec<EditorId>,
    pub skipped: Vec<EditorId>,
}

/// Send `SetQuery(params)` to every non-read-only editor
pub fn broadcast_query<'a, I>(params: &FindReplaceState, editors: I) -> BroadcastReport
where
    I: IntoIterator<Item = &'a mut EditorState>,
{
    let spec = SearchSpec::from(params);
    deliver(editors, || SearchEffect::SetQuery(spec.clone()))
}

/// Send `Clear` to every non-read-only editor
pub fn broadcast_clear<'a, I>(editors: I) -> BroadcastReport
where
    I: IntoIterator<Item = &'a mut EditorState>,
{
    deliver(editors, || SearchEffect::Clear)
}

fn deliver<'a, I, F>(editors: I, effect: F) -> BroadcastReport
where
    I: IntoIterator<Item = &'a mut EditorState>,
    F: Fn() -> SearchEffect,
{
    let mut report = BroadcastReport::default();
    for editor in editors {
        if editor.read_only {
            tracing::debug!("Skipping read-only editor {:?}", editor.id);
            report.skipped.push(editor.id);
            continue;
        }
        editor.apply_search(effect());
        report.delivered.push(editor.id);
    }
    report
}
