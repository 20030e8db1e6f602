//! Update functions for the Elm-style architecture
//!
//! All state changes flow through these functions.

mod editor;
mod notebook;
mod search;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;
#[cfg(debug_assertions)]
use crate::tracing::DecorationSnapshot;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use editor::update_editor;
pub use notebook::update_notebook;
pub use search::update_search;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Editor(id, m) => editor::update_editor(model, id, m),
        Msg::Search(m) => search::update_search(model, m),
        Msg::Notebook(m) => notebook::update_notebook(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
///
/// Captures before/after decoration state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = DecorationSnapshot::from_notebook(&model.notebook);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = DecorationSnapshot::from_notebook(&model.notebook);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "decorations", %diff, "state changed");
    }

    for editor in model.notebook.editors() {
        editor.assert_invariants();
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Editor(EditorId(1))::SetCursor(4)`
/// - `Search::Broadcast`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Editor(id, m) => format!("Editor({:?})::{:?}", id, m),
        Msg::Search(m) => format!("Search::{:?}", m),
        Msg::Notebook(m) => format!("Notebook::{:?}", m),
    }
}
