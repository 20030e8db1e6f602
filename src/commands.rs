//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::model::notebook::EditorId;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw
    Redraw,
    /// Redraw only these editors
    RedrawEditors(Vec<EditorId>),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Redraw a single editor
    pub fn redraw_editor(id: EditorId) -> Self {
        Cmd::RedrawEditors(vec![id])
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::RedrawEditors(ids) => !ids.is_empty(),
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Editors that need a redraw, or `None` for a full redraw
    pub fn damaged_editors(&self) -> Option<Vec<EditorId>> {
        match self {
            Cmd::None => Some(Vec::new()),
            Cmd::Redraw => None,
            Cmd::RedrawEditors(ids) => Some(ids.clone()),
            Cmd::Batch(cmds) => {
                let mut all = Vec::new();
                for cmd in cmds {
                    all.extend(cmd.damaged_editors()?);
                }
                all.sort();
                all.dedup();
                Some(all)
            }
        }
    }
}
