//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging search
//! broadcasts, highlight recomputation and navigation.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=decorations=debug` - decoration diffs after each message
//! - `RUST_LOG=cellfind::highlight=trace` - every highlight pass
//!
//! # Log Files
//!
//! Logs are written to `~/.config/cellfind/logs/cellfind.log` with daily
//! rotation. File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::highlight::MatchStyle;
use crate::model::notebook::{EditorId, Notebook};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// the config directory's `logs/` folder with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Per-editor search summary used for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSearchInfo {
    pub id: EditorId,
    pub generation: u64,
    pub plain: usize,
    pub selected: usize,
}

/// Lightweight snapshot of every editor's decorations for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorationSnapshot {
    pub editors: Vec<EditorSearchInfo>,
}

impl DecorationSnapshot {
    pub fn from_notebook(notebook: &Notebook) -> Self {
        Self {
            editors: notebook
                .editors()
                .map(|e| EditorSearchInfo {
                    id: e.id,
                    generation: e.search().generation(),
                    plain: e.decorations().count(MatchStyle::Plain),
                    selected: e.decorations().count(MatchStyle::Selected),
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &DecorationSnapshot) -> Option<String> {
        if self.editors.len() != other.editors.len() {
            return Some(format!(
                "editor count: {} → {}",
                self.editors.len(),
                other.editors.len()
            ));
        }

        let changes: Vec<String> = self
            .editors
            .iter()
            .zip(&other.editors)
            .filter(|(before, after)| before != after)
            .map(|(before, after)| {
                format!(
                    "{:?}: gen {} → {}, matches {}+{} → {}+{}",
                    after.id,
                    before.generation,
                    after.generation,
                    before.plain,
                    before.selected,
                    after.plain,
                    after.selected
                )
            })
            .collect();

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
