//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/cellfind/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::highlight::DEFAULT_HIGHLIGHT_MARGIN;
use crate::model::find_replace::FindReplaceState;
use crate::syntax::LanguageId;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Bytes of context around each visible range when highlighting
    #[serde(default = "default_highlight_margin")]
    pub highlight_margin: usize,

    /// Viewport height in lines
    #[serde(default = "default_visible_lines")]
    pub visible_lines: usize,

    /// Line prefix that starts a new notebook cell
    #[serde(default = "default_cell_marker")]
    pub cell_marker: String,

    /// Language assumed for notebook cells
    #[serde(default = "default_language")]
    pub default_language: LanguageId,

    /// Default find/replace flags
    #[serde(default)]
    pub find: FindReplaceState,
}

fn default_highlight_margin() -> usize {
    DEFAULT_HIGHLIGHT_MARGIN
}

fn default_visible_lines() -> usize {
    40
}

fn default_cell_marker() -> String {
    "# %%".to_string()
}

fn default_language() -> LanguageId {
    LanguageId::Python
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            highlight_margin: default_highlight_margin(),
            visible_lines: default_visible_lines(),
            cell_marker: default_cell_marker(),
            default_language: default_language(),
            find: FindReplaceState::default(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`. Missing or malformed files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            crate::config_paths::ensure_dir(parent)?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: EditorConfig = serde_yaml::from_str("visible_lines: 10\n").unwrap();
        assert_eq!(config.visible_lines, 10);
        assert_eq!(config.highlight_margin, 250);
        assert_eq!(config.cell_marker, "# %%");
        assert_eq!(config.default_language, LanguageId::Python);
        assert!(!config.find.case_sensitive);
    }

    #[test]
    fn test_find_defaults_parse() {
        let yaml = "find:\n  case_sensitive: true\n  whole_word: true\n";
        let config: EditorConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.find.case_sensitive);
        assert!(config.find.whole_word);
        assert!(!config.find.regexp);
        assert_eq!(config.find.find_text, "");
    }
}
