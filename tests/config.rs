//! Configuration system tests
//!
//! Tests for config paths and editor config persistence.

use cellfind::config::EditorConfig;
use cellfind::config_paths;
use cellfind::model::FindReplaceState;
use cellfind::syntax::LanguageId;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
        assert!(path.to_string_lossy().contains("cellfind"));
    }
}

#[test]
fn test_logs_dir_is_under_config_dir() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(config));
        assert!(logs.ends_with("logs"));
    }
}

// ========================================================================
// EditorConfig Tests
// ========================================================================

#[test]
fn test_editor_config_defaults() {
    let config = EditorConfig::default();
    assert_eq!(config.highlight_margin, 250);
    assert_eq!(config.visible_lines, 40);
    assert_eq!(config.cell_marker, "# %%");
    assert_eq!(config.default_language, LanguageId::Python);
    assert_eq!(config.find, FindReplaceState::default());
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = EditorConfig {
        highlight_margin: 100,
        visible_lines: 12,
        cell_marker: "#%%".into(),
        default_language: LanguageId::Rust,
        find: FindReplaceState {
            case_sensitive: true,
            whole_word: true,
            ..Default::default()
        },
    };
    config.save_to(&path).unwrap();

    assert_eq!(EditorConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EditorConfig::load_from(&dir.path().join("nope.yaml"));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "visible_lines: [not a number\n").unwrap();
    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "default_language: javascript\nhighlight_margin: 10\n").unwrap();

    let config = EditorConfig::load_from(&path);
    assert_eq!(config.default_language, LanguageId::JavaScript);
    assert_eq!(config.highlight_margin, 10);
    assert_eq!(config.visible_lines, 40);
}

#[test]
fn test_language_aliases() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "default_language: plain\n").unwrap();
    assert_eq!(
        EditorConfig::load_from(&path).default_language,
        LanguageId::PlainText
    );
}
