//! Language identification and node classification
//!
//! Maps file extensions to language IDs and tells the definition search which
//! tree-sitter node kinds are identifiers and which subtrees are opaque
//! (comments and string literals).

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    #[default]
    #[serde(alias = "plain", alias = "text")]
    PlainText,
    Python,
    JavaScript,
    Rust,
}

/// How the definition search treats a syntax node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// A name token that can be a definition target
    Identifier,
    /// Comment or string literal: never inspected for identifiers
    Opaque,
    /// Any other node: descend into it
    Other,
}

impl LanguageId {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "py" | "pyi" => LanguageId::Python,
            "js" | "mjs" | "cjs" => LanguageId::JavaScript,
            "rs" => LanguageId::Rust,
            _ => LanguageId::PlainText,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(LanguageId::PlainText)
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "Plain Text",
            LanguageId::Python => "Python",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::Rust => "Rust",
        }
    }

    /// Check if this language has a parser
    pub fn has_parser(&self) -> bool {
        !matches!(self, LanguageId::PlainText)
    }

    /// Classify a node kind for the definition search
    pub fn node_role(&self, kind: &str) -> NodeRole {
        match (self, kind) {
            (LanguageId::PlainText, _) => NodeRole::Other,

            (LanguageId::Python, "identifier") => NodeRole::Identifier,
            (LanguageId::Python, "comment" | "string" | "concatenated_string") => NodeRole::Opaque,

            (LanguageId::JavaScript, "identifier") => NodeRole::Identifier,
            (LanguageId::JavaScript, "comment" | "string" | "template_string" | "regex") => {
                NodeRole::Opaque
            }

            (LanguageId::Rust, "identifier") => NodeRole::Identifier,
            (
                LanguageId::Rust,
                "line_comment" | "block_comment" | "string_literal" | "raw_string_literal"
                | "char_literal",
            ) => NodeRole::Opaque,

            _ => NodeRole::Other,
        }
    }
}
