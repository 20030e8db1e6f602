//! Syntax trees for cell editors
//!
//! Provides tree-sitter parsing and the go-to-definition search:
//! - Language detection from file extensions
//! - Incremental re-parsing after edits (synchronous, on the update path)
//! - Pre-order traversal with per-node pruning
//! - First-identifier lookup that ignores comments and strings
//!
//! ## Flow
//!
//! ```text
//! Document edit → ParserState::parse (incremental) → EditorState::syntax_tree
//! GoToDefinition → find_definition(tree) → focus + cursor + centered scroll
//! ```

mod definition;
mod languages;
mod parser;
mod walk;

pub use definition::find_definition;
pub use languages::{LanguageId, NodeRole};
pub use parser::ParserState;
pub use walk::{walk_preorder, Walk};
