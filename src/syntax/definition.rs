//! Definition lookup: first identifier with a given name, in document order

use tree_sitter::{Node, Tree};

use super::languages::{LanguageId, NodeRole};
use super::walk::{walk_preorder, Walk};

/// Find the start offset of the first identifier node whose text is `name`.
///
/// Comments and string literals are skipped entirely, so identifiers inside
/// them (e.g. f-string interpolations) never count. Neither do member names
/// such as the `x` in `obj.x`. Nodes reaching past the end of `source` (a
/// tree older than the text) are ignored.
pub fn find_definition(
    tree: &Tree,
    source: &str,
    language: LanguageId,
    name: &str,
) -> Option<usize> {
    if name.is_empty() {
        return None;
    }

    let source = source.as_bytes();
    let mut found = None;
    walk_preorder(tree.root_node(), |node| {
        if found.is_some() {
            return Walk::Stop;
        }
        match language.node_role(node.kind()) {
            NodeRole::Identifier if node.is_named() => {
                let text = source.get(node.byte_range());
                if text == Some(name.as_bytes()) && !is_member_name(language, node) {
                    found = Some(node.start_byte());
                    return Walk::Stop;
                }
                Walk::Skip
            }
            NodeRole::Opaque => Walk::Skip,
            _ => Walk::Descend,
        }
    });
    found
}

/// Python attribute names share the `identifier` kind with variables
fn is_member_name(language: LanguageId, node: Node<'_>) -> bool {
    language == LanguageId::Python
        && node.parent().is_some_and(|parent| {
            parent.kind() == "attribute"
                && parent
                    .child_by_field_name("attribute")
                    .is_some_and(|attr| attr.id() == node.id())
        })
}
