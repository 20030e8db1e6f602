//! Pre-order tree traversal with per-node pruning

use tree_sitter::Node;

/// What the traversal does after visiting a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Visit the node's children next
    Descend,
    /// Skip the node's children, continue with its next sibling
    Skip,
    /// End the traversal
    Stop,
}

/// Visit `root` and its descendants in pre-order (document order, parents
/// before children). The visitor's return value controls descent.
pub fn walk_preorder<'tree, F>(root: Node<'tree>, mut visit: F)
where
    F: FnMut(Node<'tree>) -> Walk,
{
    let mut cursor = root.walk();
    loop {
        let descend = match visit(cursor.node()) {
            Walk::Stop => return,
            Walk::Skip => false,
            Walk::Descend => true,
        };
        if descend && cursor.goto_first_child() {
            continue;
        }
        // The cursor cannot leave `root`, so climbing past it ends the walk
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}
