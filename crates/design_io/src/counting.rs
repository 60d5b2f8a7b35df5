//! Node counting for user feedback

use design_model::DesignNode;

/// Number of nodes in the tree rooted at `node`, the root included.
///
/// Iterative, so arbitrarily deep trees are fine.
pub fn count_nodes(node: &DesignNode) -> usize {
    let mut count = 0;
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        count += 1;
        stack.extend(current.child_nodes());
    }
    count
}

/// Total nodes across a batch of roots
pub fn count_total(nodes: &[DesignNode]) -> usize {
    nodes.iter().map(count_nodes).sum()
}
