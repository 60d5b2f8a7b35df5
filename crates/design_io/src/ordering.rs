//! Z-order restoration and creation phasing
//!
//! Transports are free to reorder object keys and array entries, so exports
//! record each node's sibling position in `_layerIndex`. Imports sort on it,
//! strip it, and then create definitional nodes (components, component sets)
//! ahead of everything else.

use design_model::DesignNode;

/// Stable sort by `_layerIndex`, a missing index counting as 0.
///
/// Nodes with equal keys keep their input order.
pub fn sort_by_layer_index(mut nodes: Vec<DesignNode>) -> Vec<DesignNode> {
    nodes.sort_by_key(DesignNode::layer_index_or_default);
    nodes
}

/// Split into (components and component sets, everything else), each part in
/// input order
pub fn partition_definitional(nodes: Vec<DesignNode>) -> (Vec<DesignNode>, Vec<DesignNode>) {
    nodes.into_iter().partition(DesignNode::is_definitional)
}

/// The order in which roots are handed to the host
pub fn creation_order(nodes: Vec<DesignNode>) -> Vec<DesignNode> {
    let (mut definitional, others) = partition_definitional(sort_by_layer_index(nodes));
    definitional.extend(others);
    definitional
}

/// Restore sibling order below `node` and drop every `_layerIndex`, giving
/// the snapshot the host is allowed to see
pub fn prepare_for_host(node: &DesignNode) -> DesignNode {
    // Parents are visited before their children, so every sibling list is
    // sorted while its indices are still present.
    node.transformed(|n| {
        n.layer_index = None;
        if let Some(children) = n.children.take() {
            n.children = Some(sort_by_layer_index(children));
        }
    })
}

/// Record each node's sibling position in `_layerIndex`, at every level
pub fn stamp_layer_indices(nodes: &[DesignNode]) -> Vec<DesignNode> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, root)| {
            let mut stamped = root.transformed(|n| {
                if let Some(children) = n.children.as_mut() {
                    for (position, child) in children.iter_mut().enumerate() {
                        child.layer_index = Some(position as i64);
                    }
                }
            });
            stamped.layer_index = Some(index as i64);
            stamped
        })
        .collect()
}
