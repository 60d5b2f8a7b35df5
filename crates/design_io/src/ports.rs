//! Capabilities the engine needs from its host
//!
//! The host design tool owns the live scene graph. The engine never touches
//! it directly; it goes through a [`NodeRepository`] and reports to the user
//! through a [`Notifier`]. Both are passed into the use cases, so tests can
//! substitute an in-memory host.

use crate::error::RepositoryError;
use design_model::{DesignNode, NodeKind};
use serde::{Deserialize, Serialize};

/// Opaque reference to a node living in the host
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeHandle {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
}

impl NodeHandle {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

/// Access to the host's scene graph.
///
/// Calls are issued one at a time and each is awaited before the next:
/// creating a component registers it on the host, and a later instance may
/// depend on that registration.
#[trait_variant::make(Send)]
pub trait NodeRepository: Send + Sync {
    /// Capture every top-level node of the current page, fully populated
    async fn export_all(&self) -> Result<Vec<DesignNode>, RepositoryError>;

    /// Create a node and its subtree on the host.
    ///
    /// `Ok(None)` means this node could not be created; the batch carries on.
    async fn create_node(&self, node: &DesignNode) -> Result<Option<NodeHandle>, RepositoryError>;

    /// Forget component keys registered by a previous import
    async fn clear_component_registry(&self) -> Result<(), RepositoryError>;

    async fn set_selection(&self, handles: &[NodeHandle]) -> Result<(), RepositoryError>;

    /// Scroll and zoom the viewport to the given nodes
    async fn focus_on_nodes(&self, handles: &[NodeHandle]) -> Result<(), RepositoryError>;
}

/// Fire-and-forget user-visible message
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notifier that writes messages to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "design_io::notify", "{}", message);
    }
}

/// `"1 node"`, `"3 nodes"`
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
