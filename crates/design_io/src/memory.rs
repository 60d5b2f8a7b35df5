//! In-memory host for tests and the command-line bridge
//!
//! Behaves like a single-page design tool: created nodes get fresh ids,
//! components are registered by key so later instances can resolve them,
//! and selection and viewport focus are recorded instead of rendered.

use crate::error::RepositoryError;
use crate::ports::{NodeHandle, NodeRepository, Notifier};
use design_model::{DesignNode, NodeKind};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A component the host can instantiate
#[derive(Debug, Clone)]
struct RegisteredComponent {
    id: String,
    key: String,
}

#[derive(Debug, Default)]
struct HostState {
    page: Vec<DesignNode>,
    /// Component key and component id both map to the registration
    registry: HashMap<String, RegisteredComponent>,
    created: Vec<NodeHandle>,
    selection: Vec<NodeHandle>,
    focused: Vec<NodeHandle>,
    registry_clears: usize,
}

/// Look an instance's main component up by key, then by id
fn resolve_in(
    registry: &HashMap<String, RegisteredComponent>,
    node: &DesignNode,
) -> Option<RegisteredComponent> {
    node.main_component_key
        .as_ref()
        .and_then(|key| registry.get(key))
        .or_else(|| node.main_component_id.as_ref().and_then(|id| registry.get(id)))
        .cloned()
}

/// Fake [`NodeRepository`] backed by an in-memory page
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    state: RwLock<HostState>,
    strict_instances: bool,
    fail_names: HashSet<String>,
    error_names: HashMap<String, String>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse to create instances whose main component is not registered
    pub fn strict_instances(mut self) -> Self {
        self.strict_instances = true;
        self
    }

    /// Start with existing top-level nodes on the page
    pub fn with_page(mut self, nodes: Vec<DesignNode>) -> Self {
        self.state.get_mut().page = nodes;
        self
    }

    /// Creating a root with this name yields no handle
    pub fn fail_on(mut self, name: impl Into<String>) -> Self {
        self.fail_names.insert(name.into());
        self
    }

    /// Creating a root with this name fails with `message`
    pub fn error_on(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.error_names.insert(name.into(), message.into());
        self
    }

    /// Handles of every root created so far, in creation order
    pub async fn creation_order(&self) -> Vec<NodeHandle> {
        self.state.read().await.created.clone()
    }

    pub async fn selection(&self) -> Vec<NodeHandle> {
        self.state.read().await.selection.clone()
    }

    pub async fn focused(&self) -> Vec<NodeHandle> {
        self.state.read().await.focused.clone()
    }

    /// How many times the component registry has been reset
    pub async fn registry_clears(&self) -> usize {
        self.state.read().await.registry_clears
    }

    /// Top-level nodes currently on the page
    pub async fn page(&self) -> Vec<DesignNode> {
        self.state.read().await.page.clone()
    }
}

impl NodeRepository for InMemoryRepository {
    async fn export_all(&self) -> Result<Vec<DesignNode>, RepositoryError> {
        Ok(self.page().await)
    }

    async fn create_node(&self, node: &DesignNode) -> Result<Option<NodeHandle>, RepositoryError> {
        let mut has_transport_metadata = false;
        node.walk(|n, _| has_transport_metadata |= n.layer_index.is_some());
        if has_transport_metadata {
            return Err(RepositoryError::new(format!(
                "Node \"{}\" still carries _layerIndex",
                node.name
            )));
        }
        if let Some(message) = self.error_names.get(&node.name) {
            return Err(RepositoryError::new(message.clone()));
        }
        if self.fail_names.contains(&node.name) {
            return Ok(None);
        }

        let mut state = self.state.write().await;

        let mut created = node.transformed(|n| {
            n.id = Some(Uuid::new_v4().to_string());
            if n.is_definitional() && n.component_key.is_none() {
                n.component_key = Some(Uuid::new_v4().simple().to_string());
            }
        });

        // Components in this subtree are visible to instances in the same subtree
        let mut registrations = HashMap::new();
        created.walk(|n, _| {
            if let (true, Some(id), Some(key)) = (n.is_definitional(), &n.id, &n.component_key) {
                let entry = RegisteredComponent {
                    id: id.clone(),
                    key: key.clone(),
                };
                registrations.insert(key.clone(), entry.clone());
                registrations.insert(id.clone(), entry);
            }
        });

        let mut unresolved = 0usize;
        created = created.transformed(|n| {
            if n.kind() != &NodeKind::Instance {
                return;
            }
            let target = resolve_in(&registrations, n).or_else(|| resolve_in(&state.registry, n));
            match target {
                Some(component) => {
                    n.main_component_id = Some(component.id);
                    n.main_component_key = Some(component.key);
                }
                None => unresolved += 1,
            }
        });
        if self.strict_instances && unresolved > 0 {
            tracing::debug!(name = %node.name, unresolved, "Unresolved instances");
            return Ok(None);
        }

        state.registry.extend(registrations);
        let id = created.id.clone().unwrap_or_default();
        let handle = NodeHandle::new(id, created.name.clone(), created.kind().clone());
        state.page.push(created);
        state.created.push(handle.clone());
        Ok(Some(handle))
    }

    async fn clear_component_registry(&self) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        state.registry.clear();
        state.registry_clears += 1;
        Ok(())
    }

    async fn set_selection(&self, handles: &[NodeHandle]) -> Result<(), RepositoryError> {
        self.state.write().await.selection = handles.to_vec();
        Ok(())
    }

    async fn focus_on_nodes(&self, handles: &[NodeHandle]) -> Result<(), RepositoryError> {
        self.state.write().await.focused = handles.to_vec();
        Ok(())
    }
}

/// Notifier that keeps every message
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_ids_throughout() {
        let repo = InMemoryRepository::new();
        let tree = DesignNode::new("Card", NodeKind::Frame)
            .with_child(DesignNode::new("Title", NodeKind::Text));

        let handle = repo.create_node(&tree).await.unwrap().unwrap();

        let page = repo.page().await;
        assert_eq!(page[0].id.as_deref(), Some(handle.id.as_str()));
        assert!(page[0].child_nodes()[0].id.is_some());
        assert_ne!(page[0].id, page[0].child_nodes()[0].id);
    }

    #[tokio::test]
    async fn test_layer_index_is_rejected() {
        let repo = InMemoryRepository::new();
        let tree = DesignNode::new("Card", NodeKind::Frame)
            .with_child(DesignNode::new("Title", NodeKind::Text).with_layer_index(0));

        let err = repo.create_node(&tree).await.unwrap_err();
        assert!(err.message.contains("_layerIndex"));
    }

    #[tokio::test]
    async fn test_nested_component_is_registered() {
        let repo = InMemoryRepository::new().strict_instances();
        let library = DesignNode::new("Library", NodeKind::Frame).with_child(
            DesignNode::new("Chip", NodeKind::Component).with_component_key("chip"),
        );
        repo.create_node(&library).await.unwrap().unwrap();

        let instance = DesignNode::new("Chip 1", NodeKind::Instance).with_main_component_key("chip");
        let handle = repo.create_node(&instance).await.unwrap();
        assert!(handle.is_some());
    }

    #[tokio::test]
    async fn test_lenient_host_keeps_unresolved_instances() {
        let repo = InMemoryRepository::new();
        let instance = DesignNode::new("Orphan", NodeKind::Instance).with_main_component_key("missing");

        assert!(repo.create_node(&instance).await.unwrap().is_some());
        assert_eq!(repo.page().await[0].main_component_id, None);
    }

    #[tokio::test]
    async fn test_clear_registry_forgets_components() {
        let repo = InMemoryRepository::new().strict_instances();
        repo.create_node(&DesignNode::new("Chip", NodeKind::Component).with_component_key("chip"))
            .await
            .unwrap();
        repo.clear_component_registry().await.unwrap();

        let instance = DesignNode::new("Chip 1", NodeKind::Instance).with_main_component_key("chip");
        assert!(repo.create_node(&instance).await.unwrap().is_none());
        assert_eq!(repo.registry_clears().await, 1);
    }

    #[tokio::test]
    async fn test_scripted_failures() {
        let repo = InMemoryRepository::new()
            .fail_on("Skip")
            .error_on("Boom", "Host exploded");

        assert!(repo
            .create_node(&DesignNode::new("Skip", NodeKind::Frame))
            .await
            .unwrap()
            .is_none());
        let err = repo
            .create_node(&DesignNode::new("Boom", NodeKind::Frame))
            .await
            .unwrap_err();
        assert_eq!(err.message, "Host exploded");
        assert!(repo.page().await.is_empty());
    }

    #[tokio::test]
    async fn test_export_returns_page() {
        let existing = vec![DesignNode::new("Existing", NodeKind::Section)];
        let repo = InMemoryRepository::new().with_page(existing.clone());
        assert_eq!(repo.export_all().await.unwrap(), existing);
    }

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.notify("first");
        notifier.notify("second");
        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }
}
