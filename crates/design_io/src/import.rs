//! Import use case: payload in, host nodes out

use crate::error::{DesignIoError, Result};
use crate::ordering::{partition_definitional, prepare_for_host, sort_by_layer_index};
use crate::parser::DesignParser;
use crate::ports::{pluralize, NodeHandle, NodeRepository, Notifier};
use design_model::DesignNode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of an import, always returned rather than raised
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub success: bool,
    pub nodes_created: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImportResult {
    pub fn succeeded(nodes_created: usize) -> Self {
        Self {
            success: true,
            nodes_created,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            nodes_created: 0,
            error: Some(error.into()),
        }
    }
}

/// Which envelope convention the payload follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PayloadSource {
    Plain,
    Ai,
}

/// Creates a parsed design on the host.
///
/// Roots are created in z-order, components and component sets first so
/// that instances created afterwards can resolve them. Each creation is
/// awaited before the next one starts.
pub struct ImportDesign<'a, R: NodeRepository, N: Notifier> {
    repository: &'a R,
    notifier: &'a N,
    parser: DesignParser,
}

impl<'a, R: NodeRepository, N: Notifier> ImportDesign<'a, R, N> {
    pub fn new(repository: &'a R, notifier: &'a N) -> Self {
        Self {
            repository,
            notifier,
            parser: DesignParser::new(),
        }
    }

    /// Use a parser with custom envelope settings
    pub fn with_parser(mut self, parser: DesignParser) -> Self {
        self.parser = parser;
        self
    }

    /// Import a plain payload
    pub async fn execute(&self, raw: &Value) -> ImportResult {
        self.run(raw, PayloadSource::Plain).await
    }

    /// Import an AI-generated payload, splitting multi-page mockups
    pub async fn execute_ai_response(&self, raw: &Value) -> ImportResult {
        self.run(raw, PayloadSource::Ai).await
    }

    async fn run(&self, raw: &Value, source: PayloadSource) -> ImportResult {
        match self.import(raw, source).await {
            Ok(created) => ImportResult::succeeded(created),
            Err(e) => {
                tracing::error!("Import failed: {}", e);
                ImportResult::failed(e.to_string())
            }
        }
    }

    async fn import(&self, raw: &Value, source: PayloadSource) -> Result<usize> {
        self.repository.clear_component_registry().await?;

        let roots = match source {
            PayloadSource::Plain => self.parser.parse(raw),
            PayloadSource::Ai => self.parser.parse_ai_response(raw),
        };
        if roots.is_empty() {
            return Err(DesignIoError::NoDesignData);
        }
        tracing::info!(roots = roots.len(), ?source, "Importing design");

        let (definitional, others) = partition_definitional(sort_by_layer_index(roots));
        tracing::debug!(
            definitional = definitional.len(),
            others = others.len(),
            "Creation phases"
        );

        let mut created = Vec::new();
        self.create_all(&definitional, &mut created).await?;
        self.create_all(&others, &mut created).await?;

        if created.is_empty() {
            return Err(DesignIoError::NoNodesCreated);
        }

        self.repository.set_selection(&created).await?;
        self.repository.focus_on_nodes(&created).await?;

        let message = format!("Imported {}", pluralize(created.len(), "node", "nodes"));
        self.notifier.notify(&message);
        tracing::info!(created = created.len(), "Import finished");

        Ok(created.len())
    }

    async fn create_all(&self, nodes: &[DesignNode], created: &mut Vec<NodeHandle>) -> Result<()> {
        for node in nodes {
            let prepared = prepare_for_host(node);
            match self.repository.create_node(&prepared).await? {
                Some(handle) => {
                    tracing::debug!(id = %handle.id, name = %handle.name, "Created node");
                    created.push(handle);
                }
                None => {
                    tracing::warn!(name = %node.name, kind = %node.kind(), "Host could not create node; skipping");
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{InMemoryRepository, RecordingNotifier};
    use crate::parser::ParserConfig;
    use design_model::NodeKind;
    use serde_json::json;

    fn names(handles: &[NodeHandle]) -> Vec<&str> {
        handles.iter().map(|h| h.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_components_are_created_first() {
        let repo = InMemoryRepository::new();
        let notifier = RecordingNotifier::new();
        let raw = json!([
            {"name": "Frame", "type": "FRAME"},
            {"name": "Component", "type": "COMPONENT"},
            {"name": "Instance", "type": "INSTANCE"},
            {"name": "ComponentSet", "type": "COMPONENT_SET"}
        ]);

        let result = ImportDesign::new(&repo, &notifier).execute(&raw).await;

        assert!(result.success);
        assert_eq!(result.nodes_created, 4);
        assert_eq!(
            names(&repo.creation_order().await),
            vec!["Component", "ComponentSet", "Frame", "Instance"]
        );
    }

    #[tokio::test]
    async fn test_layer_index_orders_roots() {
        let repo = InMemoryRepository::new();
        let notifier = RecordingNotifier::new();
        let raw = json!({"data": [
            {"name": "A", "type": "FRAME", "_layerIndex": 2},
            {"name": "B", "type": "FRAME", "_layerIndex": 0},
            {"name": "C", "type": "FRAME", "_layerIndex": 2},
            {"name": "D", "type": "FRAME"}
        ]});

        ImportDesign::new(&repo, &notifier).execute(&raw).await;

        assert_eq!(names(&repo.creation_order().await), vec!["B", "D", "A", "C"]);
    }

    #[tokio::test]
    async fn test_partial_creation_is_tolerated() {
        let repo = InMemoryRepository::new().fail_on("Broken");
        let notifier = RecordingNotifier::new();
        let raw = json!([
            {"name": "One", "type": "RECTANGLE"},
            {"name": "Broken", "type": "RECTANGLE"},
            {"name": "Two", "type": "ELLIPSE"},
            {"name": "Three", "type": "TEXT"}
        ]);

        let result = ImportDesign::new(&repo, &notifier).execute(&raw).await;

        assert!(result.success);
        assert_eq!(result.nodes_created, 3);
        assert_eq!(result.error, None);
    }

    #[tokio::test]
    async fn test_empty_payload_fails() {
        let repo = InMemoryRepository::new();
        let notifier = RecordingNotifier::new();

        let result = ImportDesign::new(&repo, &notifier).execute(&json!({})).await;

        assert!(!result.success);
        assert_eq!(result.nodes_created, 0);
        assert_eq!(result.error.as_deref(), Some("No valid design data found"));
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_all_creations_failing_is_reported() {
        let repo = InMemoryRepository::new().fail_on("A").fail_on("B");
        let notifier = RecordingNotifier::new();
        let raw = json!([{"name": "A", "type": "FRAME"}, {"name": "B", "type": "FRAME"}]);

        let result = ImportDesign::new(&repo, &notifier).execute(&raw).await;

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("No nodes were created"));
        assert!(repo.selection().await.is_empty());
    }

    #[tokio::test]
    async fn test_repository_error_message_is_preserved() {
        let repo = InMemoryRepository::new().error_on("Heading", "Font \"Inter Bold\" is not loaded");
        let notifier = RecordingNotifier::new();
        let raw = json!([
            {"name": "Box", "type": "RECTANGLE"},
            {"name": "Heading", "type": "TEXT", "characters": "Hi"}
        ]);

        let result = ImportDesign::new(&repo, &notifier).execute(&raw).await;

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Font \"Inter Bold\" is not loaded"));
        // Nodes created before the failure are not rolled back
        assert_eq!(names(&repo.creation_order().await), vec!["Box"]);
    }

    #[tokio::test]
    async fn test_registry_is_cleared_before_each_import() {
        let repo = InMemoryRepository::new();
        let notifier = RecordingNotifier::new();
        let import = ImportDesign::new(&repo, &notifier);

        import.execute(&json!({"name": "A", "type": "FRAME"})).await;
        import.execute(&json!({})).await;

        assert_eq!(repo.registry_clears().await, 2);
    }

    #[tokio::test]
    async fn test_stale_component_keys_do_not_leak() {
        let repo = InMemoryRepository::new().strict_instances();
        let notifier = RecordingNotifier::new();
        let import = ImportDesign::new(&repo, &notifier);

        let first = import
            .execute(&json!({"name": "Button", "type": "COMPONENT", "componentKey": "btn"}))
            .await;
        assert!(first.success);

        let second = import
            .execute(&json!({"name": "Use", "type": "INSTANCE", "mainComponentKey": "btn"}))
            .await;
        assert!(!second.success);
        assert_eq!(second.error.as_deref(), Some("No nodes were created"));
    }

    #[tokio::test]
    async fn test_instance_resolves_component_from_same_batch() {
        let repo = InMemoryRepository::new().strict_instances();
        let notifier = RecordingNotifier::new();
        let raw = json!([
            {"name": "Use", "type": "INSTANCE", "mainComponentKey": "btn", "_layerIndex": 0},
            {"name": "Button", "type": "COMPONENT", "componentKey": "btn", "_layerIndex": 1}
        ]);

        let result = ImportDesign::new(&repo, &notifier).execute(&raw).await;

        assert!(result.success);
        assert_eq!(result.nodes_created, 2);
        let page = repo.page().await;
        let component = page.iter().find(|n| n.name == "Button").unwrap();
        let instance = page.iter().find(|n| n.name == "Use").unwrap();
        assert_eq!(instance.main_component_id, component.id);
    }

    #[tokio::test]
    async fn test_selection_focus_and_notification() {
        let repo = InMemoryRepository::new();
        let notifier = RecordingNotifier::new();
        let raw = json!([{"name": "A", "type": "FRAME"}, {"name": "B", "type": "FRAME"}]);

        ImportDesign::new(&repo, &notifier).execute(&raw).await;

        let created = repo.creation_order().await;
        assert_eq!(repo.selection().await, created);
        assert_eq!(repo.focused().await, created);
        assert_eq!(notifier.messages(), vec!["Imported 2 nodes".to_string()]);
    }

    #[tokio::test]
    async fn test_singular_notification() {
        let repo = InMemoryRepository::new();
        let notifier = RecordingNotifier::new();

        ImportDesign::new(&repo, &notifier)
            .execute(&json!({"design": {"name": "Only", "type": "STAR"}}))
            .await;

        assert_eq!(notifier.messages(), vec!["Imported 1 node".to_string()]);
    }

    #[tokio::test]
    async fn test_host_never_sees_layer_index() {
        let repo = InMemoryRepository::new();
        let notifier = RecordingNotifier::new();
        let raw = json!({
            "name": "Card",
            "type": "FRAME",
            "_layerIndex": 0,
            "children": [
                {"name": "Top", "type": "TEXT", "_layerIndex": 1},
                {"name": "Bottom", "type": "RECTANGLE", "_layerIndex": 0}
            ]
        });

        let result = ImportDesign::new(&repo, &notifier).execute(&raw).await;
        assert!(result.success);

        let page = repo.page().await;
        let card = &page[0];
        let child_names: Vec<&str> = card.child_nodes().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(child_names, vec!["Bottom", "Top"]);
        card.walk(|n, _| assert!(n.layer_index.is_none()));
    }

    #[tokio::test]
    async fn test_ai_multi_page_import() {
        let repo = InMemoryRepository::new();
        let notifier = RecordingNotifier::new();
        let raw = json!({
            "figmaDesign": {
                "name": "Landing",
                "type": "FRAME",
                "children": [
                    {"name": "Hero", "type": "FRAME"},
                    {"name": "Pricing", "type": "FRAME"}
                ]
            }
        });

        let import = ImportDesign::new(&repo, &notifier);
        let result = import.execute_ai_response(&raw).await;

        assert!(result.success);
        assert_eq!(result.nodes_created, 2);
        assert_eq!(names(&repo.creation_order().await), vec!["Hero", "Pricing"]);

        // Plain imports do not know the figmaDesign envelope
        let plain = import.execute(&raw).await;
        assert!(!plain.success);
    }

    #[tokio::test]
    async fn test_custom_parser() {
        let repo = InMemoryRepository::new();
        let notifier = RecordingNotifier::new();
        let parser = DesignParser::with_config(ParserConfig {
            envelope_keys: vec!["nodes".into()],
            ..Default::default()
        });

        let result = ImportDesign::new(&repo, &notifier)
            .with_parser(parser)
            .execute(&json!({"nodes": [{"name": "X", "type": "VECTOR"}]}))
            .await;

        assert!(result.success);
        assert_eq!(repo.page().await[0].kind(), &NodeKind::Vector);
    }

    #[test]
    fn test_result_serialization() {
        let ok = serde_json::to_value(ImportResult::succeeded(3)).unwrap();
        assert_eq!(ok, json!({"success": true, "nodesCreated": 3}));

        let failed = serde_json::to_value(ImportResult::failed("No nodes were created")).unwrap();
        assert_eq!(
            failed,
            json!({"success": false, "nodesCreated": 0, "error": "No nodes were created"})
        );
    }
}
