//! Export use case: host page out, transferable tree in

use crate::counting::count_total;
use crate::error::{DesignIoError, Result};
use crate::ordering::stamp_layer_indices;
use crate::ports::{pluralize, NodeRepository, Notifier};
use design_model::{DesignNode, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};

/// How an exported snapshot is prepared for transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportOptions {
    /// Write each node's sibling position into `_layerIndex`
    pub stamp_layer_indices: bool,
    /// Decimal places kept in paint and effect colors; `None` keeps them as-is
    pub round_precision: Option<u32>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            stamp_layer_indices: true,
            round_precision: Some(DEFAULT_PRECISION),
        }
    }
}

/// Outcome of an export, always returned rather than raised
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub success: bool,
    #[serde(default)]
    pub nodes: Vec<DesignNode>,
    #[serde(default)]
    pub node_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExportResult {
    pub fn succeeded(nodes: Vec<DesignNode>, node_count: usize) -> Self {
        Self {
            success: true,
            nodes,
            node_count,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            nodes: Vec::new(),
            node_count: 0,
            error: Some(error.into()),
        }
    }

    /// Serialize for transfer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize for transfer, indented
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Captures the host's current page
pub struct ExportDesign<'a, R: NodeRepository, N: Notifier> {
    repository: &'a R,
    notifier: &'a N,
    options: ExportOptions,
}

impl<'a, R: NodeRepository, N: Notifier> ExportDesign<'a, R, N> {
    pub fn new(repository: &'a R, notifier: &'a N) -> Self {
        Self {
            repository,
            notifier,
            options: ExportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn execute(&self) -> ExportResult {
        match self.export().await {
            Ok((nodes, node_count)) => ExportResult::succeeded(nodes, node_count),
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                ExportResult::failed(e.to_string())
            }
        }
    }

    async fn export(&self) -> Result<(Vec<DesignNode>, usize)> {
        let roots = self.repository.export_all().await?;
        if roots.is_empty() {
            return Err(DesignIoError::NoExportableLayers);
        }

        let node_count = count_total(&roots);
        let mut nodes = if self.options.stamp_layer_indices {
            stamp_layer_indices(&roots)
        } else {
            roots
        };
        if let Some(precision) = self.options.round_precision {
            nodes = nodes.iter().map(|n| n.with_rounded_paints(precision)).collect();
        }

        let message = format!(
            "Exported {} ({})",
            pluralize(nodes.len(), "layer", "layers"),
            pluralize(node_count, "node", "nodes")
        );
        self.notifier.notify(&message);
        tracing::info!(layers = nodes.len(), node_count, "Export finished");

        Ok((nodes, node_count))
    }
}
