//! Envelope normalization
//!
//! Producers wrap design payloads in different ways: a bare node, an array of
//! nodes, or an object namespacing the payload under a key such as `data`.
//! The parser peels one known envelope and yields a flat batch of root nodes.
//! It never fails: malformed input degrades to a partial or empty batch and
//! the caller decides how to report "nothing to import".

use design_model::{DesignNode, NodeKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parse JSON text with no nesting limit.
///
/// Every tree level is two JSON levels (the node object and its `children`
/// array), so serde_json's default limit of 128 caps trees at 63 nodes deep.
/// `serde_stacker` moves the stack onto the heap as parsing descends.
pub fn parse_json(text: &str) -> serde_json::Result<Value> {
    let mut json = serde_json::Deserializer::from_str(text);
    json.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(value)
}

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserConfig {
    /// Envelope keys for plain payloads, highest priority first
    pub envelope_keys: Vec<String>,
    /// Envelope keys for AI-generated payloads, highest priority first
    pub ai_envelope_keys: Vec<String>,
    /// Split a single multi-child root frame of an AI payload into pages
    pub promote_multi_page: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            envelope_keys: vec!["data".into(), "design".into(), "result".into()],
            ai_envelope_keys: vec![
                "design".into(),
                "data".into(),
                "result".into(),
                "figmaDesign".into(),
            ],
            promote_multi_page: true,
        }
    }
}

/// Turns raw transfer payloads into root design nodes
#[derive(Debug, Clone, Default)]
pub struct DesignParser {
    config: ParserConfig,
}

impl DesignParser {
    /// Create a parser with default envelope priorities
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a plain payload (`data > design > result`)
    pub fn parse(&self, raw: &Value) -> Vec<DesignNode> {
        let payload = unwrap_envelope(raw, &self.config.envelope_keys);
        match payload {
            Value::Array(items) => decode_all(items),
            single => decode_node(single).into_iter().collect(),
        }
    }

    /// Parse an AI-generated payload (`design > data > result > figmaDesign`).
    ///
    /// A lone FRAME with more than one child is treated as a multi-section
    /// mockup and its children become independent roots.
    pub fn parse_ai_response(&self, raw: &Value) -> Vec<DesignNode> {
        let payload = unwrap_envelope(raw, &self.config.ai_envelope_keys);

        if let Value::Array(items) = payload {
            return decode_all(items);
        }

        let Some(tag) = payload.get("type").and_then(Value::as_str) else {
            tracing::debug!("AI payload has no node type; nothing to import");
            return Vec::new();
        };

        if self.config.promote_multi_page && NodeKind::from(tag) == NodeKind::Frame {
            if let Some(children) = payload.get("children").and_then(Value::as_array) {
                if children.len() > 1 {
                    tracing::info!(pages = children.len(), "Promoting root frame children to pages");
                    return decode_all(children);
                }
            }
        }

        decode_node(payload).into_iter().collect()
    }

    /// Parse plain JSON text; invalid JSON yields an empty batch
    pub fn parse_str(&self, text: &str) -> Vec<DesignNode> {
        match parse_json(text) {
            Ok(raw) => self.parse(&raw),
            Err(e) => {
                tracing::warn!("Design payload is not valid JSON: {}", e);
                Vec::new()
            }
        }
    }

    /// Parse AI-generated JSON text; invalid JSON yields an empty batch
    pub fn parse_ai_str(&self, text: &str) -> Vec<DesignNode> {
        match parse_json(text) {
            Ok(raw) => self.parse_ai_response(&raw),
            Err(e) => {
                tracing::warn!("AI design payload is not valid JSON: {}", e);
                Vec::new()
            }
        }
    }
}

/// Return the value under the first present, non-null envelope key, or the
/// input itself when no key matches. Only one level is unwrapped.
fn unwrap_envelope<'a>(raw: &'a Value, keys: &[String]) -> &'a Value {
    if let Value::Object(map) = raw {
        for key in keys {
            match map.get(key) {
                Some(Value::Null) | None => continue,
                Some(inner) => return inner,
            }
        }
    }
    raw
}

fn decode_all(items: &[Value]) -> Vec<DesignNode> {
    items.iter().filter_map(decode_node).collect()
}

/// Decode one object into a node, dropping anything that is not a node
fn decode_node(value: &Value) -> Option<DesignNode> {
    if !value.is_object() {
        tracing::debug!("Skipping non-object entry in design payload");
        return None;
    }
    match DesignNode::from_value(value) {
        Ok(node) => Some(node),
        Err(e) => {
            tracing::debug!("Skipping malformed design node: {}", e);
            None
        }
    }
}
