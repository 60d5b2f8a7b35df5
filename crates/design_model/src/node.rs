//! The recursive design node
//!
//! A `DesignNode` is a partially populated snapshot of one visual element.
//! Every property group is optional: a missing field means "use the host
//! default", never zero. Field names follow the host's camelCase vocabulary
//! on the wire and absent fields are omitted on output.

use crate::{
    ArcData, AxisSizingMode, BlendMode, BooleanOperator, ComponentPropertyDefinition,
    ComponentPropertyValue, Constraints, CornerRadii, CounterAxisAlign, Effect, ExportSetting,
    FontName, Guide, Hyperlink, ImagePayload, LayoutAlign, LayoutGrid, LayoutMode,
    LayoutPositioning, LayoutSizing, LayoutWrap, LetterSpacing, LineHeight, NodeKind,
    OverrideRecord, Padding, Paint, PrimaryAxisAlign, Result, StrokeAlign, StrokeCap, StrokeJoin,
    TextAlignHorizontal, TextAlignVertical, TextAutoResize, TextCase, TextDecoration, TextSegment,
    TextTruncation, Transform, VectorNetwork, VectorPath,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One element of a design tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    // -------------------------------------------------------------------------
    // Identity & ordering
    // -------------------------------------------------------------------------
    /// Host-assigned identifier, if the node came from a live host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    kind: NodeKind,
    /// Sibling position for transports that do not preserve order.
    /// Never written to the host.
    #[serde(rename = "_layerIndex", default, skip_serializing_if = "Option::is_none")]
    pub layer_index: Option<i64>,

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_transform: Option<Transform>,

    // -------------------------------------------------------------------------
    // Paint & stroke
    // -------------------------------------------------------------------------
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Paint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_align: Option<StrokeAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_cap: Option<StrokeCap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_join: Option<StrokeJoin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_pattern: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_miter_limit: Option<f64>,

    // -------------------------------------------------------------------------
    // Corners
    // -------------------------------------------------------------------------
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radii: Option<CornerRadii>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_smoothing: Option<f64>,

    // -------------------------------------------------------------------------
    // Visual stacking
    // -------------------------------------------------------------------------
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<Effect>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_mask: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clips_content: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,

    // -------------------------------------------------------------------------
    // Auto-layout (container side)
    // -------------------------------------------------------------------------
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<LayoutMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_axis_sizing_mode: Option<AxisSizingMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_axis_sizing_mode: Option<AxisSizingMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_axis_align_items: Option<PrimaryAxisAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_axis_align_items: Option<CounterAxisAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_axis_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_wrap: Option<LayoutWrap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_reverse_z_index: Option<bool>,

    // -------------------------------------------------------------------------
    // Auto-layout (child side)
    // -------------------------------------------------------------------------
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_align: Option<LayoutAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_grow: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_positioning: Option<LayoutPositioning>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_sizing_horizontal: Option<LayoutSizing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_sizing_vertical: Option<LayoutSizing>,

    // -------------------------------------------------------------------------
    // Text
    // -------------------------------------------------------------------------
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<FontName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<TextAlignHorizontal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align_vertical: Option<TextAlignVertical>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<LineHeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<LetterSpacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_case: Option<TextCase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_auto_resize: Option<TextAutoResize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_indent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<Hyperlink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_truncation: Option<TextTruncation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u32>,
    /// Per-range style overrides, ordered and expected to be disjoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_segments: Option<Vec<TextSegment>>,

    // -------------------------------------------------------------------------
    // Shape specifics
    // -------------------------------------------------------------------------
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arc_data: Option<ArcData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_radius: Option<f64>,

    // -------------------------------------------------------------------------
    // Vector & boolean
    // -------------------------------------------------------------------------
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_paths: Option<Vec<VectorPath>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_network: Option<VectorNetwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean_operation: Option<BooleanOperator>,

    // -------------------------------------------------------------------------
    // Export presets, guides, grids
    // -------------------------------------------------------------------------
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_settings: Option<Vec<ExportSetting>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guides: Option<Vec<Guide>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_grids: Option<Vec<LayoutGrid>>,

    // -------------------------------------------------------------------------
    // Components & instances
    // -------------------------------------------------------------------------
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_description: Option<String>,
    /// Declared on components and component sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_property_definitions: Option<BTreeMap<String, ComponentPropertyDefinition>>,
    /// Set on instances
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_properties: Option<BTreeMap<String, ComponentPropertyValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_component_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_component_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_exposed_instance: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Vec<OverrideRecord>>,

    // -------------------------------------------------------------------------
    // Children & inline raster
    // -------------------------------------------------------------------------
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DesignNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<ImagePayload>,
}

impl DesignNode {
    /// Create a node with only its name and kind set
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    /// Decode a node from an already-parsed JSON value.
    ///
    /// Every object is decoded with its `children` detached and the tree is
    /// reassembled from an explicit stack, so nesting depth is bounded only
    /// by memory.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        // Decoded nodes in pre-order, each with the index of its parent
        let mut nodes: Vec<DesignNode> = Vec::new();
        let mut parents: Vec<usize> = Vec::new();
        let mut pending = vec![(value, 0usize)];

        while let Some((raw, parent)) = pending.pop() {
            let index = nodes.len();
            let (mut node, children) = decode_shallow(raw)?;
            if let Some(children) = children {
                node.children = Some(Vec::with_capacity(children.len()));
                pending.extend(children.iter().rev().map(|child| (child, index)));
            }
            nodes.push(node);
            parents.push(parent);
        }

        // Later indices are deeper or further right, so each node is complete
        // by the time it is moved into its parent. Siblings arrive last-first.
        for index in (1..nodes.len()).rev() {
            let mut node = std::mem::take(&mut nodes[index]);
            if let Some(children) = node.children.as_mut() {
                children.reverse();
            }
            if let Some(siblings) = nodes[parents[index]].children.as_mut() {
                siblings.push(node);
            }
        }

        let mut root = std::mem::take(&mut nodes[0]);
        if let Some(children) = root.children.as_mut() {
            children.reverse();
        }
        Ok(root)
    }

    /// Encode the node as a JSON value
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_layer_index(mut self, index: i64) -> Self {
        self.layer_index = Some(index);
        self
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_fills(mut self, fills: Vec<Paint>) -> Self {
        self.fills = Some(fills);
        self
    }

    pub fn with_strokes(mut self, strokes: Vec<Paint>, weight: f64) -> Self {
        self.strokes = Some(strokes);
        self.stroke_weight = Some(weight);
        self
    }

    pub fn with_effects(mut self, effects: Vec<Effect>) -> Self {
        self.effects = Some(effects);
        self
    }

    pub fn with_text(mut self, characters: impl Into<String>, font: FontName, size: f64) -> Self {
        self.characters = Some(characters.into());
        self.font_name = Some(font);
        self.font_size = Some(size);
        self
    }

    pub fn with_text_segments(mut self, segments: Vec<TextSegment>) -> Self {
        self.text_segments = Some(segments);
        self
    }

    pub fn with_auto_layout(mut self, mode: LayoutMode, spacing: f64, padding: Padding) -> Self {
        self.layout_mode = Some(mode);
        self.item_spacing = Some(spacing);
        self.with_padding(padding)
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding_top = Some(padding.top);
        self.padding_right = Some(padding.right);
        self.padding_bottom = Some(padding.bottom);
        self.padding_left = Some(padding.left);
        self
    }

    pub fn with_component_key(mut self, key: impl Into<String>) -> Self {
        self.component_key = Some(key.into());
        self
    }

    pub fn with_main_component_key(mut self, key: impl Into<String>) -> Self {
        self.main_component_key = Some(key.into());
        self
    }

    pub fn with_image_data(mut self, bytes: Vec<u8>) -> Self {
        self.image_data = Some(ImagePayload::new(bytes));
        self
    }

    pub fn with_children(mut self, children: Vec<DesignNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn with_child(mut self, child: DesignNode) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// A node is a container only if it has at least one child
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Children as a slice; empty when absent
    pub fn child_nodes(&self) -> &[DesignNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn child_count(&self) -> usize {
        self.child_nodes().len()
    }

    /// Whether this node is a component or component set
    pub fn is_definitional(&self) -> bool {
        self.kind.is_definitional()
    }

    /// Transport sort key; a missing index sorts as 0
    pub fn layer_index_or_default(&self) -> i64 {
        self.layer_index.unwrap_or(0)
    }

    /// All four padding sides, if every one of them is set
    pub fn padding(&self) -> Option<Padding> {
        Some(Padding {
            top: self.padding_top?,
            right: self.padding_right?,
            bottom: self.padding_bottom?,
            left: self.padding_left?,
        })
    }

    /// Visit every node in pre-order with its depth (root = 0).
    ///
    /// Uses an explicit stack, so depth is bounded only by memory.
    pub fn walk<F: FnMut(&DesignNode, usize)>(&self, mut visit: F) {
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            visit(node, depth);
            for child in node.child_nodes().iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Snapshot transformations
    // -------------------------------------------------------------------------

    /// Copy of this tree with `edit` applied to every node
    pub fn transformed<F: FnMut(&mut DesignNode)>(&self, mut edit: F) -> DesignNode {
        let mut root = self.clone();
        let mut stack: Vec<&mut DesignNode> = vec![&mut root];
        while let Some(node) = stack.pop() {
            edit(&mut *node);
            if let Some(children) = node.children.as_mut() {
                stack.extend(children.iter_mut());
            }
        }
        root
    }

    /// Copy with `_layerIndex` removed at every level
    pub fn without_transport_metadata(&self) -> DesignNode {
        self.transformed(|node| node.layer_index = None)
    }

    /// Copy with transport metadata and every host-assigned identifier removed
    pub fn without_host_ids(&self) -> DesignNode {
        self.transformed(|node| {
            node.layer_index = None;
            node.id = None;
            node.main_component_id = None;
            node.overrides = None;
        })
    }

    /// Copy with every paint and effect color quantized to `precision` decimals
    pub fn with_rounded_paints(&self, precision: u32) -> DesignNode {
        let round_paints = |paints: &mut Option<Vec<Paint>>| {
            if let Some(list) = paints.as_mut() {
                for paint in list.iter_mut() {
                    *paint = paint.rounded(precision);
                }
            }
        };
        self.transformed(|node| {
            round_paints(&mut node.fills);
            round_paints(&mut node.strokes);
            if let Some(effects) = node.effects.as_mut() {
                for effect in effects.iter_mut() {
                    *effect = effect.rounded(precision);
                }
            }
            if let Some(segments) = node.text_segments.as_mut() {
                for segment in segments.iter_mut() {
                    round_paints(&mut segment.fills);
                }
            }
        })
    }
}

/// Decode one object without its subtree, handing back the raw children
fn decode_shallow(raw: &serde_json::Value) -> Result<(DesignNode, Option<&[serde_json::Value]>)> {
    let serde_json::Value::Object(map) = raw else {
        // Not an object; serde reports the type mismatch
        return Ok((DesignNode::deserialize(raw)?, None));
    };

    let fields: serde_json::Map<String, serde_json::Value> = map
        .iter()
        .filter(|(key, _)| key.as_str() != "children")
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    let node = DesignNode::deserialize(&serde_json::Value::Object(fields))?;

    let children = match map.get("children") {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::Array(items)) => Some(items.as_slice()),
        Some(_) => {
            return Err(<serde_json::Error as serde::de::Error>::custom(
                "invalid type for children, expected a sequence",
            )
            .into())
        }
    };
    Ok((node, children))
}
