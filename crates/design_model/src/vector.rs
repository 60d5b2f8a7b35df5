//! Vector geometry: path strings and full vector networks

use crate::{HandleMirroring, Paint, StrokeCap, StrokeJoin, Vector2, WindingRule};
use serde::{Deserialize, Serialize};

/// SVG-style path with its fill rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorPath {
    pub winding_rule: WindingRule,
    pub data: String,
}

impl VectorPath {
    pub fn new(winding_rule: WindingRule, data: impl Into<String>) -> Self {
        Self {
            winding_rule,
            data: data.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorVertex {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_cap: Option<StrokeCap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_join: Option<StrokeJoin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_mirroring: Option<HandleMirroring>,
}

impl VectorVertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            stroke_cap: None,
            stroke_join: None,
            corner_radius: None,
            handle_mirroring: None,
        }
    }
}

/// Edge between two vertices, by index, with optional tangent handles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorSegment {
    pub start: usize,
    pub end: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tangent_start: Option<Vector2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tangent_end: Option<Vector2>,
}

impl VectorSegment {
    pub fn straight(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            tangent_start: None,
            tangent_end: None,
        }
    }
}

/// Filled area bounded by closed loops of segment indices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorRegion {
    pub winding_rule: WindingRule,
    pub loops: Vec<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
}

/// Vertex/segment/region graph of a vector node
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VectorNetwork {
    pub vertices: Vec<VectorVertex>,
    pub segments: Vec<VectorSegment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<VectorRegion>,
}

impl VectorNetwork {
    /// Closed polygon through the given points
    pub fn polygon(points: &[Vector2]) -> Self {
        let vertices = points.iter().map(|p| VectorVertex::new(p.x, p.y)).collect();
        let n = points.len();
        let segments = (0..n).map(|i| VectorSegment::straight(i, (i + 1) % n)).collect();
        let regions = if n >= 3 {
            vec![VectorRegion {
                winding_rule: WindingRule::NonZero,
                loops: vec![(0..n).collect()],
                fills: None,
            }]
        } else {
            Vec::new()
        };
        Self {
            vertices,
            segments,
            regions,
        }
    }

    /// Check that every segment and loop refers to an existing index.
    ///
    /// Returns the first dangling reference as a message.
    pub fn dangling_reference(&self) -> Option<String> {
        let vertex_count = self.vertices.len();
        for (i, seg) in self.segments.iter().enumerate() {
            if seg.start >= vertex_count || seg.end >= vertex_count {
                return Some(format!("segment {} references a missing vertex", i));
            }
        }
        let segment_count = self.segments.len();
        for (r, region) in self.regions.iter().enumerate() {
            if region.loops.iter().flatten().any(|&s| s >= segment_count) {
                return Some(format!("region {} references a missing segment", r));
            }
        }
        None
    }
}
