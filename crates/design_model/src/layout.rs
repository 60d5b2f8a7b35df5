//! Constraints, layout grids, guides, and export presets

use crate::{
    Color, ConstraintType, ExportConstraintType, ExportFormat, GuideAxis, LayoutGridAlignment,
    LayoutGridPattern,
};
use serde::{Deserialize, Serialize};

/// Horizontal and vertical anchoring relative to the parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    pub horizontal: ConstraintType,
    pub vertical: ConstraintType,
}

impl Constraints {
    pub fn new(horizontal: ConstraintType, vertical: ConstraintType) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Pinned to the parent's top-left corner
    pub fn pinned_top_left() -> Self {
        Self::new(ConstraintType::Min, ConstraintType::Min)
    }

    pub fn centered() -> Self {
        Self::new(ConstraintType::Center, ConstraintType::Center)
    }

    /// Stretches with the parent on both axes
    pub fn stretch() -> Self {
        Self::new(ConstraintType::Stretch, ConstraintType::Stretch)
    }

    pub fn scale() -> Self {
        Self::new(ConstraintType::Scale, ConstraintType::Scale)
    }

    pub fn is_stretching(&self) -> bool {
        self.horizontal == ConstraintType::Stretch || self.vertical == ConstraintType::Stretch
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::pinned_top_left()
    }
}

/// Layout grid drawn on a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutGrid {
    pub pattern: LayoutGridPattern,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<LayoutGridAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gutter_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl LayoutGrid {
    /// Column grid with a fixed count and gutter
    pub fn columns(count: u32, gutter_size: f64) -> Self {
        Self {
            pattern: LayoutGridPattern::Columns,
            section_size: None,
            visible: Some(true),
            color: None,
            alignment: Some(LayoutGridAlignment::Stretch),
            gutter_size: Some(gutter_size),
            offset: Some(0.0),
            count: Some(count),
        }
    }

    /// Square grid with the given cell size
    pub fn square(section_size: f64) -> Self {
        Self {
            pattern: LayoutGridPattern::Grid,
            section_size: Some(section_size),
            visible: Some(true),
            color: None,
            alignment: None,
            gutter_size: None,
            offset: None,
            count: None,
        }
    }
}

/// Ruler guide on a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub axis: GuideAxis,
    pub offset: f64,
}

/// Export constraint of a preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConstraint {
    #[serde(rename = "type")]
    pub kind: ExportConstraintType,
    pub value: f64,
}

/// Export preset attached to a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSetting {
    pub format: ExportFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<ExportConstraint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents_only: Option<bool>,
}

impl ExportSetting {
    /// Raster preset at a scale factor, e.g. `@2x`
    pub fn scaled(format: ExportFormat, scale: f64) -> Self {
        Self {
            format,
            suffix: Some(format!("@{}x", scale)),
            constraint: Some(ExportConstraint {
                kind: ExportConstraintType::Scale,
                value: scale,
            }),
            contents_only: None,
        }
    }
}
