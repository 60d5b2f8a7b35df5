//! Post-paint effects: shadows and blurs

use crate::{BlendMode, Color, EffectKind, Vector2};
use serde::{Deserialize, Serialize};

/// One entry of a node's effect stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    #[serde(rename = "type")]
    pub kind: EffectKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Blur radius in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Vector2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_shadow_behind_node: Option<bool>,
}

impl Effect {
    /// Bare effect of the given kind
    pub fn of_kind(kind: EffectKind) -> Self {
        Self {
            kind,
            visible: None,
            radius: None,
            color: None,
            offset: None,
            spread: None,
            blend_mode: None,
            show_shadow_behind_node: None,
        }
    }

    fn shadow(kind: EffectKind, color: Color, offset: Vector2, radius: f64) -> Self {
        Self {
            visible: Some(true),
            radius: Some(radius),
            color: Some(color),
            offset: Some(offset),
            spread: Some(0.0),
            blend_mode: Some(BlendMode::Normal),
            ..Self::of_kind(kind)
        }
    }

    /// Drop shadow cast outside the node
    pub fn drop_shadow(color: Color, offset: Vector2, radius: f64) -> Self {
        Self::shadow(EffectKind::DropShadow, color, offset, radius)
    }

    /// Shadow cast inside the node
    pub fn inner_shadow(color: Color, offset: Vector2, radius: f64) -> Self {
        Self::shadow(EffectKind::InnerShadow, color, offset, radius)
    }

    /// Blur of the node itself
    pub fn layer_blur(radius: f64) -> Self {
        Self {
            visible: Some(true),
            radius: Some(radius),
            ..Self::of_kind(EffectKind::LayerBlur)
        }
    }

    /// Blur of whatever is behind the node
    pub fn background_blur(radius: f64) -> Self {
        Self {
            visible: Some(true),
            radius: Some(radius),
            ..Self::of_kind(EffectKind::BackgroundBlur)
        }
    }

    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = Some(spread);
        self
    }

    pub fn is_shadow(&self) -> bool {
        matches!(self.kind, EffectKind::DropShadow | EffectKind::InnerShadow)
    }

    pub fn is_blur(&self) -> bool {
        matches!(self.kind, EffectKind::LayerBlur | EffectKind::BackgroundBlur)
    }

    pub fn rounded(&self, precision: u32) -> Self {
        Self {
            color: self.color.map(|c| c.rounded(precision)),
            ..self.clone()
        }
    }
}
