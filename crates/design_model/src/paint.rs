//! Fill and stroke paints
//!
//! A single `Paint` shape serves both fills and strokes. Kinds are open, so a
//! paint of a kind this crate does not know survives a round trip untouched.

use crate::{BlendMode, Color, ImagePayload, PaintKind, ScaleMode, Transform};
use serde::{Deserialize, Serialize};

/// Color stop along a gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Position along the gradient (0.0 to 1.0)
    pub position: f64,
    pub color: Color,
}

impl ColorStop {
    pub fn new(position: f64, color: Color) -> Self {
        Self { position, color }
    }
}

/// Image adjustment filters
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows: Option<f64>,
}

/// One paint layer of a fill or stroke stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,

    // Solid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    // Gradients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_stops: Option<Vec<ColorStop>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_transform: Option<Transform>,

    // Image & video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_mode: Option<ScaleMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_transform: Option<Transform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<ImageFilters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_hash: Option<String>,
    /// Image bytes carried inline instead of by hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<ImagePayload>,
}

impl Paint {
    /// Bare paint of the given kind with every property inherited
    pub fn of_kind(kind: PaintKind) -> Self {
        Self {
            kind,
            visible: None,
            opacity: None,
            blend_mode: None,
            color: None,
            gradient_stops: None,
            gradient_transform: None,
            scale_mode: None,
            image_hash: None,
            image_transform: None,
            scaling_factor: None,
            rotation: None,
            filters: None,
            video_hash: None,
            image_data: None,
        }
    }

    /// Solid color fill
    pub fn solid(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::of_kind(PaintKind::Solid)
        }
    }

    /// Solid color fill with explicit opacity
    pub fn solid_with_opacity(color: Color, opacity: f64) -> Self {
        Self {
            opacity: Some(opacity.clamp(0.0, 1.0)),
            ..Self::solid(color)
        }
    }

    fn gradient(kind: PaintKind, stops: Vec<ColorStop>) -> Self {
        Self {
            gradient_stops: Some(stops),
            gradient_transform: Some(Transform::IDENTITY),
            ..Self::of_kind(kind)
        }
    }

    /// Two-stop linear gradient from `start` to `end`
    pub fn linear_gradient(start: Color, end: Color) -> Self {
        Self::gradient(
            PaintKind::GradientLinear,
            vec![ColorStop::new(0.0, start), ColorStop::new(1.0, end)],
        )
    }

    /// Radial gradient from an explicit stop list
    pub fn radial_gradient(stops: Vec<ColorStop>) -> Self {
        Self::gradient(PaintKind::GradientRadial, stops)
    }

    /// Angular gradient from an explicit stop list
    pub fn angular_gradient(stops: Vec<ColorStop>) -> Self {
        Self::gradient(PaintKind::GradientAngular, stops)
    }

    /// Diamond gradient from an explicit stop list
    pub fn diamond_gradient(stops: Vec<ColorStop>) -> Self {
        Self::gradient(PaintKind::GradientDiamond, stops)
    }

    /// Image fill referencing a host image by hash
    pub fn image(image_hash: impl Into<String>, scale_mode: ScaleMode) -> Self {
        Self {
            image_hash: Some(image_hash.into()),
            scale_mode: Some(scale_mode),
            ..Self::of_kind(PaintKind::Image)
        }
    }

    /// Image fill carrying its bytes inline
    pub fn embedded_image(bytes: Vec<u8>, scale_mode: ScaleMode) -> Self {
        Self {
            image_data: Some(ImagePayload::new(bytes)),
            scale_mode: Some(scale_mode),
            ..Self::of_kind(PaintKind::Image)
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = Some(blend_mode);
        self
    }

    pub fn is_solid(&self) -> bool {
        self.kind == PaintKind::Solid
    }

    pub fn is_gradient(&self) -> bool {
        matches!(
            self.kind,
            PaintKind::GradientLinear
                | PaintKind::GradientRadial
                | PaintKind::GradientAngular
                | PaintKind::GradientDiamond
        )
    }

    pub fn is_image(&self) -> bool {
        self.kind == PaintKind::Image
    }

    pub fn is_video(&self) -> bool {
        self.kind == PaintKind::Video
    }

    pub fn is_known_kind(&self) -> bool {
        self.kind.is_known()
    }

    /// Whether the paint contributes to rendering (missing flag means visible)
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }

    /// Same paint with every color quantized to `precision` decimals
    pub fn rounded(&self, precision: u32) -> Self {
        let mut paint = self.clone();
        paint.color = paint.color.map(|c| c.rounded(precision));
        if let Some(stops) = paint.gradient_stops.as_mut() {
            for stop in stops {
                stop.color = stop.color.rounded(precision);
            }
        }
        paint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_builder() {
        let paint = Paint::solid(Color::rgb(1.0, 0.0, 0.0));
        assert!(paint.is_solid());
        assert!(!paint.is_gradient());
        assert!(paint.is_visible());

        let json = serde_json::to_value(&paint).unwrap();
        assert_eq!(json["type"], "SOLID");
        assert_eq!(json["color"]["r"], 1.0);
        assert!(json.get("opacity").is_none());
    }

    #[test]
    fn test_solid_opacity_clamped() {
        let paint = Paint::solid_with_opacity(Color::BLACK, 1.7);
        assert_eq!(paint.opacity, Some(1.0));
    }

    #[test]
    fn test_gradient_builders() {
        let linear = Paint::linear_gradient(Color::BLACK, Color::WHITE);
        assert!(linear.is_gradient());
        assert_eq!(linear.gradient_stops.as_ref().map(Vec::len), Some(2));

        let stops = vec![ColorStop::new(0.0, Color::BLACK)];
        assert!(Paint::radial_gradient(stops.clone()).is_gradient());
        assert!(Paint::angular_gradient(stops.clone()).is_gradient());
        assert!(Paint::diamond_gradient(stops).is_gradient());
    }

    #[test]
    fn test_image_builders() {
        let by_hash = Paint::image("abc123", ScaleMode::Fill);
        assert!(by_hash.is_image());
        assert_eq!(by_hash.image_hash.as_deref(), Some("abc123"));

        let inline = Paint::embedded_image(vec![1, 2, 3], ScaleMode::Fit);
        assert!(inline.is_image());
        let json = serde_json::to_value(&inline).unwrap();
        assert_eq!(json["imageData"], "AQID");
        assert_eq!(json["scaleMode"], "FIT");
    }

    #[test]
    fn test_unknown_paint_kind_round_trips() {
        let raw = r#"{"type":"PATTERN","opacity":0.5}"#;
        let paint: Paint = serde_json::from_str(raw).unwrap();
        assert!(!paint.is_known_kind());
        assert!(!paint.is_solid());
        assert_eq!(serde_json::to_string(&paint).unwrap(), raw);
    }

    #[test]
    fn test_rounded_quantizes_stops() {
        let paint = Paint::linear_gradient(Color::rgb(0.1 + 0.2, 0.0, 0.0), Color::WHITE);
        let rounded = paint.rounded(6);
        let stops = rounded.gradient_stops.unwrap();
        assert_eq!(stops[0].color.r, 0.3);
    }
}
