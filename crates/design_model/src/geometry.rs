//! Geometry value objects: vectors, affine transforms, padding, arcs

use serde::{Deserialize, Serialize};

/// 2D vector or point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);
}

/// 2x3 affine transform, stored row-major as `[[a, c, tx], [b, d, ty]]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transform(pub [[f64; 3]; 2]);

impl Transform {
    pub const IDENTITY: Transform = Transform([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);

    /// Pure translation
    pub fn translation(tx: f64, ty: f64) -> Self {
        Transform([[1.0, 0.0, tx], [0.0, 1.0, ty]])
    }

    /// Rotation about the origin, in degrees counter-clockwise
    pub fn rotation(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Transform([[cos, sin, 0.0], [-sin, cos, 0.0]])
    }

    /// Translation component
    pub fn offset(&self) -> Vector2 {
        Vector2::new(self.0[0][2], self.0[1][2])
    }

    /// Apply the transform to a point
    pub fn apply(&self, point: Vector2) -> Vector2 {
        let [[a, c, tx], [b, d, ty]] = self.0;
        Vector2::new(a * point.x + c * point.y + tx, b * point.x + d * point.y + ty)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Four-sided padding
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    /// Same padding on every side
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Vertical and horizontal padding
    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Per-corner radii
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_right == self.bottom_right
            && self.bottom_right == self.bottom_left
    }
}

/// Arc parameters for ring and pie ellipses, angles in radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcData {
    pub starting_angle: f64,
    pub ending_angle: f64,
    /// Inner radius ratio (0.0 = pie, >0 = ring)
    pub inner_radius: f64,
}

impl ArcData {
    /// Full closed ellipse
    pub fn full() -> Self {
        Self {
            starting_angle: 0.0,
            ending_angle: std::f64::consts::TAU,
            inner_radius: 0.0,
        }
    }

    pub fn is_ring(&self) -> bool {
        self.inner_radius > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_wire_shape() {
        let t = Transform::translation(10.0, 20.0);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "[[1.0,0.0,10.0],[0.0,1.0,20.0]]");

        let back: Transform = serde_json::from_str(&json).unwrap();
        assert_eq!(back.offset(), Vector2::new(10.0, 20.0));
    }

    #[test]
    fn test_transform_apply() {
        let t = Transform::translation(5.0, -5.0);
        assert_eq!(t.apply(Vector2::new(1.0, 1.0)), Vector2::new(6.0, -4.0));
        assert!(Transform::default().is_identity());

        let r = Transform::rotation(90.0);
        let p = r.apply(Vector2::new(1.0, 0.0));
        assert!(p.x.abs() < 1e-9);
        assert!((p.y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_padding_helpers() {
        let p = Padding::symmetric(8.0, 16.0);
        assert_eq!(p.top, 8.0);
        assert_eq!(p.left, 16.0);
        assert_eq!(Padding::uniform(4.0).bottom, 4.0);
    }

    #[test]
    fn test_arc_data() {
        assert!(!ArcData::full().is_ring());
        let ring = ArcData {
            inner_radius: 0.5,
            ..ArcData::full()
        };
        assert!(ring.is_ring());
    }
}
