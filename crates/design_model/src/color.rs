//! Normalized color values and rounding utilities

use crate::{DesignModelError, Result};
use serde::{Deserialize, Serialize};

/// Default number of decimal places kept when quantizing floats
pub const DEFAULT_PRECISION: u32 = 6;

/// Round a value to `decimals` decimal places.
///
/// Non-finite values are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals.min(15) as i32);
    (value * factor).round() / factor
}

fn clamp_channel(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Color with channels in `[0, 1]`.
///
/// Paints carry RGB plus a separate opacity, while effects and gradient stops
/// carry RGBA; `a` is present only in the latter case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawColor")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

/// Wire form before clamping
#[derive(Deserialize)]
struct RawColor {
    #[serde(default)]
    r: f64,
    #[serde(default)]
    g: f64,
    #[serde(default)]
    b: f64,
    #[serde(default)]
    a: Option<f64>,
}

impl From<RawColor> for Color {
    fn from(raw: RawColor) -> Self {
        match raw.a {
            Some(a) => Color::rgba(raw.r, raw.g, raw.b, a),
            None => Color::rgb(raw.r, raw.g, raw.b),
        }
    }
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: None };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: None };

    /// Create an RGB color, clamping each channel
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            a: None,
        }
    }

    /// Create an RGBA color, clamping each channel
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            a: Some(clamp_channel(a)),
            ..Self::rgb(r, g, b)
        }
    }

    /// Create a color from 8-bit channels
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Alpha, treating a missing channel as opaque
    pub fn alpha(&self) -> f64 {
        self.a.unwrap_or(1.0)
    }

    /// Same color with an explicit alpha channel
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: Some(clamp_channel(a)),
            ..self
        }
    }

    /// Quantize every channel to `precision` decimal places
    pub fn rounded(&self, precision: u32) -> Self {
        Self {
            r: round_to(self.r, precision),
            g: round_to(self.g, precision),
            b: round_to(self.b, precision),
            a: self.a.map(|a| round_to(a, precision)),
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when alpha is present
    pub fn to_hex(&self) -> String {
        let to_byte = |v: f64| (v * 255.0).round() as u8;
        match self.a {
            Some(a) => format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                to_byte(self.r),
                to_byte(self.g),
                to_byte(self.b),
                to_byte(a)
            ),
            None => format!(
                "#{:02X}{:02X}{:02X}",
                to_byte(self.r),
                to_byte(self.g),
                to_byte(self.b)
            ),
        }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || DesignModelError::InvalidColor(hex.to_string());
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        // Byte offsets below are only char boundaries for ASCII input
        if !digits.is_ascii() {
            return Err(invalid());
        }

        match digits.len() {
            3 => {
                let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                Self::from_hex(&expanded)
            }
            6 => Ok(Self::from_u8(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
            )),
            8 => {
                let a = byte(&digits[6..8])? as f64 / 255.0;
                Ok(Self::from_u8(
                    byte(&digits[0..2])?,
                    byte(&digits[2..4])?,
                    byte(&digits[4..6])?,
                )
                .with_alpha(a))
            }
            _ => Err(invalid()),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_are_clamped() {
        let c = Color::rgba(1.5, -0.2, 0.5, 2.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.5);
        assert_eq!(c.a, Some(1.0));

        let nan = Color::rgb(f64::NAN, f64::INFINITY, 0.3);
        assert_eq!(nan.r, 0.0);
        assert_eq!(nan.g, 0.0);
    }

    #[test]
    fn test_deserialize_clamps() {
        let c: Color = serde_json::from_str(r#"{"r": 3, "g": 0.25, "b": -1}"#).unwrap();
        assert_eq!(c, Color::rgb(1.0, 0.25, 0.0));
        assert!(c.a.is_none());
    }

    #[test]
    fn test_alpha_omitted_when_absent() {
        let json = serde_json::to_string(&Color::rgb(0.0, 0.5, 1.0)).unwrap();
        assert!(!json.contains("\"a\""));

        let json = serde_json::to_string(&Color::rgba(0.0, 0.5, 1.0, 0.25)).unwrap();
        assert!(json.contains("\"a\":0.25"));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123456789, 6), 0.123457);
        assert_eq!(round_to(0.5, 0), 1.0);
        assert!(round_to(f64::NAN, 6).is_nan());
    }

    #[test]
    fn test_rounded_removes_float_drift() {
        let drifted = Color::rgb(0.1 + 0.2, 0.7, 1.0 / 3.0);
        let rounded = drifted.rounded(DEFAULT_PRECISION);
        assert_eq!(rounded.r, 0.3);
        assert_eq!(rounded.b, 0.333333);
    }

    #[test]
    fn test_hex_round_trip() {
        let c = Color::from_hex("#FF8000").unwrap();
        assert_eq!(c.to_hex(), "#FF8000");

        let short = Color::from_hex("#fff").unwrap();
        assert_eq!(short, Color::WHITE);

        let with_alpha = Color::from_hex("00000080").unwrap();
        assert_eq!(with_alpha.to_hex(), "#00000080");
    }

    #[test]
    fn test_invalid_hex() {
        assert!(matches!(
            Color::from_hex("#GG0000"),
            Err(DesignModelError::InvalidColor(_))
        ));
        assert!(Color::from_hex("#12345").is_err());
        assert!(matches!(
            Color::from_hex("#a\u{e9}123"),
            Err(DesignModelError::InvalidColor(_))
        ));
        assert!(Color::from_hex("\u{e9}\u{e9}\u{e9}").is_err());
    }
}
