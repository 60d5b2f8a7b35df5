//! Text value objects: fonts, spacing units, hyperlinks, and styled ranges

use crate::{LineHeightUnit, Paint, SpacingUnit, TextCase, TextDecoration};
use serde::{Deserialize, Serialize};

/// Font family and style pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }

    /// Regular style of the given family
    pub fn regular(family: impl Into<String>) -> Self {
        Self::new(family, "Regular")
    }
}

impl Default for FontName {
    fn default() -> Self {
        Self::regular("Inter")
    }
}

/// Line height as a tagged unit/value pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineHeight {
    pub unit: LineHeightUnit,
    /// Absent for `AUTO`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl LineHeight {
    pub fn auto() -> Self {
        Self {
            unit: LineHeightUnit::Auto,
            value: None,
        }
    }

    pub fn pixels(value: f64) -> Self {
        Self {
            unit: LineHeightUnit::Pixels,
            value: Some(value),
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            unit: LineHeightUnit::Percent,
            value: Some(value),
        }
    }

    /// Resolve to pixels for a given font size; `None` for automatic height
    pub fn resolve(&self, font_size: f64) -> Option<f64> {
        match (&self.unit, self.value) {
            (LineHeightUnit::Pixels, Some(v)) => Some(v),
            (LineHeightUnit::Percent, Some(v)) => Some(font_size * v / 100.0),
            _ => None,
        }
    }
}

/// Letter spacing as a tagged unit/value pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterSpacing {
    pub unit: SpacingUnit,
    pub value: f64,
}

impl LetterSpacing {
    pub fn pixels(value: f64) -> Self {
        Self {
            unit: SpacingUnit::Pixels,
            value,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            unit: SpacingUnit::Percent,
            value,
        }
    }
}

impl Default for LetterSpacing {
    fn default() -> Self {
        Self::percent(0.0)
    }
}

/// Hyperlink target: a URL, another node, or a target type this crate does
/// not know, kept verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHyperlink", into = "RawHyperlink")]
pub enum Hyperlink {
    Url(String),
    Node(String),
    Other { kind: String, value: serde_json::Value },
}

/// Wire shape of [`Hyperlink`]: `{"type": ..., "value": ...}`
#[derive(Serialize, Deserialize)]
struct RawHyperlink {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    value: serde_json::Value,
}

impl From<RawHyperlink> for Hyperlink {
    fn from(raw: RawHyperlink) -> Self {
        match (raw.kind.as_str(), raw.value) {
            ("URL", serde_json::Value::String(url)) => Self::Url(url),
            ("NODE", serde_json::Value::String(id)) => Self::Node(id),
            (_, value) => Self::Other {
                kind: raw.kind,
                value,
            },
        }
    }
}

impl From<Hyperlink> for RawHyperlink {
    fn from(link: Hyperlink) -> Self {
        match link {
            Hyperlink::Url(url) => Self {
                kind: "URL".to_string(),
                value: serde_json::Value::String(url),
            },
            Hyperlink::Node(id) => Self {
                kind: "NODE".to_string(),
                value: serde_json::Value::String(id),
            },
            Hyperlink::Other { kind, value } => Self { kind, value },
        }
    }
}

/// Style override applied to the half-open character range `[start, end)`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSegment {
    pub start: usize,
    pub end: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<FontName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_case: Option<TextCase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<LineHeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<LetterSpacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<Hyperlink>,
}

impl TextSegment {
    /// Unstyled segment covering `[start, end)`
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            ..Default::default()
        }
    }

    pub fn with_font(mut self, font: FontName, size: f64) -> Self {
        self.font_name = Some(font);
        self.font_size = Some(size);
        self
    }

    pub fn with_fills(mut self, fills: Vec<Paint>) -> Self {
        self.fills = Some(fills);
        self
    }

    pub fn with_hyperlink(mut self, link: Hyperlink) -> Self {
        self.hyperlink = Some(link);
        self
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the character at `offset` falls inside this segment
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Report whether any two segments cover a common character.
///
/// Segments are expected to be disjoint; this is a diagnostic only and the
/// engine carries overlapping segments through unchanged.
pub fn segments_overlap(segments: &[TextSegment]) -> bool {
    let mut ranges: Vec<(usize, usize)> = segments
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| (s.start, s.end))
        .collect();
    ranges.sort_unstable();
    ranges.windows(2).any(|pair| pair[1].0 < pair[0].1)
}
