//! Inline raster payloads carried with image fills and nodes

use crate::{DesignModelError, Result};
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Raw image bytes, base64-encoded on the wire
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ImagePayload(Vec<u8>);

impl ImagePayload {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Decode from base64, accepting an optional `data:<mime>;base64,` prefix
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let body = match encoded.split_once(";base64,") {
            Some((prefix, body)) if prefix.starts_with("data:") => body,
            _ => encoded,
        };
        BASE64_STANDARD
            .decode(body.trim())
            .map(Self)
            .map_err(|e| DesignModelError::InvalidImagePayload(e.to_string()))
    }

    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(&self.0)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sniff the image format from its magic bytes
    pub fn mime_type(&self) -> Option<&'static str> {
        let b = self.0.as_slice();
        if b.starts_with(&[0x89, b'P', b'N', b'G']) {
            Some("image/png")
        } else if b.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some("image/jpeg")
        } else if b.starts_with(b"GIF8") {
            Some("image/gif")
        } else if b.len() >= 12 && &b[0..4] == b"RIFF" && &b[8..12] == b"WEBP" {
            Some("image/webp")
        } else {
            None
        }
    }
}

// Payloads can be megabytes; keep debug output readable.
impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ImagePayload({} bytes)", self.0.len())
    }
}

impl Serialize for ImagePayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for ImagePayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Self::from_base64(&encoded).map_err(serde::de::Error::custom)
    }
}
