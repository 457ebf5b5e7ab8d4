//! RGBA color type used for clear colors and CPU shading output.
//!
//! Components are `f32` in [0, 1], matching what the GL clear and
//! uniform calls take. Serializes as a hex string for config files.

use crate::error::LumenError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGBA color with components in [0, 1].
///
/// Serializes as `"#rrggbb"` when fully opaque and `"#rrggbbaa"` otherwise.
/// The hex round-trip has 8-bit quantization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque black, the interactive variant's background.
    pub const BLACK: Rgba = Rgba::opaque(0.0, 0.0, 0.0);

    /// Cornflower blue as the static variant draws it (0.39, 0.58, 0.93).
    pub const CORNFLOWER_BLUE: Rgba = Rgba::opaque(0.39, 0.58, 0.93);

    /// Creates a fully opaque color.
    pub const fn opaque(r: f32, g: f32, b: f32) -> Rgba {
        Rgba { r, g, b, a: 1.0 }
    }

    /// Parses `"#rrggbb"`, `"#rrggbbaa"` or the same without `#` (case insensitive).
    ///
    /// Returns `LumenError::InvalidColor` for any other shape.
    pub fn from_hex(hex: &str) -> Result<Rgba, LumenError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return Err(LumenError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {}",
                hex.len()
            )));
        }
        if !hex.is_ascii() {
            return Err(LumenError::InvalidColor(format!("non-ascii color: {hex}")));
        }

        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|e| LumenError::InvalidColor(format!("invalid {name} component: {e}")))
        };

        let r = channel(0..2, "red")?;
        let g = channel(2..4, "green")?;
        let b = channel(4..6, "blue")?;
        let a = if hex.len() == 8 {
            channel(6..8, "alpha")?
        } else {
            1.0
        };

        Ok(Rgba { r, g, b, a })
    }

    /// Formats as `"#rrggbb"`, or `"#rrggbbaa"` when alpha is below 1.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Quantizes to four bytes, clamping each component to [0, 1] first.
    ///
    /// NaN components quantize to 0.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
