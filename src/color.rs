// src/color.rs

//! Defines the `Color` value type, hex-string parsing, and RGBA conversion.
//!
//! Colors travel as `#rrggbb` strings at the crate's boundaries (persisted
//! blobs, UI color pickers) and as packed `Color` structs internally. Parsing
//! deliberately never fails: a string that is not a 6-hex-digit color degrades
//! to opaque black. Embedders depend on this fallback, so it is part of the
//! contract rather than an error case.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque RGB color, one canvas cell's worth of state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An RGBA quadruple as emitted in export buffers. Alpha is always 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Strictly parses a `#rrggbb` / `rrggbb` string (case-insensitive hex,
    /// the leading `#` optional). Returns `None` on any other input.
    pub fn try_from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Color { r, g, b })
    }

    /// Parses a hex color string, degrading malformed input to opaque black.
    pub fn from_hex(hex: &str) -> Color {
        Color::try_from_hex(hex).unwrap_or(Color::BLACK)
    }

    /// Canonical text form, lowercase with leading `#`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub const fn to_rgba(self) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: 255,
        }
    }
}

impl Rgba {
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Converts a hex color string to its RGBA quadruple.
///
/// Malformed input yields opaque black `(0, 0, 0, 255)` instead of an error.
pub fn hex_to_rgb(hex: &str) -> Rgba {
    Color::from_hex(hex).to_rgba()
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    /// Accepts any string, applying the malformed-color fallback. A non-string
    /// value is a shape error and fails deserialization, which callers treat
    /// as a corrupted blob.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Color::from_hex(&s))
    }
}
