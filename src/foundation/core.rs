use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{LifeGridError, LifeGridResult};

pub use kurbo::{BezPath, Point, Rect, Size};

/// Opaque 8-bit sRGB color.
///
/// Serialized as a `"#RRGGBB"` string. Deserialization also accepts an `[r, g, b]` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` / `RRGGBB` (case-insensitive).
    pub fn from_hex(s: &str) -> LifeGridResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(LifeGridError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> LifeGridResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| LifeGridError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        Ok(Self {
            r: hex_byte(&digits[0..2])?,
            g: hex_byte(&digits[2..4])?,
            b: hex_byte(&digits[4..6])?,
        })
    }

    /// Format as uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb8 {
    type Err = LifeGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr([u8; 3]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::from_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr([r, g, b]) => Ok(Self::new(r, g, b)),
        }
    }
}

/// Default fill of a cell that no activity paints, one per side of "now".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Baseline {
    /// Baseline for lived (past) cells.
    #[serde(default = "default_lived_color")]
    pub lived: Rgb8,
    /// Baseline for unlived (future) cells.
    #[serde(default = "default_unlived_color")]
    pub unlived: Rgb8,
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            lived: default_lived_color(),
            unlived: default_unlived_color(),
        }
    }
}

fn default_lived_color() -> Rgb8 {
    Rgb8::new(0x3B, 0x82, 0xF6)
}

fn default_unlived_color() -> Rgb8 {
    Rgb8::new(0xE5, 0xE7, 0xEB)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
