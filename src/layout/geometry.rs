//! Measurement and colour primitives for slide layout.
//!
//! OOXML positions drawing objects in English Metric Units (EMU):
//! 914 400 EMU per inch, 12 700 EMU per point. Layout arithmetic in this
//! crate is done in inches and points (the units the letter's fixed
//! coordinates are expressed in) and converted to EMU only at the package
//! boundary. Run sizes and paragraph spacing use centipoints (hundredths of
//! a point), per the DrawingML schema.

use crate::error::ComposeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// EMU per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// EMU per point.
pub const EMU_PER_PT: i64 = 12_700;

/// A length in English Metric Units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Emu(pub i64);

impl Emu {
    /// Convert a length in inches.
    pub fn from_inches(inches: f64) -> Self {
        Emu((inches * EMU_PER_INCH as f64).round() as i64)
    }

    /// Convert a length in points.
    pub fn from_points(points: f64) -> Self {
        Emu((points * EMU_PER_PT as f64).round() as i64)
    }
}

impl fmt::Display for Emu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Font size or paragraph spacing in centipoints (`sz`/`val` attributes).
pub fn centipoints(points: f64) -> i64 {
    (points * 100.0).round() as i64
}

/// Position and extent of a shape, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: Emu,
    pub y: Emu,
    pub cx: Emu,
    pub cy: Emu,
}

impl Rect {
    /// Build a frame from inch coordinates: left, top, width, height.
    pub fn from_inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Rect {
            x: Emu::from_inches(left),
            y: Emu::from_inches(top),
            cx: Emu::from_inches(width),
            cy: Emu::from_inches(height),
        }
    }
}

/// An opaque RGB colour.
///
/// Serialises as the `#RRGGBB` string the form layer sends, and renders as
/// the six-digit uppercase hex DrawingML expects in `<a:srgbClr val="…"/>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        RgbColor { r, g, b }
    }

    /// Parse a `#RRGGBB` (or `RRGGBB`) string.
    pub fn from_hex(value: &str) -> Result<Self, ComposeError> {
        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ComposeError::InvalidColor {
                value: value.to_string(),
            });
        }
        let parse = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
        Ok(RgbColor {
            r: parse(0..2).map_err(|_| ComposeError::InvalidColor {
                value: value.to_string(),
            })?,
            g: parse(2..4).map_err(|_| ComposeError::InvalidColor {
                value: value.to_string(),
            })?,
            b: parse(4..6).map_err(|_| ComposeError::InvalidColor {
                value: value.to_string(),
            })?,
        })
    }

    /// Six-digit uppercase hex without the leading `#`, as DrawingML wants it.
    pub fn to_drawingml(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// `#RRGGBB` form, as the form layer sends it.
    pub fn to_hex(self) -> String {
        format!("#{}", self.to_drawingml())
    }
}

impl Serialize for RgbColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        RgbColor::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
