//! Color types and vertex color layouts

use serde::Serialize;
use std::fmt;

/// An 8-bit RGB color
///
/// Ordering is lexicographic on `(r, g, b)`, which is the tie-break order
/// used when ranking colors with equal counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a gray color with all three channels set to `intensity`
    pub const fn gray(intensity: u8) -> Self {
        Self::new(intensity, intensity, intensity)
    }

    /// Quantize normalized 16-bit channels to 8 bits (truncating)
    pub fn from_unorm16(r: u16, g: u16, b: u16) -> Self {
        Self::new(unorm16_to_u8(r), unorm16_to_u8(g), unorm16_to_u8(b))
    }

    /// Quantize normalized float channels to 8 bits (scale by 255, truncate)
    pub fn from_unit_f32(r: f32, g: f32, b: f32) -> Self {
        Self::new(unit_f32_to_u8(r), unit_f32_to_u8(g), unit_f32_to_u8(b))
    }

    /// Channels as an array
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({},{},{})", self.r, self.g, self.b)
    }
}

/// Map a normalized 16-bit channel onto 0..=255, truncating
pub fn unorm16_to_u8(value: u16) -> u8 {
    (u32::from(value) * 255 / 65535) as u8
}

/// Map a normalized float channel onto 0..=255 by multiply-and-truncate
///
/// Out-of-range values saturate and NaN maps to 0; 0.999 maps to 254.
pub fn unit_f32_to_u8(value: f32) -> u8 {
    (value * 255.0) as u8
}

/// Per-vertex colors in the layout the source asset stored them
///
/// Alpha is carried here only because the source carries it; it never
/// reaches a [`Color`].
#[derive(Debug, Clone, PartialEq)]
pub enum VertexColors {
    RgbU8(Vec<[u8; 3]>),
    RgbaU8(Vec<[u8; 4]>),
    RgbU16(Vec<[u16; 3]>),
    RgbaU16(Vec<[u16; 4]>),
    RgbF32(Vec<[f32; 3]>),
    RgbaF32(Vec<[f32; 4]>),
}

impl VertexColors {
    /// Number of per-vertex entries
    pub fn len(&self) -> usize {
        match self {
            VertexColors::RgbU8(c) => c.len(),
            VertexColors::RgbaU8(c) => c.len(),
            VertexColors::RgbU16(c) => c.len(),
            VertexColors::RgbaU16(c) => c.len(),
            VertexColors::RgbF32(c) => c.len(),
            VertexColors::RgbaF32(c) => c.len(),
        }
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the source layout carried an alpha channel
    pub fn has_alpha(&self) -> bool {
        matches!(
            self,
            VertexColors::RgbaU8(_) | VertexColors::RgbaU16(_) | VertexColors::RgbaF32(_)
        )
    }
}

impl From<Vec<Color>> for VertexColors {
    fn from(colors: Vec<Color>) -> Self {
        VertexColors::RgbU8(colors.into_iter().map(Color::to_array).collect())
    }
}
