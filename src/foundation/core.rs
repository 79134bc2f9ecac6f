use crate::foundation::error::{PaperError, PaperResult};
use serde::{Deserialize, Serialize};

/// Integer pixel coordinate. `(0, 0)` is the top-left corner of the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    /// Column, growing to the right.
    pub x: i32,
    /// Row, growing downwards.
    pub y: i32,
}

impl Point {
    /// Construct a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `(dx, dy)`, saturating at the `i32` range.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([i32; 2]),
            Obj { x: i32, y: i32 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr([x, y]) => Ok(Self { x, y }),
            Repr::Obj { x, y } => Ok(Self { x, y }),
        }
    }
}

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in `[r, g, b]` order.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn parse_hex(s: &str) -> PaperResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return Err(PaperError::validation(format!(
                "color \"{s}\" must have the form #rrggbb"
            )));
        }

        fn hex_byte(pair: &str) -> PaperResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| PaperError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        Ok(Self {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
        })
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
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
            Obj { r: u8, g: u8, b: u8 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => Ok(Self::from(v)),
            Repr::Obj { r, g, b } => Ok(Self { r, g, b }),
        }
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Largest accepted edge length.
    pub const MAX_DIM: u32 = 16_384;

    /// Create validated canvas dimensions.
    pub fn new(width: u32, height: u32) -> PaperResult<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    pub(crate) fn validate(self) -> PaperResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PaperError::validation("canvas width and height must be > 0"));
        }
        if self.width > Self::MAX_DIM || self.height > Self::MAX_DIM {
            return Err(PaperError::validation(format!(
                "canvas {}x{} exceeds {max}x{max}",
                self.width,
                self.height,
                max = Self::MAX_DIM
            )));
        }
        Ok(())
    }

    /// Return `true` when `p` lies on the canvas.
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as i64) < i64::from(self.width) && (p.y as i64) < i64::from(self.height)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
