use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::core::{CanvasSize, Point, Rgb8};
use crate::foundation::error::{PaperError, PaperResult};

/// Outline color and width. Width grows inwards from the rectangle bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stroke {
    /// Outline color.
    pub color: Rgb8,
    /// Outline width in pixels.
    #[serde(default = "one")]
    pub width: u32,
}

fn one() -> u32 {
    1
}

/// Axis-aligned rectangle with inclusive corners.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectDirective {
    /// Top-left corner (inclusive).
    pub top_left: Point,
    /// Bottom-right corner (inclusive).
    pub bottom_right: Point,
    /// Optional outline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Stroke>,
    /// Optional fill color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Rgb8>,
}

/// Text anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextDirective {
    /// Top-left anchor.
    pub at: Point,
    /// Text to draw. `\n` starts a new line.
    pub text: String,
    /// Glyph color.
    pub color: Rgb8,
    /// Font size in pixels; the renderer default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_px: Option<f32>,
    /// Paint a lighter copy offset down-right before the text itself.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub shadow: bool,
}

/// Straight line with inclusive endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineDirective {
    /// First endpoint.
    pub from: Point,
    /// Second endpoint.
    pub to: Point,
    /// Line color.
    pub color: Rgb8,
    /// Line width in pixels.
    #[serde(default = "one")]
    pub width: u32,
}

/// One atomic drawing instruction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Directive {
    /// Rectangle outline and/or fill.
    Rect(RectDirective),
    /// Text label.
    Text(TextDirective),
    /// Line segment.
    Line(LineDirective),
}

/// Coordinates must lie within this many pixels of the origin on either axis.
pub const COORD_LIMIT: i32 = CanvasSize::MAX_DIM as i32 * 4;

fn check_point(what: &str, p: Point) -> PaperResult<()> {
    if p.x.unsigned_abs() > COORD_LIMIT as u32 || p.y.unsigned_abs() > COORD_LIMIT as u32 {
        return Err(PaperError::validation(format!(
            "{what} ({}, {}) is outside ±{COORD_LIMIT}",
            p.x, p.y
        )));
    }
    Ok(())
}

fn check_width(what: &str, width: u32) -> PaperResult<()> {
    if width == 0 || width > CanvasSize::MAX_DIM {
        return Err(PaperError::validation(format!(
            "{what} width {width} must be in 1..={}",
            CanvasSize::MAX_DIM
        )));
    }
    Ok(())
}

impl Directive {
    pub(crate) fn validate(&self) -> PaperResult<()> {
        match self {
            Directive::Rect(r) => {
                check_point("rect top_left", r.top_left)?;
                check_point("rect bottom_right", r.bottom_right)?;
                if r.bottom_right.x < r.top_left.x || r.bottom_right.y < r.top_left.y {
                    return Err(PaperError::validation(format!(
                        "rect bottom_right ({}, {}) must not be above or left of top_left ({}, {})",
                        r.bottom_right.x, r.bottom_right.y, r.top_left.x, r.top_left.y
                    )));
                }
                if let Some(s) = r.outline {
                    check_width("rect outline", s.width)?;
                }
                Ok(())
            }
            Directive::Text(t) => {
                check_point("text anchor", t.at)?;
                if let Some(size) = t.size_px
                    && (!size.is_finite() || size <= 0.0 || size > CanvasSize::MAX_DIM as f32)
                {
                    return Err(PaperError::validation(format!(
                        "text size_px must be in (0, {}]",
                        CanvasSize::MAX_DIM
                    )));
                }
                Ok(())
            }
            Directive::Line(l) => {
                check_point("line start", l.from)?;
                check_point("line end", l.to)?;
                check_width("line", l.width)
            }
        }
    }
}

/// One mock-up screen and the file it is written to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    /// Short unique slug used for selection on the command line.
    pub id: String,
    /// Output file name, relative to the output directory.
    pub file_name: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Directives applied in order.
    pub directives: Vec<Directive>,
}

/// An ordered set of screens sharing canvas size and paper tint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenSet {
    /// Canvas dimensions used for every screen.
    #[serde(default)]
    pub canvas: CanvasSize,
    /// Paper tint before noise is applied.
    pub background: Rgb8,
    /// Screens, rendered in this order.
    pub screens: Vec<Screen>,
}

impl ScreenSet {
    /// Parse a screen set from JSON text and validate it.
    pub fn from_json_str(s: &str) -> PaperResult<Self> {
        let set: Self = serde_json::from_str(s)
            .map_err(|e| PaperError::serde(format!("parse screen set JSON: {e}")))?;
        set.validate()?;
        Ok(set)
    }

    /// Read a screen set from a JSON file and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> PaperResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            PaperError::serde(format!("read screen set '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> PaperResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PaperError::serde(format!("serialize screen set: {e}")))
    }

    /// Look up a screen by id.
    pub fn screen(&self, id: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == id)
    }

    /// Check canvas bounds, id/file-name uniqueness and every directive.
    pub fn validate(&self) -> PaperResult<()> {
        self.canvas.validate()?;

        let mut ids = BTreeSet::new();
        let mut files = BTreeSet::new();
        for screen in &self.screens {
            if screen.id.is_empty() {
                return Err(PaperError::validation("screen id must be non-empty"));
            }
            if !ids.insert(screen.id.as_str()) {
                return Err(PaperError::validation(format!(
                    "duplicate screen id '{}'",
                    screen.id
                )));
            }
            validate_file_name(&screen.file_name)?;
            if !files.insert(screen.file_name.as_str()) {
                return Err(PaperError::validation(format!(
                    "duplicate file name '{}'",
                    screen.file_name
                )));
            }
            for (i, d) in screen.directives.iter().enumerate() {
                d.validate().map_err(|e| match e {
                    PaperError::Validation(msg) => PaperError::validation(format!(
                        "screen '{}' directive {i}: {msg}",
                        screen.id
                    )),
                    other => other,
                })?;
            }
        }
        Ok(())
    }
}

fn validate_file_name(name: &str) -> PaperResult<()> {
    if name.is_empty() {
        return Err(PaperError::validation("file name must be non-empty"));
    }
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(PaperError::validation(format!(
            "file name '{name}' must not contain path separators"
        )));
    }
    if !name.to_ascii_lowercase().ends_with(".png") {
        return Err(PaperError::validation(format!(
            "file name '{name}' must end in .png"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
