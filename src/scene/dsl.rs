use crate::foundation::core::{Point, Rgb8};
use crate::foundation::error::{PaperError, PaperResult};
use crate::scene::model::{Directive, LineDirective, RectDirective, Screen, Stroke, TextDirective};

/// Builder for a [`Screen`](crate::Screen).
///
/// Directives are appended in call order, which is also the paint order.
pub struct ScreenBuilder {
    id: String,
    file_name: String,
    title: String,
    directives: Vec<Directive>,
}

impl ScreenBuilder {
    /// Start a screen with its id and output file name.
    pub fn new(id: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file_name: file_name.into(),
            title: String::new(),
            directives: Vec::new(),
        }
    }

    /// Set the human-readable title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Append a raw directive.
    pub fn directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    /// Append a rectangle with optional outline and fill.
    pub fn rect(
        self,
        top_left: impl Into<Point>,
        bottom_right: impl Into<Point>,
        outline: Option<Stroke>,
        fill: Option<Rgb8>,
    ) -> Self {
        self.directive(Directive::Rect(RectDirective {
            top_left: top_left.into(),
            bottom_right: bottom_right.into(),
            outline,
            fill,
        }))
    }

    /// Append an unfilled rectangle outline.
    pub fn outline_rect(
        self,
        top_left: impl Into<Point>,
        bottom_right: impl Into<Point>,
        color: Rgb8,
        width: u32,
    ) -> Self {
        self.rect(top_left, bottom_right, Some(stroke(color, width)), None)
    }

    /// Append a text label at the default size.
    pub fn text(self, at: impl Into<Point>, text: impl Into<String>, color: Rgb8) -> Self {
        self.directive(Directive::Text(TextDirective {
            at: at.into(),
            text: text.into(),
            color,
            size_px: None,
            shadow: false,
        }))
    }

    /// Append a text label with a drop shadow.
    pub fn shadow_text(
        self,
        at: impl Into<Point>,
        text: impl Into<String>,
        color: Rgb8,
        size_px: Option<f32>,
    ) -> Self {
        self.directive(Directive::Text(TextDirective {
            at: at.into(),
            text: text.into(),
            color,
            size_px,
            shadow: true,
        }))
    }

    /// Append a line segment.
    pub fn line(
        self,
        from: impl Into<Point>,
        to: impl Into<Point>,
        color: Rgb8,
        width: u32,
    ) -> Self {
        self.directive(Directive::Line(LineDirective {
            from: from.into(),
            to: to.into(),
            color,
            width,
        }))
    }

    /// Validate and return the screen.
    pub fn build(self) -> PaperResult<Screen> {
        if self.id.is_empty() {
            return Err(PaperError::validation("screen id must be non-empty"));
        }
        for d in &self.directives {
            d.validate()?;
        }
        Ok(Screen {
            id: self.id,
            file_name: self.file_name,
            title: self.title,
            directives: self.directives,
        })
    }
}

/// Shorthand for an outline [`Stroke`].
pub fn stroke(color: Rgb8, width: u32) -> Stroke {
    Stroke { color, width }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
