use crate::foundation::core::{CanvasSize, Rgb8};
use crate::foundation::error::PaperResult;
use crate::render::canvas::Canvas;
use crate::render::raster::{draw_line, draw_rect};
use crate::render::text::TextRenderer;
use crate::render::texture::{NoiseOpts, paper_texture};
use crate::scene::model::{Directive, Screen};

/// Apply `directives` to `canvas` in order. Later directives overwrite earlier ones.
pub fn apply_directives(
    canvas: &mut Canvas,
    directives: &[Directive],
    text: &mut TextRenderer,
) -> PaperResult<()> {
    for d in directives {
        match d {
            Directive::Rect(r) => draw_rect(canvas, r),
            Directive::Line(l) => draw_line(canvas, l),
            Directive::Text(t) => text.draw(canvas, t)?,
        }
    }
    Ok(())
}

/// Render one screen onto a fresh paper-textured canvas.
#[tracing::instrument(skip_all, fields(screen = %screen.id))]
pub fn render_screen(
    size: CanvasSize,
    tint: Rgb8,
    noise: NoiseOpts,
    seed: u64,
    screen: &Screen,
    text: &mut TextRenderer,
) -> PaperResult<Canvas> {
    let mut canvas = paper_texture(size, tint, noise, seed);
    apply_directives(&mut canvas, &screen.directives, text)?;
    tracing::debug!(directives = screen.directives.len(), "screen composed");
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composer.rs"]
mod tests;
