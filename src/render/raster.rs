//! Aliased shape primitives. Every write is an opaque overwrite.

use crate::foundation::core::{Point, Rgb8};
use crate::render::canvas::Canvas;
use crate::scene::model::{LineDirective, RectDirective};

/// Fill the inclusive box `[a, b]`.
pub(crate) fn fill_box(canvas: &mut Canvas, a: Point, b: Point, color: Rgb8) {
    let last_row = canvas.height() as i32 - 1;
    for y in a.y.max(0)..=b.y.min(last_row) {
        canvas.hspan(a.x, b.x, y, color);
    }
}

/// Paint a rectangle: fill first, then an outline ring `width` pixels thick inside the bounds.
pub(crate) fn draw_rect(canvas: &mut Canvas, r: &RectDirective) {
    let (a, b) = (r.top_left, r.bottom_right);
    if let Some(fill) = r.fill {
        fill_box(canvas, a, b, fill);
    }
    let Some(outline) = r.outline else {
        return;
    };

    let w = outline.width as i32;
    let c = outline.color;
    // A ring wider than half the box covers it completely.
    if 2 * w > b.x - a.x || 2 * w > b.y - a.y {
        fill_box(canvas, a, b, c);
        return;
    }
    fill_box(canvas, a, Point::new(b.x, a.y + w - 1), c);
    fill_box(canvas, Point::new(a.x, b.y - w + 1), b, c);
    fill_box(canvas, Point::new(a.x, a.y + w), Point::new(a.x + w - 1, b.y - w), c);
    fill_box(canvas, Point::new(b.x - w + 1, a.y + w), Point::new(b.x, b.y - w), c);
}

/// Bresenham line; widths above 1 stamp a square brush centred on each step.
pub(crate) fn draw_line(canvas: &mut Canvas, l: &LineDirective) {
    let w = l.width.max(1) as i32;
    let lo = -(w / 2);
    let hi = lo + w - 1;

    let (mut x, mut y) = (l.from.x, l.from.y);
    let dx = (l.to.x - x).abs();
    let dy = -(l.to.y - y).abs();
    let sx = if x < l.to.x { 1 } else { -1 };
    let sy = if y < l.to.y { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if w == 1 {
            canvas.put(x, y, l.color);
        } else {
            fill_box(canvas, Point::new(x + lo, y + lo), Point::new(x + hi, y + hi), l.color);
        }
        if x == l.to.x && y == l.to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
