use super::*;
use crate::scene::dsl::{ScreenBuilder, stroke};

const PAPER: Rgb8 = Rgb8::new(245, 242, 235);
const BLUE: Rgb8 = Rgb8::new(0, 102, 204);
const BLUE_FILL: Rgb8 = Rgb8::new(200, 220, 255);
const RED: Rgb8 = Rgb8::new(200, 0, 0);

fn screen() -> Screen {
    ScreenBuilder::new("s", "s.png")
        .rect((70, 150), (390, 230), Some(stroke(BLUE, 3)), Some(BLUE_FILL))
        .line((0, 190), (120, 190), RED, 1)
        .build()
        .unwrap()
}

#[test]
fn render_screen_paints_over_flat_paper() {
    let mut text = TextRenderer::builtin();
    let size = CanvasSize {
        width: 400,
        height: 300,
    };
    let c = render_screen(size, PAPER, NoiseOpts::off(), 0, &screen(), &mut text).unwrap();

    assert_eq!(c.size(), size);
    assert_eq!(c.pixel(0, 0), Some(PAPER));
    assert_eq!(c.pixel(70, 150), Some(BLUE));
    assert_eq!(c.pixel(200, 200), Some(BLUE_FILL));
    // The line is applied after the rect and wins where they overlap.
    assert_eq!(c.pixel(71, 190), Some(RED));
    assert_eq!(c.pixel(100, 190), Some(RED));
    assert_eq!(c.pixel(121, 190), Some(BLUE_FILL));
}

#[test]
fn directive_order_decides_overlaps() {
    let mut text = TextRenderer::builtin();
    let size = CanvasSize {
        width: 50,
        height: 50,
    };
    let mut c = Canvas::filled(size, PAPER);
    let a = ScreenBuilder::new("a", "a.png")
        .rect((0, 0), (20, 20), None, Some(RED))
        .rect((10, 10), (30, 30), None, Some(BLUE))
        .text((12, 12), "#", Rgb8::new(0, 0, 0))
        .build()
        .unwrap();
    apply_directives(&mut c, &a.directives, &mut text).unwrap();

    assert_eq!(c.pixel(5, 5), Some(RED));
    assert_eq!(c.pixel(25, 5), Some(PAPER));
    assert_eq!(c.pixel(25, 25), Some(BLUE));
    assert_eq!(c.pixel(12, 16), Some(Rgb8::new(0, 0, 0)));
}

#[test]
fn same_seed_renders_identically() {
    let mut text = TextRenderer::builtin();
    let size = CanvasSize {
        width: 400,
        height: 300,
    };
    let a = render_screen(size, PAPER, NoiseOpts::default(), 9, &screen(), &mut text).unwrap();
    let b = render_screen(size, PAPER, NoiseOpts::default(), 9, &screen(), &mut text).unwrap();
    assert_eq!(a, b);
}
