use super::*;
use crate::foundation::core::CanvasSize;
use crate::scene::model::Stroke;

const PAPER: Rgb8 = Rgb8::new(245, 242, 235);
const BLUE: Rgb8 = Rgb8::new(0, 102, 204);
const BLUE_FILL: Rgb8 = Rgb8::new(200, 220, 255);

fn paper(w: u32, h: u32) -> Canvas {
    Canvas::filled(CanvasSize { width: w, height: h }, PAPER)
}

#[test]
fn filled_rect_with_thick_outline() {
    let mut c = paper(400, 300);
    draw_rect(
        &mut c,
        &RectDirective {
            top_left: Point::new(70, 150),
            bottom_right: Point::new(390, 230),
            outline: Some(Stroke {
                color: BLUE,
                width: 3,
            }),
            fill: Some(BLUE_FILL),
        },
    );

    assert_eq!(c.pixel(70, 150), Some(BLUE));
    assert_eq!(c.pixel(72, 152), Some(BLUE));
    assert_eq!(c.pixel(390, 230), Some(BLUE));
    assert_eq!(c.pixel(388, 190), Some(BLUE));
    assert_eq!(c.pixel(73, 153), Some(BLUE_FILL));
    assert_eq!(c.pixel(230, 190), Some(BLUE_FILL));
    assert_eq!(c.pixel(387, 227), Some(BLUE_FILL));
    assert_eq!(c.pixel(69, 150), Some(PAPER));
    assert_eq!(c.pixel(391, 231), Some(PAPER));
}

#[test]
fn outline_only_rect_leaves_interior() {
    let mut c = paper(20, 20);
    draw_rect(
        &mut c,
        &RectDirective {
            top_left: Point::new(2, 2),
            bottom_right: Point::new(12, 12),
            outline: Some(Stroke {
                color: BLUE,
                width: 1,
            }),
            fill: None,
        },
    );
    assert_eq!(c.pixel(2, 7), Some(BLUE));
    assert_eq!(c.pixel(12, 7), Some(BLUE));
    assert_eq!(c.pixel(3, 3), Some(PAPER));
}

#[test]
fn ring_wider_than_box_covers_it() {
    let mut c = paper(10, 10);
    draw_rect(
        &mut c,
        &RectDirective {
            top_left: Point::new(0, 0),
            bottom_right: Point::new(3, 3),
            outline: Some(Stroke {
                color: BLUE,
                width: 2,
            }),
            fill: Some(BLUE_FILL),
        },
    );
    for y in 0..=3 {
        for x in 0..=3 {
            assert_eq!(c.pixel(x, y), Some(BLUE), "({x}, {y})");
        }
    }
}

#[test]
fn later_shapes_overwrite_earlier_ones() {
    let mut c = paper(20, 20);
    let red = Rgb8::new(200, 0, 0);
    fill_box(&mut c, Point::new(0, 0), Point::new(10, 10), red);
    fill_box(&mut c, Point::new(5, 5), Point::new(15, 15), BLUE);
    assert_eq!(c.pixel(4, 4), Some(red));
    assert_eq!(c.pixel(5, 5), Some(BLUE));
    assert_eq!(c.pixel(10, 10), Some(BLUE));
}

#[test]
fn shapes_clip_at_canvas_edges() {
    let mut c = paper(8, 8);
    fill_box(&mut c, Point::new(-5, -5), Point::new(20, 20), BLUE);
    assert!(c.as_image().pixels().all(|p| p.0 == BLUE.to_array()));

    draw_line(
        &mut c,
        &LineDirective {
            from: Point::new(-10, 3),
            to: Point::new(30, 3),
            color: PAPER,
            width: 1,
        },
    );
    assert_eq!(c.pixel(0, 3), Some(PAPER));
    assert_eq!(c.pixel(7, 3), Some(PAPER));
}

#[test]
fn thin_lines_hit_exact_pixels() {
    let mut c = paper(10, 10);
    let dark = Rgb8::new(50, 50, 50);
    draw_line(
        &mut c,
        &LineDirective {
            from: Point::new(1, 1),
            to: Point::new(5, 5),
            color: dark,
            width: 1,
        },
    );
    for i in 1..=5 {
        assert_eq!(c.pixel(i, i), Some(dark));
    }
    assert_eq!(c.pixel(2, 1), Some(PAPER));
    assert_eq!(c.pixel(6, 6), Some(PAPER));

    draw_line(
        &mut c,
        &LineDirective {
            from: Point::new(8, 9),
            to: Point::new(8, 0),
            color: dark,
            width: 1,
        },
    );
    assert!((0..10).all(|y| c.pixel(8, y) == Some(dark)));
}

#[test]
fn wide_lines_stamp_a_square_brush() {
    let mut c = paper(20, 20);
    let dark = Rgb8::new(50, 50, 50);
    draw_line(
        &mut c,
        &LineDirective {
            from: Point::new(5, 10),
            to: Point::new(14, 10),
            color: dark,
            width: 2,
        },
    );
    assert_eq!(c.pixel(5, 9), Some(dark));
    assert_eq!(c.pixel(4, 10), Some(dark));
    assert_eq!(c.pixel(14, 10), Some(dark));
    assert_eq!(c.pixel(10, 11), Some(PAPER));
    assert_eq!(c.pixel(10, 8), Some(PAPER));
}
