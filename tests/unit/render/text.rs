use super::*;
use crate::foundation::core::CanvasSize;
use crate::render::builtin_font::PAD_TOP;

const PAPER: Rgb8 = Rgb8::new(255, 255, 255);
const INK: Rgb8 = Rgb8::new(0, 0, 0);

fn blank() -> Canvas {
    Canvas::filled(
        CanvasSize {
            width: 60,
            height: 40,
        },
        PAPER,
    )
}

fn directive(text: &str, shadow: bool) -> TextDirective {
    TextDirective {
        at: Point::new(10, 10),
        text: text.to_string(),
        color: INK,
        size_px: None,
        shadow,
    }
}

#[test]
fn builtin_preference_never_loads_fonts() {
    let r = TextRenderer::new(&FontPreference::Builtin);
    assert!(r.uses_builtin());
    assert_eq!(r.font_name(), "builtin");
}

#[test]
fn missing_font_file_falls_back_to_builtin() {
    let r = TextRenderer::new(&FontPreference::Path(PathBuf::from(
        "/nonexistent/paperproto/NoSuchFont.ttf",
    )));
    assert!(r.uses_builtin());
}

#[test]
fn unknown_family_falls_back_to_builtin() {
    let r = TextRenderer::new(&FontPreference::Family(
        "Paperproto Missing Family 0xDEAD".to_string(),
    ));
    assert!(r.uses_builtin());
}

#[test]
fn default_preference_is_arial() {
    assert_eq!(
        FontPreference::default(),
        FontPreference::Family("Arial".to_string())
    );
}

#[test]
fn invalid_default_size_is_ignored() {
    let r = TextRenderer::builtin()
        .with_default_size(f32::NAN)
        .with_default_size(-3.0);
    assert_eq!(r.default_size_px, DEFAULT_TEXT_PX);
    let r = r.with_default_size(22.0);
    assert_eq!(r.default_size_px, 22.0);
}

#[test]
fn shadow_is_painted_under_the_text() {
    let mut r = TextRenderer::builtin();
    let mut c = blank();
    r.draw(&mut c, &directive("#", true)).unwrap();

    let (x, y) = (10, 10 + PAD_TOP);
    // Row 2 of '#' is solid; the primary copy wins where both overlap.
    assert_eq!(c.pixel(x + 3, y + 2), Some(INK));
    // Shadow row 2 sits two pixels lower and further right.
    assert_eq!(c.pixel(x + 6, y + 4), Some(SHADOW_COLOR));
    assert_eq!(c.pixel(x - 1, y), Some(PAPER));
}

#[test]
fn plain_text_has_no_shadow() {
    let mut r = TextRenderer::builtin();
    let mut c = blank();
    r.draw(&mut c, &directive("#", false)).unwrap();
    assert!(c.as_image().pixels().all(|p| p.0 != SHADOW_COLOR.to_array()));
}

#[test]
fn empty_text_draws_nothing() {
    let mut r = TextRenderer::builtin();
    let mut c = blank();
    r.draw(&mut c, &directive("", true)).unwrap();
    assert_eq!(c, blank());
}

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn truetype_renderer() -> Option<TextRenderer> {
    let path = FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())?;
    let r = TextRenderer::new(&FontPreference::Path(path));
    assert!(!r.uses_builtin(), "font file exists but was not loaded");
    Some(r)
}

fn page() -> Canvas {
    Canvas::filled(
        CanvasSize {
            width: 300,
            height: 200,
        },
        PAPER,
    )
}

/// Bounding box of pixels exactly equal to `color`, and their count.
fn exact_bbox(c: &Canvas, color: Rgb8) -> Option<((i32, i32, i32, i32), usize)> {
    let mut out: Option<((i32, i32, i32, i32), usize)> = None;
    for y in 0..c.height() as i32 {
        for x in 0..c.width() as i32 {
            if c.pixel(x, y) != Some(color) {
                continue;
            }
            out = Some(match out {
                None => ((x, y, x, y), 1),
                Some(((x0, y0, x1, y1), n)) => {
                    ((x0.min(x), y0.min(y), x1.max(x), y1.max(y)), n + 1)
                }
            });
        }
    }
    out
}

fn hello(at: Point, color: Rgb8, shadow: bool) -> TextDirective {
    TextDirective {
        at,
        text: "HELLO".to_string(),
        color,
        size_px: Some(20.0),
        shadow,
    }
}

#[test]
fn truetype_text_lands_after_the_anchor() {
    let Some(mut r) = truetype_renderer() else {
        eprintln!("no TrueType font found; skipping");
        return;
    };
    assert!(!r.font_name().trim().is_empty());

    let mut c = page();
    r.draw(&mut c, &hello(Point::new(100, 100), INK, false)).unwrap();

    let ((x0, y0, _, _), solid) = exact_bbox(&c, INK).unwrap();
    assert!(solid > 20, "only {solid} solid pixels");
    assert!(x0 >= 100 && y0 >= 100, "ink starts at ({x0}, {y0})");
    // Anti-aliased edges blend between ink and paper.
    assert!(
        c.as_image()
            .pixels()
            .any(|p| p.0 != PAPER.to_array() && p.0 != INK.to_array())
    );
}

#[test]
fn truetype_shadow_is_offset_copy_under_the_text() {
    let Some(mut r) = truetype_renderer() else {
        eprintln!("no TrueType font found; skipping");
        return;
    };
    let at = Point::new(100, 100);

    let mut plain = page();
    r.draw(&mut plain, &hello(at, INK, false)).unwrap();
    let mut shadow_only = page();
    r.draw(&mut shadow_only, &hello(at.offset(2, 2), SHADOW_COLOR, false))
        .unwrap();
    let (ink_box, ink_n) = exact_bbox(&plain, INK).unwrap();
    let (shadow_box, shadow_n) = exact_bbox(&shadow_only, SHADOW_COLOR).unwrap();
    assert_eq!(ink_n, shadow_n);
    assert_eq!(
        shadow_box,
        (ink_box.0 + 2, ink_box.1 + 2, ink_box.2 + 2, ink_box.3 + 2)
    );

    // Shadow first, then the text on top.
    let mut expected = shadow_only;
    r.draw(&mut expected, &hello(at, INK, false)).unwrap();
    let mut shadowed = page();
    r.draw(&mut shadowed, &hello(at, INK, true)).unwrap();
    assert_eq!(shadowed, expected);
    assert!(exact_bbox(&shadowed, SHADOW_COLOR).is_some());
    assert_eq!(exact_bbox(&shadowed, INK).map(|(_, n)| n), Some(ink_n));
}
