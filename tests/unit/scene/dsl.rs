use super::*;

#[test]
fn builder_keeps_call_order() {
    let black = Rgb8::new(0, 0, 0);
    let screen = ScreenBuilder::new("s", "s.png")
        .title("Sample")
        .outline_rect((0, 0), (9, 9), black, 1)
        .text((1, 1), "a", black)
        .line((0, 0), (9, 9), black, 2)
        .shadow_text((2, 2), "b", black, Some(20.0))
        .build()
        .unwrap();

    assert_eq!(screen.title, "Sample");
    let kinds: Vec<&str> = screen
        .directives
        .iter()
        .map(|d| match d {
            Directive::Rect(_) => "rect",
            Directive::Text(_) => "text",
            Directive::Line(_) => "line",
        })
        .collect();
    assert_eq!(kinds, ["rect", "text", "line", "text"]);

    let Directive::Text(t) = &screen.directives[3] else {
        panic!("expected text");
    };
    assert!(t.shadow);
    assert_eq!(t.size_px, Some(20.0));
}

#[test]
fn build_validates_directives() {
    let err = ScreenBuilder::new("s", "s.png")
        .rect((10, 10), (0, 0), None, Some(Rgb8::new(1, 2, 3)))
        .build();
    assert!(err.is_err());

    assert!(ScreenBuilder::new("", "s.png").build().is_err());
}
