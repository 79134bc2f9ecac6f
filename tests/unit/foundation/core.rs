use super::*;

#[test]
fn rgb_parses_hex_with_and_without_hash() {
    assert_eq!(Rgb8::parse_hex("#0066cc").unwrap(), Rgb8::new(0, 102, 204));
    assert_eq!(Rgb8::parse_hex("C8DCFF").unwrap(), Rgb8::new(200, 220, 255));
    assert!(Rgb8::parse_hex("#abc").is_err());
    assert!(Rgb8::parse_hex("#zz0000").is_err());
}

#[test]
fn rgb_serializes_as_hex_and_accepts_arrays() {
    let c = Rgb8::new(245, 242, 235);
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#f5f2eb\"");

    let from_arr: Rgb8 = serde_json::from_str("[245, 242, 235]").unwrap();
    let from_obj: Rgb8 = serde_json::from_str(r#"{"r":245,"g":242,"b":235}"#).unwrap();
    let from_hex: Rgb8 = serde_json::from_str("\"#f5f2eb\"").unwrap();
    assert_eq!(from_arr, c);
    assert_eq!(from_obj, c);
    assert_eq!(from_hex, c);
}

#[test]
fn point_accepts_array_and_object() {
    let a: Point = serde_json::from_str("[70, 150]").unwrap();
    let b: Point = serde_json::from_str(r#"{"x":70,"y":150}"#).unwrap();
    assert_eq!(a, Point::new(70, 150));
    assert_eq!(a, b);
    assert_eq!(a.offset(2, 2), Point::new(72, 152));
}

#[test]
fn canvas_size_bounds() {
    assert!(CanvasSize::new(0, 10).is_err());
    assert!(CanvasSize::new(CanvasSize::MAX_DIM + 1, 10).is_err());

    let size = CanvasSize::default();
    assert_eq!((size.width, size.height), (1200, 800));
    assert!(size.contains(Point::new(0, 0)));
    assert!(size.contains(Point::new(1199, 799)));
    assert!(!size.contains(Point::new(1200, 0)));
    assert!(!size.contains(Point::new(-1, 5)));
}

#[test]
fn point_offset_saturates() {
    assert_eq!(
        Point::new(i32::MAX, 10).offset(2, 2),
        Point::new(i32::MAX, 12)
    );
    assert_eq!(
        Point::new(0, i32::MIN).offset(-1, -1),
        Point::new(-1, i32::MIN)
    );
}
