pub(crate) mod builtin_font;
/// Owned pixel buffer.
pub mod canvas;
/// Directive application.
pub mod composer;
pub(crate) mod raster;
/// Text drawing and font fallback.
pub mod text;
/// Paper texture generation.
pub mod texture;
