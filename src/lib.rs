//! paperproto renders paper-prototype mock-up screens to PNG.
//!
//! A [`ScreenSet`] holds an ordered list of [`Screen`]s, each an ordered list of drawing
//! [`Directive`]s. Rendering a screen paints a paper-textured background and then applies the
//! directives strictly in order onto a fresh [`Canvas`]:
//!
//! - Build or load a [`ScreenSet`] (the built-in OceanCare set is [`oceancare_screens`])
//! - Pick [`GenerateOpts`] (noise seed, font preference)
//! - Call [`generate`] with an [`ImageSink`] such as [`PngDirSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Image sinks that receive rendered screens.
pub mod encode;
/// Canvas, paper texture, raster primitives and text.
pub mod render;
/// Declarative screen model and the built-in catalog.
pub mod scene;
/// Screen-set assembly.
pub mod session;

pub use crate::foundation::core::{CanvasSize, Point, Rgb8};
pub use crate::foundation::error::{PaperError, PaperResult};

pub use crate::encode::sink::{ImageSink, InMemorySink, PngDirSink};
pub use crate::render::canvas::Canvas;
pub use crate::render::composer::{apply_directives, render_screen};
pub use crate::render::text::{FontPreference, TextRenderer};
pub use crate::render::texture::{NoiseOpts, paper_texture};
pub use crate::scene::catalog::{PAPER_TINT, oceancare_screens};
pub use crate::scene::dsl::ScreenBuilder;
pub use crate::scene::fingerprint::{ScreenFingerprint, fingerprint_screen};
pub use crate::scene::model::{Directive, LineDirective, RectDirective, Screen, ScreenSet, Stroke, TextDirective};
pub use crate::session::generate::{GenerateOpts, GeneratedImage, generate};
