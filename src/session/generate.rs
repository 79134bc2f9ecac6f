use std::path::PathBuf;
use std::time::Instant;

use crate::encode::sink::ImageSink;
use crate::foundation::error::{PaperError, PaperResult};
use crate::foundation::math::mix64;
use crate::render::composer::render_screen;
use crate::render::text::{DEFAULT_TEXT_PX, FontPreference, TextRenderer};
use crate::render::texture::{NoiseOpts, clock_seed};
use crate::scene::fingerprint::{ScreenFingerprint, fingerprint_screen};
use crate::scene::model::ScreenSet;

/// Options for [`generate`].
#[derive(Clone, Debug)]
pub struct GenerateOpts {
    /// Noise seed. `None` picks a fresh seed from the clock, so every run differs.
    pub seed: Option<u64>,
    /// Paper grain.
    pub noise: NoiseOpts,
    /// Preferred font for text directives.
    pub font: FontPreference,
    /// Text size for directives that do not set one.
    pub default_text_px: f32,
    /// Screen ids to render. Empty means all of them.
    pub only: Vec<String>,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            seed: None,
            noise: NoiseOpts::default(),
            font: FontPreference::default(),
            default_text_px: DEFAULT_TEXT_PX,
            only: Vec::new(),
        }
    }
}

/// Record of one written screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedImage {
    /// 1-based position of the screen in its set.
    pub number: usize,
    /// Screen id.
    pub screen_id: String,
    /// Where the sink put the image.
    pub path: PathBuf,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Fingerprint of the directives that produced it.
    pub fingerprint: ScreenFingerprint,
}

/// Render the screens of `set` in order and hand each to `sink`.
///
/// `on_written` runs right after each image is stored. The first failure stops the run; screens
/// after it are not rendered.
#[tracing::instrument(skip_all, fields(screens = set.screens.len()))]
pub fn generate(
    set: &ScreenSet,
    opts: &GenerateOpts,
    sink: &mut dyn ImageSink,
    mut on_written: impl FnMut(&GeneratedImage),
) -> PaperResult<Vec<GeneratedImage>> {
    set.validate()?;
    for id in &opts.only {
        if set.screen(id).is_none() {
            return Err(PaperError::validation(format!("unknown screen id '{id}'")));
        }
    }

    let seed = opts.seed.unwrap_or_else(clock_seed);
    let mut text = TextRenderer::new(&opts.font).with_default_size(opts.default_text_px);
    tracing::debug!(seed, font = text.font_name(), "generation started");

    let mut out = Vec::new();
    for (i, screen) in set.screens.iter().enumerate() {
        if !opts.only.is_empty() && !opts.only.iter().any(|id| *id == screen.id) {
            continue;
        }

        let started = Instant::now();
        let screen_seed = mix64(seed.wrapping_add(i as u64));
        let canvas = render_screen(
            set.canvas,
            set.background,
            opts.noise,
            screen_seed,
            screen,
            &mut text,
        )?;
        let path = sink.write_image(&screen.file_name, &canvas)?;

        let image = GeneratedImage {
            number: i + 1,
            screen_id: screen.id.clone(),
            path,
            width: canvas.width(),
            height: canvas.height(),
            fingerprint: fingerprint_screen(screen),
        };
        tracing::info!(
            screen = %image.screen_id,
            path = %image.path.display(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "image written"
        );
        on_written(&image);
        out.push(image);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/session/generate.rs"]
mod tests;
