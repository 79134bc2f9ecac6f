use crate::foundation::core::{CanvasSize, Rgb8};
use crate::foundation::math::hash_xy;
use crate::render::canvas::Canvas;

/// Paper grain settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseOpts {
    /// Chance that a given pixel is perturbed, in `[0, 1]`.
    pub probability: f64,
    /// Offsets are drawn from `-amplitude..amplitude` (upper bound exclusive).
    pub amplitude: u8,
}

impl NoiseOpts {
    /// No grain at all; the canvas is the flat tint.
    pub const fn off() -> Self {
        Self {
            probability: 0.0,
            amplitude: 0,
        }
    }
}

impl Default for NoiseOpts {
    fn default() -> Self {
        Self {
            probability: 0.05,
            amplitude: 5,
        }
    }
}

/// Build a paper-textured canvas.
///
/// Each pixel is hashed with `seed`; about `probability` of them get one signed offset added to
/// all three channels, clamped to `[0, 255]`. The same seed always yields the same texture.
pub fn paper_texture(size: CanvasSize, tint: Rgb8, noise: NoiseOpts, seed: u64) -> Canvas {
    let mut canvas = Canvas::filled(size, tint);
    if noise.probability <= 0.0 || noise.amplitude == 0 {
        return canvas;
    }

    let threshold = (noise.probability.clamp(0.0, 1.0) * 4_294_967_296.0) as u64;
    let span = 2 * u64::from(noise.amplitude);
    let base = tint.to_array();
    for (x, y, px) in canvas.pixels_mut() {
        let h = hash_xy(seed, x, y);
        if (h & 0xFFFF_FFFF) >= threshold {
            continue;
        }
        let offset = ((h >> 32) % span) as i16 - i16::from(noise.amplitude);
        for c in 0..3 {
            px.0[c] = (i16::from(base[c]) + offset).clamp(0, 255) as u8;
        }
    }
    canvas
}

/// A seed that differs between runs.
pub(crate) fn clock_seed() -> u64 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    crate::foundation::math::mix64(nanos ^ u64::from(std::process::id()))
}

#[cfg(test)]
#[path = "../../tests/unit/render/texture.rs"]
mod tests;
