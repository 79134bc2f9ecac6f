use crate::foundation::core::{Point, Rgb8};
use crate::scene::model::{Directive, Screen};
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x6f63_6561_6e63_6172;

/// Stable 128-bit digest of a screen's directive list.
///
/// Two screens with the same fingerprint paint identical structural pixels; only the paper noise
/// can differ between runs. Titles and file names are not hashed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScreenFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for ScreenFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint the directives of `screen`.
pub fn fingerprint_screen(screen: &Screen) -> ScreenFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(screen.directives.len() as u32);
    for d in &screen.directives {
        write_directive(&mut h, d);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_i32(&mut self, v: i32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f32(&mut self, v: f32) {
        self.write_u32(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn write_point(&mut self, p: Point) {
        self.write_i32(p.x);
        self.write_i32(p.y);
    }

    fn write_rgb(&mut self, c: Rgb8) {
        self.write_bytes(&c.to_array());
    }

    fn finish(self) -> ScreenFingerprint {
        let v = self.inner.digest128();
        ScreenFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_directive(h: &mut StableHasher, d: &Directive) {
    match d {
        Directive::Rect(r) => {
            h.write_u8(0);
            h.write_point(r.top_left);
            h.write_point(r.bottom_right);
            h.write_bool(r.outline.is_some());
            if let Some(s) = r.outline {
                h.write_rgb(s.color);
                h.write_u32(s.width);
            }
            h.write_bool(r.fill.is_some());
            if let Some(c) = r.fill {
                h.write_rgb(c);
            }
        }
        Directive::Text(t) => {
            h.write_u8(1);
            h.write_point(t.at);
            h.write_str(&t.text);
            h.write_rgb(t.color);
            h.write_bool(t.size_px.is_some());
            if let Some(s) = t.size_px {
                h.write_f32(s);
            }
            h.write_bool(t.shadow);
        }
        Directive::Line(l) => {
            h.write_u8(2);
            h.write_point(l.from);
            h.write_point(l.to);
            h.write_rgb(l.color);
            h.write_u32(l.width);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/fingerprint.rs"]
mod tests;
