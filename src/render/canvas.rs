use image::RgbImage;

use crate::foundation::core::{CanvasSize, Point, Rgb8};
use crate::foundation::math::mul_div255_u8;

/// Owned RGB8 pixel buffer that directives paint into.
///
/// All write helpers clip silently: coordinates outside the canvas are ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    /// A canvas filled with a single color.
    pub fn filled(size: CanvasSize, color: Rgb8) -> Self {
        Self {
            img: RgbImage::from_pixel(size.width, size.height, image::Rgb(color.to_array())),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.img.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Dimensions.
    pub fn size(&self) -> CanvasSize {
        CanvasSize {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Color at `(x, y)`, or `None` off-canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb8> {
        if !self.size().contains(Point::new(x, y)) {
            return None;
        }
        let [r, g, b] = self.img.get_pixel(x as u32, y as u32).0;
        Some(Rgb8::new(r, g, b))
    }

    /// Borrow the underlying image.
    pub fn as_image(&self) -> &RgbImage {
        &self.img
    }

    /// Take the underlying image.
    pub fn into_image(self) -> RgbImage {
        self.img
    }

    /// Raw RGB8 bytes, row-major, tightly packed.
    pub fn as_raw(&self) -> &[u8] {
        self.img.as_raw()
    }

    pub(crate) fn put(&mut self, x: i32, y: i32, color: Rgb8) {
        if self.size().contains(Point::new(x, y)) {
            self.img.put_pixel(x as u32, y as u32, image::Rgb(color.to_array()));
        }
    }

    /// Overwrite the inclusive span `[x0, x1]` on row `y`.
    pub(crate) fn hspan(&mut self, x0: i32, x1: i32, y: i32, color: Rgb8) {
        if y < 0 || y as u32 >= self.height() || x1 < 0 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width() as i32 - 1);
        for x in x0..=x1 {
            self.img.put_pixel(x as u32, y as u32, image::Rgb(color.to_array()));
        }
    }

    /// Source-over a premultiplied RGBA8 pixel onto the opaque canvas.
    pub(crate) fn blend_premul(&mut self, x: i32, y: i32, src: [u8; 4]) {
        let sa = u16::from(src[3]);
        if sa == 0 || !self.size().contains(Point::new(x, y)) {
            return;
        }
        let px = self.img.get_pixel_mut(x as u32, y as u32);
        let inv = 255 - sa;
        for c in 0..3 {
            let dc = mul_div255_u8(u16::from(px.0[c]), inv);
            px.0[c] = src[c].saturating_add(dc);
        }
    }

    pub(crate) fn pixels_mut(&mut self) -> impl Iterator<Item = (u32, u32, &mut image::Rgb<u8>)> {
        self.img.enumerate_pixels_mut()
    }
}
