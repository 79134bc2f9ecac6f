use std::path::PathBuf;

use kurbo::Affine;

use crate::foundation::core::{Point, Rgb8};
use crate::foundation::error::{PaperError, PaperResult};
use crate::render::builtin_font;
use crate::render::canvas::Canvas;
use crate::scene::model::TextDirective;

/// Size used when a text directive does not carry one.
pub const DEFAULT_TEXT_PX: f32 = 14.0;
/// Drop-shadow displacement, down and to the right.
pub const SHADOW_OFFSET: (i32, i32) = (2, 2);
/// Drop-shadow color.
pub const SHADOW_COLOR: Rgb8 = Rgb8::new(200, 200, 200);

/// Which font text directives should be drawn with.
///
/// Anything other than [`FontPreference::Builtin`] is best effort: when the font cannot be
/// loaded the renderer quietly uses the built-in bitmap font instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontPreference {
    /// Always use the built-in bitmap font.
    Builtin,
    /// A TrueType/OpenType file on disk.
    Path(PathBuf),
    /// A family name looked up among installed system fonts.
    Family(String),
}

impl Default for FontPreference {
    fn default() -> Self {
        Self::Family("Arial".to_string())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct TextBrushRgba8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

struct TrueTypeFont {
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

/// Draws text directives onto a [`Canvas`].
///
/// Font resolution happens once, in [`TextRenderer::new`]; one renderer is meant to be reused for
/// every screen of a run.
pub struct TextRenderer {
    truetype: Option<TrueTypeFont>,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    default_size_px: f32,
}

impl TextRenderer {
    /// Resolve `pref`, falling back to the built-in font on any failure.
    pub fn new(pref: &FontPreference) -> Self {
        let mut out = Self::builtin();
        if *pref == FontPreference::Builtin {
            return out;
        }
        match load_font_bytes(pref).and_then(|(bytes, index)| out.register(bytes, index)) {
            Ok(font) => {
                tracing::debug!(family = %font.family_name, "using preferred font");
                out.truetype = Some(font);
            }
            Err(e) => {
                tracing::debug!(?pref, error = %e, "preferred font unavailable, using builtin");
            }
        }
        out
    }

    /// A renderer that only uses the built-in bitmap font.
    pub fn builtin() -> Self {
        Self {
            truetype: None,
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            default_size_px: DEFAULT_TEXT_PX,
        }
    }

    /// Override the size used for directives without `size_px`.
    pub fn with_default_size(mut self, size_px: f32) -> Self {
        if size_px.is_finite() && size_px > 0.0 {
            self.default_size_px = size_px;
        }
        self
    }

    /// `true` when the built-in font is in use.
    pub fn uses_builtin(&self) -> bool {
        self.truetype.is_none()
    }

    /// Family name of the active font, or `"builtin"`.
    pub fn font_name(&self) -> &str {
        self.truetype
            .as_ref()
            .map_or("builtin", |f| f.family_name.as_str())
    }

    /// Paint one text directive, shadow first when requested.
    pub fn draw(&mut self, canvas: &mut Canvas, t: &TextDirective) -> PaperResult<()> {
        let size = t.size_px.unwrap_or(self.default_size_px);
        if t.shadow {
            let at = t.at.offset(SHADOW_OFFSET.0, SHADOW_OFFSET.1);
            self.draw_plain(canvas, at, &t.text, SHADOW_COLOR, size)?;
        }
        self.draw_plain(canvas, t.at, &t.text, t.color, size)
    }

    fn draw_plain(
        &mut self,
        canvas: &mut Canvas,
        at: Point,
        text: &str,
        color: Rgb8,
        size_px: f32,
    ) -> PaperResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        if self.truetype.is_some() {
            self.draw_truetype(canvas, at, text, color, size_px)
        } else {
            builtin_font::draw_text(canvas, at, text, color, builtin_font::scale_for(size_px));
            Ok(())
        }
    }

    fn register(&mut self, bytes: Vec<u8>, index: u32) -> PaperResult<TrueTypeFont> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| PaperError::render("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PaperError::render("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), index);
        Ok(TrueTypeFont { family_name, font })
    }

    fn layout_plain(
        &mut self,
        text: &str,
        family_name: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> parley::Layout<TextBrushRgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name.to_string())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    fn draw_truetype(
        &mut self,
        canvas: &mut Canvas,
        at: Point,
        text: &str,
        color: Rgb8,
        size_px: f32,
    ) -> PaperResult<()> {
        let Some(tt) = self.truetype.as_ref() else {
            return Ok(());
        };
        let family_name = tt.family_name.clone();
        let font = tt.font.clone();

        let brush = TextBrushRgba8 {
            r: color.r,
            g: color.g,
            b: color.b,
            a: 255,
        };
        let layout = self.layout_plain(text, &family_name, size_px, brush);

        // One pixel of margin on each side for anti-aliased edges.
        let w: u16 = (layout.width().ceil() as u32 + 2)
            .try_into()
            .map_err(|_| PaperError::render("text layout width exceeds u16"))?;
        let h: u16 = (layout.height().ceil() as u32 + 2)
            .try_into()
            .map_err(|_| PaperError::render("text layout height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_transform(affine_to_cpu(Affine::translate((1.0, 1.0))));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);

        let (ox, oy) = (at.x - 1, at.y - 1);
        for (i, px) in pixmap.data_as_u8_slice().chunks_exact(4).enumerate() {
            let x = (i % usize::from(w)) as i32;
            let y = (i / usize::from(w)) as i32;
            canvas.blend_premul(ox + x, oy + y, [px[0], px[1], px[2], px[3]]);
        }
        Ok(())
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn load_font_bytes(pref: &FontPreference) -> PaperResult<(Vec<u8>, u32)> {
    match pref {
        FontPreference::Builtin => Err(PaperError::render("builtin font has no font file")),
        FontPreference::Path(path) => {
            let bytes = std::fs::read(path).map_err(|e| {
                PaperError::render(format!("failed to read font '{}': {e}", path.display()))
            })?;
            Ok((bytes, 0))
        }
        FontPreference::Family(name) => system_font(name),
    }
}

fn system_font(family: &str) -> PaperResult<(Vec<u8>, u32)> {
    use usvg::fontdb;

    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    let families = [fontdb::Family::Name(family)];
    let query = fontdb::Query {
        families: &families,
        weight: fontdb::Weight::NORMAL,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };
    let id = db
        .query(&query)
        .ok_or_else(|| PaperError::render(format!("no system font matches family '{family}'")))?;
    db.with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(|| PaperError::render(format!("font data for '{family}' is unavailable")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
