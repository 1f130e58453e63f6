// File: crates/langviz-core/src/text.rs
// Summary: Label painting with system font lookup, alignment, halo outlines, and rotation.

use skia_safe as skia;

/// Families tried in order before falling back to the Skia default face.
const FAMILIES: [&str; 4] = ["Inter", "Segoe UI", "Arial", "DejaVu Sans"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Align {
    Left,
    Center,
    Right,
}

pub struct TextPainter {
    font_mgr: skia::FontMgr,
}

impl TextPainter {
    pub fn new() -> Self {
        Self { font_mgr: skia::FontMgr::default() }
    }

    fn font(&self, size_px: f32, bold: bool) -> skia::Font {
        let style = if bold { skia::FontStyle::bold() } else { skia::FontStyle::normal() };
        for family in FAMILIES {
            if let Some(typeface) = self.font_mgr.match_family_style(family, style) {
                return skia::Font::from_typeface(typeface, size_px);
            }
        }
        let mut font = skia::Font::default();
        font.set_size(size_px.max(1.0));
        if bold {
            font.set_embolden(true);
        }
        font
    }

    pub fn width(&self, text: &str, size_px: f32, bold: bool) -> f32 {
        self.font(size_px, bold).measure_str(text, None).0
    }

    /// Draw `text` with `(x, y)` as the anchor on the vertical center line
    /// of the glyphs; `align` picks which horizontal edge sits at `x`.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size_px: f32,
        bold: bool,
        color: skia::Color,
        align: Align,
    ) {
        let font = self.font(size_px, bold);
        let origin = anchor(&font, text, x, y, align);
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(color);
        canvas.draw_str(text, origin, &font, &fill);
    }

    /// Draw `text` twice: a stroked pass in `halo` beneath a filled pass in
    /// `color`, keeping labels readable over bar fills.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_with_halo(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size_px: f32,
        bold: bool,
        color: skia::Color,
        halo: skia::Color,
        halo_width_px: f32,
        align: Align,
    ) {
        let font = self.font(size_px, bold);
        let origin = anchor(&font, text, x, y, align);

        let mut outline = skia::Paint::default();
        outline.set_anti_alias(true);
        outline.set_style(skia::paint::Style::Stroke);
        outline.set_stroke_width(halo_width_px);
        outline.set_stroke_join(skia::paint::Join::Round);
        outline.set_color(halo);
        canvas.draw_str(text, origin, &font, &outline);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(color);
        canvas.draw_str(text, origin, &font, &fill);
    }

    /// Draw rotated by `degrees` (clockwise-positive) about the anchor.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_rotated(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size_px: f32,
        bold: bool,
        color: skia::Color,
        degrees: f32,
        align: Align,
    ) {
        canvas.save();
        canvas.rotate(degrees, Some(skia::Point::new(x, y)));
        self.draw(canvas, text, x, y, size_px, bold, color, align);
        canvas.restore();
    }
}

fn anchor(font: &skia::Font, text: &str, x: f32, y: f32, align: Align) -> skia::Point {
    let width = font.measure_str(text, None).0;
    let (_, metrics) = font.metrics();
    let ax = match align {
        Align::Left => x,
        Align::Center => x - width * 0.5,
        Align::Right => x - width,
    };
    // ascent is negative; this centers the glyph box on y
    let ay = y - (metrics.ascent + metrics.descent) * 0.5;
    skia::Point::new(ax, ay)
}
