// File: crates/langviz-core/src/types.rs
// Summary: Shared units and color helpers (DPI math, margins, hex parsing).

use skia_safe as skia;

/// Raster resolution in dots per inch. Figure geometry is specified in
/// inches and font sizes in points, both converted at this density.
pub const DPI: f32 = 300.0;

/// Fill used for languages with no metadata entry (neutral gray).
pub const DEFAULT_LANGUAGE_COLOR: &str = "#888888";

/// Convert a length in inches to device pixels.
#[inline]
pub const fn inches(v: f32) -> f32 {
    v * DPI
}

/// Convert a font size (or line width) in points to device pixels.
#[inline]
pub const fn points(v: f32) -> f32 {
    v * DPI / 72.0
}

/// Plot margins, in device pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Margins {
    /// Create margins from inch measurements.
    pub const fn from_inches(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left: inches(left),
            right: inches(right),
            top: inches(top),
            bottom: inches(bottom),
        }
    }
}

/// Parse a `#rrggbb` (or bare `rrggbb`) string into an opaque color.
pub fn parse_hex_color(s: &str) -> Option<skia::Color> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(skia::Color::from_argb(255, r, g, b))
}

/// The same color with its alpha replaced by `alpha` in [0, 1].
pub fn with_alpha(color: skia::Color, alpha: f32) -> skia::Color {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_with_and_without_hash() {
        assert_eq!(
            parse_hex_color("#dea584"),
            Some(skia::Color::from_argb(255, 0xde, 0xa5, 0x84))
        );
        assert_eq!(
            parse_hex_color("3572a5"),
            Some(skia::Color::from_argb(255, 0x35, 0x72, 0xa5))
        );
    }

    #[test]
    fn hex_rejects_junk() {
        assert_eq!(parse_hex_color("#123"), None);
        assert_eq!(parse_hex_color("not-a-color"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn unit_conversions_track_dpi() {
        assert_eq!(inches(1.0), DPI);
        assert!((points(72.0) - DPI).abs() < f32::EPSILON);
        assert!((points(10.0) - DPI / 7.2).abs() < 0.001);
    }

    #[test]
    fn alpha_is_applied_and_clamped() {
        let c = with_alpha(skia::Color::from_argb(255, 10, 20, 30), 0.5);
        assert_eq!(c.a(), 128);
        assert_eq!((c.r(), c.g(), c.b()), (10, 20, 30));
        assert_eq!(with_alpha(c, 2.0).a(), 255);
    }
}
