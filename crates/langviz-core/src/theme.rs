// File: crates/langviz-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub figure_bg: skia::Color,
    pub axes_bg: skia::Color,
    pub text: skia::Color,
    /// Outline drawn behind value labels so they stay readable over bars.
    pub halo: skia::Color,
    pub spine: skia::Color,
    pub grid: skia::Color,
    pub bar_edge: skia::Color,
    pub donut_center: skia::Color,
    pub donut_edge: skia::Color,
    pub other_slice: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            figure_bg: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axes_bg: skia::Color::from_argb(255, 0xfa, 0xfa, 0xfa),
            text: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            halo: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            spine: skia::Color::from_argb(255, 0xd0, 0xd0, 0xd0),
            grid: skia::Color::from_argb(255, 0xe0, 0xe0, 0xe0),
            bar_edge: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            donut_center: skia::Color::from_argb(255, 0xfa, 0xfa, 0xfa),
            donut_edge: skia::Color::from_argb(255, 0xe0, 0xe0, 0xe0),
            other_slice: skia::Color::from_argb(255, 0xd0, 0xd0, 0xd0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            figure_bg: skia::Color::from_argb(255, 0x0d, 0x11, 0x17),
            axes_bg: skia::Color::from_argb(255, 0x16, 0x1b, 0x22),
            text: skia::Color::from_argb(255, 0xe6, 0xed, 0xf3),
            halo: skia::Color::from_argb(255, 0x0d, 0x11, 0x17),
            spine: skia::Color::from_argb(255, 0x30, 0x36, 0x3d),
            grid: skia::Color::from_argb(255, 0x30, 0x36, 0x3d),
            bar_edge: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            donut_center: skia::Color::from_argb(255, 0x16, 0x1b, 0x22),
            donut_edge: skia::Color::from_argb(255, 0x30, 0x36, 0x3d),
            other_slice: skia::Color::from_argb(255, 0xd0, 0xd0, 0xd0),
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive_with_light_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("light").name, "light");
        assert_eq!(find("solarized").name, "light");
    }
}
