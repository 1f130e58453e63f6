// File: crates/langviz-core/src/renderer.rs
// Summary: ChartRenderer orchestration: raster surface plumbing, shared axis furniture,
//          and the per-metric driver entry points.

use std::path::{Path, PathBuf};

use anyhow::Result;
use skia_safe as skia;
use tracing::{info, warn};

use crate::badge::{Badge, BadgeCache, BadgeTransport, HttpBadgeTransport};
use crate::format::{format_tick, format_value};
use crate::languages::LanguageTable;
use crate::scale::ValueScale;
use crate::stats::{BreakdownFn, StatEntry, StatValue};
use crate::text::{Align, TextPainter};
use crate::theme::Theme;
use crate::types::{points, with_alpha, Margins, DPI};

/// Grid lines stay faint so bars dominate.
pub(crate) const GRID_ALPHA: f32 = 0.25;
/// Soft drop shadow under bars and wedges, offset one point down-right.
pub(crate) const SHADOW_ALPHA: f32 = 0.10;
pub(crate) const SHADOW_OFFSET: f32 = points(1.0);
/// Badge zoom factors are relative to a 100 dpi layout.
pub(crate) const BADGE_ZOOM_BASE_DPI: f32 = 100.0;
/// Badge column anchor: this fraction of the plot width left of the axis.
pub(crate) const BADGE_COLUMN_OFFSET: f32 = 0.02;

/// Plot rectangle in device pixels, derived from figure size and margins.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PlotFrame {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotFrame {
    pub fn new(width: i32, height: i32, margins: Margins) -> Self {
        Self {
            left: margins.left,
            top: margins.top,
            right: width as f32 - margins.right,
            bottom: height as f32 - margins.bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Renders the full chart set into one output directory. Owns the theme,
/// language metadata, and badge cache; one instance per output run.
pub struct ChartRenderer {
    output_dir: PathBuf,
    theme: Theme,
    languages: LanguageTable,
    badges: BadgeCache,
    pub(crate) text: TextPainter,
}

impl ChartRenderer {
    /// Renderer writing into `output_dir`, with badges cached under
    /// `<output_dir>/.badge_cache` and fetched over HTTP.
    pub fn new(output_dir: impl Into<PathBuf>, theme: Theme) -> Result<Self> {
        let output_dir = output_dir.into();
        let transport = Box::new(HttpBadgeTransport::new()?);
        let badges = BadgeCache::new(output_dir.join(".badge_cache"), transport)?;
        Ok(Self {
            output_dir,
            theme,
            languages: LanguageTable::empty(),
            badges,
            text: TextPainter::new(),
        })
    }

    pub fn with_languages(mut self, languages: LanguageTable) -> Self {
        self.languages = languages;
        self
    }

    /// Substitute the badge transport (tests pass canned transports).
    pub fn with_transport(mut self, transport: Box<dyn BadgeTransport>) -> Self {
        self.badges.set_transport(transport);
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn languages(&self) -> &LanguageTable {
        &self.languages
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    // ---- drivers ------------------------------------------------------------

    /// Ranked horizontal leaderboards for all three metrics. The
    /// lines-of-code board shows per-repository breakdowns when a source
    /// for them is supplied.
    pub fn create_all_leaderboards(
        &mut self,
        username: &str,
        by_repos: &[StatEntry],
        by_lines: &[StatEntry],
        by_weighted: &[StatEntry],
        breakdown: Option<&BreakdownFn>,
        top_repos_count: usize,
    ) -> Result<()> {
        self.leaderboard(
            by_repos,
            &format!("{username} - Language Leaderboard by Repository Count"),
            "leaderboard_by_repos.png",
            "Number of Repositories",
        )?;

        match breakdown {
            Some(breakdown) => {
                self.leaderboard_with_breakdown(
                    by_lines,
                    &format!("{username} - Language Leaderboard by Lines of Code (with Top Contributing Repos)"),
                    "leaderboard_by_lines.png",
                    "Lines of Code",
                    breakdown,
                    top_repos_count,
                )?;
            }
            None => {
                self.leaderboard(
                    by_lines,
                    &format!("{username} - Language Leaderboard by Lines of Code"),
                    "leaderboard_by_lines.png",
                    "Lines of Code",
                )?;
            }
        }

        self.leaderboard(
            by_weighted,
            &format!("{username} - Language Leaderboard by Weighted Score"),
            "leaderboard_by_weighted.png",
            "Weighted Score (Normalized)",
        )?;
        Ok(())
    }

    /// Vertical bar charts for all three metrics.
    pub fn create_bar_charts(
        &mut self,
        username: &str,
        by_repos: &[StatEntry],
        by_lines: &[StatEntry],
        by_weighted: &[StatEntry],
    ) -> Result<()> {
        self.vertical_bar_chart(
            by_repos,
            &format!("{username} - Languages by Repository Count"),
            "bar_by_repos.png",
            "Repository Count",
        )?;
        self.vertical_bar_chart(
            by_lines,
            &format!("{username} - Languages by Lines of Code"),
            "bar_by_lines.png",
            "Lines of Code",
        )?;
        self.vertical_bar_chart(
            by_weighted,
            &format!("{username} - Languages by Weighted Score"),
            "bar_by_weighted.png",
            "Weighted Score",
        )?;
        Ok(())
    }

    /// Compact horizontal bar charts for all three metrics.
    pub fn create_horizontal_bar_charts(
        &mut self,
        username: &str,
        by_repos: &[StatEntry],
        by_lines: &[StatEntry],
        by_weighted: &[StatEntry],
    ) -> Result<()> {
        self.horizontal_bar_chart(
            by_repos,
            &format!("{username} - Languages by Repository Count"),
            "horizontal_bar_by_repos.png",
            "Repository Count",
        )?;
        self.horizontal_bar_chart(
            by_lines,
            &format!("{username} - Languages by Lines of Code"),
            "horizontal_bar_by_lines.png",
            "Lines of Code",
        )?;
        self.horizontal_bar_chart(
            by_weighted,
            &format!("{username} - Languages by Weighted Score"),
            "horizontal_bar_by_weighted.png",
            "Weighted Score",
        )?;
        Ok(())
    }

    /// Pie (or donut) distribution charts for all three metrics.
    pub fn create_pie_charts(
        &mut self,
        username: &str,
        by_repos: &[StatEntry],
        by_lines: &[StatEntry],
        by_weighted: &[StatEntry],
        donut: bool,
    ) -> Result<()> {
        let chart_type = if donut { "donut" } else { "pie" };
        self.pie_chart(
            by_repos,
            &format!("{username} - Languages by Repository Count"),
            &format!("{chart_type}_by_repos.png"),
            donut,
        )?;
        self.pie_chart(
            by_lines,
            &format!("{username} - Languages by Lines of Code"),
            &format!("{chart_type}_by_lines.png"),
            donut,
        )?;
        self.pie_chart(
            by_weighted,
            &format!("{username} - Languages by Weighted Score"),
            &format!("{chart_type}_by_weighted.png"),
            donut,
        )?;
        Ok(())
    }

    // ---- shared plumbing ----------------------------------------------------

    /// Create a raster surface cleared to the figure background.
    pub(crate) fn new_surface(&self, width: i32, height: i32) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        surface.canvas().clear(self.theme.figure_bg);
        Ok(surface)
    }

    /// Snapshot `surface`, encode PNG, and write `filename` into the
    /// output directory.
    pub(crate) fn save_png(&self, surface: &mut skia::Surface, filename: &str) -> Result<PathBuf> {
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;

        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(filename);
        std::fs::write(&path, data.as_bytes())?;
        info!(path = %path.display(), "chart written");
        Ok(path)
    }

    /// Empty input is a no-op with a diagnostic, never an error.
    pub(crate) fn skip_empty(&self, data: &[StatEntry], title: &str) -> bool {
        if data.is_empty() {
            warn!(title, "no data to visualize");
            return true;
        }
        false
    }

    /// Fill the plot rectangle with the axes background.
    pub(crate) fn draw_plot_background(&self, canvas: &skia::Canvas, frame: &PlotFrame) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(self.theme.axes_bg);
        canvas.draw_rect(
            skia::Rect::from_ltrb(frame.left, frame.top, frame.right, frame.bottom),
            &paint,
        );
    }

    fn grid_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_stroke_width(points(0.8));
        paint.set_color(with_alpha(self.theme.grid, GRID_ALPHA));
        paint
    }

    pub(crate) fn spine_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_stroke_width(points(1.0));
        paint.set_color(self.theme.spine);
        paint
    }

    /// Vertical grid lines at value ticks (drawn before the bars).
    pub(crate) fn draw_value_grid_x(
        &self,
        canvas: &skia::Canvas,
        frame: &PlotFrame,
        scale: &ValueScale,
        tick_values: &[f64],
    ) {
        let paint = self.grid_paint();
        for &v in tick_values {
            let x = scale.to_px(v);
            canvas.draw_line((x, frame.top), (x, frame.bottom), &paint);
        }
    }

    /// Horizontal grid lines at value ticks (drawn before the bars).
    pub(crate) fn draw_value_grid_y(
        &self,
        canvas: &skia::Canvas,
        frame: &PlotFrame,
        scale: &ValueScale,
        tick_values: &[f64],
    ) {
        let paint = self.grid_paint();
        for &v in tick_values {
            let y = scale.to_px(v);
            canvas.draw_line((frame.left, y), (frame.right, y), &paint);
        }
    }

    /// Bottom spine with outward tick marks and tick labels.
    pub(crate) fn draw_x_axis(
        &self,
        canvas: &skia::Canvas,
        frame: &PlotFrame,
        scale: &ValueScale,
        tick_values: &[f64],
        fractional: bool,
    ) {
        let spine = self.spine_paint();
        canvas.draw_line((frame.left, frame.bottom), (frame.right, frame.bottom), &spine);
        for &v in tick_values {
            let x = scale.to_px(v);
            canvas.draw_line((x, frame.bottom), (x, frame.bottom + points(1.4)), &spine);
            self.text.draw(
                canvas,
                &format_tick(v, fractional),
                x,
                frame.bottom + points(7.0),
                points(9.0),
                false,
                self.theme.text,
                Align::Center,
            );
        }
    }

    /// Left spine with tick labels for the value axis of vertical charts.
    pub(crate) fn draw_y_axis(
        &self,
        canvas: &skia::Canvas,
        frame: &PlotFrame,
        scale: &ValueScale,
        tick_values: &[f64],
        fractional: bool,
    ) {
        let spine = self.spine_paint();
        canvas.draw_line((frame.left, frame.top), (frame.left, frame.bottom), &spine);
        for &v in tick_values {
            let y = scale.to_px(v);
            canvas.draw_line((frame.left - points(1.4), y), (frame.left, y), &spine);
            self.text.draw(
                canvas,
                &format_tick(v, fractional),
                frame.left - points(3.0),
                y,
                points(9.0),
                false,
                self.theme.text,
                Align::Right,
            );
        }
    }

    /// Axis caption centered under the plot.
    pub(crate) fn draw_x_caption(&self, canvas: &skia::Canvas, frame: &PlotFrame, label: &str, size_pt: f32) {
        self.text.draw(
            canvas,
            label,
            (frame.left + frame.right) * 0.5,
            frame.bottom + points(20.0),
            points(size_pt),
            true,
            self.theme.text,
            Align::Center,
        );
    }

    /// Axis caption rotated up the left edge of the plot.
    pub(crate) fn draw_y_caption(&self, canvas: &skia::Canvas, frame: &PlotFrame, label: &str, size_pt: f32) {
        self.text.draw_rotated(
            canvas,
            label,
            frame.left - points(32.0),
            (frame.top + frame.bottom) * 0.5,
            points(size_pt),
            true,
            self.theme.text,
            -90.0,
            Align::Center,
        );
    }

    /// Value label just past the end of a bar, with a halo for contrast.
    pub(crate) fn draw_bar_value(
        &self,
        canvas: &skia::Canvas,
        value: &StatValue,
        x: f32,
        center_y: f32,
        size_pt: f32,
        halo_pt: f32,
    ) {
        let label = format!(" {}", format_value(value));
        self.text.draw_with_halo(
            canvas,
            &label,
            x,
            center_y,
            points(size_pt),
            true,
            self.theme.text,
            self.theme.halo,
            points(halo_pt),
            Align::Left,
        );
    }

    /// Badge (or bold text fallback) right-aligned in the row-label column
    /// left of the axis.
    pub(crate) fn draw_row_label(
        &mut self,
        canvas: &skia::Canvas,
        frame: &PlotFrame,
        language: &str,
        center_y: f32,
        badge_zoom: f32,
        text_pt: f32,
    ) {
        let anchor = frame.left - BADGE_COLUMN_OFFSET * frame.width();
        match self.badges.badge_for(language, &self.languages) {
            Badge::Image(image) => {
                let scale = badge_zoom * DPI / BADGE_ZOOM_BASE_DPI;
                let w = image.width() as f32 * scale;
                let h = image.height() as f32 * scale;
                let dst = skia::Rect::from_xywh(anchor - w, center_y - h * 0.5, w, h);
                canvas.draw_image_rect(&image, None, dst, &skia::Paint::default());
            }
            Badge::TextFallback(name) => {
                self.text.draw(
                    canvas,
                    &name,
                    anchor,
                    center_y,
                    points(text_pt),
                    true,
                    self.theme.text,
                    Align::Right,
                );
            }
        }
    }
}
