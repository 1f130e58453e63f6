// File: crates/langviz-core/src/bars.rs
// Summary: Horizontal leaderboards (plain and stacked breakdown), vertical bar charts,
//          and the compact horizontal bar chart.

use std::path::PathBuf;

use anyhow::Result;
use skia_safe as skia;

use crate::format::format_value;
use crate::renderer::{ChartRenderer, PlotFrame, SHADOW_ALPHA, SHADOW_OFFSET};
use crate::scale::{ticks, ValueScale};
use crate::stats::{has_scores, max_value, top_n, BreakdownFn, StatEntry, StatValue};
use crate::text::Align;
use crate::types::{inches, points, with_alpha, Margins};

/// Vertical bar charts keep only the strongest languages.
pub const VERTICAL_TOP_N: usize = 12;
/// Horizontal bar charts fit a few more rows.
pub const HORIZONTAL_TOP_N: usize = 15;

const BAR_FILL_ALPHA: f32 = 0.9;
/// Bar thickness as a fraction of its row/column band.
const BAR_BAND_FILL: f32 = 0.7;
const BAR_BAND_FILL_COMPACT: f32 = 0.65;
/// Fraction of the axis span kept clear past the longest bar.
const VALUE_HEADROOM: f64 = 1.05;
const AXIS_TICK_TARGET: usize = 5;

/// Stacked segment plan for one breakdown row: top repositories darken the
/// start of the bar, the unattributed remainder trails washed out.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Segment {
    pub from: f64,
    pub to: f64,
    pub opacity: f32,
    pub remainder: bool,
}

pub(crate) fn breakdown_segments(total: f64, parts: &[(String, u64)]) -> Vec<Segment> {
    if parts.is_empty() {
        return vec![Segment { from: 0.0, to: total, opacity: BAR_FILL_ALPHA, remainder: false }];
    }
    let mut out = Vec::with_capacity(parts.len() + 1);
    let mut acc = 0.0;
    for (j, (_, lines)) in parts.iter().enumerate() {
        let to = acc + *lines as f64;
        out.push(Segment {
            from: acc,
            to,
            opacity: (1.0 - j as f32 * 0.15).max(0.4),
            remainder: false,
        });
        acc = to;
    }
    if acc < total {
        out.push(Segment { from: acc, to: total, opacity: 0.25, remainder: true });
    }
    out
}

impl ChartRenderer {
    /// Ranked horizontal leaderboard: one badge-labelled row per language,
    /// full input, no cap.
    pub fn leaderboard(
        &mut self,
        data: &[StatEntry],
        title: &str,
        filename: &str,
        value_label: &str,
    ) -> Result<Option<PathBuf>> {
        if self.skip_empty(data, title) {
            return Ok(None);
        }
        let width = inches(11.0) as i32;
        let height = inches((data.len() as f32 * 0.4).max(6.0)) as i32;
        let frame = PlotFrame::new(width, height, Margins::from_inches(1.7, 0.9, 0.3, 0.7));

        let mut surface = self.new_surface(width, height)?;
        let canvas = surface.canvas();
        self.draw_plot_background(canvas, &frame);

        let vmax = max_value(data) * VALUE_HEADROOM;
        let scale = ValueScale::new(frame.left, frame.width(), vmax);
        let tick_values = ticks(scale.vmax, AXIS_TICK_TARGET);
        self.draw_value_grid_x(canvas, &frame, &scale, &tick_values);

        let band = frame.height() / data.len() as f32;
        let thickness = band * BAR_BAND_FILL;
        for (i, entry) in data.iter().enumerate() {
            let cy = frame.top + (i as f32 + 0.5) * band;
            let fill = self.languages().display_color(&entry.language);
            let rect = skia::Rect::from_ltrb(
                frame.left,
                cy - thickness * 0.5,
                scale.to_px(entry.value.as_f64()),
                cy + thickness * 0.5,
            );
            self.draw_bar(canvas, rect, fill, BAR_FILL_ALPHA, 1.0);
            self.draw_bar_value(canvas, &entry.value, rect.right, cy, 10.0, 3.0);
            self.draw_row_label(canvas, &frame, &entry.language, cy, 0.35, 10.0);
        }

        self.draw_x_axis(canvas, &frame, &scale, &tick_values, has_scores(data));
        self.draw_x_caption(canvas, &frame, value_label, 13.0);
        self.save_png(&mut surface, filename).map(Some)
    }

    /// Leaderboard variant that splits each bar into its top contributing
    /// repositories plus a washed-out remainder.
    pub fn leaderboard_with_breakdown(
        &mut self,
        data: &[StatEntry],
        title: &str,
        filename: &str,
        value_label: &str,
        breakdown: &BreakdownFn,
        top_repos_count: usize,
    ) -> Result<Option<PathBuf>> {
        if self.skip_empty(data, title) {
            return Ok(None);
        }
        let width = inches(11.0) as i32;
        let height = inches((data.len() as f32 * 0.4).max(6.0)) as i32;
        let frame = PlotFrame::new(width, height, Margins::from_inches(1.7, 0.9, 0.3, 0.7));

        let mut surface = self.new_surface(width, height)?;
        let canvas = surface.canvas();
        self.draw_plot_background(canvas, &frame);

        let vmax = max_value(data) * VALUE_HEADROOM;
        let scale = ValueScale::new(frame.left, frame.width(), vmax);
        let tick_values = ticks(scale.vmax, AXIS_TICK_TARGET);
        self.draw_value_grid_x(canvas, &frame, &scale, &tick_values);

        let band = frame.height() / data.len() as f32;
        let thickness = band * BAR_BAND_FILL;
        for (i, entry) in data.iter().enumerate() {
            let cy = frame.top + (i as f32 + 0.5) * band;
            let fill = self.languages().display_color(&entry.language);
            let total = entry.value.as_f64();
            for segment in breakdown_segments(total, &breakdown(&entry.language, top_repos_count)) {
                let rect = skia::Rect::from_ltrb(
                    scale.to_px(segment.from),
                    cy - thickness * 0.5,
                    scale.to_px(segment.to),
                    cy + thickness * 0.5,
                );
                self.draw_bar(canvas, rect, fill, segment.opacity, 0.8);
            }
            self.draw_bar_value(canvas, &entry.value, scale.to_px(total), cy, 10.0, 3.0);
            self.draw_row_label(canvas, &frame, &entry.language, cy, 0.35, 10.0);
        }

        self.draw_x_axis(canvas, &frame, &scale, &tick_values, has_scores(data));
        self.draw_x_caption(canvas, &frame, value_label, 13.0);
        self.save_png(&mut surface, filename).map(Some)
    }

    /// Vertical bar chart, capped to the top twelve languages, with
    /// rotated name labels along the bottom.
    pub fn vertical_bar_chart(
        &mut self,
        data: &[StatEntry],
        title: &str,
        filename: &str,
        value_label: &str,
    ) -> Result<Option<PathBuf>> {
        if self.skip_empty(data, title) {
            return Ok(None);
        }
        let data = top_n(data, VERTICAL_TOP_N);
        let width = inches(10.0) as i32;
        let height = inches(6.0) as i32;
        let frame = PlotFrame::new(width, height, Margins::from_inches(1.0, 0.35, 0.4, 1.5));

        let mut surface = self.new_surface(width, height)?;
        let canvas = surface.canvas();
        self.draw_plot_background(canvas, &frame);

        let vmax = max_value(data) * VALUE_HEADROOM;
        let scale = ValueScale::new(frame.bottom, -frame.height(), vmax);
        let tick_values = ticks(scale.vmax, AXIS_TICK_TARGET);
        self.draw_value_grid_y(canvas, &frame, &scale, &tick_values);

        let band = frame.width() / data.len() as f32;
        let thickness = band * BAR_BAND_FILL;
        for (i, entry) in data.iter().enumerate() {
            let cx = frame.left + (i as f32 + 0.5) * band;
            let fill = self.languages().display_color(&entry.language);
            let top = scale.to_px(entry.value.as_f64());
            let rect = skia::Rect::from_ltrb(
                cx - thickness * 0.5,
                top,
                cx + thickness * 0.5,
                frame.bottom,
            );
            self.draw_bar(canvas, rect, fill, BAR_FILL_ALPHA, 1.0);
            self.draw_column_value(canvas, &entry.value, cx, top - points(7.0));
            self.text.draw_rotated(
                canvas,
                &entry.language,
                cx,
                frame.bottom + points(7.0),
                points(9.0),
                false,
                self.theme().text,
                -45.0,
                Align::Right,
            );
        }

        self.draw_y_axis(canvas, &frame, &scale, &tick_values, has_scores(data));
        canvas.draw_line(
            (frame.left, frame.bottom),
            (frame.right, frame.bottom),
            &self.spine_paint(),
        );
        self.draw_y_caption(canvas, &frame, value_label, 11.0);
        self.save_png(&mut surface, filename).map(Some)
    }

    /// Compact horizontal bar chart, capped to the top fifteen languages.
    pub fn horizontal_bar_chart(
        &mut self,
        data: &[StatEntry],
        title: &str,
        filename: &str,
        value_label: &str,
    ) -> Result<Option<PathBuf>> {
        if self.skip_empty(data, title) {
            return Ok(None);
        }
        let data = top_n(data, HORIZONTAL_TOP_N);
        let width = inches(10.0) as i32;
        let height = inches((data.len() as f32 * 0.35).max(6.0)) as i32;
        let frame = PlotFrame::new(width, height, Margins::from_inches(1.55, 0.9, 0.3, 0.7));

        let mut surface = self.new_surface(width, height)?;
        let canvas = surface.canvas();
        self.draw_plot_background(canvas, &frame);

        let vmax = max_value(data) * VALUE_HEADROOM;
        let scale = ValueScale::new(frame.left, frame.width(), vmax);
        let tick_values = ticks(scale.vmax, AXIS_TICK_TARGET);
        self.draw_value_grid_x(canvas, &frame, &scale, &tick_values);

        let band = frame.height() / data.len() as f32;
        let thickness = band * BAR_BAND_FILL_COMPACT;
        for (i, entry) in data.iter().enumerate() {
            let cy = frame.top + (i as f32 + 0.5) * band;
            let fill = self.languages().display_color(&entry.language);
            let rect = skia::Rect::from_ltrb(
                frame.left,
                cy - thickness * 0.5,
                scale.to_px(entry.value.as_f64()),
                cy + thickness * 0.5,
            );
            self.draw_bar(canvas, rect, fill, BAR_FILL_ALPHA, 1.0);
            self.draw_bar_value(canvas, &entry.value, rect.right, cy, 9.0, 2.0);
            self.draw_row_label(canvas, &frame, &entry.language, cy, 0.3, 9.0);
        }

        self.draw_x_axis(canvas, &frame, &scale, &tick_values, has_scores(data));
        self.draw_x_caption(canvas, &frame, value_label, 11.0);
        self.save_png(&mut surface, filename).map(Some)
    }

    /// One bar with drop shadow, translucent fill, and a light edge.
    fn draw_bar(&self, canvas: &skia::Canvas, rect: skia::Rect, fill: skia::Color, alpha: f32, edge_pt: f32) {
        let mut shadow = skia::Paint::default();
        shadow.set_anti_alias(true);
        shadow.set_color(with_alpha(skia::Color::BLACK, SHADOW_ALPHA));
        canvas.draw_rect(rect.with_offset((SHADOW_OFFSET, SHADOW_OFFSET)), &shadow);

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(with_alpha(fill, alpha));
        canvas.draw_rect(rect, &paint);

        let mut edge = skia::Paint::default();
        edge.set_anti_alias(true);
        edge.set_style(skia::paint::Style::Stroke);
        edge.set_stroke_width(points(edge_pt));
        edge.set_color(self.theme().bar_edge);
        canvas.draw_rect(rect, &edge);
    }

    /// Value label centered above a vertical bar.
    fn draw_column_value(&self, canvas: &skia::Canvas, value: &StatValue, cx: f32, y: f32) {
        self.text.draw_with_halo(
            canvas,
            &format_value(value),
            cx,
            y,
            points(9.0),
            true,
            self.theme().text,
            self.theme().halo,
            points(2.0),
            Align::Center,
        );
    }
}
