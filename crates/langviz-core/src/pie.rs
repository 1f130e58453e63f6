// File: crates/langviz-core/src/pie.rs
// Summary: Pie and donut distribution charts with an Other bucket, rim labels, and
//          in-wedge percentage text.

use std::path::PathBuf;

use anyhow::Result;
use skia_safe as skia;
use tracing::warn;

use crate::renderer::{ChartRenderer, SHADOW_ALPHA, SHADOW_OFFSET};
use crate::stats::{with_other_bucket, StatEntry};
use crate::text::Align;
use crate::types::{inches, points, with_alpha};

/// Pie charts keep the top five languages plus an Other bucket.
pub const PIE_TOP_N: usize = 5;

/// Wedge radius as a fraction of the half-extent of the figure.
const RADIUS_FRACTION: f32 = 0.60;
/// Donut hole radius as a fraction of the wedge radius.
const DONUT_HOLE: f32 = 0.62;
/// Language labels sit just off the rim.
const LABEL_RADIUS: f32 = 1.12;
/// Percentage text distance from center, per variant.
const PCT_RADIUS_PIE: f32 = 0.65;
const PCT_RADIUS_DONUT: f32 = 0.82;
/// Percentages at or below this share stay unlabeled.
const PCT_LABEL_MIN: f64 = 1.0;

impl ChartRenderer {
    /// Share-of-total wedges for the top languages. `donut` punches a
    /// themed center hole and moves the percentage ring outward.
    pub fn pie_chart(
        &mut self,
        data: &[StatEntry],
        title: &str,
        filename: &str,
        donut: bool,
    ) -> Result<Option<PathBuf>> {
        if self.skip_empty(data, title) {
            return Ok(None);
        }
        let data = with_other_bucket(data, PIE_TOP_N);
        let total: f64 = data.iter().map(|e| e.value.as_f64()).sum();
        if total <= 0.0 {
            warn!(title, "all values are zero, nothing to draw");
            return Ok(None);
        }

        let width = inches(9.0) as i32;
        let height = inches(7.0) as i32;
        let cx = width as f32 * 0.5;
        let cy = height as f32 * 0.5;
        let radius = width.min(height) as f32 * 0.5 * RADIUS_FRACTION;

        let mut surface = self.new_surface(width, height)?;
        let canvas = surface.canvas();

        let mut shadow = skia::Paint::default();
        shadow.set_anti_alias(true);
        shadow.set_color(with_alpha(skia::Color::BLACK, SHADOW_ALPHA));
        canvas.draw_circle((cx + SHADOW_OFFSET, cy + SHADOW_OFFSET), radius, &shadow);

        let oval = skia::Rect::from_xywh(cx - radius, cy - radius, radius * 2.0, radius * 2.0);
        let pct_radius = if donut { PCT_RADIUS_DONUT } else { PCT_RADIUS_PIE };

        // Wedges sweep counterclockwise from the +x axis; Skia's positive
        // angles run clockwise on a y-down canvas, hence the negations.
        let mut start_deg = 0.0f32;
        for entry in &data {
            let fraction = (entry.value.as_f64() / total) as f32;
            // a lone wedge would sweep a degenerate full turn
            let sweep_deg = (fraction * 360.0).min(359.95);
            let fill = if entry.language == "Other" {
                self.theme().other_slice
            } else {
                self.languages().display_color(&entry.language)
            };

            let mut path = skia::Path::new();
            path.move_to((cx, cy));
            path.arc_to(oval, -start_deg, -sweep_deg, false);
            path.close();

            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_color(with_alpha(fill, 0.9));
            canvas.draw_path(&path, &paint);

            let mut edge = skia::Paint::default();
            edge.set_anti_alias(true);
            edge.set_style(skia::paint::Style::Stroke);
            edge.set_stroke_width(points(1.0));
            edge.set_color(self.theme().bar_edge);
            canvas.draw_path(&path, &edge);

            let mid = (start_deg + sweep_deg * 0.5).to_radians();
            let (dir_x, dir_y) = (mid.cos(), -mid.sin());

            let label_align = if dir_x > 0.15 {
                Align::Left
            } else if dir_x < -0.15 {
                Align::Right
            } else {
                Align::Center
            };
            self.text.draw(
                canvas,
                &entry.language,
                cx + dir_x * radius * LABEL_RADIUS,
                cy + dir_y * radius * LABEL_RADIUS,
                points(9.0),
                true,
                self.theme().text,
                label_align,
            );

            let pct = fraction as f64 * 100.0;
            if pct > PCT_LABEL_MIN {
                self.text.draw_with_halo(
                    canvas,
                    &format!("{pct:.1}%"),
                    cx + dir_x * radius * pct_radius,
                    cy + dir_y * radius * pct_radius,
                    points(9.0),
                    true,
                    skia::Color::WHITE,
                    with_alpha(skia::Color::BLACK, 0.31),
                    points(2.0),
                    Align::Center,
                );
            }

            start_deg += sweep_deg;
        }

        if donut {
            let hole = radius * DONUT_HOLE;
            let mut center = skia::Paint::default();
            center.set_anti_alias(true);
            center.set_color(self.theme().donut_center);
            canvas.draw_circle((cx, cy), hole, &center);

            let mut ring = skia::Paint::default();
            ring.set_anti_alias(true);
            ring.set_style(skia::paint::Style::Stroke);
            ring.set_stroke_width(points(1.0));
            ring.set_color(self.theme().donut_edge);
            canvas.draw_circle((cx, cy), hole, &ring);
        }

        self.save_png(&mut surface, filename).map(Some)
    }
}
