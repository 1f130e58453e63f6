// File: crates/langviz-core/src/scale.rs
// Summary: Linear value-to-pixel mapping and round-number tick selection.

/// Linear scale mapping `[0, vmax]` onto a pixel span. `px_span` may be
/// negative for axes that grow upward.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub px_origin: f32,
    pub px_span: f32,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(px_origin: f32, px_span: f32, vmax: f64) -> Self {
        let vmax = if vmax.is_finite() && vmax > 0.0 { vmax } else { 1.0 };
        Self { px_origin, px_span, vmax }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.px_origin + ((v / self.vmax) as f32) * self.px_span
    }
}

/// Round-number ticks covering `[0, vmax]` with roughly `target` steps.
/// Steps are 1, 2 or 5 times a power of ten. Degenerate maxima (zero,
/// negative, infinite, NaN) collapse to the origin tick.
pub fn ticks(vmax: f64, target: usize) -> Vec<f64> {
    if !vmax.is_finite() || vmax <= 0.0 || target == 0 {
        return vec![0.0];
    }
    let raw = vmax / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let mult = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = mult * mag;
    // subnormal maxima underflow the step to zero
    if !step.is_finite() || step <= 0.0 {
        return vec![0.0];
    }
    let mut out = Vec::new();
    let mut v = 0.0;
    while v <= vmax + step * 1e-9 {
        out.push(v);
        v += step;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_endpoints() {
        let s = ValueScale::new(100.0, 500.0, 50.0);
        assert_eq!(s.to_px(0.0), 100.0);
        assert_eq!(s.to_px(50.0), 600.0);
        assert_eq!(s.to_px(25.0), 350.0);
    }

    #[test]
    fn inverted_span_grows_upward() {
        let s = ValueScale::new(600.0, -500.0, 50.0);
        assert!(s.to_px(50.0) < s.to_px(0.0));
        assert_eq!(s.to_px(0.0), 600.0);
    }

    #[test]
    fn zero_max_does_not_divide_by_zero() {
        let s = ValueScale::new(0.0, 100.0, 0.0);
        assert_eq!(s.to_px(0.0), 0.0);
    }

    #[test]
    fn ticks_are_round_and_cover_range() {
        let t = ticks(87.0, 5);
        assert_eq!(t.first().copied(), Some(0.0));
        assert!(t.iter().all(|v| (v / 20.0).fract() == 0.0));
        assert!(*t.last().unwrap() <= 87.0 + 1e-6);
        assert!(t.len() >= 4);
    }

    #[test]
    fn degenerate_max_still_yields_origin() {
        assert_eq!(ticks(0.0, 5), vec![0.0]);
    }

    #[test]
    fn non_finite_max_terminates_at_the_origin_tick() {
        assert_eq!(ticks(f64::INFINITY, 5), vec![0.0]);
        assert_eq!(ticks(f64::NAN, 5), vec![0.0]);
        // smallest subnormal: the derived step underflows to zero
        assert_eq!(ticks(5e-324, 5), vec![0.0]);
        let s = ValueScale::new(0.0, 100.0, f64::INFINITY);
        assert_eq!(s.vmax, 1.0);
        assert!(s.to_px(0.5).is_finite());
    }
}
