//! Significant duration from a cumulative energy curve.

use crate::arias::EnergyCurve;
use serde::{Deserialize, Serialize};

/// Normalized-energy levels bounding the significant-duration window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationThresholds {
    pub lower: f64,
    pub upper: f64,
}

impl Default for DurationThresholds {
    fn default() -> Self {
        Self {
            lower: 0.05,
            upper: 0.95,
        }
    }
}

impl DurationThresholds {
    pub fn is_valid(&self) -> bool {
        0.0 <= self.lower && self.lower < self.upper && self.upper <= 1.0
    }
}

/// Interval between the lower and upper energy crossings.
///
/// The all-zero window is returned for records with no energy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DurationWindow {
    pub t5: f64,
    pub t95: f64,
    pub duration: f64,
}

impl DurationWindow {
    pub fn degenerate() -> Self {
        Self::default()
    }

    pub fn is_degenerate(&self) -> bool {
        self.t5 == 0.0 && self.t95 == 0.0 && self.duration == 0.0
    }
}

/// Piecewise-linear interpolation of `fp(xp)` at `x`.
///
/// `xp` must be non-decreasing. Outside the table the end values are
/// returned. On a flat run of equal `xp` values the rightmost sample wins,
/// so a crossing is reported where the curve leaves the plateau.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    debug_assert_eq!(xp.len(), fp.len());
    let n = xp.len();
    if n == 0 {
        return 0.0;
    }
    if x < xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }
    // Last index with xp[j] <= x; j < n - 1 because x < xp[n - 1].
    let j = xp.partition_point(|&v| v <= x) - 1;
    let (x0, x1) = (xp[j], xp[j + 1]);
    let (f0, f1) = (fp[j], fp[j + 1]);
    f0 + (f1 - f0) * (x - x0) / (x1 - x0)
}

/// Extract the significant-duration window from an energy curve.
pub fn significant_duration(
    curve: &EnergyCurve<'_>,
    thresholds: &DurationThresholds,
) -> DurationWindow {
    let total = curve.total();
    if !(total.is_finite() && total > 0.0) {
        return DurationWindow::degenerate();
    }

    let normalized: Vec<f64> = curve.cumulative_energy().iter().map(|e| e / total).collect();

    let reaches = |level: f64| normalized.iter().any(|&v| v >= level);
    if !reaches(thresholds.lower) || !reaches(thresholds.upper) {
        tracing::debug!(total, "energy curve never reaches a threshold; degenerate window");
        return DurationWindow::degenerate();
    }

    let time = curve.time();
    let t5 = interp(thresholds.lower, &normalized, time);
    let t95 = interp(thresholds.upper, &normalized, time);

    DurationWindow {
        t5,
        t95,
        duration: t95 - t5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arias::{AriasParams, arias_intensity};

    #[test]
    fn interp_between_samples() {
        let xp = [0.0, 0.5, 1.0];
        let fp = [0.0, 10.0, 20.0];
        assert_eq!(interp(0.25, &xp, &fp), 5.0);
        assert_eq!(interp(0.75, &xp, &fp), 15.0);
    }

    #[test]
    fn interp_clamps_outside_table() {
        let xp = [0.1, 0.9];
        let fp = [1.0, 2.0];
        assert_eq!(interp(0.0, &xp, &fp), 1.0);
        assert_eq!(interp(1.0, &xp, &fp), 2.0);
    }

    #[test]
    fn interp_leaves_plateau_at_right_edge() {
        let xp = [0.0, 0.0, 0.0, 1.0];
        let fp = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(interp(0.0, &xp, &fp), 2.0);
        assert_eq!(interp(0.5, &xp, &fp), 2.5);
    }

    #[test]
    fn uniform_shaking_gives_ninety_percent_of_record() {
        let t: Vec<f64> = (0..=1000).map(|i| i as f64 * 0.01).collect();
        let a = vec![0.2; t.len()];
        let curve = arias_intensity(&t, &a, &AriasParams::default()).unwrap();
        let w = significant_duration(&curve, &DurationThresholds::default());
        assert!((w.t5 - 0.5).abs() < 1e-9);
        assert!((w.t95 - 9.5).abs() < 1e-9);
        assert!((w.duration - 9.0).abs() < 1e-9);
    }

    #[test]
    fn zero_energy_is_degenerate() {
        let t: Vec<f64> = (0..10).map(|i| i as f64 * 0.01).collect();
        let curve = arias_intensity(&t, &[0.0; 10], &AriasParams::default()).unwrap();
        let w = significant_duration(&curve, &DurationThresholds::default());
        assert!(w.is_degenerate());
    }

    #[test]
    fn single_sample_is_degenerate() {
        let curve = arias_intensity(&[0.0], &[1.0], &AriasParams::default()).unwrap();
        let w = significant_duration(&curve, &DurationThresholds::default());
        assert!(w.is_degenerate());
    }

    #[test]
    fn custom_thresholds() {
        let t: Vec<f64> = (0..=100).map(|i| i as f64 * 0.1).collect();
        let a = vec![1.0; t.len()];
        let curve = arias_intensity(&t, &a, &AriasParams::default()).unwrap();
        let th = DurationThresholds {
            lower: 0.25,
            upper: 0.75,
        };
        let w = significant_duration(&curve, &th);
        assert!((w.duration - 5.0).abs() < 1e-9);
    }
}
