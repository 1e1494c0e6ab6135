//! Arias Intensity (cumulative energy) of an acceleration history.
//!
//! IA(t) = π / (2g) · ∫₀ᵗ a(τ)² dτ, with `a` in m/s² and `IA` in m/s.

use crate::error::{SignalError, SignalResult};
use crate::integrate::IntegrationRule;
use gm_core::constants::G_MPS2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Parameters of the Arias Intensity computation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AriasParams {
    /// Gravitational acceleration (m/s²), used for g→m/s² and the π/2g scale
    pub gravity_mps2: f64,
    pub rule: IntegrationRule,
}

impl Default for AriasParams {
    fn default() -> Self {
        Self {
            gravity_mps2: G_MPS2,
            rule: IntegrationRule::default(),
        }
    }
}

impl AriasParams {
    /// Scale applied to the integral of squared acceleration.
    pub fn scale(&self) -> f64 {
        PI / (2.0 * self.gravity_mps2)
    }
}

/// Cumulative Arias Intensity over the time base it was computed on.
#[derive(Clone, Debug, PartialEq)]
pub struct EnergyCurve<'a> {
    time: &'a [f64],
    cumulative_energy: Vec<f64>,
}

impl<'a> EnergyCurve<'a> {
    pub fn time(&self) -> &'a [f64] {
        self.time
    }

    /// Cumulative energy (m/s), starting at 0.
    pub fn cumulative_energy(&self) -> &[f64] {
        &self.cumulative_energy
    }

    /// Final value of the curve, the total Arias Intensity.
    pub fn total(&self) -> f64 {
        self.cumulative_energy.last().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.cumulative_energy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative_energy.is_empty()
    }
}

/// Compute the Arias Intensity curve of `accel_g` (in g) sampled at `time` (s).
pub fn arias_intensity<'a>(
    time: &'a [f64],
    accel_g: &[f64],
    params: &AriasParams,
) -> SignalResult<EnergyCurve<'a>> {
    if time.len() != accel_g.len() {
        return Err(SignalError::LengthMismatch {
            what: "time vs acceleration",
            left: time.len(),
            right: accel_g.len(),
        });
    }
    if time.is_empty() {
        return Err(SignalError::EmptyInput {
            what: "acceleration series",
        });
    }
    if !(params.gravity_mps2.is_finite() && params.gravity_mps2 > 0.0) {
        return Err(SignalError::InvalidArg {
            what: "gravity must be positive and finite",
        });
    }
    if let Some(&bad) = accel_g.iter().find(|v| !v.is_finite()) {
        return Err(SignalError::NonFinite {
            what: "acceleration sample",
            value: bad,
        });
    }

    let squared: Vec<f64> = accel_g
        .iter()
        .map(|a| {
            let a_mps2 = a * params.gravity_mps2;
            a_mps2 * a_mps2
        })
        .collect();

    let scale = params.scale();
    let mut cumulative_energy = params.rule.cumulative(&squared, time);
    for v in &mut cumulative_energy {
        *v *= scale;
    }

    Ok(EnergyCurve {
        time,
        cumulative_energy,
    })
}
