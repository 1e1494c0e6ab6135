//! Butterworth bandpass design.
//!
//! Analog prototype poles are mapped lowpass → bandpass around the
//! pre-warped band, then through the bilinear transform. Each prototype
//! pole yields its own section(s), so an order-N design is N biquads with
//! zeros at z = +1 and z = -1.

use super::sos::SecondOrderSection;
use crate::error::{SignalError, SignalResult};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Bandpass design parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandpassParams {
    /// Prototype order; the bandpass has 2x this many poles
    pub order: usize,
    /// Half-width of the band as a fraction of the center frequency
    pub bandwidth_factor: f64,
    /// Floor for the low cutoff (Hz)
    pub min_low_cutoff_hz: f64,
    /// Ceiling for the high cutoff as a fraction of Nyquist
    pub max_nyquist_fraction: f64,
}

impl Default for BandpassParams {
    fn default() -> Self {
        Self {
            order: 4,
            bandwidth_factor: 0.2,
            min_low_cutoff_hz: 0.01,
            max_nyquist_fraction: 0.95,
        }
    }
}

/// A designed bandpass filter and the band it was designed for.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterSpec {
    pub center_frequency_hz: f64,
    pub low_cutoff_hz: f64,
    pub high_cutoff_hz: f64,
    pub order: usize,
    pub bandwidth_factor: f64,
    pub sampling_frequency_hz: f64,
    pub sections: Vec<SecondOrderSection>,
}

impl FilterSpec {
    /// Magnitude response at `freq_hz`.
    pub fn frequency_response(&self, freq_hz: f64) -> f64 {
        let w = 2.0 * PI * freq_hz / self.sampling_frequency_hz;
        cascade_response(&self.sections, Complex64::from_polar(1.0, w)).norm()
    }
}

/// Design a Butterworth bandpass centered on `center_hz`.
pub fn design_bandpass(
    center_hz: f64,
    sampling_frequency_hz: f64,
    params: &BandpassParams,
) -> SignalResult<FilterSpec> {
    if !(center_hz.is_finite() && center_hz > 0.0) {
        return Err(SignalError::InvalidArg {
            what: "center frequency must be positive and finite",
        });
    }
    if !(sampling_frequency_hz.is_finite() && sampling_frequency_hz > 0.0) {
        return Err(SignalError::InvalidArg {
            what: "sampling frequency must be positive and finite",
        });
    }
    if params.order == 0 {
        return Err(SignalError::InvalidArg {
            what: "filter order must be at least 1",
        });
    }
    if !(0.0..1.0).contains(&params.bandwidth_factor) {
        return Err(SignalError::InvalidArg {
            what: "bandwidth factor must be in [0, 1)",
        });
    }

    let nyquist = 0.5 * sampling_frequency_hz;
    let low = (center_hz * (1.0 - params.bandwidth_factor)).max(params.min_low_cutoff_hz);
    let high =
        (center_hz * (1.0 + params.bandwidth_factor)).min(params.max_nyquist_fraction * nyquist);

    if !(low > 0.0 && low < high && high < nyquist) {
        return Err(SignalError::InvalidFilterRange {
            low_hz: low,
            high_hz: high,
            nyquist_hz: nyquist,
        });
    }

    let sections = butterworth_bandpass_sections(params.order, low, high, sampling_frequency_hz);

    tracing::trace!(
        center_hz,
        low_hz = low,
        high_hz = high,
        sections = sections.len(),
        "designed bandpass"
    );

    Ok(FilterSpec {
        center_frequency_hz: center_hz,
        low_cutoff_hz: low,
        high_cutoff_hz: high,
        order: params.order,
        bandwidth_factor: params.bandwidth_factor,
        sampling_frequency_hz,
        sections,
    })
}

fn cascade_response(sections: &[SecondOrderSection], z: Complex64) -> Complex64 {
    sections
        .iter()
        .fold(Complex64::new(1.0, 0.0), |acc, s| acc * s.response(z))
}

/// Pre-warp frequency for bilinear transform.
fn prewarp(freq_hz: f64, sample_rate: f64) -> f64 {
    2.0 * sample_rate * (PI * freq_hz / sample_rate).tan()
}

/// Butterworth analog prototype poles on the left half of the unit circle.
fn butterworth_poles(order: usize) -> Vec<Complex64> {
    (0..order)
        .map(|k| {
            let theta = PI * (2 * k + order + 1) as f64 / (2 * order) as f64;
            Complex64::new(theta.cos(), theta.sin())
        })
        .collect()
}

fn bilinear(s: Complex64, fs2: f64) -> Complex64 {
    (fs2 + s) / (fs2 - s)
}

/// Denominator of a section with poles `z1`, `z2` (conjugates or both real).
fn denominator(z1: Complex64, z2: Complex64) -> [f64; 2] {
    [-(z1 + z2).re, (z1 * z2).re]
}

fn butterworth_bandpass_sections(
    order: usize,
    low_hz: f64,
    high_hz: f64,
    sample_rate: f64,
) -> Vec<SecondOrderSection> {
    let fs2 = 2.0 * sample_rate;
    let wl = prewarp(low_hz, sample_rate);
    let wh = prewarp(high_hz, sample_rate);
    let bw = wh - wl;
    let w0_sq = wl * wh;

    // Zeros at DC and Nyquist in every section.
    let numerator = [1.0, 0.0, -1.0];
    let mut sections = Vec::with_capacity(order);

    for p in butterworth_poles(order) {
        // The lower half-plane twin is covered by conjugation.
        if p.im < -1e-12 {
            continue;
        }
        // Lowpass → bandpass: s² - p·bw·s + w0² = 0
        let half = p * (0.5 * bw);
        let disc = (half * half - w0_sq).sqrt();
        let s1 = half + disc;
        let s2 = half - disc;
        let z1 = bilinear(s1, fs2);
        let z2 = bilinear(s2, fs2);

        if p.im > 1e-12 {
            sections.push(SecondOrderSection::new(numerator, denominator(z1, z1.conj())));
            sections.push(SecondOrderSection::new(numerator, denominator(z2, z2.conj())));
        } else {
            sections.push(SecondOrderSection::new(numerator, denominator(z1, z2)));
        }
    }

    // Unity gain at the digital image of the analog band center.
    let omega0 = 2.0 * (w0_sq.sqrt() / fs2).atan();
    let gain = cascade_response(&sections, Complex64::from_polar(1.0, omega0)).norm();
    if let Some(first) = sections.first_mut()
        && gain > 0.0
    {
        for b in &mut first.b {
            *b /= gain;
        }
    }

    sections
}
