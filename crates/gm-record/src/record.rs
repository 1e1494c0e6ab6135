//! Decoded ground-motion record.

use crate::error::{RecordError, RecordResult};
use gm_core::{Real, is_non_decreasing, mean_step, peak_abs};

/// One horizontal acceleration channel with its time base.
///
/// Immutable once built; `time` and `acceleration_g` always have the same
/// non-zero length.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundMotionRecord {
    sampling_interval_s: Real,
    time: Vec<Real>,
    acceleration_g: Vec<Real>,
}

impl GroundMotionRecord {
    /// Build a record on a uniform time base `time[i] = i * dt`.
    pub fn uniform(sampling_interval_s: Real, acceleration_g: Vec<Real>) -> RecordResult<Self> {
        if !(sampling_interval_s.is_finite() && sampling_interval_s > 0.0) {
            return Err(RecordError::InvalidRecord {
                what: "sampling interval must be positive and finite",
            });
        }
        if acceleration_g.is_empty() {
            return Err(RecordError::InvalidSampleCount { nt: 0 });
        }
        let time = (0..acceleration_g.len())
            .map(|i| i as Real * sampling_interval_s)
            .collect();
        Ok(Self {
            sampling_interval_s,
            time,
            acceleration_g,
        })
    }

    /// Build a record from an explicit time base, which may be non-uniform.
    ///
    /// The stored sampling interval is the mean step of `time`.
    pub fn from_parts(time: Vec<Real>, acceleration_g: Vec<Real>) -> RecordResult<Self> {
        if time.len() != acceleration_g.len() {
            return Err(RecordError::InvalidRecord {
                what: "time and acceleration lengths differ",
            });
        }
        if time.is_empty() {
            return Err(RecordError::InvalidSampleCount { nt: 0 });
        }
        if !is_non_decreasing(&time) {
            return Err(RecordError::InvalidRecord {
                what: "time base must be non-decreasing",
            });
        }
        let sampling_interval_s = if time.len() > 1 {
            mean_step(&time)?
        } else {
            0.0
        };
        Ok(Self {
            sampling_interval_s,
            time,
            acceleration_g,
        })
    }

    pub fn sample_count(&self) -> usize {
        self.acceleration_g.len()
    }

    pub fn sampling_interval_s(&self) -> Real {
        self.sampling_interval_s
    }

    pub fn time(&self) -> &[Real] {
        &self.time
    }

    pub fn acceleration_g(&self) -> &[Real] {
        &self.acceleration_g
    }

    /// Peak |acceleration| in g.
    pub fn peak_abs_acceleration_g(&self) -> Real {
        peak_abs(&self.acceleration_g)
    }

    /// Span of the time base, `time[n-1] - time[0]`.
    pub fn duration_s(&self) -> Real {
        self.time[self.time.len() - 1] - self.time[0]
    }
}
