//! Analysis configuration.
//!
//! Every numeric constant of the pipeline is injected from here; the
//! defaults reproduce the archive conventions.

use crate::error::{AnalysisError, AnalysisResult};
use crate::result::period_label;
use gm_record::DecodeOptions;
use gm_signal::{AriasParams, BandpassParams, DurationThresholds};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Oscillator periods (s) analyzed by default.
pub const DEFAULT_PERIODS_S: [f64; 6] = [0.1, 0.2, 0.5, 1.0, 2.0, 3.0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub decode: DecodeOptions,
    pub arias: AriasParams,
    pub thresholds: DurationThresholds,
    pub bandpass: BandpassParams,
    /// Oscillator periods (s), in output order
    pub periods_s: Vec<f64>,
    /// Evaluate periods on the rayon pool
    pub parallel_periods: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            decode: DecodeOptions::default(),
            arias: AriasParams::default(),
            thresholds: DurationThresholds::default(),
            bandpass: BandpassParams::default(),
            periods_s: DEFAULT_PERIODS_S.to_vec(),
            parallel_periods: true,
        }
    }
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

impl AnalysisConfig {
    pub fn validate(&self) -> AnalysisResult<()> {
        let invalid = |msg: &str| Err(AnalysisError::Config(msg.to_string()));

        if !positive(self.decode.sampling_interval_s) {
            return invalid("decode.sampling_interval_s must be positive");
        }
        if !positive(self.decode.cmps2_per_g) {
            return invalid("decode.cmps2_per_g must be positive");
        }
        if !positive(self.arias.gravity_mps2) {
            return invalid("arias.gravity_mps2 must be positive");
        }
        if !self.thresholds.is_valid() {
            return invalid("thresholds must satisfy 0 <= lower < upper <= 1");
        }
        if self.bandpass.order == 0 {
            return invalid("bandpass.order must be at least 1");
        }
        if !(0.0..1.0).contains(&self.bandpass.bandwidth_factor) {
            return invalid("bandpass.bandwidth_factor must be in [0, 1)");
        }
        if !positive(self.bandpass.min_low_cutoff_hz) {
            return invalid("bandpass.min_low_cutoff_hz must be positive");
        }
        let frac = self.bandpass.max_nyquist_fraction;
        if !(frac > 0.0 && frac < 1.0) {
            return invalid("bandpass.max_nyquist_fraction must be in (0, 1)");
        }

        let mut labels = HashSet::new();
        for &p in &self.periods_s {
            if !positive(p) {
                return Err(AnalysisError::InvalidPeriod { period_s: p });
            }
            if !labels.insert(period_label(p)) {
                return Err(AnalysisError::Config(format!(
                    "period {p} s duplicates another period's column label"
                )));
            }
        }
        Ok(())
    }

    pub fn from_yaml_str(content: &str) -> AnalysisResult<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> AnalysisResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_yaml(path: &Path) -> AnalysisResult<Self> {
        Self::from_yaml_str(&read(path)?)
    }

    pub fn load_json(path: &Path) -> AnalysisResult<Self> {
        Self::from_json_str(&read(path)?)
    }

    pub fn save_yaml(&self, path: &Path) -> AnalysisResult<()> {
        self.validate()?;
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).map_err(|source| AnalysisError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn read(path: &Path) -> AnalysisResult<String> {
    std::fs::read_to_string(path).map_err(|source| AnalysisError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })
}
