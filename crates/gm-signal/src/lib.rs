//! Signal stages for ground-motion duration analysis.
//!
//! Provides:
//! - Arias Intensity (cumulative energy) integration
//! - 5%-95% significant duration extraction
//! - Butterworth bandpass design in second-order sections
//! - Causal and zero-phase SOS filtering

pub mod arias;
pub mod duration;
pub mod error;
pub mod filter;
pub mod integrate;

pub use arias::{AriasParams, EnergyCurve, arias_intensity};
pub use duration::{DurationThresholds, DurationWindow, interp, significant_duration};
pub use error::{SignalError, SignalResult};
pub use filter::{
    BandpassParams, FilterSpec, SecondOrderSection, design_bandpass, sosfilt, sosfilt_zi,
    sosfiltfilt,
};
pub use integrate::{CumulativeRule, IntegrationRule, LeftRectangle, Trapezoid};
