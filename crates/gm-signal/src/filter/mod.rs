//! IIR bandpass filtering in second-order sections.
//!
//! Filters are designed once per target frequency and held as immutable
//! coefficient cascades; filtering state lives only inside a call, so one
//! design can be shared across threads.

mod design;
mod sos;
mod zero_phase;

pub use design::{BandpassParams, FilterSpec, design_bandpass};
pub use sos::{SecondOrderSection, sosfilt};
pub use zero_phase::{sosfilt_zi, sosfiltfilt};
