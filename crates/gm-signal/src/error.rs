//! Error types for signal stages.

use thiserror::Error;

/// Errors raised by integration, duration and filtering stages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    #[error("Invalid filter range: low={low_hz} Hz, high={high_hz} Hz (nyquist={nyquist_hz} Hz)")]
    InvalidFilterRange {
        low_hz: f64,
        high_hz: f64,
        nyquist_hz: f64,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Length mismatch: {what} ({left} vs {right})")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    #[error("Empty input: {what}")]
    EmptyInput { what: &'static str },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

pub type SignalResult<T> = Result<T, SignalError>;

impl From<gm_core::GmError> for SignalError {
    fn from(e: gm_core::GmError) -> Self {
        match e {
            gm_core::GmError::NonFinite { what, value } => SignalError::NonFinite { what, value },
            gm_core::GmError::InvalidArg { what } | gm_core::GmError::Invariant { what } => {
                SignalError::InvalidArg { what }
            }
            gm_core::GmError::TooShort { what, .. } => SignalError::EmptyInput { what },
        }
    }
}
