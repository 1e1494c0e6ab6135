use thiserror::Error;

pub type GmResult<T> = Result<T, GmError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GmError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Series too short for {what} (len={len}, need at least {min})")]
    TooShort {
        what: &'static str,
        len: usize,
        min: usize,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
