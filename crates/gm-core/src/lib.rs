//! gm-core: shared foundation for the ground-motion duration workspace.
//!
//! Contains:
//! - units (uom time/frequency types, archive constants)
//! - numeric (Real + float/series helpers)
//! - timing (lightweight stage timers reported through tracing)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod timing;
pub mod units;

pub use error::{GmError, GmResult};
pub use numeric::*;
pub use units::*;
