//! gm-record: decoding of binary `.grm` ground-motion records.
//!
//! A `.grm` file is a fixed 56-byte header followed by two block-major
//! `f32` components (cm/s²). The sample count lives in the header; the
//! time base is not stored and is synthesized at a fixed interval.

pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod record;

pub use decode::{RawComponents, decode, decode_components, decode_with, read_grm_file};
pub use encode::encode_components;
pub use error::{RecordError, RecordResult};
pub use format::{ByteOrder, Component, DecodeOptions};
pub use record::GroundMotionRecord;
