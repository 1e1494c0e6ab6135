//! Binary layout of the `.grm` container.

use gm_core::constants::CMPS2_PER_G;
use serde::{Deserialize, Serialize};

/// Size of the fixed header region in bytes.
pub const HEADER_LEN: usize = 56;

/// Byte offset of the `i32` sample count within the header.
pub const NT_OFFSET: usize = 40;

/// Number of acceleration components stored after the header.
pub const NUM_COMPONENTS: usize = 2;

/// Size of one stored sample (`f32`).
pub const SIZEOF_SAMPLE: usize = 4;

/// Sampling interval assumed for archived records (100 Hz).
pub const DEFAULT_SAMPLING_INTERVAL_S: f64 = 0.01;

/// Payload size in bytes for `nt` samples per component.
pub fn payload_len(nt: usize) -> Option<usize> {
    nt.checked_mul(NUM_COMPONENTS * SIZEOF_SAMPLE)
}

/// Byte order of the header integer and payload floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    /// Little-endian (x86 producers; the archive default)
    #[default]
    Little,
    Big,
    /// Whatever the host uses
    Native,
}

impl ByteOrder {
    pub fn read_i32(self, bytes: [u8; 4]) -> i32 {
        match self {
            ByteOrder::Little => i32::from_le_bytes(bytes),
            ByteOrder::Big => i32::from_be_bytes(bytes),
            ByteOrder::Native => i32::from_ne_bytes(bytes),
        }
    }

    pub fn read_f32(self, bytes: [u8; 4]) -> f32 {
        match self {
            ByteOrder::Little => f32::from_le_bytes(bytes),
            ByteOrder::Big => f32::from_be_bytes(bytes),
            ByteOrder::Native => f32::from_ne_bytes(bytes),
        }
    }

    pub fn write_i32(self, v: i32) -> [u8; 4] {
        match self {
            ByteOrder::Little => v.to_le_bytes(),
            ByteOrder::Big => v.to_be_bytes(),
            ByteOrder::Native => v.to_ne_bytes(),
        }
    }

    pub fn write_f32(self, v: f32) -> [u8; 4] {
        match self {
            ByteOrder::Little => v.to_le_bytes(),
            ByteOrder::Big => v.to_be_bytes(),
            ByteOrder::Native => v.to_ne_bytes(),
        }
    }
}

/// Horizontal component stored in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    /// First block, the reference channel used for analysis
    #[default]
    X,
    /// Second block
    Y,
}

/// Options controlling how a record is decoded.
///
/// The defaults reproduce the archive convention: little-endian, 100 Hz,
/// cm/s² converted to g with 981, component X retained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub byte_order: ByteOrder,
    pub sampling_interval_s: f64,
    pub cmps2_per_g: f64,
    pub component: Component,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::default(),
            sampling_interval_s: DEFAULT_SAMPLING_INTERVAL_S,
            cmps2_per_g: CMPS2_PER_G,
            component: Component::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_order_round_trip() {
        for order in [ByteOrder::Little, ByteOrder::Big, ByteOrder::Native] {
            assert_eq!(order.read_i32(order.write_i32(-12_345)), -12_345);
            assert_eq!(order.read_f32(order.write_f32(3.25)), 3.25);
        }
    }

    #[test]
    fn little_and_big_differ() {
        let le = ByteOrder::Little.write_i32(1);
        let be = ByteOrder::Big.write_i32(1);
        assert_eq!(le, [1, 0, 0, 0]);
        assert_eq!(be, [0, 0, 0, 1]);
    }

    #[test]
    fn payload_len_counts_both_components() {
        assert_eq!(payload_len(1000), Some(8000));
        assert_eq!(payload_len(usize::MAX), None);
    }
}
