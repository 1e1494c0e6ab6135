//! `.grm` decoding.

use crate::error::{RecordError, RecordResult};
use crate::format::{
    ByteOrder, Component, DecodeOptions, HEADER_LEN, NT_OFFSET, SIZEOF_SAMPLE, payload_len,
};
use crate::record::GroundMotionRecord;
use std::path::Path;

/// Both stored components, still in archive units (cm/s²).
#[derive(Debug, Clone, PartialEq)]
pub struct RawComponents {
    pub x_cmps2: Vec<f32>,
    pub y_cmps2: Vec<f32>,
}

impl RawComponents {
    pub fn sample_count(&self) -> usize {
        self.x_cmps2.len()
    }

    pub fn component(&self, which: Component) -> &[f32] {
        match which {
            Component::X => &self.x_cmps2,
            Component::Y => &self.y_cmps2,
        }
    }
}

/// Read the whole file into memory. This is the only I/O a record needs.
pub fn read_grm_file(path: &Path) -> RecordResult<Vec<u8>> {
    std::fs::read(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode a record with the archive defaults.
pub fn decode(bytes: &[u8]) -> RecordResult<GroundMotionRecord> {
    decode_with(bytes, &DecodeOptions::default())
}

/// Decode a record, keeping only `opts.component` converted to g.
pub fn decode_with(bytes: &[u8], opts: &DecodeOptions) -> RecordResult<GroundMotionRecord> {
    if !(opts.cmps2_per_g.is_finite() && opts.cmps2_per_g > 0.0) {
        return Err(RecordError::InvalidRecord {
            what: "cm/s² per g must be positive and finite",
        });
    }
    let raw = decode_components(bytes, opts.byte_order)?;
    let accel_g = raw
        .component(opts.component)
        .iter()
        .map(|&v| f64::from(v) / opts.cmps2_per_g)
        .collect();

    tracing::trace!(
        nt = raw.sample_count(),
        component = ?opts.component,
        "decoded grm record"
    );

    GroundMotionRecord::uniform(opts.sampling_interval_s, accel_g)
}

/// Decode both payload components without unit conversion.
pub fn decode_components(bytes: &[u8], byte_order: ByteOrder) -> RecordResult<RawComponents> {
    if bytes.len() < HEADER_LEN {
        return Err(RecordError::MalformedHeader {
            expected: HEADER_LEN,
            actual: bytes.len(),
        });
    }

    let nt = byte_order.read_i32([
        bytes[NT_OFFSET],
        bytes[NT_OFFSET + 1],
        bytes[NT_OFFSET + 2],
        bytes[NT_OFFSET + 3],
    ]);
    if nt <= 0 {
        return Err(RecordError::InvalidSampleCount { nt: i64::from(nt) });
    }
    let nt = nt as usize;

    let expected = payload_len(nt).ok_or(RecordError::InvalidSampleCount { nt: nt as i64 })?;
    let payload = &bytes[HEADER_LEN..];
    if payload.len() < expected {
        return Err(RecordError::TruncatedPayload {
            expected,
            actual: payload.len(),
        });
    }

    let block_len = nt * SIZEOF_SAMPLE;
    let read_block = |block: &[u8]| -> Vec<f32> {
        block
            .chunks_exact(SIZEOF_SAMPLE)
            .map(|c| byte_order.read_f32([c[0], c[1], c[2], c[3]]))
            .collect()
    };

    Ok(RawComponents {
        x_cmps2: read_block(&payload[..block_len]),
        y_cmps2: read_block(&payload[block_len..2 * block_len]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_components;

    #[test]
    fn short_header_is_malformed() {
        let err = decode(&[0u8; 55]).unwrap_err();
        assert!(matches!(
            err,
            RecordError::MalformedHeader {
                expected: 56,
                actual: 55
            }
        ));
    }

    #[test]
    fn negative_count_rejected() {
        let mut bytes = vec![0u8; HEADER_LEN];
        bytes[NT_OFFSET..NT_OFFSET + 4].copy_from_slice(&(-3_i32).to_le_bytes());
        assert!(matches!(
            decode(&bytes),
            Err(RecordError::InvalidSampleCount { nt: -3 })
        ));
    }

    #[test]
    fn zero_count_rejected() {
        let bytes = vec![0u8; HEADER_LEN];
        assert!(matches!(
            decode(&bytes),
            Err(RecordError::InvalidSampleCount { nt: 0 })
        ));
    }

    #[test]
    fn truncated_payload_reports_sizes() {
        let mut bytes = encode_components(&[1.0; 10], &[2.0; 10], ByteOrder::Little).unwrap();
        bytes.truncate(HEADER_LEN + 79);
        assert!(matches!(
            decode(&bytes),
            Err(RecordError::TruncatedPayload {
                expected: 80,
                actual: 79
            })
        ));
    }

    #[test]
    fn trailing_bytes_ignored() {
        let mut bytes = encode_components(&[981.0, -981.0], &[0.0, 0.0], ByteOrder::Little)
            .unwrap();
        bytes.extend_from_slice(&[0xAB; 7]);
        let rec = decode(&bytes).unwrap();
        assert_eq!(rec.acceleration_g(), &[1.0, -1.0]);
    }

    #[test]
    fn component_y_selectable() {
        let bytes = encode_components(&[981.0], &[490.5], ByteOrder::Little).unwrap();
        let opts = DecodeOptions {
            component: Component::Y,
            ..DecodeOptions::default()
        };
        let rec = decode_with(&bytes, &opts).unwrap();
        assert_eq!(rec.acceleration_g(), &[0.5]);
    }

    #[test]
    fn big_endian_archive() {
        let bytes = encode_components(&[98.1, 196.2], &[0.0, 0.0], ByteOrder::Big).unwrap();
        let opts = DecodeOptions {
            byte_order: ByteOrder::Big,
            ..DecodeOptions::default()
        };
        let raw = decode_components(&bytes, opts.byte_order).unwrap();
        assert_eq!(raw.x_cmps2, vec![98.1_f32, 196.2_f32]);
        assert!(decode_with(&bytes, &opts).is_ok());
    }
}
