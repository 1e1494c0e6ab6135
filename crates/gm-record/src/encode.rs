//! `.grm` encoding, the inverse of [`crate::decode_components`].

use crate::error::{RecordError, RecordResult};
use crate::format::{ByteOrder, HEADER_LEN, NT_OFFSET, payload_len};

/// Serialize two components (cm/s²) into a `.grm` buffer.
///
/// Header bytes other than the sample count are zero-filled.
pub fn encode_components(
    x_cmps2: &[f32],
    y_cmps2: &[f32],
    byte_order: ByteOrder,
) -> RecordResult<Vec<u8>> {
    if x_cmps2.len() != y_cmps2.len() {
        return Err(RecordError::InvalidRecord {
            what: "components must have the same length",
        });
    }
    let nt = i32::try_from(x_cmps2.len()).map_err(|_| RecordError::InvalidSampleCount {
        nt: x_cmps2.len() as i64,
    })?;
    if nt == 0 {
        return Err(RecordError::InvalidSampleCount { nt: 0 });
    }
    let payload = payload_len(x_cmps2.len()).ok_or(RecordError::InvalidSampleCount {
        nt: i64::from(nt),
    })?;

    let mut out = Vec::with_capacity(HEADER_LEN + payload);
    out.resize(HEADER_LEN, 0);
    out[NT_OFFSET..NT_OFFSET + 4].copy_from_slice(&byte_order.write_i32(nt));
    for &v in x_cmps2.iter().chain(y_cmps2) {
        out.extend_from_slice(&byte_order.write_f32(v));
    }
    Ok(out)
}
