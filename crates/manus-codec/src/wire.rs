//! Byte form for flat vectors
//!
//! Flat sequences exist for downstream numeric consumers; this is their
//! wire shape: u32 LE scalar count followed by each scalar as f32 LE.

use bytes::{Buf, BufMut};
use manus_core::{ManusError, ManusResult};

/// Header size in bytes
pub const FLAT_WIRE_HEADER: usize = 4;

/// Encode a flat vector to bytes
pub fn encode_flat(data: &[f32]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(FLAT_WIRE_HEADER + data.len() * 4);
    buf.put_u32_le(data.len() as u32);
    for value in data {
        buf.put_f32_le(*value);
    }
    buf
}

/// Decode a flat vector from bytes.
///
/// The buffer must hold exactly the announced count; truncation and
/// trailing bytes both fail.
pub fn decode_flat(mut buf: &[u8]) -> ManusResult<Vec<f32>> {
    if buf.len() < FLAT_WIRE_HEADER {
        return Err(ManusError::BufferTooShort {
            expected: FLAT_WIRE_HEADER,
            actual: buf.len(),
        });
    }

    let count = buf.get_u32_le() as usize;
    if buf.remaining() != count * 4 {
        return Err(ManusError::BufferTooShort {
            expected: count * 4,
            actual: buf.remaining(),
        });
    }

    let mut data = Vec::with_capacity(count);
    for _ in 0..count {
        data.push(buf.get_f32_le());
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let data = vec![0.0, -1.5, 3.25, f32::MAX];
        let bytes = encode_flat(&data);
        assert_eq!(bytes.len(), FLAT_WIRE_HEADER + 16);

        let decoded = decode_flat(&bytes).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_decode_truncated_fails() {
        let bytes = encode_flat(&[1.0, 2.0]);
        let err = decode_flat(&bytes[..bytes.len() - 1]).unwrap_err();
        assert_eq!(
            err,
            ManusError::BufferTooShort {
                expected: 8,
                actual: 7
            }
        );
    }

    #[test]
    fn test_decode_trailing_bytes_fail() {
        let mut bytes = encode_flat(&[1.0]);
        bytes.push(0xFF);
        assert!(decode_flat(&bytes).is_err());
    }

    #[test]
    fn test_decode_empty_buffer_fails() {
        let err = decode_flat(&[]).unwrap_err();
        assert_eq!(
            err,
            ManusError::BufferTooShort {
                expected: FLAT_WIRE_HEADER,
                actual: 0
            }
        );
    }
}
