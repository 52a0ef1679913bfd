//! Filename codec - byte strings to the device's UTF-16BE form.
//!
//! Each input byte becomes one big-endian code unit `[0x00, c]`, followed by
//! a `[0x00, 0x00]` terminator. Bytes are widened literally; no UTF-8
//! decoding is attempted, so high-bit bytes map to U+0080..U+00FF.
//!
//! # Example
//!
//! ```
//! use exword::codec::FilenameCodec;
//!
//! let wire = FilenameCodec::encode(b"AB");
//! assert_eq!(&wire[..], &[0, b'A', 0, b'B', 0, 0]);
//! assert_eq!(FilenameCodec::encoded_len(2), 6);
//! ```

use bytes::{BufMut, Bytes, BytesMut};

/// Codec for the device's unicode filename representation.
pub struct FilenameCodec;

impl FilenameCodec {
    /// Wire length for an input of `len` bytes.
    #[inline]
    pub fn encoded_len(len: usize) -> usize {
        len * 2 + 2
    }

    /// Encode `name` into UTF-16BE with a double-NUL terminator.
    pub fn encode(name: &[u8]) -> Bytes {
        let mut buf = BytesMut::with_capacity(Self::encoded_len(name.len()));
        for &c in name {
            buf.put_u8(0);
            buf.put_u8(c);
        }
        buf.put_u16(0);
        buf.freeze()
    }

    /// Decode a wire name back into bytes.
    ///
    /// Stops at the first NUL code unit. Code units above 0xFF are not
    /// representable and yield `None`, as does an odd-length input.
    pub fn decode(wire: &[u8]) -> Option<Vec<u8>> {
        if wire.len() % 2 != 0 {
            return None;
        }
        let mut out = Vec::with_capacity(wire.len() / 2);
        for unit in wire.chunks_exact(2) {
            match (unit[0], unit[1]) {
                (0, 0) => break,
                (0, c) => out.push(c),
                _ => return None,
            }
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let name = b"TEST.TXT";
        let wire = FilenameCodec::encode(name);
        assert_eq!(wire.len(), 2 * name.len() + 2);
        for (i, &c) in name.iter().enumerate() {
            assert_eq!(wire[2 * i], 0);
            assert_eq!(wire[2 * i + 1], c);
        }
        assert_eq!(&wire[wire.len() - 2..], &[0, 0]);
    }

    #[test]
    fn test_encode_dict_path_length() {
        assert_eq!(FilenameCodec::encode(b"DICT").len(), 10);
    }

    #[test]
    fn test_encode_empty() {
        let wire = FilenameCodec::encode(b"");
        assert_eq!(&wire[..], &[0, 0]);
        assert_eq!(FilenameCodec::encoded_len(0), 2);
    }

    #[test]
    fn test_high_bit_bytes_widen_literally() {
        let wire = FilenameCodec::encode(&[0xE9]);
        assert_eq!(&wire[..], &[0x00, 0xE9, 0x00, 0x00]);
    }

    #[test]
    fn test_decode_round_trip() {
        let wire = FilenameCodec::encode(b"_Model");
        assert_eq!(FilenameCodec::decode(&wire), Some(b"_Model".to_vec()));
    }

    #[test]
    fn test_decode_rejects_wide_units() {
        assert_eq!(FilenameCodec::decode(&[0x30, 0x42, 0, 0]), None);
        assert_eq!(FilenameCodec::decode(&[0, b'A', 0]), None);
    }
}
