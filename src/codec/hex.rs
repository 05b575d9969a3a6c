//! Hex codec - lowercase two-digit-per-byte transcoding.
//!
//! Each byte maps to exactly two lowercase hex characters, most significant
//! nibble first, zero-padded (`0x0a` → `"0a"`, `0x00` → `"00"`). Encoding
//! never fails; decoding is the exact inverse and accepts either case.
//!
//! # Example
//!
//! ```
//! use guestwire::codec::HexCodec;
//!
//! let encoded = HexCodec::encode(b"Hi");
//! assert_eq!(encoded, "4869");
//!
//! let decoded = HexCodec::decode("4869").unwrap();
//! assert_eq!(decoded, b"Hi");
//! ```

use crate::error::{GuestwireError, Result};

/// Lowercase hex digits, indexed by nibble value.
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Codec mapping bytes to lowercase hex text and back.
///
/// Implemented as a marker struct with static methods, so call sites read
/// as `HexCodec::encode(..)` without carrying an instance around.
pub struct HexCodec;

impl HexCodec {
    /// Encode bytes to lowercase hex text.
    ///
    /// Output length is always `2 * bytes.len()`.
    #[inline]
    pub fn encode(bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len() * 2);
        Self::encode_into(bytes, &mut out);
        out
    }

    /// Encode bytes, appending to an existing string.
    ///
    /// Used by callers that batch several encoded segments into a single
    /// channel write (e.g. a log line plus its terminator).
    pub fn encode_into(bytes: &[u8], out: &mut String) {
        out.reserve(bytes.len() * 2);
        for &b in bytes {
            out.push(HEX_DIGITS[(b >> 4) as usize] as char);
            out.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
        }
    }

    /// Decode hex text back to bytes.
    ///
    /// Accepts upper- or lowercase digits.
    ///
    /// # Errors
    ///
    /// Returns [`GuestwireError::MalformedHex`] if the input length is odd
    /// or any character is outside `[0-9a-fA-F]`.
    pub fn decode(text: &str) -> Result<Vec<u8>> {
        let raw = text.as_bytes();
        if raw.len() % 2 != 0 {
            return Err(GuestwireError::MalformedHex(format!(
                "odd input length: {}",
                raw.len()
            )));
        }

        let mut out = Vec::with_capacity(raw.len() / 2);
        for pair in raw.chunks_exact(2) {
            let hi = decode_nibble(pair[0])?;
            let lo = decode_nibble(pair[1])?;
            out.push((hi << 4) | lo);
        }
        Ok(out)
    }
}

#[inline]
fn decode_nibble(c: u8) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(GuestwireError::MalformedHex(format!(
            "invalid character: {:?}",
            c as char
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero_pads_single_digit_bytes() {
        assert_eq!(HexCodec::encode(&[0x0a]), "0a");
        assert_eq!(HexCodec::encode(&[0x00]), "00");
        assert_eq!(HexCodec::encode(&[0x0f]), "0f");
    }

    #[test]
    fn test_encode_is_lowercase_and_even_length() {
        let all_bytes: Vec<u8> = (0..=255).collect();
        let text = HexCodec::encode(&all_bytes);

        assert_eq!(text.len(), 512);
        assert!(text
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_decode_round_trip_all_byte_values() {
        let all_bytes: Vec<u8> = (0..=255).collect();
        let text = HexCodec::encode(&all_bytes);
        assert_eq!(HexCodec::decode(&text).unwrap(), all_bytes);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(HexCodec::encode(b""), "");
        assert!(HexCodec::decode("").unwrap().is_empty());
    }

    #[test]
    fn test_encode_into_appends() {
        let mut out = String::from("0a");
        HexCodec::encode_into(&[0xc8], &mut out);
        assert_eq!(out, "0ac8");
    }

    #[test]
    fn test_decode_accepts_uppercase() {
        assert_eq!(HexCodec::decode("C800FF").unwrap(), vec![0xc8, 0x00, 0xff]);
    }

    #[test]
    fn test_decode_odd_length_rejected() {
        let err = HexCodec::decode("abc").unwrap_err();
        assert!(err.to_string().contains("odd input length"));
    }

    #[test]
    fn test_decode_invalid_character_rejected() {
        let err = HexCodec::decode("0g").unwrap_err();
        assert!(err.to_string().contains("invalid character"));

        assert!(HexCodec::decode("zz").is_err());
        assert!(HexCodec::decode("0 ").is_err());
    }

    #[test]
    fn test_known_vector_hello_world() {
        assert_eq!(
            HexCodec::encode(b"Hello world!"),
            "48656c6c6f20776f726c6421"
        );
    }
}
