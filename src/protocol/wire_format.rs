//! Wire format encoding and decoding.
//!
//! Implements the 8-byte response frame:
//! ```text
//! ┌──────────┬──────────┐
//! │ Status   │ Body len │
//! │ 4 bytes  │ 4 bytes  │
//! │ uint32 LE│ uint32 LE│
//! └──────────┴──────────┘
//! ```
//!
//! All multi-byte integers are Little Endian. On the wire the frame travels
//! hex-encoded, so it always occupies exactly [`FRAME_HEX_LEN`] characters
//! at a known end of the stream; the receiver peels those off and treats
//! the remainder as the body.

use crate::error::{GuestwireError, Result};

/// Frame size in bytes (fixed, exactly 8).
pub const FRAME_SIZE: usize = 8;

/// Frame length after hex transcoding (two characters per byte).
pub const FRAME_HEX_LEN: usize = FRAME_SIZE * 2;

/// The fixed response frame: status code plus body length.
///
/// Derived deterministically from a response; the two fields are carried
/// independently and the frame never recomputes `body_length` from a body
/// after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Numeric status code.
    pub status: u32,
    /// Body length in bytes.
    pub body_length: u32,
}

impl Frame {
    /// Create a new frame.
    pub fn new(status: u32, body_length: u32) -> Self {
        Self {
            status,
            body_length,
        }
    }

    /// Create a frame for a concrete body, computing the length field.
    ///
    /// # Errors
    ///
    /// Returns [`GuestwireError::OutOfRange`] if the body length does not
    /// fit the 32-bit length field.
    pub fn for_body(status: u32, body: &[u8]) -> Result<Self> {
        let body_length = u32::try_from(body.len())
            .map_err(|_| GuestwireError::OutOfRange(body.len() as u64))?;
        Ok(Self {
            status,
            body_length,
        })
    }

    /// Encode the frame to bytes (Little Endian).
    ///
    /// # Example
    ///
    /// ```
    /// use guestwire::protocol::Frame;
    ///
    /// let frame = Frame::new(200, 12);
    /// assert_eq!(frame.encode(), [0xc8, 0, 0, 0, 0x0c, 0, 0, 0]);
    /// ```
    pub fn encode(&self) -> [u8; FRAME_SIZE] {
        let mut buf = [0u8; FRAME_SIZE];
        self.encode_into(&mut buf);
        buf
    }

    /// Encode the frame into an existing buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is smaller than [`FRAME_SIZE`] (8 bytes).
    pub fn encode_into(&self, buf: &mut [u8]) {
        debug_assert!(buf.len() >= FRAME_SIZE);
        buf[0..4].copy_from_slice(&self.status.to_le_bytes());
        buf[4..8].copy_from_slice(&self.body_length.to_le_bytes());
    }

    /// Decode a frame from bytes (Little Endian).
    ///
    /// Returns `None` if the buffer is too short.
    ///
    /// # Example
    ///
    /// ```
    /// use guestwire::protocol::Frame;
    ///
    /// let frame = Frame::decode(&[0xc8, 0, 0, 0, 0x0c, 0, 0, 0]).unwrap();
    /// assert_eq!(frame.status, 200);
    /// assert_eq!(frame.body_length, 12);
    /// ```
    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < FRAME_SIZE {
            return None;
        }
        Some(Self {
            status: u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
            body_length: u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_encode_decode_roundtrip() {
        let original = Frame::new(404, 1024);
        let encoded = original.encode();
        let decoded = Frame::decode(&encoded).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_frame_little_endian_byte_order() {
        let frame = Frame::new(0x01020304, 0x05060708);
        let bytes = frame.encode();

        // Status: 0x01020304 in LE
        assert_eq!(bytes[0], 0x04);
        assert_eq!(bytes[1], 0x03);
        assert_eq!(bytes[2], 0x02);
        assert_eq!(bytes[3], 0x01);

        // Body length: 0x05060708 in LE
        assert_eq!(bytes[4], 0x08);
        assert_eq!(bytes[5], 0x07);
        assert_eq!(bytes[6], 0x06);
        assert_eq!(bytes[7], 0x05);
    }

    #[test]
    fn test_frame_size_is_exactly_8() {
        assert_eq!(FRAME_SIZE, 8);
        assert_eq!(FRAME_HEX_LEN, 16);
        assert_eq!(Frame::new(1, 0).encode().len(), 8);
    }

    #[test]
    fn test_status_200_body_12_vector() {
        let frame = Frame::new(200, 12);
        assert_eq!(
            frame.encode(),
            [0xc8, 0x00, 0x00, 0x00, 0x0c, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_zero_length_frame_is_valid() {
        let frame = Frame::new(200, 0);
        let bytes = frame.encode();
        assert_eq!(&bytes[4..8], &[0, 0, 0, 0]);
        assert_eq!(Frame::decode(&bytes).unwrap().body_length, 0);
    }

    #[test]
    fn test_decode_too_short_buffer() {
        let buf = [0u8; 7]; // One byte short
        assert!(Frame::decode(&buf).is_none());
    }

    #[test]
    fn test_for_body_computes_length() {
        let frame = Frame::for_body(200, b"Hello world!").unwrap();
        assert_eq!(frame.body_length, 12);
    }

    #[test]
    fn test_for_body_empty() {
        let frame = Frame::for_body(204, b"").unwrap();
        assert_eq!(frame.body_length, 0);
    }

    #[test]
    fn test_max_values_roundtrip() {
        let frame = Frame::new(u32::MAX, u32::MAX);
        assert_eq!(Frame::decode(&frame.encode()).unwrap(), frame);
    }

    #[test]
    fn test_encode_into() {
        let frame = Frame::new(200, 12);
        let mut buf = [0u8; FRAME_SIZE];
        frame.encode_into(&mut buf);
        assert_eq!(Frame::decode(&buf).unwrap(), frame);
    }
}
