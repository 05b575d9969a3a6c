//! Response transmission over the text channel.
//!
//! One response per execution, two ordered writes:
//!
//! ```text
//! HeaderFirst:  write(frame hex, 16 chars) ──► write(body text)
//! HeaderLast:   write(body text) ──► write(frame hex, 16 chars)
//! ```
//!
//! The frame is always hex-encoded (it is inherently binary); the body is
//! hex-encoded or passed as raw text per [`BodyEncoding`]. Because the
//! frame occupies exactly [`FRAME_HEX_LEN`] characters at a known end of
//! the stream, the receiver can always peel it off and treat the remainder
//! as the body, whichever order was configured.

use crate::codec::HexCodec;
use crate::error::{GuestwireError, Result};
use crate::protocol::{Frame, Response, FRAME_HEX_LEN};

use super::OutputChannel;

/// Where the frame travels relative to the body.
///
/// Both orders are valid wire layouts; the host and guest must simply
/// agree. There is deliberately no `Default` impl - the order is part of
/// the contract and must be configured explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOrder {
    /// Frame hex first, body second.
    HeaderFirst,
    /// Body first, frame hex last.
    HeaderLast,
}

/// How the body itself travels over the text channel.
///
/// The frame is always hex-encoded regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    /// Each body byte is written as the char `U+0000..=U+00FF`.
    ///
    /// Width-preserving and infallible: one char per byte, so the frame's
    /// length field matches what a Latin-1-faithful host observes.
    RawText,
    /// Body bytes are hex-encoded like the frame.
    HexEncoded,
}

/// Orchestrates a single response emission.
///
/// # Example
///
/// ```
/// use guestwire::transport::{BodyEncoding, CaptureChannel, FrameOrder, ResponseTransport};
/// use guestwire::Response;
///
/// let transport = ResponseTransport::new(FrameOrder::HeaderLast, BodyEncoding::HexEncoded);
/// let mut channel = CaptureChannel::new();
/// transport
///     .send(&mut channel, &Response::new(200, &b"Hello world!"[..]))
///     .unwrap();
///
/// assert_eq!(channel.writes().last().unwrap(), "c80000000c000000");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ResponseTransport {
    order: FrameOrder,
    body_encoding: BodyEncoding,
}

impl ResponseTransport {
    /// Create a transport with an explicit frame order and body encoding.
    pub fn new(order: FrameOrder, body_encoding: BodyEncoding) -> Self {
        Self {
            order,
            body_encoding,
        }
    }

    /// The configured frame order.
    #[inline]
    pub fn order(&self) -> FrameOrder {
        self.order
    }

    /// The configured body encoding.
    #[inline]
    pub fn body_encoding(&self) -> BodyEncoding {
        self.body_encoding
    }

    /// Transmit a response: frame and body, in the configured order.
    ///
    /// The empty body still gets its own (empty) write, so the channel
    /// always sees exactly two segments per response.
    ///
    /// # Errors
    ///
    /// Returns [`GuestwireError::OutOfRange`] if the body length does not
    /// fit the frame's 32-bit length field. Nothing is written in that
    /// case - there is no partial transmission.
    pub fn send<C: OutputChannel>(&self, channel: &mut C, response: &Response) -> Result<()> {
        // Frame construction happens before any write: all-or-nothing.
        let frame = Frame::for_body(response.status, &response.body)?;
        let frame_text = HexCodec::encode(&frame.encode());

        let body_text = match self.body_encoding {
            BodyEncoding::RawText => latin1_text(&response.body),
            BodyEncoding::HexEncoded => HexCodec::encode(&response.body),
        };

        tracing::trace!(
            status = response.status,
            body_len = response.body.len(),
            order = ?self.order,
            encoding = ?self.body_encoding,
            "sending response"
        );

        match self.order {
            FrameOrder::HeaderFirst => {
                channel.write(&frame_text);
                channel.write(&body_text);
            }
            FrameOrder::HeaderLast => {
                channel.write(&body_text);
                channel.write(&frame_text);
            }
        }

        Ok(())
    }
}

/// Recover `(status, body)` from a transmitted stream.
///
/// Verification helper for tests and host-side tooling: peels the 16 hex
/// characters off the configured end, decodes the frame, decodes the body
/// per `body_encoding`, and cross-checks the frame's length field against
/// the body actually present.
///
/// # Errors
///
/// Returns [`GuestwireError::Protocol`] if the stream is shorter than a
/// frame, contains a non-byte character in raw-text mode, or carries a
/// length field that disagrees with the body; [`GuestwireError::MalformedHex`]
/// if a hex segment does not decode.
pub fn recover_response(
    stream: &str,
    order: FrameOrder,
    body_encoding: BodyEncoding,
) -> Result<(u32, Vec<u8>)> {
    let chars: Vec<char> = stream.chars().collect();
    if chars.len() < FRAME_HEX_LEN {
        return Err(GuestwireError::Protocol(format!(
            "stream of {} chars is shorter than a frame",
            chars.len()
        )));
    }

    let (frame_chars, body_chars) = match order {
        FrameOrder::HeaderFirst => {
            let (frame, body) = chars.split_at(FRAME_HEX_LEN);
            (frame, body)
        }
        FrameOrder::HeaderLast => {
            let (body, frame) = chars.split_at(chars.len() - FRAME_HEX_LEN);
            (frame, body)
        }
    };

    let frame_hex: String = frame_chars.iter().collect();
    let frame_bytes = HexCodec::decode(&frame_hex)?;
    let frame = Frame::decode(&frame_bytes)
        .ok_or_else(|| GuestwireError::Protocol("truncated frame".to_string()))?;

    let body = match body_encoding {
        BodyEncoding::RawText => {
            let mut bytes = Vec::with_capacity(body_chars.len());
            for &c in body_chars {
                let code = c as u32;
                if code > 0xff {
                    return Err(GuestwireError::Protocol(format!(
                        "non-byte character in raw-text body: {:?}",
                        c
                    )));
                }
                bytes.push(code as u8);
            }
            bytes
        }
        BodyEncoding::HexEncoded => {
            let body_hex: String = body_chars.iter().collect();
            HexCodec::decode(&body_hex)?
        }
    };

    if body.len() != frame.body_length as usize {
        return Err(GuestwireError::Protocol(format!(
            "length field {} does not match body of {} bytes",
            frame.body_length,
            body.len()
        )));
    }

    Ok((frame.status, body))
}

/// Map each byte to the char `U+0000..=U+00FF` (one char per byte).
fn latin1_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
