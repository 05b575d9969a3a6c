//! Logging shim - guest log lines over the response channel.
//!
//! The host exposes one text channel, so diagnostics share the wire with
//! the eventual response. Each logged value is stringified, hex-encoded
//! byte by byte, and terminated with the hex encoding of a newline byte
//! (`"0a"`), all emitted as a single write. The receiver can therefore
//! split log lines on the `"0a"` terminator without ever mistaking them
//! for the response frame.
//!
//! The shim is an explicit instance, not a rebound global: construct it at
//! execution start and hand it to whatever code logs. When logging is
//! done, [`LogShim::into_inner`] releases the channel for the response
//! transport.

use std::fmt::Display;

use crate::codec::HexCodec;
use crate::transport::OutputChannel;

/// Hex encoding of the line terminator byte (`0x0a`).
pub const LINE_TERMINATOR_HEX: &str = "0a";

/// Redirects log lines through the host channel, hex-encoded.
///
/// # Example
///
/// ```
/// use guestwire::transport::CaptureChannel;
/// use guestwire::LogShim;
///
/// let mut channel = CaptureChannel::new();
/// let mut shim = LogShim::new(&mut channel);
/// shim.log("hi");
/// drop(shim);
///
/// assert_eq!(channel.writes(), ["68690a"]);
/// ```
pub struct LogShim<C> {
    channel: C,
}

impl<C: OutputChannel> LogShim<C> {
    /// Create a shim over the execution's channel.
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Emit one log line.
    ///
    /// The value is stringified, encoded as its UTF-8 bytes (so every hex
    /// pair is exactly one byte wide, whatever the value contains), and
    /// written together with the terminator as one segment.
    pub fn log(&mut self, value: impl Display) {
        let text = value.to_string();
        let mut line = String::with_capacity(text.len() * 2 + LINE_TERMINATOR_HEX.len());
        HexCodec::encode_into(text.as_bytes(), &mut line);
        line.push_str(LINE_TERMINATOR_HEX);
        // One write per line so the terminator pair stays adjacent to its
        // line in the channel's segment order.
        self.channel.write(&line);
    }

    /// Release the channel, ending this shim's lifetime.
    pub fn into_inner(self) -> C {
        self.channel
    }
}
