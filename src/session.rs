//! Session - one guest execution over one channel.
//!
//! A [`Session`] owns the channel and configuration for a whole run: any
//! number of log lines, then exactly one response. `finish` consumes the
//! session, so a second response is unrepresentable.

use std::fmt::Display;

use crate::error::Result;
use crate::protocol::Response;
use crate::shim::LogShim;
use crate::transport::{BodyEncoding, FrameOrder, OutputChannel, ResponseTransport};

/// One guest execution: log lines, then a single response.
///
/// # Example
///
/// ```
/// use guestwire::transport::{BodyEncoding, CaptureChannel, FrameOrder};
/// use guestwire::{Response, Session};
///
/// let mut channel = CaptureChannel::new();
/// let mut session = Session::new(
///     &mut channel,
///     FrameOrder::HeaderLast,
///     BodyEncoding::HexEncoded,
/// );
/// session.log("starting up");
/// session.finish(Response::new(200, &b"<h1>hello</h1>"[..])).unwrap();
///
/// // One log segment, then body and frame.
/// assert_eq!(channel.writes().len(), 3);
/// assert_eq!(channel.writes().last().unwrap(), "c80000000e000000");
/// ```
pub struct Session<C: OutputChannel> {
    shim: LogShim<C>,
    transport: ResponseTransport,
}

impl<C: OutputChannel> Session<C> {
    /// Start a session with an explicit frame order and body encoding.
    ///
    /// Both sides of the wire must agree on the configuration, so there is
    /// no default for either parameter.
    pub fn new(channel: C, order: FrameOrder, body_encoding: BodyEncoding) -> Self {
        Self {
            shim: LogShim::new(channel),
            transport: ResponseTransport::new(order, body_encoding),
        }
    }

    /// Emit one log line through the channel.
    pub fn log(&mut self, value: impl Display) {
        self.shim.log(value);
    }

    /// Transmit the response and end the execution.
    ///
    /// Consumes the session: a guest produces at most one response.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::GuestwireError::OutOfRange`] from frame
    /// construction; nothing is written in that case.
    pub fn finish(self, response: Response) -> Result<()> {
        tracing::debug!(
            status = response.status,
            body_len = response.body.len(),
            "finishing guest execution"
        );
        let Session { shim, transport } = self;
        let mut channel = shim.into_inner();
        transport.send(&mut channel, &response)
    }
}
