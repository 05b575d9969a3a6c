//! Response types for a single guest execution.
//!
//! A guest produces exactly one [`Response`] per run. Bodies are byte
//! sequences (`bytes::Bytes`), never strings: every transmitted unit must
//! be one byte wide so the frame's length field stays honest regardless of
//! what the body contains.

use bytes::{Bytes, BytesMut};

/// Status code used when a [`ResponseWriter`] never sets one explicitly.
pub const DEFAULT_STATUS: u32 = 200;

/// A complete guest response: status code plus body bytes.
///
/// Immutable after construction; consumed exactly once by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Numeric status code.
    pub status: u32,
    /// Body bytes (zero-copy via `bytes::Bytes`).
    pub body: Bytes,
}

impl Response {
    /// Create a response from a status code and body bytes.
    pub fn new(status: u32, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Create a response with an empty body.
    ///
    /// The empty body still gets its own write on the channel; only the
    /// frame's length field is zero.
    pub fn empty(status: u32) -> Self {
        Self {
            status,
            body: Bytes::new(),
        }
    }

    /// Get the body length in bytes.
    #[inline]
    pub fn body_len(&self) -> usize {
        self.body.len()
    }
}

/// Incremental response builder for handler-style guest code.
///
/// Buffers body writes and records a status code, then [`finish`]es into a
/// [`Response`]. Implements [`std::io::Write`] so anything that writes to
/// an `io::Write` sink can produce the body.
///
/// [`finish`]: ResponseWriter::finish
///
/// # Example
///
/// ```
/// use std::io::Write;
/// use guestwire::protocol::ResponseWriter;
///
/// let mut w = ResponseWriter::new();
/// w.write_all(b"<h1>hello</h1>").unwrap();
/// let response = w.finish();
/// assert_eq!(response.status, 200); // default when never set
/// assert_eq!(&response.body[..], b"<h1>hello</h1>");
/// ```
#[derive(Debug)]
pub struct ResponseWriter {
    body: BytesMut,
    status: u32,
}

impl ResponseWriter {
    /// Create an empty writer with the default status.
    pub fn new() -> Self {
        Self {
            body: BytesMut::new(),
            status: DEFAULT_STATUS,
        }
    }

    /// Set the status code.
    pub fn set_status(&mut self, status: u32) {
        self.status = status;
    }

    /// Current buffered body length in bytes.
    #[inline]
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Consume the writer, producing the final [`Response`].
    pub fn finish(self) -> Response {
        Response {
            status: self.status,
            body: self.body.freeze(),
        }
    }
}

impl Default for ResponseWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::io::Write for ResponseWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
