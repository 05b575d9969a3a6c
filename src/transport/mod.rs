//! Transport module - the host's write-only text channel.
//!
//! The host exposes a single `putstr`-style primitive: it takes text, has
//! no return value, and preserves call order. [`OutputChannel`] abstracts
//! over it; everything the guest emits (log lines and the final response)
//! goes through one channel instance per execution.
//!
//! Each `write` call is an independently flushed segment of output. The
//! receiver's ability to find the frame depends on call order alone, so
//! implementations must never reorder or coalesce writes.

mod sender;

pub use sender::{recover_response, BodyEncoding, FrameOrder, ResponseTransport};

use std::io::Write as _;

/// Abstraction over the host's write-only text primitive.
///
/// Writes are infallible by contract: the primitive is assumed synchronous,
/// always available, and ordering-preserving. A failing sink means the host
/// is gone, which is outside this contract.
pub trait OutputChannel {
    /// Write one segment of text to the host sink.
    fn write(&mut self, text: &str);
}

/// A channel can be lent to one component (the logging shim) and later
/// reused by another (the transport) within the same execution.
impl<C: OutputChannel + ?Sized> OutputChannel for &mut C {
    #[inline]
    fn write(&mut self, text: &str) {
        (**self).write(text);
    }
}

/// Channel backed by a host-supplied function.
///
/// This is the adapter for the real guest environment: wrap whatever
/// `putstr`-equivalent the host injects.
///
/// # Example
///
/// ```
/// use guestwire::transport::{FnChannel, OutputChannel};
///
/// let mut seen = Vec::new();
/// let mut channel = FnChannel::new(|text: &str| seen.push(text.to_string()));
/// channel.write("abc");
/// drop(channel);
/// assert_eq!(seen, vec!["abc"]);
/// ```
pub struct FnChannel<F> {
    emit: F,
}

impl<F: FnMut(&str)> FnChannel<F> {
    /// Wrap a host print primitive.
    pub fn new(emit: F) -> Self {
        Self { emit }
    }
}

impl<F: FnMut(&str)> OutputChannel for FnChannel<F> {
    #[inline]
    fn write(&mut self, text: &str) {
        (self.emit)(text);
    }
}

/// Channel that writes to the process stdout, for guests whose host reads
/// their standard output.
///
/// Writes the text exactly as given and flushes immediately - no trailing
/// newline, no `println!` (which may add `\r\n` on Windows). The host waits
/// on flushed segments, so every write must hit the pipe before returning.
pub struct StdoutChannel;

impl StdoutChannel {
    /// Create a stdout-backed channel.
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputChannel for StdoutChannel {
    fn write(&mut self, text: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        // The channel contract treats the sink as infallible; a broken
        // stdout means the host has already torn the guest down.
        let _ = handle.write_all(text.as_bytes());
        let _ = handle.flush();
    }
}

/// Channel that records every write, for tests and wire verification.
///
/// # Example
///
/// ```
/// use guestwire::transport::{CaptureChannel, OutputChannel};
///
/// let mut channel = CaptureChannel::new();
/// channel.write("c8000000");
/// channel.write("0c000000");
/// assert_eq!(channel.writes().len(), 2);
/// assert_eq!(channel.concatenated(), "c80000000c000000");
/// ```
#[derive(Debug, Default)]
pub struct CaptureChannel {
    writes: Vec<String>,
}

impl CaptureChannel {
    /// Create an empty capture channel.
    pub fn new() -> Self {
        Self { writes: Vec::new() }
    }

    /// The recorded write segments, in call order.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// All segments joined into the stream the host would observe.
    pub fn concatenated(&self) -> String {
        self.writes.concat()
    }

    /// Consume the channel, returning the recorded segments.
    pub fn into_writes(self) -> Vec<String> {
        self.writes
    }
}

impl OutputChannel for CaptureChannel {
    fn write(&mut self, text: &str) {
        self.writes.push(text.to_string());
    }
}
