//! # guestwire
//!
//! Guest-side SDK for sandboxed scripts that answer their host through a
//! write-only text primitive.
//!
//! The host gives the guest a single `putstr`-style function and expects
//! one response per execution: a numeric status and a byte body, announced
//! by a fixed 8-byte little-endian frame (4 bytes status, 4 bytes body
//! length). The channel only carries printable text, so binary data is hex
//! transcoded - two lowercase characters per byte.
//!
//! ## Architecture
//!
//! - **Codec** ([`codec::HexCodec`]): byte/text transcoding for the
//!   text-only channel.
//! - **Protocol** ([`Frame`], [`Response`], [`ResponseWriter`]): the fixed
//!   frame format and the response value it describes.
//! - **Transport** ([`OutputChannel`], [`ResponseTransport`]): the host
//!   primitive abstraction and the two-write emission in a configured
//!   [`FrameOrder`] and [`BodyEncoding`].
//! - **Shim** ([`LogShim`]): log lines redirected over the same channel,
//!   hex-encoded and `"0a"`-terminated so they can never be mistaken for
//!   the frame.
//! - **Session** ([`Session`]): owns the channel for one execution - any
//!   number of log lines, then exactly one response.
//!
//! ## Example
//!
//! ```
//! use guestwire::transport::{BodyEncoding, CaptureChannel, FrameOrder};
//! use guestwire::{Response, Session};
//!
//! let mut channel = CaptureChannel::new();
//! let mut session = Session::new(
//!     &mut channel,
//!     FrameOrder::HeaderLast,
//!     BodyEncoding::HexEncoded,
//! );
//! session.log("user log here");
//! session.finish(Response::new(200, &b"Hello world!"[..])).unwrap();
//!
//! // Last segment on the wire is the 16-char frame.
//! assert_eq!(channel.writes().last().unwrap(), "c80000000c000000");
//! ```

pub mod codec;
pub mod error;
pub mod protocol;
pub mod transport;

mod session;
mod shim;

pub use error::GuestwireError;
pub use protocol::{Frame, Response, ResponseWriter};
pub use session::Session;
pub use shim::{LogShim, LINE_TERMINATOR_HEX};
pub use transport::{BodyEncoding, FrameOrder, OutputChannel, ResponseTransport};
