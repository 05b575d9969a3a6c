//! Protocol module - response frame wire format and response types.
//!
//! This module implements the fixed part of the guest-to-host contract:
//! - 8-byte response frame encoding/decoding
//! - `Response` value consumed once per execution
//! - `ResponseWriter` incremental body builder

mod response;
mod wire_format;

pub use response::{Response, ResponseWriter, DEFAULT_STATUS};
pub use wire_format::{Frame, FRAME_HEX_LEN, FRAME_SIZE};
