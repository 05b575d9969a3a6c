//! Codec module - byte/text transcoding for the channel.
//!
//! The host primitive accepts printable text only, so binary data (the
//! response frame always, the body depending on configuration) is carried
//! as two lowercase hex characters per byte.
//!
//! # Example
//!
//! ```
//! use guestwire::codec::HexCodec;
//!
//! let text = HexCodec::encode(&[0x0a, 0x00, 0xff]);
//! assert_eq!(text, "0a00ff");
//! assert_eq!(HexCodec::decode(&text).unwrap(), vec![0x0a, 0x00, 0xff]);
//! ```

mod hex;

pub use hex::HexCodec;
