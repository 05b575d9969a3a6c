//! Minimal guest execution walkthrough.
//!
//! Logs a few lines, then answers with one HTML response, and prints the
//! segments the host channel would observe.
//!
//! Run with: `cargo run --example respond`

use guestwire::transport::{BodyEncoding, CaptureChannel, FrameOrder};
use guestwire::{Response, Session};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let mut channel = CaptureChannel::new();

    let mut session = Session::new(
        &mut channel,
        FrameOrder::HeaderLast,
        BodyEncoding::RawText,
    );
    session.log("user log here");
    session.log("user log here");
    session
        .finish(Response::new(
            200,
            &b"<h1>From my demo application</h1>"[..],
        ))
        .unwrap();

    for (i, segment) in channel.writes().iter().enumerate() {
        println!("segment {i}: {segment}");
    }
}
