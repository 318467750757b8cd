//! robotmsg - Message payloads for chat robot webhooks.
//!
//! The crate builds the JSON bodies a robot posts to a chat platform. Delivery,
//! signing and retries belong to the transport layer and are not handled here.
//!
//! # Example
//!
//! ```
//! use robotmsg::message::{FeedCard, FeedCardLink, Payload};
//!
//! let card = FeedCard::builder()
//!     .add_link(
//!         FeedCardLink::new()
//!             .set_title("Release notes")
//!             .set_pic("https://example.com/cover.png")
//!             .set_url("https://example.com/notes"),
//!     )
//!     .build();
//!
//! let body = card.to_json().expect("feed cards always serialize");
//! assert!(body.starts_with(r#"{"type":"feedCard""#));
//! ```

// Module declarations
pub mod config;
pub mod errors;
pub mod message;

pub use errors::MessageError;
pub use message::{FeedCard, FeedCardBuilder, FeedCardLink, Message, Payload};

/// Configure structured logging with JSON format.
///
/// Events go to stderr so stdout stays free for rendered payloads. Calling this
/// more than once keeps the first subscriber.
///
/// # Example
///
/// ```
/// robotmsg::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
