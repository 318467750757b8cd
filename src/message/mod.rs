//! Robot message payloads.
//!
//! Every payload composes a [`Message`], which carries the `type` discriminant
//! the receiving platform uses to pick a renderer. Payload variants flatten the
//! message into their own JSON object.

pub mod feed_card;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::MessageError;

pub use feed_card::{FeedCard, FeedCardBody, FeedCardBuilder, FeedCardLink, parse_links};

/// Discriminant of the feed card payload.
pub const FEED_CARD_TYPE: &str = "feedCard";

/// Envelope fields shared by every payload variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type", default)]
    msg_type: String,
}

impl Message {
    #[must_use]
    pub fn new(msg_type: impl Into<String>) -> Self {
        Self {
            msg_type: msg_type.into(),
        }
    }

    #[must_use]
    pub fn msg_type(&self) -> &str {
        &self.msg_type
    }

    pub fn set_type(&mut self, msg_type: impl Into<String>) -> &mut Self {
        self.msg_type = msg_type.into();
        self
    }
}

/// A message payload that can be rendered for the wire.
pub trait Payload: Serialize {
    /// The composed envelope.
    fn message(&self) -> &Message;

    /// The `type` discriminant of this payload.
    fn msg_type(&self) -> &str {
        self.message().msg_type()
    }

    /// Render the payload as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::SerializeError`] if the encoder rejects the payload.
    fn to_json(&self) -> Result<String, MessageError> {
        let body = serde_json::to_string(self).map_err(encode_error)?;
        debug!(msg_type = self.msg_type(), bytes = body.len(), "Rendered payload");
        Ok(body)
    }

    /// Render the payload as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::SerializeError`] if the encoder rejects the payload.
    fn to_json_pretty(&self) -> Result<String, MessageError> {
        serde_json::to_string_pretty(self).map_err(encode_error)
    }

    /// Render the payload as a JSON value tree.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::SerializeError`] if the encoder rejects the payload.
    fn to_value(&self) -> Result<Value, MessageError> {
        serde_json::to_value(self).map_err(encode_error)
    }
}

// `From<serde_json::Error>` classifies by category, which cannot tell encoder
// data errors from decoder ones.
fn encode_error(error: serde_json::Error) -> MessageError {
    MessageError::SerializeError(error.to_string())
}
