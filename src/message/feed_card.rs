//! Feed card payloads: an ordered list of clickable link entries, each
//! rendered as a title with an image alongside it.
//!
//! ```
//! use robotmsg::message::{FeedCard, FeedCardLink, Payload};
//!
//! let card = FeedCard::builder()
//!     .add_link(
//!         FeedCardLink::new()
//!             .set_title("t")
//!             .set_pic("http://p")
//!             .set_url("http://u"),
//!     )
//!     .build();
//!
//! assert_eq!(
//!     card.to_json().unwrap(),
//!     r#"{"type":"feedCard","feedCard":{"links":[{"title":"t","picURL":"http://p","messageURL":"http://u"}]}}"#
//! );
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use super::{FEED_CARD_TYPE, Message, Payload};
use crate::errors::MessageError;

/// A built feed card, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedCard {
    #[serde(flatten)]
    message: Message,
    // Sent as `null` until a link operation created it.
    #[serde(rename = "feedCard", default)]
    body: Option<FeedCardBody>,
}

impl FeedCard {
    #[must_use]
    pub fn builder() -> FeedCardBuilder {
        FeedCardBuilder::new()
    }

    #[must_use]
    pub fn body(&self) -> Option<&FeedCardBody> {
        self.body.as_ref()
    }

    /// Links in render order; empty when the card has no body.
    #[must_use]
    pub fn links(&self) -> &[FeedCardLink] {
        self.body.as_ref().map(FeedCardBody::links).unwrap_or_default()
    }

    /// Parse a feed card payload received from elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::ParseError`] for malformed JSON and
    /// [`MessageError::UnexpectedType`] when the `type` discriminant is not `feedCard`.
    pub fn from_json(raw: &str) -> Result<Self, MessageError> {
        let card: FeedCard = serde_json::from_str(raw)?;

        if card.message.msg_type() != FEED_CARD_TYPE {
            return Err(MessageError::UnexpectedType {
                expected: FEED_CARD_TYPE,
                found: card.message.msg_type().to_string(),
            });
        }

        debug!(links = card.links().len(), "Parsed feed card");
        Ok(card)
    }
}

impl Payload for FeedCard {
    fn message(&self) -> &Message {
        &self.message
    }
}

/// Mutable builder for [`FeedCard`].
///
/// Setters take `&mut self` and hand the same builder back, so calls chain
/// and the builder can still be inspected or reused after [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct FeedCardBuilder {
    message: Message,
    body: Option<FeedCardBody>,
}

impl Default for FeedCardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedCardBuilder {
    #[must_use]
    pub fn new() -> Self {
        let mut message = Message::default();
        message.set_type(FEED_CARD_TYPE);

        Self {
            message,
            body: None,
        }
    }

    #[must_use]
    pub fn msg_type(&self) -> &str {
        self.message.msg_type()
    }

    #[must_use]
    pub fn body(&self) -> Option<&FeedCardBody> {
        self.body.as_ref()
    }

    #[must_use]
    pub fn links(&self) -> &[FeedCardLink] {
        self.body.as_ref().map(FeedCardBody::links).unwrap_or_default()
    }

    /// Replace the whole link list.
    pub fn set_links<I>(&mut self, links: I) -> &mut Self
    where
        I: IntoIterator<Item = FeedCardLink>,
    {
        self.ensure_body().links = links.into_iter().collect();
        self
    }

    /// Append a link after the existing ones.
    pub fn add_link(&mut self, link: FeedCardLink) -> &mut Self {
        self.ensure_body().links.push(link);
        self
    }

    /// Snapshot the current state into an immutable card.
    #[must_use]
    pub fn build(&self) -> FeedCard {
        debug!(links = self.links().len(), "Building feed card");

        FeedCard {
            message: self.message.clone(),
            body: self.body.clone(),
        }
    }

    fn ensure_body(&mut self) -> &mut FeedCardBody {
        self.body.get_or_insert_with(FeedCardBody::default)
    }
}

impl From<FeedCard> for FeedCardBuilder {
    fn from(card: FeedCard) -> Self {
        Self {
            message: card.message,
            body: card.body,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedCardBody {
    #[serde(default, deserialize_with = "null_as_default")]
    links: Vec<FeedCardLink>,
}

impl FeedCardBody {
    #[must_use]
    pub fn links(&self) -> &[FeedCardLink] {
        &self.links
    }
}

/// One entry of a feed card.
///
/// Values are passed through as given: no trimming, no URL checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedCardLink {
    #[serde(deserialize_with = "null_as_default")]
    title: String,
    #[serde(rename = "picURL", deserialize_with = "null_as_default")]
    pic: String,
    #[serde(rename = "messageURL", deserialize_with = "null_as_default")]
    url: String,
}

impl FeedCardLink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the entry.
    #[must_use]
    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// URL of the image shown after the text.
    #[must_use]
    pub fn set_pic(mut self, pic: impl Into<String>) -> Self {
        self.pic = pic.into();
        self
    }

    /// Where a click on the entry navigates to.
    #[must_use]
    pub fn set_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn pic(&self) -> &str {
        &self.pic
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Parse a JSON array of link objects using the wire field names.
///
/// # Errors
///
/// Returns [`MessageError::ParseError`] if `raw` is not an array of link objects.
pub fn parse_links(raw: &str) -> Result<Vec<FeedCardLink>, MessageError> {
    let links: Vec<FeedCardLink> = serde_json::from_str(raw)?;
    debug!(count = links.len(), "Parsed feed card links");
    Ok(links)
}

// Senders that never filled a field emit `null` for it.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
