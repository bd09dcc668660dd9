//! Outbound message chains and gateway delivery results.

use std::fmt;

use serde_json::Value;

/// One typed piece of an outbound message chain.
#[derive(Clone, PartialEq, Eq)]
pub enum MessageSegment {
    /// Plain text.
    Text(String),
    /// Inline JPEG bytes, base64-embedded on the wire.
    Image(Vec<u8>),
    /// Image hosted elsewhere, referenced by URL.
    ImageLink(String),
}

impl MessageSegment {
    /// Creates a text segment.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns true for either image variant.
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::Image(_) | Self::ImageLink(_))
    }
}

impl fmt::Debug for MessageSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Image(bytes) => write!(f, "Image({} bytes)", bytes.len()),
            Self::ImageLink(url) => f.debug_tuple("ImageLink").field(url).finish(),
        }
    }
}

/// Ordered list of segments delivered as a single notification.
///
/// Image segments come before the caption.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageChain {
    segments: Vec<MessageSegment>,
}

impl MessageChain {
    /// Creates an empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: MessageSegment) {
        self.segments.push(segment);
    }

    /// Appends a segment, builder style.
    #[must_use]
    pub fn with(mut self, segment: MessageSegment) -> Self {
        self.push(segment);
        self
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[MessageSegment] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the chain has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Interactive button offered alongside a text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextButton {
    /// Text shown to the user.
    pub label: String,
    /// Action reported back when the button is used.
    pub action: String,
}

impl TextButton {
    /// Creates a button.
    #[must_use]
    pub fn new(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
        }
    }
}

/// Identifier assigned by the gateway to a delivered message.
///
/// Gateways report either numbers or strings; both are kept in their textual
/// form so `42` and `"42"` identify the same message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GatewayMessageId(String);

impl GatewayMessageId {
    /// Creates an id from its textual form.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reads an id from a JSON value.
    ///
    /// Empty strings, zero, `false` and `null` count as absent.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            Value::Number(n) if n.as_f64().is_some_and(|v| v != 0.0) => Some(Self(n.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for GatewayMessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for GatewayMessageId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for GatewayMessageId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Outcome of a gateway post that returned HTTP 200.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryResult {
    /// Whether the gateway accepted the message.
    pub success: bool,
    /// Message id reported by the gateway, if any.
    pub message_id: Option<GatewayMessageId>,
    /// Raw response body.
    pub payload: Value,
}

impl DeliveryResult {
    /// Response field names probed for the message id, in priority order.
    pub const MESSAGE_ID_FIELDS: [&'static str; 2] = ["message_id", "msg_id"];

    /// Builds a successful result from a gateway response body.
    #[must_use]
    pub fn accepted(payload: Value) -> Self {
        let message_id = Self::extract_message_id(&payload);
        Self {
            success: true,
            message_id,
            payload,
        }
    }

    /// Returns the first usable id among [`Self::MESSAGE_ID_FIELDS`].
    #[must_use]
    pub fn extract_message_id(payload: &Value) -> Option<GatewayMessageId> {
        Self::MESSAGE_ID_FIELDS
            .iter()
            .filter_map(|field| payload.get(field))
            .find_map(GatewayMessageId::from_json)
    }
}
