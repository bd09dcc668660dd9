//! Gateway delivery error types.

use thiserror::Error;

/// Delivery error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum DeliveryError {
    #[error("failed to build HTTP session: {message}")]
    Session { message: String },

    #[error("gateway request failed: {message}")]
    Transport { message: String },

    #[error("gateway request timed out")]
    Timeout,

    #[error("gateway rejected message [{status}]: {body}")]
    Status { status: u16, body: String },

    #[error("invalid gateway response: {message}")]
    InvalidResponse { message: String },
}

impl DeliveryError {
    /// Creates session error.
    #[must_use]
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session {
            message: message.into(),
        }
    }

    /// Creates transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates status error.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Creates invalid response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Returns whether the request never produced a response.
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout)
    }

    /// Returns whether the gateway answered with something other than success.
    #[must_use]
    pub const fn is_protocol_error(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::InvalidResponse { .. })
    }
}

impl From<reqwest::Error> for DeliveryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::transport(format!("failed to connect to gateway: {e}"))
        } else {
            Self::transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(DeliveryError::Timeout.is_transport_error());
        assert!(DeliveryError::transport("refused").is_transport_error());
        assert!(DeliveryError::status(500, "boom").is_protocol_error());
        assert!(!DeliveryError::session("tls").is_protocol_error());
    }

    #[test]
    fn test_status_message_includes_code_and_body() {
        let err = DeliveryError::status(403, "forbidden");
        assert_eq!(err.to_string(), "gateway rejected message [403]: forbidden");
    }
}
