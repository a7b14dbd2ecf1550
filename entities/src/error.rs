//! Error types for the CMS API adapter.

use serde::Deserialize;
use thiserror::Error;

/// One structured server-side error message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerMessage {
    /// Human-readable message for this error.
    pub message: String,
}

/// Error body returned by the CMS API on validation and lookup failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Ordered error list; the first entry is what the user sees.
    #[serde(default)]
    pub errors: Vec<ServerMessage>,
}

/// Errors produced by the HTTP adapter.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("Response parsing failed: {0}")]
    Decode(String),

    /// The API answered with a non-success status.
    #[error("API error (status {status})")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Structured messages parsed from the error body, possibly empty.
        messages: Vec<ServerMessage>,
    },
}

impl ApiError {
    /// Collapse the error into the single message shown to the user.
    ///
    /// If the server answered with a non-empty structured error list, the
    /// first entry's message wins and the rest are dropped; otherwise the
    /// error's own display string is used. This rule is applied identically
    /// wherever an error crosses into a notification - never per entity
    /// type.
    #[must_use]
    pub fn user_message(&self) -> String {
        if let Self::Api { messages, .. } = self {
            if let Some(first) = messages.first() {
                return first.message.clone();
            }
        }
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_structured_message_wins() {
        let error = ApiError::Api {
            status: 422,
            messages: vec![
                ServerMessage { message: "A".to_owned() },
                ServerMessage { message: "B".to_owned() },
            ],
        };
        assert_eq!(error.user_message(), "A");
    }

    #[test]
    fn plain_error_falls_back_to_display() {
        let error = ApiError::Transport("X".to_owned());
        assert_eq!(error.user_message(), "X");
    }

    #[test]
    fn status_without_messages_names_the_status() {
        let error = ApiError::Api { status: 502, messages: Vec::new() };
        assert_eq!(error.user_message(), "API error (status 502)");
    }

    #[test]
    fn error_body_tolerates_missing_errors_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap_or_default();
        assert!(body.errors.is_empty());
    }
}
