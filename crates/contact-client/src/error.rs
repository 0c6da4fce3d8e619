//! Client-side failures.

use thiserror::Error;

use crate::validation::FieldError;

/// Everything that can stop a client action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The form failed local validation; the service was not called.
    #[error("{} field(s) failed validation", .0.len())]
    Validation(Vec<FieldError>),
    /// The service answered with a failure envelope.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message from the envelope.
        message: String,
    },
    /// The request never produced a response.
    #[error("{message}")]
    Transport {
        /// Transport failure description.
        message: String,
    },
    /// The response body was not the expected envelope.
    #[error("unexpected response: {message}")]
    Decode {
        /// Decoder failure description.
        message: String,
    },
    /// The configured base URL cannot address the API.
    #[error("invalid base URL: {message}")]
    InvalidBaseUrl {
        /// Why the URL was rejected.
        message: String,
    },
}

impl ClientError {
    /// Build a [`ClientError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a [`ClientError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Messages to show the user, one per notification.
    #[must_use]
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => errors.iter().map(|e| e.message.to_owned()).collect(),
            other => vec![other.to_string()],
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::transport(format!("request timed out: {error}"))
        } else {
            Self::transport(error.to_string())
        }
    }
}
