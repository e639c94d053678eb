//! Error types for Jackett operations.

use thiserror::Error;

/// Errors that can occur while talking to a Jackett server.
#[derive(Debug, Error)]
pub enum JackettError {
    /// The server could not be reached.
    #[error("Connection to Jackett failed: {0}")]
    ConnectionFailed(String),

    /// The request did not complete in time.
    #[error("Request timeout")]
    Timeout,

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Any other HTTP-layer failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Jackett answered with a Torznab `<error>` document.
    #[error("Jackett error {code}: {description}")]
    Torznab { code: u32, description: String },

    /// The response body is not the document we expected.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Local file error while writing a download.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl JackettError {
    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Whether this error happened at the network/HTTP layer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::Timeout | Self::HttpStatus { .. } | Self::Transport(_)
        )
    }
}

impl From<reqwest::Error> for JackettError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            JackettError::Timeout
        } else if e.is_connect() {
            JackettError::ConnectionFailed(e.to_string())
        } else {
            JackettError::Transport(e.to_string())
        }
    }
}

impl From<quick_xml::Error> for JackettError {
    fn from(e: quick_xml::Error) -> Self {
        JackettError::Parse(format!("malformed XML: {}", e))
    }
}
