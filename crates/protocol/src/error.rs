//! Protocol and configuration error types.

use thiserror::Error;

/// Errors that can occur while decoding server events.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Event has no \"type\" field")]
    MissingType,

    #[error("Unsupported event type: {0}")]
    UnknownEventType(String),

    #[error("Unsupported player role: {0}")]
    UnsupportedRole(String),

    #[error("Expected a text frame")]
    NonTextFrame,

    #[error("Malformed event: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while resolving the client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unsupported host: {0}")]
    UnsupportedHost(String),
}
