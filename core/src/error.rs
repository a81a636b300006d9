//! Error types for the customer API client.
//!
//! # Design
//! `NotFound` and `Validation` get dedicated variants because callers handle
//! them differently: a missing record usually ends the current action, while
//! a validation rejection is mapped back onto individual form fields. Every
//! other non-2xx status lands in `Http` with the raw status and body.

use thiserror::Error;

/// Errors surfaced by [`crate::CustomerApi`] operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connectivity, timeout, DNS).
    #[error("network failure: {0}")]
    Network(String),

    /// The server returned 404 — no customer matches the identifier.
    #[error("customer not found")]
    NotFound,

    /// A 4xx response carrying `{"errors": [...]}` field messages.
    #[error("validation rejected: {}", .errors.join(", "))]
    Validation { errors: Vec<String> },

    /// Any other non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_server_detail() {
        let err = ApiError::Validation {
            errors: vec!["name: too short".to_string(), "phone: invalid".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "validation rejected: name: too short, phone: invalid"
        );

        let err = ApiError::Http {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");

        assert_eq!(ApiError::NotFound.to_string(), "customer not found");
    }
}
