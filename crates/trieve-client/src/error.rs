//! Error types for the trieve-client library
//!
//! This module defines the error handling system for the dispatcher,
//! using thiserror for ergonomic error definitions and anyhow for flexible
//! error contexts.

use thiserror::Error;

/// Main error type for dispatch operations
#[derive(Error, Debug)]
pub enum Error {
    /// Non-2xx response from the API
    ///
    /// Carries the raw response text, the serialized request payload, and
    /// the method + path of the failed call so callers can distinguish
    /// failures by payload.
    #[error("{method} {path} failed with status {status}: {body}")]
    Api {
        status: u16,
        body: String,
        request_body: String,
        method: String,
        path: String,
    },

    /// The caller cancelled the request before a response settled
    #[error("request cancelled before a response was received")]
    Cancelled,

    /// Client construction or base-URL configuration errors
    #[error("configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Request building or connection-level failures
    #[error("HTTP request error: {message}")]
    HttpRequest {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A path template placeholder had no matching parameter in the bag
    #[error("unresolved path placeholder {{{placeholder}}} in template {template}")]
    UnresolvedPlaceholder {
        placeholder: String,
        template: String,
    },

    /// JSON serialization and deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}
