//! Gateway error types.

use thiserror::Error;

/// Errors that can occur when talking to the API gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP transport error (connection refused, DNS, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the gateway.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The body was not the JSON shape the route promises.
    #[error("parse error: {0}")]
    Parse(String),
}
