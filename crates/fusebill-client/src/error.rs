//! Client error types.

use fusebill_core::InvoiceError;

/// Errors that can occur when using the Fusebill client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Login was rejected by the portal.
    #[error("authentication failed with status {status}: check username and password")]
    Authentication {
        /// HTTP status code returned by the login endpoint.
        status: u16,
    },

    /// Server returned a non-success response.
    #[error("API error: status {status} - {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// Response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A domain value failed validation before any request was made.
    #[error(transparent)]
    Invoice(#[from] InvoiceError),

    /// The client is not configured for the requested operation.
    #[error("configuration error: {0}")]
    Configuration(String),
}
