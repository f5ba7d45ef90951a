//! Error taxonomy for the request pipeline.
//!
//! Only [`ApiError::Unauthorized`] is global (the pipeline has already
//! invalidated the session when it surfaces; the caller's job is to navigate
//! to the login view). Everything else is local to the initiating flow, which
//! owns its own user-facing message. No variant triggers a retry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 401. The stored token has been cleared; the caller
    /// should redirect to the login view.
    #[error("unauthorized: session invalidated")]
    Unauthorized,

    /// The server returned 404. Distinct because the profile flow treats it
    /// as "no profile yet" rather than a failure.
    #[error("not found")]
    NotFound,

    /// Any other non-success HTTP status, with the server's `message` field
    /// when one was present in the body.
    #[error("request failed with status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
