//! Error type shared by the REST helpers in [`super::api`].
//!
//! ERROR HANDLING
//! ==============
//! Only two failure kinds reach the UI: the auth service answered with a
//! non-2xx status, or the request never produced a usable response. Pages turn
//! either into a single inline message via [`ApiError::user_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Message shown for every transport-level failure.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status. `detail` carries the
    /// server-provided explanation when the body had one.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    /// The request failed before a decodable response arrived.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Build a [`ApiError::Rejected`] from a status code and the raw response body.
    pub fn rejected(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.detail)
            .and_then(|detail| detail.message());
        Self::Rejected { status, detail }
    }

    /// Text to render inline on the page. `fallback` is used when the server
    /// rejected the request without saying why.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { detail: Some(detail), .. } => detail.clone(),
            Self::Rejected { detail: None, .. } => fallback.to_owned(),
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_owned(),
        }
    }
}
