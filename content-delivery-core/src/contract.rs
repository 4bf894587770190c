//! # contract: seams between the coordinator and the outside world
//!
//! This module defines the [`Transport`] trait the coordinator uses to issue
//! its single GET per lookup, together with the error types every public
//! operation of this crate returns.
//!
//! ## Interface & Extensibility
//! - Implement [`Transport`] to plug in another HTTP stack or a canned test
//!   double. The bundled implementation is [`crate::transport::HttpTransport`].
//! - URLs handed to the transport are relative (`/cms/content/query?...`); the
//!   implementor owns the base URL.
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall`, so consumers get `MockTransport`
//!   under the default `test-export-mocks` feature.
//!
//! ## Errors
//! - Transport failures are surfaced unchanged inside [`ContentError::Transport`].
//! - An empty result set is [`ContentError::NotFound`], never an empty item.
//! - Shapes the mapper cannot classify reject the whole response with
//!   [`ContentError::MalformedResponse`].

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// Failure while talking to the content delivery API.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Invalid request URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Content delivery API returned HTTP {0}")]
    Status(u16),

    #[error("Response body is not valid JSON: {0}")]
    Decode(String),
}

/// Error returned by every public content operation.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Content item not found: {id}")]
    NotFound { id: String },

    #[error("Malformed response at {path}: {reason}")]
    MalformedResponse { path: String, reason: String },
}

impl ContentError {
    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ContentError::MalformedResponse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound { .. })
    }
}

/// Issues GET requests against the content delivery API.
///
/// Retries, timeouts and connection pooling belong to the implementor; the
/// coordinator sends exactly one request per lookup.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` (relative to the implementor's base URL) and decode the body as JSON.
    async fn get_json(&self, url: &str) -> Result<Value, TransportError>;
}
