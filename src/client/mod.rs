//! Remote bookmark store client
//!
//! The controller only talks to the store through [`BookmarkApi`], so the
//! HTTP implementation can be swapped for an in-memory one in tests.
//!
//! # Endpoints
//!
//! ```text
//! GET    get-bookmarks/          → [Bookmark]
//! POST   add-bookmarks/          { "url": ... }
//! DELETE delete-bookmark/{id}/
//! ```
//!
//! Any 2xx response is success; every other status is a failure.

mod http;

pub use http::HttpBookmarkApi;

use std::fmt;

use async_trait::async_trait;

use crate::structs::{Bookmark, NewBookmark};

// ============ ClientError ============

/// Errors from the client layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Rejected locally before any request was sent
    Validation(String),
    /// Connection, DNS or timeout failure
    Transport(String),
    /// Server answered with a non-success status
    Status { status: u16, body: String },
    /// Server answered 401
    Unauthorized,
    /// Response body could not be decoded
    Decode(String),
    /// The blocking request task panicked or was cancelled
    TaskJoin(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Validation(msg) => write!(f, "{}", msg),
            ClientError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ClientError::Status { status, body } if body.is_empty() => {
                write!(f, "Server returned HTTP {}", status)
            }
            ClientError::Status { status, body } => {
                write!(f, "Server returned HTTP {}: {}", status, body)
            }
            ClientError::Unauthorized => write!(f, "Unauthorized (HTTP 401)"),
            ClientError::Decode(msg) => write!(f, "Invalid response body: {}", msg),
            ClientError::TaskJoin(msg) => write!(f, "Request task failed: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl ClientError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, body: String) -> Self {
        if status == 401 {
            ClientError::Unauthorized
        } else {
            ClientError::Status { status, body }
        }
    }
}

// ============ BookmarkApi ============

/// Remote bookmark store
#[async_trait]
pub trait BookmarkApi: Send + Sync {
    /// Fetch the full collection in server order
    async fn list(&self) -> Result<Vec<Bookmark>, ClientError>;

    /// Create a record; the server derives title, description and image
    async fn create(&self, request: NewBookmark) -> Result<(), ClientError>;

    /// Delete the record with `id`
    async fn delete(&self, id: i64) -> Result<(), ClientError>;

    /// Implementation name, used in log lines
    fn name(&self) -> &'static str;
}
