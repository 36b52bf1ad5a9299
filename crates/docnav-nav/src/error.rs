//! Error types for navigation trees.

use std::path::PathBuf;

use crate::node::NodeId;

/// Failure to retrieve a page for a remote node.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// Server answered with a non-success status.
    #[error("HTTP error {status} for {url}")]
    HttpStatus {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Page could not be read from disk.
    #[error("failed to read {}", path.display())]
    Io {
        /// Resolved file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Href could not be turned into a fetchable location.
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl {
        /// Href as found in the navigation tree.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Background fetch task panicked or was cancelled.
    #[error("fetch task failed: {0}")]
    Task(String),
}

/// Misuse of the controller API.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavError {
    /// Id was not issued by this controller.
    #[error("unknown navigation node {0}")]
    UnknownNode(NodeId),

    /// A fetch result arrived for a node that is not loading.
    #[error("navigation node {0} has no fetch in flight")]
    NotLoading(NodeId),
}
