//! Page error types.

use docnav_dom::DomError;
use docnav_nav::NavError;

/// Page bootstrap or interaction error.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Serializing the document failed.
    #[error("failed to render page: {0}")]
    Dom(#[from] DomError),

    /// The controller rejected an operation.
    #[error(transparent)]
    Nav(#[from] NavError),

    /// No decorated entry links to this href.
    #[error("no navigation entry links to {0:?}")]
    UnknownEntry(String),
}
