//! Surfacing fetch failures to the user.

use crate::error::FetchError;

/// Receives failures of remote node expansion.
///
/// Failures are reported once per node; the node is dimmed afterwards and
/// never fetches again.
pub trait Notifier {
    /// A remote node's page could not be fetched.
    fn fetch_failed(&self, href: &str, error: &FetchError);
}

/// Notifier writing failures to the tracing log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn fetch_failed(&self, href: &str, error: &FetchError) {
        tracing::warn!(href = %href, error = %error, "Failed to load navigation content");
    }
}
