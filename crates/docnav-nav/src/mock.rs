//! Mock fetcher and notifier for testing.
//!
//! Provides [`MockFetcher`] and [`MockNotifier`] for exercising remote nodes
//! without network or filesystem access.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::FetchError;
use crate::fetch::{HtmlFetcher, strip_fragment};
use crate::notify::Notifier;

#[derive(Debug)]
enum Response {
    Body(String),
    Status(u16),
}

/// Fetcher serving canned responses and counting requests per page.
///
/// Hrefs are matched with their fragment removed. Unknown pages answer with
/// HTTP 404.
///
/// # Example
///
/// ```ignore
/// use docnav_nav::MockFetcher;
///
/// let fetcher = MockFetcher::new()
///     .with_page("page2.html", "<h2 id=\"x\">X</h2>")
///     .with_status("broken.html", 500);
/// ```
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: HashMap<String, Response>,
    calls: RefCell<HashMap<String, usize>>,
}

impl MockFetcher {
    /// Create a fetcher with no pages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `href`.
    #[must_use]
    pub fn with_page(mut self, href: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(href.into(), Response::Body(body.into()));
        self
    }

    /// Answer `href` with an HTTP error status.
    #[must_use]
    pub fn with_status(mut self, href: impl Into<String>, status: u16) -> Self {
        self.responses.insert(href.into(), Response::Status(status));
        self
    }

    /// Number of fetches issued for `href`.
    pub fn fetch_count(&self, href: &str) -> usize {
        self.calls
            .borrow()
            .get(strip_fragment(href))
            .copied()
            .unwrap_or(0)
    }

    /// Number of fetches issued for any page.
    pub fn total_fetches(&self) -> usize {
        self.calls.borrow().values().sum()
    }
}

impl HtmlFetcher for MockFetcher {
    async fn fetch_html(&self, href: &str) -> Result<String, FetchError> {
        let page = strip_fragment(href);
        *self.calls.borrow_mut().entry(page.to_owned()).or_default() += 1;

        match self.responses.get(page) {
            Some(Response::Body(body)) => Ok(body.clone()),
            Some(Response::Status(status)) => Err(FetchError::HttpStatus {
                url: page.to_owned(),
                status: *status,
            }),
            None => Err(FetchError::HttpStatus {
                url: page.to_owned(),
                status: 404,
            }),
        }
    }
}

/// Notifier recording every failure message.
#[derive(Debug, Default)]
pub struct MockNotifier {
    messages: RefCell<Vec<String>>,
}

impl MockNotifier {
    /// Create an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `"<href>: <error>"` messages.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for MockNotifier {
    fn fetch_failed(&self, href: &str, error: &FetchError) {
        self.messages.borrow_mut().push(format!("{href}: {error}"));
    }
}
