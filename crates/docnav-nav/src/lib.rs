//! Collapsible navigation trees with lazily fetched sub-pages.
//!
//! [`NavController`] decorates existing `<ul>`/`<ol>` trees with toggle
//! controls and owns the per-node state machine:
//!
//! ```text
//! Local:   Collapsed <-> Expanded
//!
//! Remote:  Unloaded --click--> Loading --headings--> Expanded <-> Collapsed
//!                                  |
//!                                  +--no headings--> Empty   (inert)
//!                                  +--error--------> Failed  (inert)
//! ```
//!
//! Remote nodes fetch their page through an [`HtmlFetcher`] exactly once,
//! run the table of contents builder on the response and splice the result
//! in as the node's children.
//!
//! - [`HttpFetcher`]: HTTP GET via `ureq`, relative hrefs resolved against a base URL
//! - [`FsFetcher`]: reads pages from a directory
//! - [`MockFetcher`]: canned responses for tests (behind the `mock` feature flag)

mod controller;
mod error;
mod fetch;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod node;
mod notify;

pub use controller::{Click, ClickOutcome, FetchRequest, LoadOutcome, NavController};
pub use error::{FetchError, NavError};
pub use fetch::{FsFetcher, HtmlFetcher, HttpFetcher, is_page_link, strip_fragment};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockFetcher, MockNotifier};
pub use node::{
    COLLAPSE_CLASS, ClickBehavior, EXPAND_CLASS, INERT_CLASS, NavMode, NavNode, NodeId,
    NodeState, STATE_ATTR, TOGGLE_CLASS,
};
pub use notify::{LogNotifier, Notifier};
