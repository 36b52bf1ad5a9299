//! Page bootstrap for static documentation pages.
//!
//! [`Page::load`] parses a page and wires up everything the page script
//! used to do on load:
//!
//! - decorate the site navigation list so that entries linking to other
//!   pages fetch those pages' headings on first expansion
//! - build the page's own table of contents into its container
//! - fill the breadcrumb trail from the document title
//! - inject `"<product name> <version>"` into the version placeholder
//!
//! Containers are located by [`PageMarkers`]; any that are missing are
//! skipped.
//!
//! # Example
//!
//! ```
//! use docnav_page::{Page, PageSettings};
//!
//! let settings = PageSettings {
//!     product_name: "FCM".to_owned(),
//!     version: Some("2024.1".to_owned()),
//!     ..Default::default()
//! };
//! let page = Page::load(
//!     r#"<span id="docnav-version"></span><div id="docnav-toc"></div><h2 id="a">A</h2>"#,
//!     &settings,
//! );
//!
//! assert_eq!(page.toc_entries().len(), 1);
//! assert!(page.to_html().unwrap().contains("FCM 2024.1"));
//! ```

mod chrome;
mod error;
mod page;
mod settings;

pub use error::PageError;
pub use page::{ExpandSummary, Page};
pub use settings::{PageMarkers, PageSettings};
