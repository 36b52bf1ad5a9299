//! Nested table of contents from HTML headings.
//!
//! [`build_toc`] scans a parsed page (or a fetched fragment) for `h2`..`h6`
//! elements carrying an `id`, rebuilds their implied nesting as a `<ul>` tree
//! and appends a pilcrow section link to every heading it visits.
//!
//! ```
//! use docnav_dom::{outer_html, parse_html};
//! use docnav_toc::build_toc;
//!
//! let doc = parse_html(r#"<h2 id="a">Intro</h2><h3 id="b">Detail</h3>"#);
//! let toc = build_toc(&doc, None);
//!
//! assert!(toc.has_headings());
//! assert_eq!(
//!     outer_html(toc.list.as_ref().unwrap()).unwrap(),
//!     r##"<ul><li><a href="#a">Intro</a><ul><li><a href="#b">Detail</a></li></ul></li></ul>"##
//! );
//! ```

mod builder;
mod heading;
mod outline;

pub use builder::{PILCROW, SECTION_LINK_CLASS, TocEntry, TocOutcome, build_toc};
pub use heading::{HeadingNode, heading_level};
pub use outline::outline;
