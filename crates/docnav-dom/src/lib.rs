//! Stateless DOM helpers for docnav.
//!
//! Every function takes the node it operates on explicitly. There is no
//! shared document handle: callers parse a page with [`parse_html`] and pass
//! the resulting [`Handle`] (or any node below it) around.
//!
//! # Example
//!
//! ```
//! use docnav_dom::{append, body, element, inner_html, parse_html, text};
//!
//! let doc = parse_html("<p>Hello</p>");
//! let body = body(&doc).unwrap();
//! let link = element("a", &[("href", "#top")]);
//! append(&link, &text("Top"));
//! append(&body, &link);
//!
//! assert_eq!(inner_html(&body).unwrap(), r##"<p>Hello</p><a href="#top">Top</a>"##);
//! ```

mod attr;
mod marker;
mod query;
mod serialize;
mod tree;

pub use attr::{add_class, attr, has_class, remove_attr, remove_class, set_attr};
pub use marker::{Marker, find_marker};
pub use query::{
    body, child_elements, descendants, elements_by_tag, find_by_class, find_by_id, is_element,
    tag_name, text_content, text_content_where,
};
pub use serialize::{document_html, inner_html, outer_html};
pub use tree::{append, detach, element, parent, parse_html, prepend, set_text, text};

pub use markup5ever_rcdom::Handle;

/// DOM helper error.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// Serializer failed writing to its buffer.
    #[error("HTML serialization failed")]
    Serialize(#[from] std::io::Error),

    /// Serializer produced invalid UTF-8.
    #[error("serialized HTML is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Marker string is neither `#id`, `.class` nor a bare id.
    #[error("invalid marker: {0:?}")]
    InvalidMarker(String),
}
