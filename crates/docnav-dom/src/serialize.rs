//! HTML serialization.

use std::rc::Rc;

use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use markup5ever_rcdom::{Handle, SerializableHandle};

use crate::DomError;

fn serialize_with(node: &Handle, scope: TraversalScope) -> Result<String, DomError> {
    let mut out = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: scope,
        ..Default::default()
    };
    serialize(&mut out, &SerializableHandle::from(Rc::clone(node)), opts)?;
    Ok(String::from_utf8(out)?)
}

/// Markup of `node`'s children.
pub fn inner_html(node: &Handle) -> Result<String, DomError> {
    serialize_with(node, TraversalScope::ChildrenOnly(None))
}

/// Markup of `node` itself, including its children.
///
/// Must not be called on a document node; use [`document_html`].
pub fn outer_html(node: &Handle) -> Result<String, DomError> {
    serialize_with(node, TraversalScope::IncludeNode)
}

/// Markup of a whole parsed document, doctype included.
pub fn document_html(document: &Handle) -> Result<String, DomError> {
    inner_html(document)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::query::find_by_id;
    use crate::tree::{append, element, parse_html, text};

    #[test]
    fn test_outer_html() {
        let link = element("a", &[("href", "#x"), ("class", "sectionlink")]);
        append(&link, &text("\u{b6}"));
        assert_eq!(
            outer_html(&link).unwrap(),
            "<a href=\"#x\" class=\"sectionlink\">\u{b6}</a>"
        );
    }

    #[test]
    fn test_inner_html_escapes_text() {
        let item = element("li", &[]);
        append(&item, &text("a < b & c"));
        assert_eq!(inner_html(&item).unwrap(), "a &lt; b &amp; c");
    }

    #[test]
    fn test_document_html_keeps_doctype() {
        let doc = parse_html("<!DOCTYPE html><title>T</title><p id=\"p\">x</p>");
        let html = document_html(&doc).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>T</title>"));
        assert!(find_by_id(&doc, "p").is_some());
    }
}
