//! Heading discovery.

use docnav_dom::{Handle, attr, descendants, has_class, tag_name, text_content_where};

use crate::builder::SECTION_LINK_CLASS;

/// One heading visited while building a table of contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadingNode {
    /// Heading rank, 2 to 6.
    pub level: u8,
    /// Value of the heading's `id` attribute.
    pub identifier: String,
    /// Label shown in the table of contents.
    pub display_text: String,
    /// Page the heading was fetched from; `None` for the live document.
    pub source_href: Option<String>,
}

impl HeadingNode {
    /// Nesting depth implied by the level (`h2` is 1, `h6` is 5).
    pub fn depth(&self) -> usize {
        usize::from(self.level) - 1
    }

    /// Link target for this heading: `#id` or `<source>#id`.
    pub fn href(&self) -> String {
        format!(
            "{}#{}",
            self.source_href.as_deref().unwrap_or_default(),
            self.identifier
        )
    }
}

/// Table-of-contents level of a heading element (`h2`..`h6`).
pub fn heading_level(node: &Handle) -> Option<u8> {
    match &*tag_name(node)? {
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Qualifying headings below `root` in document order, paired with their
/// elements. Headings without a non-empty `id` are left out.
pub(crate) fn scan_headings(root: &Handle, source_href: Option<&str>) -> Vec<(Handle, HeadingNode)> {
    descendants(root)
        .into_iter()
        .filter_map(|node| {
            let level = heading_level(&node)?;
            let identifier = attr(&node, "id").filter(|id| !id.is_empty())?;
            let display_text = label(&node);
            Some((
                node,
                HeadingNode {
                    level,
                    identifier,
                    display_text,
                    source_href: source_href.map(ToOwned::to_owned),
                },
            ))
        })
        .collect()
}

/// Heading text with whitespace collapsed, ignoring section links added by
/// an earlier pass.
fn label(node: &Handle) -> String {
    let raw = text_content_where(node, |child| !has_class(child, SECTION_LINK_CLASS));
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
