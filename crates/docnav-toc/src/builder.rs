//! Stack-based table of contents builder.

use std::rc::Rc;

use docnav_dom::{Handle, append, attr, child_elements, element, has_class, text};

use crate::heading::{HeadingNode, scan_headings};

/// Class of the pilcrow link appended to every heading.
pub const SECTION_LINK_CLASS: &str = "sectionlink";

/// Glyph used for section links.
pub const PILCROW: &str = "\u{b6}";

/// A heading placed in the generated tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    /// The heading this entry links to.
    pub heading: HeadingNode,
    /// Number of `<ul>` levels enclosing the entry's list item (1 = top level).
    pub nesting: usize,
}

/// Result of [`build_toc`].
#[derive(Debug, Default)]
pub struct TocOutcome {
    /// Outermost generated list, detached. `None` when no heading qualified.
    pub list: Option<Handle>,
    /// Every heading placed in the tree, in document order.
    pub entries: Vec<TocEntry>,
}

impl TocOutcome {
    /// Whether any heading was processed.
    ///
    /// Callers use this to decide whether collapse controls are worth
    /// attaching.
    pub fn has_headings(&self) -> bool {
        !self.entries.is_empty()
    }
}

/// One level of in-progress nesting.
struct TreeStackFrame {
    /// List holding the children at this level, created on first use.
    container_list: Option<Handle>,
    /// Item the container nests under; `None` for the root frame.
    parent_item: Option<Handle>,
    /// Depth of the heading that opened this frame (0 for the root).
    depth: usize,
}

impl TreeStackFrame {
    fn root() -> Self {
        Self {
            container_list: None,
            parent_item: None,
            depth: 0,
        }
    }

    fn under(item: Handle, depth: usize) -> Self {
        Self {
            container_list: None,
            parent_item: Some(item),
            depth,
        }
    }

    fn container(&mut self) -> Handle {
        if let Some(list) = &self.container_list {
            return Rc::clone(list);
        }
        let list = element("ul", &[]);
        if let Some(item) = &self.parent_item {
            append(item, &list);
        }
        self.container_list = Some(Rc::clone(&list));
        list
    }
}

/// Build a nested list from the headings below `root`.
///
/// `base_href` is the address of a fetched fragment; links become
/// `<base_href>#id` instead of `#id`. Each visited heading gets a
/// [`SECTION_LINK_CLASS`] pilcrow link appended unless it already has one.
///
/// Levels may arrive in any order. A heading pops every open frame at the
/// same or a deeper level and then nests one level below whatever remains,
/// so skipped levels never produce empty intermediate lists.
pub fn build_toc(root: &Handle, base_href: Option<&str>) -> TocOutcome {
    let mut root_frame = TreeStackFrame::root();
    let mut stack: Vec<TreeStackFrame> = Vec::new();
    let mut entries = Vec::new();

    for (node, heading) in scan_headings(root, base_href) {
        let depth = heading.depth();
        while stack.last().is_some_and(|frame| frame.depth >= depth) {
            stack.pop();
        }

        let nesting = stack.len() + 1;
        let href = heading.href();
        let list = stack.last_mut().unwrap_or(&mut root_frame).container();

        let link = element("a", &[("href", href.as_str())]);
        append(&link, &text(&heading.display_text));
        let item = element("li", &[]);
        append(&item, &link);
        append(&list, &item);
        stack.push(TreeStackFrame::under(item, depth));

        add_section_link(&node, &href);
        entries.push(TocEntry { heading, nesting });
    }

    tracing::debug!(
        headings = entries.len(),
        base_href = base_href.unwrap_or_default(),
        "Built table of contents"
    );

    TocOutcome {
        list: root_frame.container_list,
        entries,
    }
}

fn add_section_link(heading: &Handle, href: &str) {
    let already_linked = child_elements(heading, Some("a")).iter().any(|a| {
        has_class(a, SECTION_LINK_CLASS) && attr(a, "href").is_some_and(|existing| existing == href)
    });
    if already_linked {
        return;
    }

    let link = element("a", &[("class", SECTION_LINK_CLASS), ("href", href)]);
    append(&link, &text(PILCROW));
    append(heading, &link);
}
