//! Read-only traversal and lookup.

use std::rc::Rc;

use html5ever::LocalName;
use markup5ever_rcdom::{Handle, NodeData};

use crate::attr::{attr, has_class};

/// Local tag name of an element.
pub fn tag_name(node: &Handle) -> Option<LocalName> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.clone()),
        _ => None,
    }
}

/// Whether `node` is an element named `tag`.
pub fn is_element(node: &Handle, tag: &str) -> bool {
    matches!(&node.data, NodeData::Element { name, .. } if &*name.local == tag)
}

/// All nodes below `root` in document order (pre-order), excluding `root`.
pub fn descendants(root: &Handle) -> Vec<Handle> {
    let mut out = Vec::new();
    let mut stack: Vec<Handle> = root.children.borrow().iter().rev().map(Rc::clone).collect();
    while let Some(node) = stack.pop() {
        stack.extend(node.children.borrow().iter().rev().map(Rc::clone));
        out.push(node);
    }
    out
}

/// Direct element children of `node`, optionally restricted to one tag.
pub fn child_elements(node: &Handle, tag: Option<&str>) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|child| match tag {
            Some(tag) => is_element(child, tag),
            None => matches!(child.data, NodeData::Element { .. }),
        })
        .map(Rc::clone)
        .collect()
}

/// Elements named `tag` below `root`, in document order.
pub fn elements_by_tag(root: &Handle, tag: &str) -> Vec<Handle> {
    descendants(root)
        .into_iter()
        .filter(|node| is_element(node, tag))
        .collect()
}

/// First element below `root` whose `id` equals `id`.
pub fn find_by_id(root: &Handle, id: &str) -> Option<Handle> {
    descendants(root)
        .into_iter()
        .find(|node| attr(node, "id").is_some_and(|value| value == id))
}

/// First element below `root` carrying `class`.
pub fn find_by_class(root: &Handle, class: &str) -> Option<Handle> {
    descendants(root)
        .into_iter()
        .find(|node| has_class(node, class))
}

/// The `<body>` element of a parsed document.
pub fn body(document: &Handle) -> Option<Handle> {
    descendants(document)
        .into_iter()
        .find(|node| is_element(node, "body"))
}

/// Concatenated text of all text nodes below `node`.
pub fn text_content(node: &Handle) -> String {
    text_content_where(node, |_| true)
}

/// Concatenated text below `node`, skipping subtrees rooted at nodes for
/// which `keep` returns false.
pub fn text_content_where(node: &Handle, keep: impl Fn(&Handle) -> bool) -> String {
    fn walk(node: &Handle, keep: &dyn Fn(&Handle) -> bool, out: &mut String) {
        for child in node.children.borrow().iter() {
            if !keep(child) {
                continue;
            }
            if let NodeData::Text { contents } = &child.data {
                out.push_str(&contents.borrow());
            } else {
                walk(child, keep, out);
            }
        }
    }

    let mut out = String::new();
    walk(node, &keep, &mut out);
    out
}
