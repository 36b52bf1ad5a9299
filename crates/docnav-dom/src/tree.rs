//! Node construction and tree surgery.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use html5ever::tendril::TendrilSink;
use html5ever::{Attribute, LocalName, ParseOpts, QualName, ns, parse_document};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};

/// Parse an HTML document or fragment and return the document node.
///
/// Never fails: html5ever recovers from malformed input, so a garbage body
/// simply produces a document without the elements the caller looks for.
pub fn parse_html(html: &str) -> Handle {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
    dom.document
}

/// Create a detached HTML element.
pub fn element(tag: &str, attrs: &[(&str, &str)]) -> Handle {
    let attrs = attrs
        .iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(*name)),
            value: (*value).into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: QualName::new(None, ns!(html), LocalName::from(tag)),
            attrs: RefCell::new(attrs),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a detached text node.
pub fn text(content: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(content.into()),
        },
    })
}

/// Parent of `node`, if it is attached.
pub fn parent(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take();
    let parent = weak.as_ref().and_then(Weak::upgrade);
    node.parent.set(weak);
    parent
}

/// Remove `node` from its parent. No-op for detached nodes.
pub fn detach(node: &Handle) {
    if let Some(parent) = parent(node) {
        parent
            .children
            .borrow_mut()
            .retain(|child| !Rc::ptr_eq(child, node));
    }
    node.parent.set(None);
}

/// Move `child` to the end of `parent`'s children.
///
/// The child may come from another parsed document; it is detached from
/// wherever it was first.
pub fn append(parent: &Handle, child: &Handle) {
    detach(child);
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(Rc::clone(child));
}

/// Move `child` to the front of `parent`'s children.
pub fn prepend(parent: &Handle, child: &Handle) {
    detach(child);
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().insert(0, Rc::clone(child));
}

/// Replace all children of `node` with a single text node.
pub fn set_text(node: &Handle, content: &str) {
    let old: Vec<Handle> = node.children.borrow_mut().drain(..).collect();
    for child in &old {
        child.parent.set(None);
    }
    append(node, &text(content));
}
