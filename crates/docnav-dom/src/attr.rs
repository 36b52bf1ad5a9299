//! Attribute and class accessors.

use html5ever::{Attribute, LocalName, QualName, ns};
use markup5ever_rcdom::{Handle, NodeData};

/// Value of attribute `name`, if `node` is an element carrying it.
pub fn attr(node: &Handle, name: &str) -> Option<String> {
    let NodeData::Element { attrs, .. } = &node.data else {
        return None;
    };
    attrs
        .borrow()
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| a.value.to_string())
}

/// Set attribute `name`, replacing an existing value. Ignored for non-elements.
pub fn set_attr(node: &Handle, name: &str, value: &str) {
    let NodeData::Element { attrs, .. } = &node.data else {
        return;
    };
    let mut attrs = attrs.borrow_mut();
    if let Some(existing) = attrs.iter_mut().find(|a| &*a.name.local == name) {
        existing.value = value.into();
    } else {
        attrs.push(Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.into(),
        });
    }
}

/// Remove attribute `name` if present.
pub fn remove_attr(node: &Handle, name: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        attrs.borrow_mut().retain(|a| &*a.name.local != name);
    }
}

/// Whether the element's `class` list contains `class`.
pub fn has_class(node: &Handle, class: &str) -> bool {
    attr(node, "class").is_some_and(|list| list.split_whitespace().any(|c| c == class))
}

/// Add `class` to the element's class list (once).
pub fn add_class(node: &Handle, class: &str) {
    match attr(node, "class") {
        Some(list) if list.split_whitespace().any(|c| c == class) => {}
        Some(list) if !list.trim().is_empty() => {
            set_attr(node, "class", &format!("{} {class}", list.trim()));
        }
        _ => set_attr(node, "class", class),
    }
}

/// Remove `class` from the element's class list.
pub fn remove_class(node: &Handle, class: &str) {
    let Some(list) = attr(node, "class") else {
        return;
    };
    let remaining: Vec<&str> = list.split_whitespace().filter(|c| *c != class).collect();
    if remaining.is_empty() {
        remove_attr(node, "class");
    } else {
        set_attr(node, "class", &remaining.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tree::{element, text};

    #[test]
    fn test_set_and_get_attr() {
        let node = element("a", &[("href", "#a")]);
        set_attr(&node, "href", "#b");
        set_attr(&node, "title", "B");

        assert_eq!(attr(&node, "href").as_deref(), Some("#b"));
        assert_eq!(attr(&node, "title").as_deref(), Some("B"));
        assert_eq!(attr(&node, "missing"), None);
    }

    #[test]
    fn test_attr_on_text_node() {
        let node = text("x");
        set_attr(&node, "id", "y");
        assert_eq!(attr(&node, "id"), None);
    }

    #[test]
    fn test_remove_attr() {
        let node = element("ul", &[("hidden", "")]);
        remove_attr(&node, "hidden");
        assert_eq!(attr(&node, "hidden"), None);
    }

    #[test]
    fn test_add_class_once() {
        let node = element("span", &[]);
        add_class(&node, "toggle");
        add_class(&node, "expand");
        add_class(&node, "toggle");

        assert_eq!(attr(&node, "class").as_deref(), Some("toggle expand"));
    }

    #[test]
    fn test_remove_class() {
        let node = element("span", &[("class", "toggle expand")]);
        remove_class(&node, "expand");
        assert_eq!(attr(&node, "class").as_deref(), Some("toggle"));
        assert!(!has_class(&node, "expand"));

        remove_class(&node, "toggle");
        assert_eq!(attr(&node, "class"), None);
    }

    #[test]
    fn test_has_class_requires_whole_word() {
        let node = element("span", &[("class", "docnav-expanded")]);
        assert!(!has_class(&node, "docnav-expand"));
    }
}
