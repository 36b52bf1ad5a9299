//! Navigation node state and its DOM rendering.

use std::fmt;

use docnav_dom::{Handle, add_class, remove_attr, remove_class, set_attr, set_text};

/// Class present on every toggle element.
pub const TOGGLE_CLASS: &str = "docnav-toggle";
/// Toggle class while the node is closed ("pointing right").
pub const EXPAND_CLASS: &str = "docnav-expand";
/// Toggle class while the node is open ("pointing down").
pub const COLLAPSE_CLASS: &str = "docnav-collapse";
/// Toggle class for nodes with nothing to expand.
pub const INERT_CLASS: &str = "docnav-inert";
/// Attribute carrying the textual toggle state, `expand` or `collapse`.
pub const STATE_ATTR: &str = "data-state";

const GLYPH_CLOSED: &str = "\u{25b8}";
const GLYPH_OPEN: &str = "\u{25be}";

/// How a list is decorated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMode {
    /// Children are already in the document; toggling never fetches.
    Local,
    /// Leaf items linking to another page fetch that page on first expand.
    Remote,
}

/// Handle to a node owned by a [`NavController`](crate::NavController).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-node state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    /// No child list and nothing to fetch.
    Inert,
    /// Child list present and hidden.
    Collapsed,
    /// Child list present and shown.
    Expanded,
    /// Remote page not fetched yet.
    Unloaded,
    /// Fetch in flight; clicks are ignored.
    Loading,
    /// Fetched page had no headings.
    Empty,
    /// Fetch failed.
    Failed,
}

/// What a click on the node currently does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickBehavior {
    /// Start fetching the remote page.
    Fetch,
    /// Show or hide the child list.
    Toggle,
}

impl NodeState {
    /// Click behaviour bound in this state, `None` when the node is unbound.
    pub fn behavior(self) -> Option<ClickBehavior> {
        match self {
            Self::Unloaded => Some(ClickBehavior::Fetch),
            Self::Collapsed | Self::Expanded => Some(ClickBehavior::Toggle),
            Self::Inert | Self::Loading | Self::Empty | Self::Failed => None,
        }
    }

    /// Terminal states that render dimmed.
    pub fn is_inert(self) -> bool {
        matches!(self, Self::Inert | Self::Empty | Self::Failed)
    }
}

/// One decorated list item.
#[derive(Debug)]
pub struct NavNode {
    pub(crate) item: Handle,
    pub(crate) toggle: Handle,
    pub(crate) children: Option<Handle>,
    pub(crate) target_href: Option<String>,
    pub(crate) state: NodeState,
    pub(crate) loaded: bool,
    pub(crate) mode: NavMode,
}

impl NavNode {
    /// The decorated `<li>`.
    pub fn item(&self) -> &Handle {
        &self.item
    }

    /// The toggle element prepended to the item.
    pub fn toggle(&self) -> &Handle {
        &self.toggle
    }

    /// Nested list, present from the start or spliced in after a fetch.
    pub fn children(&self) -> Option<&Handle> {
        self.children.as_ref()
    }

    /// Page fetched on first expansion (remote nodes only).
    pub fn target_href(&self) -> Option<&str> {
        self.target_href.as_deref()
    }

    /// Current state.
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Mode the node was decorated in.
    pub fn mode(&self) -> NavMode {
        self.mode
    }

    /// Whether the child list is shown.
    pub fn is_expanded(&self) -> bool {
        self.state == NodeState::Expanded
    }

    /// Whether the node's content is in the document.
    ///
    /// Always true for nodes whose children were present at decoration time;
    /// remote nodes become loaded once their fetched subtree is spliced in.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Currently bound click behaviour.
    pub fn toggle_handler(&self) -> Option<ClickBehavior> {
        self.state.behavior()
    }

    /// Bring the toggle element and child list in line with `state`.
    pub(crate) fn sync_dom(&self) {
        let open = self.state == NodeState::Expanded;

        remove_class(&self.toggle, if open { EXPAND_CLASS } else { COLLAPSE_CLASS });
        add_class(&self.toggle, if open { COLLAPSE_CLASS } else { EXPAND_CLASS });
        set_attr(&self.toggle, STATE_ATTR, if open { "collapse" } else { "expand" });
        set_text(&self.toggle, if open { GLYPH_OPEN } else { GLYPH_CLOSED });

        if self.state.is_inert() {
            add_class(&self.toggle, INERT_CLASS);
            set_attr(&self.toggle, "aria-disabled", "true");
            remove_attr(&self.toggle, "aria-expanded");
        } else {
            set_attr(&self.toggle, "aria-expanded", if open { "true" } else { "false" });
        }

        if self.state == NodeState::Loading {
            set_attr(&self.toggle, "aria-busy", "true");
        } else {
            remove_attr(&self.toggle, "aria-busy");
        }

        if let Some(list) = &self.children {
            if open {
                remove_attr(list, "hidden");
            } else {
                set_attr(list, "hidden", "");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_behavior_per_state() {
        assert_eq!(NodeState::Unloaded.behavior(), Some(ClickBehavior::Fetch));
        assert_eq!(NodeState::Collapsed.behavior(), Some(ClickBehavior::Toggle));
        assert_eq!(NodeState::Expanded.behavior(), Some(ClickBehavior::Toggle));
        assert_eq!(NodeState::Loading.behavior(), None);
        assert_eq!(NodeState::Failed.behavior(), None);
        assert_eq!(NodeState::Empty.behavior(), None);
        assert_eq!(NodeState::Inert.behavior(), None);
    }

    #[test]
    fn test_inert_states() {
        assert!(NodeState::Inert.is_inert());
        assert!(NodeState::Empty.is_inert());
        assert!(NodeState::Failed.is_inert());
        assert!(!NodeState::Loading.is_inert());
        assert!(!NodeState::Unloaded.is_inert());
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId(3).to_string(), "#3");
    }
}
