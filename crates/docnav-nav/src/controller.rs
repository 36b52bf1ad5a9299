//! Navigation controller: decoration and the per-node click state machine.

use std::rc::Rc;

use docnav_dom::{Handle, append, attr, body, child_elements, element, is_element, parse_html, prepend};
use docnav_toc::build_toc;

use crate::error::{FetchError, NavError};
use crate::fetch::{HtmlFetcher, is_page_link, strip_fragment};
use crate::node::{NavMode, NavNode, NodeId, NodeState, TOGGLE_CLASS};
use crate::notify::Notifier;

/// Immediate effect of a click.
#[derive(Debug, PartialEq, Eq)]
pub enum Click {
    /// The child list was shown or hidden.
    Toggled {
        /// New visibility.
        expanded: bool,
    },
    /// The node moved to `Loading`; the caller must fetch and then call
    /// [`NavController::complete_fetch`].
    Fetch(FetchRequest),
    /// The node is unbound in its current state.
    Ignored,
}

/// Page a remote node wants fetched.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// Href as written in the navigation tree, fragment removed.
    pub url: String,
}

/// Result of finishing a fetch.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Headings were found and spliced in; the node is expanded.
    Loaded {
        /// Nodes created for the spliced subtree's top-level items.
        children: Vec<NodeId>,
    },
    /// The page had no qualifying headings; the node is inert.
    Empty,
    /// The fetch failed; the node is inert.
    Failed(FetchError),
}

/// Result of [`NavController::click`].
#[derive(Debug)]
pub enum ClickOutcome {
    /// The child list was shown or hidden.
    Toggled {
        /// New visibility.
        expanded: bool,
    },
    /// Remote content was fetched and spliced in.
    Loaded {
        /// Nodes created for the spliced subtree's top-level items.
        children: Vec<NodeId>,
    },
    /// Remote page had nothing to show.
    Empty,
    /// Remote page could not be fetched.
    Failed(FetchError),
    /// Nothing happened.
    Ignored,
}

impl From<LoadOutcome> for ClickOutcome {
    fn from(outcome: LoadOutcome) -> Self {
        match outcome {
            LoadOutcome::Loaded { children } => Self::Loaded { children },
            LoadOutcome::Empty => Self::Empty,
            LoadOutcome::Failed(error) => Self::Failed(error),
        }
    }
}

/// Owner of every decorated navigation node on a page.
///
/// The controller is the only code that changes node state. Clicking a
/// remote node is split in two phases, [`handle_click`](Self::handle_click)
/// and [`complete_fetch`](Self::complete_fetch), so a click arriving while a
/// fetch is outstanding finds the node in `Loading` and is ignored.
/// [`click`](Self::click) runs both phases around an awaited fetch.
#[derive(Debug, Default)]
pub struct NavController {
    nodes: Vec<NavNode>,
}

impl NavController {
    /// Create a controller with no nodes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of decorated nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node was decorated yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&NavNode> {
        self.nodes.get(id.0)
    }

    /// All nodes with their ids, in decoration order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &NavNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// First node whose own link has exactly this href.
    pub fn find_by_href(&self, href: &str) -> Option<NodeId> {
        self.nodes()
            .find(|(_, node)| item_link(&node.item).is_some_and(|link| link == href))
            .map(|(id, _)| id)
    }

    /// Attach toggles to every item of `list` and of its nested lists.
    ///
    /// Items with a nested list start collapsed. In [`NavMode::Remote`],
    /// items without one whose link points at another page start unloaded.
    /// Everything else is inert. Items decorated earlier keep their node.
    ///
    /// Returns the ids of `list`'s own items.
    pub fn decorate(&mut self, list: &Handle, mode: NavMode) -> Vec<NodeId> {
        child_elements(list, Some("li"))
            .iter()
            .map(|item| self.decorate_item(item, mode))
            .collect()
    }

    fn decorate_item(&mut self, item: &Handle, mode: NavMode) -> NodeId {
        if let Some(existing) = self.nodes.iter().position(|n| Rc::ptr_eq(&n.item, item)) {
            return NodeId(existing);
        }

        let children = nested_list(item);
        let link = item_link(item);
        let (state, target_href) = match (&children, mode, link) {
            (Some(_), _, _) => (NodeState::Collapsed, None),
            (None, NavMode::Remote, Some(href)) if is_page_link(&href) => {
                (NodeState::Unloaded, Some(href))
            }
            _ => (NodeState::Inert, None),
        };

        let toggle = element("span", &[("class", TOGGLE_CLASS), ("role", "button")]);
        prepend(item, &toggle);

        let node = NavNode {
            item: Rc::clone(item),
            toggle,
            children: children.as_ref().map(Rc::clone),
            target_href,
            loaded: state != NodeState::Unloaded,
            state,
            mode,
        };
        node.sync_dom();

        let id = NodeId(self.nodes.len());
        self.nodes.push(node);

        if let Some(list) = children {
            self.decorate(&list, mode);
        }
        id
    }

    /// Dispatch a click on the node's current state.
    pub fn handle_click(&mut self, id: NodeId) -> Result<Click, NavError> {
        let node = self.nodes.get_mut(id.0).ok_or(NavError::UnknownNode(id))?;

        let click = match node.state {
            NodeState::Collapsed => {
                node.state = NodeState::Expanded;
                Click::Toggled { expanded: true }
            }
            NodeState::Expanded => {
                node.state = NodeState::Collapsed;
                Click::Toggled { expanded: false }
            }
            NodeState::Unloaded => {
                let url = node
                    .target_href
                    .as_deref()
                    .map(strip_fragment)
                    .unwrap_or_default()
                    .to_owned();
                node.state = NodeState::Loading;
                Click::Fetch(FetchRequest { url })
            }
            NodeState::Loading | NodeState::Inert | NodeState::Empty | NodeState::Failed => {
                return Ok(Click::Ignored);
            }
        };

        node.sync_dom();
        Ok(click)
    }

    /// Finish the fetch started by a [`Click::Fetch`].
    ///
    /// On success the response is parsed, its headings become a list linking
    /// to `<url>#id`, and that list is appended to the node's item and
    /// decorated in [`NavMode::Local`]. The node ends expanded, empty or
    /// failed and never fetches again.
    pub fn complete_fetch(
        &mut self,
        id: NodeId,
        result: Result<String, FetchError>,
    ) -> Result<LoadOutcome, NavError> {
        let node = self.nodes.get_mut(id.0).ok_or(NavError::UnknownNode(id))?;
        if node.state != NodeState::Loading {
            return Err(NavError::NotLoading(id));
        }
        let base_href = node
            .target_href
            .as_deref()
            .map(strip_fragment)
            .unwrap_or_default()
            .to_owned();

        let html = match result {
            Ok(html) => html,
            Err(error) => {
                tracing::debug!(node = %id, href = %base_href, error = %error, "Fetch failed");
                node.state = NodeState::Failed;
                node.sync_dom();
                return Ok(LoadOutcome::Failed(error));
            }
        };

        let document = parse_html(&html);
        let root = body(&document).unwrap_or_else(|| Rc::clone(&document));
        let toc = build_toc(&root, Some(base_href.as_str()));

        let Some(list) = toc.list else {
            tracing::debug!(node = %id, href = %base_href, "Fetched page has no headings");
            node.state = NodeState::Empty;
            node.sync_dom();
            return Ok(LoadOutcome::Empty);
        };

        append(&node.item, &list);
        node.children = Some(Rc::clone(&list));
        node.loaded = true;
        node.state = NodeState::Expanded;
        node.sync_dom();

        let children = self.decorate(&list, NavMode::Local);
        tracing::debug!(
            node = %id,
            href = %base_href,
            headings = toc.entries.len(),
            "Spliced fetched headings"
        );
        Ok(LoadOutcome::Loaded { children })
    }

    /// Handle a click end to end, awaiting the fetch if one is needed.
    ///
    /// Fetch failures are passed to `notifier` before the node is dimmed.
    pub async fn click<F, N>(
        &mut self,
        id: NodeId,
        fetcher: &F,
        notifier: &N,
    ) -> Result<ClickOutcome, NavError>
    where
        F: HtmlFetcher,
        N: Notifier,
    {
        match self.handle_click(id)? {
            Click::Toggled { expanded } => Ok(ClickOutcome::Toggled { expanded }),
            Click::Ignored => Ok(ClickOutcome::Ignored),
            Click::Fetch(request) => {
                tracing::debug!(node = %id, href = %request.url, "Fetching navigation content");
                let result = fetcher.fetch_html(&request.url).await;
                if let Err(error) = &result {
                    notifier.fetch_failed(&request.url, error);
                }
                Ok(self.complete_fetch(id, result)?.into())
            }
        }
    }
}

/// First nested `<ul>` or `<ol>` of an item.
fn nested_list(item: &Handle) -> Option<Handle> {
    child_elements(item, None)
        .into_iter()
        .find(|child| is_element(child, "ul") || is_element(child, "ol"))
}

/// Href of the item's own link (its first direct `<a>` child).
fn item_link(item: &Handle) -> Option<String> {
    child_elements(item, Some("a"))
        .first()
        .and_then(|a| attr(a, "href"))
}
