//! Page bootstrap and interaction.

use std::collections::VecDeque;
use std::rc::Rc;

use docnav_dom::{
    Handle, add_class, append, body, descendants, document_html, find_marker, is_element,
    parse_html,
};
use docnav_nav::{
    ClickOutcome, HtmlFetcher, INERT_CLASS, NavController, NavError, NavMode, NavNode, NodeId,
    NodeState, Notifier,
};
use docnav_toc::{TocEntry, build_toc};

use crate::chrome::{document_title, install_trail, install_version};
use crate::error::PageError;
use crate::settings::PageSettings;

/// Counts of what [`Page::expand_all`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpandSummary {
    /// Nodes opened without fetching.
    pub toggled: usize,
    /// Remote nodes whose page was fetched and spliced in.
    pub loaded: usize,
    /// Remote nodes whose page had no headings.
    pub empty: usize,
    /// Remote nodes whose fetch failed.
    pub failed: usize,
}

/// A parsed page with its navigation decorated.
#[derive(Debug)]
pub struct Page {
    document: Handle,
    controller: NavController,
    nav_roots: Vec<NodeId>,
    toc_roots: Vec<NodeId>,
    toc_entries: Vec<TocEntry>,
    title: Option<String>,
}

impl Page {
    /// Parse `html` and run the page bootstrap.
    ///
    /// In order: the navigation list under the nav marker is decorated in
    /// remote mode; if a table of contents container exists, the page's
    /// headings are collected into it and decorated in local mode (or the
    /// container is marked inert when there are none); the breadcrumb trail
    /// and version label are filled in. Missing containers are skipped.
    pub fn load(html: &str, settings: &PageSettings) -> Self {
        let document = parse_html(html);
        let mut controller = NavController::new();
        let markers = &settings.markers;

        let nav_roots = match find_marker(&document, &markers.nav).and_then(|c| first_list(&c)) {
            Some(list) => controller.decorate(&list, NavMode::Remote),
            None => {
                tracing::debug!(marker = %markers.nav, "No navigation list on page");
                Vec::new()
            }
        };

        let (toc_roots, toc_entries) = match find_marker(&document, &markers.toc) {
            Some(container) => {
                let root = body(&document).unwrap_or_else(|| Rc::clone(&document));
                let toc = build_toc(&root, None);
                match toc.list {
                    Some(list) => {
                        append(&container, &list);
                        (controller.decorate(&list, NavMode::Local), toc.entries)
                    }
                    None => {
                        add_class(&container, INERT_CLASS);
                        (Vec::new(), Vec::new())
                    }
                }
            }
            None => (Vec::new(), Vec::new()),
        };

        let title = document_title(&document);
        if let (Some(title), Some(container)) =
            (title.as_deref(), find_marker(&document, &markers.trail))
        {
            install_trail(&container, title);
        }

        if let (Some(label), Some(container)) = (
            settings.version_label(),
            find_marker(&document, &markers.version),
        ) {
            install_version(&container, &label);
        }

        tracing::debug!(
            nav_items = nav_roots.len(),
            toc_headings = toc_entries.len(),
            nodes = controller.len(),
            "Loaded page"
        );

        Self {
            document,
            controller,
            nav_roots,
            toc_roots,
            toc_entries,
            title,
        }
    }

    /// The parsed document.
    pub fn document(&self) -> &Handle {
        &self.document
    }

    /// Controller owning every decorated node.
    pub fn controller(&self) -> &NavController {
        &self.controller
    }

    /// Top-level navigation items.
    pub fn nav_roots(&self) -> &[NodeId] {
        &self.nav_roots
    }

    /// Top-level table of contents items.
    pub fn toc_roots(&self) -> &[NodeId] {
        &self.toc_roots
    }

    /// Headings collected into the page's table of contents.
    pub fn toc_entries(&self) -> &[TocEntry] {
        &self.toc_entries
    }

    /// Document title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Click a node's toggle.
    pub async fn click<F, N>(
        &mut self,
        id: NodeId,
        fetcher: &F,
        notifier: &N,
    ) -> Result<ClickOutcome, PageError>
    where
        F: HtmlFetcher,
        N: Notifier,
    {
        Ok(self.controller.click(id, fetcher, notifier).await?)
    }

    /// Open the entry linking to `href`, fetching its page if needed.
    ///
    /// Entries already open, or that cannot open, are left alone.
    pub async fn expand<F, N>(
        &mut self,
        href: &str,
        fetcher: &F,
        notifier: &N,
    ) -> Result<ClickOutcome, PageError>
    where
        F: HtmlFetcher,
        N: Notifier,
    {
        let id = self
            .controller
            .find_by_href(href)
            .ok_or_else(|| PageError::UnknownEntry(href.to_owned()))?;
        self.open(id, fetcher, notifier).await
    }

    /// Open every node, including nodes spliced in while doing so.
    pub async fn expand_all<F, N>(
        &mut self,
        fetcher: &F,
        notifier: &N,
    ) -> Result<ExpandSummary, PageError>
    where
        F: HtmlFetcher,
        N: Notifier,
    {
        let mut summary = ExpandSummary::default();
        let ids: Vec<NodeId> = self.controller.nodes().map(|(id, _)| id).collect();
        let mut queue = VecDeque::from(ids);

        while let Some(id) = queue.pop_front() {
            match self.open(id, fetcher, notifier).await? {
                ClickOutcome::Toggled { .. } => summary.toggled += 1,
                ClickOutcome::Loaded { children } => {
                    summary.loaded += 1;
                    queue.extend(self.subtree_ids(&children));
                }
                ClickOutcome::Empty => summary.empty += 1,
                ClickOutcome::Failed(_) => summary.failed += 1,
                ClickOutcome::Ignored => {}
            }
        }

        tracing::info!(
            toggled = summary.toggled,
            loaded = summary.loaded,
            empty = summary.empty,
            failed = summary.failed,
            "Expanded navigation"
        );
        Ok(summary)
    }

    /// Serialize the document.
    pub fn to_html(&self) -> Result<String, PageError> {
        Ok(document_html(&self.document)?)
    }

    async fn open<F, N>(
        &mut self,
        id: NodeId,
        fetcher: &F,
        notifier: &N,
    ) -> Result<ClickOutcome, PageError>
    where
        F: HtmlFetcher,
        N: Notifier,
    {
        let state = self
            .controller
            .node(id)
            .map(NavNode::state)
            .ok_or(NavError::UnknownNode(id))?;
        if matches!(state, NodeState::Collapsed | NodeState::Unloaded) {
            self.click(id, fetcher, notifier).await
        } else {
            Ok(ClickOutcome::Ignored)
        }
    }

    /// Ids of `roots` and of every node decorated below them.
    fn subtree_ids(&self, roots: &[NodeId]) -> Vec<NodeId> {
        let Some(first) = roots.first() else {
            return Vec::new();
        };
        // Nodes of a spliced subtree are decorated contiguously from its first root.
        self.controller
            .nodes()
            .skip_while(|(id, _)| id != first)
            .map(|(id, _)| id)
            .collect()
    }
}

/// The container itself if it is a list, otherwise its first nested list.
fn first_list(container: &Handle) -> Option<Handle> {
    let is_list = |node: &Handle| is_element(node, "ul") || is_element(node, "ol");
    if is_list(container) {
        return Some(Rc::clone(container));
    }
    descendants(container).into_iter().find(is_list)
}
