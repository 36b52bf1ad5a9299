//! End-to-end page rendering against pages on disk.

use std::path::Path;

use docnav_dom::{attr, child_elements, find_by_id, has_class};
use docnav_nav::{ClickOutcome, FsFetcher, INERT_CLASS, MockNotifier, NodeState, STATE_ATTR};
use docnav_page::{Page, PageSettings};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const INDEX: &str = r#"<!DOCTYPE html>
<html><head><title>FCM: Documentation</title></head>
<body>
<div id="docnav-trail"></div>
<div id="docnav-nav"><ul>
  <li><a href="user/index.html">User Guide</a></li>
  <li><a href="release.html">Release Notes</a></li>
  <li><a href="missing.html">Missing</a></li>
</ul></div>
</body></html>"#;

const USER_GUIDE: &str = r#"<html><body>
<h2 id="intro">Introduction</h2>
<h4 id="deep">Deep detail</h4>
<h3 id="setup">Setup</h3>
<h2 id="usage">Usage</h2>
</body></html>"#;

const RELEASE: &str = "<html><body><p>Nothing structured yet.</p></body></html>";

fn site() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "index.html", INDEX);
    write(dir.path(), "user/index.html", USER_GUIDE);
    write(dir.path(), "release.html", RELEASE);
    dir
}

fn write(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

#[tokio::test]
async fn test_remote_entry_loads_heading_tree() {
    let dir = site();
    let fetcher = FsFetcher::new(dir.path());
    let notifier = MockNotifier::new();
    let mut page = Page::load(INDEX, &PageSettings::default());

    let outcome = page
        .expand("user/index.html", &fetcher, &notifier)
        .await
        .unwrap();
    let ClickOutcome::Loaded { children } = outcome else {
        panic!("expected Loaded, got {outcome:?}");
    };
    assert_eq!(children.len(), 2);

    let controller = page.controller();
    let intro = controller.node(children[0]).unwrap();
    let nested = child_elements(intro.children().unwrap(), Some("li"));
    // "deep" and "setup" both sit directly under "intro".
    assert_eq!(nested.len(), 2);
    assert_eq!(
        controller.find_by_href("user/index.html#setup").map(|id| controller
            .node(id)
            .unwrap()
            .state()),
        Some(NodeState::Inert)
    );

    let user = controller.find_by_href("user/index.html").unwrap();
    assert_eq!(
        attr(controller.node(user).unwrap().toggle(), STATE_ATTR).as_deref(),
        Some("collapse")
    );
}

#[tokio::test]
async fn test_empty_and_missing_pages_are_dimmed() {
    let dir = site();
    let fetcher = FsFetcher::new(dir.path());
    let notifier = MockNotifier::new();
    let mut page = Page::load(INDEX, &PageSettings::default());

    let empty = page.expand("release.html", &fetcher, &notifier).await.unwrap();
    assert!(matches!(empty, ClickOutcome::Empty));
    let failed = page.expand("missing.html", &fetcher, &notifier).await.unwrap();
    assert!(matches!(failed, ClickOutcome::Failed(_)));
    assert_eq!(notifier.messages().len(), 1);

    for href in ["release.html", "missing.html"] {
        let id = page.controller().find_by_href(href).unwrap();
        let node = page.controller().node(id).unwrap();
        assert!(has_class(node.toggle(), INERT_CLASS));
        assert_eq!(node.toggle_handler(), None);
    }
}

#[tokio::test]
async fn test_expand_all_renders_static_page() {
    let dir = site();
    let fetcher = FsFetcher::new(dir.path());
    let notifier = MockNotifier::new();
    let mut page = Page::load(INDEX, &PageSettings::default());

    let summary = page.expand_all(&fetcher, &notifier).await.unwrap();
    assert_eq!(summary.loaded, 1);
    assert_eq!(summary.empty, 1);
    assert_eq!(summary.failed, 1);
    // "intro" is the only fetched heading with children.
    assert_eq!(summary.toggled, 1);

    let html = page.to_html().unwrap();
    assert!(html.contains(r##"<a href="user/index.html#deep">Deep detail</a>"##));
    assert!(!html.contains("hidden"));

    let trail = find_by_id(page.document(), "docnav-trail").unwrap();
    assert_eq!(
        child_elements(&trail, Some("a"))
            .first()
            .and_then(|a| attr(a, "href"))
            .as_deref(),
        Some(".")
    );
}
