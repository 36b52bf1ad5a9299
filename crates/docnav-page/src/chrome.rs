//! Breadcrumb trail and version placeholder.

use docnav_dom::{Handle, append, element, elements_by_tag, text, text_content};

/// Document `<title>` text, trimmed. `None` when absent or blank.
pub(crate) fn document_title(document: &Handle) -> Option<String> {
    elements_by_tag(document, "title")
        .first()
        .map(|title| text_content(title).trim().to_owned())
        .filter(|title| !title.is_empty())
}

/// Fill `container` with a trail built from a `"Head: Tail"` title.
///
/// The head links to the current directory index, the tail follows as plain
/// text. A title without a colon is inserted as is.
pub(crate) fn install_trail(container: &Handle, title: &str) {
    match title.split_once(':') {
        Some((head, tail)) => {
            let link = element("a", &[("href", ".")]);
            append(&link, &text(head.trim()));
            append(container, &link);
            append(container, &text(" > "));
            append(container, &text(tail.trim()));
        }
        None => append(container, &text(title)),
    }
}

/// Append the version label to its placeholder.
pub(crate) fn install_version(container: &Handle, label: &str) {
    append(container, &text(label));
}

#[cfg(test)]
mod tests {
    use docnav_dom::{find_by_id, inner_html, parse_html};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_document_title() {
        let doc = parse_html("<title> FCM: User Guide </title><p>x</p>");
        assert_eq!(document_title(&doc).as_deref(), Some("FCM: User Guide"));
    }

    #[test]
    fn test_document_title_missing_or_blank() {
        assert_eq!(document_title(&parse_html("<p>x</p>")), None);
        assert_eq!(document_title(&parse_html("<title>  </title>")), None);
    }

    #[test]
    fn test_trail_with_head_and_tail() {
        let doc = parse_html(r#"<div id="trail"></div>"#);
        let trail = find_by_id(&doc, "trail").unwrap();
        install_trail(&trail, "FCM: User Guide: Annex");

        assert_eq!(
            inner_html(&trail).unwrap(),
            r#"<a href=".">FCM</a> &gt; User Guide: Annex"#
        );
    }

    #[test]
    fn test_trail_without_colon() {
        let doc = parse_html(r#"<div id="trail"></div>"#);
        let trail = find_by_id(&doc, "trail").unwrap();
        install_trail(&trail, "Release Notes");

        assert_eq!(inner_html(&trail).unwrap(), "Release Notes");
    }

    #[test]
    fn test_version_appended() {
        let doc = parse_html(r#"<span id="v">Version: </span>"#);
        let placeholder = find_by_id(&doc, "v").unwrap();
        install_version(&placeholder, "FCM 2024.1");

        assert_eq!(inner_html(&placeholder).unwrap(), "Version: FCM 2024.1");
    }
}
