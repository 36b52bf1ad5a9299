//! Plain-text rendering of table of contents entries.

use crate::builder::TocEntry;

/// Render entries as an indented outline, one heading per line:
///
/// ```text
/// - Intro (#a)
///   - Detail (#b)
/// ```
pub fn outline(entries: &[TocEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}- {} ({})\n",
                "  ".repeat(entry.nesting.saturating_sub(1)),
                entry.heading.display_text,
                entry.heading.href()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use docnav_dom::parse_html;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::build_toc;

    #[test]
    fn test_outline() {
        let doc = parse_html(
            r#"<h2 id="a">Intro</h2><h4 id="b">Detail</h4><h3 id="c">Middle</h3><h2 id="d">End</h2>"#,
        );
        let toc = build_toc(&doc, None);
        assert_eq!(
            outline(&toc.entries),
            "- Intro (#a)\n  - Detail (#b)\n  - Middle (#c)\n- End (#d)\n"
        );
    }

    #[test]
    fn test_outline_empty() {
        assert_eq!(outline(&[]), "");
    }
}
