//! `docnav outline` command implementation.

use std::path::PathBuf;
use std::rc::Rc;

use clap::Args;
use docnav_dom::{body, parse_html};
use docnav_toc::{build_toc, outline};

use crate::commands::read_page;
use crate::error::CliError;
use crate::output::{Output, write_document};

/// Arguments for the outline command.
#[derive(Args)]
pub(crate) struct OutlineArgs {
    /// HTML page to read.
    input: PathBuf,

    /// Prefix every href with this page path, as for a fetched page.
    #[arg(long)]
    base_href: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl OutlineArgs {
    /// Execute the outline command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let html = read_page(&self.input)?;
        let text = render_outline(&html, self.base_href.as_deref());

        if text.is_empty() {
            Output::new().warning("No headings with an id found");
            return Ok(());
        }
        write_document(&text, None)?;
        Ok(())
    }
}

fn render_outline(html: &str, base_href: Option<&str>) -> String {
    let document = parse_html(html);
    let root = body(&document).unwrap_or_else(|| Rc::clone(&document));
    outline(&build_toc(&root, base_href).entries)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_outline() {
        let html = r#"<h2 id="a">A</h2><h4 id="b">B</h4><h3 id="c">C</h3>"#;
        assert_eq!(render_outline(html, None), "- A (#a)\n  - B (#b)\n  - C (#c)\n");
    }

    #[test]
    fn test_render_outline_with_base() {
        let html = r#"<h2 id="x">X</h2>"#;
        assert_eq!(
            render_outline(html, Some("page2.html")),
            "- X (page2.html#x)\n"
        );
    }

    #[test]
    fn test_render_outline_without_headings() {
        assert_eq!(render_outline("<h2>untagged</h2>", None), "");
    }
}
