//! `docnav render` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_nav::{FsFetcher, HtmlFetcher, HttpFetcher};
use docnav_page::{Page, PageMarkers, PageSettings};

use crate::commands::read_page;
use crate::error::CliError;
use crate::output::{Output, write_document};

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// HTML page to render.
    input: PathBuf,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Expand the navigation entry linking to HREF, fetching its page (repeatable).
    #[arg(long = "expand", value_name = "HREF")]
    expand: Vec<String>,

    /// Expand every navigation entry.
    #[arg(long, conflicts_with = "expand")]
    expand_all: bool,

    /// Base URL remote pages are fetched from (overrides config).
    /// Without one, pages are read relative to the input file.
    #[arg(long, env = "DOCNAV_BASE_URL")]
    base_url: Option<String>,

    /// Documentation version shown in the version placeholder (overrides config).
    #[arg(long, env = "DOCNAV_VERSION")]
    doc_version: Option<String>,

    /// Fetch timeout in seconds (overrides config).
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the page cannot be read or
    /// written, or an `--expand` href matches no navigation entry.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            version: self.doc_version.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let settings = page_settings(&config)?;

        let html = read_page(&self.input)?;
        let mut page = Page::load(&html, &settings);
        tracing::info!(
            input = %self.input.display(),
            nav_items = page.nav_roots().len(),
            toc_headings = page.toc_entries().len(),
            "Loaded page"
        );

        if self.expand_all || !self.expand.is_empty() {
            if let Some(base_url) = &config.fetch.base_url {
                output.info(&format!("Fetching pages from {base_url}"));
                let fetcher = HttpFetcher::new(Some(base_url.as_str()), config.fetch.timeout())?;
                self.expand_with(&mut page, &fetcher, &output).await?;
            } else {
                let fetcher = FsFetcher::new(fetch_root(&self.input));
                output.info(&format!("Reading pages from {}", fetcher.root().display()));
                self.expand_with(&mut page, &fetcher, &output).await?;
            }
        }

        write_document(&page.to_html()?, self.output.as_deref())?;
        if let Some(path) = &self.output {
            output.success(&format!("Wrote {}", path.display()));
        }

        Ok(())
    }

    async fn expand_with<F: HtmlFetcher>(
        &self,
        page: &mut Page,
        fetcher: &F,
        output: &Output,
    ) -> Result<(), CliError> {
        if self.expand_all {
            let summary = page.expand_all(fetcher, output).await?;
            output.info(&format!(
                "Expanded {} entries, loaded {} pages ({} without headings, {} failed)",
                summary.toggled + summary.loaded,
                summary.loaded,
                summary.empty,
                summary.failed
            ));
        } else {
            for href in &self.expand {
                page.expand(href, fetcher, output).await?;
            }
        }
        Ok(())
    }
}

/// Page settings from the loaded configuration.
fn page_settings(config: &Config) -> Result<PageSettings, CliError> {
    Ok(PageSettings {
        product_name: config.page.product_name.clone(),
        version: config.version().map(str::to_owned),
        markers: PageMarkers {
            nav: config.markers.nav()?,
            toc: config.markers.toc()?,
            trail: config.markers.trail()?,
            version: config.markers.version()?,
        },
    })
}

/// Directory relative hrefs are resolved against when reading from disk.
fn fetch_root(input: &Path) -> PathBuf {
    match input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use docnav_dom::Marker;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    const INDEX: &str = r#"<html><head><title>FCM: Index</title></head><body>
<span id="docnav-version"></span>
<div id="docnav-nav"><ul><li><a href="page2.html">Two</a></li></ul></div>
</body></html>"#;

    fn args(dir: &Path, config: PathBuf) -> RenderArgs {
        RenderArgs {
            input: dir.join("index.html"),
            output: Some(dir.join("out.html")),
            config: Some(config),
            expand: Vec::new(),
            expand_all: false,
            base_url: None,
            doc_version: None,
            timeout: None,
            verbose: false,
        }
    }

    fn site() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("page2.html"), r#"<h2 id="x">X</h2>"#).unwrap();
        let config = dir.path().join("docnav.toml");
        std::fs::write(&config, "[page]\nproduct_name = \"FCM\"\nversion = \"1.0\"\n").unwrap();
        (dir, config)
    }

    #[test]
    fn test_page_settings_from_config() {
        let settings = page_settings(&Config::default()).unwrap();
        assert_eq!(settings.product_name, "docs");
        assert_eq!(settings.version, None);
        assert_eq!(settings.markers.toc, Marker::Id("docnav-toc".to_owned()));
    }

    #[test]
    fn test_fetch_root() {
        assert_eq!(fetch_root(Path::new("site/index.html")), PathBuf::from("site"));
        assert_eq!(fetch_root(Path::new("index.html")), PathBuf::from("."));
    }

    #[tokio::test]
    async fn test_render_expand_all_from_disk() {
        let (dir, config) = site();
        let mut args = args(dir.path(), config);
        args.expand_all = true;

        args.execute().await.unwrap();

        let html = std::fs::read_to_string(dir.path().join("out.html")).unwrap();
        assert!(html.contains(r##"<a href="page2.html#x">X</a>"##));
        assert!(html.contains("FCM 1.0"));
        assert!(html.contains("data-state=\"collapse\""));
    }

    #[tokio::test]
    async fn test_render_version_override() {
        let (dir, config) = site();
        let mut args = args(dir.path(), config);
        args.doc_version = Some("2.0".to_owned());

        args.execute().await.unwrap();

        let html = std::fs::read_to_string(dir.path().join("out.html")).unwrap();
        assert!(html.contains("FCM 2.0"));
        assert!(!html.contains("page2.html#x"));
    }

    #[tokio::test]
    async fn test_render_unknown_expand_href() {
        let (dir, config) = site();
        let mut args = args(dir.path(), config);
        args.expand = vec!["nope.html".to_owned()];

        assert!(matches!(args.execute().await, Err(CliError::Page(_))));
    }

    #[tokio::test]
    async fn test_render_missing_input() {
        let (dir, config) = site();
        let mut args = args(dir.path(), config);
        args.input = dir.path().join("missing.html");

        assert!(matches!(args.execute().await, Err(CliError::Validation(_))));
    }
}
