//! Page retrieval for remote navigation nodes.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ureq::Agent;
use url::Url;

use crate::error::FetchError;

/// Asynchronous GET returning the page body as HTML text.
///
/// Implementations resolve hrefs exactly as they appear in the navigation
/// tree. The returned future need not be `Send`: the controller runs on the
/// same thread as the document it mutates.
pub trait HtmlFetcher {
    /// Fetch `href` and return its body.
    fn fetch_html(&self, href: &str) -> impl Future<Output = Result<String, FetchError>>;
}

/// Whether an href points at another page rather than into the current one.
pub fn is_page_link(href: &str) -> bool {
    let href = href.trim();
    !(href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:"))
}

/// Href without its `#fragment`.
pub fn strip_fragment(href: &str) -> &str {
    href.split_once('#').map_or(href, |(page, _)| page)
}

/// HTTP fetcher backed by a blocking `ureq` agent on tokio's blocking pool.
#[derive(Debug)]
pub struct HttpFetcher {
    agent: Agent,
    base_url: Option<Url>,
}

impl HttpFetcher {
    /// Create a fetcher.
    ///
    /// Relative hrefs are resolved against `base_url`; without one, every
    /// href must be an absolute URL.
    pub fn new(base_url: Option<&str>, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = base_url
            .map(|base| {
                Url::parse(base).map_err(|e| FetchError::InvalidUrl {
                    url: base.to_owned(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self { agent, base_url })
    }

    /// Absolute URL for `href`, fragment removed.
    pub fn resolve(&self, href: &str) -> Result<Url, FetchError> {
        let href = strip_fragment(href);
        let parsed = match &self.base_url {
            Some(base) => base.join(href),
            None => Url::parse(href),
        };
        let url = parsed.map_err(|e| FetchError::InvalidUrl {
            url: href.to_owned(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(FetchError::InvalidUrl {
                url: href.to_owned(),
                reason: format!("unsupported scheme {other}"),
            }),
        }
    }
}

impl HtmlFetcher for HttpFetcher {
    async fn fetch_html(&self, href: &str) -> Result<String, FetchError> {
        let url = self.resolve(href)?.to_string();
        let agent = self.agent.clone();

        tokio::task::spawn_blocking(move || -> Result<String, FetchError> {
            let mut response = agent.get(url.as_str()).call()?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::HttpStatus {
                    url,
                    status: status.as_u16(),
                });
            }
            Ok(response.body_mut().read_to_string()?)
        })
        .await
        .map_err(|e| FetchError::Task(e.to_string()))?
    }
}

/// Fetcher reading pages from a directory, e.g. a built documentation tree.
#[derive(Clone, Debug)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    /// Create a fetcher resolving hrefs against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory hrefs are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path for `href`.
    ///
    /// Query and fragment are dropped. `..` never climbs above the root and a
    /// leading `/` is taken relative to the root.
    pub fn resolve(&self, href: &str) -> Result<PathBuf, FetchError> {
        let page = strip_fragment(href);
        let page = page.split_once('?').map_or(page, |(path, _)| path);

        if page.contains("://") || !is_page_link(page) {
            return Err(FetchError::InvalidUrl {
                url: href.to_owned(),
                reason: "not a relative page path".to_owned(),
            });
        }

        let mut segments: Vec<&str> = Vec::new();
        for component in page.split('/') {
            match component {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                _ => segments.push(component),
            }
        }

        if segments.is_empty() {
            return Err(FetchError::InvalidUrl {
                url: href.to_owned(),
                reason: "path resolves to the root directory".to_owned(),
            });
        }

        Ok(segments.iter().fold(self.root.clone(), |path, s| path.join(s)))
    }
}

impl HtmlFetcher for FsFetcher {
    async fn fetch_html(&self, href: &str) -> Result<String, FetchError> {
        let path = self.resolve(href)?;
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| FetchError::Io {
                path: path.clone(),
                source,
            })?;
        // Undecodable bytes degrade to replacement characters; the heading
        // scan then simply finds less.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
