//! Configuration management for docnav.
//!
//! Parses `docnav.toml` with serde and discovers it in the current directory
//! or any parent. CLI settings are applied during load via [`CliSettings`].
//!
//! ```toml
//! [page]
//! product_name = "FCM"
//! version = "${DOCNAV_VERSION:-}"
//!
//! [markers]
//! nav = "#docnav-nav"
//! toc = "#docnav-toc"
//! trail = "#docnav-trail"
//! version = "#docnav-version"
//!
//! [fetch]
//! base_url = "https://docs.example.com/"
//! timeout_secs = 30
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `${VAR}` (error if unset) and `${VAR:-default}` are expanded in
//! `page.product_name`, `page.version` and `fetch.base_url`.

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use docnav_dom::Marker;
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

const MAX_TIMEOUT_SECS: u64 = 600;

/// CLI settings that override configuration file values.
///
/// Only `Some` values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the documentation version.
    pub version: Option<String>,
    /// Override the base URL remote pages are fetched from.
    pub base_url: Option<String>,
    /// Override the fetch timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page bootstrap values.
    pub page: PageConfig,
    /// Container markers.
    pub markers: MarkersConfig,
    /// Remote page retrieval.
    pub fetch: FetchConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[page]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Product name placed before the version string.
    pub product_name: String,
    /// Documentation version. Nothing is injected when unset or empty.
    pub version: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            product_name: "docs".to_owned(),
            version: None,
        }
    }
}

/// `[markers]` section: where generated fragments go.
///
/// Each value is `#id`, `.class` or a bare id.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkersConfig {
    /// Main navigation container.
    pub nav: String,
    /// Per-page table of contents container.
    pub toc: String,
    /// Breadcrumb trail container.
    pub trail: String,
    /// Version placeholder.
    pub version: String,
}

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            nav: "#docnav-nav".to_owned(),
            toc: "#docnav-toc".to_owned(),
            trail: "#docnav-trail".to_owned(),
            version: "#docnav-version".to_owned(),
        }
    }
}

impl MarkersConfig {
    /// Navigation container marker.
    pub fn nav(&self) -> Result<Marker, ConfigError> {
        parse_marker(&self.nav, "markers.nav")
    }

    /// Table of contents container marker.
    pub fn toc(&self) -> Result<Marker, ConfigError> {
        parse_marker(&self.toc, "markers.toc")
    }

    /// Breadcrumb trail container marker.
    pub fn trail(&self) -> Result<Marker, ConfigError> {
        parse_marker(&self.trail, "markers.trail")
    }

    /// Version placeholder marker.
    pub fn version(&self) -> Result<Marker, ConfigError> {
        parse_marker(&self.version, "markers.version")
    }
}

/// `[fetch]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Base URL for HTTP fetching. Pages are read from disk when unset.
    pub base_url: Option<String>,
    /// Global timeout for one fetch, in seconds.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 30,
        }
    }
}

impl FetchConfig {
    /// Fetch timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g. `page.version`).
        field: String,
        /// Error message (e.g. `${DOCNAV_VERSION} not set`).
        message: String,
    },
}

fn parse_marker(value: &str, field: &str) -> Result<Marker, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Validation(format!("{field} is not a valid marker: {value:?}")))
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration with optional CLI settings.
    ///
    /// Loads `config_path` if given, otherwise the first `docnav.toml` found
    /// in the current directory or its parents, otherwise defaults. CLI
    /// settings take precedence over file values and are validated too.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, parsing
    /// fails, or a value is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else {
            let cwd = std::env::current_dir()?;
            match Self::discover_from(&cwd) {
                Some(discovered) => Self::load_from_file(&discovered)?,
                None => Self::default(),
            }
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Search `start` and its parents for `docnav.toml`.
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Documentation version, `None` when unset or blank.
    pub fn version(&self) -> Option<&str> {
        self.page
            .version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(version) = &settings.version {
            self.page.version = Some(version.clone());
        }
        if let Some(base_url) = &settings.base_url {
            self.fetch.base_url = Some(base_url.clone());
        }
        if let Some(timeout_secs) = settings.timeout_secs {
            self.fetch.timeout_secs = timeout_secs;
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.markers.nav()?;
        self.markers.toc()?;
        self.markers.trail()?;
        self.markers.version()?;
        self.validate_fetch()
    }

    fn validate_fetch(&self) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.fetch.base_url {
            require_http_url(base_url, "fetch.base_url")?;
        }

        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "fetch.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        if self.fetch.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::Validation(format!(
                "fetch.timeout_secs cannot exceed {MAX_TIMEOUT_SECS}"
            )));
        }

        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.page.product_name = expand::expand_env(&self.page.product_name, "page.product_name")?;

        if let Some(version) = &self.page.version {
            self.page.version = Some(expand::expand_env(version, "page.version")?);
        }

        if let Some(base_url) = &self.fetch.base_url {
            let expanded = expand::expand_env(base_url, "fetch.base_url")?;
            // An empty expansion means "no base URL": fall back to the filesystem.
            self.fetch.base_url = Some(expanded).filter(|url| !url.is_empty());
        }

        Ok(())
    }
}
