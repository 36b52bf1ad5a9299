//! Page bootstrap settings.

use docnav_dom::Marker;

/// Containers the page bootstrap looks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMarkers {
    /// Site-wide navigation list (decorated in remote mode).
    pub nav: Marker,
    /// Table of contents container for the current page.
    pub toc: Marker,
    /// Breadcrumb trail container.
    pub trail: Marker,
    /// Version placeholder.
    pub version: Marker,
}

impl Default for PageMarkers {
    fn default() -> Self {
        Self {
            nav: Marker::Id("docnav-nav".to_owned()),
            toc: Marker::Id("docnav-toc".to_owned()),
            trail: Marker::Id("docnav-trail".to_owned()),
            version: Marker::Id("docnav-version".to_owned()),
        }
    }
}

/// Values passed into [`Page::load`](crate::Page::load).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSettings {
    /// Product name placed before the version.
    pub product_name: String,
    /// Documentation version; nothing is injected without one.
    pub version: Option<String>,
    /// Container markers.
    pub markers: PageMarkers,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            product_name: "docs".to_owned(),
            version: None,
            markers: PageMarkers::default(),
        }
    }
}

impl PageSettings {
    /// Text for the version placeholder, `"<product name> <version>"`.
    ///
    /// `None` when no non-blank version is configured.
    pub fn version_label(&self) -> Option<String> {
        let version = self.version.as_deref().map(str::trim).filter(|v| !v.is_empty())?;
        let product = self.product_name.trim();
        if product.is_empty() {
            Some(version.to_owned())
        } else {
            Some(format!("{product} {version}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_version_label() {
        let settings = PageSettings {
            product_name: "FCM".to_owned(),
            version: Some("2024.1".to_owned()),
            ..Default::default()
        };
        assert_eq!(settings.version_label().as_deref(), Some("FCM 2024.1"));
    }

    #[test]
    fn test_version_label_without_version() {
        assert_eq!(PageSettings::default().version_label(), None);

        let blank = PageSettings {
            version: Some(" ".to_owned()),
            ..Default::default()
        };
        assert_eq!(blank.version_label(), None);
    }

    #[test]
    fn test_version_label_without_product() {
        let settings = PageSettings {
            product_name: String::new(),
            version: Some("1.0".to_owned()),
            ..Default::default()
        };
        assert_eq!(settings.version_label().as_deref(), Some("1.0"));
    }
}
