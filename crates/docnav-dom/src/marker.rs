//! Container markers: `#id` or `.class` selectors naming page regions.

use std::fmt;
use std::str::FromStr;

use markup5ever_rcdom::Handle;

use crate::DomError;
use crate::query::{find_by_class, find_by_id};

/// Marker identifying a container element on the page.
///
/// Parsed from `#id`, `.class`, or a bare id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Marker {
    /// Element with this `id` attribute.
    Id(String),
    /// First element carrying this class.
    Class(String),
}

impl FromStr for Marker {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (make, name): (fn(String) -> Self, &str) = if let Some(id) = s.strip_prefix('#') {
            (Self::Id, id)
        } else if let Some(class) = s.strip_prefix('.') {
            (Self::Class, class)
        } else {
            (Self::Id, s)
        };

        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(DomError::InvalidMarker(s.to_owned()));
        }
        Ok(make(name.to_owned()))
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
        }
    }
}

/// Locate the element named by `marker` below `root`.
pub fn find_marker(root: &Handle, marker: &Marker) -> Option<Handle> {
    match marker {
        Marker::Id(id) => find_by_id(root, id),
        Marker::Class(class) => find_by_class(root, class),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::attr::attr;
    use crate::tree::parse_html;

    #[test]
    fn test_parse_id() {
        assert_eq!("#nav".parse::<Marker>().unwrap(), Marker::Id("nav".to_owned()));
    }

    #[test]
    fn test_parse_class() {
        assert_eq!(
            ".toc".parse::<Marker>().unwrap(),
            Marker::Class("toc".to_owned())
        );
    }

    #[test]
    fn test_parse_bare_id() {
        assert_eq!(
            "docnav-version".parse::<Marker>().unwrap(),
            Marker::Id("docnav-version".to_owned())
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!("#".parse::<Marker>().is_err());
        assert!("".parse::<Marker>().is_err());
        assert!(".a b".parse::<Marker>().is_err());
    }

    #[test]
    fn test_display_round_trips_prefix() {
        assert_eq!(Marker::Class("toc".to_owned()).to_string(), ".toc");
        assert_eq!(Marker::Id("nav".to_owned()).to_string(), "#nav");
    }

    #[test]
    fn test_find_marker() {
        let doc = parse_html(r#"<div class="toc" id="first"></div><div id="nav"></div>"#);
        let by_class = find_marker(&doc, &Marker::Class("toc".to_owned())).unwrap();
        assert_eq!(attr(&by_class, "id").as_deref(), Some("first"));
        assert!(find_marker(&doc, &Marker::Id("nav".to_owned())).is_some());
        assert!(find_marker(&doc, &Marker::Id("other".to_owned())).is_none());
    }
}
