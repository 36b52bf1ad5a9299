//! `${VAR}` and `${VAR:-default}` expansion in configuration strings.

use crate::ConfigError;

/// Variable that was referenced without a default and is not set.
struct UnsetVar(String);

/// Expand braced environment references in `value`.
///
/// Each `${...}` span is expanded on its own; text outside the spans,
/// including bare `$NAME` and an unterminated `${`, is copied unchanged.
/// `field` names the setting in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(open) = rest.find("${") {
        let Some(close) = rest[open..].find('}').map(|offset| open + offset) else {
            break;
        };
        expanded.push_str(&rest[..open]);
        expanded.push_str(&expand_reference(&rest[open..=close], field)?);
        rest = &rest[close + 1..];
    }

    expanded.push_str(rest);
    Ok(expanded)
}

/// Expand a single `${NAME}` or `${NAME:-default}` span.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(reference, |name| match std::env::var(name) {
        Ok(found) => Ok(Some(found)),
        Err(_) => Err(UnsetVar(name.to_owned())),
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_expand_set_var() {
        // SAFETY: each test uses a variable no other test touches
        unsafe {
            std::env::set_var("DOCNAV_TEST_RELEASE", "2024.1");
        }
        assert_eq!(
            expand_env("${DOCNAV_TEST_RELEASE}", "page.version").unwrap(),
            "2024.1"
        );
        unsafe {
            std::env::remove_var("DOCNAV_TEST_RELEASE");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: each test uses a variable no other test touches
        unsafe {
            std::env::remove_var("DOCNAV_TEST_UNSET");
        }
        assert_eq!(
            expand_env("${DOCNAV_TEST_UNSET:-dev}", "page.version").unwrap(),
            "dev"
        );
        assert_eq!(
            expand_env("${DOCNAV_TEST_UNSET:-}", "page.version").unwrap(),
            ""
        );
    }

    #[test]
    fn test_expand_inside_url() {
        // SAFETY: each test uses a variable no other test touches
        unsafe {
            std::env::set_var("DOCNAV_TEST_HOST", "docs.example.com");
        }
        assert_eq!(
            expand_env("https://${DOCNAV_TEST_HOST}/user/", "fetch.base_url").unwrap(),
            "https://docs.example.com/user/"
        );
        unsafe {
            std::env::remove_var("DOCNAV_TEST_HOST");
        }
    }

    #[test]
    fn test_missing_var_names_field() {
        // SAFETY: each test uses a variable no other test touches
        unsafe {
            std::env::remove_var("DOCNAV_TEST_MISSING");
        }
        let err = expand_env("${DOCNAV_TEST_MISSING}", "page.product_name").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let message = err.to_string();
        assert!(message.contains("DOCNAV_TEST_MISSING"));
        assert!(message.contains("page.product_name"));
    }

    #[test]
    fn test_unbraced_dollar_is_literal() {
        assert_eq!(expand_env("$HOME/docs", "x").unwrap(), "$HOME/docs");
        assert_eq!(expand_env("plain", "x").unwrap(), "plain");
    }

    #[test]
    fn test_bare_reference_next_to_braced_is_literal() {
        // SAFETY: each test uses a variable no other test touches
        unsafe {
            std::env::set_var("DOCNAV_TEST_MIXED", "docs");
        }
        assert_eq!(
            expand_env("${DOCNAV_TEST_MIXED}/$HOME/${DOCNAV_TEST_MIXED:-x}", "x").unwrap(),
            "docs/$HOME/docs"
        );
        assert_eq!(
            expand_env("price$5 ${DOCNAV_TEST_MIXED", "x").unwrap(),
            "price$5 ${DOCNAV_TEST_MIXED"
        );
        unsafe {
            std::env::remove_var("DOCNAV_TEST_MIXED");
        }
    }
}
