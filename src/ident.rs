//! The HCL identifier grammar.

use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[A-Za-z_][A-Za-z0-9_-]*$").unwrap());

/// Returns true if `s` is a valid HCL identifier.
///
/// Identifiers start with a letter or underscore, followed by any number of
/// letters, digits, underscores and dashes.
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_identifiers() {
        assert!(is_identifier("instance_type"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("ingress-rule"));
        assert!(is_identifier("a1"));
    }

    #[test]
    fn invalid_identifiers() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("1two"));
        assert!(!is_identifier("-leading-dash"));
        assert!(!is_identifier("has space"));
        assert!(!is_identifier("dotted.key"));
    }
}
