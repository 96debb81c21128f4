//! Path pattern matching for redirect rules.
//!
//! # Responsibilities
//! - Parse source patterns (exact path or trailing `/*` wildcard)
//! - Capture the suffix beneath a wildcard prefix
//! - Expand destination templates with a captured suffix
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - A wildcard `P/*` matches `P` itself and anything beneath `P/`
//! - No regex to guarantee O(n) matching

use thiserror::Error;

/// Errors produced while parsing a pattern or destination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Patterns must be absolute paths.
    #[error("must start with '/'")]
    MissingLeadingSlash,

    /// `*` may only appear as the final `/*` segment.
    #[error("'*' is only allowed as a trailing '/*' segment")]
    MisplacedWildcard,

    /// A leading `//` is read by browsers as another host.
    #[error("must not start with '//'")]
    ProtocolRelative,
}

/// Split off a trailing `/*`, rejecting any other use of `*`.
fn split_wildcard(raw: &str) -> Result<(&str, bool), PatternError> {
    if !raw.starts_with('/') {
        return Err(PatternError::MissingLeadingSlash);
    }
    if raw.starts_with("//") {
        return Err(PatternError::ProtocolRelative);
    }
    match raw.strip_suffix("/*") {
        Some(base) if !base.contains('*') => Ok((base, true)),
        Some(_) => Err(PatternError::MisplacedWildcard),
        None if raw.contains('*') => Err(PatternError::MisplacedWildcard),
        None => Ok((raw, false)),
    }
}

/// True when `path` lies strictly beneath `parent` on a segment boundary.
fn is_beneath(path: &str, parent: &str) -> bool {
    path.strip_prefix(parent)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// A compiled source pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// Matches one concrete path.
    Exact(String),
    /// Matches the stored prefix and every path beneath it.
    Wildcard(String),
}

impl PathPattern {
    /// Parse a configured source pattern.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let (base, wildcard) = split_wildcard(raw)?;
        Ok(if wildcard {
            Self::Wildcard(base.to_string())
        } else {
            Self::Exact(base.to_string())
        })
    }

    /// Returns the captured suffix if `path` matches.
    ///
    /// Exact patterns capture the empty string. The `/` separating the
    /// prefix from the suffix is not part of the capture.
    pub fn capture<'a>(&self, path: &'a str) -> Option<&'a str> {
        match self {
            Self::Exact(exact) => (path == exact).then_some(""),
            Self::Wildcard(prefix) => {
                if path == prefix {
                    Some("")
                } else if is_beneath(path, prefix) {
                    Some(&path[prefix.len() + 1..])
                } else {
                    None
                }
            }
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard(_))
    }

    /// Literal portion of the pattern (the prefix for wildcards).
    pub fn literal(&self) -> &str {
        match self {
            Self::Exact(s) | Self::Wildcard(s) => s,
        }
    }
}

/// A compiled redirect destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Always the same path.
    Fixed(String),
    /// Base path that receives the wildcard capture.
    Template(String),
}

impl Destination {
    /// Parse a configured destination.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let (base, wildcard) = split_wildcard(raw)?;
        Ok(if wildcard {
            Self::Template(base.to_string())
        } else {
            Self::Fixed(base.to_string())
        })
    }

    /// Build the concrete location for a captured suffix.
    ///
    /// Leading slashes of the suffix are dropped so the result stays a
    /// path on this host (`/*` with `/evil.example` must not become
    /// `//evil.example`).
    pub fn expand(&self, suffix: &str) -> String {
        let suffix = suffix.trim_start_matches('/');
        match self {
            Self::Fixed(path) => path.clone(),
            Self::Template(base) if suffix.is_empty() => {
                if base.is_empty() {
                    "/".to_string()
                } else {
                    base.clone()
                }
            }
            Self::Template(base) => format!("{}/{}", base, suffix),
        }
    }

    pub fn uses_capture(&self) -> bool {
        matches!(self, Self::Template(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_pattern() {
        let pattern = PathPattern::parse("/services/software-solutions").unwrap();
        assert_eq!(pattern.capture("/services/software-solutions"), Some(""));
        assert_eq!(pattern.capture("/services/software-solutions/x"), None);
        assert_eq!(pattern.capture("/Services/Software-Solutions"), None); // Case sensitive
    }

    #[test]
    fn test_wildcard_pattern() {
        let pattern = PathPattern::parse("/services/software-solutions/*").unwrap();
        assert!(pattern.is_wildcard());
        assert_eq!(pattern.capture("/services/software-solutions"), Some(""));
        assert_eq!(pattern.capture("/services/software-solutions/"), Some(""));
        assert_eq!(
            pattern.capture("/services/software-solutions/erp/pricing"),
            Some("erp/pricing")
        );
        // Segment boundary, not a raw string prefix
        assert_eq!(pattern.capture("/services/software-solutions-old"), None);
    }

    #[test]
    fn test_root_wildcard_matches_everything() {
        let pattern = PathPattern::parse("/*").unwrap();
        assert_eq!(pattern.capture("/"), Some(""));
        assert_eq!(pattern.capture("/a/b"), Some("a/b"));
    }

    #[test]
    fn test_pattern_errors() {
        assert_eq!(PathPattern::parse("services"), Err(PatternError::MissingLeadingSlash));
        assert_eq!(PathPattern::parse("/a*/b"), Err(PatternError::MisplacedWildcard));
        assert_eq!(PathPattern::parse("/a/*/b"), Err(PatternError::MisplacedWildcard));
        assert_eq!(PathPattern::parse("/a/**"), Err(PatternError::MisplacedWildcard));
        assert_eq!(PathPattern::parse("//a/*"), Err(PatternError::ProtocolRelative));
        assert_eq!(Destination::parse("//evil.example"), Err(PatternError::ProtocolRelative));
        assert_eq!(Destination::parse("//*"), Err(PatternError::ProtocolRelative));
    }

    #[test]
    fn test_expand_never_leaves_the_host() {
        // "/old//evil.example/phish" under "/old/*" captures "/evil.example/phish"
        let source = PathPattern::parse("/old/*").unwrap();
        let suffix = source.capture("/old//evil.example/phish").unwrap();
        assert_eq!(suffix, "/evil.example/phish");

        let root = Destination::parse("/*").unwrap();
        assert_eq!(root.expand(suffix), "/evil.example/phish");
        assert_eq!(root.expand("//"), "/");

        let nested = Destination::parse("/new/*").unwrap();
        assert_eq!(nested.expand(suffix), "/new/evil.example/phish");
    }

    #[test]
    fn test_destination_expand() {
        let template = Destination::parse("/services/*").unwrap();
        assert_eq!(template.expand(""), "/services");
        assert_eq!(template.expand("cloud-hosting"), "/services/cloud-hosting");

        let root = Destination::parse("/*").unwrap();
        assert_eq!(root.expand(""), "/");
        assert_eq!(root.expand("a"), "/a");

        let fixed = Destination::parse("/services").unwrap();
        assert!(!fixed.uses_capture());
        assert_eq!(fixed.expand("ignored"), "/services");
    }
}
