//! Redirect table lookup.
//!
//! # Responsibilities
//! - Store compiled redirect rules
//! - Resolve a request path to a redirect or an explicit no-match
//! - Preserve the query string on the redirect location
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) exact lookup via HashMap
//! - Wildcards pre-sorted by prefix length, longest first
//! - Exact rules always beat wildcard rules

use std::collections::HashMap;

use axum::http::Uri;

use crate::config::schema::RedirectRuleConfig;
use crate::config::validation::{validate_redirect_rules, ValidationError};
use crate::routing::matcher::{Destination, PathPattern};

/// A compiled redirect rule.
#[derive(Debug, Clone)]
pub struct RedirectRule {
    /// Source as written in configuration, used for logs and metrics.
    pub source: String,
    pub pattern: PathPattern,
    pub destination: Destination,
    pub permanent: bool,
}

/// Outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Location header value.
    pub location: String,
    pub permanent: bool,
    /// Source pattern of the rule that matched.
    pub rule: String,
}

/// Immutable redirect table.
#[derive(Debug, Default)]
pub struct Redirector {
    exact: HashMap<String, RedirectRule>,
    wildcards: Vec<RedirectRule>,
}

impl Redirector {
    /// Compile the table, enforcing the rule invariants.
    pub fn from_config(rules: &[RedirectRuleConfig]) -> Result<Self, Vec<ValidationError>> {
        let errors = validate_redirect_rules(rules);
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut exact = HashMap::new();
        let mut wildcards = Vec::new();
        for config in rules {
            let pattern = PathPattern::parse(&config.source).map_err(|reason| {
                vec![ValidationError::InvalidSource {
                    rule: config.source.clone(),
                    reason,
                }]
            })?;
            let destination = Destination::parse(&config.destination).map_err(|reason| {
                vec![ValidationError::InvalidDestination {
                    rule: config.source.clone(),
                    destination: config.destination.clone(),
                    reason,
                }]
            })?;

            let rule = RedirectRule {
                source: config.source.clone(),
                pattern,
                destination,
                permanent: config.permanent,
            };
            match &rule.pattern {
                PathPattern::Exact(path) => {
                    exact.insert(path.clone(), rule);
                }
                PathPattern::Wildcard(_) => wildcards.push(rule),
            }
        }

        // Longest prefix first
        wildcards.sort_by(|a, b| b.pattern.literal().len().cmp(&a.pattern.literal().len()));

        tracing::debug!(
            exact = exact.len(),
            wildcard = wildcards.len(),
            "Redirect table compiled"
        );

        Ok(Self { exact, wildcards })
    }

    /// An empty table that never redirects.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a redirect for a bare path.
    pub fn resolve(&self, path: &str) -> Option<Redirect> {
        if let Some(rule) = self.exact.get(path) {
            return Some(Self::redirect(rule, ""));
        }

        self.wildcards.iter().find_map(|rule| {
            rule.pattern
                .capture(path)
                .map(|suffix| Self::redirect(rule, suffix))
        })
    }

    /// Look up a redirect for a request URI, carrying the query over.
    pub fn resolve_uri(&self, uri: &Uri) -> Option<Redirect> {
        let mut redirect = self.resolve(uri.path())?;
        if let Some(query) = uri.query().filter(|q| !q.is_empty()) {
            redirect.location.push('?');
            redirect.location.push_str(query);
        }
        Some(redirect)
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.exact.len() + self.wildcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn redirect(rule: &RedirectRule, suffix: &str) -> Redirect {
        Redirect {
            location: rule.destination.expand(suffix),
            permanent: rule.permanent,
            rule: rule.source.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RedirectsConfig;

    fn rule(source: &str, destination: &str, permanent: bool) -> RedirectRuleConfig {
        RedirectRuleConfig {
            source: source.to_string(),
            destination: destination.to_string(),
            permanent,
        }
    }

    fn default_table() -> Redirector {
        Redirector::from_config(&RedirectsConfig::default().rules).unwrap()
    }

    #[test]
    fn test_exact_redirect() {
        let table = default_table();
        let redirect = table.resolve("/services/software-solutions").unwrap();
        assert_eq!(redirect.location, "/services");
        assert!(redirect.permanent);
        assert_eq!(redirect.rule, "/services/software-solutions");
    }

    #[test]
    fn test_wildcard_preserves_suffix() {
        let table = default_table();
        let redirect = table
            .resolve("/services/software-solutions/erp-solutions/Pricing%20Plans")
            .unwrap();
        assert_eq!(redirect.location, "/services/erp-solutions/Pricing%20Plans");
        assert_eq!(redirect.rule, "/services/software-solutions/*");
    }

    #[test]
    fn test_unmatched_falls_through() {
        let table = default_table();
        assert_eq!(table.resolve("/services"), None);
        assert_eq!(table.resolve("/services/cloud-hosting"), None);
        assert_eq!(table.resolve("/services/software-solutions-archive"), None);
    }

    #[test]
    fn test_exact_beats_wildcard() {
        let table = Redirector::from_config(&[
            rule("/shop/*", "/store/*", true),
            rule("/shop/sale", "/offers", false),
        ])
        .unwrap();

        let redirect = table.resolve("/shop/sale").unwrap();
        assert_eq!(redirect.location, "/offers");
        assert!(!redirect.permanent);

        assert_eq!(table.resolve("/shop/sale/today").unwrap().location, "/store/sale/today");
    }

    #[test]
    fn test_longest_prefix_wins() {
        let table = Redirector::from_config(&[
            rule("/docs/*", "/help/*", true),
            rule("/docs/api/*", "/reference/*", true),
        ])
        .unwrap();

        assert_eq!(table.resolve("/docs/api/users").unwrap().location, "/reference/users");
        assert_eq!(table.resolve("/docs/guide").unwrap().location, "/help/guide");
        assert_eq!(table.resolve("/docs/api").unwrap().location, "/reference");
    }

    #[test]
    fn test_query_preserved() {
        let table = default_table();
        let uri: Uri = "/services/software-solutions/devops?utm_source=mail".parse().unwrap();
        assert_eq!(
            table.resolve_uri(&uri).unwrap().location,
            "/services/devops?utm_source=mail"
        );
    }

    #[test]
    fn test_invalid_table_rejected() {
        let errors = Redirector::from_config(&[rule("/a", "/a", true)]).unwrap_err();
        assert!(matches!(errors[0], ValidationError::RedirectCycle { .. }));
    }

    #[test]
    fn test_empty_table() {
        let table = Redirector::empty();
        assert!(table.is_empty());
        assert_eq!(table.resolve("/services/software-solutions"), None);
        assert_eq!(default_table().len(), 2);
    }
}
