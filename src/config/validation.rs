//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Enforce redirect table invariants (distinct sources, no cycles,
//!   wildcard captures carried through)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::{RedirectRuleConfig, SiteConfig};
use crate::http::routes;
use crate::routing::matcher::{Destination, PathPattern, PatternError};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is not a valid socket address: {value}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("listener.max_connections must be greater than zero")]
    ZeroMaxConnections,

    #[error("site.base_url {value} is invalid: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("redirect source {rule} is invalid: {reason}")]
    InvalidSource { rule: String, reason: PatternError },

    #[error("redirect destination {destination} of {rule} is invalid: {reason}")]
    InvalidDestination {
        rule: String,
        destination: String,
        reason: PatternError,
    },

    #[error("redirect source {0} is defined more than once")]
    DuplicateSource(String),

    #[error("redirect {rule} → {destination} lands on source pattern {matched}")]
    RedirectCycle {
        rule: String,
        destination: String,
        matched: String,
    },

    #[error("wildcard redirect {rule} must forward its capture (destination ending in '/*'), got {destination}")]
    CaptureDropped { rule: String, destination: String },

    #[error("redirect {rule} has no wildcard to capture but destination {destination} expects one")]
    CaptureMissing { rule: String, destination: String },

    #[error("legacy.{field} must be an absolute path without route parameters, got {value}")]
    InvalidLegacyPath { field: &'static str, value: String },

    #[error("legacy.path {0} collides with an existing page route")]
    LegacyPathReserved(String),

    #[error("legacy.destination {0} is itself redirected")]
    LegacyDestinationRedirected(String),

    #[error("legacy.destination {0} points back at legacy.path")]
    LegacySelfRedirect(String),

    #[error("legacy.destination {0} is not served by any page")]
    LegacyDestinationUnknown(String),
}

/// Validate the whole configuration, collecting every error.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.listener.max_connections == 0 {
        errors.push(ValidationError::ZeroMaxConnections);
    }

    if let Some(base_url) = &config.site.base_url {
        if let Err(e) = Url::parse(base_url) {
            errors.push(ValidationError::InvalidBaseUrl {
                value: base_url.clone(),
                reason: e.to_string(),
            });
        }
    }

    errors.extend(validate_redirect_rules(&config.redirects.rules));

    if config.legacy.enabled {
        for (field, value) in [
            ("path", &config.legacy.path),
            ("destination", &config.legacy.destination),
        ] {
            if !value.starts_with('/') || value.contains(&['{', '}', '*'][..]) {
                errors.push(ValidationError::InvalidLegacyPath {
                    field,
                    value: value.clone(),
                });
            }
        }

        let served = routes::reserved_paths();
        if served.contains(&config.legacy.path) {
            errors.push(ValidationError::LegacyPathReserved(config.legacy.path.clone()));
        }

        // The fallback page replaces itself with its destination, so that
        // destination has to be a real page other than the fallback.
        if config.legacy.destination == config.legacy.path {
            errors.push(ValidationError::LegacySelfRedirect(
                config.legacy.destination.clone(),
            ));
        } else if !served.contains(&config.legacy.destination) {
            errors.push(ValidationError::LegacyDestinationUnknown(
                config.legacy.destination.clone(),
            ));
        }

        let destination_redirected = config.redirects.enabled
            && config
                .redirects
                .rules
                .iter()
                .filter_map(|r| PathPattern::parse(&r.source).ok())
                .any(|p| p.capture(&config.legacy.destination).is_some());
        if destination_redirected {
            errors.push(ValidationError::LegacyDestinationRedirected(
                config.legacy.destination.clone(),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

/// Check the redirect table invariants.
///
/// A destination "lands on" a source when its literal form (the template
/// expanded with an empty capture) matches any rule, including its own.
pub fn validate_redirect_rules(rules: &[RedirectRuleConfig]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut compiled = Vec::with_capacity(rules.len());

    for rule in rules {
        if !seen.insert(rule.source.as_str()) {
            errors.push(ValidationError::DuplicateSource(rule.source.clone()));
            continue;
        }

        let pattern = match PathPattern::parse(&rule.source) {
            Ok(p) => p,
            Err(reason) => {
                errors.push(ValidationError::InvalidSource {
                    rule: rule.source.clone(),
                    reason,
                });
                continue;
            }
        };
        let destination = match Destination::parse(&rule.destination) {
            Ok(d) => d,
            Err(reason) => {
                errors.push(ValidationError::InvalidDestination {
                    rule: rule.source.clone(),
                    destination: rule.destination.clone(),
                    reason,
                });
                continue;
            }
        };

        match (pattern.is_wildcard(), destination.uses_capture()) {
            (true, false) => errors.push(ValidationError::CaptureDropped {
                rule: rule.source.clone(),
                destination: rule.destination.clone(),
            }),
            (false, true) => errors.push(ValidationError::CaptureMissing {
                rule: rule.source.clone(),
                destination: rule.destination.clone(),
            }),
            _ => {}
        }

        compiled.push((rule, pattern, destination));
    }

    for (rule, _, destination) in &compiled {
        let landing = destination.expand("");
        if let Some((matched, _, _)) = compiled
            .iter()
            .find(|(_, pattern, _)| pattern.capture(&landing).is_some())
        {
            errors.push(ValidationError::RedirectCycle {
                rule: rule.source.clone(),
                destination: rule.destination.clone(),
                matched: matched.source.clone(),
            });
        }
    }

    errors
}
