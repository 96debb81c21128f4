//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::SiteConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    tracing::debug!(
        path = %path.display(),
        rules = config.redirects.rules.len(),
        "Configuration file parsed"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.redirects.rules.len(), 2);
        assert!(config.redirects.enabled);
    }

    #[test]
    fn test_example_file_is_valid() {
        let config = parse_config(include_str!("../../site.example.toml")).unwrap();
        assert_eq!(config.redirects.rules, SiteConfig::default().redirects.rules);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[listener]
bind_address = "127.0.0.1:3000"

[observability]
log_format = "json"

[site]
base_url = "https://example.com"

[redirects]
permanent_max_age_secs = 600

[[redirects.rules]]
source = "/blog/*"
destination = "/news/*"

[[redirects.rules]]
source = "/careers"
destination = "/about"
permanent = false
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:3000");
        assert_eq!(
            config.observability.log_format,
            crate::config::schema::LogFormat::Json
        );
        assert_eq!(config.redirects.permanent_max_age_secs, 600);
        assert_eq!(config.redirects.rules.len(), 2);
        assert!(config.redirects.rules[0].permanent);
        assert!(!config.redirects.rules[1].permanent);
    }

    #[test]
    fn test_invalid_rules_rejected() {
        let err = parse_config(
            r#"
[[redirects.rules]]
source = "/a"
destination = "/b"

[[redirects.rules]]
source = "/b"
destination = "/a"
"#,
        )
        .unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/site.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_syntax_error() {
        let err = parse_config("[listener\nbind_address = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
