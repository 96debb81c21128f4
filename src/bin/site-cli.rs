use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use services_site::config::{load_config, ConfigError, SiteConfig};
use services_site::content::SERVICE_PAGES;
use services_site::routing::Redirector;

#[derive(Parser)]
#[command(name = "site-cli")]
#[command(about = "Offline inspection tool for the services site", long_about = None)]
struct Cli {
    /// Configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show where a path would be redirected
    Resolve {
        /// Request path, optionally with a query string
        path: String,
    },
    /// Validate the configuration and print a summary
    Check,
    /// List every page route
    Pages,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(ConfigError::Validation(errors)) => {
                eprintln!("Error: {} has {} problem(s)", path.display(), errors.len());
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        },
        None => SiteConfig::default(),
    };

    match cli.command {
        Commands::Resolve { path } => {
            let redirector = Redirector::from_config(&config.redirects.rules)
                .map_err(ConfigError::Validation)?;
            let uri: axum::http::Uri = path.parse()?;
            let result = match redirector.resolve_uri(&uri) {
                Some(r) if config.redirects.enabled => {
                    let status = if r.permanent { 308 } else { 307 };
                    json!({
                        "path": path,
                        "location": r.location,
                        "status": status,
                        "rule": r.rule,
                    })
                }
                _ => json!({ "path": path, "redirect": Value::Null }),
            };
            print_json(&result)?;
        }
        Commands::Check => {
            print_json(&json!({
                "valid": true,
                "bind_address": config.listener.bind_address,
                "redirects_enabled": config.redirects.enabled,
                "rules": config.redirects.rules,
                "legacy_page": config.legacy.enabled.then_some(&config.legacy.path),
            }))?;
        }
        Commands::Pages => {
            let pages: Vec<Value> = SERVICE_PAGES
                .iter()
                .map(|page| {
                    json!({
                        "path": page.path(),
                        "title": page.title,
                        "services": page.services.len(),
                    })
                })
                .collect();
            print_json(&Value::Array(pages))?;
        }
    }

    Ok(())
}

fn print_json(value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
