//! Route path constants. Single source of truth for page paths.

use crate::content::catalog::SERVICE_PAGES;
use crate::content::privacy::PRIVACY_PATH;

pub const HOME: &str = "/";
pub const HEALTH: &str = "/healthz";
pub const SERVICES: &str = "/services";
pub const SERVICE_DETAIL: &str = "/services/{slug}";
pub const PRIVACY: &str = PRIVACY_PATH;

/// Concrete paths already served by a page. The legacy page may not take one.
pub fn reserved_paths() -> Vec<String> {
    let mut paths = vec![
        HOME.to_string(),
        HEALTH.to_string(),
        SERVICES.to_string(),
        PRIVACY.to_string(),
    ];
    paths.extend(SERVICE_PAGES.iter().map(|page| page.path()));
    paths
}
