//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use super::catalog::EditionCatalog;
use super::content::Edition;

/// Default `tracing` filter when neither `RUST_LOG` nor `LOG_FILTER` is set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Edition served at `/`, by slug (e.g. `2025`).
    /// Falls back to the newest edition when unset or unknown.
    pub default_edition: Option<String>,

    /// `tracing` env-filter directive
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            default_edition: non_empty("DEFAULT_EDITION"),
            log_filter: non_empty("RUST_LOG")
                .or_else(|| non_empty("LOG_FILTER"))
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Edition to serve at `/`
    pub fn resolve_edition<'a>(&self, catalog: &'a EditionCatalog) -> &'a Edition {
        if let Some(slug) = self.default_edition.as_deref() {
            if catalog.get(slug).is_none() {
                tracing::warn!(
                    "DEFAULT_EDITION `{}` not found, using latest edition `{}`",
                    slug,
                    catalog.latest().slug
                );
            }
        }
        catalog.resolve_default(self.default_edition.as_deref())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no process env mutation - thread safe)
    // ========================================================================

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = config_from(&[]);

        assert!(config.default_edition.is_none());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = config_from(&[("DEFAULT_EDITION", "2024"), ("RUST_LOG", "debug")]);

        assert_eq!(config.default_edition, Some("2024".to_string()));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_rust_log_wins_over_log_filter() {
        let config = config_from(&[("RUST_LOG", "warn"), ("LOG_FILTER", "trace")]);
        assert_eq!(config.log_filter, "warn");

        let config = config_from(&[("LOG_FILTER", "trace")]);
        assert_eq!(config.log_filter, "trace");
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = config_from(&[("DEFAULT_EDITION", "  "), ("RUST_LOG", "")]);

        assert!(config.default_edition.is_none());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_default_edition_resolution() {
        let catalog = EditionCatalog::embedded().expect("embedded content should load");

        let config = config_from(&[("DEFAULT_EDITION", "2024")]);
        assert_eq!(config.resolve_edition(catalog).slug, "2024");

        let config = config_from(&[("DEFAULT_EDITION", "1999")]);
        assert_eq!(config.resolve_edition(catalog).slug, "2025");

        let config = config_from(&[]);
        assert_eq!(config.resolve_edition(catalog).slug, "2025");
    }
}
