//! Environment-driven configuration.

use std::path::PathBuf;

pub const CATALOG_VAR: &str = "SKINMATCH_CATALOG";
pub const SEARCH_LIMIT_VAR: &str = "SKINMATCH_SEARCH_LIMIT";

pub const DEFAULT_CATALOG_PATH: &str = "catalog.json";
pub const DEFAULT_SEARCH_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON snapshot of the product catalog.
    pub catalog_path: PathBuf,
    /// Maximum number of search suggestions.
    pub search_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a closure over a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog_path = lookup(CATALOG_VAR).map(PathBuf::from).unwrap_or_else(|| {
            tracing::warn!("{CATALOG_VAR} not set; using {DEFAULT_CATALOG_PATH}");
            PathBuf::from(DEFAULT_CATALOG_PATH)
        });

        let search_limit = match lookup(SEARCH_LIMIT_VAR) {
            None => DEFAULT_SEARCH_LIMIT,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid {SEARCH_LIMIT_VAR}; using {DEFAULT_SEARCH_LIMIT}");
                DEFAULT_SEARCH_LIMIT
            }),
        };

        Self {
            catalog_path,
            search_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
        assert_eq!(config.search_limit, DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn reads_overrides_and_ignores_bad_limit() {
        let config = Config::from_lookup(lookup(&[
            (CATALOG_VAR, "/data/ordinary.json"),
            (SEARCH_LIMIT_VAR, "3"),
        ]));
        assert_eq!(config.catalog_path, PathBuf::from("/data/ordinary.json"));
        assert_eq!(config.search_limit, 3);

        let config = Config::from_lookup(lookup(&[(SEARCH_LIMIT_VAR, "many")]));
        assert_eq!(config.search_limit, DEFAULT_SEARCH_LIMIT);
    }
}
