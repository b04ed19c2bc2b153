//! Arena configuration from the environment

use std::path::PathBuf;

use tracing::warn;

pub const CATALOG_ENV: &str = "POKEDUEL_CATALOG";
pub const PAGE_SIZE_ENV: &str = "POKEDUEL_PAGE_SIZE";

pub const DEFAULT_CATALOG_PATH: &str = "pokemon.csv";
pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaConfig {
    /// CSV file the catalog is loaded from
    pub catalog_path: PathBuf,

    /// Listing page size when the caller gives none
    pub page_size: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ArenaConfig {
    /// Read `POKEDUEL_CATALOG` and `POKEDUEL_PAGE_SIZE`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or invalid values keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(CATALOG_ENV).filter(|p| !p.trim().is_empty()) {
            config.catalog_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(PAGE_SIZE_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.page_size = size,
                _ => warn!(
                    key = PAGE_SIZE_ENV,
                    value = %raw,
                    fallback = DEFAULT_PAGE_SIZE,
                    "Ignoring invalid page size"
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ArenaConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ArenaConfig::default());
        assert_eq!(config.catalog_path, PathBuf::from("pokemon.csv"));
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_overrides() {
        let config = ArenaConfig::from_lookup(lookup(&[
            (CATALOG_ENV, "/data/dex.csv"),
            (PAGE_SIZE_ENV, "50"),
        ]));
        assert_eq!(config.catalog_path, PathBuf::from("/data/dex.csv"));
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn test_invalid_page_size_keeps_default() {
        let config = ArenaConfig::from_lookup(lookup(&[(PAGE_SIZE_ENV, "lots")]));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);

        let config = ArenaConfig::from_lookup(lookup(&[(PAGE_SIZE_ENV, "0")]));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }
}
