use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use larder_core::catalog::{
    CatalogConfig, DEFAULT_COCKTAILDB_URL, DEFAULT_MEALDB_URL, DEFAULT_SPOONACULAR_URL,
};
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "public";

/// `DATABASE_URL` value that selects the in-process store.
pub const MEMORY_DATABASE: &str = "memory";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub http_timeout: Option<Duration>,
    pub catalog: CatalogConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr = try_load(var("LARDER_BIND_ADDR"), "LARDER_BIND_ADDR", DEFAULT_BIND_ADDR);

        let http_timeout = var("LARDER_HTTP_TIMEOUT_SECS").and_then(|v| match v.parse::<u64>() {
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(e) => {
                warn!("Invalid LARDER_HTTP_TIMEOUT_SECS value: {e}, requests will not time out");
                None
            }
        });

        let spoonacular_api_key = var("SPOONACULAR_API_KEY");
        if spoonacular_api_key.is_none() {
            warn!("SPOONACULAR_API_KEY not set, /api/meal will return no results");
        }

        Ok(Self {
            database_url,
            bind_addr,
            static_dir: var("LARDER_STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
            http_timeout,
            catalog: CatalogConfig {
                mealdb_url: var("LARDER_MEALDB_URL")
                    .unwrap_or_else(|| DEFAULT_MEALDB_URL.to_string()),
                cocktaildb_url: var("LARDER_COCKTAILDB_URL")
                    .unwrap_or_else(|| DEFAULT_COCKTAILDB_URL.to_string()),
                spoonacular_url: var("LARDER_SPOONACULAR_URL")
                    .unwrap_or_else(|| DEFAULT_SPOONACULAR_URL.to_string()),
                spoonacular_api_key,
            },
        })
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_url == MEMORY_DATABASE
    }
}

fn try_load<T: FromStr>(value: Option<String>, key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let parse_default = || {
        default
            .parse()
            .unwrap_or_else(|e| panic!("default for {key} does not parse: {e}"))
    };

    match value {
        None => {
            info!("{key} not set, using default: {default}");
            parse_default()
        }
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            parse_default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_database_url_required() {
        let result = Config::from_lookup(lookup(&[]));
        assert!(matches!(result, Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://x")])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert!(config.http_timeout.is_none());
        assert_eq!(config.catalog.mealdb_url, DEFAULT_MEALDB_URL);
        assert!(config.catalog.spoonacular_api_key.is_none());
        assert!(!config.uses_memory_store());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "memory"),
            ("LARDER_BIND_ADDR", "127.0.0.1:8080"),
            ("LARDER_HTTP_TIMEOUT_SECS", "15"),
            ("SPOONACULAR_API_KEY", "abc"),
            ("LARDER_COCKTAILDB_URL", "http://drinks.test"),
        ]))
        .unwrap();
        assert!(config.uses_memory_store());
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.http_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.catalog.spoonacular_api_key.as_deref(), Some("abc"));
        assert_eq!(config.catalog.cocktaildb_url, "http://drinks.test");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "memory"),
            ("LARDER_BIND_ADDR", "not an address"),
            ("LARDER_HTTP_TIMEOUT_SECS", "soon"),
            ("SPOONACULAR_API_KEY", "  "),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert!(config.http_timeout.is_none());
        assert!(config.catalog.spoonacular_api_key.is_none());
    }
}
