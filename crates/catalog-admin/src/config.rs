//! Configuration loaded with Figment.
//!
//! Sources, lowest priority first:
//! 1. built-in defaults ([`CatalogConfig::default`])
//! 2. a TOML file (`catalog.toml` unless told otherwise), if it exists
//! 3. `CATALOG_`-prefixed environment variables, e.g. `CATALOG_PAGE_SIZE=50`
//!
//! Field names contain underscores, so environment keys are not split into nested
//! sections: `CATALOG_DEFAULT_LANG` maps to `default_lang`.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use resource_framework::PaginatedLister;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";
pub const ENV_PREFIX: &str = "CATALOG_";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),
    #[error("default_lang can not be empty")]
    EmptyDefaultLang,
    #[error("page_size must be greater than 0")]
    ZeroPageSize,
    #[error("channel_capacity must be greater than 0")]
    ZeroChannelCapacity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Locale used when a listing doesn't ask for one. Owner listings always use it.
    pub default_lang: String,
    /// Items per listing page.
    pub page_size: u64,
    /// Request buffer of every resource actor.
    pub channel_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_lang: "en".to_string(),
            page_size: 25,
            channel_capacity: 32,
        }
    }
}

impl CatalogConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load from a specific file; a missing file just leaves the defaults in place.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_figment(
            Figment::new()
                .merge(Serialized::defaults(Self::default()))
                .merge(Toml::file(path.as_ref()))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(Box::new)?;
        config.validate()?;
        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_lang.trim().is_empty() {
            return Err(ConfigError::EmptyDefaultLang);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::ZeroChannelCapacity);
        }
        Ok(())
    }

    pub fn lister(&self) -> PaginatedLister {
        PaginatedLister::new(self.page_size)
    }
}
