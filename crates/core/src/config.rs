//! Search configuration.

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_PER_PAGE_ENV: &str = "CATALOG_DEFAULT_PER_PAGE";
pub const MAX_PER_PAGE_ENV: &str = "CATALOG_MAX_PER_PAGE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer (got '{value}')")]
    InvalidNumber { var: &'static str, value: String },

    #[error("default_per_page ({default}) exceeds max_per_page ({max})")]
    DefaultAboveMax { default: u64, max: u64 },
}

/// Paging defaults applied when normalizing search requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_per_page: u64,
    pub max_per_page: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_per_page: 15,
            max_per_page: 100,
        }
    }
}

impl SearchConfig {
    /// Read overrides from `CATALOG_DEFAULT_PER_PAGE` / `CATALOG_MAX_PER_PAGE`.
    ///
    /// Unset variables keep their default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            default_per_page: read_positive(&lookup, DEFAULT_PER_PAGE_ENV)?
                .unwrap_or(defaults.default_per_page),
            max_per_page: read_positive(&lookup, MAX_PER_PAGE_ENV)?
                .unwrap_or(defaults.max_per_page),
        };
        config.check()?;
        Ok(config)
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        if self.default_per_page > self.max_per_page {
            return Err(ConfigError::DefaultAboveMax {
                default: self.default_per_page,
                max: self.max_per_page,
            });
        }
        Ok(())
    }
}

fn read_positive(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<u64>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(ConfigError::InvalidNumber { var, value: raw }),
    }
}
