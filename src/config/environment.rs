// ABOUTME: Environment configuration for store location, cache sizing, and scoring overrides
// ABOUTME: Parses FITTRACK_* variables with defaults and typed errors for malformed values
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-based configuration

use crate::cache::CacheConfig;
use crate::constants::cache::{DEFAULT_READINESS_CACHE_ENTRIES, TTL_READINESS_SECS};
use crate::constants::storage::{DATA_DIR_NAME, DEFAULT_QUOTA_BYTES, DEFAULT_STORE_FILE};
use crate::errors::{AppError, AppResult};
use fittrack_intelligence::achievements::AchievementCatalog;
use fittrack_intelligence::config::IntelligenceConfig;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Path of the JSON store file
pub const DATA_PATH_VAR: &str = "FITTRACK_DATA_PATH";
/// Readiness cache lifetime in seconds
pub const READINESS_TTL_VAR: &str = "FITTRACK_READINESS_TTL_SECS";
/// Readiness cache capacity
pub const READINESS_CACHE_CAPACITY_VAR: &str = "FITTRACK_READINESS_CACHE_CAPACITY";
/// Store size limit in bytes
pub const STORAGE_QUOTA_VAR: &str = "FITTRACK_STORAGE_QUOTA_BYTES";
/// Optional achievement catalog file
pub const ACHIEVEMENTS_PATH_VAR: &str = "FITTRACK_ACHIEVEMENTS_PATH";
/// Optional readiness base score
pub const READINESS_BASE_VAR: &str = "FITTRACK_READINESS_BASE";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON store file
    pub data_path: PathBuf,
    /// Readiness cache lifetime
    pub readiness_ttl: Duration,
    /// Readiness cache capacity
    pub readiness_cache_capacity: usize,
    /// Store size limit in bytes
    pub storage_quota_bytes: usize,
    /// Achievement catalog file replacing the built-in catalog
    pub achievements_path: Option<PathBuf>,
    /// Readiness base score override
    pub readiness_base: Option<f64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            readiness_ttl: Duration::from_secs(TTL_READINESS_SECS),
            readiness_cache_capacity: DEFAULT_READINESS_CACHE_ENTRIES,
            storage_quota_bytes: DEFAULT_QUOTA_BYTES,
            achievements_path: None,
            readiness_base: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a config error when a numeric variable does not parse
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        let config = Self {
            data_path: env::var(DATA_PATH_VAR).map_or(defaults.data_path, PathBuf::from),
            readiness_ttl: parse_var::<u64>(READINESS_TTL_VAR)?
                .map_or(defaults.readiness_ttl, Duration::from_secs),
            readiness_cache_capacity: parse_var(READINESS_CACHE_CAPACITY_VAR)?
                .unwrap_or(defaults.readiness_cache_capacity),
            storage_quota_bytes: parse_var(STORAGE_QUOTA_VAR)?
                .unwrap_or(defaults.storage_quota_bytes),
            achievements_path: env::var(ACHIEVEMENTS_PATH_VAR).ok().map(PathBuf::from),
            readiness_base: parse_var(READINESS_BASE_VAR)?,
        };
        info!(
            data_path = %config.data_path.display(),
            readiness_ttl_secs = config.readiness_ttl.as_secs(),
            quota_bytes = config.storage_quota_bytes,
            "Configuration loaded from environment"
        );
        Ok(config)
    }

    /// Readiness cache settings
    #[must_use]
    pub const fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            max_entries: self.readiness_cache_capacity,
            ttl: self.readiness_ttl,
        }
    }

    /// Intelligence configuration with any environment override applied
    ///
    /// # Errors
    ///
    /// Returns a config error when the override produces an invalid table
    pub fn intelligence_config(&self) -> AppResult<IntelligenceConfig> {
        let mut config = IntelligenceConfig::default();
        if let Some(base) = self.readiness_base {
            config = config.with_base_score(base);
        }
        config.validate()?;
        Ok(config)
    }

    /// Achievement catalog from `achievements_path`, or the built-in one
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed
    pub fn achievement_catalog(&self) -> AppResult<AchievementCatalog> {
        let Some(path) = &self.achievements_path else {
            return Ok(AchievementCatalog::default());
        };
        debug!(path = %path.display(), "Loading achievement catalog");
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!(
                "Cannot read achievement catalog {}: {e}",
                path.display()
            ))
        })?;
        AchievementCatalog::from_json(&json)
    }
}

/// Default store path under the platform data directory
#[must_use]
pub fn default_data_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
        .join(DEFAULT_STORE_FILE)
}

fn parse_var<T: FromStr>(key: &str) -> AppResult<Option<T>> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map(Some).map_err(|_| {
            AppError::config_invalid(format!("{key} has an invalid value '{raw}'"))
        }),
        Err(_) => Ok(None),
    }
}
