//! # Catalog Configuration
//!
//! Settings for the home feed: page size and where the sources read from.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     NEARNOW_PAGE_SIZE=24                                               │
//! │     NEARNOW_PRODUCTS_PATH=./data/products.json                         │
//! │     NEARNOW_CATEGORIES_PATH=./data/categories.json                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/nearnow/home.toml (Linux)                                │
//! │     ~/Library/Application Support/com.nearnow.nearnow/home.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     page_size = 12, ./data/products.json, ./data/categories.json       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # home.toml
//! [feed]
//! page_size = 12
//!
//! [source]
//! products_path = "data/products.json"
//! categories_path = "data/categories.json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use nearnow_core::validation::validate_page_size;
use nearnow_core::DEFAULT_PAGE_SIZE;

use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Feed Settings
// =============================================================================

/// Pagination settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSettings {
    /// Products revealed initially and per "Load More".
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for FeedSettings {
    fn default() -> Self {
        FeedSettings {
            page_size: default_page_size(),
        }
    }
}

// =============================================================================
// Source Settings
// =============================================================================

/// Where the JSON sources read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(default = "default_products_path")]
    pub products_path: PathBuf,

    #[serde(default = "default_categories_path")]
    pub categories_path: PathBuf,
}

fn default_products_path() -> PathBuf {
    PathBuf::from("data/products.json")
}

fn default_categories_path() -> PathBuf {
    PathBuf::from("data/categories.json")
}

impl Default for SourceSettings {
    fn default() -> Self {
        SourceSettings {
            products_path: default_products_path(),
            categories_path: default_categories_path(),
        }
    }
}

// =============================================================================
// Main Catalog Configuration
// =============================================================================

/// Complete home feed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub feed: FeedSettings,

    #[serde(default)]
    pub source: SourceSettings,
}

impl CatalogConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (home.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading catalog config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load catalog config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> CatalogResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| CatalogError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Catalog config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CatalogResult<()> {
        validate_page_size(self.feed.page_size)?;

        if self.source.products_path.as_os_str().is_empty() {
            return Err(CatalogError::InvalidConfig(
                "products_path must not be empty".into(),
            ));
        }
        if self.source.categories_path.as_os_str().is_empty() {
            return Err(CatalogError::InvalidConfig(
                "categories_path must not be empty".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(size) = lookup("NEARNOW_PAGE_SIZE") {
            match size.parse::<usize>() {
                Ok(n) => {
                    debug!(page_size = n, "Overriding page size from environment");
                    self.feed.page_size = n;
                }
                Err(_) => warn!(value = %size, "Ignoring non-numeric NEARNOW_PAGE_SIZE"),
            }
        }

        if let Some(path) = lookup("NEARNOW_PRODUCTS_PATH") {
            debug!(path = %path, "Overriding products path from environment");
            self.source.products_path = PathBuf::from(path);
        }

        if let Some(path) = lookup("NEARNOW_CATEGORIES_PATH") {
            debug!(path = %path, "Overriding categories path from environment");
            self.source.categories_path = PathBuf::from(path);
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "nearnow", "nearnow")
            .map(|dirs| dirs.config_dir().join("home.toml"))
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.feed.page_size
    }
}
