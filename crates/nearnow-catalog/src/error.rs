//! # Catalog Error Types
//!
//! Error types for feed loading and configuration.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │     Fetch       │  │  Configuration  │  │       I/O & Parsing     │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Fetch          │  │  InvalidConfig  │  │  Io                     │ │
//! │  │  FetchInProgress│  │  ConfigSave     │  │  Json / Toml            │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Only Fetch reaches the view as a "Failed to load data" notification;  │
//! │  none of these are fatal.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use nearnow_core::ValidationError;

use crate::source::SourceError;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog error type.
#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Fetch Errors
    // =========================================================================
    /// One or both source fetches failed; nothing was applied.
    #[error(transparent)]
    Fetch(#[from] FetchFailure),

    /// A load was requested while another one is still in flight.
    #[error("A feed load is already in progress")]
    FetchInProgress,

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid configuration value.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// Page size or another setting failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // =========================================================================
    // I/O & Parsing Errors
    // =========================================================================
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl CatalogError {
    /// Returns true if this error came from the product/category fetch.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, CatalogError::Fetch(_))
    }
}

// =============================================================================
// Fetch Failure
// =============================================================================

/// One or more source fetches did not complete successfully.
///
/// The controller does not interpret the causes; they are carried for
/// display and debugging only.
#[derive(Debug, Error)]
#[error("Failed to load feed: {}", describe(.causes))]
pub struct FetchFailure {
    causes: Vec<SourceError>,
}

fn describe(causes: &[SourceError]) -> String {
    causes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl FetchFailure {
    pub(crate) fn new(causes: Vec<SourceError>) -> Self {
        FetchFailure { causes }
    }

    /// The individual source failures.
    pub fn causes(&self) -> &[SourceError] {
        &self.causes
    }

    /// Returns true if the source with this name failed.
    pub fn failed(&self, source_name: &str) -> bool {
        self.causes.iter().any(|c| c.source_name() == source_name)
    }
}
