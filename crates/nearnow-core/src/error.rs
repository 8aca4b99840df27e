//! # Error Types
//!
//! Domain-specific error types for nearnow-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  nearnow-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  nearnow-catalog errors (separate crate)                               │
//! │  └── CatalogError     - Fetch, config and I/O failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError / CatalogError → View notification  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core feed logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Unknown load state name (e.g. from a config file or a client message).
    #[error("Unknown load state: '{0}'. Valid options: idle, loading, error")]
    UnknownLoadState(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
