//! # Validation Module
//!
//! Input validation for feed settings.
//!
//! ## Usage
//! ```rust
//! use nearnow_core::validation::validate_page_size;
//!
//! assert!(validate_page_size(12).is_ok());
//! assert!(validate_page_size(0).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a page size.
///
/// Any positive size is accepted; a page larger than the collection just
/// shows everything.
///
/// ## Rules
/// - Must be at least 1 (a zero page would never reveal anything)
pub fn validate_page_size(page_size: usize) -> ValidationResult<()> {
    if page_size == 0 {
        return Err(ValidationError::MustBePositive {
            field: "page_size".to_string(),
        });
    }

    Ok(())
}
