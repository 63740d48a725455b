//! # Error Types
//!
//! Domain-specific error types for rentora-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rentora-core errors (this file)                                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  rentora-db errors (separate crate)                                    │
//! │  ├── DbError          - Database operation failures (lookup misses    │
//! │  │                      included: NotFound lives there, not here)     │
//! │  └── BookingError     - Invalid(ValidationError) | Db(DbError)         │
//! │                                                                         │
//! │  Flow: ValidationError → BookingError → API layer → caller             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, id, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs: no mutation is
/// ever attempted after one of these is raised.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Date range is inverted (end before start).
    #[error("end date {end} is before start date {start}")]
    InvertedDateRange { start: String, end: String },

    /// A collection that must not be empty is empty.
    #[error("{field} must not be empty")]
    Empty { field: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "collateral_ref".to_string(),
        };
        assert_eq!(err.to_string(), "collateral_ref is required");

        let err = ValidationError::InvertedDateRange {
            start: "2025-01-05".to_string(),
            end: "2025-01-01".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "end date 2025-01-01 is before start date 2025-01-05"
        );
    }

    #[test]
    fn test_out_of_range_message() {
        let err = ValidationError::OutOfRange {
            field: "price_per_day".to_string(),
            min: 1,
            max: 100_000_000,
        };
        assert_eq!(
            err.to_string(),
            "price_per_day must be between 1 and 100000000"
        );
    }
}
