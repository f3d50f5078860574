//! # Error Types
//!
//! Structured error types for tally_core. A failed computation never panics;
//! it reports which field was rejected and why, with enough context for a
//! front-end to highlight the offending input.
//!
//! ## Example
//!
//! ```rust
//! use tally_core::errors::{TallyError, TallyResult};
//!
//! fn validate_distance(distance_km: f64) -> TallyResult<()> {
//!     if distance_km <= 0.0 {
//!         return Err(TallyError::InvalidInput {
//!             field: "distance_km".to_string(),
//!             value: distance_km.to_string(),
//!             reason: "Distance must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tally_core operations
pub type TallyResult<T> = Result<T, TallyError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong, enabling
/// programmatic handling (e.g. the GUI marking a single input card invalid).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TallyError {
    /// An input value is invalid (non-positive, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

impl TallyError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        TallyError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        TallyError::MissingField {
            field: field.into(),
        }
    }

    /// Name of the input field this error points at
    pub fn field(&self) -> &str {
        match self {
            TallyError::InvalidInput { field, .. } => field,
            TallyError::MissingField { field } => field,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TallyError::InvalidInput { .. } => "INVALID_INPUT",
            TallyError::MissingField { .. } => "MISSING_FIELD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = TallyError::invalid_input("distance_km", "-5.0", "Distance must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: TallyError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(TallyError::missing_field("fuel_price_per_l").error_code(), "MISSING_FIELD");
        assert_eq!(
            TallyError::invalid_input("passenger_count", "0", "At least one passenger").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(TallyError::missing_field("mileage_km_per_l").field(), "mileage_km_per_l");
    }
}
