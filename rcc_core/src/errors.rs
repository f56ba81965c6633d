//! # Error Types
//!
//! Structured error types for rcc_core. Every failure a front end can hit is
//! one of these variants, so the GUI and CLI can show a message instead of
//! crashing.
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_mm: f64) -> CalcResult<()> {
//!     if width_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "width_mm",
//!             width_mm.to_string(),
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_width(-5.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rcc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-numeric, non-positive, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The section would be over-reinforced. Doubly reinforced design is not
    /// supported, so the section has to be redesigned by the user.
    #[error("Not implemented for this input: {calculation} - {reason}")]
    OverReinforced {
        calculation: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an OverReinforced error
    pub fn over_reinforced(calculation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::OverReinforced {
            calculation: calculation.into(),
            reason: reason.into(),
        }
    }

    /// Whether the user can fix this by editing an input field
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::OverReinforced { .. } => "OVER_REINFORCED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("fck_mpa", "abc", "Please enter valid numbers.");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_input("b", "0", "zero").error_code(), "INVALID_INPUT");
        assert_eq!(
            CalcError::over_reinforced("Ast required", "Mu > Mu_lim").error_code(),
            "OVER_REINFORCED"
        );
    }

    #[test]
    fn test_over_reinforced_message() {
        let error = CalcError::over_reinforced("Moment of resistance", "xu >= xu_lim");
        assert_eq!(
            error.to_string(),
            "Not implemented for this input: Moment of resistance - xu >= xu_lim"
        );
        assert!(!error.is_recoverable());
    }
}
