//! # Error Types
//!
//! Structured error types for sigfig_core. Every failure is reported
//! synchronously at the offending call and carries enough context to fix the
//! input programmatically; no operation ever returns a sentinel value.
//!
//! ## Example
//!
//! ```rust
//! use sigfig_core::errors::{SigFigError, SigFigResult};
//!
//! fn validate_precision(sig_figs: u32) -> SigFigResult<()> {
//!     if sig_figs == 0 {
//!         return Err(SigFigError::InvalidPrecision { sig_figs });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for sigfig_core operations
pub type SigFigResult<T> = Result<T, SigFigError>;

/// Structured error type for significant-figure operations.
///
/// Each variant names what went wrong and on which input, enabling
/// programmatic handling by calling tools.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SigFigError {
    /// Text does not parse as a decimal or scientific-notation numeral
    #[error("Malformed literal '{literal}': {reason}")]
    MalformedLiteral { literal: String, reason: String },

    /// A precision of zero significant figures was supplied
    #[error("Invalid precision: {sig_figs} significant figures (at least 1 required)")]
    InvalidPrecision { sig_figs: u32 },

    /// A NaN or infinite magnitude was handed to a constructor
    #[error("Non-finite magnitude: {value}")]
    NonFiniteMagnitude { value: String },

    /// Argument outside the mathematical domain of a function
    #[error("Domain error in {function}: argument {argument} - {reason}")]
    DomainError {
        function: String,
        argument: String,
        reason: String,
    },

    /// Division by an operand whose magnitude is exactly zero
    #[error("Division by zero-magnitude operand")]
    DivisionByZero,
}

impl SigFigError {
    /// Create a MalformedLiteral error
    pub fn malformed(literal: impl Into<String>, reason: impl Into<String>) -> Self {
        SigFigError::MalformedLiteral {
            literal: literal.into(),
            reason: reason.into(),
        }
    }

    /// Create a NonFiniteMagnitude error
    pub fn non_finite(value: f64) -> Self {
        SigFigError::NonFiniteMagnitude {
            value: value.to_string(),
        }
    }

    /// Create a DomainError
    pub fn domain(function: impl Into<String>, argument: f64, reason: impl Into<String>) -> Self {
        SigFigError::DomainError {
            function: function.into(),
            argument: argument.to_string(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SigFigError::MalformedLiteral { .. } => "MALFORMED_LITERAL",
            SigFigError::InvalidPrecision { .. } => "INVALID_PRECISION",
            SigFigError::NonFiniteMagnitude { .. } => "NON_FINITE_MAGNITUDE",
            SigFigError::DomainError { .. } => "DOMAIN_ERROR",
            SigFigError::DivisionByZero => "DIVISION_BY_ZERO",
        }
    }
}
