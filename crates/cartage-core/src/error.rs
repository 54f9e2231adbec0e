//! # Error Types
//!
//! Domain-specific error types for cartage-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cartage-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors (incl. InvalidExpression)│
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  cartage-ledger errors (separate crate)                                │
//! │  └── LedgerError      - Catalog/store operation failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → LedgerError → Embedding app       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (material name, offending text, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every error is recoverable at the input boundary; nothing here is fatal

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They are reported synchronously to the immediate caller and never retried:
/// everything in this crate is in-memory and deterministic.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A quantity expression could not be evaluated.
    ///
    /// ## When This Occurs
    /// - Disallowed characters (letters, semicolons — the security boundary)
    /// - Malformed arithmetic (`"5 + * 2"`, unbalanced parentheses)
    /// - Division by zero
    ///
    /// The caller re-prompts the operator; the bad input is never stored.
    #[error("Invalid expression: {reason}")]
    InvalidExpression { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Shorthand constructor for [`CoreError::InvalidExpression`].
    pub fn invalid_expression(reason: impl Into<String>) -> Self {
        CoreError::InvalidExpression {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
