//! # Ledger Error Types
//!
//! Error types for catalog and store operations.
//!
//! Every error is reported synchronously to the immediate caller and is
//! rejected *before* any collection mutation: a failed operation leaves
//! both the catalog and the ledger exactly as they were.

use thiserror::Error;

use cartage_core::error::ValidationError;

// =============================================================================
// Ledger Error
// =============================================================================

/// Errors from catalog and ledger store operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A save-day operation had no positive-quantity line left after
    /// filtering.
    ///
    /// ## When This Occurs
    /// - Every quantity the operator entered was zero or negative
    /// - All selected clients produced empty entries
    ///
    /// The caller informs the operator; nothing is persisted.
    #[error("Day has no positive-quantity line items")]
    EmptyDay,

    /// Shipment day not found.
    #[error("Shipment day not found: {0}")]
    DayNotFound(String),

    /// Monthly calculation not found.
    #[error("Monthly calculation not found: {0}")]
    MonthlyNotFound(String),

    /// Client not found in the catalog.
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    /// Material not found in the catalog.
    #[error("Material not found: {0}")]
    MaterialNotFound(String),

    /// Adding or renaming a material to a name that already exists.
    #[error("Material '{0}' already exists")]
    DuplicateMaterial(String),

    /// Input validation failure (wraps the core crate's error).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// Unit Tests
// =============================================================================
