//! # cartage-core: Pure Business Logic for Cartage
//!
//! This crate is the **heart** of Cartage, the material-delivery pricing
//! ledger. It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cartage Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Embedding Application (UI/CLI)                  │   │
//! │  │    Quantity entry ──► Day entry ──► History ──► CSV download   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    cartage-ledger                               │   │
//! │  │    Catalog, LedgerStore, StatisticsEngine, TabularExporter     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cartage-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   expr    │  │  pricing  │  │   │
//! │  │   │  Client   │  │   Money   │  │ evaluate  │  │ price_line│  │   │
//! │  │   │ LineItem  │  │  Decimal  │  │  parser   │  │  totals   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Client, LineItem, ShipmentDay, etc.)
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`expr`] - Restricted arithmetic-expression evaluator
//! - [`pricing`] - Pure pricing computations
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Exact Money**: All monetary values use decimal arithmetic, never binary floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use cartage_core::expr::evaluate;
//! use cartage_core::money::Money;
//! use cartage_core::pricing::price_line;
//!
//! // Operator typed "50 + 30 * 2" into a quantity field
//! let quantity = evaluate("50 + 30 * 2").unwrap();
//!
//! // Price it against the client's per-ton rate
//! let line = price_line("sand", quantity, Money::from_major_minor(12, 0)).unwrap();
//! assert_eq!(line.subtotal, Money::from_major_minor(1320, 0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod expr;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cartage_core::Money` instead of
// `use cartage_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a client or material name.
///
/// ## Business Reason
/// Keeps catalog entries displayable and prevents pathological input;
/// real counterparty names are well under this bound.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum characters accepted by the expression evaluator.
///
/// ## Business Reason
/// Quantity expressions are short ("50 + 30 * 2"); anything near this
/// bound is a paste error, not a delivery quantity.
pub const MAX_EXPRESSION_LEN: usize = 256;
