//! # cartage-ledger: Collections and Reporting for Cartage
//!
//! This crate owns the mutable collections of the material-delivery ledger
//! and the read-side reporting built on top of them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cartage Data Flow                                │
//! │                                                                         │
//! │  Operator input (raw strings)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cartage-core: expr ──► quantities ──► pricing ──► ClientEntry         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  cartage-ledger (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   store   │  │   stats   │  │  export   │  │   │
//! │  │   │ materials │  │ Shipment- │  │  period   │  │ BOM + CSV │  │   │
//! │  │   │  clients  │  │   Days    │  │ aggregate │  │  writer   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Embedding application (persistence, UI, downloads)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Material and client catalog with rate-table propagation
//! - [`store`] - Shipment days and monthly calculation snapshots
//! - [`stats`] - Period filtering and revenue/tonnage aggregation
//! - [`export`] - Deterministic CSV export with UTF-8 BOM
//! - [`error`] - Ledger error types
//!
//! ## Concurrency Model
//! Single-threaded, synchronous. Every operation is a single-step mutation
//! of an owned in-memory collection; nothing spans an awaitable boundary.
//! Embedding the store in a multi-writer environment requires the embedder
//! to serialize writes — the design assumes at most one writer at a time.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod export;
pub mod stats;
pub mod store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{LedgerError, LedgerResult};
pub use export::export_csv;
pub use stats::{aggregate, filter_by_period, MaterialStats, Stats};
pub use store::LedgerStore;
