//! # Domain Types
//!
//! Core domain types used throughout Cartage.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Client      │   │   ShipmentDay   │   │ MonthlyCalc.    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name           │   │  date           │   │  month, year    │       │
//! │  │  rates: Vec<    │   │  client_entries │   │  client_entries │       │
//! │  │   MaterialRate> │   │  day_total      │   │  total (frozen) │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  MaterialRate   │   │   ClientEntry   │   │    LineItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  material       │   │  client_id      │   │  material       │       │
//! │  │  price (€/ton)  │   │  client_name ❄  │   │  quantity (t)   │       │
//! │  └─────────────────┘   │  line_items     │   │  price ❄        │       │
//! │                        │  client_total   │   │  subtotal       │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ❄ = snapshot frozen at save time                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `ClientEntry.client_name` and `LineItem.{material, price}` are copies
//! taken when a day is saved. Later catalog edits (renames, rate changes,
//! deletions) never rewrite history: a saved day is an immutable fact.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Catalog Types
// =============================================================================

/// One material's per-ton price inside a client's rate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRate {
    /// Material name (catalog key).
    pub material: String,

    /// Agreed price per ton for this client.
    pub price: Money,
}

/// A counterparty with its own per-material unit prices.
///
/// The rate table is ordered (catalog material order) and complete: every
/// material known to the catalog has an entry, defaulting to a zero price
/// when no rate has been agreed yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Per-material prices, one entry per catalog material.
    pub rates: Vec<MaterialRate>,
}

impl Client {
    /// Looks up this client's rate for a material, if the material is
    /// still on the rate table.
    pub fn rate_for(&self, material: &str) -> Option<Money> {
        self.rates
            .iter()
            .find(|r| r.material == material)
            .map(|r| r.price)
    }
}

// =============================================================================
// Ledger Types
// =============================================================================

/// One priced (material, quantity) pair within a client's entry for a day.
///
/// Uses the snapshot pattern: `material` and `price` are frozen copies of
/// the catalog state at save time.
///
/// ## Invariant
/// `subtotal == quantity × price`, exactly. Zero-quantity items are never
/// persisted; the pricing layer filters them out before a record is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Material name at time of saving (frozen).
    pub material: String,

    /// Delivered quantity in tons. Always positive in persisted records.
    pub quantity: Decimal,

    /// Price per ton at time of saving (frozen).
    pub price: Money,

    /// Exact product quantity × price.
    pub subtotal: Money,
}

/// All of one client's priced deliveries for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientEntry {
    /// Catalog client id this entry was built from.
    pub client_id: String,

    /// Client name at time of saving (frozen). Later renames do not
    /// retroactively change history.
    pub client_name: String,

    /// Priced line items, rate-table order, zero quantities filtered out.
    pub line_items: Vec<LineItem>,

    /// Sum of line item subtotals.
    pub client_total: Money,
}

/// The ledger record of all deliveries made on one calendar date.
///
/// ## Invariant
/// `client_entries` is non-empty and every entry contains at least one
/// positive-quantity line item; `day_total == Σ client_total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentDay {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Calendar date of the deliveries (no time-of-day semantics).
    pub date: NaiveDate,

    /// Per-client entries, in the order the operator recorded them.
    pub client_entries: Vec<ClientEntry>,

    /// Sum of client totals.
    pub day_total: Money,
}

/// A frozen, independently-saved aggregate snapshot for reporting.
///
/// Not derived from or linked to any [`ShipmentDay`]: the total is stored
/// exactly as the caller's aggregation produced it and is immune to later
/// catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCalculation {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Month label (name or "1".."12", as the operator entered it).
    pub month: String,

    /// Calendar year.
    pub year: i32,

    /// Optional free-text note.
    pub description: Option<String>,

    /// Per-client entries at the moment of saving.
    pub client_entries: Vec<ClientEntry>,

    /// Caller-supplied grand total, frozen at save time.
    pub total: Money,

    /// When the snapshot was saved.
    pub saved_at: DateTime<Utc>,
}

// =============================================================================
// Period Filter
// =============================================================================

/// A predicate selecting shipment days relative to the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// No filtering.
    #[default]
    All,
    /// Date within the last 7 days (inclusive).
    Week,
    /// Same calendar month and year as today.
    Month,
    /// Same calendar year as today.
    Year,
}

impl Period {
    /// Parses a period keyword. Unknown values behave as [`Period::All`] —
    /// a permissive default, so a stale or mistyped filter shows everything
    /// rather than nothing.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Period::Week,
            "month" => Period::Month,
            "year" => Period::Year,
            _ => Period::All,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
