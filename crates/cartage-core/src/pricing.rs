//! # Pricing Module
//!
//! Pure pricing computations: quantity + rate → line item, line items →
//! client total, client entries → day total.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Pricing Computation                               │
//! │                                                                         │
//! │  Operator quantity ──► price_line(material, qty, rate)                 │
//! │                              │                                          │
//! │                              ├── qty <= 0 → None (line dropped)        │
//! │                              │                                          │
//! │                              └── Some(LineItem { subtotal = qty×rate })│
//! │                                         │                               │
//! │  build_client_entry ────────────────────┤                               │
//! │       │                                 ▼                               │
//! │       │                     client_total = Σ subtotal                  │
//! │       ▼                                                                 │
//! │  total_day = Σ client_total                                            │
//! │                                                                         │
//! │  Dropping qty <= 0 lines and empty entries keeps ledger records        │
//! │  sparse: a saved day only contains what was actually delivered.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure, side-effect-free and deterministic.

use rust_decimal::Decimal;

use crate::money::Money;
use crate::types::{Client, ClientEntry, LineItem};

/// Quantities keyed by material name, as collected from the entry form.
pub type Quantities<'a> = &'a [(String, Decimal)];

// =============================================================================
// Line Pricing
// =============================================================================

/// Prices one (material, quantity) pair against a per-ton rate.
///
/// Returns `None` when `quantity <= 0`: the line is omitted from the record
/// rather than persisted as a zero-value row.
///
/// ## Example
/// ```rust
/// use cartage_core::money::Money;
/// use cartage_core::pricing::price_line;
/// use rust_decimal::Decimal;
///
/// let line = price_line("sand", Decimal::from(110), Money::from_major_minor(12, 0)).unwrap();
/// assert_eq!(line.subtotal, Money::from_major_minor(1320, 0));
///
/// assert!(price_line("sand", Decimal::ZERO, Money::from_major_minor(12, 0)).is_none());
/// ```
pub fn price_line(material: &str, quantity: Decimal, price: Money) -> Option<LineItem> {
    if quantity <= Decimal::ZERO {
        return None;
    }

    Some(LineItem {
        material: material.to_string(),
        quantity,
        price,
        subtotal: price.multiply_quantity(quantity),
    })
}

// =============================================================================
// Totalling
// =============================================================================

/// Sums line item subtotals. An empty slice totals zero.
pub fn total_line_items(items: &[LineItem]) -> Money {
    items.iter().map(|item| item.subtotal).sum()
}

/// Sums client totals into a day total.
pub fn total_day(entries: &[ClientEntry]) -> Money {
    entries.iter().map(|entry| entry.client_total).sum()
}

// =============================================================================
// Entry Building
// =============================================================================

/// Builds one client's entry for a day from the quantities the operator
/// entered.
///
/// Walks the client's rate table in order (so line items follow the rate
/// table, not the typing order), prices every positive quantity, and
/// snapshots the client name. Returns `None` when no positive-quantity
/// line survives — empty entries are dropped before a day is built, never
/// persisted as zero-value records.
///
/// ## Example
/// ```rust
/// use cartage_core::money::Money;
/// use cartage_core::pricing::build_client_entry;
/// use cartage_core::types::{Client, MaterialRate};
/// use rust_decimal::Decimal;
///
/// let client = Client {
///     id: "1".to_string(),
///     name: "Athens Constructions".to_string(),
///     rates: vec![MaterialRate {
///         material: "sand".to_string(),
///         price: Money::from_major_minor(12, 0),
///     }],
/// };
///
/// let quantities = vec![("sand".to_string(), Decimal::from(110))];
/// let entry = build_client_entry(&client, &quantities).unwrap();
/// assert_eq!(entry.client_total, Money::from_major_minor(1320, 0));
/// ```
pub fn build_client_entry(client: &Client, quantities: Quantities<'_>) -> Option<ClientEntry> {
    let line_items: Vec<LineItem> = client
        .rates
        .iter()
        .filter_map(|rate| {
            let quantity = quantities
                .iter()
                .find(|(material, _)| *material == rate.material)
                .map(|(_, q)| *q)
                .unwrap_or(Decimal::ZERO);
            price_line(&rate.material, quantity, rate.price)
        })
        .collect();

    if line_items.is_empty() {
        return None;
    }

    let client_total = total_line_items(&line_items);
    Some(ClientEntry {
        client_id: client.id.clone(),
        client_name: client.name.clone(),
        line_items,
        client_total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
