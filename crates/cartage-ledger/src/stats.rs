//! # Statistics Engine
//!
//! Period filtering and revenue/tonnage aggregation over the ledger's
//! shipment days.
//!
//! Aggregation is a pure fold over the filtered day sequence: a given day
//! contributes to `by_client`/`by_material` once per (client, material)
//! line present in it, and nothing else feeds the numbers.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cartage_core::types::{Period, ShipmentDay};
use cartage_core::Money;

// =============================================================================
// Period Filtering
// =============================================================================

/// Filters shipment days by period relative to `today`, sorted descending
/// by date.
///
/// - [`Period::All`]: every day.
/// - [`Period::Week`]: date ≥ today − 7 days (inclusive).
/// - [`Period::Month`]: same calendar month AND year as `today` — a day in
///   another month is excluded even on the same day-of-month.
/// - [`Period::Year`]: same calendar year as `today`.
pub fn filter_by_period(days: &[ShipmentDay], period: Period, today: NaiveDate) -> Vec<ShipmentDay> {
    let mut sorted: Vec<ShipmentDay> = days.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    match period {
        Period::All => sorted,
        Period::Week => {
            let week_ago = today.checked_sub_days(Days::new(7)).unwrap_or(NaiveDate::MIN);
            sorted.retain(|day| day.date >= week_ago);
            sorted
        }
        Period::Month => {
            sorted.retain(|day| {
                day.date.month() == today.month() && day.date.year() == today.year()
            });
            sorted
        }
        Period::Year => {
            sorted.retain(|day| day.date.year() == today.year());
            sorted
        }
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Tonnage and revenue accumulated for one material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialStats {
    /// Total delivered quantity in tons.
    pub tonnage: Decimal,

    /// Total revenue (sum of line subtotals).
    pub revenue: Money,
}

/// Aggregated statistics over a filtered day sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of shipment days in the period.
    pub total_shipments: usize,

    /// Sum of day totals.
    pub total_revenue: Money,

    /// `total_revenue / total_shipments`, zero when there are no days.
    pub avg_daily: Money,

    /// Revenue per client name. Snapshot names are the keys: the same
    /// client id under a later name counts as a distinct key, because the
    /// ledger records what the paperwork said at the time.
    pub by_client: BTreeMap<String, Money>,

    /// Tonnage and revenue per material name.
    pub by_material: BTreeMap<String, MaterialStats>,
}

/// Folds a filtered day sequence into [`Stats`].
pub fn aggregate(filtered_days: &[ShipmentDay]) -> Stats {
    let total_shipments = filtered_days.len();
    let total_revenue: Money = filtered_days.iter().map(|day| day.day_total).sum();
    let avg_daily = total_revenue.divide_count(total_shipments);

    let mut by_client: BTreeMap<String, Money> = BTreeMap::new();
    let mut by_material: BTreeMap<String, MaterialStats> = BTreeMap::new();

    for day in filtered_days {
        for entry in &day.client_entries {
            *by_client.entry(entry.client_name.clone()).or_default() += entry.client_total;

            for item in &entry.line_items {
                let material = by_material.entry(item.material.clone()).or_default();
                material.tonnage += item.quantity;
                material.revenue += item.subtotal;
            }
        }
    }

    Stats {
        total_shipments,
        total_revenue,
        avg_daily,
        by_client,
        by_material,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
