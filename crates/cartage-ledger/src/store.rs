//! # Ledger Store
//!
//! The owned collections of shipment days and monthly calculation
//! snapshots, with invariant-preserving mutations.
//!
//! ## Record Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Shipment Day Lifecycle                              │
//! │                                                                         │
//! │  1. SAVE DAY                                                            │
//! │     └── add_day(date, entries)                                          │
//! │           ├── drop zero-quantity lines and empty entries                │
//! │           ├── nothing left? → EmptyDay, ledger unchanged                │
//! │           └── recompute client totals + day total, assign UUID          │
//! │                                                                         │
//! │  2. EDIT                                                                │
//! │     └── update_day(id, date, entries) → same filtering, all-or-nothing │
//! │                                                                         │
//! │  3. DELETE                                                              │
//! │     └── delete_day(id) → NotFound on unknown id, no partial mutation   │
//! │                                                                         │
//! │  Monthly calculations are independent snapshots: the total is stored   │
//! │  as the caller supplied it and never recomputed (a frozen fact).       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totals Invariants
//! After every successful mutation, for every stored record:
//! `subtotal == quantity × price`, `client_total == Σ subtotal`,
//! `day_total == Σ client_total`. The store recomputes derived totals
//! itself rather than trusting caller-supplied ones (monthly snapshots
//! excepted, deliberately).

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use cartage_core::pricing::{price_line, total_day, total_line_items};
use cartage_core::types::{ClientEntry, MonthlyCalculation, ShipmentDay};
use cartage_core::Money;

use crate::error::{LedgerError, LedgerResult};

// =============================================================================
// Ledger Store
// =============================================================================

/// Owns the shipment-day and monthly-calculation collections.
///
/// All operations are value-returning: callers get owned clones of the
/// stored records, never `&mut` into the collections. On any error the
/// store is exactly as it was before the call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerStore {
    days: Vec<ShipmentDay>,
    monthly: Vec<MonthlyCalculation>,
}

impl LedgerStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        LedgerStore::default()
    }

    /// Creates a store from existing collections (e.g. loaded by the
    /// embedding application's persistence layer).
    pub fn from_parts(days: Vec<ShipmentDay>, monthly: Vec<MonthlyCalculation>) -> Self {
        LedgerStore { days, monthly }
    }

    // =========================================================================
    // Read Views
    // =========================================================================

    /// All shipment days, in insertion order.
    pub fn days(&self) -> &[ShipmentDay] {
        &self.days
    }

    /// All monthly calculations, in insertion order.
    pub fn monthly_calculations(&self) -> &[MonthlyCalculation] {
        &self.monthly
    }

    /// The `n` most recent days, descending by date (the entry screen's
    /// "recent days" preview).
    pub fn recent_days(&self, n: usize) -> Vec<ShipmentDay> {
        let mut sorted = self.days.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(n);
        sorted
    }

    // =========================================================================
    // Shipment Day Operations
    // =========================================================================

    /// Saves a new shipment day.
    ///
    /// Zero-quantity lines and empty client entries are filtered out and
    /// every derived total is recomputed before the record is stored.
    ///
    /// ## Errors
    /// [`LedgerError::EmptyDay`] when no positive-quantity line survives;
    /// the ledger is unchanged (idempotent no-op on failure).
    pub fn add_day(
        &mut self,
        date: NaiveDate,
        client_entries: Vec<ClientEntry>,
    ) -> LedgerResult<ShipmentDay> {
        let client_entries = normalize_entries(client_entries)?;

        let day = ShipmentDay {
            id: Uuid::new_v4().to_string(),
            date,
            day_total: total_day(&client_entries),
            client_entries,
        };
        debug!(id = %day.id, date = %day.date, total = %day.day_total, "Saving shipment day");
        self.days.push(day.clone());
        Ok(day)
    }

    /// Replaces a day's date and entries, recomputing all totals.
    ///
    /// All-or-nothing: on `NotFound` or `EmptyDay` the stored record is
    /// untouched.
    pub fn update_day(
        &mut self,
        id: &str,
        date: NaiveDate,
        client_entries: Vec<ClientEntry>,
    ) -> LedgerResult<ShipmentDay> {
        // Validate the replacement before touching the stored record
        let client_entries = normalize_entries(client_entries)?;

        let day = self
            .days
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| LedgerError::DayNotFound(id.to_string()))?;

        day.date = date;
        day.day_total = total_day(&client_entries);
        day.client_entries = client_entries;
        debug!(id = %id, date = %day.date, total = %day.day_total, "Updating shipment day");
        Ok(day.clone())
    }

    /// Deletes a day by id.
    pub fn delete_day(&mut self, id: &str) -> LedgerResult<()> {
        let before = self.days.len();
        self.days.retain(|d| d.id != id);
        if self.days.len() == before {
            return Err(LedgerError::DayNotFound(id.to_string()));
        }
        debug!(id = %id, "Deleted shipment day");
        Ok(())
    }

    // =========================================================================
    // Monthly Calculation Operations
    // =========================================================================

    /// Saves a monthly calculation snapshot.
    ///
    /// The `total` is stored exactly as supplied by the caller's current
    /// aggregation rather than recomputed: a monthly snapshot is a frozen
    /// fact, immune to later catalog changes.
    pub fn add_monthly(
        &mut self,
        month: &str,
        year: i32,
        description: Option<String>,
        client_entries: Vec<ClientEntry>,
        total: Money,
    ) -> MonthlyCalculation {
        let calc = MonthlyCalculation {
            id: Uuid::new_v4().to_string(),
            month: month.to_string(),
            year,
            description,
            client_entries,
            total,
            saved_at: Utc::now(),
        };
        debug!(id = %calc.id, month = %calc.month, year = calc.year, "Saving monthly calculation");
        self.monthly.push(calc.clone());
        calc
    }

    /// Deletes a monthly calculation by id.
    pub fn delete_monthly(&mut self, id: &str) -> LedgerResult<()> {
        let before = self.monthly.len();
        self.monthly.retain(|c| c.id != id);
        if self.monthly.len() == before {
            return Err(LedgerError::MonthlyNotFound(id.to_string()));
        }
        debug!(id = %id, "Deleted monthly calculation");
        Ok(())
    }
}

// =============================================================================
// Entry Normalization
// =============================================================================

/// Drops zero-quantity lines and empty entries, recomputing every derived
/// total from its parts. Errors with [`LedgerError::EmptyDay`] when nothing
/// survives.
fn normalize_entries(entries: Vec<ClientEntry>) -> LedgerResult<Vec<ClientEntry>> {
    let normalized: Vec<ClientEntry> = entries
        .into_iter()
        .filter_map(|entry| {
            let line_items: Vec<_> = entry
                .line_items
                .iter()
                .filter_map(|item| price_line(&item.material, item.quantity, item.price))
                .collect();
            if line_items.is_empty() {
                return None;
            }
            let client_total = total_line_items(&line_items);
            Some(ClientEntry {
                client_id: entry.client_id,
                client_name: entry.client_name,
                line_items,
                client_total,
            })
        })
        .collect();

    if normalized.is_empty() {
        return Err(LedgerError::EmptyDay);
    }
    Ok(normalized)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cartage_core::types::LineItem;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(client_name: &str, lines: &[(&str, Decimal, i64)]) -> ClientEntry {
        let line_items: Vec<LineItem> = lines
            .iter()
            .map(|(material, qty, price)| LineItem {
                material: material.to_string(),
                quantity: *qty,
                price: Money::from_major_minor(*price, 0),
                // Deliberately wrong: the store must recompute, not trust
                subtotal: Money::zero(),
            })
            .collect();
        ClientEntry {
            client_id: "1".to_string(),
            client_name: client_name.to_string(),
            client_total: Money::zero(),
            line_items,
        }
    }

    #[test]
    fn test_add_day_recomputes_totals() {
        let mut store = LedgerStore::new();
        let day = store
            .add_day(
                date(2025, 11, 22),
                vec![entry("Athens Constructions", &[("sand", dec!(50), 12), ("gravel", dec!(30), 15)])],
            )
            .unwrap();

        assert_eq!(day.client_entries[0].line_items[0].subtotal, Money::from_major_minor(600, 0));
        assert_eq!(day.client_entries[0].client_total, Money::from_major_minor(1050, 0));
        assert_eq!(day.day_total, Money::from_major_minor(1050, 0));

        // Invariants hold on the stored record too
        let stored = &store.days()[0];
        assert_eq!(stored.day_total, total_day(&stored.client_entries));
    }

    #[test]
    fn test_add_day_filters_zero_lines_and_empty_entries() {
        let mut store = LedgerStore::new();
        let day = store
            .add_day(
                date(2025, 11, 22),
                vec![
                    entry("Athens Constructions", &[("sand", dec!(50), 12), ("gravel", Decimal::ZERO, 15)]),
                    entry("Thessaloniki Landscaping", &[("sand", Decimal::ZERO, 10)]),
                ],
            )
            .unwrap();

        assert_eq!(day.client_entries.len(), 1);
        assert_eq!(day.client_entries[0].line_items.len(), 1);
        assert_eq!(day.day_total, Money::from_major_minor(600, 0));
    }

    #[test]
    fn test_add_day_all_zero_fails_and_ledger_unchanged() {
        let mut store = LedgerStore::new();
        let result = store.add_day(
            date(2025, 11, 22),
            vec![entry("Athens Constructions", &[("sand", Decimal::ZERO, 12)])],
        );

        assert!(matches!(result, Err(LedgerError::EmptyDay)));
        assert!(store.days().is_empty());
    }

    #[test]
    fn test_update_day_replaces_and_recomputes() {
        let mut store = LedgerStore::new();
        let day = store
            .add_day(
                date(2025, 11, 22),
                vec![entry("Athens Constructions", &[("sand", dec!(50), 12)])],
            )
            .unwrap();

        let updated = store
            .update_day(
                &day.id,
                date(2025, 11, 23),
                vec![entry("Athens Constructions", &[("sand", dec!(60), 12)])],
            )
            .unwrap();

        assert_eq!(updated.id, day.id);
        assert_eq!(updated.date, date(2025, 11, 23));
        assert_eq!(updated.day_total, Money::from_major_minor(720, 0));
        assert_eq!(store.days().len(), 1);
    }

    #[test]
    fn test_update_day_empty_leaves_record_untouched() {
        let mut store = LedgerStore::new();
        let day = store
            .add_day(
                date(2025, 11, 22),
                vec![entry("Athens Constructions", &[("sand", dec!(50), 12)])],
            )
            .unwrap();

        let result = store.update_day(
            &day.id,
            date(2025, 11, 23),
            vec![entry("Athens Constructions", &[("sand", Decimal::ZERO, 12)])],
        );

        assert!(matches!(result, Err(LedgerError::EmptyDay)));
        // Original record intact, including its date
        assert_eq!(store.days()[0].date, date(2025, 11, 22));
        assert_eq!(store.days()[0].day_total, Money::from_major_minor(600, 0));
    }

    #[test]
    fn test_update_and_delete_unknown_id() {
        let mut store = LedgerStore::new();
        assert!(matches!(
            store.update_day("nope", date(2025, 1, 1), vec![entry("x", &[("sand", dec!(1), 1)])]),
            Err(LedgerError::DayNotFound(_))
        ));
        assert!(matches!(store.delete_day("nope"), Err(LedgerError::DayNotFound(_))));
    }

    #[test]
    fn test_delete_day() {
        let mut store = LedgerStore::new();
        let day = store
            .add_day(
                date(2025, 11, 22),
                vec![entry("Athens Constructions", &[("sand", dec!(50), 12)])],
            )
            .unwrap();

        store.delete_day(&day.id).unwrap();
        assert!(store.days().is_empty());
    }

    #[test]
    fn test_recent_days_descending() {
        let mut store = LedgerStore::new();
        for d in [22, 24, 23] {
            store
                .add_day(
                    date(2025, 11, d),
                    vec![entry("Athens Constructions", &[("sand", dec!(1), 12)])],
                )
                .unwrap();
        }

        let recent = store.recent_days(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].date, date(2025, 11, 24));
        assert_eq!(recent[1].date, date(2025, 11, 23));
    }

    #[test]
    fn test_store_serde_round_trip_for_persistence() {
        // Embedding applications persist the store wholesale; the JSON
        // round-trip must reproduce it exactly.
        let mut store = LedgerStore::new();
        store
            .add_day(
                date(2025, 11, 22),
                vec![entry("Athens Constructions", &[("sand", dec!(12.5), 12)])],
            )
            .unwrap();
        store.add_monthly("November", 2025, None, vec![], Money::from_major_minor(150, 0));

        let json = serde_json::to_string(&store).unwrap();
        let back: LedgerStore = serde_json::from_str(&json).unwrap();
        assert_eq!(store, back);
    }

    #[test]
    fn test_monthly_total_is_frozen_as_supplied() {
        let mut store = LedgerStore::new();
        // Caller-supplied total deliberately differs from the entries' sum:
        // the snapshot keeps it verbatim.
        let calc = store.add_monthly(
            "November",
            2025,
            Some("pre-season estimate".to_string()),
            vec![entry("Athens Constructions", &[("sand", dec!(50), 12)])],
            Money::from_major_minor(9999, 0),
        );

        assert_eq!(calc.total, Money::from_major_minor(9999, 0));
        assert_eq!(store.monthly_calculations().len(), 1);

        store.delete_monthly(&calc.id).unwrap();
        assert!(matches!(
            store.delete_monthly(&calc.id),
            Err(LedgerError::MonthlyNotFound(_))
        ));
    }
}
