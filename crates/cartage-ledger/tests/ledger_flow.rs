//! End-to-end flow: catalog setup, expression-entered quantities, day save,
//! statistics, CSV export, and history immutability across catalog edits.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use cartage_core::expr::quantity_or_zero;
use cartage_core::pricing::build_client_entry;
use cartage_core::types::{MaterialRate, Period};
use cartage_core::Money;
use cartage_ledger::{aggregate, export_csv, filter_by_period, Catalog, LedgerStore};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn full_day_entry_flow() {
    // Catalog: one material, one client with a €12/ton rate for it
    let mut catalog = Catalog::new();
    catalog.add_material("sand").unwrap();
    let client = catalog
        .add_client(
            "Athens Constructions",
            &[MaterialRate {
                material: "sand".to_string(),
                price: Money::from_major_minor(12, 0),
            }],
        )
        .unwrap();

    // Operator types an arithmetic expression for the quantity
    let quantity = quantity_or_zero("50 + 30 * 2").unwrap();
    assert_eq!(quantity, dec!(110));

    let entry = build_client_entry(
        catalog.client(&client.id).unwrap(),
        &[("sand".to_string(), quantity)],
    )
    .unwrap();
    assert_eq!(entry.line_items.len(), 1);
    assert_eq!(entry.line_items[0].subtotal, Money::from_major_minor(1320, 0));
    assert_eq!(entry.client_total, Money::from_major_minor(1320, 0));

    // Save the day
    let mut store = LedgerStore::new();
    let day = store.add_day(date(2025, 11, 22), vec![entry]).unwrap();
    assert_eq!(day.day_total, Money::from_major_minor(1320, 0));

    // Statistics over the saved ledger
    let filtered = filter_by_period(store.days(), Period::All, date(2025, 11, 30));
    let stats = aggregate(&filtered);
    assert_eq!(stats.total_shipments, 1);
    assert_eq!(stats.total_revenue, Money::from_major_minor(1320, 0));
    assert_eq!(stats.avg_daily, Money::from_major_minor(1320, 0));
    assert_eq!(
        stats.by_client["Athens Constructions"],
        Money::from_major_minor(1320, 0)
    );
    assert_eq!(stats.by_material["sand"].tonnage, dec!(110));

    // Export carries the day total on the first (and only) data row
    let csv = export_csv(&filtered);
    assert!(csv.starts_with('\u{feff}'));
    let lines: Vec<&str> = csv.trim_start_matches('\u{feff}').lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "Date,Client,Material,Quantity,Unit Price,Subtotal,Day Total"
    );
    assert_eq!(
        lines[1],
        "22/11/2025,Athens Constructions,sand,110,12,1320,1320"
    );
}

#[test]
fn catalog_edits_never_rewrite_ledger_history() {
    let mut catalog = Catalog::new();
    catalog.add_material("sand").unwrap();
    let client = catalog
        .add_client(
            "Athens Constructions",
            &[MaterialRate {
                material: "sand".to_string(),
                price: Money::from_major_minor(12, 0),
            }],
        )
        .unwrap();

    let entry = build_client_entry(
        catalog.client(&client.id).unwrap(),
        &[("sand".to_string(), dec!(50))],
    )
    .unwrap();

    let mut store = LedgerStore::new();
    let day = store.add_day(date(2025, 11, 22), vec![entry]).unwrap();

    // Rename the material, rename the client, then delete both
    catalog.rename_material("sand", "fine sand").unwrap();
    catalog
        .update_client(&client.id, "Athens Constructions Ltd", &[])
        .unwrap();
    catalog.delete_material("fine sand").unwrap();
    catalog.delete_client(&client.id).unwrap();

    // The saved day still reads exactly as it did on save day
    let stored = &store.days()[0];
    assert_eq!(stored.id, day.id);
    assert_eq!(stored.client_entries[0].client_name, "Athens Constructions");
    assert_eq!(stored.client_entries[0].line_items[0].material, "sand");
    assert_eq!(
        stored.client_entries[0].line_items[0].price,
        Money::from_major_minor(12, 0)
    );
    assert_eq!(stored.day_total, Money::from_major_minor(600, 0));
}

#[test]
fn blank_and_zero_quantities_produce_no_lines() {
    let mut catalog = Catalog::new();
    catalog.add_material("sand").unwrap();
    catalog.add_material("gravel").unwrap();
    let client = catalog
        .add_client(
            "Athens Constructions",
            &[
                MaterialRate {
                    material: "sand".to_string(),
                    price: Money::from_major_minor(12, 0),
                },
                MaterialRate {
                    material: "gravel".to_string(),
                    price: Money::from_major_minor(15, 0),
                },
            ],
        )
        .unwrap();

    // Blank quantity evaluates to zero, so only the gravel line survives
    let quantities = vec![
        ("sand".to_string(), quantity_or_zero("   ").unwrap()),
        ("gravel".to_string(), quantity_or_zero("20").unwrap()),
    ];
    let entry = build_client_entry(catalog.client(&client.id).unwrap(), &quantities).unwrap();
    assert_eq!(entry.line_items.len(), 1);
    assert_eq!(entry.line_items[0].material, "gravel");
    assert_eq!(entry.client_total, Money::from_major_minor(300, 0));
}
