//! # Tabular Exporter
//!
//! Renders a filtered day sequence into the deterministic CSV format the
//! reporting spreadsheet consumes.
//!
//! ## Layout Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Date,Client,Material,Quantity,Unit Price,Subtotal,Day Total            │
//! │  24/11/2025,Athens Constructions,sand,60,12,720,1695      ◄── first row │
//! │  24/11/2025,Athens Constructions,gravel,20,15,300,            of a day  │
//! │  24/11/2025,Thessaloniki Landscaping,cement,15,45,675,        carries   │
//! │  23/11/2025,Athens Constructions,cement,25,40,1000,1000       the total │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - One row per (day, client entry, line item), days in the order given
//!   (the caller passes the filtered/sorted sequence), entries and lines
//!   in stored order.
//! - The day-total column is populated only on the very first row of each
//!   day and left blank on the rest — a "do not repeat the total" layout
//!   rule, not an omission.
//! - UTF-8 with a leading byte-order mark so spreadsheet tools decode
//!   non-ASCII client and material names correctly.
//!
//! Field order and the BOM are part of the compatibility contract.

use serde::Serialize;

use cartage_core::types::ShipmentDay;

/// Byte-order mark expected by spreadsheet tools opening UTF-8 CSV.
const UTF8_BOM: char = '\u{feff}';

/// Header row, written unconditionally so an empty period still exports a
/// well-formed file.
const HEADER: [&str; 7] = [
    "Date",
    "Client",
    "Material",
    "Quantity",
    "Unit Price",
    "Subtotal",
    "Day Total",
];

/// One data row, fields in [`HEADER`] order.
#[derive(Serialize)]
struct ExportRow<'a> {
    date: String,
    client: &'a str,
    material: &'a str,
    quantity: String,
    unit_price: String,
    subtotal: String,
    day_total: String,
}

/// Renders the day sequence as delimited text: BOM, one header row, then
/// one data row per line item. An empty period exports BOM + header, still
/// a well-formed file.
///
/// The caller is expected to pass the output of
/// [`filter_by_period`](crate::stats::filter_by_period) so row order
/// matches the report the operator was looking at.
///
/// Returns `String` rather than `csv::Result`: the writer targets an
/// in-memory `Vec<u8>`, which cannot fail, so the `expect`s below are
/// unreachable by construction.
pub fn export_csv(days: &[ShipmentDay]) -> String {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .write_record(HEADER)
        .expect("csv write to Vec cannot fail");

    for day in days {
        let mut first_row_of_day = true;
        for entry in &day.client_entries {
            for item in &entry.line_items {
                let row = ExportRow {
                    date: day.date.format("%d/%m/%Y").to_string(),
                    client: &entry.client_name,
                    material: &item.material,
                    quantity: item.quantity.normalize().to_string(),
                    unit_price: item.price.to_plain_string(),
                    subtotal: item.subtotal.to_plain_string(),
                    day_total: if first_row_of_day {
                        day.day_total.to_plain_string()
                    } else {
                        String::new()
                    },
                };
                first_row_of_day = false;
                writer.serialize(row).expect("csv write to Vec cannot fail");
            }
        }
    }

    let bytes = writer.into_inner().expect("csv flush to Vec cannot fail");
    let body = String::from_utf8(bytes).expect("csv output is UTF-8");
    format!("{UTF8_BOM}{body}")
}

// =============================================================================
// Unit Tests
// =============================================================================
