#![allow(dead_code)]

use chrono::NaiveDate;

use messy_sales::{Field, FieldValue, SalesRecord};

/// Date formats a downstream consumer must accept.
pub const ACCEPTED_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%b-%y"];

/// Parse an emitted `OrderDate` cell under any accepted format.
pub fn parse_order_date(cell: &str) -> Option<NaiveDate> {
    ACCEPTED_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(cell, format).ok())
}

/// Resolve casing, padding, and aliases of an emitted `Country` cell.
pub fn canonical_country(cell: &str) -> Option<&'static str> {
    match cell.trim().to_ascii_lowercase().as_str() {
        "usa" | "united states" => Some("USA"),
        "uk" | "united kingdom" => Some("UK"),
        "canada" => Some("Canada"),
        _ => None,
    }
}

pub fn cell(record: &SalesRecord, field: Field) -> String {
    record.get(field).map(FieldValue::render).unwrap_or_default()
}

pub fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}
