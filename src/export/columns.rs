//! The column projection shared by every export format.
//!
//! All three writers iterate [`COLUMNS`] in order, so adding or reordering a
//! column here changes spreadsheet, document, and PDF output together.

use crate::entities::Asset;

/// A single cell value, typed so the spreadsheet writer can keep numbers
/// as numbers while the text formats render everything as strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
    Empty,
}

impl Cell {
    fn opt_text(value: Option<&str>) -> Cell {
        match value {
            Some(s) => Cell::Text(s.to_string()),
            None => Cell::Empty,
        }
    }

    /// Text rendering used by the document and PDF writers. Absent values
    /// become the empty string.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Int(n) => n.to_string(),
            Cell::Float(x) => x.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Empty => String::new(),
        }
    }
}

/// One exported column: its header label and how to read it off an asset.
pub struct Column {
    pub label: &'static str,
    pub get: fn(&Asset) -> Cell,
}

/// The full projection, in output order.
pub const COLUMNS: [Column; 13] = [
    Column {
        label: "sequence number",
        get: |a| Cell::Int(a.id),
    },
    Column {
        label: "asset code",
        get: |a| Cell::Text(a.asset_code.clone()),
    },
    Column {
        label: "sub code",
        get: |a| Cell::opt_text(a.sub_code.as_deref()),
    },
    Column {
        label: "budget year",
        get: |a| Cell::opt_text(a.budget_year.as_deref()),
    },
    Column {
        label: "name",
        get: |a| Cell::Text(a.name.clone()),
    },
    Column {
        label: "details",
        get: |a| Cell::opt_text(a.details.as_deref()),
    },
    Column {
        label: "serial number",
        get: |a| Cell::opt_text(a.serial_number.as_deref()),
    },
    Column {
        label: "category",
        get: |a| Cell::opt_text(a.category.as_deref()),
    },
    Column {
        label: "quantity",
        get: |a| Cell::Int(a.quantity),
    },
    Column {
        label: "acquisition date",
        get: |a| match a.acquisition_date {
            Some(date) => Cell::Text(date.to_string()),
            None => Cell::Empty,
        },
    },
    Column {
        label: "unit",
        get: |a| Cell::opt_text(a.unit.as_deref()),
    },
    Column {
        label: "price",
        get: |a| match a.price {
            Some(price) => Cell::Float(price),
            None => Cell::Empty,
        },
    },
    Column {
        label: "note",
        get: |a| Cell::opt_text(a.note.as_deref()),
    },
];
