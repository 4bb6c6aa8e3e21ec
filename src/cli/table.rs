//! Table formatting utilities for CLI list commands
//!
//! One formatter shared by the asset and item list/search commands, so
//! both families agree on headers, truncation, and summary output.

use chrono::NaiveDate;
use console::style;

use crate::cli::helpers::{escape_csv, truncate_str};
use crate::cli::OutputFormat;

/// A typed cell value with semantic meaning for formatting
#[derive(Debug, Clone)]
pub enum CellValue {
    /// Plain text, truncated to the column width in table output
    Text(String),
    /// Optional text, shown as "-" when absent
    OptText(Option<String>),
    /// Integer count or quantity
    Number(i64),
    /// Price, rendered with two decimal places
    Money(Option<f64>),
    /// Calendar date as YYYY-MM-DD
    Date(Option<NaiveDate>),
}

impl CellValue {
    /// Format for TSV output (fixed width, "-" placeholders)
    pub fn format_tsv(&self, width: usize) -> String {
        match self {
            CellValue::Text(s) => {
                let truncated = truncate_str(s, width.saturating_sub(2));
                format!("{:<width$}", truncated, width = width)
            }
            CellValue::OptText(opt) => match opt {
                Some(s) => {
                    let truncated = truncate_str(s, width.saturating_sub(2));
                    format!("{:<width$}", truncated, width = width)
                }
                None => format!("{:<width$}", "-", width = width),
            },
            CellValue::Number(n) => format!("{:>width$}", n, width = width),
            CellValue::Money(opt) => match opt {
                Some(p) => format!("{:>width$}", format!("{:.2}", p), width = width),
                None => format!("{:>width$}", "-", width = width),
            },
            CellValue::Date(opt) => match opt {
                Some(d) => format!("{:<width$}", d, width = width),
                None => format!("{:<width$}", "-", width = width),
            },
        }
    }

    /// Format for CSV output (RFC 4180, empty string placeholders)
    pub fn format_csv(&self) -> String {
        match self {
            CellValue::Text(s) => escape_csv(s),
            CellValue::OptText(opt) => opt.as_deref().map(escape_csv).unwrap_or_default(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Money(opt) => opt.map(|p| format!("{:.2}", p)).unwrap_or_default(),
            CellValue::Date(opt) => opt.map(|d| d.to_string()).unwrap_or_default(),
        }
    }

    /// Format for Markdown output (escaped pipes, "-" placeholders)
    pub fn format_md(&self) -> String {
        let raw = match self {
            CellValue::Text(s) => s.clone(),
            CellValue::OptText(opt) => opt.clone().unwrap_or_else(|| "-".to_string()),
            CellValue::Number(n) => n.to_string(),
            CellValue::Money(opt) => opt
                .map(|p| format!("{:.2}", p))
                .unwrap_or_else(|| "-".to_string()),
            CellValue::Date(opt) => opt
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
        };
        raw.replace('|', "\\|")
    }

    /// Get the display width of this cell's content (for dynamic column sizing)
    ///
    /// Measured in chars to agree with the padding and truncation above.
    pub fn display_width(&self) -> usize {
        match self {
            CellValue::Text(s) => s.chars().count(),
            CellValue::OptText(opt) => opt.as_ref().map_or(1, |s| s.chars().count()),
            CellValue::Number(n) => n.to_string().len(),
            CellValue::Money(opt) => opt.map_or(1, |p| format!("{:.2}", p).len()),
            CellValue::Date(opt) => opt.map_or(1, |_| 10),
        }
    }
}

/// Column definition with header label and width
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub key: &'static str,
    pub header: &'static str,
    pub width: usize,
}

impl ColumnDef {
    pub const fn new(key: &'static str, header: &'static str, width: usize) -> Self {
        Self { key, header, width }
    }
}

/// A row of cell values for table output
pub struct TableRow {
    pub id: i64,
    pub cells: Vec<(&'static str, CellValue)>,
}

impl TableRow {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            cells: Vec::new(),
        }
    }

    pub fn cell(mut self, key: &'static str, value: CellValue) -> Self {
        self.cells.push((key, value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

/// Table formatter that outputs rows in various formats
pub struct TableFormatter<'a> {
    columns: &'a [ColumnDef],
    entity_name: &'static str,
}

impl<'a> TableFormatter<'a> {
    pub fn new(columns: &'a [ColumnDef], entity_name: &'static str) -> Self {
        Self {
            columns,
            entity_name,
        }
    }

    /// Output rows in the specified format
    pub fn output<I>(&self, rows: I, format: OutputFormat, visible_columns: &[&str])
    where
        I: IntoIterator<Item = TableRow>,
    {
        let rows: Vec<TableRow> = rows.into_iter().collect();

        match format {
            OutputFormat::Csv => self.output_csv(&rows, visible_columns),
            OutputFormat::Md => self.output_md(&rows, visible_columns),
            OutputFormat::Id => self.output_ids(&rows),
            _ => self.output_tsv(&rows, visible_columns),
        }
    }

    /// Calculate dynamic column widths based on actual content
    fn calculate_widths(&self, rows: &[TableRow], visible_columns: &[&str]) -> Vec<usize> {
        let mut widths = Vec::new();

        // ID column - widest id, min 2 for the header
        let id_width = rows
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(2)
            .max(2);
        widths.push(id_width);

        for col in self.columns {
            if visible_columns.contains(&col.key) {
                let header_len = col.header.len();
                let max_content = rows
                    .iter()
                    .filter_map(|r| r.get(col.key))
                    .map(|v| v.display_width())
                    .max()
                    .unwrap_or(0);

                // +2 truncation buffer (truncate_str uses width-2 for text),
                // capped at the defined width to keep rows on one screen
                let natural_width = header_len.max(max_content.saturating_add(2));
                widths.push(natural_width.min(col.width));
            }
        }

        widths
    }

    fn output_tsv(&self, rows: &[TableRow], visible_columns: &[&str]) {
        let widths = self.calculate_widths(rows, visible_columns);

        // Header row - always starts with ID
        let mut header_parts = vec![format!(
            "{:<width$}",
            style("ID").bold().dim(),
            width = widths[0]
        )];
        let mut width_idx = 1;

        for col in self.columns {
            if visible_columns.contains(&col.key) {
                header_parts.push(format!(
                    "{:<width$}",
                    style(col.header).bold(),
                    width = widths[width_idx]
                ));
                width_idx += 1;
            }
        }
        println!("{}", header_parts.join(" "));

        // Separator
        let total_width: usize = widths.iter().sum::<usize>() + widths.len() - 1;
        println!("{}", "-".repeat(total_width));

        // Data rows
        for row in rows {
            let mut row_parts = vec![format!(
                "{:<width$}",
                style(row.id).cyan(),
                width = widths[0]
            )];
            let mut width_idx = 1;

            for col in self.columns {
                if visible_columns.contains(&col.key) {
                    let w = widths[width_idx];
                    if let Some(value) = row.get(col.key) {
                        row_parts.push(value.format_tsv(w));
                    } else {
                        row_parts.push(format!("{:<width$}", "-", width = w));
                    }
                    width_idx += 1;
                }
            }
            println!("{}", row_parts.join(" "));
        }

        // Summary
        println!();
        println!(
            "{} {}(s) found.",
            style(rows.len()).cyan(),
            self.entity_name
        );
    }

    fn output_csv(&self, rows: &[TableRow], visible_columns: &[&str]) {
        let mut headers = vec!["id".to_string()];
        for col in self.columns {
            if visible_columns.contains(&col.key) {
                headers.push(col.key.to_string());
            }
        }
        println!("{}", headers.join(","));

        for row in rows {
            let mut values = vec![row.id.to_string()];
            for col in self.columns {
                if visible_columns.contains(&col.key) {
                    if let Some(value) = row.get(col.key) {
                        values.push(value.format_csv());
                    } else {
                        values.push(String::new());
                    }
                }
            }
            println!("{}", values.join(","));
        }
    }

    fn output_md(&self, rows: &[TableRow], visible_columns: &[&str]) {
        let mut headers = vec!["ID".to_string()];
        for col in self.columns {
            if visible_columns.contains(&col.key) {
                headers.push(col.header.to_string());
            }
        }
        println!("| {} |", headers.join(" | "));

        let separators: Vec<&str> = headers.iter().map(|_| "---").collect();
        println!("|{}|", separators.join("|"));

        for row in rows {
            let mut values = vec![row.id.to_string()];
            for col in self.columns {
                if visible_columns.contains(&col.key) {
                    if let Some(value) = row.get(col.key) {
                        values.push(value.format_md());
                    } else {
                        values.push("-".to_string());
                    }
                }
            }
            println!("| {} |", values.join(" | "));
        }
    }

    fn output_ids(&self, rows: &[TableRow]) {
        for row in rows {
            println!("{}", row.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_text_format() {
        let cell = CellValue::Text("Hello World".to_string());
        let tsv = cell.format_tsv(20);
        assert!(tsv.contains("Hello World"));

        let csv = cell.format_csv();
        assert_eq!(csv, "Hello World");

        let md = cell.format_md();
        assert_eq!(md, "Hello World");
    }

    #[test]
    fn test_cell_value_opt_text() {
        let some = CellValue::OptText(Some("AV".to_string()));
        assert_eq!(some.format_csv(), "AV");

        let none = CellValue::OptText(None);
        assert_eq!(none.format_csv(), "");
        assert_eq!(none.format_md(), "-");
        assert!(none.format_tsv(5).contains('-'));
    }

    #[test]
    fn test_cell_value_money_format() {
        let some = CellValue::Money(Some(599.0));
        assert_eq!(some.format_csv(), "599.00");
        assert_eq!(some.format_md(), "599.00");

        let none = CellValue::Money(None);
        assert_eq!(none.format_csv(), "");
        assert_eq!(none.format_md(), "-");
    }

    #[test]
    fn test_cell_value_date_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15);
        let cell = CellValue::Date(date);
        assert_eq!(cell.format_csv(), "2024-03-15");
        assert_eq!(CellValue::Date(None).format_csv(), "");
    }

    #[test]
    fn test_cell_value_md_escapes_pipes() {
        let cell = CellValue::Text("a|b|c".to_string());
        assert_eq!(cell.format_md(), "a\\|b\\|c");
    }

    #[test]
    fn test_cell_value_text_multibyte() {
        // 32 Thai chars in ~3x as many bytes
        let cell = CellValue::Text("ครุภัณฑ์ทดสอบยาวมากเกินความกว้าง".to_string());
        let tsv = cell.format_tsv(12);
        assert!(tsv.contains("..."));
        assert_eq!(tsv.chars().count(), 12);

        let short = CellValue::Text("ครุภัณฑ์".to_string());
        assert_eq!(short.display_width(), 8);
        assert!(!short.format_tsv(12).contains("..."));
    }

    #[test]
    fn test_column_def() {
        let col = ColumnDef::new("name", "NAME", 30);
        assert_eq!(col.key, "name");
        assert_eq!(col.header, "NAME");
        assert_eq!(col.width, 30);
    }

    #[test]
    fn test_table_row_builder() {
        let row = TableRow::new(7)
            .cell("name", CellValue::Text("Projector".to_string()))
            .cell("qty", CellValue::Number(2));

        assert_eq!(row.id, 7);
        assert!(row.get("name").is_some());
        assert!(row.get("qty").is_some());
        assert!(row.get("missing").is_none());
    }
}
