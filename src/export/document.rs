//! Word document (docx) rendering.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

use super::columns::COLUMNS;
use super::ExportError;
use crate::entities::Asset;

/// Cell text used when there are no records. A docx table must hold at
/// least one cell, so the empty export is a 1x1 table with this marker.
const EMPTY_PLACEHOLDER: &str = "item";

/// The table as rows of cell text: a header row of column labels, then one
/// row per record with every value spelled out. With no records, a single
/// 1x1 placeholder row.
fn table_grid(records: &[Asset]) -> Vec<Vec<String>> {
    if records.is_empty() {
        return vec![vec![EMPTY_PLACEHOLDER.to_string()]];
    }
    let mut grid = Vec::with_capacity(records.len() + 1);
    grid.push(COLUMNS.iter().map(|c| c.label.to_string()).collect());
    for asset in records {
        grid.push(COLUMNS.iter().map(|c| (c.get)(asset).to_text()).collect());
    }
    grid
}

fn text_cell(text: impl Into<String>) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}

/// Render records as a single table.
pub fn render(records: &[Asset]) -> Result<Vec<u8>, ExportError> {
    let rows: Vec<TableRow> = table_grid(records)
        .into_iter()
        .map(|cells| TableRow::new(cells.into_iter().map(text_cell).collect()))
        .collect();

    let mut cursor = Cursor::new(Vec::new());
    Docx::new()
        .add_table(Table::new(rows))
        .build()
        .pack(&mut cursor)
        .map_err(|e| ExportError::WriteFailure(e.to_string()))?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_has_header_then_one_row_per_record() {
        let records = vec![Asset::new("AC-1", "Desk"), Asset::new("AC-2", "Chair")];
        let grid = table_grid(&records);
        assert_eq!(grid.len(), 3);
        assert!(grid.iter().all(|row| row.len() == COLUMNS.len()));
        assert_eq!(grid[1][1], "AC-1");
        assert_eq!(grid[2][4], "Chair");
    }

    #[test]
    fn test_grid_header_matches_column_order() {
        let grid = table_grid(&[Asset::new("AC-1", "Desk")]);
        let labels: Vec<&str> = COLUMNS.iter().map(|c| c.label).collect();
        assert_eq!(grid[0], labels);
    }

    #[test]
    fn test_grid_absent_values_render_empty() {
        let grid = table_grid(&[Asset::new("AC-1", "Desk")]);
        // serial number unset
        assert_eq!(grid[1][6], "");
        // quantity default
        assert_eq!(grid[1][8], "1");
    }

    #[test]
    fn test_empty_input_renders_placeholder_table() {
        // no records collapses to a 1x1 table holding the marker text
        assert_eq!(table_grid(&[]), vec![vec![EMPTY_PLACEHOLDER.to_string()]]);

        let bytes = render(&[]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_renders_zip_container() {
        let records = vec![Asset::new("AC-1", "Desk")];
        let bytes = render(&records).unwrap();
        // docx is a zip archive
        assert_eq!(&bytes[..2], b"PK");
    }
}
