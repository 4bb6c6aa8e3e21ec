//! Spreadsheet (xlsx) rendering.

use rust_xlsxwriter::Workbook;

use super::columns::{Cell, COLUMNS};
use super::ExportError;
use crate::entities::Asset;

/// The worksheet as typed rows: one header row of column labels, then one
/// row per record in input order.
fn sheet_grid(records: &[Asset]) -> Vec<Vec<Cell>> {
    let mut grid = Vec::with_capacity(records.len() + 1);
    grid.push(
        COLUMNS
            .iter()
            .map(|c| Cell::Text(c.label.to_string()))
            .collect(),
    );
    for asset in records {
        grid.push(COLUMNS.iter().map(|c| (c.get)(asset)).collect());
    }
    grid
}

/// Render records onto a single worksheet. Numeric cells stay numeric.
pub fn render(records: &[Asset]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row, cells) in sheet_grid(records).into_iter().enumerate() {
        let row = row as u32;
        for (col, cell) in cells.into_iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Int(n) => worksheet.write_number(row, col, n as f64),
                Cell::Float(x) => worksheet.write_number(row, col, x),
                Cell::Text(s) => worksheet.write_string(row, col, s),
                Cell::Empty => worksheet.write_string(row, col, ""),
            }
            .map_err(|e| ExportError::WriteFailure(e.to_string()))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ExportError::WriteFailure(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_has_header_then_one_row_per_record() {
        let records = vec![Asset::new("AC-1", "Desk"), Asset::new("AC-2", "Chair")];
        let grid = sheet_grid(&records);
        assert_eq!(grid.len(), 3);
        assert!(grid.iter().all(|row| row.len() == COLUMNS.len()));
    }

    #[test]
    fn test_grid_header_row_is_ordered_labels() {
        let grid = sheet_grid(&[]);
        assert_eq!(grid.len(), 1);
        let header: Vec<Cell> = COLUMNS
            .iter()
            .map(|c| Cell::Text(c.label.to_string()))
            .collect();
        assert_eq!(grid[0], header);
        assert_eq!(grid[0][0], Cell::Text("sequence number".to_string()));
        assert_eq!(grid[0][12], Cell::Text("note".to_string()));
    }

    #[test]
    fn test_grid_keeps_numbers_typed() {
        let mut asset = Asset::new("AC-1", "Desk");
        asset.id = 3;
        asset.quantity = 2;
        asset.price = Some(450.0);
        let grid = sheet_grid(&[asset]);
        assert_eq!(grid[1][0], Cell::Int(3));
        assert_eq!(grid[1][8], Cell::Int(2));
        assert_eq!(grid[1][11], Cell::Float(450.0));
        // note unset
        assert_eq!(grid[1][12], Cell::Empty);
    }

    #[test]
    fn test_renders_zip_container() {
        let records = vec![Asset::new("AC-1", "Desk")];
        let bytes = render(&records).unwrap();
        // xlsx is a zip archive
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_empty_input_still_writes_header_sheet() {
        let bytes = render(&[]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_sparse_record_renders() {
        let records = vec![Asset::new("AC-2", "Chair")];
        assert!(render(&records).is_ok());
    }
}
