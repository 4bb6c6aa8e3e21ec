//! Flat-text PDF rendering.
//!
//! No table structure here. Every record becomes one logical line of
//! `label: value` pairs joined by `" | "`, wrapped to the printable width
//! and drawn top to bottom, with a new page whenever the cursor runs off
//! the bottom margin.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use super::columns::COLUMNS;
use super::ExportError;
use crate::entities::Asset;

// printpdf's Mm and use_text take f32
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const LINE_STEP_MM: f32 = 5.0;
const RECORD_GAP_MM: f32 = 1.0;
const FONT_SIZE_PT: f32 = 10.0;
/// Character budget per line, sized for Helvetica 10pt across the
/// printable width of an A4 portrait page.
const WRAP_COLUMNS: usize = 100;

/// One record as a single logical text line.
pub(crate) fn record_line(asset: &Asset) -> String {
    COLUMNS
        .iter()
        .map(|c| format!("{}: {}", c.label, (c.get)(asset).to_text()))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Greedy wrap at `width` characters, breaking on the last space inside
/// the window and hard-splitting runs with no space at all.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut segments = Vec::new();
    let mut start = 0;
    while chars.len() - start > width {
        let window = &chars[start..start + width];
        let split = match window.iter().rposition(|c| *c == ' ') {
            Some(pos) if pos > 0 => pos,
            _ => width,
        };
        segments.push(chars[start..start + split].iter().collect());
        start += split;
        // drop the whitespace the line broke on
        while chars.get(start) == Some(&' ') {
            start += 1;
        }
    }
    segments.push(chars[start..].iter().collect());
    segments
}

/// Render records as wrapped text lines on auto-extending A4 pages.
/// Empty input yields a single blank page.
pub fn render(records: &[Asset]) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Assets",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::WriteFailure(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    for asset in records {
        for segment in wrap_line(&record_line(asset), WRAP_COLUMNS) {
            if y < MARGIN_MM {
                let (page, page_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
                layer = doc.get_page(page).get_layer(page_layer);
                y = PAGE_HEIGHT_MM - MARGIN_MM;
            }
            layer.use_text(segment, FONT_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
            y -= LINE_STEP_MM;
        }
        y -= RECORD_GAP_MM;
    }

    doc.save_to_bytes()
        .map_err(|e| ExportError::WriteFailure(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_record_line_full_record() {
        let mut asset = Asset::new("A1", "Laptop");
        asset.id = 1;
        asset.quantity = 2;
        asset.price = Some(599.0);
        asset.acquisition_date = NaiveDate::from_ymd_opt(2023, 1, 10);

        let line = record_line(&asset);
        assert!(line.starts_with("sequence number: 1 | asset code: A1"));
        assert!(line.contains("name: Laptop"));
        assert!(line.contains("acquisition date: 2023-01-10"));
        assert!(line.contains("price: 599"));
    }

    #[test]
    fn test_record_line_missing_fields_render_empty() {
        let mut asset = Asset::new("A2", "Chair");
        asset.id = 2;
        asset.quantity = 5;

        let line = record_line(&asset);
        // absent price stays empty, not "None" or "null"
        assert!(line.contains("price:  | note: "));
        assert!(line.ends_with("note: "));
        assert!(!line.contains("None"));
    }

    #[test]
    fn test_wrap_short_line_untouched() {
        assert_eq!(wrap_line("short line", 100), vec!["short line"]);
    }

    #[test]
    fn test_wrap_breaks_on_space() {
        let line = format!("{} {}", "a".repeat(60), "b".repeat(60));
        let segments = wrap_line(&line, 100);
        assert_eq!(segments, vec!["a".repeat(60), "b".repeat(60)]);
    }

    #[test]
    fn test_wrap_hard_splits_unbroken_run() {
        let line = "x".repeat(250);
        let segments = wrap_line(&line, 100);
        assert_eq!(
            segments,
            vec!["x".repeat(100), "x".repeat(100), "x".repeat(50)]
        );
    }

    #[test]
    fn test_wrap_segments_fit_budget() {
        let line = "word ".repeat(80);
        for segment in wrap_line(line.trim(), 100) {
            assert!(segment.chars().count() <= 100);
        }
    }

    #[test]
    fn test_renders_pdf_magic() {
        let records = vec![Asset::new("AC-1", "Desk")];
        let bytes = render(&records).unwrap();
        assert_eq!(&bytes[..4], b"%PDF");
    }

    #[test]
    fn test_empty_input_is_single_blank_page() {
        let bytes = render(&[]).unwrap();
        assert_eq!(&bytes[..4], b"%PDF");
        assert!(contains(&bytes, b"/Count 1"));
    }

    #[test]
    fn test_many_records_spill_across_pages() {
        let records: Vec<Asset> = (0..200)
            .map(|i| {
                let mut a = Asset::new(format!("AC-{}", i), "Desk");
                a.id = i + 1;
                a
            })
            .collect();
        let bytes = render(&records).unwrap();
        assert_eq!(&bytes[..4], b"%PDF");
    }
}
