//! The export pipeline.
//!
//! Takes the full asset list, in store order, and renders it into one of
//! three document encodings. All three formats share the column projection
//! in [`columns`], so they agree on labels, ordering, and how missing
//! values read.

mod columns;
mod document;
mod pdf;
mod spreadsheet;

pub use columns::{Cell, Column, COLUMNS};

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::entities::Asset;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),
    #[error("export write failed: {0}")]
    WriteFailure(String),
}

/// The three supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// xlsx workbook, one typed row per record
    Spreadsheet,
    /// docx with a single table, all values as text
    Document,
    /// PDF of flat `label: value` lines, no table structure
    Pdf,
}

impl ExportFormat {
    /// Conventional output filename for this format.
    pub fn default_filename(&self) -> &'static str {
        match self {
            ExportFormat::Spreadsheet => "assets.xlsx",
            ExportFormat::Document => "assets.docx",
            ExportFormat::Pdf => "assets.pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ExportFormat::Spreadsheet => "tabular-spreadsheet",
            ExportFormat::Document => "tabular-document",
            ExportFormat::Pdf => "flat-text-pdf",
        };
        write!(f, "{}", tag)
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    /// Accepts the canonical kind tags plus the file-extension shorthands
    /// people actually type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tabular-spreadsheet" | "xlsx" | "excel" => Ok(ExportFormat::Spreadsheet),
            "tabular-document" | "docx" | "word" => Ok(ExportFormat::Document),
            "flat-text-pdf" | "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Render records into an in-memory document of the requested format.
pub fn export(records: &[Asset], format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Spreadsheet => spreadsheet::render(records),
        ExportFormat::Document => document::render(records),
        ExportFormat::Pdf => pdf::render(records),
    }
}

/// Render and write to `path`, replacing whatever was there.
///
/// The document is staged into a temp file beside the destination and
/// renamed into place, so a failure part-way never leaves a truncated
/// file at `path`.
pub fn export_to_path(
    records: &[Asset],
    format: ExportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    let bytes = export(records, format)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged =
        NamedTempFile::new_in(dir).map_err(|e| ExportError::WriteFailure(e.to_string()))?;
    staged
        .write_all(&bytes)
        .map_err(|e| ExportError::WriteFailure(e.to_string()))?;
    staged
        .persist(path)
        .map_err(|e| ExportError::WriteFailure(e.to_string()))?;
    Ok(())
}
