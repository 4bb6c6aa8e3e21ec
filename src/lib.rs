//! AIT: Asset & Inventory Toolkit
//!
//! A command-line tool for tracking assets and inventory items in a local
//! SQLite database, with export of the asset table to spreadsheet,
//! word-processor, and PDF documents.

pub mod cli;
pub mod core;
pub mod entities;
pub mod export;
