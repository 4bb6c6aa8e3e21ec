//! Database schema initialization

use super::{Store, StoreError};

impl Store {
    /// Apply the schema. Every statement is create-if-absent, so reopening
    /// an existing database is a no-op.
    pub(super) fn init_schema(&self) -> Result<(), StoreError> {
        // AUTOINCREMENT keeps deleted ids from ever being reassigned
        self.conn().execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS assets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                asset_code TEXT NOT NULL,
                sub_code TEXT,
                budget_year TEXT,
                name TEXT NOT NULL,
                details TEXT,
                serial_number TEXT,
                category TEXT,
                quantity INTEGER NOT NULL DEFAULT 1,
                acquisition_date TEXT,
                unit TEXT,
                price REAL,
                note TEXT
            );
            CREATE INDEX IF NOT EXISTS idx_assets_asset_code ON assets(asset_code);
            CREATE INDEX IF NOT EXISTS idx_assets_name ON assets(name);

            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                quantity INTEGER NOT NULL DEFAULT 0,
                location TEXT,
                note TEXT
            );
            CREATE INDEX IF NOT EXISTS idx_items_name ON items(name);

            CREATE TABLE IF NOT EXISTS users (
                username TEXT PRIMARY KEY,
                password_hash TEXT NOT NULL
            );
            "#,
        )?;

        Ok(())
    }
}
