//! Asset queries and mutations

use rusqlite::{params, OptionalExtension, Row};

use super::{non_blank, Store, StoreError};
use crate::entities::Asset;

const ASSET_COLUMNS: &str = "id, asset_code, sub_code, budget_year, name, details, \
     serial_number, category, quantity, acquisition_date, unit, price, note";

fn asset_from_row(row: &Row<'_>) -> rusqlite::Result<Asset> {
    Ok(Asset {
        id: row.get(0)?,
        asset_code: row.get(1)?,
        sub_code: row.get(2)?,
        budget_year: row.get(3)?,
        name: row.get(4)?,
        details: row.get(5)?,
        serial_number: row.get(6)?,
        category: row.get(7)?,
        quantity: row.get(8)?,
        acquisition_date: row.get(9)?,
        unit: row.get(10)?,
        price: row.get(11)?,
        note: row.get(12)?,
    })
}

fn validate(asset: &Asset) -> Result<(), StoreError> {
    if asset.asset_code.trim().is_empty() {
        return Err(StoreError::MissingField("asset_code"));
    }
    if asset.name.trim().is_empty() {
        return Err(StoreError::MissingField("name"));
    }
    Ok(())
}

impl Store {
    /// All assets, ordered by ascending id. This ordering is what the
    /// export pipeline consumes.
    pub fn list_assets(&self) -> Result<Vec<Asset>, StoreError> {
        let sql = format!("SELECT {} FROM assets ORDER BY id", ASSET_COLUMNS);
        let mut stmt = self.conn().prepare(&sql)?;
        let rows = stmt.query_map([], asset_from_row)?;
        let assets = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(assets)
    }

    pub fn get_asset(&self, id: i64) -> Result<Option<Asset>, StoreError> {
        let sql = format!("SELECT {} FROM assets WHERE id = ?1", ASSET_COLUMNS);
        let asset = self
            .conn()
            .query_row(&sql, params![id], asset_from_row)
            .optional()?;
        Ok(asset)
    }

    /// Case-insensitive substring match on name or asset code, ordered by
    /// ascending id.
    pub fn search_assets(&self, query: &str) -> Result<Vec<Asset>, StoreError> {
        let sql = format!(
            "SELECT {} FROM assets WHERE name LIKE ?1 OR asset_code LIKE ?1 ORDER BY id",
            ASSET_COLUMNS
        );
        let pattern = format!("%{}%", query);
        let mut stmt = self.conn().prepare(&sql)?;
        let rows = stmt.query_map(params![pattern], asset_from_row)?;
        let assets = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(assets)
    }

    /// Insert a new asset and return the stored row with its assigned id.
    pub(crate) fn insert_asset(&self, asset: &Asset) -> Result<Asset, StoreError> {
        validate(asset)?;
        self.conn().execute(
            "INSERT INTO assets (asset_code, sub_code, budget_year, name, details, \
             serial_number, category, quantity, acquisition_date, unit, price, note) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                asset.asset_code.trim(),
                non_blank(&asset.sub_code),
                non_blank(&asset.budget_year),
                asset.name.trim(),
                non_blank(&asset.details),
                non_blank(&asset.serial_number),
                non_blank(&asset.category),
                asset.quantity,
                asset.acquisition_date,
                non_blank(&asset.unit),
                asset.price,
                non_blank(&asset.note),
            ],
        )?;

        let id = self.conn().last_insert_rowid();
        self.get_asset(id)?.ok_or(StoreError::AssetNotFound(id))
    }

    /// Replace every field but the id.
    pub(crate) fn replace_asset(&self, asset: &Asset) -> Result<(), StoreError> {
        validate(asset)?;
        let changed = self.conn().execute(
            "UPDATE assets SET asset_code = ?1, sub_code = ?2, budget_year = ?3, \
             name = ?4, details = ?5, serial_number = ?6, category = ?7, quantity = ?8, \
             acquisition_date = ?9, unit = ?10, price = ?11, note = ?12 WHERE id = ?13",
            params![
                asset.asset_code.trim(),
                non_blank(&asset.sub_code),
                non_blank(&asset.budget_year),
                asset.name.trim(),
                non_blank(&asset.details),
                non_blank(&asset.serial_number),
                non_blank(&asset.category),
                asset.quantity,
                asset.acquisition_date,
                non_blank(&asset.unit),
                asset.price,
                non_blank(&asset.note),
                asset.id,
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::AssetNotFound(asset.id));
        }
        Ok(())
    }

    pub(crate) fn remove_asset(&self, id: i64) -> Result<(), StoreError> {
        let changed = self
            .conn()
            .execute("DELETE FROM assets WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::AssetNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn seeded() -> Store {
        Store::open_in_memory().unwrap()
    }

    fn sample() -> Asset {
        let mut asset = Asset::new("A-001", "Laptop");
        asset.category = Some("electronics".to_string());
        asset.quantity = 2;
        asset.acquisition_date = NaiveDate::from_ymd_opt(2023, 1, 10);
        asset.price = Some(599.0);
        asset
    }

    #[test]
    fn test_insert_assigns_id_and_round_trips() {
        let store = seeded();
        let session = store.login("admin", "admin").unwrap();

        let stored = session.add_asset(&sample()).unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(stored.asset_code, "A-001");
        assert_eq!(
            stored.acquisition_date,
            NaiveDate::from_ymd_opt(2023, 1, 10)
        );
        assert_eq!(stored.price, Some(599.0));

        let fetched = store.get_asset(stored.id).unwrap().unwrap();
        assert_eq!(fetched, stored);
    }

    #[test]
    fn test_insert_rejects_blank_required_fields() {
        let store = seeded();
        let session = store.login("admin", "admin").unwrap();

        let err = session.add_asset(&Asset::new("   ", "Laptop")).unwrap_err();
        assert!(matches!(err, StoreError::MissingField("asset_code")));

        let err = session.add_asset(&Asset::new("A-001", "")).unwrap_err();
        assert!(matches!(err, StoreError::MissingField("name")));
    }

    #[test]
    fn test_blank_optionals_stored_as_none() {
        let store = seeded();
        let session = store.login("admin", "admin").unwrap();

        let mut asset = sample();
        asset.sub_code = Some("   ".to_string());
        asset.note = Some(String::new());
        let stored = session.add_asset(&asset).unwrap();
        assert!(stored.sub_code.is_none());
        assert!(stored.note.is_none());
    }

    #[test]
    fn test_list_orders_by_ascending_id() {
        let store = seeded();
        let session = store.login("admin", "admin").unwrap();
        for code in ["C-3", "A-1", "B-2"] {
            session.add_asset(&Asset::new(code, "thing")).unwrap();
        }

        let ids: Vec<i64> = store.list_assets().unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_update_replaces_all_fields_but_id() {
        let store = seeded();
        let session = store.login("admin", "admin").unwrap();
        let mut asset = session.add_asset(&sample()).unwrap();

        asset.name = "Workstation".to_string();
        asset.price = None;
        asset.note = Some("relocated".to_string());
        session.update_asset(&asset).unwrap();

        let fetched = store.get_asset(asset.id).unwrap().unwrap();
        assert_eq!(fetched.name, "Workstation");
        assert!(fetched.price.is_none());
        assert_eq!(fetched.note.as_deref(), Some("relocated"));
    }

    #[test]
    fn test_update_missing_asset_fails() {
        let store = seeded();
        let session = store.login("admin", "admin").unwrap();
        let mut asset = sample();
        asset.id = 99;
        let err = session.update_asset(&asset).unwrap_err();
        assert!(matches!(err, StoreError::AssetNotFound(99)));
    }

    #[test]
    fn test_delete_removes_row() {
        let store = seeded();
        let session = store.login("admin", "admin").unwrap();
        let stored = session.add_asset(&sample()).unwrap();

        session.delete_asset(stored.id).unwrap();
        assert!(store.get_asset(stored.id).unwrap().is_none());

        let err = session.delete_asset(stored.id).unwrap_err();
        assert!(matches!(err, StoreError::AssetNotFound(_)));
    }

    #[test]
    fn test_deleted_ids_are_never_reused() {
        let store = seeded();
        let session = store.login("admin", "admin").unwrap();
        let first = session.add_asset(&Asset::new("A-1", "one")).unwrap();
        session.delete_asset(first.id).unwrap();

        let second = session.add_asset(&Asset::new("A-2", "two")).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_search_matches_name_and_code_case_insensitive() {
        let store = seeded();
        let session = store.login("admin", "admin").unwrap();
        session.add_asset(&Asset::new("LT-100", "Laptop")).unwrap();
        session.add_asset(&Asset::new("CH-200", "Chair")).unwrap();

        let by_name = store.search_assets("lap").unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Laptop");

        let by_code = store.search_assets("ch-").unwrap();
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].asset_code, "CH-200");

        assert!(store.search_assets("printer").unwrap().is_empty());
    }
}
