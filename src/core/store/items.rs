//! Inventory item queries and mutations

use rusqlite::{params, OptionalExtension, Row};

use super::{non_blank, Store, StoreError};
use crate::entities::InventoryItem;

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<InventoryItem> {
    Ok(InventoryItem {
        id: row.get(0)?,
        name: row.get(1)?,
        quantity: row.get(2)?,
        location: row.get(3)?,
        note: row.get(4)?,
    })
}

fn validate(item: &InventoryItem) -> Result<(), StoreError> {
    if item.name.trim().is_empty() {
        return Err(StoreError::MissingField("name"));
    }
    Ok(())
}

impl Store {
    /// All items, ordered by ascending id.
    pub fn list_items(&self) -> Result<Vec<InventoryItem>, StoreError> {
        let mut stmt = self
            .conn()
            .prepare("SELECT id, name, quantity, location, note FROM items ORDER BY id")?;
        let rows = stmt.query_map([], item_from_row)?;
        let items = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    pub fn get_item(&self, id: i64) -> Result<Option<InventoryItem>, StoreError> {
        let item = self
            .conn()
            .query_row(
                "SELECT id, name, quantity, location, note FROM items WHERE id = ?1",
                params![id],
                item_from_row,
            )
            .optional()?;
        Ok(item)
    }

    /// Case-insensitive substring match on name or location.
    pub fn search_items(&self, query: &str) -> Result<Vec<InventoryItem>, StoreError> {
        let pattern = format!("%{}%", query);
        let mut stmt = self.conn().prepare(
            "SELECT id, name, quantity, location, note FROM items \
             WHERE name LIKE ?1 OR location LIKE ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![pattern], item_from_row)?;
        let items = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    /// Insert a new item and return the stored row with its assigned id.
    pub(crate) fn insert_item(&self, item: &InventoryItem) -> Result<InventoryItem, StoreError> {
        validate(item)?;
        self.conn().execute(
            "INSERT INTO items (name, quantity, location, note) VALUES (?1, ?2, ?3, ?4)",
            params![
                item.name.trim(),
                item.quantity,
                non_blank(&item.location),
                non_blank(&item.note),
            ],
        )?;

        let id = self.conn().last_insert_rowid();
        self.get_item(id)?.ok_or(StoreError::ItemNotFound(id))
    }

    /// Replace every field but the id.
    pub(crate) fn replace_item(&self, item: &InventoryItem) -> Result<(), StoreError> {
        validate(item)?;
        let changed = self.conn().execute(
            "UPDATE items SET name = ?1, quantity = ?2, location = ?3, note = ?4 WHERE id = ?5",
            params![
                item.name.trim(),
                item.quantity,
                non_blank(&item.location),
                non_blank(&item.note),
                item.id,
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::ItemNotFound(item.id));
        }
        Ok(())
    }

    pub(crate) fn remove_item(&self, id: i64) -> Result<(), StoreError> {
        let changed = self
            .conn()
            .execute("DELETE FROM items WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::ItemNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_crud_round_trip() {
        let store = Store::open_in_memory().unwrap();
        let session = store.login("admin", "admin").unwrap();

        let mut item = InventoryItem::new("toner");
        item.quantity = 4;
        item.location = Some("cabinet 2".to_string());
        let stored = session.add_item(&item).unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(stored.quantity, 4);

        let mut updated = stored.clone();
        updated.quantity = 3;
        updated.note = Some("one used".to_string());
        session.update_item(&updated).unwrap();
        let fetched = store.get_item(stored.id).unwrap().unwrap();
        assert_eq!(fetched.quantity, 3);
        assert_eq!(fetched.note.as_deref(), Some("one used"));

        session.delete_item(stored.id).unwrap();
        assert!(store.get_item(stored.id).unwrap().is_none());
    }

    #[test]
    fn test_item_requires_name() {
        let store = Store::open_in_memory().unwrap();
        let session = store.login("admin", "admin").unwrap();
        let err = session.add_item(&InventoryItem::new("  ")).unwrap_err();
        assert!(matches!(err, StoreError::MissingField("name")));
    }

    #[test]
    fn test_item_search_matches_location() {
        let store = Store::open_in_memory().unwrap();
        let session = store.login("admin", "admin").unwrap();

        let mut item = InventoryItem::new("AA batteries");
        item.location = Some("Storage Room B".to_string());
        session.add_item(&item).unwrap();
        session.add_item(&InventoryItem::new("cable ties")).unwrap();

        let found = store.search_items("room b").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "AA batteries");
    }
}
