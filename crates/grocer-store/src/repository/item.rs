//! # Item Repository
//!
//! The Item Catalog: list, add, find, and edit items.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add(draft) / edit(name, draft)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  draft.validate()  ── invalid ──► StoreError::Core(Validation)         │
//! │       │                                                                 │
//! │       ▼  lock collections                                              │
//! │  next = items.clone() + change                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  save_collection(Items, &next) ── fails ──► memory untouched           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  items = next                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use grocer_core::catalog;
use grocer_core::{Item, ItemDraft};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::snapshot::{Collection, SnapshotStore};
use crate::store::Collections;

/// Repository for catalog operations.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    snapshots: SnapshotStore,
    state: Arc<Mutex<Collections>>,
}

impl ItemRepository {
    pub(crate) fn new(snapshots: SnapshotStore, state: Arc<Mutex<Collections>>) -> Self {
        ItemRepository { snapshots, state }
    }

    /// All items in insertion order.
    pub async fn list(&self) -> Vec<Item> {
        self.state.lock().await.items.clone()
    }

    /// Item names in list order, duplicates included.
    pub async fn names(&self) -> Vec<String> {
        self.state
            .lock()
            .await
            .items
            .iter()
            .map(|item| item.name.clone())
            .collect()
    }

    /// Number of items in the catalog.
    pub async fn count(&self) -> usize {
        self.state.lock().await.items.len()
    }

    /// Adds an item and persists the full catalog.
    ///
    /// Duplicate names are accepted; lookups will keep resolving to the
    /// earlier item.
    ///
    /// ## Returns
    /// * `Ok(Item)` - The stored item (name trimmed)
    /// * `Err(StoreError::Core(Validation))` - Empty name or price < 1
    pub async fn add(&self, draft: ItemDraft) -> StoreResult<Item> {
        let item = draft.validate()?;
        debug!(name = %item.name, "Adding item");

        let mut state = self.state.lock().await;
        let mut next = state.items.clone();
        next.push(item.clone());

        self.snapshots.save_collection(Collection::Items, &next).await?;
        state.items = next;

        info!(name = %item.name, price = item.price, count = state.items.len(), "Item added");
        Ok(item)
    }

    /// Finds the first item whose name matches, ignoring case.
    ///
    /// ## Returns
    /// * `Some(Item)` - Item found
    /// * `None` - No item has that name (a normal outcome)
    pub async fn find_by_name(&self, name: &str) -> Option<Item> {
        debug!(query = %name, "Finding item");
        let state = self.state.lock().await;
        catalog::find_by_name(&state.items, name).cloned()
    }

    /// Overwrites every field of the first item matching `name`, then
    /// persists the full catalog.
    ///
    /// ## Returns
    /// * `Ok(Item)` - The item as now stored
    /// * `Err(StoreError::NotFound)` - No item has that name
    /// * `Err(StoreError::Core(Validation))` - The new values are invalid
    pub async fn edit(&self, name: &str, draft: ItemDraft) -> StoreResult<Item> {
        let updated = draft.validate()?;
        debug!(name = %name, new_name = %updated.name, "Editing item");

        let mut state = self.state.lock().await;
        let idx = catalog::position_by_name(&state.items, name)
            .ok_or_else(|| StoreError::not_found("Item", name.trim()))?;

        let mut next = state.items.clone();
        next[idx] = updated.clone();

        self.snapshots.save_collection(Collection::Items, &next).await?;
        state.items = next;

        info!(old_name = %name.trim(), new_name = %updated.name, price = updated.price, "Item updated");
        Ok(updated)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::StoreError;
    use crate::snapshot::{StoreConfig, ITEMS_FILE};
    use crate::Store;
    use grocer_core::{Category, CoreError, ItemDraft, QuantityLabel, ValidationError};
    use tempfile::TempDir;

    async fn open(dir: &TempDir) -> Store {
        Store::open(StoreConfig::new(dir.path())).await.unwrap()
    }

    fn draft(name: &str, price: i64) -> ItemDraft {
        ItemDraft::new(name, Category::Fruits, QuantityLabel::OneKg, price)
    }

    #[tokio::test]
    async fn test_add_appends_last() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir).await.items();

        repo.add(draft("Apple", 50)).await.unwrap();
        let banana = repo.add(draft("Banana", 40)).await.unwrap();

        let items = repo.list().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items.last(), Some(&banana));
    }

    #[tokio::test]
    async fn test_add_persists() {
        let dir = TempDir::new().unwrap();
        open(&dir).await.items().add(draft("Apple", 50)).await.unwrap();

        let reopened = open(&dir).await;
        let items = reopened.items().list().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Apple");
    }

    #[tokio::test]
    async fn test_add_rejects_invalid() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir).await.items();

        let err = repo.add(draft("", 50)).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::Validation(ValidationError::Required { .. }))
        ));

        let err = repo.add(draft("Apple", 0)).await.unwrap_err();
        assert!(err.is_validation());

        assert_eq!(repo.count().await, 0);
        assert!(!dir.path().join(ITEMS_FILE).exists());
    }

    #[tokio::test]
    async fn test_duplicate_names_allowed() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir).await.items();

        repo.add(draft("Milk", 30)).await.unwrap();
        repo.add(draft("milk", 55)).await.unwrap();

        assert_eq!(repo.count().await, 2);
        assert_eq!(repo.find_by_name("MILK").await.unwrap().price, 30);
        assert_eq!(repo.names().await, vec!["Milk", "milk"]);
    }

    #[tokio::test]
    async fn test_find_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir).await.items();
        repo.add(draft("milk", 30)).await.unwrap();

        assert_eq!(repo.find_by_name("MILK").await.unwrap().name, "milk");
        assert!(repo.find_by_name("cheese").await.is_none());
    }

    #[tokio::test]
    async fn test_edit_renames_in_place() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir).await.items();
        repo.add(draft("Apple", 50)).await.unwrap();
        repo.add(draft("Banana", 40)).await.unwrap();

        let edited = repo
            .edit(
                "apple",
                ItemDraft::new("Green Apple", Category::Fruits, QuantityLabel::TwoKg, 90),
            )
            .await
            .unwrap();

        assert_eq!(edited.name, "Green Apple");
        assert_eq!(repo.list().await[0], edited);
        assert_eq!(repo.find_by_name("green apple").await, Some(edited));
        assert!(repo.find_by_name("Apple").await.is_none());
    }

    #[tokio::test]
    async fn test_edit_old_name_still_resolves_to_other_item() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir).await.items();
        repo.add(draft("Milk", 30)).await.unwrap();
        repo.add(draft("Milk", 55)).await.unwrap();

        repo.edit("Milk", draft("Toned Milk", 32)).await.unwrap();

        // The second "Milk" is now the first match
        assert_eq!(repo.find_by_name("Milk").await.unwrap().price, 55);
    }

    #[tokio::test]
    async fn test_edit_missing_item() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir).await.items();

        let err = repo.edit("Ghost", draft("Ghost", 10)).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref id, .. } if id == "Ghost"));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_edit_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir).await.items();
        repo.add(draft("Apple", 50)).await.unwrap();

        let err = repo.edit("Apple", draft("Apple", 0)).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(repo.find_by_name("Apple").await.unwrap().price, 50);
    }

    #[tokio::test]
    async fn test_failed_save_leaves_memory_unchanged() {
        let dir = TempDir::new().unwrap();
        let repo = open(&dir).await.items();
        repo.add(draft("Apple", 50)).await.unwrap();

        // A non-empty directory where the snapshot belongs makes the rename fail
        let snapshot = dir.path().join(ITEMS_FILE);
        std::fs::remove_file(&snapshot).unwrap();
        std::fs::create_dir(&snapshot).unwrap();
        std::fs::write(snapshot.join("keep"), "x").unwrap();

        let err = repo.add(draft("Banana", 40)).await.unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert_eq!(repo.names().await, vec!["Apple"]);

        let err = repo.edit("Apple", draft("Apple", 60)).await.unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert_eq!(repo.find_by_name("Apple").await.unwrap().price, 50);
    }
}
