//! # Snapshot Persistence
//!
//! Whole-collection JSON snapshots for items and bills.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Snapshot Files                                     │
//! │                                                                         │
//! │  <data_dir>/                                                           │
//! │  ├── items_data.json   [{name, category, quantity, price}, ...]        │
//! │  └── bills_data.json   [{name, date, items, total}, ...]               │
//! │                                                                         │
//! │  load_collection(Items)                                                │
//! │       ├── file missing      → []            (first run)                │
//! │       ├── parses            → Vec<Item>                                │
//! │       └── empty / garbage   → StoreError::Corrupt                      │
//! │                                                                         │
//! │  save_collection(Items, &items)                                        │
//! │       1. serialize the FULL list (4-space indent)                      │
//! │       2. write  <data_dir>/.items_data.json.tmp                        │
//! │       3. fsync the temp file                                           │
//! │       4. rename over items_data.json  ← readers see old or new, never  │
//! │                                         a half-written file            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

/// Default file name of the items snapshot.
pub const ITEMS_FILE: &str = "items_data.json";

/// Default file name of the bills snapshot.
pub const BILLS_FILE: &str = "bills_data.json";

const TMP_SUFFIX: &str = "tmp";

// =============================================================================
// Collection
// =============================================================================

/// The two persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Items,
    Bills,
}

impl Collection {
    /// Short name used in errors and logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Collection::Items => "items",
            Collection::Bills => "bills",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use grocer_store::StoreConfig;
///
/// let config = StoreConfig::new("./data").items_file("inventory.json");
/// assert!(config.path_for(grocer_store::Collection::Items).ends_with("inventory.json"));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding both snapshot files. Created on first save.
    pub data_dir: PathBuf,

    /// Items snapshot file name.
    /// Default: items_data.json
    pub items_file: String,

    /// Bills snapshot file name.
    /// Default: bills_data.json
    pub bills_file: String,
}

impl StoreConfig {
    /// Creates a configuration rooted at `data_dir` with default file names.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            items_file: ITEMS_FILE.to_string(),
            bills_file: BILLS_FILE.to_string(),
        }
    }

    /// Sets the items snapshot file name.
    pub fn items_file(mut self, name: impl Into<String>) -> Self {
        self.items_file = name.into();
        self
    }

    /// Sets the bills snapshot file name.
    pub fn bills_file(mut self, name: impl Into<String>) -> Self {
        self.bills_file = name.into();
        self
    }

    /// Full path of a collection's snapshot.
    pub fn path_for(&self, collection: Collection) -> PathBuf {
        match collection {
            Collection::Items => self.data_dir.join(&self.items_file),
            Collection::Bills => self.data_dir.join(&self.bills_file),
        }
    }
}

// =============================================================================
// Snapshot Store
// =============================================================================

/// Reads and writes whole-collection snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    config: StoreConfig,
}

impl SnapshotStore {
    pub fn new(config: StoreConfig) -> Self {
        SnapshotStore { config }
    }

    /// Loads a collection.
    ///
    /// ## Returns
    /// * `Ok(vec![])` - No snapshot yet (first run)
    /// * `Ok(records)` - Previously saved records, in saved order
    /// * `Err(StoreError::Corrupt)` - File exists but is not a valid list
    pub async fn load_collection<T>(&self, collection: Collection) -> StoreResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let path = self.config.path_for(collection);

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(%collection, path = %path.display(), "No snapshot yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(StoreError::corrupt(collection.name(), "file is not valid UTF-8"));
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        let records: Vec<T> = serde_json::from_str(&contents)
            .map_err(|e| StoreError::corrupt(collection.name(), e.to_string()))?;

        debug!(%collection, count = records.len(), "Snapshot loaded");
        Ok(records)
    }

    /// Atomically replaces a collection's snapshot with `records`.
    pub async fn save_collection<T>(&self, collection: Collection, records: &[T]) -> StoreResult<()>
    where
        T: Serialize,
    {
        let path = self.config.path_for(collection);
        let bytes = encode_pretty(records)?;

        tokio::fs::create_dir_all(&self.config.data_dir)
            .await
            .map_err(|e| StoreError::io(&self.config.data_dir, e))?;

        let tmp = temp_path_for(&path);
        if let Err(err) = write_atomic(&tmp, &path, &bytes).await {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!(path = %tmp.display(), error = %cleanup, "Could not remove temp snapshot");
                }
            }
            return Err(err);
        }

        debug!(%collection, count = records.len(), path = %path.display(), "Snapshot saved");
        Ok(())
    }
}

/// JSON with 4-space indentation, matching the layout operators already
/// have on disk.
fn encode_pretty<T: Serialize>(records: &[T]) -> StoreResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut serializer)
        .map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(buf)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.{}", file_name, TMP_SUFFIX))
}

async fn write_atomic(tmp: &Path, path: &Path, bytes: &[u8]) -> StoreResult<()> {
    let mut file = tokio::fs::File::create(tmp)
        .await
        .map_err(|e| StoreError::io(tmp, e))?;
    file.write_all(bytes).await.map_err(|e| StoreError::io(tmp, e))?;
    file.flush().await.map_err(|e| StoreError::io(tmp, e))?;
    file.sync_all().await.map_err(|e| StoreError::io(tmp, e))?;
    drop(file);

    tokio::fs::rename(tmp, path)
        .await
        .map_err(|e| StoreError::io(path, e))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use grocer_core::{Bill, BillLine, Category, Item, QuantityLabel};
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> SnapshotStore {
        SnapshotStore::new(StoreConfig::new(dir.path()))
    }

    fn sample_items() -> Vec<Item> {
        vec![
            Item {
                name: "Apple".to_string(),
                category: Category::Fruits,
                quantity: QuantityLabel::OneKg,
                price: 50,
            },
            Item {
                name: "Orange Juice".to_string(),
                category: Category::Beverages,
                quantity: QuantityLabel::OneLitre,
                price: 120,
            },
        ]
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new("/tmp/grocer")
            .items_file("i.json")
            .bills_file("b.json");

        assert_eq!(config.path_for(Collection::Items), PathBuf::from("/tmp/grocer/i.json"));
        assert_eq!(config.path_for(Collection::Bills), PathBuf::from("/tmp/grocer/b.json"));
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let items: Vec<Item> = store(&dir).load_collection(Collection::Items).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_items_round_trip() {
        let dir = TempDir::new().unwrap();
        let snapshots = store(&dir);

        snapshots
            .save_collection(Collection::Items, &sample_items())
            .await
            .unwrap();
        let loaded: Vec<Item> = snapshots.load_collection(Collection::Items).await.unwrap();

        assert_eq!(loaded, sample_items());
    }

    #[tokio::test]
    async fn test_bills_round_trip() {
        let dir = TempDir::new().unwrap();
        let snapshots = store(&dir);
        let bills = vec![Bill {
            name: "Asha".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(3, 4, 5)
                .unwrap(),
            items: vec![BillLine {
                name: "Apple".to_string(),
                qty: 3,
                price: 50,
            }],
            total: 150,
        }];

        snapshots.save_collection(Collection::Bills, &bills).await.unwrap();
        let loaded: Vec<Bill> = snapshots.load_collection(Collection::Bills).await.unwrap();

        assert_eq!(loaded, bills);
    }

    #[tokio::test]
    async fn test_snapshot_layout() {
        let dir = TempDir::new().unwrap();
        let snapshots = store(&dir);
        snapshots
            .save_collection(Collection::Items, &sample_items()[..1])
            .await
            .unwrap();

        let raw = std::fs::read_to_string(dir.path().join(ITEMS_FILE)).unwrap();
        assert!(raw.starts_with("[\n    {\n        \"name\": \"Apple\""));
        assert!(raw.contains("\"category\": \"Fruits\""));
        assert!(raw.contains("\"quantity\": \"1 kg\""));
        assert!(raw.contains("\"price\": 50"));
    }

    #[tokio::test]
    async fn test_save_overwrites_whole_collection() {
        let dir = TempDir::new().unwrap();
        let snapshots = store(&dir);
        let items = sample_items();

        snapshots.save_collection(Collection::Items, &items).await.unwrap();
        snapshots
            .save_collection(Collection::Items, &items[1..])
            .await
            .unwrap();

        let loaded: Vec<Item> = snapshots.load_collection(Collection::Items).await.unwrap();
        assert_eq!(loaded, items[1..].to_vec());
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        store(&dir)
            .save_collection(Collection::Items, &sample_items())
            .await
            .unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![ITEMS_FILE.to_string()]);
    }

    #[tokio::test]
    async fn test_creates_missing_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let snapshots = SnapshotStore::new(StoreConfig::new(&nested));

        snapshots
            .save_collection(Collection::Items, &sample_items())
            .await
            .unwrap();
        assert!(nested.join(ITEMS_FILE).exists());
    }

    #[tokio::test]
    async fn test_garbage_is_corrupt() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(ITEMS_FILE), "{ not json").unwrap();

        let err = store(&dir)
            .load_collection::<Item>(Collection::Items)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref collection, .. } if collection == "items"));
    }

    #[tokio::test]
    async fn test_empty_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(BILLS_FILE), "").unwrap();

        let err = store(&dir)
            .load_collection::<Bill>(Collection::Bills)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_corrupt() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(ITEMS_FILE),
            r#"[{"name": "Apple", "category": "Meat", "quantity": "1 kg", "price": 50}]"#,
        )
        .unwrap();

        let err = store(&dir)
            .load_collection::<Item>(Collection::Items)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }
}
