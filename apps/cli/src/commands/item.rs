//! # Item Commands
//!
//! Catalog listing, adding, searching, and editing.
//!
//! ## Edit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  grocer edit apple --price 60                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  find_by_name("apple")  ── None ──► NOT_FOUND                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ItemDraft::from_item(current)  ← start from the stored values         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply only the flags that were given                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  items().edit("apple", draft)   ← validates, saves, commits            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use grocer_core::{Category, ItemDraft, QuantityLabel};
use grocer_store::Store;
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::render;

/// Field changes for `grocer edit`. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub quantity: Option<QuantityLabel>,
    pub price: Option<i64>,
}

impl ItemChanges {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
    }

    fn apply(self, draft: &mut ItemDraft) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(quantity) = self.quantity {
            draft.quantity = quantity;
        }
        if let Some(price) = self.price {
            draft.price = price;
        }
    }
}

/// `grocer items`
pub async fn list_items(store: &Store) -> CliResult<String> {
    let items = store.items().list().await;
    debug!(count = items.len(), "Listing items");
    Ok(render::item_table(&items))
}

/// `grocer items --names`
pub async fn list_names(store: &Store) -> CliResult<String> {
    let names = store.items().names().await;
    Ok(names.into_iter().map(|n| n + "\n").collect())
}

/// `grocer add`
pub async fn add_item(store: &Store, draft: ItemDraft) -> CliResult<String> {
    let item = store.items().add(draft).await?;
    Ok(format!(
        "Added {} ({}, {}) at {}\n",
        item.name,
        item.category,
        item.quantity,
        item.price()
    ))
}

/// `grocer search NAME`
///
/// Not finding the item is a normal outcome and prints a message.
pub async fn search_item(store: &Store, name: &str) -> CliResult<String> {
    match store.items().find_by_name(name).await {
        Some(item) => Ok(render::item_detail(&item)),
        None => Ok(format!("No item named '{}'.\n", name.trim())),
    }
}

/// `grocer edit NAME [--name] [--category] [--quantity] [--price]`
pub async fn edit_item(store: &Store, name: &str, changes: ItemChanges) -> CliResult<String> {
    if changes.is_empty() {
        return Err(CliError::validation(
            "Nothing to change: pass at least one of --name, --category, --quantity, --price",
        ));
    }

    let items = store.items();
    let current = items
        .find_by_name(name)
        .await
        .ok_or_else(|| CliError::not_found("Item", name.trim()))?;

    let mut draft = ItemDraft::from_item(&current);
    changes.apply(&mut draft);

    let updated = items.edit(name, draft).await?;
    Ok(format!(
        "Updated {}:\n{}",
        current.name,
        render::item_detail(&updated)
    ))
}

/// `grocer options`
pub fn list_options() -> String {
    render::options()
}
