//! Loading store exports from disk.
//!
//! A snapshot is the JSON array of inventory documents exported from the
//! backing store. A counts file maps item ids to the text a clerk typed in.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use stockroom_core::{DomainError, DomainResult, ItemId};
use stockroom_inventory::{validate_snapshot, InventoryItem};

/// Read and validate a snapshot file.
pub fn load_items(path: &Path) -> anyhow::Result<Vec<InventoryItem>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let items: Vec<InventoryItem> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;
    validate_snapshot(&items)
        .with_context(|| format!("invalid record in snapshot {}", path.display()))?;

    tracing::info!(path = %path.display(), items = items.len(), "loaded snapshot");
    Ok(items)
}

/// Read a counts file: `{ "<item id>": "<entered text>" | <number> }`.
///
/// Values stay as raw text; parsing happens per item so a bad entry is
/// reported against its item.
pub fn load_counts(path: &Path) -> anyhow::Result<BTreeMap<String, String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read counts {}", path.display()))?;
    let entries: BTreeMap<String, Value> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse counts {}", path.display()))?;

    Ok(entries
        .into_iter()
        .map(|(id, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (id, text)
        })
        .collect())
}

/// Look up an item by id.
pub fn find_item<'a>(items: &'a [InventoryItem], id: &ItemId) -> DomainResult<&'a InventoryItem> {
    items
        .iter()
        .find(|item| &item.id == id)
        .ok_or_else(|| DomainError::not_found(format!("item {id} is not in the snapshot")))
}
