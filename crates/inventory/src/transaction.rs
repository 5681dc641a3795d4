use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{ItemId, TransactionId, UserId};

/// What kind of stock movement a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Receive,
    Checkout,
    CountAdjustment,
    Ordered,
}

impl TransactionKind {
    /// Stable type name, as stored in the transaction log.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Receive => "inventory.receive",
            TransactionKind::Checkout => "inventory.checkout",
            TransactionKind::CountAdjustment => "inventory.count_adjustment",
            TransactionKind::Ordered => "inventory.ordered",
        }
    }
}

/// Transaction log entry. Immutable once written; the caller appends it to
/// the store alongside the quantity change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryTransaction {
    pub id: TransactionId,
    pub item_id: ItemId,
    pub kind: TransactionKind,
    pub quantity_delta: i64,
    pub previous_quantity: i64,
    pub new_quantity: i64,
    pub actor: UserId,
    pub occurred_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Write payload for one item: the new on-hand quantity plus the transaction
/// that explains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub item_id: ItemId,
    pub current_quantity: i64,
    pub transaction: InventoryTransaction,
}

impl StockUpdate {
    /// Build a payload moving `item_id` from `previous` to `new`.
    pub(crate) fn new(
        item_id: &ItemId,
        kind: TransactionKind,
        previous: i64,
        new: i64,
        actor: &UserId,
        occurred_at: DateTime<Utc>,
        notes: Option<String>,
    ) -> Self {
        Self {
            item_id: item_id.clone(),
            current_quantity: new,
            transaction: InventoryTransaction {
                id: TransactionId::new(),
                item_id: item_id.clone(),
                kind,
                quantity_delta: new - previous,
                previous_quantity: previous,
                new_quantity: new,
                actor: actor.clone(),
                occurred_at,
                notes: notes.filter(|n| !n.trim().is_empty()),
            },
        }
    }
}
