//! Reorder & reconciliation engine.
//!
//! This crate contains the inventory rules, implemented purely as
//! deterministic functions over a caller-supplied snapshot (no IO, no HTTP,
//! no storage). Callers fetch records, invoke the engine, and persist the
//! returned payloads themselves.

pub mod count;
pub mod item;
pub mod movement;
pub mod reorder;
pub mod shopping_list;
pub mod transaction;

pub use count::{
    aggregate_counts, apply_count, cash_variance, CashStatus, CountSubmission, CountTotals,
};
pub use item::{validate_snapshot, InventoryItem};
pub use movement::{checkout, mark_ordered, receive};
pub use reorder::{
    classify_priority, count_by_priority, needs_reorder, reorder_alerts, sort_alerts, Priority,
    PriorityCounts, ReorderAlert,
};
pub use shopping_list::{build_shopping_list, estimated_cost, total_estimated_cost};
pub use transaction::{InventoryTransaction, StockUpdate, TransactionKind};
