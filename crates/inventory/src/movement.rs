//! Stock movement payloads for receiving, checkout, and procurement.
//!
//! Each function validates the request against the item snapshot and returns
//! the [`StockUpdate`] the caller persists. Nothing here writes anywhere.

use chrono::{DateTime, Utc};

use stockroom_core::{DomainError, DomainResult, UserId};

use crate::item::InventoryItem;
use crate::reorder::ReorderAlert;
use crate::transaction::{StockUpdate, TransactionKind};

fn ensure_positive(quantity: i64, what: &str) -> DomainResult<()> {
    if quantity <= 0 {
        return Err(DomainError::invalid_input(format!(
            "{what} quantity must be greater than zero"
        )));
    }
    Ok(())
}

/// Goods arrived: add `quantity` to on-hand stock.
pub fn receive(
    item: &InventoryItem,
    quantity: i64,
    actor: &UserId,
    occurred_at: DateTime<Utc>,
    notes: Option<String>,
) -> DomainResult<StockUpdate> {
    ensure_positive(quantity, "received")?;

    let new_quantity = item
        .current_quantity
        .checked_add(quantity)
        .ok_or_else(|| DomainError::invalid_input("received quantity is too large"))?;

    Ok(StockUpdate::new(
        &item.id,
        TransactionKind::Receive,
        item.current_quantity,
        new_quantity,
        actor,
        occurred_at,
        notes,
    ))
}

/// Units taken off the shelf: remove `quantity` from on-hand stock.
pub fn checkout(
    item: &InventoryItem,
    quantity: i64,
    actor: &UserId,
    occurred_at: DateTime<Utc>,
    notes: Option<String>,
) -> DomainResult<StockUpdate> {
    ensure_positive(quantity, "checkout")?;

    if quantity > item.current_quantity {
        tracing::warn!(
            item_id = %item.id,
            requested = quantity,
            available = item.current_quantity,
            "checkout exceeds stock on hand"
        );
        return Err(DomainError::insufficient_stock(
            quantity,
            item.current_quantity,
        ));
    }

    Ok(StockUpdate::new(
        &item.id,
        TransactionKind::Checkout,
        item.current_quantity,
        item.current_quantity - quantity,
        actor,
        occurred_at,
        notes,
    ))
}

/// Bulk-mark the selected reorder items as ordered.
///
/// On-hand quantities don't change; each payload logs the order so the next
/// visit can show `last_ordered_at`.
pub fn mark_ordered(
    selected: &[ReorderAlert],
    actor: &UserId,
    occurred_at: DateTime<Utc>,
) -> DomainResult<Vec<StockUpdate>> {
    if selected.is_empty() {
        return Err(DomainError::empty_selection(
            "select at least one item to mark as ordered",
        ));
    }

    let updates = selected
        .iter()
        .map(|alert| {
            let item = &alert.item;
            let notes = format!(
                "ordered {} {} ({} priority)",
                item.reorder_quantity,
                item.unit_label(),
                alert.priority
            );
            StockUpdate::new(
                &item.id,
                TransactionKind::Ordered,
                item.current_quantity,
                item.current_quantity,
                actor,
                occurred_at,
                Some(notes),
            )
        })
        .collect::<Vec<_>>();

    tracing::info!(count = updates.len(), actor = %actor, "marked items as ordered");
    Ok(updates)
}
