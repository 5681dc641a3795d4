//! Plain-text shopping list for export/sharing.

use core::fmt::Write as _;

use stockroom_core::{DomainError, DomainResult, Money};

use crate::item::InventoryItem;
use crate::reorder::{Priority, ReorderAlert};

/// `unit_cost × reorder_quantity`, or `None` when the item has no cost.
pub fn estimated_cost(item: &InventoryItem) -> Option<Money> {
    item.unit_cost.map(|cost| cost.saturating_mul(item.reorder_quantity))
}

/// Sum of estimated costs; items without a unit cost contribute 0.
pub fn total_estimated_cost(alerts: &[ReorderAlert]) -> Money {
    alerts
        .iter()
        .filter_map(|a| estimated_cost(&a.item))
        .sum()
}

/// Render the selected alerts as a shopping list grouped by priority.
///
/// Buckets appear in the fixed order critical, urgent, low; a bucket with no
/// selected items is left out. Within a bucket, items keep the order they were
/// selected in.
pub fn build_shopping_list(selected: &[ReorderAlert]) -> DomainResult<String> {
    if selected.is_empty() {
        return Err(DomainError::empty_selection(
            "select at least one item for the shopping list",
        ));
    }

    let mut out = String::from("SHOPPING LIST\n");

    for priority in Priority::ALL {
        let mut bucket = selected.iter().filter(|a| a.priority == priority).peekable();
        if bucket.peek().is_none() {
            continue;
        }

        let _ = writeln!(out, "\n{}", priority.label());
        for alert in bucket {
            write_entry(&mut out, &alert.item);
        }
    }

    let _ = writeln!(out, "\nSUMMARY");
    let _ = writeln!(out, "Total items: {}", selected.len());
    let _ = writeln!(
        out,
        "Total estimated cost: ${}",
        total_estimated_cost(selected)
    );

    tracing::debug!(items = selected.len(), "built shopping list");
    Ok(out)
}

fn write_entry(out: &mut String, item: &InventoryItem) {
    let unit = item.unit_label();
    let _ = writeln!(out, "- {}", item.name);
    let _ = writeln!(
        out,
        "  Order: {} {unit} (current: {})",
        item.reorder_quantity, item.current_quantity
    );
    if let Some(supplier) = &item.supplier {
        let _ = writeln!(out, "  Supplier: {supplier}");
    }
    if let Some(sku) = &item.supplier_sku {
        let _ = writeln!(out, "  SKU: {sku}");
    }
    if let Some(cost) = estimated_cost(item) {
        let _ = writeln!(out, "  Est. cost: ${cost}");
    }
}
