//! Physical count reconciliation.
//!
//! A count replaces the recorded quantity with what was actually found on the
//! shelf. For items sold over the counter the difference is read as units
//! sold, which gives an expected revenue to compare against counted cash.
//!
//! Sign conventions:
//! - `variance = actual_count - previous_quantity`: negative is shrinkage,
//!   positive is overage.
//! - `items_sold = previous_quantity - actual_count`, with no clamping. An
//!   overage therefore shows up as negative units sold and negative revenue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ItemId, Money, UserId};

use crate::item::InventoryItem;
use crate::transaction::{StockUpdate, TransactionKind};

/// One counted item with its derived reconciliation figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountSubmission {
    pub item_id: ItemId,
    pub item_name: String,
    pub previous_quantity: i64,
    pub actual_count: i64,
    pub is_for_sale: bool,
    pub charge_price: Option<Money>,
    pub items_sold: i64,
    pub expected_revenue: Money,
    pub variance: i64,
}

impl CountSubmission {
    pub fn is_shrinkage(&self) -> bool {
        self.variance < 0
    }

    pub fn is_overage(&self) -> bool {
        self.variance > 0
    }

    /// The count-adjustment payload that sets the item to the counted quantity.
    pub fn stock_update(
        &self,
        actor: &UserId,
        occurred_at: DateTime<Utc>,
        notes: Option<String>,
    ) -> StockUpdate {
        StockUpdate::new(
            &self.item_id,
            TransactionKind::CountAdjustment,
            self.previous_quantity,
            self.actual_count,
            actor,
            occurred_at,
            notes,
        )
    }
}

/// Record a physical count for `item`.
///
/// `actual_count` must already be a parsed integer (see
/// [`stockroom_core::parse_count`]); negative counts are rejected.
pub fn apply_count(item: &InventoryItem, actual_count: i64) -> DomainResult<CountSubmission> {
    if actual_count < 0 {
        tracing::warn!(item_id = %item.id, actual_count, "rejected negative count");
        return Err(DomainError::invalid_input(format!(
            "count for {} cannot be negative",
            item.name
        )));
    }

    // Both operands are non-negative, so these differences cannot overflow.
    let items_sold = item.current_quantity - actual_count;
    let expected_revenue = if item.is_for_sale {
        item.charge_price
            .unwrap_or(Money::ZERO)
            .saturating_mul(items_sold)
    } else {
        Money::ZERO
    };

    Ok(CountSubmission {
        item_id: item.id.clone(),
        item_name: item.name.clone(),
        previous_quantity: item.current_quantity,
        actual_count,
        is_for_sale: item.is_for_sale,
        charge_price: item.charge_price,
        items_sold,
        expected_revenue,
        variance: actual_count - item.current_quantity,
    })
}

/// Totals across a count session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountTotals {
    /// Every submission, for sale or not.
    pub items_counted: usize,
    pub total_items_sold: i64,
    pub total_expected_revenue: Money,
    /// Units missing, as a positive number.
    pub total_shrinkage: i64,
    pub total_overage: i64,
}

/// Aggregate a count session. Sold, revenue, shrinkage and overage only
/// include for-sale items.
///
/// Sums are accumulated in `i128` and clamped to the `i64` range once at the
/// end, so huge counts saturate instead of overflowing and the result does
/// not depend on submission order.
pub fn aggregate_counts(submissions: &[CountSubmission]) -> CountTotals {
    let mut sold: i128 = 0;
    let mut revenue: i128 = 0;
    let mut shrinkage: i128 = 0;
    let mut overage: i128 = 0;

    for s in submissions.iter().filter(|s| s.is_for_sale) {
        sold += i128::from(s.items_sold);
        revenue += i128::from(s.expected_revenue.cents());
        if s.variance < 0 {
            shrinkage -= i128::from(s.variance);
        } else {
            overage += i128::from(s.variance);
        }
    }

    let totals = CountTotals {
        items_counted: submissions.len(),
        total_items_sold: clamp_to_i64(sold),
        total_expected_revenue: Money::from_cents(clamp_to_i64(revenue)),
        total_shrinkage: clamp_to_i64(shrinkage),
        total_overage: clamp_to_i64(overage),
    };

    tracing::debug!(
        items_counted = totals.items_counted,
        total_items_sold = totals.total_items_sold,
        "aggregated count session"
    );
    totals
}

fn clamp_to_i64(value: i128) -> i64 {
    value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// `actual_cash - total_expected_revenue`, exact to the cent.
pub fn cash_variance(actual_cash: Money, total_expected_revenue: Money) -> Money {
    actual_cash.saturating_sub(total_expected_revenue)
}

/// Direction of a cash variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashStatus {
    Over,
    Short,
    Perfect,
}

impl CashStatus {
    pub fn classify(variance: Money) -> Self {
        match variance.cents().cmp(&0) {
            core::cmp::Ordering::Greater => CashStatus::Over,
            core::cmp::Ordering::Less => CashStatus::Short,
            core::cmp::Ordering::Equal => CashStatus::Perfect,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CashStatus::Over => "Over",
            CashStatus::Short => "Short",
            CashStatus::Perfect => "Perfect",
        }
    }
}

impl core::fmt::Display for CashStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
