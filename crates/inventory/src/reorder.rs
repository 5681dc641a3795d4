//! Reorder classification.
//!
//! An item needs reordering once its on-hand quantity falls to or below its
//! reorder point. How far below decides its priority:
//!
//! - `Critical`: nothing left.
//! - `Urgent`: at or below half the reorder point (rounded down).
//! - `Low`: above half, at or below the reorder point.

use serde::{Deserialize, Serialize};

use crate::item::InventoryItem;

/// Urgency bucket for an item that needs reordering.
///
/// Variant order is display order; `Ord` follows [`Priority::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    Urgent,
    Low,
}

impl Priority {
    /// All buckets in display order.
    pub const ALL: [Priority; 3] = [Priority::Critical, Priority::Urgent, Priority::Low];

    pub fn rank(self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::Urgent => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::Urgent => "urgent",
            Priority::Low => "low",
        }
    }

    /// Heading used when grouping items by bucket.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Critical => "CRITICAL (Out of Stock)",
            Priority::Urgent => "URGENT (Very Low)",
            Priority::Low => "LOW STOCK",
        }
    }
}

impl core::fmt::Display for Priority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

pub fn needs_reorder(item: &InventoryItem) -> bool {
    item.current_quantity <= item.reorder_point
}

/// Classify an item that [`needs_reorder`]. Items above their reorder point
/// are not expected here and fall into `Low`.
pub fn classify_priority(item: &InventoryItem) -> Priority {
    // Integer division is floor for the non-negative reorder points we accept.
    let urgent_threshold = item.reorder_point / 2;

    if item.current_quantity <= 0 {
        Priority::Critical
    } else if item.current_quantity <= urgent_threshold {
        Priority::Urgent
    } else {
        Priority::Low
    }
}

/// An item flagged for reordering, with its computed priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderAlert {
    pub item: InventoryItem,
    pub priority: Priority,
}

impl ReorderAlert {
    /// Returns `None` when the item is above its reorder point.
    pub fn for_item(item: &InventoryItem) -> Option<Self> {
        needs_reorder(item).then(|| Self {
            item: item.clone(),
            priority: classify_priority(item),
        })
    }
}

/// Every item in the snapshot that needs reordering, in display order:
/// priority rank first, then name (case-insensitive).
pub fn reorder_alerts(items: &[InventoryItem]) -> Vec<ReorderAlert> {
    let mut alerts: Vec<ReorderAlert> = items.iter().filter_map(ReorderAlert::for_item).collect();
    sort_alerts(&mut alerts);

    tracing::debug!(
        scanned = items.len(),
        flagged = alerts.len(),
        "computed reorder alerts"
    );
    alerts
}

/// Sort alerts into display order in place.
pub fn sort_alerts(alerts: &mut [ReorderAlert]) {
    alerts.sort_by_cached_key(|a| (a.priority.rank(), a.item.name.to_lowercase()));
}

/// Number of alerts per bucket, for summary badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCounts {
    pub critical: usize,
    pub urgent: usize,
    pub low: usize,
}

impl PriorityCounts {
    pub fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::Critical => self.critical,
            Priority::Urgent => self.urgent,
            Priority::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.urgent + self.low
    }
}

pub fn count_by_priority(alerts: &[ReorderAlert]) -> PriorityCounts {
    alerts
        .iter()
        .fold(PriorityCounts::default(), |mut counts, alert| {
            match alert.priority {
                Priority::Critical => counts.critical += 1,
                Priority::Urgent => counts.urgent += 1,
                Priority::Low => counts.low += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ItemId;

    fn item(name: &str, current: i64, point: i64) -> InventoryItem {
        InventoryItem::new(ItemId::new(name).unwrap(), name, current, point, 20)
    }

    #[test]
    fn reorder_threshold_is_inclusive() {
        assert!(needs_reorder(&item("a", 10, 10)));
        assert!(needs_reorder(&item("a", 0, 0)));
        assert!(!needs_reorder(&item("a", 11, 10)));
    }

    #[test]
    fn reorder_point_ten_boundaries() {
        assert_eq!(classify_priority(&item("a", 0, 10)), Priority::Critical);
        assert_eq!(classify_priority(&item("a", 5, 10)), Priority::Urgent);
        assert_eq!(classify_priority(&item("a", 6, 10)), Priority::Low);
        assert_eq!(classify_priority(&item("a", 10, 10)), Priority::Low);
    }

    #[test]
    fn odd_reorder_point_rounds_half_down() {
        // 7 * 0.5 = 3.5 -> 3
        assert_eq!(classify_priority(&item("a", 3, 7)), Priority::Urgent);
        assert_eq!(classify_priority(&item("a", 4, 7)), Priority::Low);
    }

    #[test]
    fn reorder_point_one_has_no_urgent_band() {
        assert_eq!(classify_priority(&item("a", 0, 1)), Priority::Critical);
        assert_eq!(classify_priority(&item("a", 1, 1)), Priority::Low);
    }

    #[test]
    fn alerts_sort_by_priority_then_name_case_insensitive() {
        let items = vec![
            item("zeta", 8, 10),
            item("Alpha", 8, 10),
            item("pens", 0, 10),
            item("beta", 2, 10),
            item("Ample", 0, 10),
            item("stocked", 50, 10),
        ];
        let alerts = reorder_alerts(&items);
        let names: Vec<&str> = alerts.iter().map(|a| a.item.name.as_str()).collect();
        assert_eq!(names, ["Ample", "pens", "beta", "Alpha", "zeta"]);
    }

    #[test]
    fn counts_per_bucket() {
        let alerts = reorder_alerts(&[
            item("a", 0, 10),
            item("b", 0, 10),
            item("c", 3, 10),
            item("d", 9, 10),
        ]);
        let counts = count_by_priority(&alerts);
        assert_eq!(counts.get(Priority::Critical), 2);
        assert_eq!(counts.urgent, 1);
        assert_eq!(counts.low, 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn priority_ordering_matches_rank() {
        let mut all = vec![Priority::Low, Priority::Critical, Priority::Urgent];
        all.sort();
        assert_eq!(all, Priority::ALL);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: the reorder flag is exactly the inclusive threshold.
            #[test]
            fn needs_reorder_matches_threshold(current in 0i64..1000, point in 0i64..1000) {
                prop_assert_eq!(needs_reorder(&item("x", current, point)), current <= point);
            }

            /// Property: empty stock is always critical.
            #[test]
            fn zero_stock_is_critical(point in 0i64..1000) {
                prop_assert_eq!(classify_priority(&item("x", 0, point)), Priority::Critical);
            }

            /// Property: classification is a pure function of its inputs.
            #[test]
            fn classify_is_deterministic(current in 0i64..1000, point in 0i64..1000) {
                let it = item("x", current, point);
                prop_assert_eq!(classify_priority(&it), classify_priority(&it.clone()));
            }

            /// Property: alert order never places a higher rank before a lower one.
            #[test]
            fn alerts_are_sorted(quantities in proptest::collection::vec((0i64..30, 0i64..30), 0..40)) {
                let items: Vec<InventoryItem> = quantities
                    .iter()
                    .enumerate()
                    .map(|(i, (c, p))| item(&format!("item-{i}"), *c, *p))
                    .collect();
                let alerts = reorder_alerts(&items);
                prop_assert!(alerts.iter().all(|a| needs_reorder(&a.item)));
                for pair in alerts.windows(2) {
                    prop_assert!(pair[0].priority.rank() <= pair[1].priority.rank());
                }
            }
        }
    }
}
