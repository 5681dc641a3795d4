use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ItemId, Money};

/// An inventory record as stored by the document backend.
///
/// The engine works on a snapshot of these fetched per screen visit; it never
/// mutates them in place. Changes are expressed as [`crate::StockUpdate`]
/// payloads the caller writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub unit: String,
    pub current_quantity: i64,
    pub reorder_point: i64,
    pub reorder_quantity: i64,
    /// Purchase cost per unit.
    #[serde(default)]
    pub unit_cost: Option<Money>,
    /// Sale price per unit, for items sold over the counter.
    #[serde(default)]
    pub charge_price: Option<Money>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub supplier_sku: Option<String>,
    #[serde(default)]
    pub is_for_sale: bool,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub last_ordered_at: Option<DateTime<Utc>>,
}

impl InventoryItem {
    /// Minimal record with the required fields; everything optional is unset.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        current_quantity: i64,
        reorder_point: i64,
        reorder_quantity: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: String::new(),
            unit: String::new(),
            current_quantity,
            reorder_point,
            reorder_quantity,
            unit_cost: None,
            charge_price: None,
            supplier: None,
            supplier_sku: None,
            is_for_sale: false,
            location: None,
            last_ordered_at: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_unit_cost(mut self, unit_cost: Money) -> Self {
        self.unit_cost = Some(unit_cost);
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>, sku: Option<String>) -> Self {
        self.supplier = Some(supplier.into());
        self.supplier_sku = sku;
        self
    }

    /// Mark the item as sold at `charge_price` per unit.
    pub fn for_sale(mut self, charge_price: Money) -> Self {
        self.is_for_sale = true;
        self.charge_price = Some(charge_price);
        self
    }

    /// Unit label for display, falling back to "units".
    pub fn unit_label(&self) -> &str {
        if self.unit.trim().is_empty() {
            "units"
        } else {
            &self.unit
        }
    }

    /// Check record invariants. Run this at the storage boundary, before a
    /// snapshot reaches the calculators.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "item {}: name cannot be empty",
                self.id
            )));
        }
        if self.current_quantity < 0 {
            return Err(DomainError::validation(format!(
                "item {}: current_quantity cannot be negative",
                self.id
            )));
        }
        if self.reorder_point < 0 {
            return Err(DomainError::validation(format!(
                "item {}: reorder_point cannot be negative",
                self.id
            )));
        }
        if self.reorder_quantity <= 0 {
            return Err(DomainError::validation(format!(
                "item {}: reorder_quantity must be positive",
                self.id
            )));
        }
        for (field, value) in [("unit_cost", self.unit_cost), ("charge_price", self.charge_price)] {
            if value.is_some_and(Money::is_negative) {
                return Err(DomainError::validation(format!(
                    "item {}: {field} cannot be negative",
                    self.id
                )));
            }
        }
        Ok(())
    }
}

/// Validate every record in a snapshot, failing on the first bad one.
pub fn validate_snapshot(items: &[InventoryItem]) -> DomainResult<()> {
    items.iter().try_for_each(InventoryItem::validate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(current: i64, point: i64, qty: i64) -> InventoryItem {
        InventoryItem::new(ItemId::new("i-1").unwrap(), "Paper", current, point, qty)
    }

    #[test]
    fn well_formed_item_validates() {
        assert!(item(3, 10, 20)
            .with_unit_cost(Money::from_cents(150))
            .validate()
            .is_ok());
    }

    #[test]
    fn invariants_are_enforced() {
        assert!(item(-1, 10, 20).validate().is_err());
        assert!(item(3, -1, 20).validate().is_err());
        assert!(item(3, 10, 0).validate().is_err());
        assert!(item(3, 10, 5)
            .with_unit_cost(Money::from_cents(-200))
            .validate()
            .is_err());
    }

    #[test]
    fn deserializes_store_document_with_missing_optionals() {
        let json = r#"{
            "id": "abc",
            "name": "Staples",
            "current_quantity": 4,
            "reorder_point": 5,
            "reorder_quantity": 10
        }"#;
        let parsed: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id.as_str(), "abc");
        assert!(!parsed.is_for_sale);
        assert_eq!(parsed.unit_cost, None);
        assert_eq!(parsed.unit_label(), "units");
    }

    #[test]
    fn decimal_prices_are_read_as_exact_cents() {
        let json = r#"{
            "id": "cola",
            "name": "Cola",
            "current_quantity": 4,
            "reorder_point": 5,
            "reorder_quantity": 10,
            "unit_cost": 0.1,
            "charge_price": 1.25,
            "is_for_sale": true
        }"#;
        let parsed: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.unit_cost, Some(Money::from_cents(10)));
        assert_eq!(parsed.charge_price, Some(Money::from_cents(125)));
    }

    #[test]
    fn snapshot_validation_reports_first_bad_record() {
        let good = item(1, 2, 3);
        let mut bad = item(1, 2, 3);
        bad.name = " ".into();
        let err = validate_snapshot(&[good, bad]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("name")));
    }
}
