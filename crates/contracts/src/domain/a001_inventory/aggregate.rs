use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;

// ============================================================================
// ID Type
// ============================================================================

crate::integer_id!(
    /// SKU: integer identifier of an inventory item, immutable after creation
    Sku
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Inventory item. The same shape is posted on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub sku: Sku,

    #[serde(rename = "nombre")]
    pub name: String,

    /// Stock on hand; decremented by voucher creation, restored by voucher deletion
    #[serde(rename = "cantidad")]
    pub quantity: i32,
}

/// Stock badge shown next to the quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Healthy,
    Low,
    Empty,
}

impl InventoryItem {
    pub fn new(sku: i64, name: impl Into<String>, quantity: i32) -> Self {
        Self {
            sku: Sku(sku),
            name: name.into(),
            quantity,
        }
    }

    pub fn stock_level(&self) -> StockLevel {
        match self.quantity {
            q if q > 10 => StockLevel::Healthy,
            q if q > 0 => StockLevel::Low,
            _ => StockLevel::Empty,
        }
    }

    /// Label used in the voucher item select
    pub fn option_label(&self) -> String {
        format!("{} - Stock: {}", self.name, self.quantity)
    }
}

impl AggregateRoot for InventoryItem {
    type Id = Sku;

    fn id(&self) -> Self::Id {
        self.sku
    }

    fn description(&self) -> String {
        format!("{} (SKU: {})", self.name, self.sku)
    }
}
