//! Read-only views over a shop's stock.

use serde::{Deserialize, Serialize};

use flowershop_catalog::Price;

/// A bouquet that has fallen to (or below) the shop's low-stock threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockLine {
    pub bouquet: String,
    pub quantity: u32,
    /// Quantity to order to get back above the threshold.
    pub suggested_order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotLine {
    pub bouquet: String,
    pub price: Price,
    pub quantity: u32,
}

/// Point-in-time stock listing, sorted by bouquet name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub shop: String,
    pub low_stock_threshold: u32,
    pub lines: Vec<SnapshotLine>,
}

impl InventorySnapshot {
    pub fn quantity_of(&self, bouquet: &str) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.bouquet == bouquet)
            .map(|line| line.quantity)
    }

    pub fn total_bouquets(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}
