use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use flowershop_core::Event;

/// Event: BouquetSold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BouquetSold {
    pub shop: String,
    pub bouquet: String,
    pub quantity: u32,
    pub remaining: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: BouquetOrdered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BouquetOrdered {
    pub shop: String,
    pub bouquet: String,
    pub quantity: u32,
    pub remaining: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockSet (stock level overwritten).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSet {
    pub shop: String,
    pub bouquet: String,
    pub previous: u32,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: BouquetRemoved (bouquet dropped from the shop's range).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BouquetRemoved {
    pub shop: String,
    pub bouquet: String,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockEvent {
    BouquetSold(BouquetSold),
    BouquetOrdered(BouquetOrdered),
    StockSet(StockSet),
    BouquetRemoved(BouquetRemoved),
}

impl StockEvent {
    /// Name of the bouquet the event is about.
    pub fn bouquet(&self) -> &str {
        match self {
            StockEvent::BouquetSold(e) => &e.bouquet,
            StockEvent::BouquetOrdered(e) => &e.bouquet,
            StockEvent::StockSet(e) => &e.bouquet,
            StockEvent::BouquetRemoved(e) => &e.bouquet,
        }
    }
}

impl Event for StockEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StockEvent::BouquetSold(_) => "shop.bouquet.sold",
            StockEvent::BouquetOrdered(_) => "shop.bouquet.ordered",
            StockEvent::StockSet(_) => "shop.bouquet.stock_set",
            StockEvent::BouquetRemoved(_) => "shop.bouquet.removed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StockEvent::BouquetSold(e) => e.occurred_at,
            StockEvent::BouquetOrdered(e) => e.occurred_at,
            StockEvent::StockSet(e) => e.occurred_at,
            StockEvent::BouquetRemoved(e) => e.occurred_at,
        }
    }
}
