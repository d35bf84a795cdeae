//! Shop domain module: bouquet stock, sales and restocking.
//!
//! Deterministic in-memory domain logic (no IO, no storage). Every stock
//! change goes through [`Shop`]'s methods and is recorded as a [`StockEvent`].

pub mod event;
pub mod report;
pub mod shop;

pub use event::{BouquetOrdered, BouquetRemoved, BouquetSold, StockEvent, StockSet};
pub use report::{InventorySnapshot, RestockLine, SnapshotLine};
pub use shop::Shop;
