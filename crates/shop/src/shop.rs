use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::{Hash, Hasher};

use chrono::Utc;

use flowershop_catalog::Bouquet;
use flowershop_core::{DomainError, DomainResult, Entity};

use crate::event::{BouquetOrdered, BouquetRemoved, BouquetSold, StockEvent, StockSet};
use crate::report::{InventorySnapshot, RestockLine, SnapshotLine};

#[derive(Debug, Clone)]
struct StockEntry {
    bouquet: Bouquet,
    quantity: u32,
}

/// A flower shop: a named stock of bouquets.
///
/// Stock is keyed by bouquet identity (its name) and can only change through
/// [`Shop::sell`], [`Shop::order`], [`Shop::set_stock`] and [`Shop::remove`].
/// Quantities are unsigned, so no path can take a stock level below zero.
#[derive(Debug, Clone)]
pub struct Shop {
    name: String,
    stock: HashMap<String, StockEntry>,
    low_stock_threshold: u32,
    history: Vec<StockEvent>,
}

impl Shop {
    /// Create a shop with no stock.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("shop name cannot be empty"));
        }
        Ok(Self {
            name,
            stock: HashMap::new(),
            low_stock_threshold: 0,
            history: Vec::new(),
        })
    }

    /// Create a shop seeded with `(bouquet, quantity)` pairs.
    ///
    /// A bouquet listed twice keeps its first definition and its last quantity.
    /// Seeding is initial state and is not recorded in the history.
    pub fn with_stock(
        name: impl Into<String>,
        stock: impl IntoIterator<Item = (Bouquet, u32)>,
    ) -> DomainResult<Self> {
        let mut shop = Self::new(name)?;
        for (bouquet, quantity) in stock {
            match shop.stock.entry(bouquet.id().clone()) {
                Entry::Occupied(mut e) => e.get_mut().quantity = quantity,
                Entry::Vacant(e) => {
                    e.insert(StockEntry { bouquet, quantity });
                }
            }
        }
        Ok(shop)
    }

    /// Stock levels at or below `threshold` show up in [`Shop::restock_report`].
    pub fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.low_stock_threshold
    }

    /// Units of `bouquet` in stock; 0 if the shop does not carry it.
    pub fn quantity_of(&self, bouquet: &Bouquet) -> u32 {
        self.stock
            .get(bouquet.id())
            .map(|entry| entry.quantity)
            .unwrap_or(0)
    }

    pub fn carries(&self, bouquet: &Bouquet) -> bool {
        self.stock.contains_key(bouquet.id())
    }

    /// The shop's own record of the bouquet named `name`.
    pub fn bouquet(&self, name: &str) -> Option<&Bouquet> {
        self.stock.get(name).map(|entry| &entry.bouquet)
    }

    /// Registered bouquets with their stock, in no particular order.
    pub fn stock(&self) -> impl Iterator<Item = (&Bouquet, u32)> + '_ {
        self.stock.values().map(|entry| (&entry.bouquet, entry.quantity))
    }

    /// Every stock change since the shop was created, oldest first.
    pub fn history(&self) -> &[StockEvent] {
        &self.history
    }

    /// Sell `quantity` units of `bouquet`, returning the remaining stock.
    ///
    /// Fails with [`DomainError::InsufficientStock`] when the shop holds fewer
    /// than `quantity`; stock is left untouched in that case.
    pub fn sell(&mut self, bouquet: &Bouquet, quantity: u32) -> DomainResult<u32> {
        let available = self.quantity_of(bouquet);
        if quantity > available {
            tracing::warn!(
                shop = %self.name,
                bouquet = %bouquet.name(),
                requested = quantity,
                available,
                "sale refused: insufficient stock"
            );
            return Err(DomainError::insufficient_stock(
                self.to_string(),
                bouquet.to_string(),
                quantity,
                available,
            ));
        }

        // Only an empty sale gets here for an uncarried bouquet: nothing moved.
        let Some(entry) = self.stock.get_mut(bouquet.id()) else {
            return Ok(0);
        };
        let remaining = available - quantity;
        entry.quantity = remaining;

        tracing::debug!(shop = %self.name, bouquet = %bouquet.name(), quantity, remaining, "bouquet sold");
        self.warn_if_low(bouquet.name(), remaining);
        self.history.push(StockEvent::BouquetSold(BouquetSold {
            shop: self.name.clone(),
            bouquet: bouquet.name().to_string(),
            quantity,
            remaining,
            occurred_at: Utc::now(),
        }));
        Ok(remaining)
    }

    pub fn sell_one(&mut self, bouquet: &Bouquet) -> DomainResult<u32> {
        self.sell(bouquet, 1)
    }

    /// Receive `quantity` units of `bouquet`, returning the new stock.
    ///
    /// Ordering a bouquet the shop does not carry yet starts carrying it.
    pub fn order(&mut self, bouquet: &Bouquet, quantity: u32) -> DomainResult<u32> {
        let current = self.quantity_of(bouquet);
        let remaining = current.checked_add(quantity).ok_or_else(|| {
            DomainError::invariant(format!(
                "stock of {bouquet} in {self} would exceed {} units",
                u32::MAX
            ))
        })?;

        self.stock
            .entry(bouquet.id().clone())
            .or_insert_with(|| StockEntry {
                bouquet: bouquet.clone(),
                quantity: 0,
            })
            .quantity = remaining;

        tracing::debug!(shop = %self.name, bouquet = %bouquet.name(), quantity, remaining, "bouquet ordered");
        self.history.push(StockEvent::BouquetOrdered(BouquetOrdered {
            shop: self.name.clone(),
            bouquet: bouquet.name().to_string(),
            quantity,
            remaining,
            occurred_at: Utc::now(),
        }));
        Ok(remaining)
    }

    pub fn order_one(&mut self, bouquet: &Bouquet) -> DomainResult<u32> {
        self.order(bouquet, 1)
    }

    /// Overwrite the stock level of `bouquet`, registering it if needed.
    /// Returns the previous level.
    pub fn set_stock(&mut self, bouquet: Bouquet, quantity: u32) -> u32 {
        let name = bouquet.name().to_string();
        let previous = match self.stock.entry(name.clone()) {
            Entry::Occupied(mut e) => std::mem::replace(&mut e.get_mut().quantity, quantity),
            Entry::Vacant(e) => {
                e.insert(StockEntry { bouquet, quantity });
                0
            }
        };

        tracing::debug!(shop = %self.name, bouquet = %name, previous, quantity, "stock set");
        self.warn_if_low(&name, quantity);
        self.history.push(StockEvent::StockSet(StockSet {
            shop: self.name.clone(),
            bouquet: name,
            previous,
            quantity,
            occurred_at: Utc::now(),
        }));
        previous
    }

    /// Stop carrying `bouquet`, returning the stock it had.
    pub fn remove(&mut self, bouquet: &Bouquet) -> DomainResult<u32> {
        let entry = self
            .stock
            .remove(bouquet.id())
            .ok_or_else(|| DomainError::key_not_found(format!("{bouquet} in {self}")))?;

        tracing::debug!(shop = %self.name, bouquet = %bouquet.name(), quantity = entry.quantity, "bouquet removed");
        self.history.push(StockEvent::BouquetRemoved(BouquetRemoved {
            shop: self.name.clone(),
            bouquet: bouquet.name().to_string(),
            quantity: entry.quantity,
            occurred_at: Utc::now(),
        }));
        Ok(entry.quantity)
    }

    /// Bouquets at or below the low-stock threshold, sorted by name.
    pub fn restock_report(&self) -> Vec<RestockLine> {
        let target = self.low_stock_threshold.saturating_add(1);
        let mut lines: Vec<RestockLine> = self
            .stock
            .values()
            .filter(|entry| entry.quantity <= self.low_stock_threshold)
            .map(|entry| RestockLine {
                bouquet: entry.bouquet.name().to_string(),
                quantity: entry.quantity,
                suggested_order: target - entry.quantity,
            })
            .collect();
        lines.sort_by(|a, b| a.bouquet.cmp(&b.bouquet));
        lines
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        let mut lines: Vec<SnapshotLine> = self
            .stock
            .values()
            .map(|entry| SnapshotLine {
                bouquet: entry.bouquet.name().to_string(),
                price: entry.bouquet.price,
                quantity: entry.quantity,
            })
            .collect();
        lines.sort_by(|a, b| a.bouquet.cmp(&b.bouquet));

        InventorySnapshot {
            shop: self.name.clone(),
            low_stock_threshold: self.low_stock_threshold,
            lines,
        }
    }

    fn warn_if_low(&self, bouquet: &str, quantity: u32) {
        if quantity <= self.low_stock_threshold {
            tracing::warn!(
                shop = %self.name,
                bouquet,
                quantity,
                threshold = self.low_stock_threshold,
                "stock at or below low-stock threshold"
            );
        }
    }
}

impl Entity for Shop {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl PartialEq for Shop {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Shop {}

impl Hash for Shop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl core::fmt::Display for Shop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "<Shop: {}>", self.name)
    }
}
