use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use flowershop_core::{DomainError, DomainResult, Entity};

use crate::flower::Flower;
use crate::price::Price;

/// A named, priced arrangement of flowers.
///
/// A bouquet is known by its name: two bouquets with the same name are the
/// same bouquet, whatever their price or composition.
#[derive(Debug, Clone)]
pub struct Bouquet {
    name: String,
    pub price: Price,
    flowers: HashMap<Flower, u32>,
}

impl Bouquet {
    /// Create a bouquet with no flowers yet.
    pub fn new(name: impl Into<String>, price: Price) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("bouquet name cannot be empty"));
        }
        Ok(Self {
            name,
            price,
            flowers: HashMap::new(),
        })
    }

    /// Create a bouquet seeded with `(flower, quantity)` pairs.
    ///
    /// A flower listed twice keeps the last quantity.
    pub fn with_flowers(
        name: impl Into<String>,
        price: Price,
        flowers: impl IntoIterator<Item = (Flower, u32)>,
    ) -> DomainResult<Self> {
        let mut bouquet = Self::new(name, price)?;
        bouquet.flowers.extend(flowers);
        Ok(bouquet)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of `flower` in the bouquet; 0 if it has none.
    pub fn quantity_of(&self, flower: &Flower) -> u32 {
        self.flowers.get(flower).copied().unwrap_or(0)
    }

    pub fn set_quantity(&mut self, flower: Flower, quantity: u32) {
        self.flowers.insert(flower, quantity);
    }

    /// Take `flower` out of the composition, returning its former quantity.
    pub fn remove(&mut self, flower: &Flower) -> DomainResult<u32> {
        self.flowers
            .remove(flower)
            .ok_or_else(|| DomainError::key_not_found(format!("{flower} in {self}")))
    }

    pub fn contains(&self, flower: &Flower) -> bool {
        self.flowers.contains_key(flower)
    }

    /// Composition entries, in no particular order.
    pub fn flowers(&self) -> impl Iterator<Item = (Flower, u32)> + '_ {
        self.flowers.iter().map(|(f, q)| (*f, *q))
    }

    /// Composition sorted by flower variety.
    pub fn composition(&self) -> Vec<(Flower, u32)> {
        let mut entries: Vec<_> = self.flowers().collect();
        entries.sort_unstable_by_key(|(f, _)| *f);
        entries
    }

    pub fn total_flowers(&self) -> u64 {
        self.flowers.values().map(|q| u64::from(*q)).sum()
    }
}

impl Entity for Bouquet {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl PartialEq for Bouquet {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Bouquet {}

impl Hash for Bouquet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl core::fmt::Display for Bouquet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "<Bouquet: {}>", self.name)
    }
}
