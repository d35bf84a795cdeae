use anyhow::Context;

use flowershop_catalog::{Bouquet, Flower, FlowerType, Price};
use flowershop_core::DomainResult;
use flowershop_shop::Shop;

use crate::config::DemoConfig;

/// The three bouquets the demo shop carries.
#[derive(Debug, Clone)]
pub struct Range {
    pub romantic: Bouquet,
    pub royal_love: Bouquet,
    pub enchanted_bloom: Bouquet,
}

impl Range {
    pub fn build() -> DomainResult<Self> {
        let rose = Flower::new(FlowerType::Rose);
        let lily = Flower::new(FlowerType::Lily);
        let orchid = Flower::new(FlowerType::Orchid);
        let carnation = Flower::new(FlowerType::Carnation);

        Ok(Self {
            romantic: Bouquet::with_flowers("Romantic", "25.2".parse()?, [(rose, 20)])?,
            royal_love: Bouquet::with_flowers("Royal Love", "10.5".parse()?, [(orchid, 8)])?,
            enchanted_bloom: Bouquet::with_flowers(
                "Enchanted Bloom",
                Price::from_units(30)?,
                [(lily, 2), (rose, 5), (carnation, 5)],
            )?,
        })
    }

    /// Opening stock: romantic 5, royal love 2, enchanted bloom 3.
    pub fn open_shop(&self, config: &DemoConfig) -> DomainResult<Shop> {
        Ok(Shop::with_stock(
            config.shop_name.clone(),
            [
                (self.romantic.clone(), 5),
                (self.royal_love.clone(), 2),
                (self.enchanted_bloom.clone(), 3),
            ],
        )?
        .with_low_stock_threshold(config.low_stock_threshold))
    }
}

/// Open the shop, sell out the romantic bouquets, reorder four and sell those
/// too. Returns the shop in its closing state.
pub fn run(config: &DemoConfig) -> anyhow::Result<Shop> {
    let range = Range::build().context("failed to build bouquet range")?;
    let mut shop = range.open_shop(config).context("failed to open shop")?;
    tracing::info!(shop = %shop.name(), "shop opened");

    shop.sell(&range.romantic, 5)
        .with_context(|| format!("selling {} failed", range.romantic))?;
    shop.order(&range.romantic, 4)
        .with_context(|| format!("ordering {} failed", range.romantic))?;
    shop.sell(&range.romantic, 4)
        .with_context(|| format!("selling {} failed", range.romantic))?;

    tracing::info!(
        shop = %shop.name(),
        movements = shop.history().len(),
        "trading finished"
    );
    Ok(shop)
}
