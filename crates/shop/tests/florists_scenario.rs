//! Black-box walk through the "Florists" trading day.

use flowershop_catalog::{Bouquet, Flower, FlowerType, Price};
use flowershop_core::{DomainError, Event};
use flowershop_shop::{Shop, StockEvent};

struct Range {
    romantic: Bouquet,
    royal_love: Bouquet,
    enchanted_bloom: Bouquet,
}

fn range() -> Range {
    let rose = Flower::new(FlowerType::Rose);
    let lily = Flower::new(FlowerType::Lily);
    let orchid = Flower::new(FlowerType::Orchid);
    let carnation = Flower::new(FlowerType::Carnation);

    Range {
        romantic: Bouquet::with_flowers("Romantic", "25.2".parse().unwrap(), [(rose, 20)])
            .unwrap(),
        royal_love: Bouquet::with_flowers("Royal Love", "10.5".parse().unwrap(), [(orchid, 8)])
            .unwrap(),
        enchanted_bloom: Bouquet::with_flowers(
            "Enchanted Bloom",
            Price::from_units(30).unwrap(),
            [(lily, 2), (rose, 5), (carnation, 5)],
        )
        .unwrap(),
    }
}

fn florists(range: &Range) -> Shop {
    Shop::with_stock(
        "Florists",
        [
            (range.romantic.clone(), 5),
            (range.royal_love.clone(), 2),
            (range.enchanted_bloom.clone(), 3),
        ],
    )
    .unwrap()
}

#[test]
fn sell_order_sell_ends_with_romantic_sold_out() {
    let range = range();
    let mut shop = florists(&range);

    assert_eq!(shop.sell(&range.romantic, 5).unwrap(), 0);
    assert_eq!(shop.order(&range.romantic, 4).unwrap(), 4);
    assert_eq!(shop.sell(&range.romantic, 4).unwrap(), 0);

    assert_eq!(shop.quantity_of(&range.romantic), 0);
    assert_eq!(shop.quantity_of(&range.royal_love), 2);
    assert_eq!(shop.quantity_of(&range.enchanted_bloom), 3);

    let snapshot = shop.snapshot();
    assert_eq!(snapshot.quantity_of("Romantic"), Some(0));
    assert_eq!(snapshot.quantity_of("Royal Love"), Some(2));
    assert_eq!(snapshot.quantity_of("Enchanted Bloom"), Some(3));

    let remaining: Vec<u32> = shop
        .history()
        .iter()
        .map(|event| match event {
            StockEvent::BouquetSold(e) => e.remaining,
            StockEvent::BouquetOrdered(e) => e.remaining,
            other => panic!("unexpected event {}", other.event_type()),
        })
        .collect();
    assert_eq!(remaining, vec![0, 4, 0]);
}

#[test]
fn overselling_after_sell_out_is_refused() {
    let range = range();
    let mut shop = florists(&range);
    shop.sell(&range.romantic, 5).unwrap();

    let err = shop.sell_one(&range.romantic).unwrap_err();
    assert!(matches!(err, DomainError::InsufficientStock { requested: 1, available: 0, .. }));
    assert_eq!(shop.history().len(), 1);
}

#[test]
fn lookups_use_bouquet_identity_not_composition() {
    let range = range();
    let mut shop = florists(&range);

    // Same name, different price and flowers: still the shop's Romantic.
    let lookalike = Bouquet::with_flowers(
        "Romantic",
        Price::from_units(1).unwrap(),
        [(Flower::new(FlowerType::Tulip), 1)],
    )
    .unwrap();
    assert_eq!(shop.quantity_of(&lookalike), 5);

    shop.sell(&lookalike, 2).unwrap();
    assert_eq!(shop.quantity_of(&range.romantic), 3);
    assert_eq!(shop.bouquet("Romantic").unwrap().price, Price::from_cents(2520));
}

#[test]
fn restock_report_flags_sold_out_range() {
    let range = range();
    let mut shop = florists(&range).with_low_stock_threshold(2);
    shop.sell(&range.romantic, 5).unwrap();

    let flagged: Vec<(String, u32)> = shop
        .restock_report()
        .into_iter()
        .map(|line| (line.bouquet, line.suggested_order))
        .collect();
    assert_eq!(
        flagged,
        vec![("Romantic".to_string(), 3), ("Royal Love".to_string(), 1)]
    );
}

#[test]
fn snapshot_serializes_prices_in_cents() {
    let range = range();
    let shop = florists(&range);

    let json = serde_json::to_value(shop.snapshot()).unwrap();
    assert_eq!(json["shop"], "Florists");
    assert_eq!(json["lines"][0]["bouquet"], "Enchanted Bloom");
    assert_eq!(json["lines"][0]["price"], 3000);
    assert_eq!(json["lines"][0]["quantity"], 3);
}
