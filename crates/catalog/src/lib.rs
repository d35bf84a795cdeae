//! Catalog domain module: flower varieties, prices and bouquets.
//!
//! Pure domain logic (no IO, no storage). Stock levels live in
//! `flowershop-shop`; this crate only describes what can be sold.

pub mod bouquet;
pub mod flower;
pub mod price;

pub use bouquet::Bouquet;
pub use flower::{Flower, FlowerType};
pub use price::Price;
