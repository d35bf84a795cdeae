//! `flowershop-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog and
//! shop crates (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod event;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use event::Event;
pub use value_object::ValueObject;
