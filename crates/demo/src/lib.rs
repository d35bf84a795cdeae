//! The "Florists" demonstration: builds a small bouquet range, trades it and
//! reports the resulting stock.

pub mod config;
pub mod scenario;

pub use config::DemoConfig;
pub use scenario::{Range, run};
