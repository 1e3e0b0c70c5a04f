//! Domain services

pub mod bid_calculator;
pub mod hourly_bid;
pub mod load_bid;

pub use bid_calculator::compute_bid;
pub use hourly_bid::compute_hourly_bid;
pub use load_bid::compute_load_bid;
