//! Domain model types

pub mod bid;
pub mod job;
pub mod material;
pub mod report;

pub use bid::{format_money, BidResult, HourlyBidResult, LoadBidResult, SummaryRow, SummaryValue};
pub use job::{HourlyJobInput, JobInput, LoadJobInput};
pub use material::{MaterialCatalog, MaterialSpec};
pub use report::BidReport;
