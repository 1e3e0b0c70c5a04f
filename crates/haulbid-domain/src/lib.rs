//! Domain layer for hauling bid estimation
//!
//! Holds the job/bid data model, the material catalog type, the bid
//! calculators, and the repository traits implemented by the infra layer.
//! Nothing in this crate touches the filesystem.

pub mod model;
pub mod repository;
pub mod service;
