//! Application service layer - config, bid service, export

pub mod app;
pub mod config;
pub mod constants;
pub mod export;
pub mod repository;
