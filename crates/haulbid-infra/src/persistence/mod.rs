//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.

mod file_bid_report_repo;
mod file_material_catalog_repo;

pub use file_bid_report_repo::FileBidReportRepository;
pub use file_material_catalog_repo::FileMaterialCatalogRepository;
