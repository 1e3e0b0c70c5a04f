//! Infrastructure layer - file loaders and report persistence

pub mod job_file;
pub mod material_catalog_loader;
pub mod persistence;
