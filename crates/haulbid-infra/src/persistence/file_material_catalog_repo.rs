//! File-based implementation of MaterialCatalogRepository

use std::path::PathBuf;

use haulbid_domain::model::MaterialCatalog;
use haulbid_domain::repository::MaterialCatalogRepository;
use haulbid_types::Error;

use crate::material_catalog_loader::load_catalog_from_file;

/// Material catalog backed by a TOML file
pub struct FileMaterialCatalogRepository {
    toml_path: PathBuf,
}

impl FileMaterialCatalogRepository {
    pub fn new(toml_path: PathBuf) -> Self {
        Self { toml_path }
    }
}

impl MaterialCatalogRepository for FileMaterialCatalogRepository {
    fn load_catalog(&self) -> Result<MaterialCatalog, Error> {
        load_catalog_from_file(&self.toml_path)
    }
}
