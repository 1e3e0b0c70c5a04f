//! Material catalog loader from TOML
//!
//! ```toml
//! [[materials]]
//! name = "Gravel"
//! density = 1.5
//! ```

use haulbid_domain::model::{MaterialCatalog, MaterialSpec};
use haulbid_types::{ConfigError, Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Container for parsing a materials TOML file
#[derive(Debug, Deserialize)]
struct MaterialCatalogFile {
    materials: Vec<MaterialSpec>,
}

/// Load a material catalog from a TOML file
pub fn load_catalog_from_file(path: &Path) -> Result<MaterialCatalog> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Material catalog not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read material catalog file: {}",
            e
        )))
    })?;

    load_catalog_from_str(&content)
}

/// Load a material catalog from TOML string
pub fn load_catalog_from_str(toml_content: &str) -> Result<MaterialCatalog> {
    let file: MaterialCatalogFile = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse material catalog TOML: {}",
            e
        )))
    })?;

    Ok(MaterialCatalog::from_specs(file.materials)?)
}
