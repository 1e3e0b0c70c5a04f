//! Built-in material densities

use haulbid_domain::model::MaterialCatalog;
use haulbid_infra::material_catalog_loader::load_catalog_from_str;
use std::sync::LazyLock;

/// Built-in catalog, parsed once from the embedded materials.toml
static BUILTIN_MATERIALS: LazyLock<MaterialCatalog> = LazyLock::new(|| {
    load_catalog_from_str(include_str!("materials.toml"))
        .expect("Failed to parse built-in materials.toml")
});

pub fn builtin_catalog() -> &'static MaterialCatalog {
    &BUILTIN_MATERIALS
}
