//! Material-related type definitions

use haulbid_types::{ConfigError, DomainError};
use serde::{Deserialize, Serialize};

/// Material properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Display name
    pub name: String,
    /// Density in tons per cubic yard
    pub density: f64,
}

impl MaterialSpec {
    pub fn new(name: impl Into<String>, density: f64) -> Self {
        Self {
            name: name.into(),
            density,
        }
    }
}

/// Immutable name -> density table
///
/// Entries keep their insertion order so listings match the order the
/// catalog was defined in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialCatalog {
    specs: Vec<MaterialSpec>,
}

impl MaterialCatalog {
    /// Build a catalog, rejecting duplicate names and non-positive densities
    pub fn from_specs(specs: Vec<MaterialSpec>) -> Result<Self, ConfigError> {
        if specs.is_empty() {
            return Err(ConfigError::ParseError(
                "material catalog is empty".to_string(),
            ));
        }

        for (i, spec) in specs.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(ConfigError::ParseError(format!(
                    "material #{} has an empty name",
                    i + 1
                )));
            }
            if !spec.density.is_finite() || spec.density <= 0.0 {
                return Err(ConfigError::ParseError(format!(
                    "material '{}' has invalid density {}",
                    spec.name, spec.density
                )));
            }
            if specs[..i].iter().any(|other| other.name == spec.name) {
                return Err(ConfigError::ParseError(format!(
                    "material '{}' is defined more than once",
                    spec.name
                )));
            }
        }

        Ok(Self { specs })
    }

    /// Get material spec by exact name
    pub fn get(&self, name: &str) -> Option<&MaterialSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Density in T/CY, or `InvalidMaterial` when the name is unknown
    pub fn density(&self, name: &str) -> Result<f64, DomainError> {
        self.get(name)
            .map(|spec| spec.density)
            .ok_or_else(|| DomainError::InvalidMaterial(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> MaterialCatalog {
        MaterialCatalog::from_specs(vec![
            MaterialSpec::new("Sand", 1.4),
            MaterialSpec::new("Gravel", 1.5),
        ])
        .unwrap()
    }

    #[test]
    fn test_density_lookup() {
        let catalog = sample_catalog();
        assert_eq!(catalog.density("Gravel").unwrap(), 1.5);
        assert_eq!(catalog.density("Sand").unwrap(), 1.4);
    }

    #[test]
    fn test_unknown_material_is_invalid() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.density("gravel"),
            Err(DomainError::InvalidMaterial("gravel".to_string()))
        );
    }

    #[test]
    fn test_names_keep_definition_order() {
        let catalog = sample_catalog();
        let names: Vec<_> = catalog.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Sand", "Gravel"]);
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let result = MaterialCatalog::from_specs(vec![
            MaterialSpec::new("Sand", 1.4),
            MaterialSpec::new("Sand", 1.3),
        ]);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_rejects_non_positive_density() {
        for density in [0.0, -1.2, f64::NAN] {
            let result = MaterialCatalog::from_specs(vec![MaterialSpec::new("Mud", density)]);
            assert!(result.is_err(), "density {} should be rejected", density);
        }
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(MaterialCatalog::from_specs(Vec::new()).is_err());
    }
}
