//! Repository trait definitions for data persistence

use crate::model::{BidReport, MaterialCatalog};
use haulbid_types::Error;

/// Source of a material catalog
pub trait MaterialCatalogRepository {
    /// Load the full catalog
    fn load_catalog(&self) -> Result<MaterialCatalog, Error>;
}

/// Storage for saved bid reports
pub trait BidReportRepository {
    /// Save a bid report
    fn save(&self, report: &BidReport) -> Result<(), Error>;

    /// Load the saved bid report
    fn load(&self) -> Result<BidReport, Error>;
}
