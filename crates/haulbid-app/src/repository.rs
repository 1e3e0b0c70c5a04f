//! Repository adapters for persistence layer

use std::path::{Path, PathBuf};

use haulbid_domain::model::BidReport;
use haulbid_domain::repository::BidReportRepository;
use haulbid_infra::persistence::{FileBidReportRepository, FileMaterialCatalogRepository};
use haulbid_types::Result;

/// Open a bid report file
pub fn open_bid_report_repo(path: PathBuf) -> FileBidReportRepository {
    FileBidReportRepository::new(path)
}

/// Open a material catalog file
pub fn open_material_catalog_repo(toml_path: PathBuf) -> FileMaterialCatalogRepository {
    FileMaterialCatalogRepository::new(toml_path)
}

/// Save a bid report as JSON
pub fn save_report(report: &BidReport, path: &Path) -> Result<()> {
    open_bid_report_repo(path.to_path_buf()).save(report)
}

/// Load a bid report saved as JSON
pub fn load_report(path: &Path) -> Result<BidReport> {
    open_bid_report_repo(path.to_path_buf()).load()
}
