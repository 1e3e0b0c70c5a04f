//! Bid report export ("print or save")

mod csv_export;
mod excel;

pub use csv_export::export_to_csv;
pub use excel::export_to_excel;

use haulbid_domain::model::BidReport;
use haulbid_types::{Error, Result};
use std::path::Path;
use tracing::info;

/// Export a bid report, choosing the format from the file extension
pub fn export_report(report: &BidReport, output_path: &Path) -> Result<()> {
    let extension = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("xlsx") => export_to_excel(report, output_path)?,
        Some("csv") => export_to_csv(report, output_path)?,
        _ => {
            return Err(Error::Export(format!(
                "unsupported export format: {} (use .xlsx or .csv)",
                output_path.display()
            )))
        }
    }

    info!(path = %output_path.display(), "exported bid report");
    Ok(())
}
