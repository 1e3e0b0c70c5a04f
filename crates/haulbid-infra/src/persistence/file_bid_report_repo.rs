//! File-based bid report repository (pretty JSON)

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use haulbid_domain::model::BidReport;
use haulbid_domain::repository::BidReportRepository;
use haulbid_types::{Error, Result};
use tracing::info;

/// Stores a single bid report as a JSON file
pub struct FileBidReportRepository {
    report_path: PathBuf,
}

impl FileBidReportRepository {
    pub fn new(report_path: PathBuf) -> Self {
        Self { report_path }
    }

    pub fn report_path(&self) -> &PathBuf {
        &self.report_path
    }
}

impl BidReportRepository for FileBidReportRepository {
    fn save(&self, report: &BidReport) -> Result<()> {
        if let Some(parent) = self.report_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.report_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, report)?;
        info!(path = %self.report_path.display(), "saved bid report");
        Ok(())
    }

    fn load(&self) -> Result<BidReport> {
        if !self.report_path.exists() {
            return Err(Error::FileNotFound(format!(
                "Bid report not found: {}",
                self.report_path.display()
            )));
        }

        let file = File::open(&self.report_path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
