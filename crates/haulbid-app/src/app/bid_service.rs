//! Bid Service - resolves the material catalog and prepares bid reports

use chrono::Utc;
use haulbid_domain::model::{BidReport, BidResult, JobInput, MaterialCatalog};
use haulbid_domain::repository::MaterialCatalogRepository;
use haulbid_domain::service::compute_bid;
use haulbid_infra::persistence::FileMaterialCatalogRepository;
use haulbid_types::Result;
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::builtin_catalog;

/// Computes bids against one material catalog
#[derive(Debug, Clone)]
pub struct BidService {
    catalog: MaterialCatalog,
}

impl BidService {
    pub fn new(catalog: MaterialCatalog) -> Self {
        Self { catalog }
    }

    /// Service backed by the built-in material table
    pub fn builtin() -> Self {
        Self::new(builtin_catalog().clone())
    }

    pub fn from_repository(repo: &impl MaterialCatalogRepository) -> Result<Self> {
        Ok(Self::new(repo.load_catalog()?))
    }

    /// Use the configured materials file, or the built-in table when none is set
    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.materials_file {
            Some(path) => {
                let service =
                    Self::from_repository(&FileMaterialCatalogRepository::new(path.clone()))?;
                info!(
                    path = %path.display(),
                    materials = service.catalog.len(),
                    "using custom material catalog"
                );
                Ok(service)
            }
            None => {
                debug!("using built-in material catalog");
                Ok(Self::builtin())
            }
        }
    }

    pub fn materials(&self) -> &MaterialCatalog {
        &self.catalog
    }

    pub fn calculate(&self, job: &JobInput) -> Result<BidResult> {
        Ok(compute_bid(job, &self.catalog)?)
    }

    /// Compute the bid and stamp it with the current time
    pub fn prepare(&self, job: JobInput) -> Result<BidReport> {
        let result = self.calculate(&job)?;
        info!(
            mode = job.mode_label(),
            total_bid = result.total_bid(),
            "bid prepared"
        );
        Ok(BidReport::new(job, result, Utc::now()))
    }
}
