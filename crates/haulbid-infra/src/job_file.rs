//! Job file loader
//!
//! A job file is TOML with a `mode` key (`load_based` or `hourly`) and the
//! input fields of that job type. Percentages are fractions. Omitted
//! fields keep their default values.

use haulbid_domain::model::JobInput;
use haulbid_types::{ConfigError, Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn load_job_from_file(path: &Path) -> Result<JobInput> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Job file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let job = load_job_from_str(&content)?;
    debug!(path = %path.display(), mode = job.mode_label(), "loaded job file");
    Ok(job)
}

pub fn load_job_from_str(toml_content: &str) -> Result<JobInput> {
    toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse job file: {}",
            e
        )))
    })
}
