//! Error types for haulbid

use thiserror::Error;

/// Errors raised by the bid formulas themselves.
///
/// Both are surfaced before any result is produced; the calculators never
/// hand back a partially filled result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A denominator was zero (or not a finite number)
    #[error("Division by zero: {quantity} must be non-zero")]
    DivisionByZero { quantity: &'static str },

    #[error("Unknown material: {0}")]
    InvalidMaterial(String),

    /// The fleet the loads need cannot be counted in a `u32`
    #[error("Fleet size out of range: more than {max} trucks needed")]
    FleetTooLarge { max: u32 },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, Error>;
