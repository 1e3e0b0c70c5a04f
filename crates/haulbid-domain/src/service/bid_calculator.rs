//! Job-type dispatch for the bid calculators

use haulbid_types::DomainError;

use super::{compute_hourly_bid, compute_load_bid};
use crate::model::{BidResult, JobInput, MaterialCatalog};

/// Compute the bid for either job type
///
/// The catalog is only consulted for load-based jobs.
pub fn compute_bid(job: &JobInput, catalog: &MaterialCatalog) -> Result<BidResult, DomainError> {
    match job {
        JobInput::LoadBased(input) => compute_load_bid(input, catalog).map(BidResult::LoadBased),
        JobInput::Hourly(input) => compute_hourly_bid(input).map(BidResult::Hourly),
    }
}

/// `numerator / denominator`, refusing zero and non-finite denominators
pub(crate) fn checked_div(
    numerator: f64,
    denominator: f64,
    quantity: &'static str,
) -> Result<f64, DomainError> {
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(DomainError::DivisionByZero { quantity });
    }
    Ok(numerator / denominator)
}
