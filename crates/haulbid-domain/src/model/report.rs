use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bid::BidResult;
use super::job::JobInput;

/// A computed bid together with the inputs that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidReport {
    pub prepared_at: DateTime<Utc>,
    pub input: JobInput,
    pub result: BidResult,
}

impl BidReport {
    pub fn new(input: JobInput, result: BidResult, prepared_at: DateTime<Utc>) -> Self {
        Self {
            prepared_at,
            input,
            result,
        }
    }
}
