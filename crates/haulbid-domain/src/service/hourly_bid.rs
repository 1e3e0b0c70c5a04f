//! Hourly bid calculation

use haulbid_types::DomainError;
use tracing::debug;

use super::bid_calculator::checked_div;
use crate::model::{HourlyBidResult, HourlyJobInput};

pub fn compute_hourly_bid(input: &HourlyJobInput) -> Result<HourlyBidResult, DomainError> {
    let total_hours = f64::from(input.trucks) * input.hours_per_day * f64::from(input.days);
    debug!(total_hours, trucks = input.trucks, "billing hourly job");

    let driver_cost = total_hours * input.driver_hourly_rate;
    let truck_cost = total_hours * input.truck_hourly_cost;
    let fuel_cost = total_hours * input.fuel_cost_per_hour;
    let base_cost = driver_cost + truck_cost + fuel_cost;

    let overhead = base_cost * input.overhead_pct;
    let profit = (base_cost + overhead) * input.profit_margin_pct;
    let total_bid = base_cost + overhead + profit;
    let final_hourly_rate = checked_div(total_bid, total_hours, "total hours")?;

    Ok(HourlyBidResult {
        total_hours,
        driver_cost,
        truck_cost,
        fuel_cost,
        base_cost,
        overhead,
        profit,
        total_bid,
        final_hourly_rate,
    })
}
