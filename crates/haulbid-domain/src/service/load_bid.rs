//! Load-based bid calculation
//!
//! Fleet size comes from a ceiling division of total loads by the loads a
//! single truck can run over the job. Drivers are billed for every fleet
//! day, whether or not each truck is busy for the whole day.

use haulbid_types::DomainError;
use tracing::debug;

use super::bid_calculator::checked_div;
use crate::model::{LoadBidResult, LoadJobInput, MaterialCatalog};

pub fn compute_load_bid(
    input: &LoadJobInput,
    catalog: &MaterialCatalog,
) -> Result<LoadBidResult, DomainError> {
    let material_density = catalog.density(&input.material)?;
    let days = f64::from(input.days_to_complete);

    let round_trip_miles = input.one_way_distance * 2.0;
    let total_loads = checked_div(input.total_material, input.truck_capacity, "truck capacity")?;
    let loads_per_truck_per_day =
        checked_div(input.work_hours_per_day, input.round_trip_time, "round trip time")?;
    let total_loads_per_truck = loads_per_truck_per_day * days;
    let trucks_needed =
        fleet_size(checked_div(total_loads, total_loads_per_truck, "loads per truck")?)?;
    let total_miles = total_loads * round_trip_miles;

    debug!(
        total_loads,
        total_loads_per_truck, trucks_needed, "sized fleet for load-based job"
    );

    let gallons_used = checked_div(total_miles, input.mpg, "truck mpg")?;
    let fuel_cost = gallons_used * input.fuel_price_per_gallon;
    let fleet = f64::from(trucks_needed);
    let driver_hours = input.work_hours_per_day * days * fleet;
    let driver_cost = driver_hours * input.driver_hourly_rate;
    let maintenance_cost = total_miles * input.maintenance_per_mile;
    let daily_ops_cost = (input.truck_lease + input.insurance + input.permits) * fleet * days;
    let total_cost = fuel_cost + driver_cost + maintenance_cost + daily_ops_cost;

    let overhead = total_cost * input.overhead_pct;
    // Margin is applied on top of overhead, not on bare cost.
    let profit = (total_cost + overhead) * input.profit_margin_pct;
    let total_bid = total_cost + overhead + profit;

    let cost_per_load = checked_div(total_cost, total_loads, "total loads")?;
    let price_per_load = checked_div(total_bid, total_loads, "total loads")?;
    let profit_per_load = price_per_load - cost_per_load;
    let break_even_hourly = checked_div(
        total_cost,
        fleet * input.work_hours_per_day * days,
        "fleet hours",
    )?;
    let total_tons = input.total_material * material_density;

    Ok(LoadBidResult {
        material: input.material.clone(),
        material_density,
        round_trip_miles,
        total_loads,
        loads_per_truck_per_day,
        total_loads_per_truck,
        trucks_needed,
        total_miles,
        gallons_used,
        fuel_cost,
        driver_hours,
        driver_cost,
        maintenance_cost,
        daily_ops_cost,
        total_cost,
        overhead,
        profit,
        total_bid,
        cost_per_load,
        price_per_load,
        profit_per_load,
        break_even_hourly,
        total_tons,
    })
}

/// Whole trucks covering `ratio`; never fewer than the loads need.
fn fleet_size(ratio: f64) -> Result<u32, DomainError> {
    let fleet = ratio.ceil();
    if fleet.is_nan() || fleet > f64::from(u32::MAX) {
        return Err(DomainError::FleetTooLarge { max: u32::MAX });
    }
    // Negative ratios floor at zero and fail later on "fleet hours"
    Ok(fleet.max(0.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MaterialSpec;

    fn catalog() -> MaterialCatalog {
        MaterialCatalog::from_specs(vec![
            MaterialSpec::new("Gravel", 1.5),
            MaterialSpec::new("Sand", 1.4),
        ])
        .unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_default_job_breakdown() {
        let r = compute_load_bid(&LoadJobInput::default(), &catalog()).unwrap();

        assert_close(r.round_trip_miles, 24.0);
        assert_close(r.total_loads, 300.0);
        assert_close(r.loads_per_truck_per_day, 7.2);
        assert_close(r.total_loads_per_truck, 36.0);
        assert_eq!(r.trucks_needed, 9);
        assert_close(r.total_miles, 7200.0);
        assert_close(r.gallons_used, 1200.0);
        assert_close(r.fuel_cost, 5400.0);
        assert_close(r.driver_hours, 405.0);
        assert_close(r.driver_cost, 12960.0);
        assert_close(r.maintenance_cost, 1800.0);
        // (250 + 50 + 10) per truck-day x 9 trucks x 5 days
        assert_close(r.daily_ops_cost, 13950.0);
        assert_close(r.total_cost, 34110.0);
        assert_close(r.overhead, 3411.0);
        assert_close(r.profit, 7504.2);
        assert_close(r.total_bid, 45025.2);
        assert_close(r.total_tons, 4500.0);
        assert_close(r.material_density, 1.5);
    }

    #[test]
    fn test_per_load_and_break_even() {
        let r = compute_load_bid(&LoadJobInput::default(), &catalog()).unwrap();

        assert_close(r.cost_per_load, 34110.0 / 300.0);
        assert_close(r.price_per_load, 45025.2 / 300.0);
        assert_close(r.price_per_load - r.cost_per_load, r.profit_per_load);
        assert_close(r.break_even_hourly, 34110.0 / 405.0);
    }

    #[test]
    fn test_fleet_rounds_up_on_partial_truck() {
        let input = LoadJobInput {
            total_material: 370.0,
            ..LoadJobInput::default()
        };
        // 37 loads, 36 per truck
        let r = compute_load_bid(&input, &catalog()).unwrap();
        assert_eq!(r.trucks_needed, 2);
    }

    #[test]
    fn test_fleet_beyond_u32_is_an_error() {
        let input = LoadJobInput {
            total_material: 5e10,
            truck_capacity: 1.0,
            round_trip_time: 1.0,
            work_hours_per_day: 1.0,
            days_to_complete: 1,
            ..LoadJobInput::default()
        };
        assert_eq!(
            compute_load_bid(&input, &catalog()),
            Err(DomainError::FleetTooLarge { max: u32::MAX })
        );
    }

    #[test]
    fn test_fleet_at_u32_max_is_exact() {
        assert_eq!(fleet_size(f64::from(u32::MAX)), Ok(u32::MAX));
        assert_eq!(fleet_size(f64::from(u32::MAX) - 0.5), Ok(u32::MAX));
        assert!(fleet_size(f64::from(u32::MAX) + 1.0).is_err());
        assert!(fleet_size(f64::NAN).is_err());
        assert!(fleet_size(f64::INFINITY).is_err());
    }

    #[test]
    fn test_small_job_still_needs_one_truck() {
        let input = LoadJobInput {
            total_material: 5.0,
            ..LoadJobInput::default()
        };
        let r = compute_load_bid(&input, &catalog()).unwrap();
        assert_eq!(r.trucks_needed, 1);
        assert_close(r.total_loads, 0.5);
    }

    #[test]
    fn test_profit_is_markup_on_overhead() {
        let r = compute_load_bid(&LoadJobInput::default(), &catalog()).unwrap();
        assert_close(r.profit, (r.total_cost + r.overhead) * 0.20);
        assert!(r.profit > r.total_cost * 0.20);
    }

    #[test]
    fn test_zero_truck_capacity() {
        let input = LoadJobInput {
            truck_capacity: 0.0,
            ..LoadJobInput::default()
        };
        assert_eq!(
            compute_load_bid(&input, &catalog()),
            Err(DomainError::DivisionByZero {
                quantity: "truck capacity"
            })
        );
    }

    #[test]
    fn test_zero_denominators() {
        let cases: Vec<(LoadJobInput, &str)> = vec![
            (
                LoadJobInput {
                    round_trip_time: 0.0,
                    ..LoadJobInput::default()
                },
                "round trip time",
            ),
            (
                LoadJobInput {
                    days_to_complete: 0,
                    ..LoadJobInput::default()
                },
                "loads per truck",
            ),
            (
                LoadJobInput {
                    work_hours_per_day: 0.0,
                    ..LoadJobInput::default()
                },
                "loads per truck",
            ),
            (
                LoadJobInput {
                    mpg: 0.0,
                    ..LoadJobInput::default()
                },
                "truck mpg",
            ),
            (
                LoadJobInput {
                    total_material: 0.0,
                    ..LoadJobInput::default()
                },
                "total loads",
            ),
        ];

        for (input, quantity) in cases {
            assert_eq!(
                compute_load_bid(&input, &catalog()),
                Err(DomainError::DivisionByZero { quantity })
            );
        }
    }

    #[test]
    fn test_unknown_material_checked_first() {
        let input = LoadJobInput {
            material: "Moon Dust".to_string(),
            truck_capacity: 0.0,
            ..LoadJobInput::default()
        };
        assert_eq!(
            compute_load_bid(&input, &catalog()),
            Err(DomainError::InvalidMaterial("Moon Dust".to_string()))
        );
    }

    #[test]
    fn test_density_only_affects_tonnage() {
        let sand = LoadJobInput {
            material: "Sand".to_string(),
            ..LoadJobInput::default()
        };
        let gravel = compute_load_bid(&LoadJobInput::default(), &catalog()).unwrap();
        let sand = compute_load_bid(&sand, &catalog()).unwrap();

        assert_close(sand.total_tons, 4200.0);
        assert_eq!(sand.total_bid, gravel.total_bid);
    }

    #[test]
    fn test_repeat_calls_are_identical() {
        let input = LoadJobInput::default();
        let first = compute_load_bid(&input, &catalog()).unwrap();
        let second = compute_load_bid(&input, &catalog()).unwrap();
        assert_eq!(first.total_bid.to_bits(), second.total_bid.to_bits());
        assert_eq!(first, second);
    }
}
