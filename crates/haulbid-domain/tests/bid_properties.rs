//! Cross-cutting properties of the bid calculators

use haulbid_domain::model::{
    BidResult, HourlyJobInput, JobInput, LoadJobInput, MaterialCatalog, MaterialSpec,
};
use haulbid_domain::service::compute_bid;

fn catalog() -> MaterialCatalog {
    MaterialCatalog::from_specs(vec![
        MaterialSpec::new("Gravel", 1.5),
        MaterialSpec::new("Topsoil", 1.2),
    ])
    .unwrap()
}

fn load_result(job: &JobInput) -> haulbid_domain::model::LoadBidResult {
    match compute_bid(job, &catalog()).unwrap() {
        BidResult::LoadBased(r) => r,
        other => panic!("expected load-based result, got {:?}", other),
    }
}

#[test]
fn fleet_size_is_ceiling_of_load_ratio() {
    for total_material in [10.0, 355.0, 360.0, 361.0, 3000.0, 12_345.6] {
        for round_trip_time in [0.5, 1.25, 2.0, 3.3] {
            let job = JobInput::LoadBased(LoadJobInput {
                total_material,
                round_trip_time,
                ..LoadJobInput::default()
            });
            let r = load_result(&job);
            let expected = (r.total_loads / r.total_loads_per_truck).ceil() as u32;

            assert_eq!(r.trucks_needed, expected);
            assert!(r.trucks_needed >= 1);
            assert!(f64::from(r.trucks_needed) * r.total_loads_per_truck >= r.total_loads - 1e-9);
        }
    }
}

#[test]
fn per_load_profit_matches_price_minus_cost() {
    for profit_margin_pct in [0.0, 0.05, 0.2, 0.35] {
        let job = JobInput::LoadBased(LoadJobInput {
            material: "Topsoil".to_string(),
            profit_margin_pct,
            ..LoadJobInput::default()
        });
        let r = load_result(&job);
        assert!((r.price_per_load - r.cost_per_load - r.profit_per_load).abs() < 1e-9);
    }
}

#[test]
fn margin_compounds_on_overhead_for_both_modes() {
    let load = load_result(&JobInput::LoadBased(LoadJobInput::default()));
    assert!((load.profit - (load.total_cost + load.overhead) * 0.2).abs() < 1e-6);
    assert!((load.profit - load.total_cost * 0.2).abs() > 1.0);

    match compute_bid(&JobInput::Hourly(HourlyJobInput::default()), &catalog()).unwrap() {
        BidResult::Hourly(r) => {
            assert!((r.profit - (r.base_cost + r.overhead) * 0.2).abs() < 1e-6);
            assert!((r.profit - r.base_cost * 0.2).abs() > 1.0);
        }
        other => panic!("expected hourly result, got {:?}", other),
    }
}

#[test]
fn identical_inputs_give_bit_identical_results() {
    let jobs = [
        JobInput::LoadBased(LoadJobInput::default()),
        JobInput::Hourly(HourlyJobInput::default()),
    ];
    for job in &jobs {
        let first = compute_bid(job, &catalog()).unwrap();
        let second = compute_bid(job, &catalog()).unwrap();
        assert_eq!(first.total_bid().to_bits(), second.total_bid().to_bits());
        assert_eq!(first, second);
    }
}

fn assert_all_finite(result: &BidResult) {
    let json = serde_json::to_value(result).unwrap();
    for (key, value) in json.as_object().unwrap() {
        if let Some(n) = value.as_f64() {
            assert!(n.is_finite(), "{} is not finite", key);
        }
    }
}

#[test]
fn no_result_contains_non_finite_values() {
    for total_material in [10.0, 355.0, 360.0, 361.0, 3000.0, 12_345.6] {
        for round_trip_time in [0.5, 1.25, 2.0, 3.3] {
            let job = JobInput::LoadBased(LoadJobInput {
                total_material,
                round_trip_time,
                ..LoadJobInput::default()
            });
            assert_all_finite(&compute_bid(&job, &catalog()).unwrap());
        }
    }
    let hourly = JobInput::Hourly(HourlyJobInput::default());
    assert_all_finite(&compute_bid(&hourly, &catalog()).unwrap());
}

#[test]
fn oversized_or_non_finite_jobs_are_errors() {
    let huge_fleet = LoadJobInput {
        total_material: 5e10,
        truck_capacity: 1.0,
        round_trip_time: 1.0,
        work_hours_per_day: 1.0,
        days_to_complete: 1,
        ..LoadJobInput::default()
    };
    let cases = [
        huge_fleet,
        LoadJobInput {
            total_material: f64::INFINITY,
            ..LoadJobInput::default()
        },
        LoadJobInput {
            total_material: f64::NAN,
            ..LoadJobInput::default()
        },
        LoadJobInput {
            truck_capacity: f64::INFINITY,
            ..LoadJobInput::default()
        },
        LoadJobInput {
            mpg: f64::NAN,
            ..LoadJobInput::default()
        },
    ];

    for input in cases {
        let job = JobInput::LoadBased(input);
        let result = compute_bid(&job, &catalog());
        assert!(result.is_err(), "expected an error for {:?}, got {:?}", job, result);
    }
}

#[test]
fn largest_countable_fleet_still_covers_loads() {
    // Just under u32::MAX loads, one per truck
    let job = JobInput::LoadBased(LoadJobInput {
        total_material: 4e9,
        truck_capacity: 1.0,
        round_trip_time: 1.0,
        work_hours_per_day: 1.0,
        days_to_complete: 1,
        ..LoadJobInput::default()
    });
    let r = load_result(&job);

    assert_eq!(r.trucks_needed, 4_000_000_000);
    assert!(f64::from(r.trucks_needed) * r.total_loads_per_truck >= r.total_loads);
    assert_all_finite(&BidResult::LoadBased(r));
}
