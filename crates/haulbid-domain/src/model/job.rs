//! Job input records

use serde::{Deserialize, Serialize};

use super::bid::{SummaryRow, SummaryValue};

/// Inputs for a job billed by the load
///
/// Percentages are fractions (0.10 = 10%). Fields missing from a job file
/// take the values of `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadJobInput {
    /// Material name, looked up in the material catalog
    pub material: String,
    /// Total material to haul (CY)
    pub total_material: f64,
    /// Truck capacity (CY)
    pub truck_capacity: f64,
    /// Round trip time per load (hours)
    pub round_trip_time: f64,
    pub work_hours_per_day: f64,
    pub days_to_complete: u32,
    /// One-way distance to the dump site (miles)
    pub one_way_distance: f64,
    /// Truck fuel economy (miles per gallon)
    pub mpg: f64,
    pub fuel_price_per_gallon: f64,
    pub driver_hourly_rate: f64,
    /// Truck lease per truck per day
    pub truck_lease: f64,
    /// Insurance per truck per day
    pub insurance: f64,
    /// Permit cost per truck per day
    pub permits: f64,
    pub maintenance_per_mile: f64,
    pub overhead_pct: f64,
    pub profit_margin_pct: f64,
}

impl Default for LoadJobInput {
    fn default() -> Self {
        Self {
            material: "Gravel".to_string(),
            total_material: 3000.0,
            truck_capacity: 10.0,
            round_trip_time: 1.25,
            work_hours_per_day: 9.0,
            days_to_complete: 5,
            one_way_distance: 12.0,
            mpg: 6.0,
            fuel_price_per_gallon: 4.5,
            driver_hourly_rate: 32.0,
            truck_lease: 250.0,
            insurance: 50.0,
            permits: 10.0,
            maintenance_per_mile: 0.25,
            overhead_pct: 0.10,
            profit_margin_pct: 0.20,
        }
    }
}

/// Inputs for a job billed by the hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyJobInput {
    pub trucks: u32,
    pub hours_per_day: f64,
    pub days: u32,
    pub driver_hourly_rate: f64,
    /// Truck operating cost per hour
    pub truck_hourly_cost: f64,
    pub fuel_cost_per_hour: f64,
    pub overhead_pct: f64,
    pub profit_margin_pct: f64,
}

impl Default for HourlyJobInput {
    fn default() -> Self {
        Self {
            trucks: 3,
            hours_per_day: 8.0,
            days: 5,
            driver_hourly_rate: 32.0,
            truck_hourly_cost: 60.0,
            fuel_cost_per_hour: 15.0,
            overhead_pct: 0.10,
            profit_margin_pct: 0.20,
        }
    }
}

/// Job type selector carrying the inputs for that job type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum JobInput {
    LoadBased(LoadJobInput),
    Hourly(HourlyJobInput),
}

impl JobInput {
    /// Label shown to the user for this job type
    pub fn mode_label(&self) -> &'static str {
        match self {
            JobInput::LoadBased(_) => "By the Load",
            JobInput::Hourly(_) => "Hourly",
        }
    }

    /// Input fields as display rows, in form order
    pub fn input_rows(&self) -> Vec<SummaryRow> {
        match self {
            JobInput::LoadBased(input) => vec![
                SummaryRow::new("Material Type", SummaryValue::Text(input.material.clone())),
                SummaryRow::new(
                    "Total Material to Haul",
                    SummaryValue::quantity(input.total_material, "CY", None),
                ),
                SummaryRow::new(
                    "Truck Capacity",
                    SummaryValue::quantity(input.truck_capacity, "CY", None),
                ),
                SummaryRow::new(
                    "Round Trip Time per Load",
                    SummaryValue::quantity(input.round_trip_time, "hrs", None),
                ),
                SummaryRow::new(
                    "Work Hours per Day",
                    SummaryValue::quantity(input.work_hours_per_day, "", None),
                ),
                SummaryRow::new("Days to Complete", SummaryValue::Count(input.days_to_complete)),
                SummaryRow::new(
                    "One-Way Distance to Dump",
                    SummaryValue::quantity(input.one_way_distance, "mi", None),
                ),
                SummaryRow::new("Truck MPG", SummaryValue::quantity(input.mpg, "", None)),
                SummaryRow::new(
                    "Fuel Cost per Gallon",
                    SummaryValue::Money(input.fuel_price_per_gallon),
                ),
                SummaryRow::new(
                    "Driver Hourly Rate",
                    SummaryValue::HourlyRate(input.driver_hourly_rate),
                ),
                SummaryRow::new("Truck Lease per Day", SummaryValue::Money(input.truck_lease)),
                SummaryRow::new("Insurance per Day", SummaryValue::Money(input.insurance)),
                SummaryRow::new("Permit Cost per Day", SummaryValue::Money(input.permits)),
                SummaryRow::new(
                    "Maintenance Cost per Mile",
                    SummaryValue::Money(input.maintenance_per_mile),
                ),
                SummaryRow::new("Overhead %", SummaryValue::Percent(input.overhead_pct)),
                SummaryRow::new("Profit Margin %", SummaryValue::Percent(input.profit_margin_pct)),
            ],
            JobInput::Hourly(input) => vec![
                SummaryRow::new("Number of Trucks", SummaryValue::Count(input.trucks)),
                SummaryRow::new(
                    "Hours per Day",
                    SummaryValue::quantity(input.hours_per_day, "", None),
                ),
                SummaryRow::new("Number of Days", SummaryValue::Count(input.days)),
                SummaryRow::new(
                    "Driver Hourly Rate",
                    SummaryValue::HourlyRate(input.driver_hourly_rate),
                ),
                SummaryRow::new(
                    "Truck Operating Cost per Hour",
                    SummaryValue::HourlyRate(input.truck_hourly_cost),
                ),
                SummaryRow::new(
                    "Fuel Cost per Hour",
                    SummaryValue::HourlyRate(input.fuel_cost_per_hour),
                ),
                SummaryRow::new("Overhead %", SummaryValue::Percent(input.overhead_pct)),
                SummaryRow::new("Profit Margin %", SummaryValue::Percent(input.profit_margin_pct)),
            ],
        }
    }
}

impl From<LoadJobInput> for JobInput {
    fn from(input: LoadJobInput) -> Self {
        JobInput::LoadBased(input)
    }
}

impl From<HourlyJobInput> for JobInput {
    fn from(input: HourlyJobInput) -> Self {
        JobInput::Hourly(input)
    }
}
