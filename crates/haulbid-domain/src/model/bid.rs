//! Bid result types and their display rows

use serde::{Deserialize, Serialize};

/// Derived metrics of a load-based bid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBidResult {
    pub material: String,
    /// T/CY
    pub material_density: f64,
    pub round_trip_miles: f64,
    pub total_loads: f64,
    pub loads_per_truck_per_day: f64,
    pub total_loads_per_truck: f64,
    pub trucks_needed: u32,
    pub total_miles: f64,
    pub gallons_used: f64,
    pub fuel_cost: f64,
    /// Fleet labor hours billed for drivers
    pub driver_hours: f64,
    pub driver_cost: f64,
    pub maintenance_cost: f64,
    pub daily_ops_cost: f64,
    pub total_cost: f64,
    pub overhead: f64,
    pub profit: f64,
    pub total_bid: f64,
    pub cost_per_load: f64,
    pub price_per_load: f64,
    pub profit_per_load: f64,
    pub break_even_hourly: f64,
    pub total_tons: f64,
}

/// Derived metrics of an hourly bid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyBidResult {
    pub total_hours: f64,
    pub driver_cost: f64,
    pub truck_cost: f64,
    pub fuel_cost: f64,
    pub base_cost: f64,
    pub overhead: f64,
    pub profit: f64,
    pub total_bid: f64,
    pub final_hourly_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BidResult {
    LoadBased(LoadBidResult),
    Hourly(HourlyBidResult),
}

impl BidResult {
    pub fn title(&self) -> &'static str {
        match self {
            BidResult::LoadBased(_) => "Bid Summary (Per Load)",
            BidResult::Hourly(_) => "Hourly Job Bid Summary",
        }
    }

    pub fn total_bid(&self) -> f64 {
        match self {
            BidResult::LoadBased(r) => r.total_bid,
            BidResult::Hourly(r) => r.total_bid,
        }
    }

    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        match self {
            BidResult::LoadBased(r) => r.summary_rows(),
            BidResult::Hourly(r) => r.summary_rows(),
        }
    }
}

impl LoadBidResult {
    /// Summary metrics in display order
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        vec![
            SummaryRow::new("Material", SummaryValue::Text(self.material.clone())),
            SummaryRow::new(
                "Material Density",
                SummaryValue::quantity(self.material_density, "T/CY", None),
            ),
            SummaryRow::new("Total Tons", SummaryValue::quantity(self.total_tons, "tons", Some(0))),
            SummaryRow::new("Trucks Needed", SummaryValue::Count(self.trucks_needed)),
            SummaryRow::new("Total Loads", SummaryValue::quantity(self.total_loads, "", Some(2))),
            SummaryRow::new("Total Miles", SummaryValue::quantity(self.total_miles, "mi", Some(0))),
            SummaryRow::new("Fuel Cost", SummaryValue::Money(self.fuel_cost)),
            SummaryRow::new("Driver Cost", SummaryValue::Money(self.driver_cost)),
            SummaryRow::new("Maintenance Cost", SummaryValue::Money(self.maintenance_cost)),
            SummaryRow::new("Daily Ops Cost", SummaryValue::Money(self.daily_ops_cost)),
            SummaryRow::new("Total Cost", SummaryValue::Money(self.total_cost)),
            SummaryRow::new("Overhead", SummaryValue::Money(self.overhead)),
            SummaryRow::new("Profit", SummaryValue::Money(self.profit)),
            SummaryRow::new("Total Bid", SummaryValue::Money(self.total_bid)),
            SummaryRow::new("Cost per Load", SummaryValue::Money(self.cost_per_load)),
            SummaryRow::new("Price per Load", SummaryValue::Money(self.price_per_load)),
            SummaryRow::new("Profit per Load", SummaryValue::Money(self.profit_per_load)),
            SummaryRow::new("Break-Even Hourly Rate", SummaryValue::Money(self.break_even_hourly)),
        ]
    }
}

impl HourlyBidResult {
    /// Summary metrics in display order
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        vec![
            SummaryRow::new("Total Hours", SummaryValue::quantity(self.total_hours, "", None)),
            SummaryRow::new("Driver Cost", SummaryValue::Money(self.driver_cost)),
            SummaryRow::new("Truck Cost", SummaryValue::Money(self.truck_cost)),
            SummaryRow::new("Fuel Cost", SummaryValue::Money(self.fuel_cost)),
            SummaryRow::new("Total Cost", SummaryValue::Money(self.base_cost)),
            SummaryRow::new("Overhead", SummaryValue::Money(self.overhead)),
            SummaryRow::new("Profit", SummaryValue::Money(self.profit)),
            SummaryRow::new("Total Bid", SummaryValue::Money(self.total_bid)),
            SummaryRow::new("Bid Hourly Rate", SummaryValue::HourlyRate(self.final_hourly_rate)),
        ]
    }
}

/// One labelled line of a bid summary
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: SummaryValue,
}

impl SummaryRow {
    pub fn new(label: &'static str, value: SummaryValue) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryValue {
    Text(String),
    Count(u32),
    /// Measured quantity; `decimals: None` prints the shortest exact form
    Quantity {
        value: f64,
        unit: &'static str,
        decimals: Option<usize>,
    },
    Money(f64),
    HourlyRate(f64),
    /// Fraction, shown as a percentage
    Percent(f64),
}

impl SummaryValue {
    pub fn quantity(value: f64, unit: &'static str, decimals: Option<usize>) -> Self {
        SummaryValue::Quantity {
            value,
            unit,
            decimals,
        }
    }

    /// Raw numeric value, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SummaryValue::Text(_) => None,
            SummaryValue::Count(n) => Some(f64::from(*n)),
            SummaryValue::Quantity { value, .. } => Some(*value),
            SummaryValue::Money(v) | SummaryValue::HourlyRate(v) | SummaryValue::Percent(v) => {
                Some(*v)
            }
        }
    }
}

impl std::fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryValue::Text(s) => write!(f, "{}", s),
            SummaryValue::Count(n) => write!(f, "{}", n),
            SummaryValue::Quantity {
                value,
                unit,
                decimals,
            } => {
                match decimals {
                    Some(d) => write!(f, "{:.*}", d, value)?,
                    None => write!(f, "{}", value)?,
                }
                if !unit.is_empty() {
                    write!(f, " {}", unit)?;
                }
                Ok(())
            }
            SummaryValue::Money(v) => write!(f, "{}", format_money(*v)),
            SummaryValue::HourlyRate(v) => write!(f, "{}/hr", format_money(*v)),
            SummaryValue::Percent(v) => write!(f, "{:.1}%", v * 100.0),
        }
    }
}

/// Format a dollar amount as `$1,234.56`
pub fn format_money(amount: f64) -> String {
    let rounded = format!("{:.2}", amount.abs());
    let (whole, frac) = rounded
        .split_once('.')
        .unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac)
}
