//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use haulbid_app::config::Config;
use haulbid_domain::model::{HourlyJobInput, LoadJobInput};
use haulbid_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "haulbid")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Dump truck hauling bid calculator")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Material catalog TOML file. Uses config value if not specified.
    #[arg(long, global = true)]
    pub materials: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bid a job by the load
    Load(LoadArgs),

    /// Bid a job by the hour
    Hourly(HourlyArgs),

    /// Bid a job described in a TOML job file
    Run {
        /// Path to job file
        job: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// List materials and their densities
    Materials,

    /// Export a saved bid report to Excel or CSV
    Export {
        /// Path to JSON bid report
        report: PathBuf,

        /// Output file (.xlsx or .csv)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Use a custom material catalog file
        #[arg(long)]
        set_materials: Option<PathBuf>,

        /// Go back to the built-in material catalog
        #[arg(long)]
        clear_materials: bool,

        /// Set default overhead % (e.g. 10 for 10%)
        #[arg(long)]
        set_overhead_pct: Option<f64>,

        /// Set default profit margin % (e.g. 20 for 20%)
        #[arg(long)]
        set_profit_pct: Option<f64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Where to save or export the computed bid
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Save the bid report as JSON
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Export the bid summary (.xlsx or .csv)
    #[arg(long, short = 'o')]
    pub export: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Material type
    #[arg(long, default_value = "Gravel")]
    pub material: String,

    /// Total material to haul (CY)
    #[arg(long, default_value_t = 3000.0)]
    pub total_material: f64,

    /// Truck capacity (CY)
    #[arg(long, default_value_t = 10.0)]
    pub truck_capacity: f64,

    /// Round trip time per load (hrs)
    #[arg(long, default_value_t = 1.25)]
    pub round_trip_time: f64,

    /// Work hours per day
    #[arg(long, default_value_t = 9.0)]
    pub work_hours: f64,

    /// Days to complete
    #[arg(long, default_value_t = 5)]
    pub days: u32,

    /// One-way distance to dump (miles)
    #[arg(long, default_value_t = 12.0)]
    pub distance: f64,

    /// Truck MPG
    #[arg(long, default_value_t = 6.0)]
    pub mpg: f64,

    /// Fuel cost per gallon ($)
    #[arg(long, default_value_t = 4.5)]
    pub fuel_price: f64,

    /// Driver hourly rate ($/hr)
    #[arg(long, default_value_t = 32.0)]
    pub driver_rate: f64,

    /// Truck lease per day ($)
    #[arg(long, default_value_t = 250.0)]
    pub truck_lease: f64,

    /// Insurance per day ($)
    #[arg(long, default_value_t = 50.0)]
    pub insurance: f64,

    /// Permit cost per day ($)
    #[arg(long, default_value_t = 10.0)]
    pub permits: f64,

    /// Maintenance cost per mile ($)
    #[arg(long, default_value_t = 0.25)]
    pub maintenance_per_mile: f64,

    /// Overhead % (e.g. 10 for 10%). Uses config value if not specified.
    #[arg(long)]
    pub overhead_pct: Option<f64>,

    /// Profit margin % (e.g. 20 for 20%). Uses config value if not specified.
    #[arg(long)]
    pub profit_pct: Option<f64>,

    #[command(flatten)]
    pub report: ReportArgs,
}

impl LoadArgs {
    pub fn to_input(&self, config: &Config) -> LoadJobInput {
        LoadJobInput {
            material: self.material.clone(),
            total_material: self.total_material,
            truck_capacity: self.truck_capacity,
            round_trip_time: self.round_trip_time,
            work_hours_per_day: self.work_hours,
            days_to_complete: self.days,
            one_way_distance: self.distance,
            mpg: self.mpg,
            fuel_price_per_gallon: self.fuel_price,
            driver_hourly_rate: self.driver_rate,
            truck_lease: self.truck_lease,
            insurance: self.insurance,
            permits: self.permits,
            maintenance_per_mile: self.maintenance_per_mile,
            overhead_pct: percent_or(self.overhead_pct, config.overhead_fraction()),
            profit_margin_pct: percent_or(self.profit_pct, config.profit_fraction()),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct HourlyArgs {
    /// Number of trucks
    #[arg(long, default_value_t = 3)]
    pub trucks: u32,

    /// Hours per day
    #[arg(long, default_value_t = 8.0)]
    pub hours_per_day: f64,

    /// Number of days
    #[arg(long, default_value_t = 5)]
    pub days: u32,

    /// Driver hourly rate ($/hr)
    #[arg(long, default_value_t = 32.0)]
    pub driver_rate: f64,

    /// Truck operating cost per hour ($)
    #[arg(long, default_value_t = 60.0)]
    pub truck_cost: f64,

    /// Fuel cost per hour ($)
    #[arg(long, default_value_t = 15.0)]
    pub fuel_cost: f64,

    /// Overhead % (e.g. 10 for 10%). Uses config value if not specified.
    #[arg(long)]
    pub overhead_pct: Option<f64>,

    /// Profit margin % (e.g. 20 for 20%). Uses config value if not specified.
    #[arg(long)]
    pub profit_pct: Option<f64>,

    #[command(flatten)]
    pub report: ReportArgs,
}

impl HourlyArgs {
    pub fn to_input(&self, config: &Config) -> HourlyJobInput {
        HourlyJobInput {
            trucks: self.trucks,
            hours_per_day: self.hours_per_day,
            days: self.days,
            driver_hourly_rate: self.driver_rate,
            truck_hourly_cost: self.truck_cost,
            fuel_cost_per_hour: self.fuel_cost,
            overhead_pct: percent_or(self.overhead_pct, config.overhead_fraction()),
            profit_margin_pct: percent_or(self.profit_pct, config.profit_fraction()),
        }
    }
}

/// Percent flag as a fraction, or the configured fraction
fn percent_or(percent: Option<f64>, fallback: f64) -> f64 {
    percent.map(|p| p / 100.0).unwrap_or(fallback)
}
