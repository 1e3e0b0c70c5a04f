//! Command handlers

use crate::cli::{Cli, Commands, ReportArgs};
use crate::output::{output_materials, output_report};
use haulbid_app::app::BidService;
use haulbid_app::config::Config;
use haulbid_app::export::export_report;
use haulbid_app::repository::{load_report, open_material_catalog_repo, save_report};
use haulbid_domain::model::JobInput;
use haulbid_domain::repository::MaterialCatalogRepository;
use haulbid_infra::job_file::load_job_from_file;
use haulbid_types::{OutputFormat, Result};
use std::path::PathBuf;
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.materials.is_some() {
        config.materials_file = cli.materials.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(?output_format, materials = ?config.materials_file, "resolved settings");

    match &cli.command {
        Commands::Load(args) => {
            let job = JobInput::LoadBased(args.to_input(&config));
            cmd_bid(&config, job, output_format, &args.report)
        }

        Commands::Hourly(args) => {
            let job = JobInput::Hourly(args.to_input(&config));
            cmd_bid(&config, job, output_format, &args.report)
        }

        Commands::Run { job, report } => {
            let job = load_job_from_file(job)?;
            cmd_bid(&config, job, output_format, report)
        }

        Commands::Materials => cmd_materials(&config, output_format),

        Commands::Export { report, output } => cmd_export(report.clone(), output.clone()),

        Commands::Config {
            show,
            set_output,
            set_materials,
            clear_materials,
            set_overhead_pct,
            set_profit_pct,
            reset,
        } => cmd_config(
            *show,
            *set_output,
            set_materials.clone(),
            *clear_materials,
            *set_overhead_pct,
            *set_profit_pct,
            *reset,
        ),
    }
}

fn cmd_bid(
    config: &Config,
    job: JobInput,
    output_format: OutputFormat,
    report_args: &ReportArgs,
) -> Result<()> {
    let service = BidService::from_config(config)?;
    let report = service.prepare(job)?;

    // Write files before printing so a failed export leaves stdout empty
    if let Some(ref path) = report_args.save {
        save_report(&report, path)?;
        eprintln!("Saved to: {}", path.display());
    }

    if let Some(ref path) = report_args.export {
        export_report(&report, path)?;
        eprintln!("Exported to: {}", path.display());
    }

    output_report(output_format, &report)
}

fn cmd_materials(config: &Config, output_format: OutputFormat) -> Result<()> {
    let service = BidService::from_config(config)?;
    let source = config
        .materials_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());

    output_materials(output_format, service.materials(), &source)
}

fn cmd_export(report_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    // Load report
    let report = load_report(&report_path)?;

    // Determine output path
    let output_path = output.unwrap_or_else(|| {
        let stem = report_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("bid");
        report_path.with_file_name(format!("{}.xlsx", stem))
    });

    export_report(&report, &output_path)?;

    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_materials: Option<PathBuf>,
    clear_materials: bool,
    set_overhead_pct: Option<f64>,
    set_profit_pct: Option<f64>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = set_materials {
        // Refuse to point the config at a catalog that does not load
        let catalog = open_material_catalog_repo(path.clone()).load_catalog()?;
        println!("Material catalog OK ({} materials)", catalog.len());
        config.materials_file = Some(std::fs::canonicalize(&path)?);
        modified = true;
    }

    if clear_materials {
        config.materials_file = None;
        modified = true;
    }

    if let Some(pct) = set_overhead_pct {
        config.default_overhead_pct = pct;
        modified = true;
    }

    if let Some(pct) = set_profit_pct {
        config.default_profit_pct = pct;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
