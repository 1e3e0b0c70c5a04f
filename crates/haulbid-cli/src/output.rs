//! Output formatting module

use haulbid_domain::model::{BidReport, MaterialCatalog, SummaryRow};
use haulbid_types::{OutputFormat, Result};

pub fn output_report(output_format: OutputFormat, report: &BidReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
    } else {
        print!("{}", render_report(report));
    }

    Ok(())
}

pub fn output_materials(
    output_format: OutputFormat,
    catalog: &MaterialCatalog,
    source: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let specs: Vec<_> = catalog.iter().collect();
        println!("{}", serde_json::to_string_pretty(&specs)?);
    } else {
        println!("\nMaterials ({})", source);
        println!("==========");
        let width = catalog.iter().map(|s| s.name.len()).max().unwrap_or(0) + 2;
        for spec in catalog.iter() {
            println!("{:<width$}{} T/CY", spec.name, spec.density, width = width);
        }
    }

    Ok(())
}

/// Table rendering of a bid report
fn render_report(report: &BidReport) -> String {
    let title = report.result.title();
    let mut out = String::new();

    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push('\n');
    out.push_str(&format!("Job type:  {}\n", report.input.mode_label()));
    out.push_str(&format!(
        "Prepared:  {}\n\n",
        report.prepared_at.format("%Y-%m-%d %H:%M UTC")
    ));
    out.push_str(&render_rows(&report.result.summary_rows()));
    out
}

fn render_rows(rows: &[SummaryRow]) -> String {
    let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0) + 2;
    rows.iter()
        .map(|row| {
            let label = format!("{}:", row.label);
            format!("{:<width$}{}\n", label, row.value, width = width + 1)
        })
        .collect()
}
