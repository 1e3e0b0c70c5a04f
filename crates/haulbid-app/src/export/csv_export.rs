//! CSV export

use haulbid_domain::model::{BidReport, SummaryRow};
use haulbid_types::Result;
use std::path::Path;

/// Write the bid summary as `metric,value,display` rows
///
/// `value` is the raw number (or text) and `display` the formatted string
/// shown in the terminal summary.
pub fn export_to_csv(report: &BidReport, output_path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(["metric", "value", "display"])?;

    let prepared = report.prepared_at.format("%Y-%m-%d %H:%M UTC").to_string();
    writer.write_record(["Job Type", report.input.mode_label(), report.input.mode_label()])?;
    writer.write_record(["Prepared", prepared.as_str(), prepared.as_str()])?;

    for row in report.result.summary_rows() {
        writer.write_record(record(&row))?;
    }

    writer.flush()?;
    Ok(())
}

fn record(row: &SummaryRow) -> [String; 3] {
    let display = row.value.to_string();
    let value = match row.value.as_number() {
        Some(n) => n.to_string(),
        None => display.clone(),
    };
    [row.label.to_string(), value, display]
}
