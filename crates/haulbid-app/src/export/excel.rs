//! Excel export functionality

use haulbid_domain::model::{BidReport, SummaryRow, SummaryValue};
use haulbid_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Export a bid report to an Excel file
pub fn export_to_excel(report: &BidReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    // Add summary sheet
    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, report)?;

    // Add inputs sheet
    let inputs_sheet = workbook.add_worksheet();
    write_inputs_sheet(inputs_sheet, report)?;

    // Save workbook
    workbook
        .save(output_path)
        .map_err(|e| Error::Export(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &BidReport) -> Result<()> {
    sheet
        .set_name("Bid Summary")
        .map_err(|e| Error::Export(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, report.result.title(), &header_format)
        .map_err(|e| Error::Export(e.to_string()))?;

    sheet
        .write_string(2, 0, "Prepared:")
        .map_err(|e| Error::Export(e.to_string()))?;
    sheet
        .write_string(
            2,
            1,
            report.prepared_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        )
        .map_err(|e| Error::Export(e.to_string()))?;

    sheet
        .write_string(3, 0, "Job Type:")
        .map_err(|e| Error::Export(e.to_string()))?;
    sheet
        .write_string(3, 1, report.input.mode_label())
        .map_err(|e| Error::Export(e.to_string()))?;

    write_rows(sheet, 5, ["Metric", "Value", "Unit"], &report.result.summary_rows())?;

    sheet
        .set_column_width(0, 26)
        .map_err(|e| Error::Export(e.to_string()))?;
    sheet
        .set_column_width(1, 16)
        .map_err(|e| Error::Export(e.to_string()))?;

    Ok(())
}

fn write_inputs_sheet(sheet: &mut Worksheet, report: &BidReport) -> Result<()> {
    sheet
        .set_name("Inputs")
        .map_err(|e| Error::Export(e.to_string()))?;

    write_rows(sheet, 0, ["Input", "Value", "Unit"], &report.input.input_rows())?;

    sheet
        .set_column_width(0, 30)
        .map_err(|e| Error::Export(e.to_string()))?;

    Ok(())
}

/// Write a header line at `first_row`, then one line per summary row
fn write_rows(
    sheet: &mut Worksheet,
    first_row: u32,
    headers: [&str; 3],
    rows: &[SummaryRow],
) -> Result<()> {
    let header_format = Format::new().set_bold();

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(first_row, col as u16, *header, &header_format)
            .map_err(|e| Error::Export(e.to_string()))?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = first_row + 1 + i as u32;

        sheet
            .write_string(r, 0, row.label)
            .map_err(|e| Error::Export(e.to_string()))?;

        match &row.value {
            SummaryValue::Text(text) => {
                sheet
                    .write_string(r, 1, text)
                    .map_err(|e| Error::Export(e.to_string()))?;
            }
            value => {
                let number = value.as_number().unwrap_or_default();
                sheet
                    .write_number_with_format(r, 1, number, &number_format(value))
                    .map_err(|e| Error::Export(e.to_string()))?;
            }
        }

        if let SummaryValue::Quantity { unit, .. } = &row.value {
            if !unit.is_empty() {
                sheet
                    .write_string(r, 2, *unit)
                    .map_err(|e| Error::Export(e.to_string()))?;
            }
        }
    }

    Ok(())
}

fn number_format(value: &SummaryValue) -> Format {
    match value {
        SummaryValue::Money(_) => Format::new().set_num_format("$#,##0.00"),
        SummaryValue::HourlyRate(_) => Format::new().set_num_format("$#,##0.00\"/hr\""),
        SummaryValue::Percent(_) => Format::new().set_num_format("0.0%"),
        SummaryValue::Quantity {
            decimals: Some(0), ..
        } => Format::new().set_num_format("0"),
        SummaryValue::Quantity {
            decimals: Some(d), ..
        } => Format::new().set_num_format(format!("0.{}", "0".repeat(*d))),
        _ => Format::new(),
    }
}
