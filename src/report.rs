//! Yearly projection table as CSV

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::answers::questions::DISPLAY_UNIT;
use crate::error::{Error, Result};
use crate::projection::ProjectionResult;

/// Write one row per simulated year (age, income, expense, net, assets)
pub fn write_csv<W: Write>(result: &ProjectionResult, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in result.yearly_rows() {
        csv_writer.serialize(row)?;
    }
    csv_writer
        .flush()
        .map_err(|e| Error::io("<csv output>", e))
}

/// Write the yearly table to a file
pub fn write_csv_file(result: &ProjectionResult, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    write_csv(result, file)
}

/// Amount in display units of 10,000 with one decimal and digit grouping,
/// e.g. `12_345_678` as `"1,234.6"`
pub fn format_display_units(amount: f64) -> String {
    let tenths = (amount / DISPLAY_UNIT as f64 * 10.0).round() as i64;
    let sign = if tenths < 0 { "-" } else { "" };
    let tenths = tenths.unsigned_abs();

    let whole = (tenths / 10).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}.{}", tenths % 10)
}
