//! CSV report of a gross salary sweep.
//!
//! ## CSV Format
//!
//! One header row followed by one row per gross step. Every value is rounded
//! to a whole number with banker's rounding (midpoint to even).
//!
//! | Column | Source |
//! |-----------------------|-------------------------------------------|
//! | `YearlyGross` | yearly gross (14 payments) |
//! | `YearlyNet` | yearly net |
//! | `YearlyNet/12` | yearly net spread over twelve months |
//! | `MonthlyGross` | monthly gross |
//! | `MonthlyNet` | net of one regular salary |
//! | `SpecialNet` | net of one special payment |
//! | `TotalPercent` | yearly net as a share of yearly gross |
//! | `YearlyIncrement[%]` | share of the last yearly increment kept |
//! | `MonthlyIncrement[%]` | share of the last monthly increment kept |
//! | `SpecialIncrement[%]` | special net delta per monthly gross delta |
//! | `MonthlySv` | social security on one regular salary |
//! | `SpecialSv` | social security on one special payment |
//! | `MonthlyTax` | tax on one regular salary |
//! | `SpecialTax` | tax on one special payment |

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use gross_net_core::DeltaInfo;
use gross_net_core::calculations::common::to_whole_number;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::ReportError;

pub const CSV_COLUMNS: [&str; 14] = [
    "YearlyGross",
    "YearlyNet",
    "YearlyNet/12",
    "MonthlyGross",
    "MonthlyNet",
    "SpecialNet",
    "TotalPercent",
    "YearlyIncrement[%]",
    "MonthlyIncrement[%]",
    "SpecialIncrement[%]",
    "MonthlySv",
    "SpecialSv",
    "MonthlyTax",
    "SpecialTax",
];

/// Options controlling the CSV layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

#[derive(Debug, Serialize)]
struct CsvRow {
    yearly_gross: i64,
    yearly_net: i64,
    yearly_net_per_month: i64,
    monthly_gross: i64,
    monthly_net: i64,
    special_net: i64,
    total_percent: i64,
    yearly_increment_percent: i64,
    monthly_increment_percent: i64,
    special_increment_percent: i64,
    monthly_sv: i64,
    special_sv: i64,
    monthly_tax: i64,
    special_tax: i64,
}

impl From<&DeltaInfo> for CsvRow {
    fn from(info: &DeltaInfo) -> Self {
        let b = &info.breakdown;
        CsvRow {
            yearly_gross: to_whole_number(b.yearly_gross),
            yearly_net: to_whole_number(b.yearly_net),
            yearly_net_per_month: to_whole_number(b.yearly_net / Decimal::from(12)),
            monthly_gross: to_whole_number(b.monthly_gross),
            monthly_net: to_whole_number(b.monthly_net),
            special_net: to_whole_number(b.special_net),
            total_percent: to_whole_number(info.percent),
            yearly_increment_percent: to_whole_number(info.yearly_increment_percent),
            monthly_increment_percent: to_whole_number(info.monthly_increment_percent),
            special_increment_percent: to_whole_number(info.special_increment_percent),
            monthly_sv: to_whole_number(b.monthly_sv),
            special_sv: to_whole_number(b.special_sv),
            monthly_tax: to_whole_number(b.monthly_tax),
            special_tax: to_whole_number(b.special_tax),
        }
    }
}

/// Renders the CSV report as text, header row first.
///
/// # Example
///
/// ```
/// use gross_net_core::{PayrollConfig, SweepConfig, evaluate_sweep};
/// use gross_net_report::{CsvOptions, render_csv};
///
/// let infos = evaluate_sweep(&SweepConfig::default(), &PayrollConfig::default()).unwrap();
/// let csv = render_csv(&infos, CsvOptions::default()).unwrap();
///
/// assert_eq!(csv.lines().count(), 91);
/// assert!(csv.starts_with("YearlyGross,YearlyNet,YearlyNet/12,"));
/// ```
pub fn render_csv(
    infos: &[DeltaInfo],
    options: CsvOptions,
) -> Result<String, ReportError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(CSV_COLUMNS)?;
    for info in infos {
        wtr.serialize(CsvRow::from(info))?;
    }
    wtr.flush().map_err(csv::Error::from)?;

    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes the CSV report to `path`, optionally echoing it to standard output.
///
/// Returns the rendered text.
pub fn generate_csv(
    infos: &[DeltaInfo],
    options: CsvOptions,
    path: &Path,
    echo: bool,
) -> Result<String, ReportError> {
    let csv = render_csv(infos, options)?;

    if echo {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(csv.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(ReportError::Stdout)?;
    }

    fs::write(path, &csv).map_err(|e| ReportError::io(path, e))?;
    info!(path = %path.display(), rows = infos.len(), "wrote CSV report");

    Ok(csv)
}
