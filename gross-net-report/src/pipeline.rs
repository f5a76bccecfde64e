//! End-to-end run: evaluate the sweep, then write both reports.

use std::path::PathBuf;

use gross_net_core::{PayrollConfig, PayrollConfigError, SweepConfig, SweepError, evaluate_sweep};
use thiserror::Error;
use tracing::info;

use crate::csv_report::{CsvOptions, generate_csv};
use crate::error::ReportError;
use crate::markdown_report::generate_markdown;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid payroll configuration: {0}")]
    Config(#[from] PayrollConfigError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Everything a run needs: calculation constants, sweep range and file
/// locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub payroll: PayrollConfig,
    pub sweep: SweepConfig,
    pub csv: CsvOptions,
    pub csv_path: PathBuf,
    /// Print the CSV report to standard output as well.
    pub echo_csv: bool,
    pub template_path: PathBuf,
    pub markdown_path: PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            payroll: PayrollConfig::default(),
            sweep: SweepConfig::default(),
            csv: CsvOptions::default(),
            csv_path: PathBuf::from("RESULT.csv"),
            echo_csv: true,
            template_path: PathBuf::from("README_TEMPLATE.md"),
            markdown_path: PathBuf::from("README.md"),
        }
    }
}

impl ReportSettings {
    /// Default settings with all files placed in `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let defaults = Self::default();
        Self {
            csv_path: dir.join(&defaults.csv_path),
            template_path: dir.join(&defaults.template_path),
            markdown_path: dir.join(&defaults.markdown_path),
            ..defaults
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub csv_path: PathBuf,
    pub markdown_path: PathBuf,
}

/// Validates the settings, evaluates the sweep and writes the CSV and the
/// Markdown report, in that order.
///
/// # Errors
///
/// Any configuration, calculation or I/O error aborts the run.
pub fn run(settings: &ReportSettings) -> Result<RunSummary, PipelineError> {
    settings.payroll.validate()?;
    settings.sweep.validate()?;

    info!(
        start = %settings.sweep.start,
        end = %settings.sweep.end,
        increment = %settings.sweep.increment,
        "evaluating gross salary sweep"
    );
    let infos = evaluate_sweep(&settings.sweep, &settings.payroll)?;

    generate_csv(&infos, settings.csv, &settings.csv_path, settings.echo_csv)?;
    generate_markdown(&infos, &settings.template_path, &settings.markdown_path)?;

    Ok(RunSummary {
        rows: infos.len(),
        csv_path: settings.csv_path.clone(),
        markdown_path: settings.markdown_path.clone(),
    })
}
