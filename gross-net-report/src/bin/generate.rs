use anyhow::{Context, Result};
use gross_net_report::logging::init_default_logging;
use gross_net_report::{ReportSettings, run};
use tracing::info;

/// Tabulate gross and net salaries for a range of monthly gross amounts.
///
/// Writes `RESULT.csv` (also printed to stdout) and `README.md`, generated
/// from `README_TEMPLATE.md` in the working directory. All rates, brackets
/// and the salary range are built-in constants.
fn main() -> Result<()> {
    init_default_logging();

    let settings = ReportSettings::default();
    let summary = run(&settings).with_context(|| {
        format!(
            "Failed to generate {} and {}",
            settings.csv_path.display(),
            settings.markdown_path.display()
        )
    })?;

    info!(
        rows = summary.rows,
        csv = %summary.csv_path.display(),
        markdown = %summary.markdown_path.display(),
        "gross/net tables generated"
    );

    Ok(())
}
