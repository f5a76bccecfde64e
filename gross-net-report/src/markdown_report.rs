//! Markdown report: a condensed table substituted into a template.

use std::fs;
use std::io;
use std::path::Path;

use gross_net_core::DeltaInfo;
use gross_net_core::calculations::common::to_whole_number;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::ReportError;

/// Placeholder in the template replaced by the generated table.
pub const TABLE_PLACEHOLDER: &str = "<table/>";

pub const MARKDOWN_COLUMNS: [&str; 6] = [
    "MonthlyGross",
    "MonthlyNet",
    "SpecialNet",
    "YearlyNet/12",
    "Total[%]",
    "YearlyIncrement[%]",
];

/// Data rows between two repeated header rows.
pub const ROWS_PER_CHUNK: usize = 10;

/// Renders the pipe-delimited table.
///
/// The header and separator rows are repeated, preceded by an empty line,
/// before every block of [`ROWS_PER_CHUNK`] data rows.
pub fn render_table(infos: &[DeltaInfo]) -> String {
    let header = MARKDOWN_COLUMNS.join("|");
    let separator = vec!["-"; MARKDOWN_COLUMNS.len()].join("|");

    let mut out = String::new();
    for (i, info) in infos.iter().enumerate() {
        if i % ROWS_PER_CHUNK == 0 {
            out.push('\n');
            out.push_str(&header);
            out.push('\n');
            out.push_str(&separator);
            out.push('\n');
        }

        let b = &info.breakdown;
        let cells = [
            b.monthly_gross,
            b.monthly_net,
            b.special_net,
            b.yearly_net / Decimal::from(12),
            info.percent,
            info.yearly_increment_percent,
        ]
        .map(|value| to_whole_number(value).to_string());
        out.push_str(&cells.join("|"));
        out.push('\n');
    }
    out
}

/// Replaces every table placeholder in `template` with `table`.
///
/// ```
/// use gross_net_report::render_markdown;
///
/// let markdown = render_markdown("# Salaries\n<table/>\n", "a|b\n");
/// assert_eq!(markdown, "# Salaries\na|b\n\n");
/// ```
pub fn render_markdown(
    template: &str,
    table: &str,
) -> String {
    if !template.contains(TABLE_PLACEHOLDER) {
        warn!(placeholder = TABLE_PLACEHOLDER, "template has no table placeholder");
    }
    template.replace(TABLE_PLACEHOLDER, table)
}

/// Reads the template at `template_path`, fills in the table and writes the
/// result to `output_path`.
///
/// # Errors
///
/// Returns [`ReportError::MissingTemplate`] if the template does not exist,
/// and [`ReportError::Io`] for any other read or write failure.
pub fn generate_markdown(
    infos: &[DeltaInfo],
    template_path: &Path,
    output_path: &Path,
) -> Result<String, ReportError> {
    let template = fs::read_to_string(template_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReportError::MissingTemplate {
            path: template_path.to_path_buf(),
        },
        _ => ReportError::io(template_path, e),
    })?;

    let markdown = render_markdown(&template, &render_table(infos));
    fs::write(output_path, &markdown).map_err(|e| ReportError::io(output_path, e))?;
    info!(path = %output_path.display(), rows = infos.len(), "wrote Markdown report");

    Ok(markdown)
}
