pub mod csv_report;
pub mod error;
pub mod logging;
pub mod markdown_report;
pub mod pipeline;

pub use csv_report::{CsvOptions, generate_csv, render_csv};
pub use error::ReportError;
pub use markdown_report::{generate_markdown, render_markdown, render_table};
pub use pipeline::{PipelineError, ReportSettings, RunSummary, run};
