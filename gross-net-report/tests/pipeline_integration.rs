//! Integration tests running the full sweep into a scratch directory.

use std::fs;
use std::path::{Path, PathBuf};

use gross_net_report::{PipelineError, ReportError, ReportSettings, run};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const TEMPLATE: &str = include_str!("../../README_TEMPLATE.md");

/// Creates an empty scratch directory unique to this process and test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gross-net-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create scratch directory");
    dir
}

fn settings_in(dir: &Path) -> ReportSettings {
    ReportSettings {
        echo_csv: false,
        ..ReportSettings::in_dir(dir)
    }
}

#[test]
fn test_default_run_writes_both_reports() {
    let dir = scratch_dir("default-run");
    let settings = settings_in(&dir);
    fs::write(&settings.template_path, TEMPLATE).expect("Failed to write template");

    let summary = run(&settings).expect("Run failed");

    assert_eq!(summary.rows, 90);

    let csv = fs::read_to_string(&settings.csv_path).expect("Missing CSV output");
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 91);
    assert_eq!(lines[0].split(',').count(), 14);
    assert!(lines[1].starts_with("14000,"));
    assert!(lines[90].starts_with("138600,"));

    let markdown = fs::read_to_string(&settings.markdown_path).expect("Missing Markdown output");
    assert!(!markdown.contains("<table/>"));
    assert!(markdown.starts_with("# Gross/Net Salary Table"));
    assert_eq!(
        markdown
            .lines()
            .filter(|line| line.starts_with("MonthlyGross|"))
            .count(),
        9
    );
    assert!(markdown.contains("\n2000|1473|1577|1736|74|57\n"));

    fs::remove_dir_all(&dir).expect("Failed to clean up");
}

#[test]
fn test_semicolon_delimiter() {
    let dir = scratch_dir("semicolon");
    let mut settings = settings_in(&dir);
    settings.csv.delimiter = b';';
    fs::write(&settings.template_path, TEMPLATE).expect("Failed to write template");

    run(&settings).expect("Run failed");

    let csv = fs::read_to_string(&settings.csv_path).expect("Missing CSV output");
    assert!(csv.lines().all(|line| line.split(';').count() == 14));
    assert!(!csv.contains(','));

    fs::remove_dir_all(&dir).expect("Failed to clean up");
}

#[test]
fn test_missing_template_fails_after_csv() {
    let dir = scratch_dir("missing-template");
    let settings = settings_in(&dir);

    let result = run(&settings);

    match result {
        Err(PipelineError::Report(ReportError::MissingTemplate { path })) => {
            assert_eq!(path, settings.template_path);
        }
        other => panic!("Expected missing template error, got {:?}", other),
    }
    assert!(settings.csv_path.exists());
    assert!(!settings.markdown_path.exists());

    fs::remove_dir_all(&dir).expect("Failed to clean up");
}

#[test]
fn test_sweep_starting_at_floor_fails() {
    let dir = scratch_dir("floor");
    let mut settings = settings_in(&dir);
    settings.sweep.start = dec!(500);
    fs::write(&settings.template_path, TEMPLATE).expect("Failed to write template");

    let result = run(&settings);

    let message = result.expect_err("Predecessor 400 is below the floor").to_string();
    assert!(
        message.contains("low-income exemption not implemented"),
        "unexpected message: {message}"
    );
    assert!(!settings.csv_path.exists());

    fs::remove_dir_all(&dir).expect("Failed to clean up");
}
