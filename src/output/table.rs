//! Run summary table

use comfy_table::{presets::NOTHING, Table};

use crate::report::ReportOutcome;

/// Build the per-report summary (report, rows, file, status)
pub fn summary_table(outcomes: &[ReportOutcome]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["REPORT", "ROWS", "FILE", "STATUS"]);

    for outcome in outcomes {
        match &outcome.result {
            Ok(summary) => {
                let status = if summary.rows_failed > 0 {
                    format!("ok ({} rows failed)", summary.rows_failed)
                } else {
                    "ok".to_string()
                };
                table.add_row(vec![
                    outcome.kind.label().to_string(),
                    summary.rows_written.to_string(),
                    summary.path.display().to_string(),
                    status,
                ]);
            }
            Err(e) => {
                table.add_row(vec![
                    outcome.kind.label().to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    format!("failed: {}", e),
                ]);
            }
        }
    }

    table
}

/// Print the summary to stderr so stdout stays clean
pub fn print_summary(outcomes: &[ReportOutcome]) {
    eprintln!("{}", summary_table(outcomes));
}
