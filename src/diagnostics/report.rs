//! Terminal rendering of a diagnostics report

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::runner::DiagnosticsReport;

/// Renders the report as a table followed by a summary
pub fn format_report(report: &DiagnosticsReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Diagnostic", "Verdict", "Time", "Summary"]);

    for (name, outcome) in &report.outcomes {
        builder.push_record([
            name.clone(),
            outcome.verdict.label(),
            format!("{:.2?}", outcome.elapsed),
            outcome.summary.clone(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    format!("{table}\n{}", format_summary(report))
}

fn format_summary(report: &DiagnosticsReport) -> String {
    let mut lines = vec![
        String::new(),
        "Summary".bold().underline().to_string(),
        format!("  Diagnostics run: {}", report.total()),
        format!("  {} Passed: {}", "✓".green(), report.passed),
    ];
    if report.warned > 0 {
        lines.push(format!("  {} Warned: {}", "⚠".yellow(), report.warned));
    }
    if report.failed > 0 {
        lines.push(format!("  {} Failed: {}", "✗".red(), report.failed));
    }

    let overall = match (report.is_healthy(), report.has_warnings()) {
        (false, _) => "Overall: UNHEALTHY".red().bold(),
        (true, true) => "Overall: HEALTHY (with warnings)".yellow().bold(),
        (true, false) => "Overall: HEALTHY".green().bold(),
    };
    lines.push(String::new());
    lines.push(format!("  {overall}"));

    lines.join("\n") + "\n"
}

/// Prints the report and the notes of every diagnostic to stdout
pub fn print_report(report: &DiagnosticsReport) {
    println!("{}", format_report(report));

    for (name, outcome) in &report.outcomes {
        if !outcome.notes.is_empty() {
            println!("\n{}:", name.bold());
            for note in &outcome.notes {
                println!("  {note}");
            }
        }
    }
}
