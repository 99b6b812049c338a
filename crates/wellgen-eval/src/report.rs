use std::path::Path;

use crate::errors::EvaluationError;
use crate::model::EvaluationReport;

/// Render a deterministic markdown report from an evaluation.
pub fn render_report(report: &EvaluationReport, max_examples: usize) -> String {
    let mut lines = Vec::new();

    lines.push("# Groundwater Dataset Evaluation".to_string());
    lines.push(String::new());
    lines.push("## Summary".to_string());
    lines.push(format!("- wells_checked: {}", report.wells_checked));
    lines.push(format!("- districts_seen: {}", report.districts_seen));
    lines.push(format!("- violations: {}", report.violations.len()));
    lines.push(String::new());

    if report.is_clean() {
        lines.push("All checks passed.".to_string());
        return lines.join("\n");
    }

    lines.push("## Violations by code".to_string());
    lines.push("| code | count |".to_string());
    lines.push("| --- | --- |".to_string());
    for (code, count) in &report.violations_by_code {
        lines.push(format!("| {code} | {count} |"));
    }
    lines.push(String::new());

    lines.push("## Examples".to_string());
    for violation in report.violations.iter().take(max_examples) {
        lines.push(format!(
            "- `{}` {}: {}",
            violation.code, violation.path, violation.message
        ));
    }
    if report.violations.len() > max_examples {
        lines.push(format!(
            "- ... {} more",
            report.violations.len() - max_examples
        ));
    }

    lines.join("\n")
}

pub fn write_report(path: &Path, markdown: &str) -> Result<(), EvaluationError> {
    std::fs::write(path, markdown)?;
    Ok(())
}
