use serde::Serialize;

use crate::checker::FileReport;
use crate::error::Result;
use crate::rules::Violation;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    violations: Vec<JsonViolation<'a>>,
    errors: Vec<JsonError>,
}

#[derive(Serialize)]
struct Summary {
    files: usize,
    violations: usize,
    errors: usize,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    path: String,
    #[serde(flatten)]
    violation: &'a Violation,
}

#[derive(Serialize)]
struct JsonError {
    path: String,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut violations: Vec<JsonViolation<'_>> = reports
            .iter()
            .flat_map(|report| {
                report.violations().iter().map(move |violation| JsonViolation {
                    path: report.path.display().to_string(),
                    violation,
                })
            })
            .collect();
        violations.sort_by(|a, b| {
            a.path
                .cmp(&b.path)
                .then(a.violation.position.cmp(&b.violation.position))
        });

        let errors: Vec<JsonError> = reports
            .iter()
            .filter_map(|report| {
                report.error().map(|error| JsonError {
                    path: report.path.display().to_string(),
                    message: error.to_string(),
                })
            })
            .collect();

        let output = JsonOutput {
            summary: Summary {
                files: reports.len(),
                violations: violations.len(),
                errors: errors.len(),
            },
            violations,
            errors,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
