use serde::Serialize;

use crate::diagnostic::{Diagnostic, VerificationResult};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    diagnostics: &'a [Diagnostic],
}

#[derive(Serialize)]
struct Summary {
    passed: bool,
    files_checked: usize,
    files_with_diagnostics: usize,
    errors: usize,
    warnings: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &VerificationResult) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                passed: result.passed(),
                files_checked: result.files_checked(),
                files_with_diagnostics: result.files_with_diagnostics(),
                errors: result.error_count(),
                warnings: result.warning_count(),
            },
            diagnostics: result.diagnostics(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
