use std::io::Write;

use crate::diagnostic::{Diagnostic, Severity, VerificationResult};
use crate::error::Result;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// One line per diagnostic followed by a summary line.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
        }
    }

    fn format_diagnostic(&self, diagnostic: &Diagnostic, output: &mut Vec<u8>) {
        let path = diagnostic.path.display();
        let location = match diagnostic.column {
            Some(column) => format!("{path}:{}:{column}", diagnostic.line),
            None => format!("{path}:{}", diagnostic.line),
        };
        let severity = self.colorize(
            &diagnostic.severity.to_string(),
            Self::severity_color(diagnostic.severity),
        );
        let rule = self.colorize(&format!("[{}]", diagnostic.rule_id), ansi::DIM);

        writeln!(output, "{location}: {severity} {rule} {}", diagnostic.message).ok();
    }

    fn format_summary(&self, result: &VerificationResult) -> String {
        let errors = self.colorize(&result.error_count().to_string(), ansi::RED);
        let warnings = self.colorize(&result.warning_count().to_string(), ansi::YELLOW);
        let status = if result.passed() {
            self.colorize("PASSED", ansi::GREEN)
        } else {
            self.colorize("FAILED", ansi::RED)
        };

        format!(
            "Summary: {} files checked, {errors} errors, {warnings} warnings in {} files: {status}",
            result.files_checked(),
            result.files_with_diagnostics()
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &VerificationResult) -> Result<String> {
        let mut output = Vec::new();

        for diagnostic in result.diagnostics() {
            self.format_diagnostic(diagnostic, &mut output);
        }
        if !result.diagnostics().is_empty() || self.verbose >= 1 {
            writeln!(output).ok();
        }

        writeln!(output, "{}", self.format_summary(result)).ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
