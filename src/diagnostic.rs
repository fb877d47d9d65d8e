use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Two-tier severity. `Warning < Error`, so a threshold compares with `>=`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    #[default]
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

/// Rule id used for files that could not be decoded.
pub const SCAN_RULE_ID: &str = "scan";

/// One reported violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    pub rule_id: &'static str,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(
        path: &Path,
        line: usize,
        rule_id: &'static str,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.to_path_buf(),
            line,
            column: None,
            rule_id,
            severity,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(path: &Path, line: usize, rule_id: &'static str, message: impl Into<String>) -> Self {
        Self::new(path, line, rule_id, Severity::Error, message)
    }

    #[must_use]
    pub fn warning(
        path: &Path,
        line: usize,
        rule_id: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::new(path, line, rule_id, Severity::Warning, message)
    }

    #[must_use]
    pub const fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path.display(), self.line)?;
        if let Some(column) = self.column {
            write!(f, ":{column}")?;
        }
        write!(f, ": {} [{}] {}", self.severity, self.rule_id, self.message)
    }
}

/// Outcome of one verification run.
///
/// Diagnostics are ordered by file input order, then rule registration
/// order, then line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    diagnostics: Vec<Diagnostic>,
    files_checked: usize,
    passed: bool,
}

impl VerificationResult {
    /// `passed` is false iff some diagnostic reaches `fail_on`.
    #[must_use]
    pub fn new(diagnostics: Vec<Diagnostic>, files_checked: usize, fail_on: Severity) -> Self {
        let passed = !diagnostics.iter().any(|d| d.severity >= fail_on);
        Self {
            diagnostics,
            files_checked,
            passed,
        }
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub const fn passed(&self) -> bool {
        self.passed
    }

    #[must_use]
    pub const fn files_checked(&self) -> usize {
        self.files_checked
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Number of distinct files that received at least one diagnostic.
    #[must_use]
    pub fn files_with_diagnostics(&self) -> usize {
        let mut count = 0;
        let mut last: Option<&Path> = None;
        for d in &self.diagnostics {
            if last != Some(d.path.as_path()) {
                count += 1;
                last = Some(&d.path);
            }
        }
        count
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
