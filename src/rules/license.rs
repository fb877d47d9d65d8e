use regex::Regex;

use crate::config::LicenseHeaderConfig;
use crate::diagnostic::Diagnostic;
use crate::error::ConfigError;
use crate::lexer::{CommentBlock, LineKind, ScanResult};

use super::{Rule, RuleContext};

pub const RULE_ID: &str = "license-header";
pub const DESCRIPTION: &str = "File starts with the configured license block comment";

const YEAR_PLACEHOLDER: &str = "{YEAR}";

struct TemplateLine {
    /// Whitespace-normalized template text, for messages.
    expected: String,
    pattern: Regex,
}

/// Checks that the first lexical item of a file is the license banner.
///
/// Comparison is line by line after collapsing whitespace, with each
/// `{YEAR}` accepting any four-digit year.
pub struct LicenseHeaderRule {
    lines: Vec<TemplateLine>,
    has_year: bool,
    current_year: Option<u16>,
}

impl LicenseHeaderRule {
    /// Compile a license template.
    ///
    /// # Errors
    /// Returns an error if the template is empty or is not a `/* ... */` comment.
    pub fn new(template: &str) -> Result<Self, ConfigError> {
        let trimmed = template.trim();
        if trimmed.is_empty() {
            return Err(invalid("template is empty"));
        }
        if !(trimmed.starts_with("/*") && trimmed.ends_with("*/")) {
            return Err(invalid("template must be a single /* ... */ block comment"));
        }
        let lines = trimmed
            .lines()
            .map(compile_line)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            lines,
            has_year: trimmed.contains(YEAR_PLACEHOLDER),
            current_year: None,
        })
    }

    /// # Errors
    /// Returns an error if the template is invalid, or if a current year is
    /// configured for a template without `{YEAR}`.
    pub fn from_config(config: &LicenseHeaderConfig) -> Result<Self, ConfigError> {
        Self::new(&config.template)?.with_current_year(config.current_year)
    }

    /// Require the banner years to mention `year`.
    ///
    /// # Errors
    /// Returns an error if the template has no `{YEAR}` placeholder.
    pub fn with_current_year(mut self, year: Option<u16>) -> Result<Self, ConfigError> {
        if year.is_some() && !self.has_year {
            return Err(invalid(
                "current_year is set but the template has no {YEAR} placeholder",
            ));
        }
        self.current_year = year;
        Ok(self)
    }

    fn check(&self, scan: &ScanResult) -> Result<(), String> {
        let Some(first) = scan.first_non_blank_line() else {
            return Err("missing license header".to_string());
        };
        match scan.line_kind(first) {
            Some(LineKind::BlockComment) => {}
            Some(LineKind::LineComment) => {
                return Err(format!(
                    "license header must be a /* ... */ block comment, found a // comment at line {first}"
                ));
            }
            _ => {
                return Err(format!(
                    "missing license header: line {first} is not a comment"
                ));
            }
        }
        let comment = scan
            .comment_starting_at(first)
            .ok_or_else(|| "missing license header".to_string())?;
        let years = self.match_comment(comment)?;
        self.check_year(&years)
    }

    /// Compare the comment with the template, returning the captured years.
    fn match_comment(&self, comment: &CommentBlock) -> Result<Vec<u16>, String> {
        let actual: Vec<String> = comment.text.lines().map(normalize).collect();
        let mut years = Vec::new();

        for (idx, template) in self.lines.iter().enumerate() {
            let line = comment.start_line + idx;
            let Some(found) = actual.get(idx) else {
                return Err(format!(
                    "license header is truncated at line {line}: expected '{}'",
                    template.expected
                ));
            };
            let Some(caps) = template.pattern.captures(found) else {
                return Err(format!(
                    "license header differs at line {line}: expected '{}', found '{found}'",
                    template.expected
                ));
            };
            years.extend(
                caps.iter()
                    .skip(1)
                    .flatten()
                    .filter_map(|m| m.as_str().parse::<u16>().ok()),
            );
        }

        if actual.len() > self.lines.len() {
            return Err(format!(
                "license header has unexpected extra text at line {}",
                comment.start_line + self.lines.len()
            ));
        }
        Ok(years)
    }

    /// One of the captured years must be the current year.
    fn check_year(&self, years: &[u16]) -> Result<(), String> {
        let Some(year) = self.current_year else {
            return Ok(());
        };
        if years.contains(&year) {
            return Ok(());
        }
        let range = years
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("-");
        Err(format!(
            "license year range '{range}' does not mention the current year {year}"
        ))
    }
}

impl Rule for LicenseHeaderRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn evaluate(&self, scan: &ScanResult, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        self.check(scan)
            .err()
            .map(|message| Diagnostic::error(ctx.file.path(), 1, RULE_ID, message))
            .into_iter()
            .collect()
    }
}

fn normalize(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn compile_line(line: &str) -> Result<TemplateLine, ConfigError> {
    let expected = normalize(line);
    let body = expected
        .split(YEAR_PLACEHOLDER)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"(\d{4})");
    let pattern = Regex::new(&format!("^{body}$")).map_err(|e| invalid(e.to_string()))?;
    Ok(TemplateLine { expected, pattern })
}

fn invalid(reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidParameter {
        rule: RULE_ID,
        reason: reason.into(),
    }
}

#[cfg(test)]
#[path = "license_tests.rs"]
mod tests;
