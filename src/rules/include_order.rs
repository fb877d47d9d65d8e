use std::cmp::Ordering;

use crate::config::{IncludeGrouping, IncludeOrderConfig};
use crate::diagnostic::Diagnostic;
use crate::lexer::{Directive, IncludeStyle, ScanResult};

use super::{Rule, RuleContext};

pub const RULE_ID: &str = "include-order";
pub const DESCRIPTION: &str = "Includes are grouped by style and sorted within each group";

struct Include<'a> {
    directive: &'a Directive,
    style: IncludeStyle,
    path: &'a str,
}

/// Checks grouping of `"local"` and `<system>` includes and their order
/// inside each contiguous group.
pub struct IncludeOrderRule {
    grouping: IncludeGrouping,
    alphabetical: bool,
    case_sensitive: bool,
}

impl IncludeOrderRule {
    #[must_use]
    pub const fn new(grouping: IncludeGrouping, alphabetical: bool, case_sensitive: bool) -> Self {
        Self {
            grouping,
            alphabetical,
            case_sensitive,
        }
    }

    #[must_use]
    pub const fn from_config(config: &IncludeOrderConfig) -> Self {
        Self::new(config.grouping, config.alphabetical, config.case_sensitive)
    }

    const fn preferred_style(&self) -> Option<IncludeStyle> {
        match self.grouping {
            IncludeGrouping::LocalFirst => Some(IncludeStyle::Local),
            IncludeGrouping::SystemFirst => Some(IncludeStyle::System),
            IncludeGrouping::NoMixing | IncludeGrouping::Any => None,
        }
    }

    fn check_grouping(&self, runs: &[&[Include<'_>]], ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let mut diags = Vec::new();
        if self.grouping == IncludeGrouping::Any {
            return diags;
        }
        let path = ctx.file.path();

        for (idx, run) in runs.iter().enumerate().skip(1) {
            let first = &run[0];
            if runs[..idx].iter().any(|prev| prev[0].style == first.style) {
                diags.push(Diagnostic::error(
                    path,
                    first.directive.line,
                    RULE_ID,
                    format!(
                        "{} include {} is separated from the other {} includes",
                        first.style.label(),
                        first.directive.argument,
                        first.style.label()
                    ),
                ));
            }
        }

        if let Some(preferred) = self.preferred_style() {
            let leading = runs.first().map(|run| run[0].style);
            let misplaced = runs.iter().find(|run| run[0].style == preferred);
            if let (Some(leading), Some(run)) = (leading, misplaced)
                && leading != preferred
            {
                let first = &run[0];
                diags.push(Diagnostic::error(
                    path,
                    first.directive.line,
                    RULE_ID,
                    format!(
                        "{} include {} must come before {} includes",
                        preferred.label(),
                        first.directive.argument,
                        leading.label()
                    ),
                ));
            }
        }
        diags
    }

    fn check_alphabetical(&self, run: &[Include<'_>], ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        run.windows(2)
            .filter(|pair| self.compare(pair[0].path, pair[1].path) == Ordering::Greater)
            .map(|pair| {
                let (prev, next) = (pair[0].directive, pair[1].directive);
                Diagnostic::error(
                    ctx.file.path(),
                    next.line,
                    RULE_ID,
                    format!(
                        "include {} (line {}) should come before {} (line {})",
                        next.argument, next.line, prev.argument, prev.line
                    ),
                )
            })
            .collect()
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        if self.case_sensitive {
            a.cmp(b)
        } else {
            a.to_lowercase().cmp(&b.to_lowercase())
        }
    }
}

impl Rule for IncludeOrderRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn evaluate(&self, scan: &ScanResult, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        // Malformed include arguments are not ordered at all.
        let includes: Vec<Include<'_>> = scan
            .includes()
            .filter_map(|directive| {
                Some(Include {
                    directive,
                    style: directive.include_style()?,
                    path: directive.include_path()?,
                })
            })
            .collect();
        let runs: Vec<&[Include<'_>]> = includes.chunk_by(|a, b| a.style == b.style).collect();

        let mut diags = self.check_grouping(&runs, ctx);
        if self.alphabetical {
            for run in &runs {
                diags.extend(self.check_alphabetical(run, ctx));
            }
        }
        diags
    }
}

#[cfg(test)]
#[path = "include_order_tests.rs"]
mod tests;
