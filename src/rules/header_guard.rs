use std::path::Path;

use crate::config::{GuardNamingKind, HeaderGuardConfig};
use crate::diagnostic::Diagnostic;
use crate::error::ConfigError;
use crate::lexer::{Directive, DirectiveKind, ScanResult};

use super::naming::{ExpectedGuard, GuardNaming};
use super::{Rule, RuleContext};

pub const RULE_ID: &str = "header-guard";
pub const DESCRIPTION: &str = "Header is wrapped in #ifndef/#define/#endif with the expected guard";

/// Checks the `#ifndef GUARD` / `#define GUARD` / `#endif // GUARD` frame
/// of a header.
pub struct HeaderGuardRule {
    naming: GuardNaming,
    require_endif_comment: bool,
}

impl HeaderGuardRule {
    #[must_use]
    pub const fn new(naming: GuardNaming, require_endif_comment: bool) -> Self {
        Self {
            naming,
            require_endif_comment,
        }
    }

    /// # Errors
    /// Returns an error if `naming = "template"` has no usable template.
    pub fn from_config(config: &HeaderGuardConfig) -> Result<Self, ConfigError> {
        let naming = match config.naming {
            GuardNamingKind::Path => GuardNaming::Path,
            GuardNamingKind::Template => {
                let template =
                    config
                        .template
                        .as_deref()
                        .ok_or_else(|| ConfigError::InvalidParameter {
                            rule: RULE_ID,
                            reason: "naming = \"template\" requires a template".to_string(),
                        })?;
                GuardNaming::template(template)?
            }
        };
        Ok(Self::new(naming, config.require_endif_comment))
    }

    fn check_define(scan: &ScanResult, ifndef: &Directive, path: &Path) -> Option<Diagnostic> {
        let guard = ifndef.argument.as_str();
        let next = scan.directives().find(|d| d.line > ifndef.line);
        let message = match next {
            Some(d) if d.kind == DirectiveKind::Define && d.argument == guard => return None,
            Some(d) if d.kind == DirectiveKind::Define => {
                return Some(Diagnostic::error(
                    path,
                    d.line,
                    RULE_ID,
                    format!("#define '{}' does not match #ifndef '{guard}'", d.argument),
                ));
            }
            Some(d) => {
                return Some(Diagnostic::error(
                    path,
                    d.line,
                    RULE_ID,
                    format!(
                        "expected '#define {guard}' after #ifndef, found '#{}'",
                        d.kind.name()
                    ),
                ));
            }
            None => format!("missing '#define {guard}' after #ifndef"),
        };
        Some(Diagnostic::error(path, ifndef.line, RULE_ID, message))
    }

    fn check_name(&self, ifndef: &Directive, path: &Path) -> Option<Diagnostic> {
        let guard = ifndef.argument.as_str();
        match self.naming.expected_guard(path) {
            ExpectedGuard::Name(expected) if expected == guard => None,
            ExpectedGuard::Name(expected) => Some(Diagnostic::error(
                path,
                ifndef.line,
                RULE_ID,
                format!("header guard '{guard}' should be '{expected}'"),
            )),
            ExpectedGuard::Unresolved(reason) => {
                Some(Diagnostic::warning(path, ifndef.line, RULE_ID, reason))
            }
        }
    }

    fn check_endif(&self, scan: &ScanResult, guard: &str, path: &Path) -> Option<Diagnostic> {
        let endif = scan
            .last_significant_line()
            .and_then(|line| scan.directive_at(line))
            .filter(|d| d.kind == DirectiveKind::Endif);
        let Some(endif) = endif else {
            return Some(Diagnostic::error(
                path,
                scan.line_count().max(1),
                RULE_ID,
                format!("missing '#endif' closing header guard '{guard}'"),
            ));
        };
        match endif.trailing_comment.as_deref() {
            Some(comment) => {
                let echoed = comment.split_whitespace().next().unwrap_or_default();
                (echoed != guard).then(|| {
                    Diagnostic::error(
                        path,
                        endif.line,
                        RULE_ID,
                        format!("#endif comment '{comment}' does not match guard '{guard}'"),
                    )
                })
            }
            None if self.require_endif_comment => Some(Diagnostic::error(
                path,
                endif.line,
                RULE_ID,
                format!("#endif must be followed by '// {guard}'"),
            )),
            None => None,
        }
    }
}

impl Rule for HeaderGuardRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn applies_to(&self, ctx: &RuleContext<'_>) -> bool {
        ctx.is_header
    }

    fn evaluate(&self, scan: &ScanResult, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let path = ctx.file.path();
        // Comments may sit between the license and the guard.
        let ifndef = scan
            .first_significant_line()
            .and_then(|line| scan.directive_at(line))
            .filter(|d| d.kind == DirectiveKind::Ifndef && !d.argument.is_empty());
        let Some(ifndef) = ifndef else {
            return vec![Diagnostic::error(path, 1, RULE_ID, "missing header guard")];
        };

        [
            Self::check_define(scan, ifndef, path),
            self.check_name(ifndef, path),
            self.check_endif(scan, &ifndef.argument, path),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
#[path = "header_guard_tests.rs"]
mod tests;
