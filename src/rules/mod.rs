//! Style rules and their registry.
//!
//! Each rule is an independent check over one file's `ScanResult`. Rules are
//! built from `RulesConfig` once per run; their parameters are validated at
//! that point, so `evaluate` itself cannot fail.

mod file_size;
mod forbidden_token;
mod header_guard;
mod include_order;
mod license;
mod naming;

pub use file_size::FileSizeRule;
pub use forbidden_token::ForbiddenTokenRule;
pub use header_guard::HeaderGuardRule;
pub use include_order::IncludeOrderRule;
pub use license::LicenseHeaderRule;
pub use naming::{ExpectedGuard, GuardNaming, GuardTemplate};

use indexmap::IndexSet;

use crate::config::RulesConfig;
use crate::diagnostic::{Diagnostic, Severity};
use crate::error::ConfigError;
use crate::lexer::ScanResult;
use crate::source::{SourceFile, SourceInput};

/// Per-file facts a rule may need beyond the scan result.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub file: &'a SourceFile,
    /// Whether the file matched the configured header patterns.
    pub is_header: bool,
}

pub trait Rule: Send + Sync {
    /// Stable identifier used in config and diagnostics.
    fn id(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Severity of the diagnostics this rule reports for its violations. A
    /// configured override replaces this severity only.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether the rule should run for this file at all.
    fn applies_to(&self, _ctx: &RuleContext<'_>) -> bool {
        true
    }

    /// Check one file. Diagnostics may come in any order; the engine sorts
    /// them and applies any configured severity override.
    fn evaluate(&self, scan: &ScanResult, ctx: &RuleContext<'_>) -> Vec<Diagnostic>;

    /// Check the raw bytes. Runs for every input, including files that could
    /// not be decoded as text.
    fn check_raw(&self, _input: &SourceInput) -> Vec<Diagnostic> {
        Vec::new()
    }
}

/// Built-in rule ids with a one-line description, in registration order.
pub const BUILTIN_RULES: &[(&str, &str)] = &[
    (license::RULE_ID, license::DESCRIPTION),
    (header_guard::RULE_ID, header_guard::DESCRIPTION),
    (include_order::RULE_ID, include_order::DESCRIPTION),
    (forbidden_token::RULE_ID, forbidden_token::DESCRIPTION),
    (file_size::RULE_ID, file_size::DESCRIPTION),
];

/// A rule together with the severity override configured for it.
pub struct RegisteredRule {
    rule: Box<dyn Rule>,
    severity: Option<Severity>,
}

impl RegisteredRule {
    #[must_use]
    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    /// Configured severity override, if any.
    #[must_use]
    pub const fn severity(&self) -> Option<Severity> {
        self.severity
    }
}

/// Ordered set of rules. Registration order is evaluation order.
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<RegisteredRule>,
}

impl RuleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the enabled built-in rules.
    ///
    /// # Errors
    /// Returns an error for unknown or duplicated rule ids, and for invalid
    /// rule parameters.
    pub fn from_config(config: &RulesConfig) -> Result<Self, ConfigError> {
        let mut seen = IndexSet::new();
        let mut registry = Self::new();
        for id in &config.enabled {
            if !seen.insert(id.as_str()) {
                return Err(ConfigError::DuplicateRule(id.clone()));
            }
            let (rule, severity) = build_rule(id, config)?;
            registry.register_with_severity(rule, severity);
        }
        Ok(registry)
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.register_with_severity(rule, None);
    }

    pub fn register_with_severity(&mut self, rule: Box<dyn Rule>, severity: Option<Severity>) {
        self.rules.push(RegisteredRule { rule, severity });
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredRule> {
        self.rules.iter()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.rule.id()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn build_rule(
    id: &str,
    config: &RulesConfig,
) -> Result<(Box<dyn Rule>, Option<Severity>), ConfigError> {
    let built: (Box<dyn Rule>, Option<Severity>) = match id {
        license::RULE_ID => (
            Box::new(LicenseHeaderRule::from_config(&config.license_header)?),
            config.license_header.severity,
        ),
        header_guard::RULE_ID => (
            Box::new(HeaderGuardRule::from_config(&config.header_guard)?),
            config.header_guard.severity,
        ),
        include_order::RULE_ID => (
            Box::new(IncludeOrderRule::from_config(&config.include_order)),
            config.include_order.severity,
        ),
        forbidden_token::RULE_ID => (
            Box::new(ForbiddenTokenRule::from_config(&config.forbidden_token)?),
            config.forbidden_token.severity,
        ),
        file_size::RULE_ID => (
            Box::new(FileSizeRule::from_config(&config.file_size)?),
            config.file_size.severity,
        ),
        other => return Err(ConfigError::UnknownRule(other.to_string())),
    };
    Ok(built)
}

#[cfg(test)]
pub(crate) mod test_fixtures;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
