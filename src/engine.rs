//! Runs the registered rules over a batch of files.
//!
//! Files are verified in parallel on the rayon pool. Results are collected
//! into an indexed `Vec`, so the final order depends only on the input order
//! and never on which worker finishes first.

use std::path::Path;
use std::time::Instant;

use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::RulesConfig;
use crate::diagnostic::{Diagnostic, SCAN_RULE_ID, Severity, VerificationResult};
use crate::error::{ConfigError, ScanError};
use crate::lexer;
use crate::rules::{RuleContext, RuleRegistry};
use crate::source::{SourceFile, SourceInput};

/// Decides which files get header-only rules.
pub struct HeaderClassifier {
    patterns: GlobSet,
}

impl HeaderClassifier {
    /// # Errors
    /// Returns an error if a pattern is not a valid glob.
    pub fn new(patterns: &[String]) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| ConfigError::InvalidHeaderPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;
            builder.add(glob);
        }
        let patterns = builder
            .build()
            .map_err(|e| ConfigError::InvalidHeaderPattern {
                pattern: "combined patterns".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { patterns })
    }

    /// Matches either the whole path or just the file name.
    #[must_use]
    pub fn is_header(&self, path: &Path) -> bool {
        self.patterns.is_match(path)
            || path
                .file_name()
                .is_some_and(|name| self.patterns.is_match(name))
    }
}

pub struct RuleEngine {
    registry: RuleRegistry,
    headers: HeaderClassifier,
    fail_on: Severity,
}

impl RuleEngine {
    /// Build the engine from rule configuration.
    ///
    /// # Errors
    /// Returns an error for unknown or duplicated rule ids, invalid rule
    /// parameters, and invalid header patterns.
    pub fn new(config: &RulesConfig) -> Result<Self, ConfigError> {
        let registry = RuleRegistry::from_config(config)?;
        let headers = HeaderClassifier::new(&config.headers)?;
        debug!(rules = ?registry.ids(), fail_on = %config.fail_on, "rule engine ready");
        Ok(Self::with_registry(registry, headers, config.fail_on))
    }

    /// Build the engine around an already populated registry.
    #[must_use]
    pub const fn with_registry(
        registry: RuleRegistry,
        headers: HeaderClassifier,
        fail_on: Severity,
    ) -> Self {
        Self {
            registry,
            headers,
            fail_on,
        }
    }

    #[must_use]
    pub const fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    #[must_use]
    pub fn verify(&self, files: &[SourceInput]) -> VerificationResult {
        self.verify_with_progress(files, || {})
    }

    /// Like [`verify`](Self::verify), calling `on_file` once per finished file.
    pub fn verify_with_progress<P>(&self, files: &[SourceInput], on_file: P) -> VerificationResult
    where
        P: Fn() + Sync,
    {
        let started = Instant::now();
        let per_file: Vec<Vec<Diagnostic>> = files
            .par_iter()
            .map(|input| {
                let diagnostics = self.verify_input(input);
                on_file();
                diagnostics
            })
            .collect();

        let diagnostics: Vec<Diagnostic> = per_file.into_iter().flatten().collect();
        debug!(
            files = files.len(),
            diagnostics = diagnostics.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "verification finished"
        );
        VerificationResult::new(diagnostics, files.len(), self.fail_on)
    }

    /// Decode one raw input, scan it once and run every rule in
    /// registration order.
    ///
    /// Raw-content checks run for every input. Text rules only run when the
    /// input decodes; otherwise a `scan` diagnostic leads the list.
    #[must_use]
    pub fn verify_input(&self, input: &SourceInput) -> Vec<Diagnostic> {
        let started = Instant::now();
        let mut diagnostics = Vec::new();
        let decoded = match SourceFile::from_bytes(&input.path, &input.content) {
            Ok(file) => Some(file),
            Err(err) => {
                debug!(path = %input.path.display(), error = %err, "file not decoded");
                diagnostics.push(scan_diagnostic(&input.path, &err));
                None
            }
        };
        let scanned = decoded.as_ref().map(|file| {
            let ctx = RuleContext {
                file,
                is_header: self.headers.is_header(file.path()),
            };
            (lexer::scan(file), ctx)
        });

        for registered in self.registry.iter() {
            let rule = registered.rule();
            let mut found = rule.check_raw(input);
            if let Some((scan, ctx)) = &scanned
                && rule.applies_to(ctx)
            {
                found.extend(rule.evaluate(scan, ctx));
            }
            found.sort_by_key(|d| (d.line, d.column));
            if let Some(severity) = registered.severity() {
                let default = rule.default_severity();
                for d in found.iter_mut().filter(|d| d.severity == default) {
                    d.severity = severity;
                }
            }
            diagnostics.extend(found);
        }

        trace!(
            path = %input.path.display(),
            header = scanned.as_ref().is_some_and(|(_, ctx)| ctx.is_header),
            diagnostics = diagnostics.len(),
            elapsed_us = started.elapsed().as_micros(),
            "file verified"
        );
        diagnostics
    }
}

fn scan_diagnostic(path: &Path, err: &ScanError) -> Diagnostic {
    match err {
        ScanError::InvalidEncoding { .. } => Diagnostic::error(path, 1, SCAN_RULE_ID, err.to_string()),
        ScanError::BinaryContent => Diagnostic::warning(path, 1, SCAN_RULE_ID, err.to_string()),
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
