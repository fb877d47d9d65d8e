use crate::config::FileSizeConfig;
use crate::diagnostic::Diagnostic;
use crate::error::ConfigError;
use crate::lexer::ScanResult;
use crate::source::{SourceInput, is_binary};

use super::{Rule, RuleContext};

pub const RULE_ID: &str = "file-size";
pub const DESCRIPTION: &str = "Files must not exceed a size limit";

/// Rejects files larger than `max_size` bytes, optionally only binary ones.
///
/// Sizes are taken from the raw content, so binary files that the other
/// rules never see are still checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSizeRule {
    max_size: u64,
    binary_only: bool,
}

impl FileSizeRule {
    #[must_use]
    pub const fn new(max_size: u64, binary_only: bool) -> Self {
        Self {
            max_size,
            binary_only,
        }
    }

    /// # Errors
    /// Returns an error if the limit is zero.
    pub fn from_config(config: &FileSizeConfig) -> Result<Self, ConfigError> {
        if config.max_size == 0 {
            return Err(ConfigError::InvalidParameter {
                rule: RULE_ID,
                reason: "max_size must be greater than zero".to_string(),
            });
        }
        Ok(Self::new(config.max_size, config.binary_only))
    }
}

impl Rule for FileSizeRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn evaluate(&self, _scan: &ScanResult, _ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    fn check_raw(&self, input: &SourceInput) -> Vec<Diagnostic> {
        if self.binary_only && !is_binary(&input.content) {
            return Vec::new();
        }
        let size = u64::try_from(input.content.len()).unwrap_or(u64::MAX);
        if size <= self.max_size {
            return Vec::new();
        }
        vec![Diagnostic::error(
            &input.path,
            1,
            RULE_ID,
            format!("file is {size} bytes, over the limit of {} bytes", self.max_size),
        )]
    }
}

#[cfg(test)]
#[path = "file_size_tests.rs"]
mod tests;
