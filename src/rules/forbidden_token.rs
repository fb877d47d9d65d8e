use crate::config::{ForbiddenTokenConfig, TokenKind};
use crate::diagnostic::{Diagnostic, Severity};
use crate::error::ConfigError;
use crate::lexer::ScanResult;

use super::{Rule, RuleContext};

pub const RULE_ID: &str = "forbidden-token";
pub const DESCRIPTION: &str = "No tabs, CRLF/CR line endings, digraphs or configured strings";

const DIGRAPHS: [&str; 2] = ["<:", ":>"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Builtin(TokenKind),
    Custom(String),
}

impl Token {
    /// Byte offset of the first occurrence in `line`, which keeps its `\n`.
    fn find(&self, line: &str) -> Option<usize> {
        match self {
            Self::Builtin(TokenKind::Tab) => line.find('\t'),
            Self::Builtin(TokenKind::Crlf) => line.find("\r\n"),
            Self::Builtin(TokenKind::Cr) => line
                .match_indices('\r')
                .map(|(idx, _)| idx)
                .find(|idx| !line[idx + 1..].starts_with('\n')),
            Self::Builtin(TokenKind::Digraphs) => {
                DIGRAPHS.iter().filter_map(|d| line.find(d)).min()
            }
            Self::Custom(text) => line.find(text.as_str()),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Builtin(TokenKind::Tab) => "tab character".to_string(),
            Self::Builtin(TokenKind::Crlf) => "CRLF line ending".to_string(),
            Self::Builtin(TokenKind::Cr) => "CR line ending".to_string(),
            Self::Builtin(TokenKind::Digraphs) => "digraph (<: or :>)".to_string(),
            Self::Custom(text) => format!("token '{text}'"),
        }
    }
}

/// Flags lines containing forbidden characters or strings.
///
/// Works on the raw text rather than the lexer output so that line endings
/// are still visible.
pub struct ForbiddenTokenRule {
    tokens: Vec<Token>,
}

impl ForbiddenTokenRule {
    /// # Errors
    /// Returns an error if a custom token is empty.
    pub fn new(kinds: &[TokenKind], custom: &[String]) -> Result<Self, ConfigError> {
        if custom.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidParameter {
                rule: RULE_ID,
                reason: "custom tokens must not be empty".to_string(),
            });
        }
        let mut tokens: Vec<Token> = Vec::new();
        for token in kinds
            .iter()
            .map(|k| Token::Builtin(*k))
            .chain(custom.iter().cloned().map(Token::Custom))
        {
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        Ok(Self { tokens })
    }

    /// # Errors
    /// Returns an error if a custom token is empty.
    pub fn from_config(config: &ForbiddenTokenConfig) -> Result<Self, ConfigError> {
        Self::new(&config.tokens, &config.custom)
    }
}

impl Rule for ForbiddenTokenRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn evaluate(&self, _scan: &ScanResult, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let path = ctx.file.path();
        let mut diags = Vec::new();
        for (idx, line) in ctx.file.text().split_inclusive('\n').enumerate() {
            for token in &self.tokens {
                if let Some(offset) = token.find(line) {
                    let column = line[..offset].chars().count() + 1;
                    diags.push(
                        Diagnostic::warning(
                            path,
                            idx + 1,
                            RULE_ID,
                            format!("forbidden {}", token.describe()),
                        )
                        .with_column(column),
                    );
                }
            }
        }
        diags
    }
}

#[cfg(test)]
#[path = "forbidden_token_tests.rs"]
mod tests;
