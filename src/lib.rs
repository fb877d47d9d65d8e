pub mod cli;
pub mod commands;
pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod error;
pub mod lexer;
pub mod logging;
pub mod output;
pub mod rules;
pub mod scanner;
pub mod source;

pub use diagnostic::{Diagnostic, Severity, VerificationResult};
pub use engine::RuleEngine;
pub use error::{CodingStyleError, ConfigError, Result, ScanError};
pub use source::{SourceFile, SourceInput};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
