use serde::{Deserialize, Serialize};

use crate::diagnostic::Severity;

/// Rule ids enabled when the config does not say otherwise.
pub const DEFAULT_ENABLED_RULES: &[&str] = &["license-header", "header-guard", "include-order"];

/// The FW4SPL LGPL banner. `{YEAR}` matches any four-digit year.
pub const DEFAULT_LICENSE_TEMPLATE: &str = "/* ***** BEGIN LICENSE BLOCK *****
 * FW4SPL - Copyright (C) IRCAD, {YEAR}-{YEAR}.
 * Distributed under the terms of the GNU Lesser General Public License (LGPL) as
 * published by the Free Software Foundation.
 * ****** END LICENSE BLOCK ****** */";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// File discovery settings.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Rule selection and per-rule parameters.
    #[serde(default)]
    pub rules: RulesConfig,
}

/// Which files are handed to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// File extensions to verify.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns of files to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
            gitignore: true,
        }
    }
}

/// Rule configuration consumed by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesConfig {
    /// Enabled rule ids, in evaluation order.
    #[serde(default = "default_enabled")]
    pub enabled: Vec<String>,

    /// Lowest severity that makes a run fail.
    #[serde(default)]
    pub fail_on: Severity,

    /// File-name globs classifying a file as a header.
    #[serde(default = "default_header_patterns")]
    pub headers: Vec<String>,

    #[serde(default, rename = "license-header")]
    pub license_header: LicenseHeaderConfig,

    #[serde(default, rename = "header-guard")]
    pub header_guard: HeaderGuardConfig,

    #[serde(default, rename = "include-order")]
    pub include_order: IncludeOrderConfig,

    #[serde(default, rename = "forbidden-token")]
    pub forbidden_token: ForbiddenTokenConfig,

    #[serde(default, rename = "file-size")]
    pub file_size: FileSizeConfig,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            fail_on: Severity::Error,
            headers: default_header_patterns(),
            license_header: LicenseHeaderConfig::default(),
            header_guard: HeaderGuardConfig::default(),
            include_order: IncludeOrderConfig::default(),
            forbidden_token: ForbiddenTokenConfig::default(),
            file_size: FileSizeConfig::default(),
        }
    }
}

/// [rules.license-header]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LicenseHeaderConfig {
    /// Expected banner text. `{YEAR}` stands for any four-digit year.
    #[serde(default = "default_license_template")]
    pub template: String,

    /// When set, the banner years must mention this year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_year: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl Default for LicenseHeaderConfig {
    fn default() -> Self {
        Self {
            template: default_license_template(),
            current_year: None,
            severity: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GuardNamingKind {
    /// Derived from the path below the last `include/` or `src/` directory.
    #[default]
    Path,
    /// Built from `HeaderGuardConfig::template`.
    Template,
}

/// [rules.header-guard]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderGuardConfig {
    #[serde(default)]
    pub naming: GuardNamingKind,

    /// Guard template, e.g. `__{NAMESPACE}_{BASENAME}_{EXT}__`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Require `#endif // GUARD` rather than allowing a bare `#endif`.
    #[serde(default)]
    pub require_endif_comment: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

/// Placement of local (`"..."`) and system (`<...>`) includes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IncludeGrouping {
    #[default]
    LocalFirst,
    SystemFirst,
    /// Either order, as long as each style forms a single run.
    NoMixing,
    /// No grouping constraint.
    Any,
}

/// [rules.include-order]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncludeOrderConfig {
    #[serde(default)]
    pub grouping: IncludeGrouping,

    #[serde(default = "default_true")]
    pub alphabetical: bool,

    #[serde(default = "default_true")]
    pub case_sensitive: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl Default for IncludeOrderConfig {
    fn default() -> Self {
        Self {
            grouping: IncludeGrouping::LocalFirst,
            alphabetical: true,
            case_sensitive: true,
            severity: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Tab,
    Crlf,
    Cr,
    Digraphs,
}

/// [rules.forbidden-token]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForbiddenTokenConfig {
    #[serde(default = "default_tokens")]
    pub tokens: Vec<TokenKind>,

    /// Additional literal strings that must not appear.
    #[serde(default)]
    pub custom: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl Default for ForbiddenTokenConfig {
    fn default() -> Self {
        Self {
            tokens: default_tokens(),
            custom: Vec::new(),
            severity: None,
        }
    }
}

/// 1 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// [rules.file-size]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileSizeConfig {
    /// Largest accepted file, in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_size: u64,

    /// Only limit files detected as binary.
    #[serde(default)]
    pub binary_only: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl Default for FileSizeConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_FILE_SIZE,
            binary_only: false,
            severity: None,
        }
    }
}

const fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

const fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    ["cpp", "cxx", "c", "hpp", "hxx", "h"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_enabled() -> Vec<String> {
    DEFAULT_ENABLED_RULES.iter().map(|s| (*s).to_string()).collect()
}

fn default_header_patterns() -> Vec<String> {
    ["*.hpp", "*.hxx", "*.h"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_license_template() -> String {
    DEFAULT_LICENSE_TEMPLATE.to_string()
}

fn default_tokens() -> Vec<TokenKind> {
    vec![TokenKind::Tab, TokenKind::Crlf]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
