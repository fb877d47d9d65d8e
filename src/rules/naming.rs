use std::path::{Component, Path};

use crate::error::ConfigError;

use super::header_guard::RULE_ID;

/// Outcome of deriving a guard name from a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedGuard {
    Name(String),
    /// The path does not fit the naming convention; carries the reason.
    Unresolved(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    Namespace,
    Basename,
    Ext,
    Path,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// How the expected guard macro is derived from a header's path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardNaming {
    /// `__` + path below the last `include/` or `src/` + `__`, upper-cased,
    /// with `/` and `.` mapped to `_`. Unit-test headers under
    /// `<lib>/test/tu/include/` become `__<LIB>_UT_<REST>__`.
    Path,
    /// A template over `{NAMESPACE}`, `{BASENAME}`, `{EXT}` and `{PATH}`.
    Template(GuardTemplate),
}

/// Parsed guard template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardTemplate {
    segments: Vec<Segment>,
}

impl GuardNaming {
    /// Parse a guard template such as `__{NAMESPACE}_{BASENAME}_{EXT}__`.
    ///
    /// # Errors
    /// Returns an error for unknown or unclosed placeholders, and for
    /// templates without any placeholder.
    pub fn template(template: &str) -> Result<Self, ConfigError> {
        let mut segments = Vec::new();
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let close = rest[open..]
                .find('}')
                .ok_or_else(|| invalid(format!("unclosed placeholder in '{template}'")))?;
            let name = &rest[open + 1..open + close];
            segments.push(Segment::Placeholder(parse_placeholder(name)?));
            rest = &rest[open + close + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }
        if !segments
            .iter()
            .any(|s| matches!(s, Segment::Placeholder(_)))
        {
            return Err(invalid(format!(
                "guard template '{template}' has no placeholder"
            )));
        }
        Ok(Self::Template(GuardTemplate { segments }))
    }

    #[must_use]
    pub fn expected_guard(&self, path: &Path) -> ExpectedGuard {
        let parts: Vec<&str> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => s.to_str(),
                _ => None,
            })
            .collect();
        match self {
            Self::Path => from_path(&parts),
            Self::Template(template) => from_template(&template.segments, path, &parts),
        }
    }
}

fn from_path(parts: &[&str]) -> ExpectedGuard {
    let Some(anchor) = source_root(parts) else {
        return ExpectedGuard::Unresolved(
            "path has no 'include' or 'src' directory, guard naming check skipped".to_string(),
        );
    };
    let tail = parts[anchor + 1..].join("_");
    let is_unit_test = anchor >= 3
        && parts[anchor].eq_ignore_ascii_case("include")
        && parts[anchor - 1].eq_ignore_ascii_case("tu")
        && parts[anchor - 2].eq_ignore_ascii_case("test");
    if is_unit_test {
        let lib = identifier(parts[anchor - 3]);
        return ExpectedGuard::Name(format!("__{lib}_UT_{}__", identifier(&tail)));
    }
    ExpectedGuard::Name(format!("__{}__", identifier(&tail)))
}

fn from_template(segments: &[Segment], path: &Path, parts: &[&str]) -> ExpectedGuard {
    let mut guard = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => guard.push_str(text),
            Segment::Placeholder(placeholder) => match expand(*placeholder, path, parts) {
                Ok(value) => guard.push_str(&value),
                Err(reason) => return ExpectedGuard::Unresolved(reason),
            },
        }
    }
    ExpectedGuard::Name(identifier(&guard))
}

fn expand(placeholder: Placeholder, path: &Path, parts: &[&str]) -> Result<String, String> {
    let stem = || {
        path.file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| "path has no file name".to_string())
    };
    match placeholder {
        Placeholder::Namespace => parts
            .len()
            .checked_sub(2)
            .map(|idx| parts[idx].to_string())
            .ok_or_else(|| "path has no parent directory for {NAMESPACE}".to_string()),
        Placeholder::Basename => stem().map(str::to_string),
        Placeholder::Ext => Ok(path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string()),
        Placeholder::Path => {
            let anchor = source_root(parts)
                .ok_or_else(|| "path has no 'include' or 'src' directory for {PATH}".to_string())?;
            let dirs = &parts[anchor + 1..parts.len() - 1];
            let mut pieces: Vec<&str> = dirs.to_vec();
            pieces.push(stem()?);
            Ok(pieces.join("_"))
        }
    }
}

/// Index of the last `include` or `src` directory that has something below it.
fn source_root(parts: &[&str]) -> Option<usize> {
    let dirs = parts.len().checked_sub(1)?;
    parts[..dirs]
        .iter()
        .rposition(|p| p.eq_ignore_ascii_case("include") || p.eq_ignore_ascii_case("src"))
}

fn parse_placeholder(name: &str) -> Result<Placeholder, ConfigError> {
    match name {
        "NAMESPACE" => Ok(Placeholder::Namespace),
        "BASENAME" => Ok(Placeholder::Basename),
        "EXT" => Ok(Placeholder::Ext),
        "PATH" => Ok(Placeholder::Path),
        other => Err(invalid(format!("unknown placeholder '{{{other}}}'"))),
    }
}

/// Upper-case and map everything that cannot appear in a macro name to `_`.
fn identifier(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

fn invalid(reason: String) -> ConfigError {
    ConfigError::InvalidParameter {
        rule: RULE_ID,
        reason,
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
