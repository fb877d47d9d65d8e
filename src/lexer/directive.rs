use super::types::{Directive, DirectiveKind};

/// A directive line split into the directive itself and, when the line ends
/// inside an unterminated `/*`, the comment text from `/*` onwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDirective {
    pub directive: Directive,
    pub open_comment: Option<String>,
}

/// Parse a line whose first non-whitespace character is `#`.
///
/// Returns `None` for any other line.
#[must_use]
pub fn parse_directive(line_no: usize, line: &str) -> Option<ParsedDirective> {
    let rest = line.trim_start().strip_prefix('#')?.trim_start();
    let name_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    let (name, body) = rest.split_at(name_len);
    let kind = DirectiveKind::from_name(name);

    let (argument, remainder) = match kind {
        DirectiveKind::Include => split_include_argument(body),
        _ => split_at_comment(body),
    };
    let argument = match kind {
        DirectiveKind::Ifndef | DirectiveKind::Define => {
            argument.split_whitespace().next().unwrap_or_default()
        }
        _ => argument.trim(),
    };
    let (trailing_comment, open_comment) = parse_trailing_comment(remainder);

    Some(ParsedDirective {
        directive: Directive {
            line: line_no,
            kind,
            argument: argument.to_string(),
            trailing_comment,
        },
        open_comment,
    })
}

/// Split `"path"` or `<path>` (delimiters kept) from whatever follows it.
fn split_include_argument(body: &str) -> (&str, &str) {
    let trimmed = body.trim_start();
    let close = match trimmed.chars().next() {
        Some('"') => '"',
        Some('<') => '>',
        _ => return split_at_comment(body),
    };
    trimmed[1..].find(close).map_or_else(
        || split_at_comment(body),
        |idx| trimmed.split_at(idx + 2),
    )
}

fn split_at_comment(body: &str) -> (&str, &str) {
    let line = body.find("//");
    let block = body.find("/*");
    let pos = match (line, block) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    };
    pos.map_or((body, ""), |p| body.split_at(p))
}

fn parse_trailing_comment(remainder: &str) -> (Option<String>, Option<String>) {
    let trimmed = remainder.trim();
    let non_empty = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };

    if let Some(text) = trimmed.strip_prefix("//") {
        return (non_empty(text), None);
    }
    let Some(text) = trimmed.strip_prefix("/*") else {
        return (None, None);
    };
    match text.find("*/") {
        Some(end) => (non_empty(&text[..end]), None),
        None => (non_empty(text), Some(remainder.trim_start().to_string())),
    }
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;
