/// Classification of a single source line after lexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// Only block-comment text (`/* ... */`) on this line.
    BlockComment,
    /// Only a `//` comment on this line.
    LineComment,
    Directive,
    Code,
}

impl LineKind {
    #[must_use]
    pub const fn is_comment(self) -> bool {
        matches!(self, Self::BlockComment | Self::LineComment)
    }

    /// Blank and comment-only lines carry no code.
    #[must_use]
    pub const fn is_significant(self) -> bool {
        matches!(self, Self::Directive | Self::Code)
    }
}

/// A `/* ... */` comment, possibly spanning several lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    pub start_line: usize,
    pub end_line: usize,
    /// Exact comment text from `/*` to `*/`, lines joined with `\n`.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveKind {
    Ifndef,
    Define,
    Endif,
    Include,
    Other(String),
}

impl DirectiveKind {
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "ifndef" => Self::Ifndef,
            "define" => Self::Define,
            "endif" => Self::Endif,
            "include" => Self::Include,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Ifndef => "ifndef",
            Self::Define => "define",
            Self::Endif => "endif",
            Self::Include => "include",
            Self::Other(name) => name,
        }
    }
}

/// Delimiter style of an `#include` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludeStyle {
    /// `#include "path"`
    Local,
    /// `#include <path>`
    System,
}

impl IncludeStyle {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::System => "system",
        }
    }
}

/// A preprocessor directive found at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub line: usize,
    pub kind: DirectiveKind,
    /// For `ifndef`/`define`: the macro name. For `include`: the argument with
    /// its delimiters (`"a.hpp"` or `<a.hpp>`). Otherwise the trimmed body.
    pub argument: String,
    /// Text of a comment following the directive, without its markers.
    pub trailing_comment: Option<String>,
}

impl Directive {
    #[must_use]
    pub fn include_style(&self) -> Option<IncludeStyle> {
        if self.kind != DirectiveKind::Include {
            return None;
        }
        let arg = self.argument.as_str();
        if arg.len() < 2 {
            return None;
        }
        if arg.starts_with('"') && arg.ends_with('"') {
            Some(IncludeStyle::Local)
        } else if arg.starts_with('<') && arg.ends_with('>') {
            Some(IncludeStyle::System)
        } else {
            None
        }
    }

    /// The include path without delimiters, if this is a well-formed include.
    #[must_use]
    pub fn include_path(&self) -> Option<&str> {
        self.include_style()
            .map(|_| &self.argument[1..self.argument.len() - 1])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexItem {
    Comment(CommentBlock),
    Directive(Directive),
}

impl LexItem {
    #[must_use]
    pub const fn start_line(&self) -> usize {
        match self {
            Self::Comment(c) => c.start_line,
            Self::Directive(d) => d.line,
        }
    }
}
