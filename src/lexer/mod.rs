//! Lightweight lexical pass over C/C++ sources.
//!
//! Recognizes block comments, `//` comments and preprocessor directives.
//! There is no grammar parsing and no macro evaluation: `#ifndef`/`#endif`
//! are plain textual markers here.

mod directive;
mod types;

pub use directive::{ParsedDirective, parse_directive};
pub use types::{CommentBlock, Directive, DirectiveKind, IncludeStyle, LexItem, LineKind};

use crate::source::SourceFile;

/// Lexical view of one file: ordered items plus a per-line classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    items: Vec<LexItem>,
    lines: Vec<LineKind>,
}

impl ScanResult {
    /// Items ordered by starting line.
    #[must_use]
    pub fn items(&self) -> &[LexItem] {
        &self.items
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Kind of the given 1-indexed line.
    #[must_use]
    pub fn line_kind(&self, line: usize) -> Option<LineKind> {
        line.checked_sub(1).and_then(|idx| self.lines.get(idx)).copied()
    }

    pub fn comments(&self) -> impl Iterator<Item = &CommentBlock> {
        self.items.iter().filter_map(|item| match item {
            LexItem::Comment(c) => Some(c),
            LexItem::Directive(_) => None,
        })
    }

    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.items.iter().filter_map(|item| match item {
            LexItem::Directive(d) => Some(d),
            LexItem::Comment(_) => None,
        })
    }

    pub fn includes(&self) -> impl Iterator<Item = &Directive> {
        self.directives()
            .filter(|d| d.kind == DirectiveKind::Include)
    }

    #[must_use]
    pub fn directive_at(&self, line: usize) -> Option<&Directive> {
        self.directives().find(|d| d.line == line)
    }

    #[must_use]
    pub fn comment_starting_at(&self, line: usize) -> Option<&CommentBlock> {
        self.comments().find(|c| c.start_line == line)
    }

    #[must_use]
    pub fn first_non_blank_line(&self) -> Option<usize> {
        self.lines
            .iter()
            .position(|k| *k != LineKind::Blank)
            .map(|idx| idx + 1)
    }

    /// First line that is neither blank nor comment-only.
    #[must_use]
    pub fn first_significant_line(&self) -> Option<usize> {
        self.lines
            .iter()
            .position(|k| k.is_significant())
            .map(|idx| idx + 1)
    }

    /// Last line that is neither blank nor comment-only.
    #[must_use]
    pub fn last_significant_line(&self) -> Option<usize> {
        self.lines
            .iter()
            .rposition(|k| k.is_significant())
            .map(|idx| idx + 1)
    }
}

/// Lex a source file. Never fails: undecodable input is rejected earlier,
/// when the `SourceFile` is built.
#[must_use]
pub fn scan(file: &SourceFile) -> ScanResult {
    let mut lexer = Lexer::default();
    for (idx, line) in file.lines().enumerate() {
        let mut line = line.strip_suffix('\r').unwrap_or(line);
        if idx == 0 {
            line = line.strip_prefix('\u{FEFF}').unwrap_or(line);
        }
        lexer.line(idx + 1, line);
    }
    lexer.finish()
}

struct OpenComment {
    start_line: usize,
    text: String,
}

#[derive(Default)]
struct Lexer {
    items: Vec<LexItem>,
    lines: Vec<LineKind>,
    open: Option<OpenComment>,
}

impl Lexer {
    fn line(&mut self, line_no: usize, line: &str) {
        let kind = if self.open.is_some() {
            self.continue_comment(line_no, line)
        } else if let Some(parsed) = parse_directive(line_no, line) {
            self.items.push(LexItem::Directive(parsed.directive));
            if let Some(text) = parsed.open_comment {
                self.open = Some(OpenComment {
                    start_line: line_no,
                    text,
                });
            }
            LineKind::Directive
        } else {
            self.segment(line_no, line, false)
        };
        self.lines.push(kind);
    }

    fn continue_comment(&mut self, line_no: usize, line: &str) -> LineKind {
        let Some(open) = self.open.as_mut() else {
            return self.segment(line_no, line, false);
        };
        open.text.push('\n');
        match line.find("*/") {
            None => {
                open.text.push_str(line);
                LineKind::BlockComment
            }
            Some(end) => {
                let stop = end + 2;
                open.text.push_str(&line[..stop]);
                self.close(line_no);
                self.segment(line_no, &line[stop..], true)
            }
        }
    }

    /// Classify the code part of a line, recording any comments it opens.
    fn segment(&mut self, line_no: usize, text: &str, after_comment: bool) -> LineKind {
        let bytes = text.as_bytes();
        let mut comment = after_comment.then_some(LineKind::BlockComment);
        let mut code = false;
        let mut quote: Option<u8> = None;
        let mut i = 0;

        while i < bytes.len() {
            let c = bytes[i];
            if let Some(q) = quote {
                if c == b'\\' {
                    i += 2;
                    continue;
                }
                if c == q {
                    quote = None;
                }
                i += 1;
                continue;
            }
            match (c, bytes.get(i + 1).copied()) {
                (b'/', Some(b'/')) => {
                    comment.get_or_insert(LineKind::LineComment);
                    break;
                }
                (b'/', Some(b'*')) => {
                    comment.get_or_insert(LineKind::BlockComment);
                    match self.block_comment(line_no, text, i) {
                        Some(stop) => i = stop,
                        None => break,
                    }
                    continue;
                }
                (b'\'', _) if is_digit_separator(bytes, i) => code = true,
                (b'"' | b'\'', _) => {
                    quote = Some(c);
                    code = true;
                }
                _ if c.is_ascii_whitespace() => {}
                _ => code = true,
            }
            i += 1;
        }

        if code {
            LineKind::Code
        } else {
            comment.unwrap_or(LineKind::Blank)
        }
    }

    /// Handle a `/*` at byte `start`. Returns the byte after `*/` when the
    /// comment closes on this line, otherwise leaves it open.
    fn block_comment(&mut self, line_no: usize, text: &str, start: usize) -> Option<usize> {
        let body = start + 2;
        if let Some(end) = text[body..].find("*/") {
            let stop = body + end + 2;
            self.items.push(LexItem::Comment(CommentBlock {
                start_line: line_no,
                end_line: line_no,
                text: text[start..stop].to_string(),
            }));
            Some(stop)
        } else {
            self.open = Some(OpenComment {
                start_line: line_no,
                text: text[start..].to_string(),
            });
            None
        }
    }

    fn close(&mut self, end_line: usize) {
        if let Some(open) = self.open.take() {
            self.items.push(LexItem::Comment(CommentBlock {
                start_line: open.start_line,
                end_line,
                text: open.text,
            }));
        }
    }

    fn finish(mut self) -> ScanResult {
        // An unterminated comment runs to end of file.
        let last = self.lines.len();
        self.close(last);
        ScanResult {
            items: self.items,
            lines: self.lines,
        }
    }
}

/// A `'` inside a number such as `1'000` or `0xFF'FF`, as opposed to the
/// start of a character literal (`'a'`, `L'a'`, `u8'a'`).
fn is_digit_separator(bytes: &[u8], quote: usize) -> bool {
    let start = bytes[..quote]
        .iter()
        .rposition(|b| !(b.is_ascii_alphanumeric() || matches!(b, b'_' | b'\'' | b'.')))
        .map_or(0, |idx| idx + 1);
    start < quote && bytes[start].is_ascii_digit()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
