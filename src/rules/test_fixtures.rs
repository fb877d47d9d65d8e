//! Shared helpers for rule tests.

use crate::diagnostic::Diagnostic;
use crate::lexer::scan;
use crate::source::SourceFile;

use super::{Rule, RuleContext};

/// The FW4SPL banner with a concrete year range.
pub const LICENSE: &str = "/* ***** BEGIN LICENSE BLOCK *****
 * FW4SPL - Copyright (C) IRCAD, 2009-2999.
 * Distributed under the terms of the GNU Lesser General Public License (LGPL) as
 * published by the Free Software Foundation.
 * ****** END LICENSE BLOCK ****** */";

/// Scan `text` as `path` and run a single rule over it.
pub fn run_rule(rule: &dyn Rule, path: &str, text: &str, is_header: bool) -> Vec<Diagnostic> {
    let file = SourceFile::new(path, text);
    let result = scan(&file);
    let ctx = RuleContext {
        file: &file,
        is_header,
    };
    if rule.applies_to(&ctx) {
        rule.evaluate(&result, &ctx)
    } else {
        Vec::new()
    }
}
