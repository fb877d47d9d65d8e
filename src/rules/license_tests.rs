use super::*;
use crate::config::DEFAULT_LICENSE_TEMPLATE;
use crate::rules::test_fixtures::{LICENSE, run_rule};

fn default_rule() -> LicenseHeaderRule {
    LicenseHeaderRule::new(DEFAULT_LICENSE_TEMPLATE).unwrap()
}

fn check(rule: &LicenseHeaderRule, text: &str) -> Vec<Diagnostic> {
    run_rule(rule, "SrcLib/abc/fwA/src/fwA/Aa.cpp", text, false)
}

#[test]
fn matching_banner_passes() {
    let text = format!("{LICENSE}\n\n#include <iostream>\n");

    assert!(check(&default_rule(), &text).is_empty());
}

#[test]
fn any_year_range_matches_placeholder() {
    let text = LICENSE.replace("2009-2999", "1998-2003");

    assert!(check(&default_rule(), &text).is_empty());
}

#[test]
fn file_with_only_license_passes() {
    assert!(check(&default_rule(), LICENSE).is_empty());
}

#[test]
fn leading_blank_lines_are_allowed() {
    let text = format!("\n\n{LICENSE}\nint x;\n");

    assert!(check(&default_rule(), &text).is_empty());
}

#[test]
fn whitespace_differences_are_normalized() {
    let text = LICENSE.replace(" * FW4SPL -", "   *   FW4SPL   -");

    assert!(check(&default_rule(), &text).is_empty());
}

#[test]
fn empty_file_is_missing_license() {
    let diags = check(&default_rule(), "");

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].line, 1);
    assert_eq!(diags[0].rule_id, "license-header");
    assert_eq!(diags[0].severity, crate::diagnostic::Severity::Error);
    assert_eq!(diags[0].message, "missing license header");
}

#[test]
fn code_first_is_missing_license() {
    let diags = check(&default_rule(), "#include <iostream>\n");

    assert_eq!(diags.len(), 1);
    assert!(diags[0].message.starts_with("missing license header"));
}

#[test]
fn line_comment_is_wrong_style() {
    let diags = check(&default_rule(), "// Copyright IRCAD\nint x;\n");

    assert_eq!(diags.len(), 1);
    assert!(diags[0].message.contains("block comment"));
}

#[test]
fn reports_first_differing_line() {
    let text = LICENSE.replace("Lesser General Public", "General Public");
    let diags = check(&default_rule(), &text);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].line, 1);
    assert!(diags[0].message.contains("differs at line 3"));
    assert!(diags[0].message.contains("found '* Distributed under the terms of the GNU General Public"));
}

#[test]
fn truncated_banner_is_reported() {
    let text = "/* ***** BEGIN LICENSE BLOCK *****\n * FW4SPL - Copyright (C) IRCAD, 2009-2999. */\n";
    let diags = check(&default_rule(), text);

    assert_eq!(diags.len(), 1);
    assert!(diags[0].message.contains("differs at line 2"));
}

#[test]
fn extra_text_in_banner_is_reported() {
    let rule = LicenseHeaderRule::new("/* short\n */").unwrap();
    let diags = check(&rule, "/* short\n */\n");
    assert!(diags.is_empty());

    let rule = LicenseHeaderRule::new("/* short */").unwrap();
    let diags = check(&rule, "/* short\n more */\n");
    assert_eq!(diags.len(), 1);
}

#[test]
fn non_year_in_placeholder_fails() {
    let text = LICENSE.replace("2009-2999", "2009-now");

    assert_eq!(check(&default_rule(), &text).len(), 1);
}

#[test]
fn current_year_must_be_mentioned() {
    let rule = default_rule().with_current_year(Some(2999)).unwrap();
    assert!(check(&rule, LICENSE).is_empty());

    let stale = LICENSE.replace("2009-2999", "2009-2000");
    let diags = check(&rule, &stale);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].message.contains("'2009-2000'"));
    assert!(diags[0].message.contains("2999"));
}

#[test]
fn current_year_inside_stale_range_fails() {
    let rule = default_rule().with_current_year(Some(2015)).unwrap();
    let stale = LICENSE.replace("2009-2999", "2009-2018");

    let diags = check(&rule, &stale);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].message.contains("'2009-2018'"));
}

#[test]
fn current_year_as_start_of_range_passes() {
    let rule = default_rule().with_current_year(Some(2009)).unwrap();

    assert!(check(&rule, LICENSE).is_empty());
}

#[test]
fn current_year_requires_placeholder() {
    let result = LicenseHeaderRule::new("/* no year */")
        .unwrap()
        .with_current_year(Some(2024));

    assert!(matches!(
        result,
        Err(ConfigError::InvalidParameter {
            rule: "license-header",
            ..
        })
    ));
}

#[test]
fn empty_template_is_rejected() {
    assert!(LicenseHeaderRule::new("   \n").is_err());
}

#[test]
fn non_comment_template_is_rejected() {
    assert!(LicenseHeaderRule::new("Copyright {YEAR}").is_err());
}

#[test]
fn regex_metacharacters_in_template_are_literal() {
    let rule = LicenseHeaderRule::new("/* (C) [x] {YEAR}. */").unwrap();

    assert!(check(&rule, "/* (C) [x] 2020. */\n").is_empty());
    assert_eq!(check(&rule, "/* (C) x 2020. */\n").len(), 1);
}
