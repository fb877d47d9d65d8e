use super::*;
use crate::rules::test_fixtures::run_rule;

fn check(rule: &IncludeOrderRule, text: &str) -> Vec<Diagnostic> {
    run_rule(rule, "SrcLib/abc/fwA/src/fwA/Aa.cpp", text, false)
}

fn default_rule() -> IncludeOrderRule {
    IncludeOrderRule::from_config(&IncludeOrderConfig::default())
}

fn lines(diags: &[Diagnostic]) -> Vec<usize> {
    let mut lines: Vec<usize> = diags.iter().map(|d| d.line).collect();
    lines.sort_unstable();
    lines
}

#[test]
fn sorted_local_then_system_passes() {
    let text = "#include \"fwA/Aa.hpp\"\n\n#include <fwB/Ba.hpp>\n#include <fwB/Bb.hpp>\n#include <iostream>\n";

    assert!(check(&default_rule(), text).is_empty());
}

#[test]
fn no_includes_passes() {
    assert!(check(&default_rule(), "int main() { return 0; }\n").is_empty());
}

#[test]
fn single_style_passes_under_local_first() {
    let text = "#include <a.hpp>\n#include <b.hpp>\n";

    assert!(check(&default_rule(), text).is_empty());
}

#[test]
fn unsorted_pair_cites_both_lines() {
    let text = "#include <iostream>\n#include <fwB/Bb.hpp>\n";
    let diags = check(&default_rule(), text);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].line, 2);
    assert_eq!(
        diags[0].message,
        "include <fwB/Bb.hpp> (line 2) should come before <iostream> (line 1)"
    );
}

#[test]
fn each_inversion_is_reported() {
    let text = "#include <c.hpp>\n#include <b.hpp>\n#include <a.hpp>\n";

    assert_eq!(lines(&check(&default_rule(), text)), vec![2, 3]);
}

#[test]
fn sort_includes_fixture_order() {
    let text = "\
#include <iostream>

#include <fwB/Bb.hpp>

#include <fwC/Ca.hpp>

#include \"fwA/Aa.hpp\"

#include <fwB/Ba.hpp>
";
    let diags = check(&default_rule(), text);

    assert_eq!(lines(&diags), vec![3, 7, 9]);
    assert!(diags.iter().any(|d| d.message.contains("must come before system")));
    assert!(diags.iter().any(|d| d.message.contains("separated from")));
}

#[test]
fn system_first_flags_leading_local() {
    let rule = IncludeOrderRule::new(IncludeGrouping::SystemFirst, true, true);
    let text = "#include \"a.hpp\"\n#include <vector>\n";
    let diags = check(&rule, text);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].line, 2);
    assert_eq!(diags[0].message, "system include <vector> must come before local includes");
}

#[test]
fn no_mixing_allows_either_order() {
    let rule = IncludeOrderRule::new(IncludeGrouping::NoMixing, true, true);

    assert!(check(&rule, "#include <vector>\n#include \"a.hpp\"\n").is_empty());
    assert!(check(&rule, "#include \"a.hpp\"\n#include <vector>\n").is_empty());
}

#[test]
fn no_mixing_flags_interleaving() {
    let rule = IncludeOrderRule::new(IncludeGrouping::NoMixing, true, true);
    let text = "#include \"a.hpp\"\n#include <vector>\n#include \"b.hpp\"\n";
    let diags = check(&rule, text);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].line, 3);
}

#[test]
fn any_grouping_only_checks_order_within_runs() {
    let rule = IncludeOrderRule::new(IncludeGrouping::Any, true, true);
    let text = "#include <b.hpp>\n#include \"z.hpp\"\n#include <a.hpp>\n";

    assert!(check(&rule, text).is_empty());
}

#[test]
fn alphabetical_can_be_disabled() {
    let rule = IncludeOrderRule::new(IncludeGrouping::LocalFirst, false, true);

    assert!(check(&rule, "#include <b.hpp>\n#include <a.hpp>\n").is_empty());
}

#[test]
fn case_sensitivity() {
    let text = "#include <a.hpp>\n#include <B.hpp>\n";

    assert_eq!(check(&default_rule(), text).len(), 1);

    let rule = IncludeOrderRule::new(IncludeGrouping::LocalFirst, true, false);
    assert!(check(&rule, text).is_empty());
}

#[test]
fn commented_out_includes_are_ignored() {
    let text = "#include <a.hpp>\n// #include <0.hpp>\n/*\n#include <0.hpp>\n*/\n#include <b.hpp>\n";

    assert!(check(&default_rule(), text).is_empty());
}

#[test]
fn blank_lines_do_not_split_runs() {
    let text = "#include <b.hpp>\n\n#include <a.hpp>\n";

    assert_eq!(lines(&check(&default_rule(), text)), vec![3]);
}

#[test]
fn malformed_include_is_skipped() {
    let text = "#include <a.hpp>\n#include MACRO_HEADER\n#include <b.hpp>\n";

    assert!(check(&default_rule(), text).is_empty());
}
