use std::path::Path;

use super::*;

fn diag(path: &str, line: usize, severity: Severity) -> Diagnostic {
    Diagnostic::new(Path::new(path), line, "test-rule", severity, "message")
}

#[test]
fn severity_orders_warning_below_error() {
    assert!(Severity::Warning < Severity::Error);
    assert_eq!(Severity::default(), Severity::Error);
}

#[test]
fn severity_from_str() {
    assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
    assert_eq!("WARNING".parse::<Severity>(), Ok(Severity::Warning));
    assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
    assert!("info".parse::<Severity>().is_err());
}

#[test]
fn display_includes_location_rule_and_message() {
    let d = Diagnostic::error(Path::new("a/b.hpp"), 3, "header-guard", "missing header guard");

    assert_eq!(
        d.to_string(),
        "a/b.hpp:3: error [header-guard] missing header guard"
    );
}

#[test]
fn display_includes_column_when_present() {
    let d = Diagnostic::warning(Path::new("x.cpp"), 7, "forbidden-token", "TAB").with_column(5);

    assert_eq!(d.to_string(), "x.cpp:7:5: warning [forbidden-token] TAB");
}

#[test]
fn empty_result_passes() {
    let result = VerificationResult::new(Vec::new(), 4, Severity::Error);

    assert!(result.passed());
    assert_eq!(result.files_checked(), 4);
    assert_eq!(result.files_with_diagnostics(), 0);
}

#[test]
fn warnings_pass_with_error_threshold() {
    let result = VerificationResult::new(vec![diag("a", 1, Severity::Warning)], 1, Severity::Error);

    assert!(result.passed());
    assert_eq!(result.warning_count(), 1);
    assert_eq!(result.error_count(), 0);
}

#[test]
fn warnings_fail_with_warning_threshold() {
    let result =
        VerificationResult::new(vec![diag("a", 1, Severity::Warning)], 1, Severity::Warning);

    assert!(!result.passed());
}

#[test]
fn any_error_fails() {
    let result = VerificationResult::new(
        vec![diag("a", 1, Severity::Warning), diag("b", 2, Severity::Error)],
        2,
        Severity::Error,
    );

    assert!(!result.passed());
    assert_eq!(result.files_with_diagnostics(), 2);
}

#[test]
fn diagnostic_serializes_without_empty_column() {
    let json = serde_json::to_value(diag("a.hpp", 1, Severity::Error)).unwrap();

    assert_eq!(json["rule_id"], "test-rule");
    assert_eq!(json["severity"], "error");
    assert!(json.get("column").is_none());
}
