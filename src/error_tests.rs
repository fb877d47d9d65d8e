use std::path::PathBuf;

use super::*;

#[test]
fn config_error_wraps_into_crate_error() {
    let err: CodingStyleError = ConfigError::UnknownRule("tabs".to_string()).into();

    assert!(matches!(err, CodingStyleError::Config(_)));
    assert_eq!(err.to_string(), "Configuration error: unknown rule 'tabs'");
}

#[test]
fn invalid_parameter_names_the_rule() {
    let err = ConfigError::InvalidParameter {
        rule: "license-header",
        reason: "template is empty".to_string(),
    };

    assert_eq!(err.to_string(), "rule 'license-header': template is empty");
}

#[test]
fn file_read_error_keeps_source() {
    let err = CodingStyleError::FileRead {
        path: PathBuf::from("src/missing.cpp"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };

    assert!(err.to_string().contains("src/missing.cpp"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn scan_error_messages() {
    assert_eq!(
        ScanError::InvalidEncoding { offset: 12 }.to_string(),
        "file is not valid UTF-8 (invalid byte sequence at offset 12)"
    );
    assert!(ScanError::BinaryContent.to_string().contains("binary"));
}

#[test]
fn toml_error_converts() {
    let parse: std::result::Result<toml::Value, _> = toml::from_str("[rules\n");
    let err: CodingStyleError = parse.unwrap_err().into();

    assert!(matches!(err, CodingStyleError::TomlParse(_)));
}
