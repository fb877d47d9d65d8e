use std::path::Path;

use super::*;

#[test]
fn from_bytes_accepts_utf8() {
    let file = SourceFile::from_bytes("a.hpp", "int x;\n// été\n".as_bytes()).unwrap();

    assert_eq!(file.path(), Path::new("a.hpp"));
    assert_eq!(file.line_count(), 2);
}

#[test]
fn from_bytes_rejects_invalid_utf8() {
    let bytes = b"int x;\n\xff\xfe\n";
    let err = SourceFile::from_bytes("a.cpp", bytes).unwrap_err();

    assert_eq!(err, ScanError::InvalidEncoding { offset: 7 });
}

#[test]
fn from_bytes_rejects_binary() {
    let err = SourceFile::from_bytes("a.cpp", b"abc\0def").unwrap_err();

    assert_eq!(err, ScanError::BinaryContent);
}

#[test]
fn lines_strip_crlf() {
    let file = SourceFile::new("a.cpp", "one\r\ntwo\r\n");
    let lines: Vec<_> = file.lines().collect();

    assert_eq!(lines, vec!["one", "two"]);
}

#[test]
fn empty_file() {
    let file = SourceFile::new("empty.hpp", "");

    assert!(file.is_empty());
    assert_eq!(file.line_count(), 0);
}

#[test]
fn source_input_from_str() {
    let input = SourceInput::new("x.h", "abc");

    assert_eq!(input.content, b"abc".to_vec());
}

#[test]
fn nul_byte_marks_binary() {
    assert!(is_binary(b"\x89PNG\r\n\x1a\n\0\0"));
    assert!(!is_binary(b"int x;\n"));
    assert!(!is_binary(b""));
}
