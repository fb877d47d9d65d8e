use std::path::Path;

use super::*;

fn cpp_extensions() -> Vec<String> {
    ["cpp", "hpp", "h"].into_iter().map(String::from).collect()
}

#[test]
fn filter_by_extension() {
    let filter = GlobFilter::new(cpp_extensions(), &[]).unwrap();

    assert!(filter.should_include(Path::new("src/fwA/Aa.cpp")));
    assert!(filter.should_include(Path::new("include/fwA/Aa.hpp")));
    assert!(!filter.should_include(Path::new("CMakeLists.txt")));
    assert!(!filter.should_include(Path::new("Makefile")));
}

#[test]
fn extension_match_ignores_case() {
    let filter = GlobFilter::new(cpp_extensions(), &[]).unwrap();

    assert!(filter.should_include(Path::new("legacy/OLD.H")));
}

#[test]
fn extensions_may_carry_a_leading_dot() {
    let filter = GlobFilter::new(vec![".HPP".to_string(), "cxx".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("include/fwA/Aa.hpp")));
    assert!(filter.should_include(Path::new("src/fwA/Aa.cxx")));
    assert!(!filter.should_include(Path::new("src/fwA/Aa.cpp")));
}

#[test]
fn filter_empty_extensions_accepts_all() {
    let filter = GlobFilter::new(vec![], &[]).unwrap();

    assert!(filter.should_include(Path::new("main.cpp")));
    assert!(filter.should_include(Path::new("readme.txt")));
}

#[test]
fn filter_exclude_patterns() {
    let filter = GlobFilter::new(
        cpp_extensions(),
        &["**/build/**".to_string(), "**/thirdparty/**".to_string()],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("src/main.cpp")));
    assert!(!filter.should_include(Path::new("build/gen/moc_Aa.cpp")));
    assert!(!filter.should_include(Path::new("src/thirdparty/zlib/zlib.h")));
    assert!(filter.is_excluded(Path::new("build/notes.txt")));
}

#[test]
fn exclude_ignores_current_dir_segments() {
    let filter = GlobFilter::new(cpp_extensions(), &["build/**".to_string()]).unwrap();

    assert!(!filter.should_include(Path::new("./build/moc_Aa.cpp")));
    assert!(!filter.should_include(Path::new("build/moc_Aa.cpp")));
    assert!(filter.should_include(Path::new("./src/Aa.cpp")));
}

#[test]
fn named_files_skip_extension_but_honor_excludes() {
    let filter = GlobFilter::new(cpp_extensions(), &["**/thirdparty/**".to_string()]).unwrap();

    assert!(filter.accepts_named(Path::new("tools/gen.inl")));
    assert!(!filter.accepts_named(Path::new("src/thirdparty/zlib/zlib.h")));
}

#[test]
fn filter_exclude_specific_files() {
    let filter = GlobFilter::new(cpp_extensions(), &["**/*_generated.hpp".to_string()]).unwrap();

    assert!(filter.should_include(Path::new("include/Aa.hpp")));
    assert!(!filter.should_include(Path::new("include/Aa_generated.hpp")));
}

#[test]
fn filter_invalid_pattern_returns_error() {
    let result = GlobFilter::new(vec![], &["[invalid".to_string()]);

    assert!(matches!(
        result,
        Err(CodingStyleError::InvalidPattern { ref pattern, .. }) if pattern == "[invalid"
    ));
}
