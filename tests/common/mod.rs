#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the codingstyle-guard binary.
#[macro_export]
macro_rules! codingstyle_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("codingstyle-guard"))
    };
}

/// Root of a checked-in source tree under `tests/fixtures/Codingstyle`.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("Codingstyle")
        .join(name)
}

/// Banner accepted by the default license template.
pub const LICENSE: &str = "/* ***** BEGIN LICENSE BLOCK *****
 * FW4SPL - Copyright (C) IRCAD, 2009-2999.
 * Distributed under the terms of the GNU Lesser General Public License (LGPL) as
 * published by the Free Software Foundation.
 * ****** END LICENSE BLOCK ****** */
";

/// Creates a temporary directory with source files for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.codingstyle-guard.toml` at the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".codingstyle-guard.toml", content);
    }

    /// A header with the license banner and the guard derived from its path.
    pub fn create_header(&self, relative_path: &str, guard: &str) {
        let content =
            format!("{LICENSE}\n#ifndef {guard}\n#define {guard}\n\nint value();\n\n#endif // {guard}\n");
        self.create_file(relative_path, &content);
    }

    /// A source file with the license banner followed by `body`.
    pub fn create_source(&self, relative_path: &str, body: &str) {
        self.create_file(relative_path, &format!("{LICENSE}\n{body}"));
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
