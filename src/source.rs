use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Raw file content handed to the engine by the discovery layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInput {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

impl SourceInput {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Decoded text of one source file. Lines are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
}

impl SourceFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Decode raw bytes into a source file.
    ///
    /// # Errors
    /// Returns `ScanError::BinaryContent` if the bytes contain a NUL, and
    /// `ScanError::InvalidEncoding` if they are not UTF-8.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: &[u8]) -> Result<Self, ScanError> {
        if is_binary(bytes) {
            return Err(ScanError::BinaryContent);
        }
        let text = std::str::from_utf8(bytes).map_err(|e| ScanError::InvalidEncoding {
            offset: e.valid_up_to(),
        })?;
        Ok(Self::new(path, text))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Iterate over lines without their terminators (`\n` or `\r\n`).
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Content with a NUL byte is treated as binary data.
#[must_use]
pub fn is_binary(bytes: &[u8]) -> bool {
    bytes.contains(&0)
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
