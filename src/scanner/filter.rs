use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{CodingStyleError, Result};

pub trait FileFilter {
    /// Whether a file found while walking a directory is verified.
    fn should_include(&self, path: &Path) -> bool;

    /// Whether a file named on the command line is verified. Named files
    /// skip the extension check.
    fn accepts_named(&self, _path: &Path) -> bool {
        true
    }
}

/// Accepts sources by extension unless an exclude pattern matches.
///
/// Extensions compare case-insensitively and may be given with or without
/// the leading dot. Exclude patterns see the path without `./` segments, so
/// `build/**` also matches files found by walking `.`.
pub struct GlobFilter {
    extensions: Vec<String>,
    exclude_patterns: GlobSet,
}

impl GlobFilter {
    /// Create a new filter with the given extensions and exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| CodingStyleError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| CodingStyleError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        let extensions = extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
            .collect();

        Ok(Self {
            extensions,
            exclude_patterns,
        })
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        !self.exclude_patterns.is_empty() && self.exclude_patterns.is_match(without_cur_dir(path))
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path)
    }

    fn accepts_named(&self, path: &Path) -> bool {
        !self.is_excluded(path)
    }
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
