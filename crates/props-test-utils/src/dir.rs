//! [`PropsDir`] builder for build-tree test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary build-tree directory with helper methods for laying out
/// project directories and properties files.
///
/// # Example
///
/// ```rust,no_run
/// use props_test_utils::PropsDir;
///
/// let tree = PropsDir::new();
/// tree.subdir("app");
/// tree.write_properties("gradle.properties", &[("foo", "bar")]);
/// ```
pub struct PropsDir {
    temp_dir: TempDir,
}

impl Default for PropsDir {
    fn default() -> Self {
        Self::new()
    }
}

impl PropsDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create (if needed) and return a subdirectory of the root.
    pub fn subdir(&self, rel: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Write a flat `key=value` properties file at `rel` (relative to the
    /// root, parent directories created as needed) and return its path.
    pub fn write_properties(&self, rel: &str, entries: &[(&str, &str)]) -> PathBuf {
        let content = entries
            .iter()
            .map(|(k, v)| format!("{k}={v}\n"))
            .collect::<String>();
        self.write_raw(rel, &content)
    }

    /// Write raw file content at `rel` (relative to the root) and return the
    /// path.
    pub fn write_raw(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}
