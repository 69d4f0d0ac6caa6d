//! Generated declaration file.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::Result;

/// Result of a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    /// File was written.
    Written,
    /// File already had identical content, nothing written.
    Unchanged,
}

/// The declaration file produced by a generation run.
///
/// The artifact is always regenerated in full, so there is no stub-style
/// keep-if-exists mode; the only skip is when the on-disk content already
/// matches, which keeps file timestamps stable across no-op runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationsFile {
    file_name: String,
    content: String,
}

impl DeclarationsFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Path of the file under the output directory.
    pub fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    /// The rendered content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file under `base`, creating parent directories as needed.
    pub fn write(&self, base: &Path) -> Result<WriteStatus> {
        let path = self.path(base);
        if let Ok(existing) = fs::read_to_string(&path) {
            if existing == self.content {
                return Ok(WriteStatus::Unchanged);
            }
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &self.content)?;
        Ok(WriteStatus::Written)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let file = DeclarationsFile::new("domain.d.ts", "namespace a {\n}\n");

        let status = file.write(temp.path()).unwrap();

        assert_eq!(status, WriteStatus::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("domain.d.ts")).unwrap(),
            "namespace a {\n}\n"
        );
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let file = DeclarationsFile::new("types/domain.d.ts", "x");

        file.write(temp.path()).unwrap();

        assert!(temp.path().join("types").join("domain.d.ts").exists());
    }

    #[test]
    fn test_write_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        let file = DeclarationsFile::new("domain.d.ts", "same");

        assert_eq!(file.write(temp.path()).unwrap(), WriteStatus::Written);
        assert_eq!(file.write(temp.path()).unwrap(), WriteStatus::Unchanged);
    }

    #[test]
    fn test_write_replaces_changed_content() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("domain.d.ts"), "old").unwrap();

        let file = DeclarationsFile::new("domain.d.ts", "new");
        let status = file.write(temp.path()).unwrap();

        assert_eq!(status, WriteStatus::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("domain.d.ts")).unwrap(),
            "new"
        );
    }
}
