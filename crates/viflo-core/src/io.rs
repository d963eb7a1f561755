use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

// ---------------------------------------------------------------------------
// WriteOutcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteStatus {
    Created,
    Updated,
    Skipped,
}

impl WriteStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WriteStatus::Created => "created",
            WriteStatus::Updated => "updated",
            WriteStatus::Skipped => "skipped",
        }
    }

    pub fn written(self) -> bool {
        !matches!(self, WriteStatus::Skipped)
    }
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single-file operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteOutcome {
    pub status: WriteStatus,
    pub path: PathBuf,
}

impl WriteOutcome {
    pub fn new(status: WriteStatus, path: impl Into<PathBuf>) -> Self {
        Self {
            status,
            path: path.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Prevents partial writes from corrupting user files.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Read a file as UTF-8, treating "not found" as `None`.
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Read raw bytes, treating "not found" as `None`.
pub fn read_optional_bytes(path: &Path) -> Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Write `content` to `path` only if it differs from what is on disk.
///
/// The sole gate through which bytes reach disk. Callers hand over the full
/// prospective body; there are no partial writes.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteOutcome> {
    let existing = read_optional_bytes(path)?;

    if existing.as_deref() == Some(content.as_bytes()) {
        return Ok(WriteOutcome::new(WriteStatus::Skipped, path));
    }

    atomic_write(path, content.as_bytes())?;
    let status = if existing.is_none() {
        WriteStatus::Created
    } else {
        WriteStatus::Updated
    };
    Ok(WriteOutcome::new(status, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/c/test.md");
        atomic_write(&path, b"data").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "data");
    }

    #[test]
    fn write_if_changed_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/file.txt");
        let outcome = write_if_changed(&path, "hello\n").unwrap();
        assert_eq!(outcome, WriteOutcome::new(WriteStatus::Created, &path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn write_if_changed_skips_identical_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.txt");
        std::fs::write(&path, "same").unwrap();
        let before = std::fs::metadata(&path).unwrap().modified().unwrap();

        let outcome = write_if_changed(&path, "same").unwrap();
        assert_eq!(outcome.status, WriteStatus::Skipped);
        assert!(!outcome.status.written());
        let after = std::fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn write_if_changed_updates_different_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.txt");
        std::fs::write(&path, "old").unwrap();
        let outcome = write_if_changed(&path, "new").unwrap();
        assert_eq!(outcome.status, WriteStatus::Updated);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn write_if_changed_propagates_non_missing_read_errors() {
        let dir = TempDir::new().unwrap();
        // A directory where a file is expected cannot be read as a file.
        let path = dir.path().join("occupied");
        std::fs::create_dir(&path).unwrap();
        assert!(write_if_changed(&path, "x").is_err());
    }

    #[test]
    fn read_optional_missing_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_optional(&dir.path().join("nope")).unwrap(), None);
    }

    #[test]
    fn read_optional_bytes_keeps_non_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("raw.bin");
        std::fs::write(&path, b"\xff\xfe").unwrap();
        assert_eq!(read_optional_bytes(&path).unwrap(), Some(vec![0xff, 0xfe]));
        assert_eq!(read_optional_bytes(&dir.path().join("nope")).unwrap(), None);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&WriteStatus::Skipped).unwrap();
        assert_eq!(json, "\"skipped\"");
    }
}
