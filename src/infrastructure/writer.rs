//! Output file writer
//!
//! Atomic mode writes to a temp file in the destination directory and
//! renames it over the target, so a crashed run never leaves a truncated
//! header behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{EmbedError, EmbedResult};

/// How output files are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// tempfile + rename
    #[default]
    Atomic,
    /// Truncate and write the target directly
    InPlace,
}

/// Writes generated files to disk
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputWriter {
    mode: WriteMode,
}

impl OutputWriter {
    pub fn new(mode: WriteMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    /// Create or overwrite `path` with `content`.
    pub fn write(&self, path: &Path, content: &[u8]) -> EmbedResult<()> {
        match self.mode {
            WriteMode::Atomic => atomic_write(path, content),
            WriteMode::InPlace => {
                fs::write(path, content).map_err(|e| EmbedError::path_io("failed to write", path, e))
            }
        }
    }
}

/// Write content to a file atomically
///
/// The temp file lives next to the target so the final rename never
/// crosses a filesystem.
pub fn atomic_write(path: &Path, content: &[u8]) -> EmbedResult<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| EmbedError::path_io("failed to create temp file in", dir, e))?;
    if let Err(e) = tmp.write_all(content).and_then(|()| tmp.flush()) {
        return Err(EmbedError::path_io("failed to write", tmp.path(), e));
    }

    // NamedTempFile is created 0600; generated sources should be world-readable.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(|e| EmbedError::path_io("failed to set permissions on", path, e))?;
    }

    tmp.persist(path)
        .map_err(|e| EmbedError::path_io("failed to write", path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn atomic_write_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("asset_a_cbor.h");

        atomic_write(&path, b"#pragma once\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "#pragma once\n");
    }

    #[test]
    fn atomic_write_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("asset_a_cbor.h");

        fs::write(&path, "Original").unwrap();
        atomic_write(&path, b"Replaced").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Replaced");
    }

    #[test]
    fn atomic_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        atomic_write(&dir.path().join("x.h"), b"x").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("x.h")]);
    }

    #[cfg(unix)]
    #[test]
    fn atomic_write_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let path = dir.path().join("x.h");
        atomic_write(&path, b"x").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("x.h");

        for mode in [WriteMode::Atomic, WriteMode::InPlace] {
            let err = OutputWriter::new(mode).write(&path, b"x").unwrap_err();
            assert_eq!(err.code(), "io");
        }
    }

    #[test]
    fn in_place_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x.h");
        let writer = OutputWriter::new(WriteMode::InPlace);

        writer.write(&path, b"one").unwrap();
        writer.write(&path, b"two").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "two");
        assert_eq!(writer.mode(), WriteMode::InPlace);
    }
}
