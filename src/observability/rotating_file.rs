//! Append-only line file with size-based rotation.
//!
//! Once the live file reaches [`RotationPolicy::max_bytes`] it is renamed to
//! `<name>.<timestamp>` and a fresh file is started. Only the newest
//! [`RotationPolicy::max_backups`] backups are kept. Timestamps are
//! fixed-width UTC, so backups sort by name in creation order.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Backup suffix format: sortable, filesystem-safe.
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%.9fZ";

/// When to rotate and how much history to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MiB per file, 3 backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe rotating line writer.
///
/// The file is opened lazily on the first write, so construction never
/// touches the filesystem.
pub struct RotatingFile {
    path: PathBuf,
    policy: RotationPolicy,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    #[must_use]
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            handle: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Fails if rotation, opening, writing or flushing fails, or if a
    /// previous writer panicked while holding the lock.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        if self.is_full() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };
        writeln!(file, "{line}")?;
        file.flush()
    }

    /// Existing backups, oldest first.
    ///
    /// # Errors
    ///
    /// Fails if the parent directory cannot be read.
    pub fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let prefix = format!("{}.", self.file_name());
        let mut backups: Vec<PathBuf> = fs::read_dir(self.parent())?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();
        backups.sort();
        Ok(backups)
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() >= self.policy.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut backup = self.parent().join(format!("{}.{stamp}", self.file_name()));
        let mut attempt = 1;
        while backup.exists() {
            backup = self.parent().join(format!("{}.{stamp}-{attempt}", self.file_name()));
            attempt += 1;
        }

        fs::rename(&self.path, &backup)?;

        let backups = self.backups()?;
        let excess = backups.len().saturating_sub(self.policy.max_backups);
        for old in &backups[..excess] {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }

    fn parent(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny(dir: &Path, max_backups: usize) -> RotatingFile {
        RotatingFile::new(
            dir.join("trace.json"),
            RotationPolicy {
                max_bytes: 16,
                max_backups,
            },
        )
    }

    #[test]
    fn lines_are_appended() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = RotatingFile::new(dir.path().join("trace.json"), RotationPolicy::default());
        file.append_line("one").expect("write");
        file.append_line("two").expect("write");

        let contents = fs::read_to_string(file.path()).expect("read");
        assert_eq!(contents, "one\ntwo\n");
        assert!(file.backups().expect("list").is_empty());
    }

    #[test]
    fn full_file_is_rotated_before_writing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = tiny(dir.path(), 3);
        file.append_line("0123456789abcdef").expect("write");
        file.append_line("next").expect("write");

        assert_eq!(fs::read_to_string(file.path()).expect("read"), "next\n");
        let backups = file.backups().expect("list");
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).expect("read"), "0123456789abcdef\n");
    }

    #[test]
    fn only_newest_backups_are_kept() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = tiny(dir.path(), 2);
        for i in 0..6 {
            file.append_line(&format!("line number {i:04}")).expect("write");
        }

        let backups = file.backups().expect("list");
        assert_eq!(backups.len(), 2);
        let newest = fs::read_to_string(backups.last().expect("backup")).expect("read");
        assert_eq!(newest, "line number 0004\n");
        assert_eq!(fs::read_to_string(file.path()).expect("read"), "line number 0005\n");
    }

    #[test]
    fn unrelated_files_are_not_backups() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("trace.jsonl"), "x").expect("write");
        fs::write(dir.path().join("other.json.1"), "x").expect("write");
        let file = tiny(dir.path(), 3);
        assert!(file.backups().expect("list").is_empty());
    }
}
