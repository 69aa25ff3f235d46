//! Rotating file writer with size-based rotation and backup retention.
//!
//! Trace files rotate when they exceed a size threshold and keep a fixed
//! number of timestamped backups, so tracing never grows without bound.

use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Timestamp suffix of rotated files. Sorts lexicographically by time.
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%.3f";

/// Thread-safe rotating file writer.
///
/// When the current file exceeds its size limit it is renamed to
/// `<name>.json.<timestamp>` and a new file is started. Backups beyond the
/// retention limit are deleted, oldest first.
///
/// The file is opened lazily on the first write, so construction never fails.
pub struct FileWriter {
    /// Path to the primary trace file.
    file_path: PathBuf,
    /// Size above which the file is rotated before the next write.
    max_bytes: u64,
    /// Number of rotated files to keep.
    max_backups: usize,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Creates a writer with the default limits (10 MB, 3 backups).
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with explicit rotation limits.
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Writes a single line to the file, rotating first if necessary.
    ///
    /// The line gets a trailing newline and is flushed immediately.
    ///
    /// # Errors
    ///
    /// Fails on rotation, open, write or flush errors, or if the internal
    /// mutex was poisoned by a panicking writer.
    pub fn write_line(&self, json: &str) -> std::io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "No file available"))?;

        writeln!(file, "{json}")?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    /// Drops the open handle and rotates if the file is over the limit.
    fn check_and_rotate(&self, writer: &mut Option<fs::File>) -> std::io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to a timestamped backup and prunes old ones.
    ///
    /// Example backup name: `jetcatalog-otlp.json.20261016T093015.042`
    fn rotate_files(&self) -> std::io::Result<()> {
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT);
        let backup_path = self.file_path.with_extension(format!("json.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Removes backups beyond the retention limit.
    ///
    /// Individual deletion errors are ignored so one stuck file does not stop
    /// the rest of the cleanup.
    fn cleanup_old_backups(&self) -> std::io::Result<()> {
        let mut backups = self.backups()?;
        backups.sort_unstable_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }

    /// Lists rotated files of this writer, in no particular order.
    fn backups(&self) -> std::io::Result<Vec<PathBuf>> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "No parent directory"))?;

        let prefix = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "Invalid file name"))?;

        Ok(fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_backup_of(path, &prefix))
            .collect())
    }
}

fn is_backup_of(path: &Path, prefix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(prefix))
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_lines_and_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_when_over_limit_and_keeps_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::with_limits(path.clone(), 4, 2);

        for i in 0..5 {
            writer.write_line(&format!("line-{i}")).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "line-4\n");

        let mut backups = writer.backups().unwrap();
        backups.sort();
        assert_eq!(backups.len(), 2);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "line-2\n");
        assert_eq!(fs::read_to_string(&backups[1]).unwrap(), "line-3\n");
    }

    #[test]
    fn unrelated_files_are_not_backups() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("trace.jsonl"), "x").unwrap();
        fs::write(dir.path().join("other.json.1"), "x").unwrap();
        fs::write(dir.path().join("trace.json.20260101T000000.000"), "x").unwrap();

        let writer = FileWriter::new(dir.path().join("trace.json"));
        assert_eq!(writer.backups().unwrap().len(), 1);
    }
}
