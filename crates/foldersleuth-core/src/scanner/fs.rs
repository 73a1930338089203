/// [`DirectoryHandle`] over the real filesystem using `std::fs`.
///
/// Symlinks are not followed: a link to a directory is reported as a file
/// entry and stat-ed with `symlink_metadata`, so the walk can never loop.
use super::handle::{DirectoryHandle, Entries, Entry, EntryKind, FileStat};
use crate::error::ScanError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, Clone)]
pub struct FsHandle {
    path: PathBuf,
}

impl FsHandle {
    /// Open `path` as a scan root. Fails if it is missing or not a directory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ScanError> {
        let path = path.into();
        let meta = fs::metadata(&path).map_err(|source| ScanError::Open {
            path: path.clone(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(ScanError::NotADirectory(path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The folder's own name, used as the label of the scan.
    pub fn display_name(&self) -> String {
        root_display_name(&self.path)
    }
}

impl DirectoryHandle for FsHandle {
    fn entries(&self) -> io::Result<Entries<'_>> {
        let read_dir = fs::read_dir(&self.path)?;
        Ok(Box::new(read_dir.map(|res| {
            let entry = res?;
            let kind = if entry.file_type()?.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            Ok(Entry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            })
        })))
    }

    fn open_dir(&self, name: &str) -> io::Result<Self> {
        Ok(Self {
            path: self.path.join(name),
        })
    }

    fn stat(&self, name: &str) -> io::Result<FileStat> {
        let meta = fs::symlink_metadata(self.path.join(name))?;
        Ok(FileStat {
            size: meta.len(),
            // Not every platform records mtime; fall back to the epoch.
            modified: meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        })
    }
}

/// Derive a display name for the scan root.
fn root_display_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        name.to_string_lossy().to_string()
    } else {
        let s = path.to_string_lossy();
        s.trim_end_matches(['/', '\\']).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn open_rejects_missing_path() {
        let tmp = TempDir::new().unwrap();
        let err = FsHandle::open(tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, ScanError::Open { .. }));
    }

    #[test]
    fn open_rejects_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        fs::write(&file, b"x").unwrap();
        let err = FsHandle::open(&file).unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory(_)));
    }

    #[test]
    fn lists_and_stats_children() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), b"hello").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let handle = FsHandle::open(tmp.path()).unwrap();
        let mut entries: Vec<Entry> = handle.entries().unwrap().map(|e| e.unwrap()).collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries, vec![Entry::file("a.txt"), Entry::dir("sub")]);
        assert_eq!(handle.stat("a.txt").unwrap().size, 5);
    }

    #[test]
    fn display_name_is_folder_name() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("Holiday Photos");
        fs::create_dir(&dir).unwrap();
        assert_eq!(FsHandle::open(&dir).unwrap().display_name(), "Holiday Photos");
    }
}
