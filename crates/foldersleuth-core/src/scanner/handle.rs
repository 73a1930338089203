/// The hierarchical handle abstraction the scanner walks.
///
/// A handle is an opaque reference to a directory. It can list its child
/// entries, open a child directory as a nested handle, and stat a child
/// file. [`FsHandle`](super::fs::FsHandle) is the real filesystem
/// implementation; tests substitute in-memory trees to inject failures.
use std::io;
use std::time::SystemTime;

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One child of a directory, as reported by the handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }
}

/// Stat record for a file entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub size: u64,
    pub modified: SystemTime,
}

/// Iterator over a directory's children. Each step may fail independently.
pub type Entries<'a> = Box<dyn Iterator<Item = io::Result<Entry>> + 'a>;

pub trait DirectoryHandle: Sized {
    /// List the children of this directory, in whatever order the
    /// underlying source yields them.
    fn entries(&self) -> io::Result<Entries<'_>>;

    /// Open the child directory `name` as a nested handle.
    fn open_dir(&self, name: &str) -> io::Result<Self>;

    /// Stat the child file `name`.
    fn stat(&self, name: &str) -> io::Result<FileStat>;
}
