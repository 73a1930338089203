/// A single node in the arena-allocated display tree.
///
/// Nodes are stored in a flat `Vec<FileNode>` for cache-friendly traversal.
/// Parent-child relationships use indices rather than pointers.
use compact_str::CompactString;

/// Lightweight index into the arena `Vec<FileNode>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Create a new `NodeIndex` from a `usize`.
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "NodeIndex overflow");
        Self(index as u32)
    }

    /// Return the index as a `usize` for Vec indexing.
    #[inline]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A single file or directory in the tree.
///
/// Children form a singly-linked list via `first_child` / `next_sibling`;
/// `last_child` lets new children be appended so siblings keep the order in
/// which the scanner reported them.
#[derive(Debug, Clone)]
pub struct FileNode {
    /// Path segment only (NOT the full path).
    pub name: CompactString,

    /// File size, or for directories the sum of all descendant file sizes.
    pub size: u64,

    pub is_dir: bool,

    /// Index of the parent node. `None` for top-level entries.
    pub parent: Option<NodeIndex>,

    pub first_child: Option<NodeIndex>,
    pub last_child: Option<NodeIndex>,
    pub next_sibling: Option<NodeIndex>,

    /// Total number of descendant *files* (not directories).
    pub descendant_count: u64,

    /// Position of the backing record in the scan's record list (files only).
    pub record: Option<usize>,

    /// Pre-computed percentage of the parent's size (0.0–100.0).
    pub percent_of_parent: f32,
}

impl FileNode {
    /// Create a file node backed by `records[record]`.
    pub fn new_file(
        name: CompactString,
        size: u64,
        record: usize,
        parent: Option<NodeIndex>,
    ) -> Self {
        Self {
            name,
            size,
            is_dir: false,
            parent,
            first_child: None,
            last_child: None,
            next_sibling: None,
            descendant_count: 0,
            record: Some(record),
            percent_of_parent: 0.0,
        }
    }

    /// Create a new directory node.
    pub fn new_dir(name: CompactString, parent: Option<NodeIndex>) -> Self {
        Self {
            name,
            size: 0,
            is_dir: true,
            parent,
            first_child: None,
            last_child: None,
            next_sibling: None,
            descendant_count: 0,
            record: None,
            percent_of_parent: 0.0,
        }
    }
}
