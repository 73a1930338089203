/// Arena-backed display tree folded from the flat record list.
///
/// The scanner produces a flat `Vec<FileRecord>`; the tree is a pure
/// function of that list and is rebuilt whenever the list changes (a new
/// scan or a rename). Directories exist only as path prefixes of records,
/// so empty directories do not appear.
use super::file_node::{FileNode, NodeIndex};
use super::file_record::FileRecord;
use compact_str::CompactString;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct FileTree {
    /// Arena: every node in a flat vector. Parents precede their children.
    pub nodes: Vec<FileNode>,

    /// Top-level entries directly under the scan root, in record order.
    pub roots: Vec<NodeIndex>,

    /// Total size of all files in the tree.
    pub total_size: u64,
}

impl FileTree {
    /// Create an empty tree with pre-allocated capacity.
    pub fn with_capacity(estimated_nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(estimated_nodes),
            roots: Vec::new(),
            total_size: 0,
        }
    }

    /// Fold `records` into a tree by splitting each `full_path` on `/`.
    ///
    /// Siblings keep the order of first appearance in `records`, which is the
    /// order the scanner visited them in.
    pub fn from_records(records: &[FileRecord]) -> Self {
        let mut tree = Self::with_capacity(records.len() * 2);

        // Root-relative directory path -> its node.
        let mut dir_map: HashMap<&str, NodeIndex> = HashMap::new();

        for (record_idx, record) in records.iter().enumerate() {
            let path = record.full_path.as_str();
            let mut parent: Option<NodeIndex> = None;

            // Every '/' ends a directory prefix.
            let mut seg_start = 0;
            for (slash, _) in path.match_indices('/') {
                let prefix = &path[..slash];
                let idx = match dir_map.get(prefix) {
                    Some(&idx) => idx,
                    None => {
                        let name = CompactString::new(&path[seg_start..slash]);
                        let idx = tree.add_node(FileNode::new_dir(name, parent));
                        tree.attach(parent, idx);
                        dir_map.insert(prefix, idx);
                        idx
                    }
                };
                parent = Some(idx);
                seg_start = slash + 1;
            }

            let file = FileNode::new_file(
                CompactString::new(&path[seg_start..]),
                record.size_bytes,
                record_idx,
                parent,
            );
            let idx = tree.add_node(file);
            tree.attach(parent, idx);
        }

        tree.aggregate_sizes();
        tree
    }

    /// Allocate a new node in the arena and return its index.
    pub fn add_node(&mut self, node: FileNode) -> NodeIndex {
        let idx = NodeIndex::new(self.nodes.len());
        self.nodes.push(node);
        idx
    }

    /// Append `child` under `parent`, or as a new root when `parent` is `None`.
    fn attach(&mut self, parent: Option<NodeIndex>, child: NodeIndex) {
        match parent {
            Some(parent) => self.add_child(parent, child),
            None => self.roots.push(child),
        }
    }

    /// Attach `child` as the last child of `parent`. O(1).
    pub fn add_child(&mut self, parent: NodeIndex, child: NodeIndex) {
        self.nodes[child.idx()].parent = Some(parent);
        self.nodes[child.idx()].next_sibling = None;
        match self.nodes[parent.idx()].last_child {
            Some(last) => self.nodes[last.idx()].next_sibling = Some(child),
            None => self.nodes[parent.idx()].first_child = Some(child),
        }
        self.nodes[parent.idx()].last_child = Some(child);
    }

    /// Compute directory sizes, descendant counts, and percentages.
    ///
    /// Children are always inserted after their parent in the arena, so a
    /// reverse pass sees every child before its parent: O(n), no recursion.
    pub fn aggregate_sizes(&mut self) {
        for node in self.nodes.iter_mut() {
            if node.is_dir {
                node.size = 0;
                node.descendant_count = 0;
            }
        }

        for i in (0..self.nodes.len()).rev() {
            let node = &self.nodes[i];
            let size = node.size;
            let files = if node.is_dir { node.descendant_count } else { 1 };
            if let Some(parent_idx) = node.parent {
                self.nodes[parent_idx.idx()].size += size;
                self.nodes[parent_idx.idx()].descendant_count += files;
            }
        }

        self.total_size = self.roots.iter().map(|r| self.nodes[r.idx()].size).sum();

        // Top-level entries are measured against the whole tree.
        for i in 0..self.nodes.len() {
            let parent_size = self.nodes[i]
                .parent
                .map_or(self.total_size, |p| self.nodes[p.idx()].size);

            self.nodes[i].percent_of_parent = if parent_size > 0 {
                (self.nodes[i].size as f64 / parent_size as f64 * 100.0) as f32
            } else {
                0.0
            };
        }
    }

    /// Reconstruct the root-relative path for a node by walking up.
    pub fn full_path(&self, index: NodeIndex) -> String {
        let mut segments = Vec::new();
        let mut current = Some(index);
        while let Some(idx) = current {
            segments.push(self.nodes[idx.idx()].name.as_str());
            current = self.nodes[idx.idx()].parent;
        }
        segments.reverse();
        segments.join("/")
    }

    /// Direct children of a node in insertion order.
    pub fn children(&self, parent: NodeIndex) -> Vec<NodeIndex> {
        let mut children = Vec::new();
        let mut child = self.nodes[parent.idx()].first_child;
        while let Some(idx) = child {
            children.push(idx);
            child = self.nodes[idx.idx()].next_sibling;
        }
        children
    }

    /// Plain-text outline, one line per node:
    ///
    /// ```text
    /// docs
    ///   |-- report.pdf (Document)
    /// logo.png (Image)
    /// ```
    ///
    /// `records` must be the list the tree was built from.
    pub fn to_text(&self, records: &[FileRecord]) -> String {
        let mut out = String::new();
        for &root in &self.roots {
            self.write_outline(&mut out, records, root, 0);
        }
        out
    }

    fn write_outline(
        &self,
        out: &mut String,
        records: &[FileRecord],
        idx: NodeIndex,
        depth: usize,
    ) {
        let node = self.node(idx);
        if depth > 0 {
            out.push_str(&"  ".repeat(depth));
            out.push_str("|-- ");
        }
        out.push_str(&node.name);
        if let Some(record) = node.record.and_then(|r| records.get(r)) {
            out.push_str(&format!(" ({})", record.category));
        }
        out.push('\n');

        for child in self.children(idx) {
            self.write_outline(out, records, child, depth + 1);
        }
    }

    /// Get the node at the given index.
    #[inline]
    pub fn node(&self, index: NodeIndex) -> &FileNode {
        &self.nodes[index.idx()]
    }

    /// Total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree contains no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
