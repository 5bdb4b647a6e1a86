//! Ordered trees for directory listings and nested documents

use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;

/// An ordered tree: each entry is a key plus optional children
///
/// `None` marks a leaf (a file). `Some` holds a subtree, which may be
/// empty. Entries keep the order they were added in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<K> {
    entries: Vec<(K, Option<Tree<K>>)>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K> FromIterator<(K, Option<Tree<K>>)> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = (K, Option<Tree<K>>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K> Tree<K> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a leaf entry
    pub fn leaf(mut self, key: K) -> Self {
        self.entries.push((key, None));
        self
    }

    /// Append an entry with children
    pub fn branch(mut self, key: K, children: Tree<K>) -> Self {
        self.entries.push((key, Some(children)));
        self
    }

    pub fn entries(&self) -> &[(K, Option<Tree<K>>)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Directory listing keyed by file or directory name
pub type DirTree = Tree<String>;

/// Nested document ids
pub type NestedDocument = Tree<u32>;

impl DirTree {
    /// Append a file
    pub fn file(self, name: &str) -> Self {
        self.leaf(name.to_string())
    }

    /// Append a directory
    pub fn dir(self, name: &str, children: DirTree) -> Self {
        self.branch(name.to_string(), children)
    }

    /// Build a directory tree from disk, sorted by name
    ///
    /// Hidden entries and build output directories are skipped.
    pub fn scan(path: &Path) -> Result<Self> {
        let mut tree = DirTree::new();

        let walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_skipped(&e.file_name().to_string_lossy()));

        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if entry.file_type().is_dir() {
                let children = Self::scan(entry.path())?;
                tree = tree.dir(&name, children);
            } else {
                tree = tree.file(&name);
            }
        }

        tracing::debug!("Scanned {} entries in {}", tree.entries.len(), path.display());
        Ok(tree)
    }
}

fn is_skipped(name: &str) -> bool {
    name.starts_with('.') || name == "node_modules" || name == "target"
}

/// List every file path under `tree`, each prefixed with `prefix/`
///
/// Directories are walked depth-first in entry order; empty
/// directories contribute nothing.
pub fn list_files(tree: &DirTree, prefix: &str) -> Vec<String> {
    let mut files = Vec::new();
    for (name, children) in &tree.entries {
        let path = format!("{prefix}/{name}");
        match children {
            None => files.push(path),
            Some(children) => files.extend(list_files(children, &path)),
        }
    }
    files
}

/// 1-based depth of the first entry matching `target`, searching depth-first
/// in sibling order
pub fn count_nested_levels<K: PartialEq>(tree: &Tree<K>, target: &K) -> Option<usize> {
    find_level(tree, target, 1)
}

fn find_level<K: PartialEq>(tree: &Tree<K>, target: &K, level: usize) -> Option<usize> {
    for (key, children) in &tree.entries {
        if key == target {
            return Some(level);
        }
        if let Some(children) = children {
            if let Some(found) = find_level(children, target, level + 1) {
                return Some(found);
            }
        }
    }
    None
}
