//! Directory and file nodes of a reconstructed tree

use std::cell::OnceCell;

/// Name given to the tree root.
pub const ROOT_NAME: &str = "/";

/// A leaf entry with a fixed byte size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    size: u64,
}

impl File {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

/// A directory owning its subdirectories and files in first-seen order.
///
/// The cumulative size is memoized in `cached_size` the first time it is
/// read (see `tree::size`). Structural mutation is crate-private and only
/// reachable through `TreeBuilder`, so a tree handed out to callers can no
/// longer change underneath its cache.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    name: String,
    subdirectories: Vec<Directory>,
    files: Vec<File>,
    pub(super) cached_size: OnceCell<u64>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create an empty root directory named `/`.
    pub fn root() -> Self {
        Self::new(ROOT_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subdirectories(&self) -> &[Directory] {
        &self.subdirectories
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn subdirectory(&self, name: &str) -> Option<&Directory> {
        self.subdirectories.iter().find(|d| d.name == name)
    }

    pub fn file(&self, name: &str) -> Option<&File> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Whether the cumulative size has been computed yet.
    pub fn is_sized(&self) -> bool {
        self.cached_size.get().is_some()
    }

    /// Index of the named child directory, creating it when missing.
    ///
    /// Returns `(index, created)`.
    pub(crate) fn ensure_subdirectory(&mut self, name: &str) -> (usize, bool) {
        if let Some(index) = self.subdirectories.iter().position(|d| d.name == name) {
            return (index, false);
        }
        self.subdirectories.push(Directory::new(name));
        (self.subdirectories.len() - 1, true)
    }

    /// Add a file unless one with the same name exists. The first size wins.
    ///
    /// Returns whether a file was added.
    pub(crate) fn ensure_file(&mut self, name: &str, size: u64) -> bool {
        if self.files.iter().any(|f| f.name == name) {
            return false;
        }
        self.files.push(File::new(name, size));
        true
    }

    pub(crate) fn subdirectory_at_mut(&mut self, index: usize) -> Option<&mut Directory> {
        self.subdirectories.get_mut(index)
    }
}
