//! Size queries over a completed tree
//!
//! Both queries size the root first, which memoizes every directory, then
//! walk the tree depth-first with an explicit stack.

use super::node::Directory;

/// Depth-first iterator over a directory and all of its descendants.
///
/// Visit order is pre-order with siblings popped last-first; callers that
/// only filter and aggregate do not depend on it.
pub struct Directories<'a> {
    stack: Vec<&'a Directory>,
}

impl<'a> Directories<'a> {
    pub fn new(root: &'a Directory) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for Directories<'a> {
    type Item = &'a Directory;

    fn next(&mut self) -> Option<Self::Item> {
        let dir = self.stack.pop()?;
        self.stack.extend(dir.subdirectories());
        Some(dir)
    }
}

impl Directory {
    /// Iterate over this directory and every directory below it.
    pub fn directories(&self) -> Directories<'_> {
        Directories::new(self)
    }
}

/// Sum the sizes of all directories whose size is at most `threshold`.
///
/// Nested qualifying directories are each counted, so a file can contribute
/// more than once, and the sum saturates at `u64::MAX`. The root is eligible.
pub fn sum_of_small_directories(root: &Directory, threshold: u64) -> u64 {
    root.size();
    root.directories()
        .map(Directory::size)
        .filter(|&size| size <= threshold)
        .fold(0, u64::saturating_add)
}

/// Find the smallest directory whose size is at least `minimum_size`.
///
/// Ties keep the first directory found. Subtrees of a directory that is
/// already too small are skipped, since no descendant can be larger than
/// its ancestor.
pub fn smallest_directory_at_least(root: &Directory, minimum_size: u64) -> Option<&Directory> {
    root.size();

    let mut best: Option<&Directory> = None;
    let mut stack = vec![root];

    while let Some(dir) = stack.pop() {
        let size = dir.size();
        if size < minimum_size {
            continue;
        }
        if best.is_none_or(|b| size < b.size()) {
            best = Some(dir);
        }
        stack.extend(dir.subdirectories());
    }

    best
}
