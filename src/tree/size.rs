//! Cumulative directory sizes
//!
//! Sizes are a post-order reduction over the tree, memoized on each
//! directory the first time they are computed. Trees only leave the builder
//! once complete, so a memoized size never goes stale.

use super::node::Directory;

/// Total size of every file reachable from `dir`.
///
/// Computing the size of a directory also memoizes the size of every
/// directory below it.
pub fn size_of(dir: &Directory) -> u64 {
    *dir.cached_size.get_or_init(|| {
        let files: u64 = dir.files().iter().map(|f| f.size()).sum();
        let subdirectories: u64 = dir.subdirectories().iter().map(size_of).sum();
        files + subdirectories
    })
}

impl Directory {
    /// Cumulative size of this directory. See [`size_of`].
    pub fn size(&self) -> u64 {
        size_of(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::record::Record;
    use crate::tree::builder::build;

    use super::*;

    fn sample() -> Directory {
        build([
            Record::DeclareFile {
                name: "a".to_string(),
                size: 100,
            },
            Record::NavigateInto("x".to_string()),
            Record::DeclareFile {
                name: "b".to_string(),
                size: 50,
            },
            Record::NavigateInto("deep".to_string()),
            Record::DeclareFile {
                name: "c".to_string(),
                size: 7,
            },
        ])
        .unwrap()
    }

    fn assert_additive(dir: &Directory) {
        let files: u64 = dir.files().iter().map(|f| f.size()).sum();
        let children: u64 = dir.subdirectories().iter().map(Directory::size).sum();
        assert_eq!(dir.size(), files + children, "size of {}", dir.name());
        for child in dir.subdirectories() {
            assert!(child.size() <= dir.size());
            assert_additive(child);
        }
    }

    #[test]
    fn test_size_of_nested_tree() {
        let root = sample();
        assert_eq!(size_of(&root), 157);
        let x = root.subdirectory("x").unwrap();
        assert_eq!(x.size(), 57);
        assert_eq!(x.subdirectory("deep").unwrap().size(), 7);
    }

    #[test]
    fn test_size_is_additive_and_monotonic() {
        assert_additive(&sample());
    }

    #[test]
    fn test_sizing_root_memoizes_descendants() {
        let root = sample();
        let x = root.subdirectory("x").unwrap();
        assert!(!root.is_sized());
        assert!(!x.is_sized());

        root.size();

        assert!(root.is_sized());
        assert!(x.is_sized());
        assert!(x.subdirectory("deep").unwrap().is_sized());
    }

    #[test]
    fn test_memoized_size_is_stable() {
        let root = sample();
        let first = root.size();
        let second = root.size();
        assert_eq!(first, second);
        assert_eq!(first, sample().size());
    }

    #[test]
    fn test_empty_directory_has_zero_size() {
        let dir = Directory::new("empty");
        assert_eq!(dir.size(), 0);
        // Zero is a real memoized value, not "unknown"
        assert!(dir.is_sized());
    }
}
