//! Query configuration
//!
//! The three numbers that drive the two size queries, plus the arithmetic
//! that turns a root size into "how much must be freed".

/// Default upper bound for the bounded-sum query.
pub const DEFAULT_THRESHOLD: u64 = 100_000;

/// Default total capacity of the device the transcript was taken on.
pub const DEFAULT_CAPACITY: u64 = 70_000_000;

/// Default amount of free space required.
pub const DEFAULT_REQUIRED: u64 = 30_000_000;

/// Configuration for the size queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryConfig {
    /// Directories at or below this size count towards the bounded sum
    pub threshold: u64,
    /// Total capacity of the device
    pub capacity: u64,
    /// Free space that must be available after deleting a directory
    pub required: u64,
}

impl QueryConfig {
    /// Space left on the device when the tree takes `root_size` bytes.
    ///
    /// Saturates at zero if the tree is larger than the capacity.
    pub fn free_space(&self, root_size: u64) -> u64 {
        self.capacity.saturating_sub(root_size)
    }

    /// Minimum number of bytes a deletion must release.
    ///
    /// Zero means enough space is already free.
    pub fn space_to_free(&self, root_size: u64) -> u64 {
        self.required.saturating_sub(self.free_space(root_size))
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            capacity: DEFAULT_CAPACITY,
            required: DEFAULT_REQUIRED,
        }
    }
}
