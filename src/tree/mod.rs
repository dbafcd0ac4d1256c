//! Directory tree reconstruction and size queries
//!
//! The pipeline runs in one direction:
//!
//! - `TreeBuilder`: replays transcript records into a `Directory` tree
//! - `size_of`: memoized cumulative sizes
//! - `sum_of_small_directories` / `smallest_directory_at_least`: read-only queries

mod builder;
mod json_types;
mod node;
mod query;
mod size;
mod utils;

// Re-export public types
pub use builder::{TreeBuilder, build};
pub use json_types::TreeNode;
pub use node::{Directory, File, ROOT_NAME};
pub use query::{Directories, smallest_directory_at_least, sum_of_small_directories};
pub use size::size_of;
pub use utils::{display_size, format_size};
