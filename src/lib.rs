//! Treesum - rebuild a directory tree from a shell transcript and answer size queries

pub mod config;
pub mod error;
pub mod output;
pub mod record;
pub mod report;
pub mod transcript;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::QueryConfig;
pub use error::{RecordError, TranscriptError};
pub use output::{OutputConfig, TreeFormatter};
pub use record::{Record, parse_line};
pub use report::{DeletionCandidate, Report, print_report, print_report_json};
pub use transcript::{build_tree, parse_transcript, read_transcript};
pub use tree::{
    Directory, File, TreeBuilder, TreeNode, size_of, smallest_directory_at_least,
    sum_of_small_directories,
};
