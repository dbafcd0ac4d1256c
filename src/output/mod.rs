//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `tree` - Box-drawing formatter for a reconstructed tree

mod config;
mod tree;

// Re-export public types and functions
pub use config::OutputConfig;
pub use tree::TreeFormatter;
