//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Show sizes as `46.1M` instead of raw byte counts
    pub human_sizes: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            human_sizes: false,
        }
    }
}
