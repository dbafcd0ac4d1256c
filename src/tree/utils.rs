//! Shared helpers for presenting tree sizes

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Render a size either as raw bytes or human-readable.
pub fn display_size(bytes: u64, human: bool) -> String {
    if human {
        format_size(bytes)
    } else {
        bytes.to_string()
    }
}
