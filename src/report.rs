//! Query results and their display
//!
//! Runs both size queries against a completed tree and prints the answers
//! as colored text or JSON.

use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::config::QueryConfig;
use crate::error::Result;
use crate::tree::{
    Directory, TreeNode, display_size, smallest_directory_at_least, sum_of_small_directories,
};

/// The directory chosen for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionCandidate {
    pub name: String,
    pub size: u64,
}

/// Answers to both queries for one tree.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Cumulative size of the root directory
    pub root_size: u64,
    /// Threshold used for the bounded sum
    pub threshold: u64,
    /// Sum of the sizes of directories at or below the threshold
    pub small_directories_total: u64,
    /// Space left on the device
    pub free_space: u64,
    /// Bytes a deletion has to release (0 = nothing to delete)
    pub space_to_free: u64,
    /// Smallest directory that frees enough space
    pub deletion_candidate: Option<DeletionCandidate>,
    /// Full tree, only included when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<TreeNode>,
}

impl Report {
    /// Run both queries against `root`.
    pub fn new(root: &Directory, config: &QueryConfig) -> Self {
        let root_size = root.size();
        let space_to_free = config.space_to_free(root_size);

        let deletion_candidate = if space_to_free == 0 {
            None
        } else {
            smallest_directory_at_least(root, space_to_free).map(|dir| DeletionCandidate {
                name: dir.name().to_string(),
                size: dir.size(),
            })
        };

        Self {
            root_size,
            threshold: config.threshold,
            small_directories_total: sum_of_small_directories(root, config.threshold),
            free_space: config.free_space(root_size),
            space_to_free,
            deletion_candidate,
            tree: None,
        }
    }

    /// Attach a serializable copy of the tree.
    pub fn with_tree(mut self, root: &Directory) -> Self {
        self.tree = Some(TreeNode::from(root));
        self
    }
}

/// Print the report to stdout with optional color.
pub fn print_report(report: &Report, use_color: bool, human: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    write_report(&mut stdout, report, human)
}

/// Write the report to any color-capable writer.
pub fn write_report<W: WriteColor>(out: &mut W, report: &Report, human: bool) -> io::Result<()> {
    let size = |bytes: u64| {
        if human {
            display_size(bytes, true)
        } else {
            format_number(bytes)
        }
    };

    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    out.set_color(&bold)?;
    writeln!(out, "Disk Usage")?;
    out.reset()?;
    writeln!(out, "──────────")?;

    writeln!(out, "Used:          {}", size(report.root_size))?;
    writeln!(out, "Free:          {}", size(report.free_space))?;
    writeln!(
        out,
        "Small dirs:    {} (each <= {})",
        size(report.small_directories_total),
        size(report.threshold)
    )?;
    writeln!(out)?;

    out.set_color(&bold)?;
    write!(out, "To free:       ")?;
    out.reset()?;
    writeln!(out, "{}", size(report.space_to_free))?;

    out.set_color(&bold)?;
    write!(out, "Delete:        ")?;
    out.reset()?;
    match (&report.deletion_candidate, report.space_to_free) {
        (_, 0) => writeln!(out, "nothing, enough space is free")?,
        (Some(candidate), _) => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(out, "{}", candidate.name)?;
            out.reset()?;
            write!(out, "  ")?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            writeln!(out, "[{}]", size(candidate.size))?;
            out.reset()?;
        }
        (None, _) => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            writeln!(out, "no directory is large enough")?;
            out.reset()?;
        }
    }

    Ok(())
}

/// Format a number with thousand separators.
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::new();

    for (i, c) in chars.iter().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, *c);
    }

    result
}

/// Print the report as JSON.
pub fn print_report_json(report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}
