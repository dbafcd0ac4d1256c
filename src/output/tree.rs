//! Tree formatter for buffered output
//!
//! This module provides `TreeFormatter` which formats a complete `TreeNode`
//! tree structure into a string or prints it with colors. Every entry is
//! followed by its size in brackets.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{TreeNode, display_size};

use super::config::OutputConfig;

/// Formatter for buffered tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    fn size_label(&self, node: &TreeNode) -> String {
        format!(
            "[{}]",
            display_size(node.size_bytes(), self.config.human_sizes)
        )
    }

    pub fn format(&self, node: &TreeNode) -> String {
        let mut output = String::new();
        let (dir_count, file_count) = self.format_node(node, &mut output, "", true, true);
        output.push_str(&format!(
            "\n{} directories, {} files\n",
            dir_count, file_count
        ));
        output
    }

    pub fn print(&self, node: &TreeNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write(node, &mut stdout)
    }

    /// Write the tree with colors to any color-capable writer.
    pub fn write<W: WriteColor>(&self, node: &TreeNode, out: &mut W) -> io::Result<()> {
        let (dir_count, file_count) = self.write_node(node, out, "", true, true)?;
        writeln!(out)?;
        writeln!(out, "{} directories, {} files", dir_count, file_count)?;
        Ok(())
    }

    fn format_node(
        &self,
        node: &TreeNode,
        output: &mut String,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> (usize, usize) {
        let connector = if is_last { "└── " } else { "├── " };

        if !is_root {
            output.push_str(prefix);
            output.push_str(connector);
        }
        output.push_str(node.name());
        output.push_str("  ");
        output.push_str(&self.size_label(node));
        output.push('\n');

        match node {
            TreeNode::File { .. } => (0, 1),
            TreeNode::Dir { children, .. } => {
                let new_prefix = child_prefix(prefix, is_last, is_root);

                let mut dir_count = 0;
                let mut file_count = 0;

                for (i, child) in children.iter().enumerate() {
                    let child_is_last = i == children.len() - 1;
                    let (d, f) = self.format_node(child, output, &new_prefix, child_is_last, false);
                    dir_count += d;
                    file_count += f;
                    if child.is_dir() {
                        dir_count += 1;
                    }
                }

                (dir_count, file_count)
            }
        }
    }

    fn write_node<W: WriteColor>(
        &self,
        node: &TreeNode,
        out: &mut W,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<(usize, usize)> {
        let connector = if is_last { "└── " } else { "├── " };

        if !is_root {
            write!(out, "{}{}", prefix, connector)?;
        }
        if node.is_dir() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        } else {
            out.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        }
        write!(out, "{}", node.name())?;
        out.reset()?;

        write!(out, "  ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", self.size_label(node))?;
        out.reset()?;
        writeln!(out)?;

        match node {
            TreeNode::File { .. } => Ok((0, 1)),
            TreeNode::Dir { children, .. } => {
                let new_prefix = child_prefix(prefix, is_last, is_root);

                let mut dir_count = 0;
                let mut file_count = 0;

                for (i, child) in children.iter().enumerate() {
                    let child_is_last = i == children.len() - 1;
                    let (d, f) = self.write_node(child, out, &new_prefix, child_is_last, false)?;
                    dir_count += d;
                    file_count += f;
                    if child.is_dir() {
                        dir_count += 1;
                    }
                }

                Ok((dir_count, file_count))
            }
        }
    }
}

/// Calculate the prefix for child entries
fn child_prefix(prefix: &str, is_last: bool, is_root: bool) -> String {
    if is_root {
        String::new()
    } else if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}
