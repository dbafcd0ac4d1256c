//! JSON serialization types for tree output

use serde::Serialize;

use super::node::{Directory, File};
use super::utils::format_size;

/// Serializable mirror of a reconstructed tree, with sizes filled in.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        size_bytes: u64,
        size_human: String,
    },
    Dir {
        name: String,
        size_bytes: u64,
        size_human: String,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    pub fn size_bytes(&self) -> u64 {
        match self {
            TreeNode::File { size_bytes, .. } => *size_bytes,
            TreeNode::Dir { size_bytes, .. } => *size_bytes,
        }
    }
}

impl From<&File> for TreeNode {
    fn from(file: &File) -> Self {
        TreeNode::File {
            name: file.name().to_string(),
            size_bytes: file.size(),
            size_human: format_size(file.size()),
        }
    }
}

/// Directories come first, then files, each in discovery order.
impl From<&Directory> for TreeNode {
    fn from(dir: &Directory) -> Self {
        let children = dir
            .subdirectories()
            .iter()
            .map(TreeNode::from)
            .chain(dir.files().iter().map(TreeNode::from))
            .collect();

        TreeNode::Dir {
            name: dir.name().to_string(),
            size_bytes: dir.size(),
            size_human: format_size(dir.size()),
            children,
        }
    }
}
