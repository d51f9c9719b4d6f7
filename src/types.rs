/*!
 * Core types for the dirpage tree model
 */

/// Represents a directory in the scanned tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    /// Directory name
    pub name: String,
    /// Path relative to the scan root, `/`-separated
    pub path: String,
    /// Directory contents, directories first once sorted
    pub children: Vec<TreeNode>,
}

/// Represents a regular (non-directory) entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    /// File name
    pub name: String,
    /// Path relative to the scan root, `/`-separated
    pub path: String,
    /// Size in bytes
    pub size: u64,
}

/// A node of the scanned tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// Directory node
    Directory(DirectoryNode),
    /// File node
    File(FileNode),
}

impl TreeNode {
    /// Entry base name
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Directory(dir) => &dir.name,
            TreeNode::File(file) => &file.name,
        }
    }

    /// Path relative to the scan root
    pub fn path(&self) -> &str {
        match self {
            TreeNode::Directory(dir) => &dir.path,
            TreeNode::File(file) => &file.path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, TreeNode::Directory(_))
    }
}
