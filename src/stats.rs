//! Aggregate statistics over the scanned tree
//!
//! These are the authoritative counts printed on the console. The generated
//! page recomputes its own figures in the browser from the rendered markup.

use crate::types::TreeNode;

/// Totals for a scanned tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of files, at any depth
    pub files: usize,
    /// Number of directories, at any depth, excluding the scan root
    pub directories: usize,
    /// Sum of all file sizes in bytes
    pub total_size: u64,
}

impl TreeStats {
    /// Walk `nodes` recursively and count everything beneath them
    pub fn collect(nodes: &[TreeNode]) -> Self {
        let mut stats = Self::default();
        stats.add_nodes(nodes);
        stats
    }

    fn add_nodes(&mut self, nodes: &[TreeNode]) {
        for node in nodes {
            match node {
                TreeNode::Directory(dir) => {
                    self.directories += 1;
                    self.add_nodes(&dir.children);
                }
                TreeNode::File(file) => {
                    self.files += 1;
                    self.total_size = self.total_size.saturating_add(file.size);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DirectoryNode, FileNode};

    fn file(name: &str, size: u64) -> TreeNode {
        TreeNode::File(FileNode {
            name: name.to_string(),
            path: name.to_string(),
            size,
        })
    }

    #[test]
    fn test_collect_counts_nested_entries() {
        let nodes = vec![
            TreeNode::Directory(DirectoryNode {
                name: "a".to_string(),
                path: "a".to_string(),
                children: vec![
                    TreeNode::Directory(DirectoryNode {
                        name: "empty".to_string(),
                        path: "a/empty".to_string(),
                        children: vec![],
                    }),
                    file("x", 100),
                ],
            }),
            file("y", 24),
            file("z", 0),
        ];

        let stats = TreeStats::collect(&nodes);
        assert_eq!(
            stats,
            TreeStats {
                files: 3,
                directories: 2,
                total_size: 124,
            }
        );
    }

    #[test]
    fn test_collect_empty() {
        assert_eq!(TreeStats::collect(&[]), TreeStats::default());
    }
}
