/*!
 * Directory tree scanning
 */

use std::fs;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{DirPageError, Result};
use crate::types::{DirectoryNode, FileNode, TreeNode};
use crate::utils::join_relative;

/// Scanner for directory contents
pub struct Scanner {
    /// Progress bar, ticked once per entry
    pub progress: Arc<ProgressBar>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(progress: Arc<ProgressBar>) -> Self {
        Self { progress }
    }

    /// Scan `root` and return its children, recursively expanded.
    ///
    /// Children come back in enumeration order; ordering is the sorter's job.
    /// The first unreadable directory or entry aborts the whole scan.
    pub fn scan(&self, root: &Path) -> Result<Vec<TreeNode>> {
        if !root.is_dir() {
            return Err(DirPageError::SourceNotFound(root.to_path_buf()));
        }
        self.scan_directory(root, "")
    }

    /// Scan one directory level and recurse into subdirectories
    fn scan_directory(&self, abs_path: &Path, rel_path: &str) -> Result<Vec<TreeNode>> {
        debug!(path = %abs_path.display(), "scanning directory");
        let mut children = Vec::new();

        for entry in WalkDir::new(abs_path).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|source| DirPageError::Scan {
                path: source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| abs_path.to_path_buf()),
                source,
            })?;

            let name = entry.file_name().to_string_lossy().to_string();
            let child_rel = join_relative(rel_path, &name);
            self.progress.inc(1);
            self.progress.set_message(child_rel.clone());

            if entry.file_type().is_dir() {
                let grandchildren = self.scan_directory(entry.path(), &child_rel)?;
                children.push(TreeNode::Directory(DirectoryNode {
                    name,
                    path: child_rel,
                    children: grandchildren,
                }));
            } else {
                // Follows symlinks, so a dangling link fails the scan
                let metadata =
                    fs::metadata(entry.path()).map_err(|source| DirPageError::Metadata {
                        path: entry.path().to_path_buf(),
                        source,
                    })?;
                children.push(TreeNode::File(FileNode {
                    name,
                    path: child_rel,
                    size: metadata.len(),
                }));
            }
        }

        Ok(children)
    }
}
