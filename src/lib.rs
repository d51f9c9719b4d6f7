/*!
 * dirpage - Render a directory tree as a self-contained HTML page
 *
 * The pipeline scans a source directory into an in-memory tree, sorts it,
 * renders it into collapsible markup, wraps that in a page template and
 * writes `index.html` into the output directory.
 */

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use indicatif::ProgressBar;
use tracing::info;

pub mod config;
pub mod error;
pub mod page;
pub mod render;
pub mod report;
pub mod scanner;
pub mod sorter;
pub mod stats;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::Config;
pub use error::{DirPageError, Result};
pub use page::{assemble_page, PageContext};
pub use render::{EscapePolicy, TreeRenderer};
pub use report::{ReportFormat, Reporter, ScanReport};
pub use scanner::Scanner;
pub use sorter::{sort_tree, SortPolicy};
pub use stats::TreeStats;
pub use types::{DirectoryNode, FileNode, TreeNode};
pub use utils::format_file_size;
pub use writer::PageWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pipeline milestones reported to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Scanning is about to start
    Scanning { source: String },
    /// The tree is scanned and sorted; rendering starts
    Generating,
    /// The page was written
    Written { path: PathBuf },
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Scanning { source } => write!(f, "Scanning {} directory...", source),
            Stage::Generating => write!(f, "Generating HTML..."),
            Stage::Written { path } => {
                write!(f, "✅ HTML directory listing generated at: {}", path.display())
            }
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct Generation {
    /// Path of the written page
    pub output_path: PathBuf,
    /// Authoritative totals over the scanned tree
    pub stats: TreeStats,
    /// Sorted tree the page was rendered from
    pub tree: Vec<TreeNode>,
}

/// Runs the scan, render and write pipeline for one configuration
pub struct Generator {
    config: Config,
    progress: Arc<ProgressBar>,
}

impl Generator {
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Run the pipeline without stage notifications
    pub fn generate(&self) -> Result<Generation> {
        self.generate_with(|_| {})
    }

    /// Run the pipeline, calling `on_stage` as each stage begins.
    ///
    /// Any failure aborts the run; nothing is written unless scanning and
    /// rendering both succeed.
    pub fn generate_with<F>(&self, mut on_stage: F) -> Result<Generation>
    where
        F: FnMut(&Stage),
    {
        self.config.validate()?;

        let writer = PageWriter::new(self.config.output_file());
        writer.prepare()?;

        let source = self.config.source_label();
        on_stage(&Stage::Scanning {
            source: source.clone(),
        });
        info!(source = %self.config.source_dir.display(), "scanning");
        let scanner = Scanner::new(Arc::clone(&self.progress));
        let mut tree = scanner.scan(&self.config.source_dir)?;
        sort_tree(&mut tree, self.config.sort_policy);

        on_stage(&Stage::Generating);
        let tree_html = TreeRenderer::new(self.config.escape_policy).render(&tree);
        let ctx = PageContext {
            title: self.config.title.clone(),
            subtitle: self.config.subtitle.clone(),
            source_label: source,
            repository_url: self.config.repository_url.clone(),
            generated_at: PageContext::timestamp(Local::now()),
        };
        let page = assemble_page(&ctx, &tree_html);

        let output_path = writer.write(&page)?;
        on_stage(&Stage::Written {
            path: output_path.clone(),
        });

        let stats = TreeStats::collect(&tree);
        info!(
            files = stats.files,
            directories = stats.directories,
            total_size = stats.total_size,
            "generation complete"
        );

        Ok(Generation {
            output_path,
            stats,
            tree,
        })
    }
}
