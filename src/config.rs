/*!
 * Configuration handling for dirpage
 */

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{DirPageError, Result};
use crate::render::EscapePolicy;
use crate::report::ReportFormat;
use crate::sorter::SortPolicy;

pub const DEFAULT_SOURCE_DIR: &str = "src";
pub const DEFAULT_OUTPUT_DIR: &str = "directory";
pub const OUTPUT_FILE_NAME: &str = "index.html";
pub const DEFAULT_TITLE: &str = "Puter.js Documentation";
pub const DEFAULT_SUBTITLE: &str = "Complete File Directory Structure";
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/badbsallyy/docs";

/// Command-line arguments for dirpage
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dirpage",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render a directory tree as a self-contained HTML page",
    long_about = "Scans a source directory and writes index.html with a collapsible view of its folders and files, their sizes, and aggregate statistics."
)]
pub struct Args {
    /// Directory to scan
    #[clap(long, default_value = DEFAULT_SOURCE_DIR)]
    pub source: PathBuf,

    /// Directory the page is written to
    #[clap(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Page title
    #[clap(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Line shown under the title
    #[clap(long, default_value = DEFAULT_SUBTITLE)]
    pub subtitle: String,

    /// Repository link in the page footer
    #[clap(long, default_value = DEFAULT_REPOSITORY_URL)]
    pub repo_url: String,

    /// Name ordering within directories and files
    #[clap(long, value_enum, default_value_t = SortPolicy::default())]
    pub sort: SortPolicy,

    /// Insert entry names into the page without HTML escaping
    #[clap(long)]
    pub raw_names: bool,

    /// Format of the console summary
    #[clap(long, value_enum, default_value_t = ReportFormat::default())]
    pub report: ReportFormat,

    /// Enable debug logging on stderr
    #[clap(short, long)]
    pub verbose: bool,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory to scan
    pub source_dir: PathBuf,

    /// Directory receiving the output page
    pub output_dir: PathBuf,

    /// Output file name inside `output_dir`
    pub output_file_name: String,

    /// Page title
    pub title: String,

    /// Page subtitle
    pub subtitle: String,

    /// Footer repository link
    pub repository_url: String,

    /// Name ordering policy
    pub sort_policy: SortPolicy,

    /// Name escaping policy
    pub escape_policy: EscapePolicy,

    /// Console summary format
    pub report_format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_file_name: OUTPUT_FILE_NAME.to_string(),
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
            sort_policy: SortPolicy::default(),
            escape_policy: EscapePolicy::default(),
            report_format: ReportFormat::default(),
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            source_dir: args.source,
            output_dir: args.output,
            output_file_name: OUTPUT_FILE_NAME.to_string(),
            title: args.title,
            subtitle: args.subtitle,
            repository_url: args.repo_url,
            sort_policy: args.sort,
            escape_policy: if args.raw_names {
                EscapePolicy::Raw
            } else {
                EscapePolicy::Escape
            },
            report_format: args.report,
        }
    }

    /// Configuration scanning `source_dir` and writing into `output_dir`
    pub fn with_dirs(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Full path of the generated page
    pub fn output_file(&self) -> PathBuf {
        self.output_dir.join(&self.output_file_name)
    }

    /// Label of the scanned directory shown above the tree
    pub fn source_label(&self) -> String {
        source_label(&self.source_dir)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.source_dir.is_dir() {
            return Err(DirPageError::SourceNotFound(self.source_dir.clone()));
        }
        Ok(())
    }
}

fn source_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_zero_argument_defaults() {
        let config = Config::from_args(Args::parse_from(["dirpage"]));
        assert_eq!(config.source_dir, PathBuf::from("src"));
        assert_eq!(config.output_file(), PathBuf::from("directory").join("index.html"));
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.sort_policy, SortPolicy::CaseInsensitive);
        assert_eq!(config.escape_policy, EscapePolicy::Escape);
        assert_eq!(config.report_format, ReportFormat::Plain);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "dirpage",
            "--source",
            "docs",
            "--output",
            "public",
            "--sort",
            "case-sensitive",
            "--raw-names",
            "--report",
            "table",
        ]);
        let config = Config::from_args(args);
        assert_eq!(config.source_dir, PathBuf::from("docs"));
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.sort_policy, SortPolicy::CaseSensitive);
        assert_eq!(config.escape_policy, EscapePolicy::Raw);
        assert_eq!(config.report_format, ReportFormat::Table);
    }

    #[test]
    fn test_validate_missing_source() {
        let temp_dir = tempdir().unwrap();
        let config = Config::with_dirs(temp_dir.path().join("missing"), temp_dir.path());
        assert!(matches!(config.validate(), Err(DirPageError::SourceNotFound(_))));

        let config = Config::with_dirs(temp_dir.path(), temp_dir.path().join("out"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_source_label() {
        assert_eq!(source_label(Path::new("docs/src")), "src");
        assert_eq!(source_label(Path::new("src/")), "src");
        assert_eq!(source_label(Path::new("/")), "/");
    }
}
