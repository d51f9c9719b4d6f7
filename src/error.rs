//! Error handling for dirpage
//!
//! Every failure in the pipeline is fatal: errors carry the offending path
//! and are propagated unchanged to the binary, which reports and exits.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for dirpage operations
#[derive(Error, Debug)]
pub enum DirPageError {
    /// The configured source directory is missing or is not a directory
    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// A directory could not be listed during the scan
    #[error("Failed to read directory {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// An entry's metadata could not be read (permission denied, vanished)
    #[error("Failed to read metadata for {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output directory could not be created
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output page could not be written
    #[error("Failed to write output file {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Other file system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for dirpage operations
pub type Result<T> = std::result::Result<T, DirPageError>;
