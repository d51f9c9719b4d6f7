/*!
 * Output writer for the generated page
 */

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::{DirPageError, Result};

/// Writes the assembled page to its output file
pub struct PageWriter {
    output_file: PathBuf,
}

impl PageWriter {
    /// Create a new writer targeting `output_file`
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }

    /// Create the output directory and any missing ancestors
    pub fn prepare(&self) -> Result<()> {
        let Some(dir) = self.output_file.parent() else {
            return Ok(());
        };
        fs::create_dir_all(dir).map_err(|source| DirPageError::CreateOutputDir {
            path: dir.to_path_buf(),
            source,
        })
    }

    /// Write the page, replacing any existing file.
    ///
    /// The output directory must exist; call [`PageWriter::prepare`] first.
    pub fn write(&self, page: &str) -> Result<PathBuf> {
        fs::write(&self.output_file, page).map_err(|source| DirPageError::WriteOutput {
            path: self.output_file.clone(),
            source,
        })?;
        info!(path = %self.output_file.display(), bytes = page.len(), "wrote page");
        Ok(self.output_file.clone())
    }
}
