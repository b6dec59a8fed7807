//! Save targets for exported files

use eyre::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Destination that receives a finished export
pub trait SaveSink {
    /// Save `contents` under `file_name`, returning where it landed
    fn save(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf>;
}

/// Save exports into a directory
///
/// Bytes are staged in a temporary file inside the target directory and then
/// renamed into place, so a failed write never leaves a partial file behind.
/// The temporary handle is released when the save returns, on success and on
/// failure.
pub struct DirectorySink {
    path: PathBuf,
}

impl DirectorySink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveSink for DirectorySink {
    fn save(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("Failed to create directory: {}", self.path.display()))?;

        let mut staged = NamedTempFile::new_in(&self.path).with_context(|| {
            format!("Failed to create temporary file in {}", self.path.display())
        })?;
        staged
            .write_all(contents)
            .context("Failed to write temporary export file")?;
        staged
            .flush()
            .context("Failed to flush temporary export file")?;

        let target = self.path.join(file_name);
        staged
            .persist(&target)
            .with_context(|| format!("Failed to save file: {}", target.display()))?;

        log::debug!("Saved {} byte(s) to {}", contents.len(), target.display());
        Ok(target)
    }
}
