//! Document container extraction
//!
//! An OpenDocument file is a zip archive. [`Container::open`] unpacks it into
//! a private temporary directory which is removed when the container is
//! dropped, whether the check succeeded, found violations or failed.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;
use zip::ZipArchive;

use crate::error::EngineError;

/// Archive entry holding the body and the automatic styles
pub const CONTENT_ENTRY: &str = "content.xml";

/// An extracted document archive
#[derive(Debug)]
pub struct Container {
    source: PathBuf,
    dir: TempDir,
}

impl Container {
    /// Extract the archive at `path` into a fresh temporary directory
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let source = path.as_ref().to_path_buf();
        let file = File::open(&source)?;
        let mut archive = ZipArchive::new(file)?;

        let dir = tempfile::Builder::new().prefix("style-check-").tempdir()?;
        archive.extract(dir.path())?;

        debug!(
            "Extracted {} entries from {} into {}",
            archive.len(),
            source.display(),
            dir.path().display()
        );

        Ok(Self { source, dir })
    }

    /// Path of the source archive
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Directory the archive was extracted into
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Read one extracted entry as UTF-8 text
    pub fn read_entry(&self, name: &str) -> Result<String, EngineError> {
        let entry = self.dir.path().join(name);
        if !entry.is_file() {
            return Err(EngineError::MissingEntry(name.to_string()));
        }
        Ok(fs::read_to_string(entry)?)
    }
}
