use anyhow::{Context, Result};
use notekeeper::application::NoteManager;
use notekeeper::infrastructure::FlatFileStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for a notes file inside a temporary directory
#[allow(dead_code)]
pub struct TestNotesFile {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestNotesFile {
    /// Point at a notes file that does not exist yet
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let path = temp_dir.path().join("notes.txt");
        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Create the notes file with the given raw content
    pub fn with_content(content: &str) -> Result<Self> {
        let fixture = Self::new()?;
        std::fs::write(&fixture.path, content).context("Failed to write notes fixture")?;
        Ok(fixture)
    }

    pub fn open_manager(&self) -> Result<NoteManager<FlatFileStore>> {
        let store = FlatFileStore::new(&self.path)?;
        Ok(NoteManager::new(store)?)
    }

    pub fn read(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).context("Failed to read notes file")
    }
}
