// src/infrastructure/flat_file.rs
use crate::application::NoteStore;
use crate::domain::{DomainError, Note};
use anyhow::Result;
use std::borrow::Cow;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::{debug, info, instrument, warn};

/// Plain text note file: two lines per note, title then text.
///
/// No header, no escaping. A value containing a line break would shift every
/// following record on the next load, which validation rules out for notes
/// created through the manager.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = PathBuf::from(path.as_ref());
        debug!(?path, "Creating new FlatFileStore");

        if path.is_dir() {
            return Err(DomainError::Storage(format!(
                "Notes path is a directory: {}",
                path.display()
            ))
            .into());
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn target_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

/// Pair up alternating title/text lines.
///
/// Returns the records and, if the input ends on a title with no text line,
/// that dangling title.
pub fn parse_records(content: &str) -> (Vec<(String, String)>, Option<String>) {
    let mut records = Vec::new();
    let mut lines = content.lines();

    while let Some(title) = lines.next() {
        match lines.next() {
            Some(text) => records.push((title.to_string(), text.to_string())),
            None => return (records, Some(title.to_string())),
        }
    }

    (records, None)
}

/// Encode notes in file order: `title\ntext\n` per note.
pub fn render_records(notes: &[Note]) -> String {
    let mut out = String::new();
    for note in notes {
        out.push_str(&note.title);
        out.push('\n');
        out.push_str(&note.text);
        out.push('\n');
    }
    out
}

impl NoteStore for FlatFileStore {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn load(&mut self) -> Result<Vec<(String, String)>, DomainError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "Notes file does not exist yet, starting empty");
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path).map_err(|e| {
            DomainError::Storage(format!(
                "Failed to read notes file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            warn!(path = %self.path.display(), "Notes file is not valid UTF-8, replacing invalid bytes");
        }

        let (records, dangling) = parse_records(&content);
        if let Some(title) = dangling {
            warn!(%title, "Dropping trailing title without text line");
        }

        info!(count = records.len(), path = %self.path.display(), "Loaded notes");
        Ok(records)
    }

    #[instrument(level = "debug", skip(self, notes), fields(path = %self.path.display(), count = notes.len()))]
    fn save(&mut self, notes: &[Note]) -> Result<(), DomainError> {
        let storage_err =
            |what: &str, e: std::io::Error| DomainError::Storage(format!("{}: {}", what, e));

        // the rename below would silently replace a read-only file
        if let Ok(metadata) = fs::metadata(&self.path) {
            if metadata.permissions().readonly() {
                return Err(DomainError::Storage(format!(
                    "No write permission for notes file: {}",
                    self.path.display()
                )));
            }
        }

        let temp = Builder::new()
            .prefix(".notes-")
            .suffix(".tmp")
            .tempfile_in(self.target_dir())
            .map_err(|e| storage_err("Failed to create temporary notes file", e))?;

        {
            let mut writer = BufWriter::new(temp.as_file());
            writer
                .write_all(render_records(notes).as_bytes())
                .and_then(|_| writer.flush())
                .map_err(|e| storage_err("Failed to write notes", e))?;
        }

        temp.persist(&self.path).map_err(|e| {
            storage_err(
                &format!("Failed to replace notes file {}", self.path.display()),
                e.error,
            )
        })?;

        debug!("Notes file replaced");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteCollection;
    use tempfile::TempDir;

    #[test]
    fn given_alternating_lines_when_parsing_then_pairs_titles_with_texts() {
        let (records, dangling) = parse_records("T1\nText one\nT2\nText two\n");

        assert_eq!(
            records,
            vec![
                ("T1".to_string(), "Text one".to_string()),
                ("T2".to_string(), "Text two".to_string()),
            ]
        );
        assert!(dangling.is_none());
    }

    #[test]
    fn given_trailing_title_when_parsing_then_drops_it() {
        let (records, dangling) = parse_records("T1\nText one\nOrphan\n");

        assert_eq!(records.len(), 1);
        assert_eq!(dangling.as_deref(), Some("Orphan"));
    }

    #[test]
    fn given_crlf_and_empty_lines_when_parsing_then_keeps_empty_fields() {
        let (records, _) = parse_records("T1\r\n\r\n\r\nText\r\n");

        assert_eq!(
            records,
            vec![
                ("T1".to_string(), String::new()),
                (String::new(), "Text".to_string()),
            ]
        );
    }

    #[test]
    fn given_out_of_band_characters_when_parsing_then_accepts_as_is() {
        let (records, _) = parse_records("Hello!\n#tag @me\n");

        assert_eq!(records[0].0, "Hello!");
        assert_eq!(records[0].1, "#tag @me");
    }

    #[test]
    fn given_missing_file_when_loading_then_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FlatFileStore::new(temp_dir.path().join("notes.txt")).unwrap();

        let records = store.load().unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn given_notes_when_saving_then_writes_two_lines_per_note() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        let mut store = FlatFileStore::new(&path).unwrap();
        let collection = NoteCollection::from_records(vec![
            ("A".to_string(), "alpha".to_string()),
            ("B".to_string(), "beta".to_string()),
        ]);

        store.save(collection.as_slice()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "A\nalpha\nB\nbeta\n");
    }

    #[test]
    fn given_existing_file_when_saving_empty_collection_then_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "Old\nnote\n").unwrap();
        let mut store = FlatFileStore::new(&path).unwrap();

        store.save(&[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn given_invalid_utf8_when_loading_then_replaces_bad_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, b"Caf\xe9\nalpha\n").unwrap();
        let mut store = FlatFileStore::new(&path).unwrap();

        let records = store.load().unwrap();

        assert_eq!(
            records,
            vec![("Caf\u{FFFD}".to_string(), "alpha".to_string())]
        );
    }

    #[test]
    fn given_read_only_file_when_saving_then_returns_storage_error_and_keeps_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "A\nalpha\n").unwrap();
        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&path, permissions).unwrap();
        let mut store = FlatFileStore::new(&path).unwrap();

        let result = store.save(&[]);

        assert!(matches!(result, Err(DomainError::Storage(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "A\nalpha\n");
    }

    #[test]
    fn given_directory_path_when_creating_store_then_returns_error() {
        let temp_dir = TempDir::new().unwrap();

        let result = FlatFileStore::new(temp_dir.path());

        assert!(result.is_err());
    }

    #[test]
    fn given_relative_file_name_when_resolving_target_dir_then_uses_current_dir() {
        let store = FlatFileStore::new("notes.txt").unwrap();

        assert_eq!(store.target_dir(), Path::new("."));
    }
}
