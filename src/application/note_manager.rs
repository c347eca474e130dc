// src/application/note_manager.rs
use crate::application::NoteStore;
use crate::domain::validation::validate_field;
use crate::domain::{DomainError, Note, NoteCollection, NoteId};
use tracing::{debug, error, info};

/// Owns the note collection for one session and keeps it in sync with a
/// [`NoteStore`].
///
/// The store is read once on construction. Mutations stay in memory until
/// [`save`](Self::save) or [`close`](Self::close) is called; dropping a
/// manager with unsaved changes writes them as a last resort and logs any
/// failure.
pub struct NoteManager<S: NoteStore> {
    store: S,
    notes: NoteCollection,
    dirty: bool,
}

impl<S: NoteStore> NoteManager<S> {
    pub fn new(mut store: S) -> Result<Self, DomainError> {
        let records = store.load()?;
        let notes = NoteCollection::from_records(records);
        debug!(count = notes.len(), "Loaded notes into collection");
        Ok(Self {
            store,
            notes,
            dirty: false,
        })
    }

    /// Validate and append a note; returns its handle.
    pub fn add(&mut self, title: &str, text: &str) -> Result<NoteId, DomainError> {
        validate_field("title", title)?;
        validate_field("text", text)?;

        let id = self.notes.push(title.to_string(), text.to_string());
        self.dirty = true;
        debug!(%id, title, "Added note");
        Ok(id)
    }

    /// All notes in collection order.
    pub fn list(&self) -> &[Note] {
        self.notes.as_slice()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(id)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Note> {
        self.notes.find_by_title(title)
    }

    pub fn find_by_text(&self, needle: &str) -> Vec<&Note> {
        self.notes.find_by_text(needle)
    }

    /// Remove every note with this exact title; returns the number removed.
    pub fn delete_by_title(&mut self, title: &str) -> Result<usize, DomainError> {
        let removed = self.notes.remove_by_title(title);
        if removed == 0 {
            debug!(title, "No note matched for deletion");
            return Err(DomainError::TitleNotFound(title.to_string()));
        }

        self.dirty = true;
        debug!(title, removed, "Deleted notes");
        Ok(removed)
    }

    pub fn set_title(&mut self, id: NoteId, new_title: &str) -> Result<(), DomainError> {
        validate_field("title", new_title)?;
        let note = self
            .notes
            .get_mut(id)
            .ok_or(DomainError::NoteNotFound(id))?;

        note.title = new_title.to_string();
        self.dirty = true;
        debug!(%id, new_title, "Modified note title");
        Ok(())
    }

    pub fn set_text(&mut self, id: NoteId, new_text: &str) -> Result<(), DomainError> {
        validate_field("text", new_text)?;
        let note = self
            .notes
            .get_mut(id)
            .ok_or(DomainError::NoteNotFound(id))?;

        note.text = new_text.to_string();
        self.dirty = true;
        debug!(%id, "Modified note text");
        Ok(())
    }

    /// True if the collection changed since it was loaded or last saved.
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Write the whole collection to the store.
    pub fn save(&mut self) -> Result<(), DomainError> {
        self.store.save(self.notes.as_slice())?;
        self.dirty = false;
        info!(count = self.notes.len(), "Saved notes");
        Ok(())
    }

    /// Save and end the session, surfacing any write failure.
    pub fn close(mut self) -> Result<(), DomainError> {
        let result = self.save();
        // the caller owns the error now; don't retry in drop
        self.dirty = false;
        result
    }
}

impl<S: NoteStore> Drop for NoteManager<S> {
    fn drop(&mut self) {
        if !self.dirty {
            return;
        }
        if let Err(e) = self.save() {
            error!(error = %e, "Failed to save notes on shutdown");
        }
    }
}
