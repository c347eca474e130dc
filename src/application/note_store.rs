// src/application/note_store.rs
use crate::domain::{DomainError, Note};

/// Persistence seam for the note collection.
pub trait NoteStore {
    /// Read every persisted (title, text) record in stored order.
    fn load(&mut self) -> Result<Vec<(String, String)>, DomainError>;

    /// Replace the persisted records with `notes`, in order.
    fn save(&mut self, notes: &[Note]) -> Result<(), DomainError>;
}
