// src/domain/collection.rs
use crate::domain::{Note, NoteId};

/// Ordered in-memory note store.
///
/// Insertion order is display order. Titles are not unique. Every lookup is
/// a linear scan.
#[derive(Debug, Default)]
pub struct NoteCollection {
    notes: Vec<Note>,
    next_id: u64,
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from (title, text) pairs, preserving their order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut collection = Self::new();
        for (title, text) in records {
            collection.push(title, text);
        }
        collection
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    /// Append a note and return its handle. No validation happens here.
    pub fn push(&mut self, title: String, text: String) -> NoteId {
        let id = NoteId(self.next_id);
        self.next_id += 1;
        self.notes.push(Note { id, title, text });
        id
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id == id)
    }

    /// First note whose title equals `title` exactly.
    pub fn find_by_title(&self, title: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.title == title)
    }

    /// Every note whose text contains `needle`, in collection order.
    pub fn find_by_text(&self, needle: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.text.contains(needle)).collect()
    }

    /// Remove every note titled `title`; returns how many were removed.
    pub fn remove_by_title(&mut self, title: &str) -> usize {
        let before = self.notes.len();
        self.notes.retain(|n| n.title != title);
        before - self.notes.len()
    }
}
