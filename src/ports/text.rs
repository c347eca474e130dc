// src/ports/text.rs
use crate::domain::Note;
use anyhow::{Context, Result};
use serde::Serialize;

pub const NO_NOTES: &str = "No notes available.";
pub const NOTE_ADDED: &str = "Note added successfully!";
pub const NOTE_DELETED: &str = "Note deleted successfully!";
pub const NOTE_MODIFIED: &str = "Note modified successfully!";
pub const TITLE_NOT_FOUND: &str = "No note found with the given title.";
pub const TEXT_NOT_FOUND: &str = "No notes found containing the given text.";

/// Renders notes for the terminal.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_note(&self, note: &Note) -> String {
        format!("Title: {}\nText: {}\n", note.title, note.text)
    }

    /// Every note followed by a blank line, or the no-notes message.
    pub fn render_list<'a, I>(&self, notes: I) -> String
    where
        I: IntoIterator<Item = &'a Note>,
    {
        let rendered: String = notes
            .into_iter()
            .map(|n| format!("{}\n", self.render_note(n)))
            .collect();

        if rendered.is_empty() {
            format!("{NO_NOTES}\n")
        } else {
            rendered
        }
    }

    pub fn render_found(&self, note: Option<&Note>) -> String {
        match note {
            Some(note) => format!("Note found!\n{}", self.render_note(note)),
            None => format!("{TITLE_NOT_FOUND}\n"),
        }
    }

    pub fn render_matches(&self, notes: &[&Note]) -> String {
        if notes.is_empty() {
            return format!("{TEXT_NOT_FOUND}\n");
        }
        let mut out = String::from("Notes containing the text:\n");
        for note in notes {
            out.push_str(&self.render_note(note));
        }
        out
    }

    pub fn render_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).context("Failed to serialize notes to JSON")
    }
}
