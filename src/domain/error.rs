// src/domain/error.rs
use crate::domain::NoteId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error(
        "Invalid input! Only letters, numbers, spaces, '.', and ',' are allowed ({field}: {value:?})"
    )]
    InvalidInput { field: &'static str, value: String },
    #[error("Note with the given title not found: {0}")]
    TitleNotFound(String),
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),
    #[error("Storage error: {0}")]
    Storage(String),
}
