// src/domain/mod.rs
pub mod collection;
pub mod error;
pub mod note;
pub mod validation;

pub use collection::NoteCollection;
pub use error::DomainError;
pub use note::{Note, NoteId};
