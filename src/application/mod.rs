// src/application/mod.rs
pub mod note_manager;
pub mod note_store;

pub use note_manager::NoteManager;
pub use note_store::NoteStore;
