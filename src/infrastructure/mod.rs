// src/infrastructure/mod.rs
pub mod flat_file;

pub use flat_file::FlatFileStore;
