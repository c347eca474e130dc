// src/constants.rs

/// Notes file used when `--file` is not given, relative to the working
/// directory.
pub const DEFAULT_NOTES_FILE: &str = "notes.txt";
