// src/cli/args.rs
use crate::constants::DEFAULT_NOTES_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(disable_help_subcommand = true)]
pub struct Args {
    /// Path to the notes file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_NOTES_FILE, global = true)]
    pub file: PathBuf,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute; the interactive menu runs when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a note
    Add {
        #[arg(value_name = "TITLE")]
        title: String,
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Show all notes
    List {
        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the first note with this exact title
    Find {
        #[arg(value_name = "TITLE")]
        title: String,

        /// Output note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show all notes whose text contains a substring
    Search {
        #[arg(value_name = "TEXT")]
        text: String,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete every note with this exact title
    Delete {
        #[arg(value_name = "TITLE")]
        title: String,
    },

    /// Change the title of the first note with this title
    Rename {
        #[arg(value_name = "TITLE")]
        title: String,
        #[arg(value_name = "NEW_TITLE")]
        new_title: String,
    },

    /// Change the text of the first note with this title
    Edit {
        #[arg(value_name = "TITLE")]
        title: String,
        #[arg(value_name = "NEW_TEXT")]
        new_text: String,
    },

    /// Run the interactive menu
    Menu,
}
