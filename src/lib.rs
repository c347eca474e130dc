// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{bail, Context, Result};
use application::NoteManager;
use cli::args::{Args, Command};
use cli::menu::Menu;
use infrastructure::FlatFileStore;
use ports::text::{NOTE_ADDED, NOTE_DELETED, NOTE_MODIFIED, TITLE_NOT_FOUND};
use ports::TextPresenter;
use std::io::{self, Write};
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notekeeper with arguments");

    // Initialize infrastructure
    let store = FlatFileStore::new(&args.file)?;
    info!(path = %store.path().display(), "Using notes file");

    // Initialize application
    let mut manager = NoteManager::new(store)
        .with_context(|| format!("Failed to load notes from {}", args.file.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            info!(path = %args.file.display(), "Starting interactive menu");
            let stdin = io::stdin();
            let mut menu = Menu::new(stdin.lock(), &mut out);
            menu.run(&mut manager)?;
        }
        command => execute(&mut manager, command, &mut out)?,
    }

    if !manager.has_unsaved_changes() {
        debug!("No changes to save");
        return Ok(());
    }
    manager
        .close()
        .with_context(|| format!("Failed to save notes to {}", args.file.display()))
}

/// Run a single one-shot command against the manager.
pub fn execute<S, W>(manager: &mut NoteManager<S>, command: Command, out: &mut W) -> Result<()>
where
    S: application::NoteStore,
    W: Write,
{
    let presenter = TextPresenter::new();

    match command {
        Command::Add { title, text } => {
            manager.add(&title, &text)?;
            writeln!(out, "{NOTE_ADDED}")?;
        }
        Command::List { json } => {
            if json {
                writeln!(out, "{}", presenter.render_json(manager.list())?)?;
            } else {
                write!(out, "{}", presenter.render_list(manager.list()))?;
            }
        }
        Command::Find { title, json } => {
            let note = manager.find_by_title(&title);
            if json {
                writeln!(out, "{}", presenter.render_json(&note)?)?;
            } else {
                write!(out, "{}", presenter.render_found(note))?;
            }
        }
        Command::Search { text, json } => {
            let matches = manager.find_by_text(&text);
            if json {
                writeln!(out, "{}", presenter.render_json(&matches)?)?;
            } else {
                write!(out, "{}", presenter.render_matches(&matches))?;
            }
        }
        Command::Delete { title } => {
            let removed = manager.delete_by_title(&title)?;
            info!(%title, removed, "Deleted notes");
            writeln!(out, "{NOTE_DELETED}")?;
        }
        Command::Rename { title, new_title } => {
            let id = manager
                .find_by_title(&title)
                .map(|n| n.id)
                .context(TITLE_NOT_FOUND)?;
            manager.set_title(id, &new_title)?;
            writeln!(out, "{NOTE_MODIFIED}")?;
        }
        Command::Edit { title, new_text } => {
            let id = manager
                .find_by_title(&title)
                .map(|n| n.id)
                .context(TITLE_NOT_FOUND)?;
            manager.set_text(id, &new_text)?;
            writeln!(out, "{NOTE_MODIFIED}")?;
        }
        Command::Menu => bail!("The interactive menu is not a one-shot command"),
    }

    Ok(())
}
