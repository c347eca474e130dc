// src/cli/menu.rs
use crate::application::{NoteManager, NoteStore};
use crate::domain::DomainError;
use crate::ports::text::{NOTE_ADDED, NOTE_DELETED, NOTE_MODIFIED, TITLE_NOT_FOUND};
use crate::ports::TextPresenter;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

const MENU: &str = "Menu:
1. Add Note
2. Display Notes
3. Search Note by Title
4. Search Notes by Text
5. Delete Note by Title
6. Modify Note
7. Exit
";

enum Step {
    Continue,
    Exit,
}

/// Line-oriented interactive menu over any reader and writer.
///
/// Domain errors are printed as `Error: ...` and the session continues.
/// End of input ends the session like choosing Exit.
pub struct Menu<R, W> {
    input: R,
    output: W,
    presenter: TextPresenter,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            presenter: TextPresenter::new(),
        }
    }

    pub fn run<S: NoteStore>(&mut self, manager: &mut NoteManager<S>) -> Result<()> {
        loop {
            self.output.write_all(MENU.as_bytes())?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                debug!("Input closed, leaving menu");
                break;
            };

            if let Step::Exit = self.dispatch(choice.trim(), manager)? {
                break;
            }
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn dispatch<S: NoteStore>(&mut self, choice: &str, manager: &mut NoteManager<S>) -> Result<Step> {
        debug!(choice, "Menu choice");
        match choice {
            "1" => {
                let Some(title) = self.prompt("Enter note title: ")? else {
                    return Ok(Step::Exit);
                };
                let Some(text) = self.prompt("Enter note text: ")? else {
                    return Ok(Step::Exit);
                };
                let result = manager.add(&title, &text).map(|_| NOTE_ADDED);
                self.report(result)?;
            }
            "2" => {
                let listing = self.presenter.render_list(manager.list());
                self.write(&listing)?;
            }
            "3" => {
                let Some(title) = self.prompt("Enter title to search: ")? else {
                    return Ok(Step::Exit);
                };
                let found = self.presenter.render_found(manager.find_by_title(&title));
                self.write(&found)?;
            }
            "4" => {
                let Some(text) = self.prompt("Enter text to search: ")? else {
                    return Ok(Step::Exit);
                };
                let matches = self.presenter.render_matches(&manager.find_by_text(&text));
                self.write(&matches)?;
            }
            "5" => {
                let Some(title) = self.prompt("Enter title to delete: ")? else {
                    return Ok(Step::Exit);
                };
                let result = manager.delete_by_title(&title).map(|_| NOTE_DELETED);
                self.report(result)?;
            }
            "6" => return self.modify(manager),
            "7" => {
                self.write("Exiting program.\n")?;
                return Ok(Step::Exit);
            }
            _ => self.write("Invalid choice. Please try again.\n")?,
        }
        Ok(Step::Continue)
    }

    fn modify<S: NoteStore>(&mut self, manager: &mut NoteManager<S>) -> Result<Step> {
        let Some(title) = self.prompt("Enter title of the note to modify: ")? else {
            return Ok(Step::Exit);
        };
        let Some(id) = manager.find_by_title(&title).map(|n| n.id) else {
            self.write(&format!("{TITLE_NOT_FOUND}\n"))?;
            return Ok(Step::Continue);
        };

        let Some(sub_choice) = self.prompt("1. Modify Title\n2. Modify Text\nEnter your choice: ")?
        else {
            return Ok(Step::Exit);
        };

        let result = match sub_choice.trim() {
            "1" => {
                let Some(new_title) = self.prompt("Enter new title: ")? else {
                    return Ok(Step::Exit);
                };
                manager.set_title(id, &new_title)
            }
            "2" => {
                let Some(new_text) = self.prompt("Enter new text: ")? else {
                    return Ok(Step::Exit);
                };
                manager.set_text(id, &new_text)
            }
            _ => {
                self.write("Invalid choice.\n")?;
                return Ok(Step::Continue);
            }
        };
        self.report(result.map(|_| NOTE_MODIFIED))?;
        Ok(Step::Continue)
    }

    fn report(&mut self, result: Result<&str, DomainError>) -> Result<()> {
        match result {
            Ok(ack) => self.write(&format!("{ack}\n")),
            Err(e) => self.write(&format!("Error: {e}\n")),
        }
    }

    fn write(&mut self, s: &str) -> Result<()> {
        self.output
            .write_all(s.as_bytes())
            .context("Failed to write menu output")
    }

    /// Print `message` and read one line without its line ending.
    /// Returns `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        self.write(message)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read menu input")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockNoteStore;

    fn run_session(manager: &mut NoteManager<MockNoteStore>, input: &str) -> String {
        let mut menu = Menu::new(input.as_bytes(), Vec::new());
        menu.run(manager).expect("Menu should run");
        String::from_utf8(menu.into_output()).expect("Output should be UTF-8")
    }

    fn empty_manager() -> NoteManager<MockNoteStore> {
        NoteManager::new(MockNoteStore::builder().build()).expect("Load should succeed")
    }

    #[test]
    fn given_add_then_display_when_running_menu_then_lists_note() {
        // Arrange
        let mut manager = empty_manager();

        // Act
        let output = run_session(&mut manager, "1\nTitle 1\nContent 1\n2\n7\n");

        // Assert
        assert!(output.contains("Note added successfully!"));
        assert!(output.contains("Title: Title 1\nText: Content 1\n"));
        assert!(output.contains("Exiting program."));
    }

    #[test]
    fn given_invalid_title_when_adding_then_reports_error_and_continues() {
        let mut manager = empty_manager();

        let output = run_session(&mut manager, "1\nBad!Title\ntext\n2\n7\n");

        assert!(output.contains("Error: Invalid input!"));
        assert!(output.contains("No notes available."));
        assert!(manager.is_empty());
    }

    #[test]
    fn given_unknown_title_when_deleting_then_reports_error_and_continues() {
        let mut manager = empty_manager();

        let output = run_session(&mut manager, "5\nNothing\n7\n");

        assert!(output.contains("Error: Note with the given title not found"));
        assert!(output.contains("Exiting program."));
    }

    #[test]
    fn given_modify_title_when_running_menu_then_renames_note() {
        let mut manager = empty_manager();
        manager.add("Old Title", "Old Content").unwrap();

        let output = run_session(&mut manager, "6\nOld Title\n1\nNew Title\n3\nNew Title\n7\n");

        assert!(output.contains("Note modified successfully!"));
        assert!(output.contains("Note found!\nTitle: New Title\nText: Old Content\n"));
        assert!(manager.find_by_title("Old Title").is_none());
    }

    #[test]
    fn given_modify_text_with_crlf_input_when_running_menu_then_strips_line_endings() {
        let mut manager = empty_manager();
        manager.add("Note", "before").unwrap();

        run_session(&mut manager, "6\r\nNote\r\n2\r\nafter\r\n7\r\n");

        assert_eq!(manager.find_by_title("Note").unwrap().text, "after");
    }

    #[test]
    fn given_search_by_text_when_running_menu_then_shows_matches() {
        let mut manager = empty_manager();
        manager.add("Title", "Find this specific content").unwrap();

        let output = run_session(&mut manager, "4\nspecific content\n4\nmissing\n7\n");

        assert!(output.contains("Notes containing the text:\nTitle: Title\n"));
        assert!(output.contains("No notes found containing the given text."));
    }

    #[test]
    fn given_unknown_choice_when_running_menu_then_asks_again() {
        let mut manager = empty_manager();

        let output = run_session(&mut manager, "42\n7\n");

        assert!(output.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn given_end_of_input_when_running_menu_then_stops_without_exit_message() {
        let mut manager = empty_manager();

        let output = run_session(&mut manager, "1\nOnly title\n");

        assert!(!output.contains("Exiting program."));
        assert!(manager.is_empty());
    }
}
