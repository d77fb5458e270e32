//! Menu Module
//!
//! The interactive console loop.
//!
//! ## Responsibilities
//! - Map numbered commands onto store operations
//! - Validate input (integers, non-empty names, grade range)
//! - Checkpoint the gradebook after each successful mutation
//! - Final save on exit (or at end of input)

mod command;
mod input;
mod render;

use std::io::{BufRead, Write};

use crate::engine::Gradebook;
use crate::error::{GradebookError, Result};

pub use command::{
    sort_key_from_choice, sort_method_from_choice, MenuCommand, MenuInput, HELP_TEXT,
    INVALID_CHOICE,
};
pub use input::Prompter;
pub use render::{format_grades, write_found, write_matrix, write_stats, write_summary};

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Drive the menu until the exit command or end of input
///
/// Returns the result of the final save.
pub fn run<R: BufRead, W: Write>(gradebook: &mut Gradebook, input: R, output: W) -> Result<()> {
    let mut menu = Menu {
        gradebook,
        io: Prompter::new(input, output),
    };
    menu.run()
}

struct Menu<'g, R, W> {
    gradebook: &'g mut Gradebook,
    io: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn run(&mut self) -> Result<()> {
        let count = self.gradebook.store().len();
        if count > 0 {
            writeln!(
                self.io.out(),
                "Loaded {} student(s) from {}",
                count,
                self.gradebook.data_file().display()
            )?;
        }
        writeln!(self.io.out(), "Student Management System")?;
        self.show_help()?;

        // The final save runs even when the loop stopped on an I/O error
        let looped = self.session_loop();
        let exited = self.exit();
        looped.and(exited)
    }

    fn session_loop(&mut self) -> Result<()> {
        loop {
            let Some(line) = self.io.ask("\nChoose option (h for help): ")? else {
                return Ok(());
            };

            let flow = match MenuInput::parse(&line) {
                Some(MenuInput::Help) => self.show_help()?,
                Some(MenuInput::Command(command)) => self.dispatch(command)?,
                None => {
                    writeln!(self.io.out(), "{}", INVALID_CHOICE)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, command: MenuCommand) -> Result<Flow> {
        tracing::debug!("menu command {:?}", command);
        match command {
            MenuCommand::AddStudent => self.add_student(),
            MenuCommand::AddGrade => self.add_grade(),
            MenuCommand::ShowSummary => {
                write_summary(self.io.out(), self.gradebook.store())?;
                Ok(Flow::Continue)
            }
            MenuCommand::ShowMatrix => {
                write_matrix(self.io.out(), self.gradebook.store())?;
                Ok(Flow::Continue)
            }
            MenuCommand::Sort => self.sort(),
            MenuCommand::Search => self.search(),
            MenuCommand::Stats => {
                write_stats(self.io.out(), self.gradebook.store())?;
                Ok(Flow::Continue)
            }
            MenuCommand::Delete => self.delete(),
            MenuCommand::UpdateName => self.update_name(),
            MenuCommand::Exit => Ok(Flow::Exit),
        }
    }

    fn show_help(&mut self) -> Result<Flow> {
        writeln!(self.io.out(), "\n{}", HELP_TEXT)?;
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Commands
    // =========================================================================

    fn add_student(&mut self) -> Result<Flow> {
        let Some(id) = self.io.read_int("Enter student ID (integer): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.io.ask("Enter name: ")? else {
            return Ok(Flow::Exit);
        };
        if name.is_empty() {
            writeln!(self.io.out(), "Name cannot be empty.")?;
            return Ok(Flow::Continue);
        }

        match self.gradebook.store_mut().add(id, &name) {
            Ok(()) => {
                writeln!(self.io.out(), "Student added.")?;
                self.checkpoint()?;
            }
            Err(GradebookError::DuplicateId(_)) => {
                writeln!(self.io.out(), "Student with ID {} already exists.", id)?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn add_grade(&mut self) -> Result<Flow> {
        let Some(id) = self.io.read_int("Enter student ID: ")? else {
            return Ok(Flow::Exit);
        };
        let (min, max) = (self.gradebook.config().grade_min, self.gradebook.config().grade_max);
        let Some(grade) = self.io.read_float(&format!("Enter grade ({}-{}): ", min, max))? else {
            return Ok(Flow::Exit);
        };
        if !self.gradebook.config().accepts_grade(grade) {
            writeln!(self.io.out(), "Grade must be between {} and {}.", min, max)?;
            return Ok(Flow::Continue);
        }

        match self.gradebook.store_mut().add_grade(id, grade) {
            Ok(_) => {
                writeln!(self.io.out(), "Grade added and average recalculated.")?;
                self.checkpoint()?;
            }
            Err(GradebookError::StudentNotFound(_)) => {
                writeln!(self.io.out(), "Student with ID {} not found.", id)?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn sort(&mut self) -> Result<Flow> {
        let Some(method) = self.io.read_int(
            "Choose sorting method:\n1. Bubble Sort\n2. Insertion Sort\n3. Merge Sort\nChoose: ",
        )?
        else {
            return Ok(Flow::Exit);
        };
        let Some(key) = self.io.read_int("Sort by:\n1. ID\n2. Average\nChoose: ")? else {
            return Ok(Flow::Exit);
        };

        self.gradebook
            .store_mut()
            .sort(sort_method_from_choice(method), sort_key_from_choice(key));
        writeln!(self.io.out(), "Sorted.")?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(id) = self.io.read_int("Enter ID to search: ")? else {
            return Ok(Flow::Exit);
        };

        let store = self.gradebook.store_mut();
        match store.search_by_id(id).and_then(|idx| store.get(idx)) {
            Some(student) => write_found(self.io.out(), student)?,
            None => writeln!(self.io.out(), "Student with ID {} not found.", id)?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let Some(id) = self.io.read_int("Enter ID to delete: ")? else {
            return Ok(Flow::Exit);
        };

        match self.gradebook.store_mut().delete(id) {
            Ok(_) => {
                writeln!(self.io.out(), "Deleted student {}.", id)?;
                self.checkpoint()?;
            }
            Err(GradebookError::StudentNotFound(_)) => {
                writeln!(self.io.out(), "Student {} not found.", id)?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn update_name(&mut self) -> Result<Flow> {
        let Some(id) = self.io.read_int("Enter ID to update name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.io.ask("Enter new name: ")? else {
            return Ok(Flow::Exit);
        };
        if name.is_empty() {
            writeln!(self.io.out(), "Name cannot be empty.")?;
            return Ok(Flow::Continue);
        }

        match self.gradebook.store_mut().update_name(id, &name) {
            Ok(()) => {
                writeln!(self.io.out(), "Updated.")?;
                self.checkpoint()?;
            }
            Err(GradebookError::StudentNotFound(_)) => {
                writeln!(self.io.out(), "Student {} not found.", id)?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Save after a mutation; a failure is reported and the session goes on
    fn checkpoint(&mut self) -> Result<()> {
        if let Err(e) = self.gradebook.checkpoint() {
            tracing::warn!("autosave failed: {}", e);
            writeln!(
                self.io.out(),
                "Warning: could not save to {}: {}",
                self.gradebook.data_file().display(),
                e
            )?;
        }
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        let saved = self.gradebook.save();
        if let Err(e) = &saved {
            writeln!(
                self.io.out(),
                "Error saving to {}: {}",
                self.gradebook.data_file().display(),
                e
            )?;
        }
        writeln!(self.io.out(), "Goodbye.")?;
        self.io.out().flush()?;
        saved
    }
}
