//! Menu command definitions
//!
//! Numbered commands typed at the main prompt.

use crate::sort::{SortKey, SortMethod};

/// Command codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuCommand {
    Exit = 0,
    AddStudent = 1,
    AddGrade = 2,
    ShowSummary = 3,
    ShowMatrix = 4,
    Sort = 5,
    Search = 6,
    Stats = 7,
    Delete = 8,
    UpdateName = 9,
}

impl MenuCommand {
    /// Map a numeric choice to a command
    pub fn from_code(code: i64) -> Option<Self> {
        let command = match code {
            0 => MenuCommand::Exit,
            1 => MenuCommand::AddStudent,
            2 => MenuCommand::AddGrade,
            3 => MenuCommand::ShowSummary,
            4 => MenuCommand::ShowMatrix,
            5 => MenuCommand::Sort,
            6 => MenuCommand::Search,
            7 => MenuCommand::Stats,
            8 => MenuCommand::Delete,
            9 => MenuCommand::UpdateName,
            _ => return None,
        };
        Some(command)
    }
}

/// A parsed line from the main prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    /// `h` or `H`
    Help,

    /// A numbered command
    Command(MenuCommand),
}

impl MenuInput {
    /// Parse a prompt line, `None` if it is neither help nor a known code
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("h") {
            return Some(MenuInput::Help);
        }
        let code = line.parse::<i64>().ok()?;
        MenuCommand::from_code(code).map(MenuInput::Command)
    }
}

/// `1` bubble, `2` insertion, anything else merge
pub fn sort_method_from_choice(choice: i32) -> SortMethod {
    match choice {
        1 => SortMethod::Bubble,
        2 => SortMethod::Insertion,
        _ => SortMethod::Merge,
    }
}

/// `1` id, anything else average
pub fn sort_key_from_choice(choice: i32) -> SortKey {
    match choice {
        1 => SortKey::Id,
        _ => SortKey::Average,
    }
}

pub const HELP_TEXT: &str = "\
Menu:
1 - Add student
2 - Add grade to student
3 - Display all students (summary)
4 - Display grade matrix (detailed)
5 - Sort students (choose method and key)
6 - Search student by ID (binary search)
7 - Class statistics (highest/lowest average)
8 - Delete student
9 - Update student name
0 - Exit";

pub const INVALID_CHOICE: &str = "Invalid choice. Enter 0-9 or 'h' for help.";
