//! Line-oriented prompting with re-prompt on bad input

use std::io::{BufRead, Write};

use crate::error::Result;

/// Reads answers from `reader` and writes prompts to `writer`
///
/// Every read returns `None` at end of input.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Output stream, for messages that are not prompts
    pub fn out(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Read one line without its line terminator
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        self.writer.flush()?;
        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print `prompt`, then read a line
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.read_line()
    }

    /// Prompt until the answer parses as an integer
    pub fn read_int(&mut self, prompt: &str) -> Result<Option<i32>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<i32>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.writer, "Invalid integer, try again.")?,
            }
        }
    }

    /// Prompt until the answer parses as a number
    pub fn read_float(&mut self, prompt: &str) -> Result<Option<f32>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<f32>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.writer, "Invalid number, try again.")?,
            }
        }
    }
}
