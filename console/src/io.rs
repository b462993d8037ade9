//! Terminal input/output and the blocking dialogs built on it

use std::io::{self, BufRead, Write};
use log::warn;
use test_registry_core::Prompter;

/// Line-based terminal shared by the command loop and the dialogs
#[derive(Debug)]
pub struct ConsoleIo<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    /// Wrap a reader and a writer
    pub fn new(reader: R, writer: W) -> Self {
        ConsoleIo { reader, writer }
    }

    /// Read one line, `None` at end of input
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Write text and flush
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    /// The underlying writer
    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn ask(&mut self, prompt: &str) -> io::Result<bool> {
        self.print(&format!("{} [y/N]: ", prompt))?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

impl<R: BufRead, W: Write> Prompter for ConsoleIo<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        // An unreadable terminal never confirms a destructive action
        self.ask(prompt).unwrap_or_else(|e| {
            warn!("Confirmation failed: {}", e);
            false
        })
    }

    fn notify(&mut self, message: &str) {
        if let Err(e) = self.print(&format!("! {}\n", message)) {
            warn!("Alert not shown: {}", e);
        }
    }
}
