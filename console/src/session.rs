//! Interactive session loop
//!
//! Reads one command per line, turns it into a form event, and renders the
//! result. Alerts and delete confirmations go through the same terminal.

use std::io::{BufRead, Write};
use log::{debug, info};
use test_registry_core::{
    Clock, CoreConfig, EventOutcome, FormController, UpsertOutcome,
};

use crate::command::Command;
use crate::error::Result;
use crate::io::ConsoleIo;
use crate::render;

/// Whether the loop keeps reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command
    Continue,

    /// End the session
    Quit,
}

/// A console session over a reader/writer pair
pub struct Session<R: BufRead, W: Write, C: Clock> {
    controller: FormController<ConsoleIo<R, W>, C>,
}

impl<R: BufRead, W: Write, C: Clock> Session<R, W, C> {
    /// Create a session with its own state
    pub fn new(config: CoreConfig, reader: R, writer: W, clock: C) -> Self {
        Session {
            controller: FormController::with_clock(config, ConsoleIo::new(reader, writer), clock),
        }
    }

    /// The controller driving the state
    pub fn controller(&self) -> &FormController<ConsoleIo<R, W>, C> {
        &self.controller
    }

    fn print(&mut self, text: &str) -> Result<()> {
        self.controller.prompter_mut().print(text)?;
        Ok(())
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");
        self.print(&render::help())?;

        loop {
            self.print("> ")?;
            let line = match self.controller.prompter_mut().read_line()? {
                Some(line) => line,
                None => break,
            };

            let flow = match line.parse::<Command>() {
                Ok(command) => self.execute(command),
                Err(e) => Err(e),
            };

            match flow {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) if e.is_recoverable() => self.print(&format!("error: {}\n", e))?,
                Err(e) => return Err(e),
            }
        }

        info!("Session ended with {} record(s)", self.controller.state().records().len());
        Ok(())
    }

    /// Execute a single command
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!("Executing {:?}", command);

        if let Some(event) = command.to_event() {
            let outcome = self.controller.dispatch(event)?;
            let text = self.describe(&outcome);
            if !text.is_empty() {
                self.print(&text)?;
            }
            return Ok(Flow::Continue);
        }

        match command {
            Command::Show => {
                let text = format!(
                    "{}\n{}",
                    render::form(self.controller.state()),
                    render::table(self.controller.state())
                );
                self.print(&text)?;
            }
            Command::Json => {
                let json = serde_json::to_string_pretty(self.controller.state())?;
                self.print(&format!("{}\n", json))?;
            }
            Command::Help => self.print(&render::help())?,
            Command::Quit => return Ok(Flow::Quit),
            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn describe(&self, outcome: &EventOutcome) -> String {
        match outcome {
            EventOutcome::Changed | EventOutcome::Alerted(_) | EventOutcome::DeleteDeclined => {
                String::new()
            }
            EventOutcome::Committed(UpsertOutcome::Created(id)) => {
                format!("Created record {}\n", id)
            }
            EventOutcome::Committed(UpsertOutcome::Updated(id)) => {
                format!("Updated record {}\n", id)
            }
            EventOutcome::Rejected(_) => {
                format!("Not submitted\n{}", render::form(self.controller.state()))
            }
            EventOutcome::Editing(_) => render::form(self.controller.state()),
            EventOutcome::Deleted(id) => format!("Deleted record {}\n", id),
        }
    }
}
