//! Console command parsing

use std::str::FromStr;
use test_registry_core::{Field, FormEvent};

use crate::error::ConsoleError;

/// One line of console input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `set <field> <value>`: edit a form field (value may be empty)
    Set(Field, String),

    /// `type <name>`: edit the new test type input
    Type(String),

    /// `create-type`: add the pending test type
    CreateType,

    /// `submit`: submit or update the draft
    Submit,

    /// `edit <id>`: load a record into the form
    Edit(u64),

    /// `delete <id>`: delete a record after confirmation
    Delete(u64),

    /// `show`: render the form and the table
    Show,

    /// `json`: dump the state as JSON
    Json,

    /// `help`: list commands
    Help,

    /// `quit`: end the session
    Quit,
}

impl Command {
    /// Form event this command triggers, if any
    pub fn to_event(&self) -> Option<FormEvent> {
        match self {
            Command::Set(field, value) => Some(FormEvent::FieldChanged {
                field: *field,
                value: value.clone(),
            }),
            Command::Type(name) => Some(FormEvent::PendingTestTypeChanged(name.clone())),
            Command::CreateType => Some(FormEvent::CreateTestType),
            Command::Submit => Some(FormEvent::Submit),
            Command::Edit(id) => Some(FormEvent::Edit(*id)),
            Command::Delete(id) => Some(FormEvent::Delete(*id)),
            Command::Show | Command::Json | Command::Help | Command::Quit => None,
        }
    }
}

fn parse_id(arg: &str) -> Result<u64, ConsoleError> {
    arg.trim()
        .parse()
        .map_err(|_| ConsoleError::Command(format!("expected a record id, got {:?}", arg.trim())))
}

impl FromStr for Command {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (verb, rest) = match trimmed.split_once(' ') {
            Some((verb, rest)) => (verb, rest),
            None => (trimmed, ""),
        };

        match verb {
            "set" => {
                let (name, value) = rest.split_once(' ').unwrap_or((rest, ""));
                if name.is_empty() {
                    return Err(ConsoleError::Command("usage: set <field> <value>".to_string()));
                }
                Ok(Command::Set(name.parse()?, value.to_string()))
            }
            "type" => Ok(Command::Type(rest.to_string())),
            "create-type" => Ok(Command::CreateType),
            "submit" | "update" => Ok(Command::Submit),
            "edit" => Ok(Command::Edit(parse_id(rest)?)),
            "delete" => Ok(Command::Delete(parse_id(rest)?)),
            "show" | "" => Ok(Command::Show),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ConsoleError::Command(format!("unknown command {:?}", other))),
        }
    }
}
