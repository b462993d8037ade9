//! Event dispatch between a presentation layer and the application state
//!
//! A renderer turns user actions into [`FormEvent`]s and hands them to a
//! [`FormController`], which owns the [`AppState`] together with the
//! prompter and clock capabilities the transitions need.

use log::debug;

use crate::config::CoreConfig;
use crate::error::{CoreError, Result};
use crate::models::Field;
use crate::prompt::Prompter;
use crate::state::AppState;
use crate::store::UpsertOutcome;
use crate::utils::{Clock, SystemClock};
use crate::validation::FieldErrors;

/// User action reported by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A form field was edited
    FieldChanged {
        /// Edited field
        field: Field,
        /// Raw value after the edit
        value: String,
    },

    /// The new test type input was edited
    PendingTestTypeChanged(String),

    /// "Create test type" was pressed
    CreateTestType,

    /// "Submit" / "Update" was pressed
    Submit,

    /// "Edit" was pressed on a record
    Edit(u64),

    /// "Delete" was pressed on a record
    Delete(u64),
}

/// What an event did to the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Draft or pending input changed
    Changed,

    /// The draft was committed
    Committed(UpsertOutcome),

    /// Submission rejected; the state carries the same error set
    Rejected(FieldErrors),

    /// An alert was shown and nothing changed
    Alerted(String),

    /// The draft now edits this record
    Editing(u64),

    /// The record was deleted
    Deleted(u64),

    /// The user declined the delete
    DeleteDeclined,
}

/// Owner of the application state and its capabilities
#[derive(Debug)]
pub struct FormController<P: Prompter, C: Clock = SystemClock> {
    state: AppState,
    prompter: P,
    clock: C,
}

impl<P: Prompter> FormController<P, SystemClock> {
    /// Create a controller using the wall clock
    pub fn new(config: CoreConfig, prompter: P) -> Self {
        FormController::with_clock(config, prompter, SystemClock)
    }
}

impl<P: Prompter, C: Clock> FormController<P, C> {
    /// Create a controller with an explicit clock
    pub fn with_clock(config: CoreConfig, prompter: P, clock: C) -> Self {
        FormController {
            state: AppState::new(config),
            prompter,
            clock,
        }
    }

    /// Current state, for rendering
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The prompter capability
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Mutable access to the prompter capability
    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    /// Mutable access to the clock
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Apply a field edit addressed by its wire name
    pub fn change_field(&mut self, name: &str, value: impl Into<String>) -> Result<EventOutcome> {
        let field: Field = name.parse()?;
        self.dispatch(FormEvent::FieldChanged { field, value: value.into() })
    }

    /// Apply one user action
    ///
    /// Validation failures and rejected test types are reported through the
    /// outcome; only actions on records that do not exist return an error.
    pub fn dispatch(&mut self, event: FormEvent) -> Result<EventOutcome> {
        debug!("Dispatching {:?}", event);

        match event {
            FormEvent::FieldChanged { field, value } => {
                self.state.change_field(field, value);
                Ok(EventOutcome::Changed)
            }
            FormEvent::PendingTestTypeChanged(name) => {
                self.state.set_pending_test_type(name);
                Ok(EventOutcome::Changed)
            }
            FormEvent::CreateTestType => match self.state.create_pending_test_type() {
                Ok(()) => Ok(EventOutcome::Changed),
                Err(e @ (CoreError::EmptyTestType | CoreError::DuplicateTestType(_))) => {
                    let message = e.to_string();
                    self.prompter.notify(&message);
                    Ok(EventOutcome::Alerted(message))
                }
                Err(e) => Err(e),
            },
            FormEvent::Submit => match self.state.submit(&self.clock) {
                Ok(outcome) => Ok(EventOutcome::Committed(outcome)),
                Err(CoreError::ValidationRejected(errors)) => Ok(EventOutcome::Rejected(errors)),
                Err(e) => Err(e),
            },
            FormEvent::Edit(test_id) => {
                self.state.select_for_edit(test_id)?;
                Ok(EventOutcome::Editing(test_id))
            }
            FormEvent::Delete(test_id) => {
                if self.state.delete(test_id, &mut self.prompter)? {
                    Ok(EventOutcome::Deleted(test_id))
                } else {
                    Ok(EventOutcome::DeleteDeclined)
                }
            }
        }
    }
}
