//! # Test Registry Core
//!
//! Validation and state for the test registry form: the field rules, the
//! ordered record store with its upsert/delete operations, the extensible
//! test type set, and the single-owner application state a presentation
//! layer renders from.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod prompt;
pub mod state;
pub mod store;
pub mod utils;
pub mod validation;

/// Re-export common types for ease of use
pub use config::CoreConfig;
pub use controller::{EventOutcome, FormController, FormEvent};
pub use error::{CoreError, Result};
pub use models::{Draft, DraftMode, Field, TestRecord, TestTypeSet};
pub use prompt::Prompter;
pub use state::AppState;
pub use store::{classify, RecordStore, RowCategory, UpsertOutcome};
pub use utils::{Clock, FixedClock, SystemClock};
pub use validation::FieldErrors;

/// Version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
