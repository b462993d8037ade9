//! Console front-end for the Test Registry
//!
//! This crate renders the registry form and table as plain text and turns
//! typed commands into form events.

pub mod command;
pub mod error;
pub mod io;
pub mod render;
pub mod session;

pub use command::Command;
pub use error::{ConsoleError, Result};
pub use session::{Flow, Session};
