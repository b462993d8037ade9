//! Data models for the Test Registry
//!
//! This module provides the data structures shared by validation, the
//! record store and the application state: form fields, committed records,
//! the in-progress draft and the test type set.

mod draft;
mod field;
mod record;
mod test_type;

pub use draft::{Draft, DraftMode};
pub use field::Field;
pub use record::TestRecord;
pub use test_type::{TestTypeSet, DEFAULT_TEST_TYPES};
