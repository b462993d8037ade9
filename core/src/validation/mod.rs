//! Field validation
//!
//! This module provides the format rules for each form field and the live
//! and submit-time validators built on them.

pub mod rules;
mod validator;

pub use validator::{
    validate_alternative, validate_field, validate_mobile, validate_submission,
    validate_test_name, FieldErrors,
};
