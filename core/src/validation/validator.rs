//! Live and submit-time validation
//!
//! Live validation recomputes the message of a single field as the user
//! types. Submit-time validation recomputes the whole error set from the
//! draft, layering required-field and cross-field checks over the format
//! rules.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use log::debug;
use serde::{Serialize, Deserialize};

use super::rules::{self, MSG_ALTERNATIVE_SAME, MSG_NAME_REQUIRED, MSG_TYPE_REQUIRED};
use crate::models::{Draft, Field, TestTypeSet};

/// Per-field error messages
///
/// Only fields with a non-empty message are stored; [`FieldErrors::message`]
/// reports an empty string for a valid field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    messages: BTreeMap<Field, String>,
}

impl FieldErrors {
    /// Message for `field`, empty when the field is valid
    pub fn message(&self, field: Field) -> &str {
        self.messages.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Set the message for `field`; an empty message marks it valid
    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.messages.remove(&field);
        } else {
            self.messages.insert(field, message);
        }
    }

    /// Whether every field is valid
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of invalid fields
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no field carries a message
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Invalid fields and their messages, in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Validate a single field value as it is typed
///
/// Returns the error message, empty when the value is valid.
pub fn validate_field(field: Field, value: &str, test_types: &TestTypeSet) -> String {
    let message = rules::check_format(field, value, test_types).unwrap_or("");
    debug!("Validated {} = {:?}: {:?}", field, value, message);
    message.to_string()
}

/// Validate the name field, as typed
pub fn validate_test_name(value: &str) -> String {
    validate_field(Field::TestName, value, &TestTypeSet::default())
}

/// Validate a phone number field, as typed
pub fn validate_mobile(value: &str) -> String {
    validate_field(Field::TesterMobile, value, &TestTypeSet::default())
}

/// Submit-time check of the alternative number against the tester mobile
///
/// Only equality (after trimming) is checked, whatever the format of
/// either value. The digit format of the alternative number is a live-input
/// rule and does not block submission.
pub fn validate_alternative(alternative_no: &str, tester_mobile: &str) -> String {
    if alternative_no.trim() == tester_mobile.trim() {
        MSG_ALTERNATIVE_SAME.to_string()
    } else {
        String::new()
    }
}

/// Validate the whole draft before it is committed
pub fn validate_submission(draft: &Draft, test_types: &TestTypeSet) -> FieldErrors {
    let mut errors = FieldErrors::default();

    for field in Field::ALL {
        let value = draft.get(field);
        let message = match field {
            Field::TestName if value.trim().is_empty() => MSG_NAME_REQUIRED.to_string(),
            Field::TestType if value.trim().is_empty() => MSG_TYPE_REQUIRED.to_string(),
            Field::TesterEmail | Field::TesterMobile if value.trim().is_empty() => {
                rules::format_message(field).to_string()
            }
            Field::AlternativeNo => validate_alternative(value, &draft.tester_mobile),
            _ => rules::check_format(field, value, test_types)
                .unwrap_or("")
                .to_string(),
        };
        errors.set(field, message);
    }

    debug!("Submission validated with {} error(s)", errors.len());
    errors
}
