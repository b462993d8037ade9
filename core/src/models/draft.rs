//! The in-progress record bound to the form

use serde::{Serialize, Deserialize};

use super::field::Field;
use super::record::TestRecord;

/// Mode of the form, derived from the draft's id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    /// No id yet: submitting inserts a new record
    Create,

    /// Editing the stored record with this id
    Edit(u64),
}

/// The single in-progress record mirrored into the form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// Id of the record being edited, `None` in create mode
    pub test_id: Option<u64>,

    /// Name of the test
    pub test_name: String,

    /// Type of the test
    pub test_type: String,

    /// Email address of the tester
    pub tester_email: String,

    /// Mobile number of the tester
    pub tester_mobile: String,

    /// Alternative contact number
    pub alternative_no: String,

    /// Creation timestamp carried over from the record being edited
    pub creation_date: Option<String>,

    /// Last update timestamp carried over from the record being edited
    pub last_updation_date: Option<String>,
}

impl Draft {
    /// Create an empty draft in create mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate a draft wholesale from a stored record
    pub fn from_record(record: &TestRecord) -> Self {
        Draft {
            test_id: Some(record.test_id),
            test_name: record.test_name.clone(),
            test_type: record.test_type.clone(),
            tester_email: record.tester_email.clone(),
            tester_mobile: record.tester_mobile.clone(),
            alternative_no: record.alternative_no.clone(),
            creation_date: Some(record.creation_date.clone()),
            last_updation_date: record.last_updation_date.clone(),
        }
    }

    /// Current mode of the form
    pub fn mode(&self) -> DraftMode {
        match self.test_id {
            Some(id) => DraftMode::Edit(id),
            None => DraftMode::Create,
        }
    }

    /// Label of the submit action for the current mode
    pub fn action_label(&self) -> &'static str {
        match self.mode() {
            DraftMode::Create => "Submit",
            DraftMode::Edit(_) => "Update",
        }
    }

    /// Get the value of an editable field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::TestName => &self.test_name,
            Field::TestType => &self.test_type,
            Field::TesterEmail => &self.tester_email,
            Field::TesterMobile => &self.tester_mobile,
            Field::AlternativeNo => &self.alternative_no,
        }
    }

    /// Set the value of an editable field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::TestName => &mut self.test_name,
            Field::TestType => &mut self.test_type,
            Field::TesterEmail => &mut self.tester_email,
            Field::TesterMobile => &mut self.tester_mobile,
            Field::AlternativeNo => &mut self.alternative_no,
        };
        *slot = value.into();
    }

    /// Reset to the empty create-mode draft
    pub fn clear(&mut self) {
        *self = Draft::default();
    }

    /// Whether this is the empty create-mode draft
    pub fn is_empty(&self) -> bool {
        *self == Draft::default()
    }
}
