//! Form field identifiers
//!
//! Every editable value of a test record is addressed through [`Field`], so
//! validation and draft updates are matched exhaustively instead of being
//! dispatched on raw field-name strings.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use serde::{Serialize, Deserialize};

use crate::error::CoreError;

/// One of the five editable fields of a test record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Name of the test (letters and spaces)
    TestName,

    /// Type of the test (member of the test type set)
    TestType,

    /// Email address of the tester
    TesterEmail,

    /// Mobile number of the tester
    TesterMobile,

    /// Alternative contact number
    AlternativeNo,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 5] = [
        Field::TestName,
        Field::TestType,
        Field::TesterEmail,
        Field::TesterMobile,
        Field::AlternativeNo,
    ];

    /// Wire name of the field, as used by the form and in serialized records
    pub fn name(&self) -> &'static str {
        match self {
            Field::TestName => "testName",
            Field::TestType => "testType",
            Field::TesterEmail => "testerEmail",
            Field::TesterMobile => "testerMobile",
            Field::AlternativeNo => "alternativeNo",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Field::TestName => "Test Name",
            Field::TestType => "Test Type",
            Field::TesterEmail => "Tester Email",
            Field::TesterMobile => "Tester Mobile No",
            Field::AlternativeNo => "Alternative No",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_names() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_parse_unknown_field() {
        // Timestamps are not editable through the form
        let err = "creationDate".parse::<Field>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownField(name) if name == "creationDate"));

        assert!("TestName".parse::<Field>().is_err());
    }

    #[test]
    fn test_serialized_name_matches_wire_name() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.name()));
        }
    }
}
