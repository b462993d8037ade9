//! Stored test records
//!
//! A [`TestRecord`] is a committed row of the registry. It is only ever
//! produced by the record store from a validated [`Draft`](super::Draft).

use std::fmt::{Debug, Formatter, Result as FmtResult};
use serde::{Serialize, Deserialize};

use super::field::Field;

/// A committed test record
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecord {
    /// Identifier assigned by the store
    pub test_id: u64,

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

    /// Timestamp of the first insertion
    pub creation_date: String,

    /// Timestamp of the most recent update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updation_date: Option<String>,
}

impl Debug for TestRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "TestRecord {{ id: {}, name: {:?}, type: {:?} }}",
            self.test_id, self.test_name, self.test_type
        )
    }
}

impl TestRecord {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TestRecord {
        TestRecord {
            test_id: 3,
            test_name: "Smoke".to_string(),
            test_type: "PHP".to_string(),
            tester_email: "qa@example.com".to_string(),
            tester_mobile: "1234567890".to_string(),
            alternative_no: "0987654321".to_string(),
            creation_date: "01/02/2024, 10:00:00 AM".to_string(),
            last_updation_date: None,
        }
    }

    #[test]
    fn test_field_access() {
        let record = sample();
        assert_eq!(record.get(Field::TestName), "Smoke");
        assert_eq!(record.get(Field::TesterMobile), "1234567890");
        assert_eq!(record.get(Field::AlternativeNo), "0987654321");
    }

    #[test]
    fn test_camel_case_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["testId"], 3);
        assert_eq!(value["testerEmail"], "qa@example.com");
        assert_eq!(value["creationDate"], "01/02/2024, 10:00:00 AM");
        // Absent until the first update
        assert!(value.get("lastUpdationDate").is_none());
    }
}
