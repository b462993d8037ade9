//! Field format rules and their user-facing messages

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Field, TestTypeSet};

/// Test name contains a character other than a letter or space
pub const MSG_NAME_CHARACTERS: &str = "Only Character Should come.";

/// Test name left blank on submit
pub const MSG_NAME_REQUIRED: &str = "Test Name is required.";

/// Test type not in the test type set
pub const MSG_TYPE_INVALID: &str = "Please select a valid test type.";

/// Test type left blank on submit
pub const MSG_TYPE_REQUIRED: &str = "Test Type is required.";

/// Email does not look like `local@domain.tld`
pub const MSG_EMAIL_INVALID: &str = "Please enter a valid email address.";

/// Phone number is not exactly ten digits
pub const MSG_PHONE_INVALID: &str = "Please enter a valid 10-digit number.";

/// Alternative number repeats the tester mobile number
pub const MSG_ALTERNATIVE_SAME: &str =
    "Alternative No. should not be the same as Tester Mobile No.";

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]*$").unwrap());

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

// ASCII only: `\d` would also accept non-Latin digits
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// Letters and spaces only; the empty string passes
pub fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

/// Basic `local@domain.tld` shape
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Exactly ten digits
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Apply the format rule of `field` to `value`
///
/// Returns the message for the first violated rule, `None` when the value
/// is well-formed.
pub fn check_format(field: Field, value: &str, test_types: &TestTypeSet) -> Option<&'static str> {
    let valid = match field {
        Field::TestName => is_valid_name(value),
        Field::TestType => test_types.contains(value),
        Field::TesterEmail => is_valid_email(value),
        Field::TesterMobile | Field::AlternativeNo => is_valid_phone(value),
    };

    if valid {
        None
    } else {
        Some(format_message(field))
    }
}

/// Message reported when `field` fails its format rule
pub fn format_message(field: Field) -> &'static str {
    match field {
        Field::TestName => MSG_NAME_CHARACTERS,
        Field::TestType => MSG_TYPE_INVALID,
        Field::TesterEmail => MSG_EMAIL_INVALID,
        Field::TesterMobile | Field::AlternativeNo => MSG_PHONE_INVALID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("John", true)]
    #[case("John Smith", true)]
    #[case("", true)]
    #[case("   ", true)]
    #[case("John3", false)]
    #[case("O'Neil", false)]
    #[case("Jöhn", false)]
    fn test_name_rule(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_name(value), expected);
    }

    #[rstest]
    #[case("a@b.com", true)]
    #[case("first.last@sub.example.org", true)]
    #[case("a@b", false)]
    #[case("@b.com", false)]
    #[case("a b@c.com", false)]
    #[case("", false)]
    fn test_email_rule(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(value), expected);
    }

    #[rstest]
    #[case("1234567890", true)]
    #[case("123456789", false)]
    #[case("12345678901", false)]
    #[case("12345 67890", false)]
    #[case("١٢٣٤٥٦٧٨٩٠", false)]
    #[case("", false)]
    fn test_phone_rule(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_phone(value), expected);
    }

    #[test]
    fn test_type_rule_uses_current_set() {
        let mut types = TestTypeSet::default();
        assert_eq!(check_format(Field::TestType, "Go", &types), Some(MSG_TYPE_INVALID));

        types.create("Go").unwrap();
        assert_eq!(check_format(Field::TestType, "Go", &types), None);
        assert_eq!(check_format(Field::TestType, "", &types), Some(MSG_TYPE_INVALID));
    }

    proptest! {
        #[test]
        fn letters_and_spaces_always_pass(value in "[A-Za-z ]{0,40}") {
            prop_assert!(is_valid_name(&value));
        }

        #[test]
        fn names_with_other_characters_fail(
            prefix in "[A-Za-z ]{0,10}",
            bad in "[0-9_.@!-]",
            suffix in "[A-Za-z ]{0,10}",
        ) {
            let value = format!("{}{}{}", prefix, bad, suffix);
            prop_assert!(!is_valid_name(&value));
        }

        #[test]
        fn phone_valid_iff_ten_digits(value in "[0-9a ]{0,14}") {
            let expected = value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit());
            prop_assert_eq!(is_valid_phone(&value), expected);
        }
    }
}
