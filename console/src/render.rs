//! Plain-text rendering of the application state

use std::fmt::Write as _;
use test_registry_core::utils::truncate;
use test_registry_core::{AppState, Field};

const COLUMN_WIDTH: usize = 16;

/// Render the form: draft fields with their messages, the action and test types
pub fn form(state: &AppState) -> String {
    let mut out = String::new();
    let draft = state.draft();

    let _ = writeln!(out, "Test Form");
    for field in Field::ALL {
        let _ = writeln!(out, "  {:<18}{}", format!("{}:", field.label()), draft.get(field));
        let message = state.errors().message(field);
        if !message.is_empty() {
            let _ = writeln!(out, "  {:<18}! {}", "", message);
        }
    }
    let _ = writeln!(out, "  [{}]", draft.action_label());

    let types: Vec<&str> = state.test_types().iter().collect();
    let _ = writeln!(out, "Test Types: {}", types.join(", "));
    if !state.pending_test_type().is_empty() {
        let _ = writeln!(out, "New Test Type: {}", state.pending_test_type());
    }
    out
}

fn cell(value: &str) -> String {
    format!("{:<width$}", truncate(value, COLUMN_WIDTH - 4), width = COLUMN_WIDTH)
}

/// Render the record table with each row's category
pub fn table(state: &AppState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Test Data Table");

    let header = [
        "Id", "Test Name", "Test Type", "Tester Email", "Tester Mobile",
        "Alternative No", "Creation Date", "Last Updation", "Row",
    ];
    let _ = writeln!(out, "{}", header.iter().map(|h| cell(h)).collect::<String>().trim_end());

    if state.records().is_empty() {
        let _ = writeln!(out, "(no records)");
        return out;
    }

    for (record, category) in state.rows() {
        let id = record.test_id.to_string();
        let cells = [
            id.as_str(),
            record.test_name.as_str(),
            record.test_type.as_str(),
            record.tester_email.as_str(),
            record.tester_mobile.as_str(),
            record.alternative_no.as_str(),
            record.creation_date.as_str(),
            record.last_updation_date.as_deref().unwrap_or(""),
            category.as_str(),
        ];
        let _ = writeln!(out, "{}", cells.iter().map(|c| cell(c)).collect::<String>().trim_end());
    }
    out
}

/// Command summary
pub fn help() -> String {
    [
        "Commands:",
        "  set <field> <value>   edit a field (testName, testType, testerEmail, testerMobile, alternativeNo)",
        "  type <name>           enter a new test type name",
        "  create-type           add the entered test type",
        "  submit                submit the form (updates when editing)",
        "  edit <id>             load a record into the form",
        "  delete <id>           delete a record",
        "  show                  show the form and the table",
        "  json                  dump the state as JSON",
        "  quit                  leave",
        "",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_registry_core::{CoreConfig, FixedClock};

    #[test]
    fn test_form_shows_messages_and_label() {
        let mut state = AppState::new(CoreConfig::default());
        state.change_field(Field::TestName, "John3");

        let out = form(&state);
        assert!(out.contains("Test Name:        John3"));
        assert!(out.contains("! Only Character Should come."));
        assert!(out.contains("[Submit]"));
        assert!(out.contains("Test Types: PHP, Node Js, React Js"));
    }

    #[test]
    fn test_table_rows() {
        let mut state = AppState::new(CoreConfig::default());
        assert!(table(&state).contains("(no records)"));

        state.change_field(Field::TestName, "John");
        state.change_field(Field::TestType, "Node Js");
        state.change_field(Field::TesterEmail, "a@b.com");
        state.change_field(Field::TesterMobile, "1234567890");
        state.change_field(Field::AlternativeNo, "0987654321");
        state.submit(&FixedClock::at(2024, 1, 1, 12, 0, 0).unwrap()).unwrap();

        let out = table(&state);
        let row = out.lines().nth(2).unwrap();
        assert!(row.starts_with("1 "));
        assert!(row.contains("John"));
        assert!(row.ends_with("yellow"));
    }
}
