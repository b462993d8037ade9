//! Application state for the core crate
//!
//! [`AppState`] is the single owner of everything the form shows: the
//! draft, the committed records, the test type set, the current error
//! messages and the pending test type name. Every user action is a method
//! that moves it from one consistent state to the next; renderers read it
//! back through the accessors or a serialized snapshot.

use log::{debug, info, warn};
use serde::Serialize;

use crate::config::CoreConfig;
use crate::error::{CoreError, Result};
use crate::models::{Draft, DraftMode, Field, TestRecord, TestTypeSet};
use crate::prompt::Prompter;
use crate::store::{classify, RecordStore, RowCategory, UpsertOutcome};
use crate::utils::Clock;
use crate::validation::{self, FieldErrors};

/// State behind the test form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Record bound to the form fields
    draft: Draft,

    /// Committed records
    records: RecordStore,

    /// Valid test types
    test_types: TestTypeSet,

    /// Current error message per field
    errors: FieldErrors,

    /// Name typed into the new test type input
    pending_test_type: String,

    #[serde(skip)]
    config: CoreConfig,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(CoreConfig::default())
    }
}

impl AppState {
    /// Create the startup state: empty draft, no records, seeded test types
    pub fn new(config: CoreConfig) -> Self {
        AppState {
            draft: Draft::new(),
            records: RecordStore::new(),
            test_types: TestTypeSet::seeded(config.seed_test_types.iter().cloned()),
            errors: FieldErrors::default(),
            pending_test_type: String::new(),
            config,
        }
    }

    /// Record bound to the form fields
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Committed records in insertion order
    pub fn records(&self) -> &[TestRecord] {
        self.records.records()
    }

    /// Look up a committed record
    pub fn record(&self, test_id: u64) -> Option<&TestRecord> {
        self.records.get(test_id)
    }

    /// Valid test types
    pub fn test_types(&self) -> &TestTypeSet {
        &self.test_types
    }

    /// Current error message per field
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Name typed into the new test type input
    pub fn pending_test_type(&self) -> &str {
        &self.pending_test_type
    }

    /// Configuration the state was created with
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Committed records paired with their display category
    pub fn rows(&self) -> impl Iterator<Item = (&TestRecord, RowCategory)> {
        self.records().iter().map(|r| (r, classify(&r.test_type)))
    }

    /// Apply a keystroke to a draft field and revalidate that field only
    pub fn change_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let message = validation::validate_field(field, &value, &self.test_types);
        self.draft.set(field, value);
        self.errors.set(field, message);
    }

    /// Update the new test type input
    pub fn set_pending_test_type(&mut self, name: impl Into<String>) {
        self.pending_test_type = name.into();
    }

    /// Add a test type and select it in the draft
    ///
    /// Blank and duplicate names are rejected without touching the state.
    /// On success the pending name is cleared.
    pub fn create_test_type(&mut self, name: &str) -> Result<()> {
        if let Err(e) = self.test_types.create(name) {
            warn!("Rejected test type {:?}: {}", name, e);
            return Err(e);
        }

        info!("Created test type {:?}", name);
        self.draft.set(Field::TestType, name);
        self.pending_test_type.clear();
        Ok(())
    }

    /// Add the pending name as a test type
    pub fn create_pending_test_type(&mut self) -> Result<()> {
        let name = self.pending_test_type.clone();
        self.create_test_type(&name)
    }

    /// Validate the draft and commit it to the store
    ///
    /// The full error set is recomputed first; if any field is invalid the
    /// submission is rejected and nothing is stored. A created record leaves
    /// the draft as it was (still in create mode) unless
    /// `reset_draft_after_create` is set; an updated record clears it.
    pub fn submit(&mut self, clock: &dyn Clock) -> Result<UpsertOutcome> {
        self.errors = validation::validate_submission(&self.draft, &self.test_types);
        if !self.errors.is_valid() {
            warn!("Submission rejected: {}", self.errors);
            return Err(CoreError::ValidationRejected(self.errors.clone()));
        }

        let timestamp = clock.timestamp(&self.config.timestamp_format);
        let outcome = self.records.upsert(&self.draft, timestamp)?;

        match outcome {
            UpsertOutcome::Created(_) if !self.config.reset_draft_after_create => {
                debug!("Draft kept after create");
            }
            _ => self.draft.clear(),
        }

        Ok(outcome)
    }

    /// Load a committed record into the draft for editing
    pub fn select_for_edit(&mut self, test_id: u64) -> Result<()> {
        let record = self
            .records
            .get(test_id)
            .ok_or(CoreError::RecordNotFound(test_id))?;

        self.draft = Draft::from_record(record);
        debug!("Editing test record {}", test_id);
        Ok(())
    }

    /// Delete a committed record after the user confirms
    ///
    /// Returns `false` when the user declines, in which case nothing
    /// changes. A confirmed delete also resets the draft.
    pub fn delete(&mut self, test_id: u64, prompter: &mut dyn Prompter) -> Result<bool> {
        if self.records.get(test_id).is_none() {
            return Err(CoreError::RecordNotFound(test_id));
        }

        if !prompter.confirm(&self.config.delete_prompt) {
            debug!("Delete of test record {} declined", test_id);
            return Ok(false);
        }

        self.records.remove(test_id)?;
        self.draft.clear();
        Ok(true)
    }

    /// Current mode of the form
    pub fn mode(&self) -> DraftMode {
        self.draft.mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::MockPrompter;
    use crate::utils::FixedClock;
    use crate::validation::rules::*;

    fn fill(state: &mut AppState, name: &str, mobile: &str, alternative: &str) {
        state.change_field(Field::TestName, name);
        state.change_field(Field::TestType, "PHP");
        state.change_field(Field::TesterEmail, "a@b.com");
        state.change_field(Field::TesterMobile, mobile);
        state.change_field(Field::AlternativeNo, alternative);
    }

    fn clock() -> FixedClock {
        FixedClock::at(2024, 1, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_live_validation_touches_one_field() {
        let mut state = AppState::default();
        state.change_field(Field::TestName, "John3");
        state.change_field(Field::TesterMobile, "12");

        assert_eq!(state.errors().message(Field::TestName), MSG_NAME_CHARACTERS);
        assert_eq!(state.errors().message(Field::TesterMobile), MSG_PHONE_INVALID);
        assert_eq!(state.errors().message(Field::TesterEmail), "");

        state.change_field(Field::TestName, "John");
        assert_eq!(state.errors().message(Field::TestName), "");
        assert_eq!(state.draft().test_name, "John");
    }

    #[test]
    fn test_first_create() {
        let mut state = AppState::default();
        fill(&mut state, "John", "1234567890", "0987654321");

        let outcome = state.submit(&clock()).unwrap();
        assert_eq!(outcome, UpsertOutcome::Created(1));

        let record = state.record(1).unwrap();
        assert_eq!(record.creation_date, "01/15/2024, 09:30:00 AM");
        assert_eq!(record.last_updation_date, None);

        // Create mode is not exited and the fields stay populated
        assert_eq!(state.mode(), DraftMode::Create);
        assert_eq!(state.draft().test_name, "John");
    }

    #[test]
    fn test_resubmit_after_create_duplicates() {
        let mut state = AppState::default();
        fill(&mut state, "John", "1234567890", "0987654321");

        state.submit(&clock()).unwrap();
        let outcome = state.submit(&clock()).unwrap();

        assert_eq!(outcome, UpsertOutcome::Created(2));
        assert_eq!(state.records().len(), 2);
    }

    #[test]
    fn test_reset_draft_after_create_when_configured() {
        let mut config = CoreConfig::default();
        config.reset_draft_after_create = true;
        let mut state = AppState::new(config);
        fill(&mut state, "John", "1234567890", "0987654321");

        state.submit(&clock()).unwrap();
        assert!(state.draft().is_empty());
    }

    #[test]
    fn test_invalid_submission_stores_nothing() {
        let mut state = AppState::default();
        fill(&mut state, "John", "1234567890", "1234567890");

        let err = state.submit(&clock()).unwrap_err();
        match err {
            CoreError::ValidationRejected(errors) => {
                assert_eq!(errors.message(Field::AlternativeNo), MSG_ALTERNATIVE_SAME);
            }
            other => panic!("Expected ValidationRejected, got {:?}", other),
        }
        assert!(state.records().is_empty());
        assert_eq!(state.errors().message(Field::AlternativeNo), MSG_ALTERNATIVE_SAME);
    }

    #[test]
    fn test_successful_submit_clears_errors() {
        let mut state = AppState::default();
        fill(&mut state, "John", "1234567890", "1234567890");
        assert!(state.submit(&clock()).is_err());

        state.change_field(Field::AlternativeNo, "0987654321");
        state.submit(&clock()).unwrap();
        assert!(state.errors().is_valid());
    }

    #[test]
    fn test_edit_and_update() {
        let mut state = AppState::default();
        let mut clock = clock();
        fill(&mut state, "First", "1234567890", "0987654321");
        state.submit(&clock).unwrap();
        fill(&mut state, "Second", "1111111111", "2222222222");
        state.submit(&clock).unwrap();

        state.select_for_edit(2).unwrap();
        assert_eq!(state.mode(), DraftMode::Edit(2));
        assert_eq!(state.draft().test_name, "Second");

        clock.advance(chrono::Duration::hours(2));
        state.change_field(Field::TestName, "Second Edited");
        let outcome = state.submit(&clock).unwrap();
        assert_eq!(outcome, UpsertOutcome::Updated(2));

        let record = state.record(2).unwrap();
        assert_eq!(record.test_name, "Second Edited");
        assert_eq!(record.creation_date, "01/15/2024, 09:30:00 AM");
        assert_eq!(record.last_updation_date.as_deref(), Some("01/15/2024, 11:30:00 AM"));
        assert_eq!(state.records().len(), 2);
        assert!(state.draft().is_empty());
    }

    #[test]
    fn test_select_missing_record() {
        let mut state = AppState::default();
        assert!(matches!(state.select_for_edit(5), Err(CoreError::RecordNotFound(5))));
        assert!(state.draft().is_empty());
    }

    #[test]
    fn test_create_test_type() {
        let mut state = AppState::default();

        state.set_pending_test_type("Go");
        state.create_pending_test_type().unwrap();

        assert!(state.test_types().contains("Go"));
        assert_eq!(state.draft().test_type, "Go");
        assert_eq!(state.pending_test_type(), "");
    }

    #[test]
    fn test_create_test_type_rejections_keep_state() {
        let mut state = AppState::default();
        let before = state.test_types().clone();

        assert!(matches!(state.create_test_type(""), Err(CoreError::EmptyTestType)));

        state.set_pending_test_type("PHP");
        assert!(matches!(
            state.create_pending_test_type(),
            Err(CoreError::DuplicateTestType(_))
        ));

        assert_eq!(state.test_types(), &before);
        assert_eq!(state.pending_test_type(), "PHP");
        assert_eq!(state.draft().test_type, "");
    }

    #[test]
    fn test_created_type_validates() {
        let mut state = AppState::default();
        state.change_field(Field::TestType, "Go");
        assert_eq!(state.errors().message(Field::TestType), MSG_TYPE_INVALID);

        state.create_test_type("Go").unwrap();
        state.change_field(Field::TestType, "Go");
        assert_eq!(state.errors().message(Field::TestType), "");
    }

    #[test]
    fn test_delete_confirmed() {
        let mut state = AppState::default();
        fill(&mut state, "John", "1234567890", "0987654321");
        state.submit(&clock()).unwrap();
        state.submit(&clock()).unwrap();
        state.select_for_edit(1).unwrap();

        let mut prompter = MockPrompter::new();
        prompter
            .expect_confirm()
            .withf(|prompt| prompt.starts_with("Are you sure you want to delete"))
            .times(1)
            .returning(|_| true);

        assert!(state.delete(1, &mut prompter).unwrap());
        assert!(state.record(1).is_none());
        assert!(state.record(2).is_some());
        assert!(state.draft().is_empty());
    }

    #[test]
    fn test_delete_declined() {
        let mut state = AppState::default();
        fill(&mut state, "John", "1234567890", "0987654321");
        state.submit(&clock()).unwrap();

        let mut prompter = MockPrompter::new();
        prompter.expect_confirm().times(1).returning(|_| false);

        assert!(!state.delete(1, &mut prompter).unwrap());
        assert_eq!(state.records().len(), 1);
        assert_eq!(state.draft().test_name, "John");
    }

    #[test]
    fn test_delete_missing_record_does_not_prompt() {
        let mut state = AppState::default();
        let mut prompter = MockPrompter::new();
        prompter.expect_confirm().never();

        assert!(matches!(
            state.delete(3, &mut prompter),
            Err(CoreError::RecordNotFound(3))
        ));
    }

    #[test]
    fn test_ids_after_deletes() {
        let mut state = AppState::default();
        let mut prompter = MockPrompter::new();
        prompter.expect_confirm().returning(|_| true);

        fill(&mut state, "John", "1234567890", "0987654321");
        state.submit(&clock()).unwrap();
        state.submit(&clock()).unwrap();

        state.delete(1, &mut prompter).unwrap();
        fill(&mut state, "John", "1234567890", "0987654321");
        assert_eq!(state.submit(&clock()).unwrap(), UpsertOutcome::Created(3));

        state.delete(2, &mut prompter).unwrap();
        state.delete(3, &mut prompter).unwrap();
        fill(&mut state, "John", "1234567890", "0987654321");
        assert_eq!(state.submit(&clock()).unwrap(), UpsertOutcome::Created(1));
    }

    #[test]
    fn test_rows_carry_categories() {
        let mut state = AppState::default();
        fill(&mut state, "John", "1234567890", "0987654321");
        state.submit(&clock()).unwrap();
        state.change_field(Field::TestType, "React Js");
        state.submit(&clock()).unwrap();

        let categories: Vec<_> = state.rows().map(|(_, c)| c).collect();
        assert_eq!(categories, vec![RowCategory::Green, RowCategory::Orange]);
    }

    #[test]
    fn test_snapshot_keys() {
        let state = AppState::default();
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["testTypes"][0], "PHP");
        assert_eq!(value["pendingTestType"], "");
        assert!(value["records"].as_array().unwrap().is_empty());
        assert!(value.get("config").is_none());
    }
}
