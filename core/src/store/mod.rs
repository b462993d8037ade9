//! Record store
//!
//! This module provides the ordered collection of committed test records
//! and the upsert/delete operations over it. Records keep insertion order;
//! ids are allocated as one past the largest live id.

mod category;

pub use category::{classify, RowCategory};

use log::info;
use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::models::{Draft, TestRecord};

/// Result of a successful upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new record was appended with this id
    Created(u64),

    /// The record with this id was replaced
    Updated(u64),
}

impl UpsertOutcome {
    /// Id of the affected record
    pub fn test_id(&self) -> u64 {
        match self {
            UpsertOutcome::Created(id) | UpsertOutcome::Updated(id) => *id,
        }
    }
}

/// Ordered collection of committed test records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordStore {
    records: Vec<TestRecord>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in insertion order
    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    /// Look up a record by id
    pub fn get(&self, test_id: u64) -> Option<&TestRecord> {
        self.records.iter().find(|r| r.test_id == test_id)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id the next inserted record will receive
    pub fn next_id(&self) -> u64 {
        self.records.iter().map(|r| r.test_id).max().unwrap_or(0) + 1
    }

    /// Insert the draft as a new record or replace the one it is editing
    ///
    /// `timestamp` becomes the creation date of a new record, or the last
    /// update date of a replaced one. The creation date of a replaced record
    /// is kept.
    pub fn upsert(&mut self, draft: &Draft, timestamp: String) -> Result<UpsertOutcome> {
        match draft.test_id {
            None => Ok(UpsertOutcome::Created(self.insert(draft, timestamp))),
            Some(test_id) => {
                self.update(test_id, draft, timestamp)?;
                Ok(UpsertOutcome::Updated(test_id))
            }
        }
    }

    /// Append the draft as a new record, returning its id
    pub fn insert(&mut self, draft: &Draft, creation_date: String) -> u64 {
        let test_id = self.next_id();
        self.records.push(TestRecord {
            test_id,
            test_name: draft.test_name.clone(),
            test_type: draft.test_type.clone(),
            tester_email: draft.tester_email.clone(),
            tester_mobile: draft.tester_mobile.clone(),
            alternative_no: draft.alternative_no.clone(),
            creation_date,
            last_updation_date: None,
        });
        info!("Created test record {}", test_id);
        test_id
    }

    /// Replace the fields of record `test_id` with the draft's
    pub fn update(&mut self, test_id: u64, draft: &Draft, last_updation_date: String) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.test_id == test_id)
            .ok_or(CoreError::RecordNotFound(test_id))?;

        record.test_name = draft.test_name.clone();
        record.test_type = draft.test_type.clone();
        record.tester_email = draft.tester_email.clone();
        record.tester_mobile = draft.tester_mobile.clone();
        record.alternative_no = draft.alternative_no.clone();
        record.last_updation_date = Some(last_updation_date);

        info!("Updated test record {}", test_id);
        Ok(())
    }

    /// Remove record `test_id`
    pub fn remove(&mut self, test_id: u64) -> Result<TestRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.test_id == test_id)
            .ok_or(CoreError::RecordNotFound(test_id))?;

        let record = self.records.remove(index);
        info!("Deleted test record {}", test_id);
        Ok(record)
    }
}
