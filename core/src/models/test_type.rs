//! The extensible set of valid test types

use serde::Serialize;

use crate::error::{CoreError, Result};

/// Test types every registry starts with
pub const DEFAULT_TEST_TYPES: [&str; 3] = ["PHP", "Node Js", "React Js"];

/// Ordered set of test type names
///
/// The set only grows: names are appended in creation order and never
/// removed, so a type that passed validation stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TestTypeSet {
    types: Vec<String>,
}

impl Default for TestTypeSet {
    fn default() -> Self {
        TestTypeSet::seeded(DEFAULT_TEST_TYPES)
    }
}

impl TestTypeSet {
    /// Build a set from seed names, dropping blanks and repeats
    pub fn seeded<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = TestTypeSet { types: Vec::new() };
        for name in seed {
            let name = name.into();
            if !name.trim().is_empty() && !set.contains(&name) {
                set.types.push(name);
            }
        }
        set
    }

    /// Whether `name` is a member of the set
    pub fn contains(&self, name: &str) -> bool {
        self.types.iter().any(|t| t == name)
    }

    /// Append a new test type
    ///
    /// Blank names and names already present are rejected and leave the set
    /// unchanged. The name is stored as given.
    pub fn create(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(CoreError::EmptyTestType);
        }

        if self.contains(name) {
            return Err(CoreError::DuplicateTestType(name.to_string()));
        }

        self.types.push(name.to_string());
        Ok(())
    }

    /// Iterate the names in creation order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    /// Number of test types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
