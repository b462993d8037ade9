//! Configuration for the core crate
//!
//! This module provides configuration options for the registry: the seed
//! test types, timestamp rendering, prompt texts and draft handling.

use serde::{Serialize, Deserialize};

use crate::error::{CoreError, Result};
use crate::models::DEFAULT_TEST_TYPES;

/// Default strftime format for record timestamps
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";

/// Default delete confirmation text
pub const DEFAULT_DELETE_PROMPT: &str = "Are you sure you want to delete this row?";

/// Core configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Test types available at startup
    pub seed_test_types: Vec<String>,

    /// strftime format of creation and update timestamps
    pub timestamp_format: String,

    /// Clear the draft after a record is created, as is done after an update
    pub reset_draft_after_create: bool,

    /// Question asked before a record is deleted
    pub delete_prompt: String,

    /// Log level
    pub log_level: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        CoreConfig {
            seed_test_types: DEFAULT_TEST_TYPES.iter().map(|t| t.to_string()).collect(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            reset_draft_after_create: false,
            delete_prompt: DEFAULT_DELETE_PROMPT.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl CoreConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &str) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: CoreConfig = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Check the values that cannot be fixed up at runtime
    pub fn validate(&self) -> Result<()> {
        if self.timestamp_format.trim().is_empty() {
            return Err(CoreError::ConfigError("timestamp_format must not be empty".to_string()));
        }

        if self.seed_test_types.iter().all(|t| t.trim().is_empty()) {
            return Err(CoreError::ConfigError(
                "seed_test_types must name at least one test type".to_string(),
            ));
        }

        Ok(())
    }

    /// Create a development configuration
    pub fn development() -> Self {
        let mut config = Self::default();
        config.log_level = "debug".to_string();
        config
    }

    /// Create a testing configuration
    pub fn testing() -> Self {
        let mut config = Self::default();
        config.log_level = "debug".to_string();
        config.timestamp_format = "%Y-%m-%d %H:%M:%S".to_string();
        config
    }
}
