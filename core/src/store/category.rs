//! Display category of a record, derived from its test type

use std::fmt::{Display, Formatter, Result as FmtResult};
use serde::{Serialize, Deserialize};

/// Row highlight used by renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowCategory {
    /// PHP tests
    Green,

    /// Node Js tests
    Yellow,

    /// Everything else
    Orange,
}

impl RowCategory {
    /// Color name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            RowCategory::Green => "green",
            RowCategory::Yellow => "yellow",
            RowCategory::Orange => "orange",
        }
    }
}

impl Display for RowCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Map a test type to its display category
pub fn classify(test_type: &str) -> RowCategory {
    match test_type {
        "PHP" => RowCategory::Green,
        "Node Js" => RowCategory::Yellow,
        _ => RowCategory::Orange,
    }
}
