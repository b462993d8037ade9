//! Utility functions and helpers
//!
//! This module provides various utility functions and helpers used throughout the codebase.

pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(max_chars).collect();
        result.push_str("...");
        result
    }
}
