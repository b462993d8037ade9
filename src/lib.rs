/// Test Registry - a validated, in-memory registry of test records
///
/// This is the root crate that provides workspace-level documentation.
/// Actual implementation is in the subcrates:
/// - `test-registry-core`: Field validation, the record store and application state
/// - `test-registry-console`: Line-oriented console front-end driving the core

/// Returns the version of the package.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
