//! Error definitions
//!
//! This module provides error types for testkit-settle.

use thiserror::Error;

/// The fixed message reported when a test leaks async work past its end.
///
/// Emit this before writing the diagnostics themselves, or let
/// [`ensure_settled`](crate::report::ensure_settled) do both.
pub const TEST_NOT_ISOLATED: &str = "Test is not isolated (async execution is extending beyond the duration of the test).\n\
More information has been printed to the console. Please use that information to help in debugging.";

/// Main error type for testkit-settle
#[derive(Error, Debug)]
pub enum Error {
    /// A test finished with asynchronous work still pending
    #[error("{TEST_NOT_ISOLATED}")]
    NotIsolated,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_isolated_displays_fixed_message() {
        let message = Error::NotIsolated.to_string();
        assert_eq!(message, TEST_NOT_ISOLATED);
        assert!(message.starts_with("Test is not isolated"));
    }
}
