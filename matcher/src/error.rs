//! Matcher Error Types
//!
//! This module defines the [`MatcherError`] enum, which encapsulates all error types that can occur while validating a class string against a challenge.
//! Malformed input tokens are never errors: an unrecognized token lands in the misc category or fails a pattern check, and surfaces through the missing list instead.
//!
//! # Usage
//!
//! Use [`MatcherError`] as the error type in functions that may fail due to unusable arguments or an incomplete challenge definition.
//!
//! # Example
//!
//! ```rust
//! use matcher::error::MatcherError;
//!
//! fn first_answer(answers: &[String]) -> Result<&str, MatcherError> {
//!     answers
//!         .first()
//!         .map(String::as_str)
//!         .ok_or_else(|| MatcherError::InvalidArgument("answers list is empty".to_string()))
//! }
//! ```

/// Represents all error types that can occur in the matcher.
#[derive(Debug)]
pub enum MatcherError {
    /// A contractually non-empty argument was empty or otherwise unusable.
    InvalidArgument(String),
    /// The challenge lacks the payload a strategy needs (e.g. category
    /// requirements for category matching).
    MissingField(String),
}

impl std::fmt::Display for MatcherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatcherError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            MatcherError::MissingField(msg) => write!(f, "Missing field: {msg}"),
        }
    }
}

impl std::error::Error for MatcherError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MatcherError::InvalidArgument("answers list is empty".to_string());
        assert_eq!(err.to_string(), "Invalid argument: answers list is empty");

        let err = MatcherError::MissingField("categories".to_string());
        assert_eq!(err.to_string(), "Missing field: categories");
    }
}
