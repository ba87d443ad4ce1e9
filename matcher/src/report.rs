//! # Verdict Report Module
//!
//! This module defines the data structures and response envelope for returning validation results from the matcher.
//! It provides a standardized, serializable format for reporting the verdict, missing requirements, and feedback to clients.
//!
//! ## Overview
//!
//! The main types are:
//! - [`Verdict`]: The pass/fail result with the rendered missing list and feedback line.
//! - [`VerdictReport`]: The full record of one validation, including the evaluated tokens and a timestamp.
//! - [`VerdictResponse`]: A response envelope that wraps a [`VerdictReport`] with success and message fields for API responses.
//!
//! ## JSON Output Example
//!
//! When serialized, the response will look like:
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Validation complete.",
//!   "data": {
//!     "challenge": "...",
//!     "verdict": {
//!       "is_valid": false,
//!       "missing": ["'flex' class", "p-* class (e.g., p-4)"],
//!       "feedback": "Missing: 'flex' class, p-* class (e.g., p-4)"
//!     },
//!     "tokens": ["bg-white", "rounded-lg"],
//!     "evaluated_at": "..."
//!   }
//! }
//! ```
//!
//! ## Design Notes
//!
//! - [`Verdict`] is built through [`Verdict::new`], which derives `is_valid` and the
//!   feedback line from the missing list, so the three fields never disagree.
//! - The [`From<VerdictReport> for VerdictResponse`] implementation provides ergonomic conversion for API handlers.

use crate::feedback::missing_message;
use serde::Serialize;

/// The pass/fail result of one validation.
///
/// `is_valid` is true exactly when `missing` is empty, and `feedback` is the
/// canonical summary of `missing`; both are derived in [`Verdict::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub is_valid: bool,
    /// One rendered line per unmet requirement, in evaluation order.
    pub missing: Vec<String>,
    /// `Perfect!` or `Missing: <items joined with ', '>`.
    pub feedback: String,
}

impl Verdict {
    /// Builds the verdict implied by a missing list.
    pub fn new(missing: Vec<String>) -> Self {
        let feedback = missing_message(&missing);
        Verdict {
            is_valid: missing.is_empty(),
            missing,
            feedback,
        }
    }
}

/// The full record of one validation, designed for API output.
///
/// - `challenge`: The name of the validated challenge.
/// - `verdict`: Pass/fail with the missing list and feedback line.
/// - `tokens`: The normalized tokens that were evaluated.
/// - `evaluated_at`: RFC 3339 timestamp of the evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct VerdictReport {
    /// The name of the validated challenge.
    pub challenge: String,
    /// Pass/fail with the missing list and feedback line.
    pub verdict: Verdict,
    /// The normalized tokens that were evaluated.
    pub tokens: Vec<String>,
    /// RFC 3339 timestamp of the evaluation.
    pub evaluated_at: String,
}

/// The API response envelope for validation results.
///
/// This struct wraps a [`VerdictReport`] and adds top-level `success` and `message` fields
/// for consistency with other API responses.
///
/// - `success`: Always true for a validation that ran to completion.
/// - `message`: A human-readable message (e.g., "Validation complete.").
/// - `data`: The [`VerdictReport`] containing all validation details.
#[derive(Debug, Serialize)]
pub struct VerdictResponse {
    /// Indicates the validation ran to completion.
    pub success: bool,
    /// A human-readable message for the client.
    pub message: String,
    /// The detailed validation report.
    pub data: VerdictReport,
}

/// Enables ergonomic conversion from [`VerdictReport`] to [`VerdictResponse`].
impl From<VerdictReport> for VerdictResponse {
    fn from(report: VerdictReport) -> Self {
        VerdictResponse {
            success: true,
            message: "Validation complete.".to_string(),
            data: report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_verdict_new_derives_validity_and_feedback() {
        let passing = Verdict::new(vec![]);
        assert!(passing.is_valid);
        assert_eq!(passing.feedback, "Perfect!");

        let failing = Verdict::new(vec!["'flex' class".to_string(), "padding".to_string()]);
        assert!(!failing.is_valid);
        assert_eq!(failing.feedback, "Missing: 'flex' class, padding");
        assert_eq!(failing.missing.len(), 2);
    }

    #[test]
    fn test_verdict_response_serialization() {
        let report = VerdictReport {
            challenge: "Center a div".to_string(),
            verdict: Verdict::new(vec!["'flex' class".to_string()]),
            tokens: vec!["items-center".to_string()],
            evaluated_at: "2025-01-01T00:00:00+00:00".to_string(),
        };
        let response: VerdictResponse = report.into();
        let value: Value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Validation complete.");
        assert_eq!(value["data"]["challenge"], "Center a div");
        assert_eq!(value["data"]["verdict"]["is_valid"], false);
        assert_eq!(value["data"]["verdict"]["missing"][0], "'flex' class");
        assert_eq!(
            value["data"]["verdict"]["feedback"],
            "Missing: 'flex' class"
        );
        assert_eq!(value["data"]["tokens"][0], "items-center");
        assert_eq!(value["data"]["evaluated_at"], "2025-01-01T00:00:00+00:00");
    }
}
