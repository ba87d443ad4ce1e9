//! # Feedback Strategies Module
//!
//! This module provides pluggable feedback strategies for the matcher.
//! Each strategy implements the [`Feedback`] trait and produces a list of [`FeedbackEntry`]s
//! based on the match outcomes. The wording of the summary line is fixed here so every
//! strategy reports missing items identically.
//!
//! ## Available Strategies
//!
//! - [`auto_feedback`]: Renders each unmet requirement into the canonical missing-item wording, with curated example classes for prefix patterns.

pub mod auto_feedback;

/// Canonical summary line for a missing list: `Perfect!` when nothing is
/// missing, otherwise the items joined with `, ` behind a `Missing: ` head.
pub fn missing_message(missing: &[String]) -> String {
    if missing.is_empty() {
        "Perfect!".to_string()
    } else {
        format!("Missing: {}", missing.join(", "))
    }
}
