//!
//! # Feedback Trait
//!
//! This module defines the [`Feedback`] trait and the [`FeedbackEntry`] struct, which are used to implement pluggable feedback strategies for the matcher.
//!
//! Each feedback strategy turns the unmet requirements of a set of match outcomes into learner-facing wording, allowing the presentation to vary independently of the matching logic.
//!

use crate::error::MatcherError;
use crate::types::MatchOutcome;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    /// Name of the challenge this entry belongs to.
    pub challenge: String,
    /// One rendered line per unmet requirement, in evaluation order.
    pub missing: Vec<String>,
    /// The canonical summary line built from `missing`.
    pub message: String,
}

/// A trait for pluggable feedback strategies.
///
/// Implement this trait to define how unmet requirements are worded. Each
/// strategy can render differently (e.g. template-based with curated
/// examples, or plain listings), but the decision of what is missing always
/// comes from the match outcome, never from the feedback layer.
///
/// # Arguments
/// - `outcomes`: A slice of [`MatchOutcome`]s, one per evaluated challenge.
///
/// # Returns
/// - `Ok(Vec<FeedbackEntry>)`: An ordered list of entries, one per outcome.
/// - `Err(MatcherError)`: If feedback generation fails.
///
pub trait Feedback: Send + Sync {
    fn assemble_feedback(
        &self,
        outcomes: &[MatchOutcome],
    ) -> Result<Vec<FeedbackEntry>, MatcherError>;
}
