use crate::error::MatcherError;
use crate::types::MatchOutcome;
use util::challenge::Challenge;

/// ClassMatcher is a strategy trait for validating tokenized input.
/// Each implementation applies one requirement reading of a challenge
/// (whole answers, individual patterns, or category coverage) to the
/// normalized tokens of a learner's input.
pub trait ClassMatcher: Send + Sync {
    /// Evaluate one challenge against the tokens, producing a full MatchOutcome.
    ///
    /// - `challenge`: the requirement source (answers, patterns?, categories?).
    /// - `tokens`: normalized input tokens (see `tokenizer::tokenize`).
    fn evaluate(
        &self,
        challenge: &Challenge,
        tokens: &[String],
    ) -> Result<MatchOutcome, MatcherError>;
}
