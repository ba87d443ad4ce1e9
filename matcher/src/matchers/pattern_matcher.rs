//! A matcher that checks requirement coverage pattern by pattern, where **every pattern must be satisfied**.
//!
//! The `PatternMatcher` treats a challenge as a list of independent requirements rather than a
//! fixed combination. A pattern is covered when at least one input token satisfies it; the input
//! passes when all patterns are covered. **Extra tokens never hurt: coverage only grows as tokens are added.**

use crate::error::MatcherError;
use crate::traits::matcher::ClassMatcher;
use crate::types::{MatchOutcome, Pattern, UnmetRequirement, patterns_from_answers};
use util::challenge::Challenge;

/// A matcher that passes the input when every required pattern has at least
/// one satisfying token.
///
/// The pattern list comes from the challenge's explicit `patterns` when
/// present; otherwise it is derived from the answers. An empty pattern list
/// is vacuously satisfied.
pub struct PatternMatcher;

impl ClassMatcher for PatternMatcher {
    fn evaluate(
        &self,
        challenge: &Challenge,
        tokens: &[String],
    ) -> Result<MatchOutcome, MatcherError> {
        let patterns: Vec<Pattern> = match &challenge.patterns {
            Some(raw) => raw.iter().map(|pattern| Pattern::parse(pattern)).collect(),
            None => patterns_from_answers(&challenge.answers),
        };

        let mut matched = Vec::new();
        let mut unmet = Vec::new();
        for pattern in patterns {
            if tokens.iter().any(|token| pattern.matches(token)) {
                matched.push(pattern.label().to_string());
            } else {
                unmet.push(UnmetRequirement::Pattern(pattern));
            }
        }

        Ok(MatchOutcome {
            challenge: challenge.name.clone(),
            is_match: unmet.is_empty(),
            matched,
            unmet,
            tokens: tokens.to_vec(),
        })
    }
}
