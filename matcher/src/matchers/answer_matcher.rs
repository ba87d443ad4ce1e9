//! A matcher that accepts the input only as a whole correct combination, where **token order never matters**.
//!
//! The `AnswerMatcher` awards a pass on an all-or-nothing basis. The input passes if its
//! token multiset equals one of the challenge's accepted answers; partial coverage is a fail.
//! **Tokens are compared through sorted signatures, so any ordering of an accepted combination passes.**

use crate::error::MatcherError;
use crate::tokenizer::{signature, tokenize};
use crate::traits::matcher::ClassMatcher;
use crate::types::{MatchOutcome, UnmetRequirement, patterns_from_answers};
use util::challenge::Challenge;

/// A matcher that passes the input only when it reproduces one accepted
/// answer exactly, up to ordering, casing and whitespace.
///
/// Duplicates count: `p-4 p-4` does not equal `p-4`. On failure the unmet
/// list is derived from the first answer so hints stay anchored to a single
/// reference combination instead of mixing several. When the input covers
/// every derived pattern but still is not an accepted combination, the
/// reference answer itself is reported, so a failed match never produces an
/// empty unmet list.
pub struct AnswerMatcher;

impl ClassMatcher for AnswerMatcher {
    /// Compares the input tokens against each accepted answer's signature.
    ///
    /// # Arguments
    ///
    /// * `challenge` - The challenge whose `answers` list the input must reproduce.
    /// * `tokens` - The normalized input tokens.
    ///
    /// # Returns
    ///
    /// Returns a `MatchOutcome` with `is_match` set when some answer matches.
    /// Fails with `InvalidArgument` when the challenge has no answers at all.
    fn evaluate(
        &self,
        challenge: &Challenge,
        tokens: &[String],
    ) -> Result<MatchOutcome, MatcherError> {
        if challenge.answers.is_empty() {
            return Err(MatcherError::InvalidArgument(format!(
                "challenge '{}' has no answers to compare against",
                challenge.name
            )));
        }

        let input_signature = signature(tokens);
        let is_match = challenge
            .answers
            .iter()
            .any(|answer| signature(&tokenize(answer)) == input_signature);

        let mut matched = Vec::new();
        let mut unmet = Vec::new();

        for pattern in patterns_from_answers(&challenge.answers[..1]) {
            if tokens.iter().any(|token| pattern.matches(token)) {
                matched.push(pattern.label().to_string());
            } else if !is_match {
                unmet.push(UnmetRequirement::Pattern(pattern));
            }
        }

        // Full pattern coverage with extra or swapped classes still fails;
        // report the reference answer so the unmet list stays non-empty.
        if !is_match && unmet.is_empty() {
            unmet.push(UnmetRequirement::Answer(
                tokenize(&challenge.answers[0]).join(" "),
            ));
        }

        Ok(MatchOutcome {
            challenge: challenge.name.clone(),
            is_match,
            matched,
            unmet,
            tokens: tokens.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pattern;

    fn make_challenge(answers: &[&str]) -> Challenge {
        Challenge {
            number: 1,
            name: "Center a div".to_string(),
            prompt: "Center the content".to_string(),
            answers: answers.iter().map(|s| s.to_string()).collect(),
            patterns: None,
            categories: None,
        }
    }

    fn evaluate(challenge: &Challenge, input: &str) -> MatchOutcome {
        AnswerMatcher
            .evaluate(challenge, &tokenize(input))
            .expect("Evaluation should succeed")
    }

    #[test]
    fn test_any_permutation_of_an_answer_passes() {
        let challenge = make_challenge(&["flex items-center justify-center"]);

        let outcome = evaluate(&challenge, "justify-center flex items-center");
        assert!(outcome.is_match);
        assert!(outcome.unmet.is_empty());
    }

    #[test]
    fn test_case_and_whitespace_are_ignored() {
        let challenge = make_challenge(&["flex items-center"]);

        let outcome = evaluate(&challenge, "  FLEX   Items-Center  ");
        assert!(outcome.is_match);
    }

    #[test]
    fn test_any_of_several_answers_passes() {
        let challenge = make_challenge(&["flex items-center", "grid place-items-center"]);

        assert!(evaluate(&challenge, "grid place-items-center").is_match);
        assert!(evaluate(&challenge, "items-center flex").is_match);
        assert!(!evaluate(&challenge, "grid items-center").is_match);
    }

    #[test]
    fn test_duplicates_are_significant() {
        let challenge = make_challenge(&["p-4 flex"]);

        assert!(!evaluate(&challenge, "p-4 p-4 flex").is_match);
        assert!(evaluate(&challenge, "p-4 flex").is_match);
    }

    #[test]
    fn test_failure_reports_patterns_from_first_answer() {
        let challenge = make_challenge(&["flex items-center justify-center", "grid"]);

        let outcome = evaluate(&challenge, "flex");
        assert!(!outcome.is_match);
        assert_eq!(outcome.matched, vec!["flex"]);
        assert_eq!(outcome.unmet, vec![
            UnmetRequirement::Pattern(Pattern::Prefix("items-".to_string())),
            UnmetRequirement::Pattern(Pattern::Prefix("justify-".to_string())),
        ]);
    }

    #[test]
    fn test_covered_patterns_with_extra_classes_reports_the_answer() {
        let challenge = make_challenge(&["flex items-center"]);

        // Every derived pattern is covered, yet the combination is wrong.
        let outcome = evaluate(&challenge, "flex items-center p-4");
        assert!(!outcome.is_match);
        assert_eq!(outcome.unmet, vec![UnmetRequirement::Answer(
            "flex items-center".to_string()
        )]);
    }

    #[test]
    fn test_empty_input_fails_with_all_patterns_unmet() {
        let challenge = make_challenge(&["flex p-4"]);

        let outcome = evaluate(&challenge, "   ");
        assert!(!outcome.is_match);
        assert!(outcome.matched.is_empty());
        assert_eq!(outcome.unmet.len(), 2);
    }

    #[test]
    fn test_no_answers_is_an_error() {
        let challenge = make_challenge(&[]);

        let err = AnswerMatcher
            .evaluate(&challenge, &tokenize("flex"))
            .unwrap_err();
        assert!(matches!(err, MatcherError::InvalidArgument(_)));
    }
}
