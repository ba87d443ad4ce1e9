//! # Matcher Library
//!
//! This module provides the core logic for validating learner-supplied utility-class strings.
//! It supports normalizing raw input into tokens, bucketing tokens by semantic category,
//! evaluating requirements through pluggable matching strategies, and generating human-readable
//! feedback about what is missing.
//!
//! ## Key Concepts
//! - **ValidationJob**: The main struct representing the validation of a single input against a challenge.
//! - **Matchers**: Pluggable strategies for deciding whether the input satisfies the challenge (answer, pattern, or category based).
//! - **Feedback**: Automated wording for each unmet requirement.
//! - **Reports**: Structured verdicts with pass/fail, missing items and feedback.

pub mod categorizer;
pub mod error;
pub mod feedback;
pub mod matchers;
pub mod report;
pub mod tokenizer;
pub mod traits;
pub mod types;

use crate::error::MatcherError;
use crate::feedback::auto_feedback::AutoFeedback;
use crate::feedback::missing_message;
use crate::matchers::answer_matcher::AnswerMatcher;
use crate::matchers::category_matcher::{CategoryMatcher, check_requirements};
use crate::matchers::pattern_matcher::PatternMatcher;
use crate::report::{Verdict, VerdictReport, VerdictResponse};
use crate::tokenizer::{signature, tokenize};
use crate::traits::feedback::Feedback;
use crate::traits::matcher::ClassMatcher;
use crate::types::{Pattern, UnmetRequirement, patterns_from_answers};

use chrono::Utc;
use std::collections::BTreeMap;
use tracing::debug;
use util::challenge::{Category, CategoryRequirement, Challenge};
use util::validation_config::{MatchScheme, ValidationConfig};

/// Represents the validation of a single learner input against one challenge.
///
/// This struct encapsulates the raw input, the challenge definition and the
/// configuration, plus the strategy and feedback implementations selected
/// from that configuration.
///
/// # Fields
/// - `input`: The raw class string as the learner typed it.
/// - `challenge`: The challenge whose requirements the input must satisfy.
/// - `matcher`: Strategy for evaluating the requirements (answer, pattern, category).
/// - `feedback`: Strategy for rendering unmet requirements into wording.
/// - `config`: The validation configuration the job was built from.
pub struct ValidationJob<'a> {
    input: String,
    challenge: Challenge,
    matcher: Box<dyn ClassMatcher + Send + Sync + 'a>,
    feedback: Box<dyn Feedback + Send + Sync + 'a>,
    config: ValidationConfig,
}

impl<'a> ValidationJob<'a> {
    /// Create a new validation job.
    ///
    /// The matching strategy is selected from `config.matching.scheme` and
    /// the feedback example seed from `config.feedback.example_seed`.
    ///
    /// # Arguments
    /// * `input` - The raw class string to validate.
    /// * `challenge` - The challenge definition.
    /// * `config` - Validation configuration.
    pub fn new(input: String, challenge: Challenge, config: ValidationConfig) -> Self {
        let matcher: Box<dyn ClassMatcher + Send + Sync + 'a> = match config.matching.scheme {
            MatchScheme::Exact => Box::new(AnswerMatcher),
            MatchScheme::Patterns => Box::new(PatternMatcher),
            MatchScheme::Categories => Box::new(CategoryMatcher),
        };
        let feedback: Box<dyn Feedback + Send + Sync + 'a> = match config.feedback.example_seed {
            Some(seed) => Box::new(AutoFeedback::seeded(seed)),
            None => Box::new(AutoFeedback::new()),
        };
        Self {
            input,
            challenge,
            matcher,
            feedback,
            config,
        }
    }

    /// Set a custom matching strategy for this job, overriding the one the
    /// configuration selected.
    ///
    /// # Arguments
    /// * `matcher` - An implementation of the `ClassMatcher` trait.
    pub fn with_matcher<M: ClassMatcher + 'a>(mut self, matcher: M) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    /// Set a custom feedback strategy for this job.
    ///
    /// # Arguments
    /// * `feedback` - An implementation of the `Feedback` trait.
    pub fn with_feedback<F: Feedback + Send + Sync + 'a>(mut self, feedback: F) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    /// Run the validation and generate a report.
    ///
    /// # Returns
    /// * `Ok(VerdictResponse)` on success, containing the full verdict report.
    /// * `Err(MatcherError)` if the challenge cannot be evaluated (e.g. empty
    ///   answers for the exact scheme, or no category requirements for the
    ///   category scheme).
    ///
    /// # Steps
    /// 1. Normalizes the raw input into tokens.
    /// 2. Evaluates the challenge with the configured strategy.
    /// 3. Renders unmet requirements into missing-item wording.
    /// 4. Builds the verdict and wraps it in the response envelope.
    pub fn validate(self) -> Result<VerdictResponse, MatcherError> {
        let tokens = tokenize(&self.input);
        let outcome = self.matcher.evaluate(&self.challenge, &tokens)?;
        debug!(
            "challenge '{}' evaluated with {:?} scheme: match={}",
            outcome.challenge, self.config.matching.scheme, outcome.is_match
        );

        let entries = self
            .feedback
            .assemble_feedback(std::slice::from_ref(&outcome))?;
        let entry = entries.into_iter().next().ok_or_else(|| {
            MatcherError::MissingField(format!(
                "feedback entry for challenge '{}'",
                outcome.challenge
            ))
        })?;

        let report = VerdictReport {
            challenge: outcome.challenge,
            verdict: Verdict::new(entry.missing),
            tokens: outcome.tokens,
            evaluated_at: Utc::now().to_rfc3339(),
        };
        Ok(report.into())
    }
}

/// Compares the input against whole correct-answer combinations,
/// order-independent: the input matches when its sorted-token signature
/// equals any answer's signature.
///
/// # Errors
/// `InvalidArgument` when `correct_answers` is empty.
pub fn tokenize_and_compare(
    user_input: &str,
    correct_answers: &[String],
) -> Result<bool, MatcherError> {
    if correct_answers.is_empty() {
        return Err(MatcherError::InvalidArgument(
            "correct answers list is empty".to_string(),
        ));
    }

    let input_signature = signature(&tokenize(user_input));
    Ok(correct_answers
        .iter()
        .any(|answer| signature(&tokenize(answer)) == input_signature))
}

/// True when every pattern has at least one satisfying token. Vacuously true
/// for an empty pattern list.
pub fn covers_all_patterns(user_input: &str, patterns: &[String]) -> bool {
    let tokens = tokenize(user_input);
    patterns
        .iter()
        .map(|raw| Pattern::parse(raw))
        .all(|pattern| tokens.iter().any(|token| pattern.matches(token)))
}

/// Buckets the input by category, checks each requirement, and renders the
/// misses, producing a full verdict.
pub fn categorize_and_validate(
    user_input: &str,
    requirements: &BTreeMap<Category, CategoryRequirement>,
) -> Verdict {
    let tokens = tokenize(user_input);
    let buckets = categorizer::categorize(&tokens);
    let (_, unmet) = check_requirements(requirements, &buckets);

    Verdict::new(AutoFeedback::new().render_missing(&unmet))
}

/// Requirement source for [`explain_missing`]: either whole reference
/// answers or an explicit pattern list.
pub enum Requirements<'a> {
    Answers(&'a [String]),
    Patterns(&'a [String]),
}

/// Renders the canonical feedback line for whatever the input leaves
/// unsatisfied.
///
/// With [`Requirements::Answers`] the checked patterns are derived from the
/// first answer only, so the hint tracks a single reference combination; an
/// input covering all of them reads `Perfect!` even when it is not an exact
/// reproduction. With [`Requirements::Patterns`] every listed pattern is
/// checked.
///
/// # Errors
/// `InvalidArgument` when the answers list is empty.
pub fn explain_missing(
    user_input: &str,
    requirements: Requirements<'_>,
) -> Result<String, MatcherError> {
    let patterns = match requirements {
        Requirements::Answers(answers) => {
            if answers.is_empty() {
                return Err(MatcherError::InvalidArgument(
                    "correct answers list is empty".to_string(),
                ));
            }
            patterns_from_answers(&answers[..1])
        }
        Requirements::Patterns(raw) => raw.iter().map(|pattern| Pattern::parse(pattern)).collect(),
    };

    let tokens = tokenize(user_input);
    let unmet: Vec<UnmetRequirement> = patterns
        .into_iter()
        .filter(|pattern| !tokens.iter().any(|token| pattern.matches(token)))
        .map(UnmetRequirement::Pattern)
        .collect();

    let missing = AutoFeedback::new().render_missing(&unmet);
    Ok(missing_message(&missing))
}
