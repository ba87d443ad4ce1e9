//! A matcher that checks per-category requirements against the bucketed input, where **only required categories are enforced**.
//!
//! The `CategoryMatcher` buckets the input tokens through the categorizer and then walks the
//! challenge's requirement map. A required category is satisfied when its bucket is non-empty
//! and, if the requirement lists specific values, at least one token in the bucket **contains**
//! one of them (substring match, not prefix: `blue` accepts `bg-blue-500`).

use crate::categorizer::categorize;
use crate::error::MatcherError;
use crate::traits::matcher::ClassMatcher;
use crate::types::{MatchOutcome, UnmetRequirement};
use std::collections::BTreeMap;
use util::challenge::{Category, CategoryRequirement, Challenge};

/// A matcher that passes the input when every required category is satisfied.
///
/// Requirement maps are keyed by category and iterate in category priority
/// order, so unmet entries come out in a stable order no matter how the map
/// was built. Non-required entries are ignored entirely. An empty requirement
/// map is vacuously satisfied.
pub struct CategoryMatcher;

impl ClassMatcher for CategoryMatcher {
    fn evaluate(
        &self,
        challenge: &Challenge,
        tokens: &[String],
    ) -> Result<MatchOutcome, MatcherError> {
        let requirements = challenge.categories.as_ref().ok_or_else(|| {
            MatcherError::MissingField(format!(
                "challenge '{}' carries no category requirements",
                challenge.name
            ))
        })?;

        let buckets = categorize(tokens);
        let (matched, unmet) = check_requirements(requirements, &buckets);

        Ok(MatchOutcome {
            challenge: challenge.name.clone(),
            is_match: unmet.is_empty(),
            matched,
            unmet,
            tokens: tokens.to_vec(),
        })
    }
}

/// Walks a requirement map against bucketed tokens, splitting the required
/// entries into satisfied labels and unmet requirements.
pub(crate) fn check_requirements(
    requirements: &BTreeMap<Category, CategoryRequirement>,
    buckets: &BTreeMap<Category, Vec<String>>,
) -> (Vec<String>, Vec<UnmetRequirement>) {
    let mut matched = Vec::new();
    let mut unmet = Vec::new();

    for (category, requirement) in requirements {
        if !requirement.required {
            continue;
        }

        let bucket = buckets.get(category).map(Vec::as_slice).unwrap_or(&[]);
        let satisfied = !bucket.is_empty()
            && (requirement.specific_values.is_empty()
                || bucket.iter().any(|token| {
                    requirement
                        .specific_values
                        .iter()
                        .any(|value| token.contains(value.as_str()))
                }));

        if satisfied {
            matched.push(
                requirement
                    .description
                    .clone()
                    .unwrap_or_else(|| category.name().to_string()),
            );
        } else {
            unmet.push(UnmetRequirement::Category {
                category: *category,
                description: requirement.description.clone(),
                specific_values: requirement.specific_values.clone(),
            });
        }
    }

    (matched, unmet)
}
