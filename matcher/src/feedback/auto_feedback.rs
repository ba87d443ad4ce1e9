//! # AutoFeedback Strategy
//!
//! This module provides the `AutoFeedback` strategy for the matcher.
//! It implements the [`Feedback`] trait to render each unmet requirement into the canonical
//! missing-item wording, one line per requirement.
//!
//! ## Overview
//!
//! - Prefix patterns render as `<prefix>* class (e.g., <example>)`, with the example drawn
//!   from a curated list for the known utility families.
//! - Exact patterns render as `'<class>' class`, base families as `<base> class (e.g., <base>-lg)`
//!   and category requirements by their description (or the category name when none was given).
//! - Which curated example is shown is random per call unless the strategy is seeded;
//!   the choice never affects what is reported missing, only how it is illustrated.

use crate::error::MatcherError;
use crate::feedback::missing_message;
use crate::traits::feedback::{Feedback, FeedbackEntry};
use crate::types::{MatchOutcome, Pattern, UnmetRequirement};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;

static PADDING_FAMILY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^p[xylrtb]?-$").unwrap());
static MARGIN_FAMILY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^m[xylrtb]?-$").unwrap());

const PADDING_VALUES: &[&str] = &["4", "6", "8"];
const BACKGROUND_COLORS: &[&str] = &["white", "gray-800", "blue-500", "gray-100"];
const TEXT_COLORS: &[&str] = &["white", "black", "gray-700", "blue-600"];
const WIDTHS: &[&str] = &["full", "1/2", "1/3", "64"];
const HEIGHTS: &[&str] = &["full", "64", "32", "screen"];
const MAX_WIDTHS: &[&str] = &["md", "lg", "xl", "sm"];
const BORDER_COLORS: &[&str] = &["gray-300", "gray-200", "blue-500"];

/// Automatic feedback strategy: renders unmet requirements into the
/// canonical missing-item wording with concrete example classes.
///
/// `new()` draws examples from OS entropy; `seeded(seed)` fixes the draw so
/// output is reproducible. Each render call starts a fresh sequence from the
/// stored seed.
#[derive(Debug)]
pub struct AutoFeedback {
    example_seed: Option<u64>,
}

impl AutoFeedback {
    pub fn new() -> Self {
        AutoFeedback { example_seed: None }
    }

    pub fn seeded(seed: u64) -> Self {
        AutoFeedback {
            example_seed: Some(seed),
        }
    }

    fn rng(&self) -> StdRng {
        match self.example_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Renders each unmet requirement into one missing-item line.
    pub fn render_missing(&self, unmet: &[UnmetRequirement]) -> Vec<String> {
        let mut rng = self.rng();
        unmet
            .iter()
            .map(|requirement| render_one(requirement, &mut rng))
            .collect()
    }
}

impl Default for AutoFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl Feedback for AutoFeedback {
    fn assemble_feedback(
        &self,
        outcomes: &[MatchOutcome],
    ) -> Result<Vec<FeedbackEntry>, MatcherError> {
        let mut entries = Vec::new();

        for outcome in outcomes {
            let missing = self.render_missing(&outcome.unmet);
            let message = missing_message(&missing);
            entries.push(FeedbackEntry {
                challenge: outcome.challenge.clone(),
                missing,
                message,
            });
        }

        Ok(entries)
    }
}

fn render_one(requirement: &UnmetRequirement, rng: &mut StdRng) -> String {
    match requirement {
        UnmetRequirement::Pattern(Pattern::Prefix(prefix)) => {
            let example = prefix_example(prefix, rng);
            format!("{prefix}* class (e.g., {example})")
        }
        UnmetRequirement::Pattern(Pattern::Exact(class)) => format!("'{class}' class"),
        UnmetRequirement::Pattern(Pattern::BaseFamily(base)) => {
            format!("{base} class (e.g., {base}-lg)")
        }
        UnmetRequirement::Answer(answer) => format!("'{answer}' combination"),
        UnmetRequirement::Category {
            category,
            description,
            ..
        } => description
            .clone()
            .unwrap_or_else(|| category.name().to_string()),
    }
}

/// One concrete class for a prefix pattern. Padding and margin variants are
/// recognized as whole families; other known prefixes have their own value
/// lists, and anything unrecognized falls back to `<prefix>4`.
fn prefix_example(prefix: &str, rng: &mut StdRng) -> String {
    if PADDING_FAMILY.is_match(prefix) {
        return format!("{prefix}{}", pick(PADDING_VALUES, rng));
    }
    if MARGIN_FAMILY.is_match(prefix) {
        // mx- illustrates centering; the other margin variants use a size.
        return if prefix == "mx-" {
            format!("{prefix}auto")
        } else {
            format!("{prefix}4")
        };
    }
    match prefix {
        "bg-" => format!("{prefix}{}", pick(BACKGROUND_COLORS, rng)),
        "text-" => format!("{prefix}{}", pick(TEXT_COLORS, rng)),
        "w-" => format!("{prefix}{}", pick(WIDTHS, rng)),
        "h-" => format!("{prefix}{}", pick(HEIGHTS, rng)),
        "max-w-" => format!("{prefix}{}", pick(MAX_WIDTHS, rng)),
        "border-" => format!("{prefix}{}", pick(BORDER_COLORS, rng)),
        _ => format!("{prefix}4"),
    }
}

fn pick<'a>(values: &'a [&'a str], rng: &mut StdRng) -> &'a str {
    values[rng.gen_range(0..values.len())]
}
