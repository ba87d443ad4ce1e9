//! Core data types shared by the matching strategies.
//!
//! The central type is [`Pattern`], the single requirement unit every
//! strategy speaks in. Strategies produce a [`MatchOutcome`] per challenge;
//! the feedback layer renders its [`UnmetRequirement`]s into wording.

use crate::tokenizer::tokenize;
use util::challenge::Category;

/// The two bare spellings that match as prefixes. Both utility families have
/// a bare form and suffixed forms (`rounded` / `rounded-lg`), so requiring
/// whole-token equality would reject valid variants.
const BASE_FAMILIES: [&str; 2] = ["rounded", "shadow"];

/// A single matching rule for one requirement.
///
/// The shape is structural: a trailing `-` marks a prefix pattern, the base
/// families `rounded` and `shadow` match as prefixes despite having no
/// trailing separator, and every other spelling requires whole-token
/// equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Whole-token equality, e.g. `flex`.
    Exact(String),
    /// Token must start with the stored text (trailing `-` kept), e.g. `px-`.
    Prefix(String),
    /// Bare family matched as a prefix: `rounded` or `shadow`.
    BaseFamily(String),
}

impl Pattern {
    /// Classifies a raw pattern string by its structure.
    pub fn parse(raw: &str) -> Pattern {
        if raw.ends_with('-') {
            Pattern::Prefix(raw.to_string())
        } else if BASE_FAMILIES.contains(&raw) {
            Pattern::BaseFamily(raw.to_string())
        } else {
            Pattern::Exact(raw.to_string())
        }
    }

    /// Whether `token` satisfies this pattern.
    pub fn matches(&self, token: &str) -> bool {
        match self {
            Pattern::Exact(class) => token == class,
            Pattern::Prefix(prefix) => token.starts_with(prefix.as_str()),
            Pattern::BaseFamily(base) => token.starts_with(base.as_str()),
        }
    }

    /// The raw pattern text as the challenge author wrote it.
    pub fn label(&self) -> &str {
        match self {
            Pattern::Exact(s) | Pattern::Prefix(s) | Pattern::BaseFamily(s) => s,
        }
    }
}

/// Derives the pattern set implied by a list of reference answers.
///
/// Each dashed answer token contributes a prefix pattern built from the text
/// before its first dash (`px-4` => `px-`); bare tokens contribute their
/// parsed pattern. Duplicates collapse and first-seen order is kept, so the
/// derived list reads in the order the answers introduce requirements.
pub fn patterns_from_answers(answers: &[String]) -> Vec<Pattern> {
    let mut patterns: Vec<Pattern> = Vec::new();
    for answer in answers {
        for token in tokenize(answer) {
            let pattern = match token.split_once('-') {
                Some((base, _)) => Pattern::Prefix(format!("{base}-")),
                None => Pattern::parse(&token),
            };
            if !patterns.contains(&pattern) {
                patterns.push(pattern);
            }
        }
    }
    patterns
}

/// One requirement the input failed to satisfy.
#[derive(Debug, Clone, PartialEq)]
pub enum UnmetRequirement {
    /// A pattern with no satisfying token.
    Pattern(Pattern),
    /// An accepted answer combination the input did not reproduce.
    Answer(String),
    /// A required category with no token, or none containing a required value.
    Category {
        category: Category,
        description: Option<String>,
        specific_values: Vec<String>,
    },
}

/// Per-challenge evaluation record handed to the feedback layer.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// Name of the evaluated challenge.
    pub challenge: String,
    /// Strategy verdict for the input.
    pub is_match: bool,
    /// Labels of the satisfied requirements, in evaluation order.
    pub matched: Vec<String>,
    /// Requirements the input failed, in evaluation order.
    pub unmet: Vec<UnmetRequirement>,
    /// The normalized tokens that were evaluated.
    pub tokens: Vec<String>,
}
