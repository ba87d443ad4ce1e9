//! Token categorization.
//!
//! Tokens are classified by an explicit ordered rule table: the first rule
//! that applies wins, so overlapping prefixes resolve the same way every
//! time. The table order is a published contract; reordering it changes
//! which bucket ambiguous tokens land in. Tokens no rule claims fall into
//! [`Category::Misc`], so categorization is total and never fails.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use util::challenge::Category;

static PADDING_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^p[xylrtb]?-").unwrap());
static MARGIN_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^m[xylrtb]?-").unwrap());

enum RuleTest {
    /// Token starts with any of these prefixes.
    Prefixes(&'static [&'static str]),
    /// Token equals one of these classes.
    Exacts(&'static [&'static str]),
    /// Token matches the regex.
    Matches(&'static Lazy<Regex>),
}

struct CategoryRule {
    category: Category,
    test: RuleTest,
}

impl CategoryRule {
    fn applies(&self, token: &str) -> bool {
        match &self.test {
            RuleTest::Prefixes(prefixes) => prefixes.iter().any(|p| token.starts_with(p)),
            RuleTest::Exacts(classes) => classes.contains(&token),
            RuleTest::Matches(regex) => regex.is_match(token),
        }
    }
}

/// Highest to lowest priority. Display appears twice: the flex spellings
/// outrank the flex modifier prefixes, the plain spellings sit after
/// position, and both rows feed the same bucket.
static RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Background,
        test: RuleTest::Prefixes(&["bg-"]),
    },
    CategoryRule {
        category: Category::Padding,
        test: RuleTest::Matches(&PADDING_RULE),
    },
    CategoryRule {
        category: Category::Margin,
        test: RuleTest::Matches(&MARGIN_RULE),
    },
    CategoryRule {
        category: Category::Width,
        test: RuleTest::Prefixes(&["w-", "min-w-", "max-w-"]),
    },
    CategoryRule {
        category: Category::Height,
        test: RuleTest::Prefixes(&["h-", "min-h-", "max-h-"]),
    },
    CategoryRule {
        category: Category::Display,
        test: RuleTest::Exacts(&["flex", "inline-flex"]),
    },
    CategoryRule {
        category: Category::Flex,
        test: RuleTest::Prefixes(&["flex-", "items-", "justify-", "content-", "self-"]),
    },
    CategoryRule {
        category: Category::Grid,
        test: RuleTest::Prefixes(&["grid"]),
    },
    CategoryRule {
        category: Category::Typography,
        test: RuleTest::Prefixes(&["text-", "font-", "leading-", "tracking-"]),
    },
    CategoryRule {
        category: Category::Typography,
        test: RuleTest::Exacts(&["uppercase", "lowercase", "capitalize", "normal-case"]),
    },
    CategoryRule {
        category: Category::Border,
        test: RuleTest::Prefixes(&["border", "rounded"]),
    },
    CategoryRule {
        category: Category::Shadow,
        test: RuleTest::Prefixes(&["shadow"]),
    },
    CategoryRule {
        category: Category::Position,
        test: RuleTest::Exacts(&["relative", "absolute", "fixed", "static", "sticky"]),
    },
    CategoryRule {
        category: Category::Display,
        test: RuleTest::Exacts(&["block", "inline", "hidden", "invisible"]),
    },
    CategoryRule {
        category: Category::Overflow,
        test: RuleTest::Prefixes(&["overflow-"]),
    },
    CategoryRule {
        category: Category::Animation,
        test: RuleTest::Prefixes(&["animate-", "transition", "duration-", "ease-", "delay-"]),
    },
];

/// Classifies one normalized token. Total: every token maps to exactly one
/// category.
pub fn categorize_token(token: &str) -> Category {
    RULES
        .iter()
        .find(|rule| rule.applies(token))
        .map(|rule| rule.category)
        .unwrap_or(Category::Misc)
}

/// Buckets tokens by category, preserving input order within each bucket.
/// Only categories that received at least one token appear as keys.
pub fn categorize(tokens: &[String]) -> BTreeMap<Category, Vec<String>> {
    let mut buckets: BTreeMap<Category, Vec<String>> = BTreeMap::new();
    for token in tokens {
        buckets
            .entry(categorize_token(token))
            .or_default()
            .push(token.clone());
    }
    buckets
}
