//! # Matchers
//!
//! This module provides a collection of matchers for validating learner-supplied class strings.
//! Each matcher implements a specific reading of a challenge's requirements and decides whether
//! the normalized input tokens satisfy them.
//!
//! All matchers in this module adhere to the `ClassMatcher` trait, which defines a
//! common interface for evaluation. This allows for flexible and interchangeable
//! matching strategies within the validation pipeline.
//!
//! The available matchers are:
//! - [`answer_matcher`]: Compares the input against whole accepted combinations, order-independent.
//! - [`pattern_matcher`]: Requires every individual pattern to be covered by some token.
//! - [`category_matcher`]: Checks per-category requirements against the bucketed input.

pub mod answer_matcher;
pub mod category_matcher;
pub mod pattern_matcher;
