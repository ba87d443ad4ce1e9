//!
//! Traits Module
//!
//! This module contains the core traits used throughout the matcher for extensibility and abstraction.
//!
//! - [`matcher`]: Defines the strategy trait for validating tokenized input against a challenge.
//! - [`feedback`]: Defines the trait for rendering unmet requirements into learner-facing feedback.
//!
//! Implement these traits to extend or customize the matcher's behavior for new matching schemes or feedback styles.

pub mod feedback;
pub mod matcher;
