//! # Game Library
//!
//! Session scoring and option-shuffling helpers for the quiz layer that sits
//! on top of the matcher. The session tracker is a plain synchronous struct
//! with no invariants beyond simple counters; the shuffler wraps a seedable
//! RNG so option orders are reproducible in tests.

pub mod error;
pub mod session;
pub mod shuffle;
