//! Option shuffling for quiz rounds.
//!
//! Wraps a seedable RNG so option orders are reproducible: `new(seed)` gives
//! a deterministic sequence for tests, `from_entropy()` a fresh one per
//! session. Inputs are never mutated; shuffles work on a copy.

use crate::error::GameError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A shuffled option list together with the new position of the correct
/// answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Randomized<T> {
    pub options: Vec<T>,
    pub correct_index: usize,
}

pub struct Shuffler {
    rng: StdRng,
}

impl Shuffler {
    pub fn new(seed: u64) -> Self {
        Shuffler {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Shuffler {
            rng: StdRng::from_entropy(),
        }
    }

    /// Returns the items in a uniformly random order, leaving the input
    /// untouched.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        shuffled.shuffle(&mut self.rng);
        shuffled
    }

    /// Shuffles quiz options and tracks where the correct answer ends up.
    ///
    /// # Errors
    /// `InvalidArgument` when `items` is empty or `correct_index` is out of
    /// range.
    pub fn randomize<T: Clone + PartialEq>(
        &mut self,
        items: &[T],
        correct_index: usize,
    ) -> Result<Randomized<T>, GameError> {
        if items.is_empty() {
            return Err(GameError::InvalidArgument(
                "cannot randomize an empty options list".to_string(),
            ));
        }
        if correct_index >= items.len() {
            return Err(GameError::InvalidArgument(format!(
                "correct index {correct_index} is out of range for {} options",
                items.len()
            )));
        }

        let correct = items[correct_index].clone();
        let options = self.shuffle(items);
        let correct_index = options
            .iter()
            .position(|option| *option == correct)
            .unwrap_or(0);

        Ok(Randomized {
            options,
            correct_index,
        })
    }

    /// A random integer in `min..=max`.
    ///
    /// # Errors
    /// `InvalidArgument` when `min > max`.
    pub fn random_int(&mut self, min: i64, max: i64) -> Result<i64, GameError> {
        if min > max {
            return Err(GameError::InvalidArgument(format!(
                "empty range {min}..={max}"
            )));
        }
        Ok(self.rng.gen_range(min..=max))
    }

    /// A random element of the slice.
    ///
    /// # Errors
    /// `InvalidArgument` when `items` is empty.
    pub fn random_element<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, GameError> {
        items.choose(&mut self.rng).ok_or_else(|| {
            GameError::InvalidArgument("cannot pick from an empty list".to_string())
        })
    }
}
