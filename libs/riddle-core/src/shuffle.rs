//! Deterministic option shuffling.
//!
//! The quiz presents each riddle's options in a varied order. The
//! permutation comes from a caller-supplied [`Rng`], so a seeded
//! `StdRng` makes a whole run reproducible and tests can pin the order.

use rand::Rng;

use crate::types::Riddle;

/// Fisher-Yates shuffle in place.
pub fn shuffle_in_place<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// A permutation of the riddle's options drawn from `rng`.
pub fn shuffled_options<R: Rng>(riddle: &Riddle, rng: &mut R) -> Vec<String> {
    let mut options = riddle.options.clone();
    shuffle_in_place(&mut options, rng);
    options
}
