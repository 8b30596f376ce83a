//! Weighted outcome selection.
//!
//! The selector never produces randomness itself. Callers hand it a draw in
//! `[0, 1)` (usually pulled from a [`DrawSource`]) so that identical inputs
//! always give the identical winner.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::constants::TOTAL_WEIGHT;
use crate::segment::{Configuration, Segment};

/// Index of the segment `draw` lands on.
///
/// Walks the segments in order, accumulating `weight / 100`, and stops at the
/// first one whose running total reaches the draw. When rounding leaves the
/// running total short of 1.0 the last segment wins. An empty configuration
/// has no winner.
pub fn select_index(configuration: &Configuration, draw: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    for (index, segment) in configuration.iter().enumerate() {
        cumulative += segment.weight / TOTAL_WEIGHT;
        if draw <= cumulative {
            return Some(index);
        }
    }
    configuration.len().checked_sub(1)
}

/// Segment `draw` lands on. See [`select_index`].
pub fn select(configuration: &Configuration, draw: f64) -> Option<&Segment> {
    select_index(configuration, draw).and_then(|index| configuration.get(index))
}

/// Source of uniform draws in `[0, 1)`.
pub trait DrawSource {
    fn next_draw(&mut self) -> f64;
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngDraws<R> {
    rng: R,
}

impl<R: Rng> RngDraws<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngDraws<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DrawSource for RngDraws<R> {
    fn next_draw(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// A committed spin result.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinOutcome {
    pub index: usize,
    pub segment: Segment,
    pub draw: f64,
}

impl SpinOutcome {
    pub fn from_draw(configuration: &Configuration, draw: f64) -> Option<Self> {
        let index = select_index(configuration, draw)?;
        let segment = configuration.get(index)?.clone();
        Some(Self { index, segment, draw })
    }
}
