use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::{validate, DiceError, DiceResult, Query, FACES};

/// Seeded six-sided dice.
pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn d6(&mut self) -> u32 {
        self.rng.gen_range(1..=FACES)
    }

    pub fn roll_sum(&mut self, count: u32) -> u32 {
        (0..count).map(|_| self.d6()).sum()
    }
}

/// Outcome of throwing the dice `samples` times and counting target hits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleEstimate {
    pub samples: u64,
    pub hits: u64,
    pub percentage: f64,
}

/// Monte Carlo estimate of the chance that `query.rolls` dice total `query.target_sum`.
pub fn estimate(query: Query, samples: u64, seed: u64) -> DiceResult<SampleEstimate> {
    let (rolls, target) = validate(query.rolls, query.target_sum)?;
    if samples == 0 {
        return Err(DiceError::InvalidInput("samples must be positive".into()));
    }

    let mut dice = Dice::from_seed(seed);
    let hits = (0..samples)
        .filter(|_| dice.roll_sum(rolls as u32) as usize == target)
        .count() as u64;

    tracing::debug!(samples, hits, seed, "sampling finished");
    Ok(SampleEstimate {
        samples,
        hits,
        percentage: hits as f64 / samples as f64 * 100.0,
    })
}
