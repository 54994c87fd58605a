//! Naive recursive ways counter.
//!
//! Deliberately unmemoized: it exists as the slow baseline next to the
//! table, so its cost grows as `6^rolls`.

use crate::{validate, DiceError, DiceResult, FACES};

/// Depth used by [`compute_ways`].
pub const DEFAULT_DEPTH_LIMIT: i32 = 32;

/// Count the ways `rolls` dice can total `target_sum`.
pub fn compute_ways(rolls: i32, target_sum: i32) -> DiceResult<u128> {
    compute_ways_bounded(rolls, target_sum, DEFAULT_DEPTH_LIMIT)
}

/// Same as [`compute_ways`], refusing to recurse deeper than `depth_limit`.
pub fn compute_ways_bounded(rolls: i32, target_sum: i32, depth_limit: i32) -> DiceResult<u128> {
    let (rolls, target_sum) = validate(rolls, target_sum)?;
    if rolls > depth_limit.max(0) as usize {
        return Err(DiceError::DepthExceeded {
            rolls: rolls as i32,
            limit: depth_limit,
        });
    }
    tracing::debug!(rolls, target_sum, "starting recursive count");
    Ok(ways(rolls, target_sum))
}

fn ways(rolls: usize, target_sum: usize) -> u128 {
    if rolls == 0 {
        return if target_sum == 0 { 1 } else { 0 };
    }

    let mut total = 0;
    for face in 1..=FACES as usize {
        // negative remainders are skipped, never recursed into
        if face <= target_sum {
            total += ways(rolls - 1, target_sum - face);
        }
    }
    total
}
