pub mod config;
pub mod error;
pub mod recursive;
pub mod report;
pub mod sampler;
pub mod table;

pub use config::Config;
pub use error::{DiceError, DiceResult};
pub use recursive::{compute_ways, compute_ways_bounded, DEFAULT_DEPTH_LIMIT};
pub use report::{
    analyze, total_combinations, Method, ProbabilityDistribution, Query, Report, Timing,
    TimingComparison,
};
pub use sampler::{estimate, Dice, SampleEstimate};
pub use table::{compute_table, CountTable};

/// Faces on every die: 1..=FACES.
pub const FACES: u32 = 6;

/// Largest roll count whose `6^rolls` still fits in a `u128`.
pub const MAX_ROLLS: i32 = 49;

/// Reject negative inputs and roll counts the counters cannot represent.
pub(crate) fn validate(rolls: i32, target_sum: i32) -> DiceResult<(usize, usize)> {
    if rolls < 0 {
        return Err(DiceError::InvalidInput(format!(
            "rolls must be non-negative, got {rolls}"
        )));
    }
    if target_sum < 0 {
        return Err(DiceError::InvalidInput(format!(
            "target sum must be non-negative, got {target_sum}"
        )));
    }
    if rolls > MAX_ROLLS {
        return Err(DiceError::InvalidInput(format!(
            "rolls must be at most {MAX_ROLLS}, got {rolls}"
        )));
    }
    Ok((rolls as usize, target_sum as usize))
}
