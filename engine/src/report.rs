//! Aggregation of both counters into a single report: totals, the
//! probability of every achievable sum and how long each counter took.

use std::time::{Duration, Instant};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    compute_table, compute_ways_bounded, Config, CountTable, DiceError, DiceResult, FACES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Query {
    pub rolls: i32,
    pub target_sum: i32,
}

impl Query {
    pub fn new(rolls: i32, target_sum: i32) -> Self {
        Self { rolls, target_sum }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Iterative,
    Recursive,
}

impl Method {
    pub fn label(self) -> &'static str {
        match self {
            Method::Iterative => "iterative",
            Method::Recursive => "recursive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub method: Method,
    pub seconds: f64,
}

/// Iterative and recursive timings, in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingComparison {
    pub iterative: Timing,
    pub recursive: Option<Timing>,
}

impl TimingComparison {
    pub fn new(iterative: Duration, recursive: Option<Duration>) -> Self {
        Self {
            iterative: Timing {
                method: Method::Iterative,
                seconds: iterative.as_secs_f64(),
            },
            recursive: recursive.map(|d| Timing {
                method: Method::Recursive,
                seconds: d.as_secs_f64(),
            }),
        }
    }

    pub fn entries(&self) -> Vec<Timing> {
        std::iter::once(self.iterative).chain(self.recursive).collect()
    }

    /// The quicker counter; ties go to the table.
    pub fn faster(&self) -> Method {
        match self.recursive {
            Some(r) if r.seconds < self.iterative.seconds => Method::Recursive,
            _ => Method::Iterative,
        }
    }
}

/// Percentage of all `6^rolls` outcomes landing on each sum, ordered by sum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbabilityDistribution(IndexMap<u32, f64>);

impl ProbabilityDistribution {
    /// Distribution of `table[rolls][s]` for `s` over `min_sum..=max_sum`.
    pub fn from_table(table: &CountTable, min_sum: u32, max_sum: u32) -> Self {
        let rolls = table.rolls();
        let total = total_combinations(rolls as u32) as f64;
        let entries = (min_sum..=max_sum)
            .filter_map(|s| table.get(rolls, s as usize).map(|ways| (s, ways)))
            .map(|(s, ways)| (s, ways as f64 / total * 100.0))
            .collect();
        Self(entries)
    }

    pub fn get(&self, sum: u32) -> Option<f64> {
        self.0.get(&sum).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0.iter().map(|(&s, &p)| (s, p))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total_percentage(&self) -> f64 {
        self.0.values().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub query: Query,
    pub iterative_ways: u128,
    pub recursive_ways: Option<u128>,
    pub total_combinations: u128,
    /// Achievable sums considered: `[rolls, min(6 * rolls, target_sum)]`.
    pub min_sum: u32,
    pub max_sum: u32,
    pub target_percentage: f64,
    pub distribution: ProbabilityDistribution,
    pub timings: TimingComparison,
    pub table: CountTable,
}

impl Report {
    /// Assemble a report from counter outputs that were already computed.
    pub fn build(
        query: Query,
        table: CountTable,
        recursive_ways: Option<u128>,
        iterative_elapsed: Duration,
        recursive_elapsed: Option<Duration>,
    ) -> Self {
        let rolls = table.rolls() as u32;
        let target = table.target_sum() as u32;
        let total = total_combinations(rolls);
        let iterative_ways = table.answer();

        let min_sum = rolls;
        let max_sum = (FACES * rolls).min(target);
        let distribution = if min_sum <= max_sum {
            ProbabilityDistribution::from_table(&table, min_sum, max_sum)
        } else {
            ProbabilityDistribution::default()
        };

        Self {
            query,
            iterative_ways,
            recursive_ways,
            total_combinations: total,
            min_sum,
            max_sum,
            target_percentage: iterative_ways as f64 / total as f64 * 100.0,
            distribution,
            timings: TimingComparison::new(iterative_elapsed, recursive_elapsed),
            table,
        }
    }

    /// True when the achievable interval is empty (`target_sum < rolls`).
    pub fn is_unreachable_range(&self) -> bool {
        self.min_sum > self.max_sum
    }
}

/// `6^rolls`, the number of equally likely outcomes.
pub fn total_combinations(rolls: u32) -> u128 {
    (FACES as u128).pow(rolls)
}

/// Validate, run and time both counters, then aggregate.
pub fn analyze(query: Query, config: &Config) -> DiceResult<Report> {
    config.check(query)?;

    let start = Instant::now();
    let table = compute_table(query.rolls, query.target_sum)?;
    let iterative_elapsed = start.elapsed();
    let iterative_ways = table.answer();

    let (recursive_ways, recursive_elapsed) = if config.skip_recursive {
        tracing::warn!(rolls = query.rolls, "skipping recursive baseline");
        (None, None)
    } else {
        let start = Instant::now();
        let ways = compute_ways_bounded(query.rolls, query.target_sum, config.depth_limit)?;
        let elapsed = start.elapsed();
        if ways != iterative_ways {
            return Err(DiceError::Mismatch {
                iterative: iterative_ways,
                recursive: ways,
            });
        }
        (Some(ways), Some(elapsed))
    };

    tracing::debug!(
        rolls = query.rolls,
        target_sum = query.target_sum,
        ways = %iterative_ways,
        "analysis finished"
    );
    Ok(Report::build(
        query,
        table,
        recursive_ways,
        iterative_elapsed,
        recursive_elapsed,
    ))
}
