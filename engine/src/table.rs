//! Bottom-up ways table.
//!
//! `table[r][s]` holds the number of ordered sequences of `r` dice (faces
//! 1..=6) whose values add up to exactly `s`. Row `r` is the row above it
//! convolved with one uniform die, truncated at the requested target sum.

use std::ops::Index;

use serde::Serialize;

use crate::{validate, DiceResult, FACES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountTable {
    rolls: usize,
    target_sum: usize,
    rows: Vec<Vec<u128>>,
}

impl CountTable {
    pub fn rolls(&self) -> usize {
        self.rolls
    }

    pub fn target_sum(&self) -> usize {
        self.target_sum
    }

    /// Ways for `r` dice to total `s`; `None` outside the computed bounds.
    pub fn get(&self, r: usize, s: usize) -> Option<u128> {
        self.rows.get(r).and_then(|row| row.get(s)).copied()
    }

    pub fn row(&self, r: usize) -> &[u128] {
        &self.rows[r]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u128]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// The requested cell, `table[rolls][target_sum]`.
    pub fn answer(&self) -> u128 {
        self.rows[self.rolls][self.target_sum]
    }
}

impl Index<usize> for CountTable {
    type Output = [u128];

    fn index(&self, r: usize) -> &[u128] {
        self.row(r)
    }
}

/// Build the full `(rolls + 1) x (target_sum + 1)` table.
pub fn compute_table(rolls: i32, target_sum: i32) -> DiceResult<CountTable> {
    let (rolls, target_sum) = validate(rolls, target_sum)?;

    let mut rows = vec![vec![0u128; target_sum + 1]; rolls + 1];
    rows[0][0] = 1;

    for r in 1..=rolls {
        let (done, rest) = rows.split_at_mut(r);
        let prev = &done[r - 1];
        let cur = &mut rest[0];
        for s in 1..=target_sum {
            cur[s] = (1..=FACES as usize)
                .filter(|&face| face <= s)
                .map(|face| prev[s - face])
                .sum();
        }
    }

    tracing::debug!(rolls, target_sum, "built count table");
    Ok(CountTable {
        rolls,
        target_sum,
        rows,
    })
}
