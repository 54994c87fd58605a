use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{DiceError, DiceResult, Query, DEFAULT_DEPTH_LIMIT};

/// Bounds the presentation layer puts on user queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    pub max_rolls: i32,
    pub max_target_sum: i32,
    /// Deepest recursion the baseline counter may attempt.
    pub depth_limit: i32,
    /// Only run the table; the recursive count and its timing are left out.
    pub skip_recursive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_rolls: 20,
            max_target_sum: 120,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            skip_recursive: false,
        }
    }
}

impl Config {
    /// Read a YAML config; fields not present keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Reject queries outside `1..=max_rolls` and `1..=max_target_sum`.
    pub fn check(&self, query: Query) -> DiceResult<()> {
        if !(1..=self.max_rolls).contains(&query.rolls) {
            return Err(DiceError::OutOfBounds {
                field: "rolls",
                value: query.rolls,
                max: self.max_rolls,
            });
        }
        if !(1..=self.max_target_sum).contains(&query.target_sum) {
            return Err(DiceError::OutOfBounds {
                field: "target_sum",
                value: query.target_sum,
                max: self.max_target_sum,
            });
        }
        Ok(())
    }
}
