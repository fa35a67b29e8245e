//! Command-line arguments for the `bst-demo` driver.

use std::ops::RangeInclusive;

use clap::{ArgAction, Parser};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{DemoError, DemoResult};

/// Build a tree from random values, skew it, and rebalance it.
#[derive(Parser, Debug)]
#[command(name = "bst-demo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// How many random values to build the initial tree from
    #[arg(short = 'n', long, default_value_t = 15)]
    pub count: usize,

    /// Smallest random value (inclusive)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub min: i32,

    /// Largest random value (inclusive)
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub max: i32,

    /// Seed for the random values; fresh entropy when absent
    #[arg(long, env = "BST_DEMO_SEED")]
    pub seed: Option<u64>,

    /// Values inserted one by one after the tree is built
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [110, 115, 120, 125, 130]
    )]
    pub skew: Vec<i32>,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}

impl Cli {
    /// Validates the arguments into a [`DemoConfig`].
    pub fn config(&self) -> DemoResult<DemoConfig> {
        if self.min > self.max {
            return Err(DemoError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(DemoConfig {
            count: self.count,
            range: self.min..=self.max,
            seed: self.seed,
            skew: self.skew.clone(),
        })
    }
}

/// Validated settings for one demo run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of random values.
    pub count: usize,
    /// Non-empty range the random values are drawn from.
    pub range: RangeInclusive<i32>,
    /// RNG seed, if the run should be reproducible.
    pub seed: Option<u64>,
    /// Values inserted after construction.
    pub skew: Vec<i32>,
}

impl DemoConfig {
    /// Draws `count` values from `range`. Repeats are possible; the tree drops them.
    pub fn sample(&self) -> Vec<i32> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        (0..self.count)
            .map(|_| rng.gen_range(self.range.clone()))
            .collect()
    }
}
