//! Timing loop for comparing call strategies.

use std::fmt::Display;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// How many calls to time and how often to repeat the measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Calls per timed run
    pub iterations: u64,

    /// Number of timed runs averaged together
    pub average_over: u32,

    /// Integer argument passed to every call
    pub param: i64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 100_000,
            average_over: 10,
            param: 42,
        }
    }
}

impl Display for BenchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BenchConfig {{ iterations: {}, average_over: {}, param: {} }}",
            self.iterations, self.average_over, self.param
        )
    }
}

impl BenchConfig {
    pub fn builder() -> BenchConfigBuilder {
        BenchConfigBuilder::default()
    }

    /// Run `call` `iterations` times, `average_over` times, and return the
    /// mean duration of one run.
    pub fn measure<F: FnMut()>(&self, mut call: F) -> Duration {
        let runs = self.average_over.max(1);
        let mut total = Duration::ZERO;
        for _ in 0..runs {
            let start = Instant::now();
            for _ in 0..self.iterations {
                call();
            }
            total += start.elapsed();
        }
        total / runs
    }
}

#[derive(Debug, Clone, Default)]
pub struct BenchConfigBuilder {
    config: BenchConfig,
}

impl BenchConfigBuilder {
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Zero is treated as a single run.
    pub fn average_over(mut self, average_over: u32) -> Self {
        self.config.average_over = average_over.max(1);
        self
    }

    pub fn param(mut self, param: i64) -> Self {
        self.config.param = param;
        self
    }

    pub fn build(self) -> BenchConfig {
        self.config
    }
}
