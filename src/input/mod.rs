use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

pub mod scores;

use crate::error::GradeError;
use scores::read_score_file;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Benchmark {
    CacheScratch,
    CacheThrash,
    Larson,
    Threadtest,
}

impl Benchmark {
    pub const ALL: [Benchmark; 4] = [
        Benchmark::CacheScratch,
        Benchmark::CacheThrash,
        Benchmark::Larson,
        Benchmark::Threadtest,
    ];

    pub fn dir_name(self) -> &'static str {
        match self {
            Benchmark::CacheScratch => "cache-scratch",
            Benchmark::CacheThrash => "cache-thrash",
            Benchmark::Larson => "larson",
            Benchmark::Threadtest => "threadtest",
        }
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Metrics reported by one benchmark run, keyed by the name on the left of `" = "`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult {
    pub benchmark: Benchmark,
    pub metrics: BTreeMap<String, f64>,
}

impl BenchmarkResult {
    pub fn new(benchmark: Benchmark, metrics: BTreeMap<String, f64>) -> Self {
        Self { benchmark, metrics }
    }

    pub fn metric(&self, key: &str) -> Option<f64> {
        self.metrics.get(key).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkSet {
    pub cache_scratch: BenchmarkResult,
    pub cache_thrash: BenchmarkResult,
    pub larson: BenchmarkResult,
    pub threadtest: BenchmarkResult,
}

impl BenchmarkSet {
    pub fn get(&self, benchmark: Benchmark) -> &BenchmarkResult {
        match benchmark {
            Benchmark::CacheScratch => &self.cache_scratch,
            Benchmark::CacheThrash => &self.cache_thrash,
            Benchmark::Larson => &self.larson,
            Benchmark::Threadtest => &self.threadtest,
        }
    }

    pub fn select(&self, benchmarks: &[Benchmark]) -> Vec<&BenchmarkResult> {
        benchmarks.iter().map(|&b| self.get(b)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BenchmarkResult> {
        Benchmark::ALL.into_iter().map(|b| self.get(b))
    }
}

/// `<root>/<benchmark>/Results/alloc/scores`
pub fn score_path(root: &Path, benchmark: Benchmark) -> PathBuf {
    root.join(benchmark.dir_name())
        .join("Results")
        .join("alloc")
        .join("scores")
}

/// Reads all four score files in fixed order. The first unavailable file aborts the load.
pub fn load_benchmark_set(root: &Path) -> Result<BenchmarkSet, GradeError> {
    let load = |benchmark: Benchmark| -> Result<BenchmarkResult, GradeError> {
        let path = score_path(root, benchmark);
        let metrics = read_score_file(benchmark, &path)?;
        tracing::debug!(
            benchmark = %benchmark,
            path = %path.display(),
            metrics = metrics.len(),
            "loaded score file"
        );
        Ok(BenchmarkResult::new(benchmark, metrics))
    };

    Ok(BenchmarkSet {
        cache_scratch: load(Benchmark::CacheScratch)?,
        cache_thrash: load(Benchmark::CacheThrash)?,
        larson: load(Benchmark::Larson)?,
        threadtest: load(Benchmark::Threadtest)?,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
