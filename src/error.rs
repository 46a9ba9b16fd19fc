use std::path::PathBuf;

use thiserror::Error;

use crate::input::Benchmark;
use crate::model::indicators::Indicator;
use crate::model::metrics::MetricKey;

#[derive(Debug, Error)]
pub enum GradeError {
    #[error(
        "no score file for benchmark {benchmark} at {}: the benchmark most likely failed to run on this allocator",
        path.display()
    )]
    MissingScoreFile { benchmark: Benchmark, path: PathBuf },

    #[error("cannot read score file for benchmark {benchmark} at {}: {source}", path.display())]
    ScoreFileUnreadable {
        benchmark: Benchmark,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("benchmark {benchmark} did not report metric '{metric}'")]
    MissingMetric {
        benchmark: Benchmark,
        metric: MetricKey,
    },

    #[error("cannot average metric '{metric}' over an empty benchmark set")]
    EmptyAggregate { metric: MetricKey },

    #[error("invalid threshold {threshold} for indicator {indicator}")]
    InvalidThreshold { indicator: Indicator, threshold: f64 },

    #[error("cannot write summary to {}: {source}", path.display())]
    SummaryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode summary: {0}")]
    SummaryEncode(#[from] serde_json::Error),

    #[error("cannot write report: {0}")]
    Output(#[source] std::io::Error),
}
