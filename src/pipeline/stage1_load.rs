use std::path::Path;

use crate::error::GradeError;
use crate::input::{BenchmarkSet, load_benchmark_set};

#[derive(Debug)]
pub struct Stage1Output {
    pub results: BenchmarkSet,
}

pub fn run_stage1(root: &Path) -> Result<Stage1Output, GradeError> {
    tracing::info!(root = %root.display(), "loading benchmark score files");
    let results = load_benchmark_set(root)?;
    tracing::debug!(
        metrics = results.iter().map(|r| r.metrics.len()).sum::<usize>(),
        "loaded all benchmarks"
    );
    Ok(Stage1Output { results })
}
