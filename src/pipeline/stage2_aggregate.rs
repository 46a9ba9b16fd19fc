use crate::error::GradeError;
use crate::input::{BenchmarkResult, BenchmarkSet};
use crate::model::indicators::{CompositeIndicators, Indicator};
use crate::model::metrics::MetricKey;

/// Neumaier-compensated sum, so that e.g. 1.0, 0.9, 0.8, 0.7 sums to exactly 3.4.
pub fn compensated_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0f64;
    let mut comp = 0.0f64;
    for &x in values {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            comp += (sum - t) + x;
        } else {
            comp += (x - t) + sum;
        }
        sum = t;
    }
    if comp != 0.0 && comp.is_finite() {
        sum += comp;
    }
    sum
}

pub fn mean_metric(results: &[&BenchmarkResult], key: MetricKey) -> Result<f64, GradeError> {
    if results.is_empty() {
        return Err(GradeError::EmptyAggregate { metric: key });
    }
    let mut values = Vec::with_capacity(results.len());
    for result in results {
        let value = result
            .metric(key.as_str())
            .ok_or(GradeError::MissingMetric {
                benchmark: result.benchmark,
                metric: key,
            })?;
        values.push(value);
    }
    Ok(compensated_sum(&values) / values.len() as f64)
}

pub fn aggregate_indicator(set: &BenchmarkSet, indicator: Indicator) -> Result<f64, GradeError> {
    let value = mean_metric(&set.select(indicator.sources()), indicator.metric())?;
    tracing::debug!(indicator = %indicator, value, "aggregated indicator");
    Ok(value)
}

pub fn run_stage2(set: &BenchmarkSet) -> Result<CompositeIndicators, GradeError> {
    Ok(CompositeIndicators {
        sequential_speed: aggregate_indicator(set, Indicator::SequentialSpeed)?,
        multi_threaded_speedup: aggregate_indicator(set, Indicator::MultiThreadedSpeedup)?,
        false_sharing_avoidance: aggregate_indicator(set, Indicator::FalseSharingAvoidance)?,
        fragmentation: aggregate_indicator(set, Indicator::Fragmentation)?,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
