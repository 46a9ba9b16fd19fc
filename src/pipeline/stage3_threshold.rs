use crate::error::GradeError;
use crate::model::grade::CappedScores;
use crate::model::indicators::{CompositeIndicators, Indicator};
use crate::model::policy::GradingPolicy;

/// `min(value / threshold, 1.0)`. No lower bound; a NaN ratio is passed through.
pub fn cap_ratio(indicator: Indicator, value: f64, threshold: f64) -> Result<f64, GradeError> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(GradeError::InvalidThreshold {
            indicator,
            threshold,
        });
    }
    let ratio = value / threshold;
    if 1.0 < ratio { Ok(1.0) } else { Ok(ratio) }
}

pub fn run_stage3(
    indicators: &CompositeIndicators,
    policy: &GradingPolicy,
) -> Result<CappedScores, GradeError> {
    let cap = |indicator: Indicator| {
        cap_ratio(
            indicator,
            indicators.get(indicator),
            policy.threshold(indicator),
        )
    };
    Ok(CappedScores {
        sequential_speed: cap(Indicator::SequentialSpeed)?,
        multi_threaded_speedup: cap(Indicator::MultiThreadedSpeedup)?,
        false_sharing_avoidance: cap(Indicator::FalseSharingAvoidance)?,
        fragmentation: cap(Indicator::Fragmentation)?,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_threshold.rs"]
mod tests;
