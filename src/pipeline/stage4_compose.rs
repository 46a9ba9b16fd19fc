use crate::model::grade::{CappedScores, FinalGrade};
use crate::model::policy::GradingPolicy;

/// Weighted sum of sequential, multi-threaded and fragmentation scores.
/// False sharing is reported elsewhere but carries no weight here.
pub fn compose_grade(capped: &CappedScores, policy: &GradingPolicy) -> FinalGrade {
    let w = &policy.weights;
    let weighted = capped.sequential_speed * f64::from(w.sequential)
        + capped.multi_threaded_speedup * f64::from(w.multi_threaded)
        + capped.fragmentation * f64::from(w.fragmentation);
    FinalGrade(weighted * policy.scale)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_compose.rs"]
mod tests;
