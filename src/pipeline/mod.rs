use std::path::Path;

use crate::error::GradeError;
use crate::model::policy::GradingPolicy;
use crate::report::GradeReport;

pub mod stage1_load;
pub mod stage2_aggregate;
pub mod stage3_threshold;
pub mod stage4_compose;
pub mod stage5_report;

use stage1_load::run_stage1;
use stage2_aggregate::run_stage2;
use stage3_threshold::run_stage3;
use stage4_compose::compose_grade;

/// Runs load, aggregation, capping and composition. Any failure aborts before a grade exists.
pub fn run_grading(root: &Path, policy: &GradingPolicy) -> Result<GradeReport, GradeError> {
    let stage1 = run_stage1(root)?;
    let indicators = run_stage2(&stage1.results)?;
    let capped = run_stage3(&indicators, policy)?;
    let grade = compose_grade(&capped, policy);
    tracing::info!(grade = grade.value(), "composed final grade");
    Ok(GradeReport::new(
        stage1.results,
        indicators,
        capped,
        grade,
        *policy,
    ))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
