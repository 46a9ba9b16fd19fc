use crate::report::GradeReport;

pub fn render_summary_json(report: &GradeReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
