use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::GradeError;
use crate::report::GradeReport;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

/// Writes the optional JSON summary, then the five-line text report to `out`.
/// Nothing reaches `out` if the summary cannot be written.
pub fn write_reports<W: Write>(
    report: &GradeReport,
    out: &mut W,
    summary_path: Option<&Path>,
) -> Result<(), GradeError> {
    if let Some(path) = summary_path {
        let json = render_summary_json(report)?;
        fs::write(path, json).map_err(|source| GradeError::SummaryWrite {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote grading summary");
    }

    out.write_all(render_report_text(report).as_bytes())
        .and_then(|_| out.flush())
        .map_err(GradeError::Output)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
