use crate::model::indicators::Indicator;
use crate::report::{GradeReport, format_py_float};

pub fn category_label(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::SequentialSpeed => "Sequential Performance Pts",
        Indicator::MultiThreadedSpeedup => "MultiThreaded Performance Pts",
        Indicator::FalseSharingAvoidance => "False Sharing Pts",
        Indicator::Fragmentation => "Fragmentation Pts",
    }
}

pub fn render_report_text(report: &GradeReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Student's solution obtained {} out of {} of the performance portion score\n",
        format_py_float(report.grade.value()),
        report.max_mark
    ));
    for indicator in Indicator::ALL {
        out.push_str(&format!(
            "\t{}: {}%\n",
            category_label(indicator),
            format_py_float(report.capped.percent(indicator))
        ));
    }
    out
}
