pub mod json;
pub mod text;

use serde::Serialize;

use crate::input::BenchmarkSet;
use crate::model::grade::{CappedScores, FinalGrade};
use crate::model::indicators::CompositeIndicators;
use crate::model::policy::{GradingPolicy, MAX_MARK};

#[derive(Debug, Clone, Serialize)]
pub struct GradeReport {
    pub tool_name: String,
    pub tool_version: String,
    pub max_mark: u32,
    pub grade: FinalGrade,
    pub indicators: CompositeIndicators,
    pub capped: CappedScores,
    pub policy: GradingPolicy,
    pub benchmarks: BenchmarkSet,
}

impl GradeReport {
    pub fn new(
        benchmarks: BenchmarkSet,
        indicators: CompositeIndicators,
        capped: CappedScores,
        grade: FinalGrade,
        policy: GradingPolicy,
    ) -> Self {
        Self {
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            max_mark: MAX_MARK,
            grade,
            indicators,
            capped,
            policy,
            benchmarks,
        }
    }
}

/// Formats like Python's `repr(float)`: shortest round-trip digits, a
/// trailing `.0` on integral values, and `1e-05` style exponents outside
/// `[1e-4, 1e16)`.
pub fn format_py_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let abs = v.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let sci = format!("{:e}", v);
        if let Some((mantissa, exp)) = sci.split_once('e') {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            return format!("{mantissa}e{sign}{digits:0>2}");
        }
        return sci;
    }
    let mut out = format!("{}", v);
    if !out.contains('.') {
        out.push_str(".0");
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
