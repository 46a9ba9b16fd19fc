use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::input::{Benchmark, BenchmarkResult, BenchmarkSet};
use crate::model::grade::{CappedScores, FinalGrade};
use crate::model::indicators::CompositeIndicators;
use crate::model::policy::GradingPolicy;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("alloc_grader_report_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn empty(benchmark: Benchmark) -> BenchmarkResult {
    BenchmarkResult::new(benchmark, BTreeMap::new())
}

fn sample_report() -> GradeReport {
    let capped = CappedScores {
        sequential_speed: 0.85,
        multi_threaded_speedup: 1.0,
        false_sharing_avoidance: 0.7,
        fragmentation: 0.5,
    };
    GradeReport::new(
        BenchmarkSet {
            cache_scratch: empty(Benchmark::CacheScratch),
            cache_thrash: empty(Benchmark::CacheThrash),
            larson: empty(Benchmark::Larson),
            threadtest: empty(Benchmark::Threadtest),
        },
        CompositeIndicators {
            sequential_speed: 0.85,
            multi_threaded_speedup: 1.2,
            false_sharing_avoidance: 0.7,
            fragmentation: 0.4,
        },
        capped,
        FinalGrade(35.5),
        GradingPolicy::lab4_v1(),
    )
}

#[test]
fn test_write_reports_prints_five_lines() {
    let mut out = Vec::new();
    write_reports(&sample_report(), &mut out, None).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "Student's solution obtained 35.5 out of 40 of the performance portion score"
    );
    assert_eq!(lines[1], "\tSequential Performance Pts: 85.0%");
    assert_eq!(lines[2], "\tMultiThreaded Performance Pts: 100.0%");
    assert_eq!(lines[3], "\tFalse Sharing Pts: 70.0%");
    assert_eq!(lines[4], "\tFragmentation Pts: 50.0%");
}

#[test]
fn test_write_reports_summary_json() {
    let dir = make_temp_dir();
    let path = dir.join("summary.json");
    let mut out = Vec::new();
    write_reports(&sample_report(), &mut out, Some(&path)).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["grade"], 35.5);
    assert_eq!(json["max_mark"], 40);
    assert_eq!(json["indicators"]["falseSharingAvoidanceAvg"], 0.7);
    assert_eq!(json["policy"]["weights"]["multi_threaded"], 65);
    assert_eq!(json["policy"]["thresholds"]["fragmentation"], 0.8);
    assert!(json["benchmarks"]["larson"]["metrics"].is_object());
    assert_eq!(json["benchmarks"]["larson"]["benchmark"], "larson");
    assert!(!out.is_empty());
}

#[test]
fn test_write_reports_summary_failure_prints_nothing() {
    let dir = make_temp_dir();
    let path = dir.join("missing").join("summary.json");
    let mut out = Vec::new();
    let err = write_reports(&sample_report(), &mut out, Some(&path)).unwrap_err();
    assert!(matches!(err, GradeError::SummaryWrite { .. }));
    assert!(out.is_empty());
}
