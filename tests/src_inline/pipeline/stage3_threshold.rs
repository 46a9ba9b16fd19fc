use super::*;

#[test]
fn test_cap_ratio_boundaries() {
    let ind = Indicator::SequentialSpeed;
    assert_eq!(cap_ratio(ind, 1.3, 1.0).unwrap(), 1.0);
    assert_eq!(cap_ratio(ind, 0.5, 1.0).unwrap(), 0.5);
    assert_eq!(cap_ratio(ind, 1.0, 1.0).unwrap(), 1.0);
}

#[test]
fn test_cap_ratio_has_no_lower_bound() {
    assert_eq!(cap_ratio(Indicator::Fragmentation, -0.4, 0.8).unwrap(), -0.5);
    assert_eq!(cap_ratio(Indicator::Fragmentation, 0.0, 0.8).unwrap(), 0.0);
}

#[test]
fn test_cap_ratio_keeps_nan() {
    assert!(cap_ratio(Indicator::SequentialSpeed, f64::NAN, 1.0).unwrap().is_nan());
}

#[test]
fn test_cap_ratio_rejects_invalid_threshold() {
    for threshold in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = cap_ratio(Indicator::MultiThreadedSpeedup, 0.5, threshold).unwrap_err();
        assert!(matches!(
            err,
            GradeError::InvalidThreshold {
                indicator: Indicator::MultiThreadedSpeedup,
                ..
            }
        ));
    }
}

#[test]
fn test_stage3_uses_fragmentation_threshold() {
    let indicators = CompositeIndicators {
        sequential_speed: 1.3,
        multi_threaded_speedup: 0.5,
        false_sharing_avoidance: 0.25,
        fragmentation: 0.6,
    };
    let capped = run_stage3(&indicators, &GradingPolicy::lab4_v1()).unwrap();
    assert_eq!(capped.sequential_speed, 1.0);
    assert_eq!(capped.multi_threaded_speedup, 0.5);
    assert_eq!(capped.false_sharing_avoidance, 0.25);
    assert_eq!(capped.fragmentation, 0.6 / 0.8);
}

#[test]
fn test_stage3_fragmentation_at_threshold_is_full_credit() {
    let indicators = CompositeIndicators {
        sequential_speed: 0.0,
        multi_threaded_speedup: 0.0,
        false_sharing_avoidance: 0.0,
        fragmentation: 0.8,
    };
    let capped = run_stage3(&indicators, &GradingPolicy::lab4_v1()).unwrap();
    assert_eq!(capped.fragmentation, 1.0);
}
