use serde::Serialize;

use crate::model::indicators::Indicator;

/// Indicator ratios to threshold, each at most 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CappedScores {
    pub sequential_speed: f64,
    pub multi_threaded_speedup: f64,
    pub false_sharing_avoidance: f64,
    pub fragmentation: f64,
}

impl CappedScores {
    pub fn get(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::SequentialSpeed => self.sequential_speed,
            Indicator::MultiThreadedSpeedup => self.multi_threaded_speedup,
            Indicator::FalseSharingAvoidance => self.false_sharing_avoidance,
            Indicator::Fragmentation => self.fragmentation,
        }
    }

    pub fn percent(&self, indicator: Indicator) -> f64 {
        self.get(indicator) * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct FinalGrade(pub f64);

impl FinalGrade {
    pub fn value(self) -> f64 {
        self.0
    }
}
