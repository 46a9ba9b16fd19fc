use serde::Serialize;

use crate::model::indicators::Indicator;

pub const WEIGHT_SEQUENTIAL: u32 = 15;
pub const WEIGHT_MULTI_THREADED: u32 = 65;
pub const WEIGHT_FRAGMENTATION: u32 = 20;

const _: () = assert!(WEIGHT_SEQUENTIAL + WEIGHT_MULTI_THREADED + WEIGHT_FRAGMENTATION == 100);

/// Maximum attainable mark for the performance portion.
pub const MAX_MARK: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub sequential_speed: f64,
    pub multi_threaded_speedup: f64,
    pub false_sharing_avoidance: f64,
    pub fragmentation: f64,
}

/// Category weights in percent. False sharing has no weight: it is reported only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Weights {
    pub sequential: u32,
    pub multi_threaded: u32,
    pub fragmentation: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradingPolicy {
    pub thresholds: Thresholds,
    pub weights: Weights,
    pub scale: f64,
}

impl GradingPolicy {
    /// Thresholds measured on the 8-core marking server.
    pub fn lab4_v1() -> Self {
        Self {
            thresholds: Thresholds {
                sequential_speed: 1.0,
                multi_threaded_speedup: 1.0,
                false_sharing_avoidance: 1.0,
                fragmentation: 0.8,
            },
            weights: Weights {
                sequential: WEIGHT_SEQUENTIAL,
                multi_threaded: WEIGHT_MULTI_THREADED,
                fragmentation: WEIGHT_FRAGMENTATION,
            },
            scale: 0.4,
        }
    }

    pub fn threshold(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::SequentialSpeed => self.thresholds.sequential_speed,
            Indicator::MultiThreadedSpeedup => self.thresholds.multi_threaded_speedup,
            Indicator::FalseSharingAvoidance => self.thresholds.false_sharing_avoidance,
            Indicator::Fragmentation => self.thresholds.fragmentation,
        }
    }
}
