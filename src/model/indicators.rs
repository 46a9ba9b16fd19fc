use std::fmt;

use serde::Serialize;

use crate::input::Benchmark;
use crate::model::metrics::MetricKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Indicator {
    #[serde(rename = "sequentialSpeedAvg")]
    SequentialSpeed,
    #[serde(rename = "multiThreadedSpeedupAvg")]
    MultiThreadedSpeedup,
    #[serde(rename = "falseSharingAvoidanceAvg")]
    FalseSharingAvoidance,
    #[serde(rename = "fragmentationAvg")]
    Fragmentation,
}

impl Indicator {
    pub const ALL: [Indicator; 4] = [
        Indicator::SequentialSpeed,
        Indicator::MultiThreadedSpeedup,
        Indicator::FalseSharingAvoidance,
        Indicator::Fragmentation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Indicator::SequentialSpeed => "sequentialSpeedAvg",
            Indicator::MultiThreadedSpeedup => "multiThreadedSpeedupAvg",
            Indicator::FalseSharingAvoidance => "falseSharingAvoidanceAvg",
            Indicator::Fragmentation => "fragmentationAvg",
        }
    }

    pub fn metric(self) -> MetricKey {
        match self {
            Indicator::SequentialSpeed => MetricKey::SequentialSpeed,
            Indicator::MultiThreadedSpeedup | Indicator::FalseSharingAvoidance => {
                MetricKey::ScalabilityScore
            }
            Indicator::Fragmentation => MetricKey::FragmentationScore,
        }
    }

    /// Benchmarks averaged into this indicator, in summation order.
    /// `scalability score` is split: larson/threadtest measure speedup,
    /// the cache benchmarks measure false sharing.
    pub fn sources(self) -> &'static [Benchmark] {
        match self {
            Indicator::SequentialSpeed | Indicator::Fragmentation => &Benchmark::ALL,
            Indicator::MultiThreadedSpeedup => &[Benchmark::Larson, Benchmark::Threadtest],
            Indicator::FalseSharingAvoidance => {
                &[Benchmark::CacheScratch, Benchmark::CacheThrash]
            }
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompositeIndicators {
    #[serde(rename = "sequentialSpeedAvg")]
    pub sequential_speed: f64,
    #[serde(rename = "multiThreadedSpeedupAvg")]
    pub multi_threaded_speedup: f64,
    #[serde(rename = "falseSharingAvoidanceAvg")]
    pub false_sharing_avoidance: f64,
    #[serde(rename = "fragmentationAvg")]
    pub fragmentation: f64,
}

impl CompositeIndicators {
    pub fn get(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::SequentialSpeed => self.sequential_speed,
            Indicator::MultiThreadedSpeedup => self.multi_threaded_speedup,
            Indicator::FalseSharingAvoidance => self.false_sharing_avoidance,
            Indicator::Fragmentation => self.fragmentation,
        }
    }
}
