use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MetricKey {
    #[serde(rename = "sequential speed")]
    SequentialSpeed,
    #[serde(rename = "scalability score")]
    ScalabilityScore,
    #[serde(rename = "fragmentation score")]
    FragmentationScore,
}

impl MetricKey {
    /// Name as written on the left of `" = "` in a score file.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKey::SequentialSpeed => "sequential speed",
            MetricKey::ScalabilityScore => "scalability score",
            MetricKey::FragmentationScore => "fragmentation score",
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
