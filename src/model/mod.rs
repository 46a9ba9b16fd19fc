pub mod grade;
pub mod indicators;
pub mod metrics;
pub mod policy;
