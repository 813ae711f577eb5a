pub mod anomaly;
pub mod grouping;
pub mod metrics;
pub mod ranking;
