pub mod calculator;
pub mod generate;
pub mod report;

pub use generate::{RankingLimits, ReportRequest, generate, generate_from_records};
