pub mod commentary;
pub mod stats_calculator;

pub use stats_calculator::{RecordSummary, TeamStatsCalculator};
