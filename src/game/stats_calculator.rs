use std::collections::HashSet;

use crate::models::{GameRecord, GameResult, TeamStats};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordSummary {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl RecordSummary {
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Draws count as half a win.
    pub fn win_rate(&self) -> Option<f64> {
        let games = self.games();
        if games == 0 {
            return None;
        }
        Some((f64::from(self.wins) + f64::from(self.draws) * 0.5) / f64::from(games))
    }
}

pub struct TeamStatsCalculator;

impl TeamStatsCalculator {
    /// Cumulative stats for one team from its game records.
    ///
    /// Active days are distinct calendar days (UTC) with at least one game.
    pub fn calculate(records: &[GameRecord], reports_count: u32) -> TeamStats {
        let active_days: HashSet<_> = records.iter().map(|r| r.created_at.date_naive()).collect();
        TeamStats {
            games_played: records.len() as u32,
            reports_count,
            active_days: active_days.len() as u32,
        }
    }

    pub fn summarize(records: &[GameRecord]) -> RecordSummary {
        records.iter().fold(RecordSummary::default(), |mut summary, record| {
            match record.result {
                GameResult::Win => summary.wins += 1,
                GameResult::Lose => summary.losses += 1,
                GameResult::Draw => summary.draws += 1,
            }
            summary
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: i64, result: GameResult, day: u32, hour: u32) -> GameRecord {
        GameRecord {
            id,
            team_id: 1,
            game_id: id,
            opponent_name: "Busan Blockers".to_string(),
            result,
            ai_comment: String::new(),
            created_at: Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn stats_count_games_and_distinct_days() {
        let records = vec![
            record(1, GameResult::Win, 1, 10),
            record(2, GameResult::Lose, 1, 18),
            record(3, GameResult::Draw, 4, 9),
        ];
        let stats = TeamStatsCalculator::calculate(&records, 2);
        assert_eq!(stats, TeamStats { games_played: 3, reports_count: 2, active_days: 2 });
    }

    #[test]
    fn summary_counts_results_and_win_rate() {
        let records = vec![
            record(1, GameResult::Win, 1, 10),
            record(2, GameResult::Win, 2, 10),
            record(3, GameResult::Lose, 3, 10),
            record(4, GameResult::Draw, 4, 10),
        ];
        let summary = TeamStatsCalculator::summarize(&records);
        assert_eq!(summary, RecordSummary { wins: 2, losses: 1, draws: 1 });
        assert_eq!(summary.win_rate(), Some(0.625));
        assert_eq!(RecordSummary::default().win_rate(), None);
    }
}
