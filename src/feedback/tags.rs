use std::fmt;
use serde::{Deserialize, Serialize};

/// The gameplay aspect a feedback question judges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Pass,
    Defense,
    Teamwork,
    Speed,
    Shoot,
    Rebound,
}

impl Category {
    pub fn good(self) -> FeedbackTag {
        match self {
            Category::Pass => FeedbackTag::PassGood,
            Category::Defense => FeedbackTag::DefenseGood,
            Category::Teamwork => FeedbackTag::TeamworkGood,
            Category::Speed => FeedbackTag::SpeedGood,
            Category::Shoot => FeedbackTag::ShootGood,
            Category::Rebound => FeedbackTag::ReboundGood,
        }
    }

    pub fn bad(self) -> FeedbackTag {
        match self {
            Category::Pass => FeedbackTag::PassBad,
            Category::Defense => FeedbackTag::DefenseBad,
            Category::Teamwork => FeedbackTag::TeamworkBad,
            Category::Speed => FeedbackTag::SpeedBad,
            Category::Shoot => FeedbackTag::ShootBad,
            Category::Rebound => FeedbackTag::ReboundBad,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Pass => "passing",
            Category::Defense => "defense",
            Category::Teamwork => "teamwork",
            Category::Speed => "speed",
            Category::Shoot => "shooting",
            Category::Rebound => "rebounding",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackTag {
    PassGood,
    PassBad,
    DefenseGood,
    DefenseBad,
    TeamworkGood,
    TeamworkBad,
    SpeedGood,
    SpeedBad,
    ShootGood,
    ShootBad,
    ReboundGood,
    ReboundBad,
}

impl FeedbackTag {
    pub fn category(self) -> Category {
        match self {
            FeedbackTag::PassGood | FeedbackTag::PassBad => Category::Pass,
            FeedbackTag::DefenseGood | FeedbackTag::DefenseBad => Category::Defense,
            FeedbackTag::TeamworkGood | FeedbackTag::TeamworkBad => Category::Teamwork,
            FeedbackTag::SpeedGood | FeedbackTag::SpeedBad => Category::Speed,
            FeedbackTag::ShootGood | FeedbackTag::ShootBad => Category::Shoot,
            FeedbackTag::ReboundGood | FeedbackTag::ReboundBad => Category::Rebound,
        }
    }

    pub fn is_good(self) -> bool {
        self == self.category().good()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackTag::PassGood => "PASS_GOOD",
            FeedbackTag::PassBad => "PASS_BAD",
            FeedbackTag::DefenseGood => "DEFENSE_GOOD",
            FeedbackTag::DefenseBad => "DEFENSE_BAD",
            FeedbackTag::TeamworkGood => "TEAMWORK_GOOD",
            FeedbackTag::TeamworkBad => "TEAMWORK_BAD",
            FeedbackTag::SpeedGood => "SPEED_GOOD",
            FeedbackTag::SpeedBad => "SPEED_BAD",
            FeedbackTag::ShootGood => "SHOOT_GOOD",
            FeedbackTag::ShootBad => "SHOOT_BAD",
            FeedbackTag::ReboundGood => "REBOUND_GOOD",
            FeedbackTag::ReboundBad => "REBOUND_BAD",
        }
    }
}

impl fmt::Display for FeedbackTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_name_matches_display() {
        for tag in [FeedbackTag::PassGood, FeedbackTag::ReboundBad, FeedbackTag::ShootGood] {
            let wire = serde_json::to_string(&tag).unwrap();
            assert_eq!(wire, format!("\"{}\"", tag));
        }
    }

    #[test]
    fn good_and_bad_map_back_to_their_category() {
        for category in [
            Category::Pass,
            Category::Defense,
            Category::Teamwork,
            Category::Speed,
            Category::Shoot,
            Category::Rebound,
        ] {
            assert_eq!(category.good().category(), category);
            assert_eq!(category.bad().category(), category);
            assert!(category.good().is_good());
            assert!(!category.bad().is_good());
        }
    }
}
