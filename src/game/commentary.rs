//! Canned "AI coaching" commentary.
//!
//! Nothing here calls a model: the comment is assembled from fixed phrases
//! chosen by the team DNA and by which categories collected the most good
//! and bad tags across the five positions.

use std::collections::HashMap;

use crate::feedback::{Category, FeedbackTag};
use crate::models::{GameResult, PositionFeedback, TeamDna};

const CATEGORY_ORDER: [Category; 6] = [
    Category::Pass,
    Category::Defense,
    Category::Teamwork,
    Category::Speed,
    Category::Shoot,
    Category::Rebound,
];

pub fn dna_commentary(dna: TeamDna) -> &'static str {
    match dna {
        TeamDna::RunAndGun => {
            "Your team lives in transition. Keep pushing the pace after every defensive rebound \
             and look for early threes before the defense sets."
        }
        TeamDna::Lockdown => {
            "Your identity is defense. Stay disciplined on rotations and turn stops into \
             easy baskets at the other end."
        }
        TeamDna::TeamPlay => {
            "You win by sharing the ball. Keep the extra pass alive and trust each other \
             to make the right read."
        }
    }
}

fn strength_phrase(category: Category) -> &'static str {
    match category {
        Category::Pass => "Ball movement was a real weapon today.",
        Category::Defense => "Your defense made every possession hard work for the opponent.",
        Category::Teamwork => "The team talked and moved as one unit.",
        Category::Speed => "Your pace kept the other team on its heels.",
        Category::Shoot => "Shot-making carried the offense.",
        Category::Rebound => "You controlled the glass and limited second chances.",
    }
}

fn weakness_phrase(category: Category) -> &'static str {
    match category {
        Category::Pass => "Clean up the passing: fewer lazy entries, more two-hand chest passes.",
        Category::Defense => "Defense needs attention: communicate switches and close out under control.",
        Category::Teamwork => "Work on spacing and talking so nobody ends up playing alone.",
        Category::Speed => "Run the floor harder and push the ball before the defense is set.",
        Category::Shoot => "Get extra shooting reps and hunt higher-percentage looks.",
        Category::Rebound => "Box out on every shot; the glass decided too many possessions.",
    }
}

fn result_opening(result: GameResult) -> &'static str {
    match result {
        GameResult::Win => "Good win.",
        GameResult::Lose => "Tough loss, but there is plenty to build on.",
        GameResult::Draw => "An even game that could have gone either way.",
    }
}

/// Strong and weak categories, each ordered by net tag count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoachingSummary {
    pub strengths: Vec<Category>,
    pub weaknesses: Vec<Category>,
}

pub fn summarize(feedbacks: &[PositionFeedback]) -> CoachingSummary {
    let mut score: HashMap<Category, i32> = HashMap::new();
    for tag in feedbacks.iter().flat_map(|f| f.tags.iter().copied()) {
        *score.entry(tag.category()).or_default() += if tag.is_good() { 1 } else { -1 };
    }

    let mut ranked: Vec<(Category, i32)> = CATEGORY_ORDER
        .iter()
        .filter_map(|c| score.get(c).map(|s| (*c, *s)))
        .collect();
    // Stable sort keeps CATEGORY_ORDER among ties.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    CoachingSummary {
        strengths: ranked.iter().filter(|(_, s)| *s > 0).map(|(c, _)| *c).collect(),
        weaknesses: ranked.iter().rev().filter(|(_, s)| *s < 0).map(|(c, _)| *c).collect(),
    }
}

/// The comment stored on a game record and shown on the coaching page.
pub fn compose_comment(result: GameResult, dna: Option<TeamDna>, feedbacks: &[PositionFeedback]) -> String {
    let summary = summarize(feedbacks);
    let mut parts = vec![result_opening(result).to_string()];

    if let Some(best) = summary.strengths.first() {
        parts.push(strength_phrase(*best).to_string());
    }
    if let Some(worst) = summary.weaknesses.first() {
        parts.push(weakness_phrase(*worst).to_string());
    }
    if summary.strengths.is_empty() && summary.weaknesses.is_empty() {
        parts.push("The feedback was balanced, so keep doing what works and play another one soon.".to_string());
    }
    if let Some(dna) = dna {
        parts.push(dna_commentary(dna).to_string());
    }
    parts.join(" ")
}

pub fn describe(categories: &[Category]) -> Vec<String> {
    categories.iter().map(|c| c.label().to_string()).collect()
}

pub fn tags_of(feedbacks: &[PositionFeedback]) -> Vec<FeedbackTag> {
    feedbacks.iter().flat_map(|f| f.tags.iter().copied()).collect()
}
