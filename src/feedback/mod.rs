//! Post-game position feedback.
//!
//! Players answer three common questions plus one position-specific
//! question for each of the five positions; the answers are reduced to a
//! short list of [`FeedbackTag`]s that the backend turns into coaching text.

pub mod catalog;
pub mod tags;

use std::collections::HashMap;

pub use catalog::{questions_for, Answer, Question};
pub use tags::{Category, FeedbackTag};

use crate::models::user::Position;

/// Question id to chosen option text.
pub type AnswerSheet = HashMap<String, String>;

/// Map one position's answers to tags, in question order.
///
/// Positive answers yield the category's `_GOOD` tag and negative ones its
/// `_BAD` tag. Neutral, unknown and missing answers yield nothing. Tags are
/// not de-duplicated: a center rated positively on both defense questions
/// gets `DEFENSE_GOOD` twice.
pub fn map_feedback_tags(position: Position, answers: &AnswerSheet) -> Vec<FeedbackTag> {
    questions_for(position)
        .into_iter()
        .filter_map(|question| {
            let answer = answers.get(question.id)?;
            match question.classify(answer)? {
                Answer::Positive => Some(question.category.good()),
                Answer::Negative => Some(question.category.bad()),
                Answer::Neutral => None,
            }
        })
        .collect()
}

/// Same as [`map_feedback_tags`] but keyed by the numeric position id the
/// form posts (1 = PG ... 5 = C). Unknown ids map to `None`.
pub fn map_feedback_tags_by_id(position_id: u8, answers: &AnswerSheet) -> Option<Vec<FeedbackTag>> {
    Position::from_id(position_id).map(|position| map_feedback_tags(position, answers))
}

/// An answer sheet that picks the same kind of option for every question.
pub fn uniform_answers(position: Position, answer: Answer) -> AnswerSheet {
    questions_for(position)
        .into_iter()
        .map(|question| {
            let option = match answer {
                Answer::Positive => question.positive,
                Answer::Neutral => question.neutral,
                Answer::Negative => question.negative,
            };
            (question.id.to_string(), option.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackTag::*;

    const ANSWERS: [Answer; 3] = [Answer::Positive, Answer::Neutral, Answer::Negative];

    // (option texts for q1..q4, GOOD tag, BAD tag) per question, written out
    // independently of the catalog so a catalog edit shows up here.
    fn expected_table(position: Position) -> [(&'static str, &'static str, &'static str, FeedbackTag, FeedbackTag); 4] {
        let position_row = match position {
            Position::PointGuard => ("Pushed the tempo well", "Tempo was average", "Slowed the offense down", SpeedGood, SpeedBad),
            Position::ShootingGuard => ("Knocked down open shots", "Shooting was average", "Missed open shots", ShootGood, ShootBad),
            Position::SmallForward => ("Beat defenders off the dribble", "First step was average", "Was a step slow all game", SpeedGood, SpeedBad),
            Position::PowerForward => ("Owned the glass", "Rebounding was average", "Got outrebounded", ReboundGood, ReboundBad),
            Position::Center => ("Protected the rim", "Rim protection was average", "Left the paint open", DefenseGood, DefenseBad),
        };
        [
            ("Passes were sharp and on time", "Passing was average", "Passes were often late or loose", PassGood, PassBad),
            ("Locked down on defense", "Defense was average", "Defense was often beaten", DefenseGood, DefenseBad),
            ("Communicated and played for the team", "Teamwork was average", "Played isolated from the team", TeamworkGood, TeamworkBad),
            position_row,
        ]
    }

    #[test]
    fn every_answer_combination_maps_to_the_documented_tags() {
        for position in Position::ALL {
            let table = expected_table(position);
            let mut cases = 0;
            for a1 in ANSWERS {
                for a2 in ANSWERS {
                    for a3 in ANSWERS {
                        for a4 in ANSWERS {
                            let mut sheet = AnswerSheet::new();
                            let mut expected = Vec::new();
                            for (index, answer) in [a1, a2, a3, a4].into_iter().enumerate() {
                                let (positive, neutral, negative, good, bad) = table[index];
                                let text = match answer {
                                    Answer::Positive => {
                                        expected.push(good);
                                        positive
                                    }
                                    Answer::Neutral => neutral,
                                    Answer::Negative => {
                                        expected.push(bad);
                                        negative
                                    }
                                };
                                sheet.insert(format!("q{}", index + 1), text.to_string());
                            }

                            assert_eq!(
                                map_feedback_tags(position, &sheet),
                                expected,
                                "position {} answers {:?}",
                                position,
                                [a1, a2, a3, a4]
                            );
                            cases += 1;
                        }
                    }
                }
            }
            assert_eq!(cases, 81);
        }
    }

    #[test]
    fn all_positive_answers_yield_four_good_tags_per_position() {
        let expected = [
            (Position::PointGuard, SpeedGood),
            (Position::ShootingGuard, ShootGood),
            (Position::SmallForward, SpeedGood),
            (Position::PowerForward, ReboundGood),
            (Position::Center, DefenseGood),
        ];
        for (position, specific) in expected {
            let tags = map_feedback_tags(position, &uniform_answers(position, Answer::Positive));
            assert_eq!(tags, vec![PassGood, DefenseGood, TeamworkGood, specific]);
        }
    }

    #[test]
    fn neutral_answers_drop_every_tag() {
        for position in Position::ALL {
            assert!(map_feedback_tags(position, &uniform_answers(position, Answer::Neutral)).is_empty());
        }
    }

    #[test]
    fn unknown_and_missing_answers_are_ignored() {
        let mut sheet = AnswerSheet::new();
        sheet.insert("q1".to_string(), "Passes were sharp and on time".to_string());
        sheet.insert("q2".to_string(), "Not one of the options".to_string());
        sheet.insert("q9".to_string(), "Owned the glass".to_string());

        assert_eq!(map_feedback_tags(Position::PowerForward, &sheet), vec![PassGood]);
    }

    #[test]
    fn position_specific_option_only_counts_for_its_position() {
        let mut sheet = AnswerSheet::new();
        sheet.insert("q4".to_string(), "Owned the glass".to_string());

        assert_eq!(map_feedback_tags(Position::PowerForward, &sheet), vec![ReboundGood]);
        assert!(map_feedback_tags(Position::PointGuard, &sheet).is_empty());
    }

    #[test]
    fn numeric_position_ids_follow_lineup_order() {
        let sheet = uniform_answers(Position::ShootingGuard, Answer::Negative);
        assert_eq!(
            map_feedback_tags_by_id(2, &sheet),
            Some(vec![PassBad, DefenseBad, TeamworkBad, ShootBad])
        );
        assert_eq!(map_feedback_tags_by_id(0, &sheet), None);
    }
}
