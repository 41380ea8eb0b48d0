use crate::feedback::tags::Category;
use crate::models::user::Position;

/// How an answer option reads on the Likert-style scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub category: Category,
    pub prompt: &'static str,
    pub positive: &'static str,
    pub neutral: &'static str,
    pub negative: &'static str,
}

impl Question {
    /// Options in the order the form lists them.
    pub fn options(&self) -> [&'static str; 3] {
        [self.positive, self.neutral, self.negative]
    }

    /// Answer strings must match an option exactly; anything else is unknown.
    pub fn classify(&self, answer: &str) -> Option<Answer> {
        if answer == self.positive {
            Some(Answer::Positive)
        } else if answer == self.neutral {
            Some(Answer::Neutral)
        } else if answer == self.negative {
            Some(Answer::Negative)
        } else {
            None
        }
    }
}

pub const PASS_QUESTION_ID: &str = "q1";
pub const DEFENSE_QUESTION_ID: &str = "q2";
pub const TEAMWORK_QUESTION_ID: &str = "q3";
pub const POSITION_QUESTION_ID: &str = "q4";

pub static COMMON_QUESTIONS: [Question; 3] = [
    Question {
        id: PASS_QUESTION_ID,
        category: Category::Pass,
        prompt: "How was the passing?",
        positive: "Passes were sharp and on time",
        neutral: "Passing was average",
        negative: "Passes were often late or loose",
    },
    Question {
        id: DEFENSE_QUESTION_ID,
        category: Category::Defense,
        prompt: "How was the defense?",
        positive: "Locked down on defense",
        neutral: "Defense was average",
        negative: "Defense was often beaten",
    },
    Question {
        id: TEAMWORK_QUESTION_ID,
        category: Category::Teamwork,
        prompt: "How was the teamwork?",
        positive: "Communicated and played for the team",
        neutral: "Teamwork was average",
        negative: "Played isolated from the team",
    },
];

static POINT_GUARD_QUESTION: Question = Question {
    id: POSITION_QUESTION_ID,
    category: Category::Speed,
    prompt: "How did the point guard control the tempo?",
    positive: "Pushed the tempo well",
    neutral: "Tempo was average",
    negative: "Slowed the offense down",
};

static SHOOTING_GUARD_QUESTION: Question = Question {
    id: POSITION_QUESTION_ID,
    category: Category::Shoot,
    prompt: "How did the shooting guard shoot?",
    positive: "Knocked down open shots",
    neutral: "Shooting was average",
    negative: "Missed open shots",
};

static SMALL_FORWARD_QUESTION: Question = Question {
    id: POSITION_QUESTION_ID,
    category: Category::Speed,
    prompt: "How quick was the small forward?",
    positive: "Beat defenders off the dribble",
    neutral: "First step was average",
    negative: "Was a step slow all game",
};

static POWER_FORWARD_QUESTION: Question = Question {
    id: POSITION_QUESTION_ID,
    category: Category::Rebound,
    prompt: "How did the power forward rebound?",
    positive: "Owned the glass",
    neutral: "Rebounding was average",
    negative: "Got outrebounded",
};

static CENTER_QUESTION: Question = Question {
    id: POSITION_QUESTION_ID,
    category: Category::Defense,
    prompt: "How did the center protect the rim?",
    positive: "Protected the rim",
    neutral: "Rim protection was average",
    negative: "Left the paint open",
};

pub fn position_question(position: Position) -> &'static Question {
    match position {
        Position::PointGuard => &POINT_GUARD_QUESTION,
        Position::ShootingGuard => &SHOOTING_GUARD_QUESTION,
        Position::SmallForward => &SMALL_FORWARD_QUESTION,
        Position::PowerForward => &POWER_FORWARD_QUESTION,
        Position::Center => &CENTER_QUESTION,
    }
}

/// The four questions the feedback form asks about one position, common
/// questions first.
pub fn questions_for(position: Position) -> [&'static Question; 4] {
    [
        &COMMON_QUESTIONS[0],
        &COMMON_QUESTIONS[1],
        &COMMON_QUESTIONS[2],
        position_question(position),
    ]
}
