use super::types::{GameOverReason, Point};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    FoodEaten {
        at: Point,
        score: u32,
    },
    ScoreChanged {
        score: u32,
    },
    GameOver {
        reason: GameOverReason,
        final_score: u32,
        high_score: u32,
        new_high_score: bool,
    },
    HighScoreNotSaved {
        score: u32,
        error: String,
    },
}

/// What a host gets told after a round ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub round: u64,
    pub reason: GameOverReason,
    pub final_score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
}
