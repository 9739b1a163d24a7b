use chrono::{DateTime, Utc};
use dotsbox_advisor::{difficulty::Difficulty, move_evaluator::HeuristicWeights};
use dotsbox_engine::{GameResult, MoveRecord, Score};
use serde::{Deserialize, Serialize};

/// A batch of computer-vs-computer games with the settings that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayRecord {
    /// Timestamp when the batch finished (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    pub dots_per_side: usize,
    /// Seed of the random generator, if one was given
    pub seed: Option<u64>,
    pub player1: Difficulty,
    pub player2: Difficulty,
    /// Weights used by the hard tier
    pub weights: HeuristicWeights,
    pub games: Vec<GameRecord>,
}

/// One finished game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Game number within the batch (0-indexed)
    pub game: usize,
    pub final_score: Score,
    pub result: GameResult,
    /// Every move in play order
    pub moves: Vec<MoveRecord>,
}
