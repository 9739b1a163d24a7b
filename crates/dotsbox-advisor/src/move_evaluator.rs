//! Move evaluation: scoring a single analyzed move.
//!
//! [`HeuristicMoveEvaluator`] combines four terms, each weighted by [`HeuristicWeights`]:
//!
//! | term            | default | applies when                                               |
//! |-----------------|---------|------------------------------------------------------------|
//! | completion      | `+100`  | the move completes at least one box                        |
//! | gift            | `-50`   | some unclaimed box has exactly 3 claimed sides afterwards  |
//! | chain potential | `+20×N` | `N` unclaimed boxes have exactly 2 claimed sides afterwards |
//! | touching sides  | `+2/+5/+3` | adjacent boxes had 0/1/2 claimed sides in total before  |
//!
//! Touching-side totals above 2 add nothing. The touching term only breaks ties between
//! otherwise neutral moves.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::move_analysis::MoveAnalysis;

/// Scores analyzed moves (higher is better).
pub trait MoveEvaluator: fmt::Debug + Send + Sync {
    fn evaluate_move(&self, analysis: &MoveAnalysis) -> i32;
}

/// Tunable weights of [`HeuristicMoveEvaluator`].
///
/// Missing fields fall back to their defaults when deserialized, so a weights file only needs
/// to name what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    pub completion_bonus: i32,
    pub gift_penalty: i32,
    pub two_sided_bonus: i32,
    /// Indexed by touching-side total (0, 1, 2).
    pub touch_bonus: [i32; 3],
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            completion_bonus: 100,
            gift_penalty: -50,
            two_sided_bonus: 20,
            touch_bonus: [2, 5, 3],
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct HeuristicMoveEvaluator {
    weights: HeuristicWeights,
}

impl HeuristicMoveEvaluator {
    #[must_use]
    pub fn new(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }
}

impl MoveEvaluator for HeuristicMoveEvaluator {
    fn evaluate_move(&self, analysis: &MoveAnalysis) -> i32 {
        let w = &self.weights;
        let mut score = 0;

        if analysis.completes_box() {
            score += w.completion_bonus;
        }
        if analysis.three_sided_boxes() > 0 {
            score += w.gift_penalty;
        }

        let two_sided = i32::try_from(analysis.two_sided_boxes()).unwrap_or(i32::MAX);
        score = score.saturating_add(w.two_sided_bonus.saturating_mul(two_sided));

        score + w
            .touch_bonus
            .get(analysis.touching_sides())
            .copied()
            .unwrap_or(0)
    }
}
