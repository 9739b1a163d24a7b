//! Move advice: picking the best legal move.
//!
//! [`MoveAdvisor`] enumerates the legal moves in board order, analyzes each one on a scratch
//! copy, scores it with its [`MoveEvaluator`] and keeps the maximum. On exact ties the move
//! enumerated first wins, so advice is reproducible for a given board.
//!
//! The cost is one board clone and one box scan per candidate, `O(E × B)` overall.

use dotsbox_engine::{BoardState, Move, MoveError};

use crate::{
    move_analysis::MoveAnalysis,
    move_evaluator::{HeuristicMoveEvaluator, HeuristicWeights, MoveEvaluator},
};

#[derive(Debug)]
pub struct MoveAdvisor<'a> {
    evaluator: Box<dyn MoveEvaluator + 'a>,
}

impl Default for MoveAdvisor<'_> {
    fn default() -> Self {
        Self::with_weights(HeuristicWeights::default())
    }
}

impl<'a> MoveAdvisor<'a> {
    #[must_use]
    pub fn new(evaluator: Box<dyn MoveEvaluator + 'a>) -> Self {
        Self { evaluator }
    }

    /// Advisor backed by [`HeuristicMoveEvaluator`].
    #[must_use]
    pub fn with_weights(weights: HeuristicWeights) -> Self {
        Self::new(Box::new(HeuristicMoveEvaluator::new(weights)))
    }

    /// Scores `edge` on `board` without changing it.
    pub fn evaluate_move(&self, board: &BoardState, edge: Move) -> Result<i32, MoveError> {
        let analysis = MoveAnalysis::from_board(board, edge)?;
        let score = self.evaluator.evaluate_move(&analysis);
        tracing::trace!(%edge, score, "move evaluated");
        Ok(score)
    }

    /// Every legal move with its score, in enumeration order.
    pub fn ranked_moves<'b>(
        &'b self,
        board: &'b BoardState,
    ) -> impl Iterator<Item = (Move, i32)> + 'b {
        board
            .legal_moves()
            .filter_map(move |edge| Some((edge, self.evaluate_move(board, edge).ok()?)))
    }

    /// Highest-scoring legal move, or `None` once the board is full.
    #[must_use]
    pub fn get_best_move(&self, board: &BoardState) -> Option<Move> {
        let mut best: Option<(Move, i32)> = None;
        for (edge, score) in self.ranked_moves(board) {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((edge, score));
            }
        }
        if let Some((edge, score)) = best {
            tracing::debug!(%edge, score, "best move selected");
        }
        best.map(|(edge, _)| edge)
    }
}
