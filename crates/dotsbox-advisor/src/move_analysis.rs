//! Measures what a single candidate move would do to the board.
//!
//! [`MoveAnalysis::from_board`] never touches the caller's board. It clones it, applies the
//! candidate to the clone and records the figures the evaluator needs. A board clone is three
//! small vectors, so copy-on-evaluate stays cheap and there is no revert path to get wrong.

use dotsbox_engine::{BoardState, BoxPos, Move, MoveError, MoveOutcome};

/// Result of applying one edge to a scratch copy of the board.
#[derive(Debug, Clone)]
pub struct MoveAnalysis {
    edge: Move,
    touching_sides: usize,
    outcome: MoveOutcome,
    three_sided_boxes: usize,
    two_sided_boxes: usize,
    board_after: BoardState,
}

impl MoveAnalysis {
    /// Analyzes `edge` as if the player to move claimed it.
    ///
    /// Fails when `edge` is out of range or already claimed.
    pub fn from_board(board: &BoardState, edge: Move) -> Result<Self, MoveError> {
        let touching_sides = board
            .adjacent_boxes(edge)
            .into_iter()
            .map(|pos| board.claimed_sides(pos))
            .sum::<usize>();

        let mut board_after = board.clone();
        let outcome = board_after.apply_move(edge, board.current_player())?;

        let mut three_sided_boxes = 0;
        let mut two_sided_boxes = 0;
        for pos in board_after.boxes() {
            if !board_after.box_owner(pos).is_unclaimed() {
                continue;
            }
            match board_after.claimed_sides(pos) {
                3 => three_sided_boxes += 1,
                2 => two_sided_boxes += 1,
                _ => {}
            }
        }

        Ok(Self {
            edge,
            touching_sides,
            outcome,
            three_sided_boxes,
            two_sided_boxes,
            board_after,
        })
    }

    #[must_use]
    pub fn edge(&self) -> Move {
        self.edge
    }

    /// Claimed sides of the boxes adjacent to the edge, counted before the move.
    #[must_use]
    pub fn touching_sides(&self) -> usize {
        self.touching_sides
    }

    #[must_use]
    pub fn completed_boxes(&self) -> &[BoxPos] {
        &self.outcome.completed
    }

    #[must_use]
    pub fn completes_box(&self) -> bool {
        self.outcome.completed_any()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome.game_over
    }

    /// Unclaimed boxes left with exactly three claimed sides, i.e. free boxes for the opponent.
    #[must_use]
    pub fn three_sided_boxes(&self) -> usize {
        self.three_sided_boxes
    }

    /// Unclaimed boxes with exactly two claimed sides after the move.
    #[must_use]
    pub fn two_sided_boxes(&self) -> usize {
        self.two_sided_boxes
    }

    #[must_use]
    pub fn board_after(&self) -> &BoardState {
        &self.board_after
    }
}
