use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::{BoardSizeError, MoveError};

use super::{
    moves::{BoxPos, Move, edge_in_grid},
    player::{BoxOwner, Player},
    score::Score,
};

/// Dots per side of the reference board (5×5 boxes).
pub const DEFAULT_DOTS_PER_SIDE: usize = 6;

/// Facts reported by [`BoardState::apply_move`].
///
/// A single edge borders at most two boxes, so at most two boxes can be completed at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub completed: ArrayVec<BoxPos, 2>,
    pub game_over: bool,
}

impl MoveOutcome {
    #[must_use]
    pub fn completed_any(&self) -> bool {
        !self.completed.is_empty()
    }
}

/// One entry of the move log kept for undo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub edge: Move,
    pub mover: Player,
    pub completed: ArrayVec<BoxPos, 2>,
}

/// Logical state of a dots-and-boxes grid.
///
/// With `D` dots per side the board holds:
///
/// - `(D-1) × D` horizontal edges, indexed `[row][col]`
/// - `D × (D-1)` vertical edges, indexed `[row][col]`
/// - `(D-1) × (D-1)` boxes, indexed `[row][col]`
///
/// Box `(r, c)` is bordered by horizontal edges `(r, c)` (top) and `(r, c+1)` (bottom) and by
/// vertical edges `(r, c)` (left) and `(r+1, c)` (right). A box is owned iff all four edges are
/// claimed, and ownership never changes once set.
///
/// The board also carries whose turn it is, but [`Self::apply_move`] never changes it. Turn
/// advancement is done separately through [`Self::finish_turn`] so that hypothetical moves on
/// a scratch copy do not disturb turn order.
///
/// # Example
///
/// ```
/// use dotsbox_engine::{BoardState, BoxPos, Move, Player};
///
/// let mut board = BoardState::new(4).unwrap();
/// for edge in board.box_edges(BoxPos::new(0, 0)) {
///     let outcome = board.apply_move(edge, Player::Player1).unwrap();
///     board.finish_turn(&outcome, Player::Player1);
/// }
/// assert_eq!(board.score().player1, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    dots: usize,
    horizontal: Vec<bool>,
    vertical: Vec<bool>,
    owners: Vec<BoxOwner>,
    current_player: Player,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::empty(DEFAULT_DOTS_PER_SIDE)
    }
}

impl BoardState {
    /// Creates an empty board with Player 1 to move.
    pub fn new(dots_per_side: usize) -> Result<Self, BoardSizeError> {
        if dots_per_side < 2 {
            return Err(BoardSizeError {
                dots: dots_per_side,
            });
        }
        Ok(Self::empty(dots_per_side))
    }

    fn empty(dots: usize) -> Self {
        let boxes = dots - 1;
        Self {
            dots,
            horizontal: vec![false; boxes * dots],
            vertical: vec![false; dots * boxes],
            owners: vec![BoxOwner::Unclaimed; boxes * boxes],
            current_player: Player::Player1,
        }
    }

    /// Clears every edge and box and gives the first move back to Player 1.
    pub fn reset(&mut self) {
        self.horizontal.fill(false);
        self.vertical.fill(false);
        self.owners.fill(BoxOwner::Unclaimed);
        self.current_player = Player::Player1;
    }

    #[must_use]
    pub const fn dots_per_side(&self) -> usize {
        self.dots
    }

    #[must_use]
    pub const fn boxes_per_side(&self) -> usize {
        self.dots - 1
    }

    #[must_use]
    pub const fn edge_count(&self) -> usize {
        2 * self.dots * (self.dots - 1)
    }

    #[must_use]
    pub const fn box_count(&self) -> usize {
        (self.dots - 1) * (self.dots - 1)
    }

    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub const fn contains_box(&self, pos: BoxPos) -> bool {
        pos.row < self.dots - 1 && pos.col < self.dots - 1
    }

    #[must_use]
    pub const fn contains_edge(&self, edge: Move) -> bool {
        edge_in_grid(self.dots, edge)
    }

    fn edge_slot(&self, edge: Move) -> Option<usize> {
        if !self.contains_edge(edge) {
            return None;
        }
        Some(match edge {
            Move::Horizontal { row, col } => row * self.dots + col,
            Move::Vertical { row, col } => row * (self.dots - 1) + col,
        })
    }

    fn edge_flag(&self, edge: Move) -> Option<bool> {
        let slot = self.edge_slot(edge)?;
        Some(match edge {
            Move::Horizontal { .. } => self.horizontal[slot],
            Move::Vertical { .. } => self.vertical[slot],
        })
    }

    fn edge_flag_mut(&mut self, edge: Move) -> Option<&mut bool> {
        let slot = self.edge_slot(edge)?;
        Some(match edge {
            Move::Horizontal { .. } => &mut self.horizontal[slot],
            Move::Vertical { .. } => &mut self.vertical[slot],
        })
    }

    fn box_slot(&self, pos: BoxPos) -> usize {
        assert!(
            self.contains_box(pos),
            "box {pos} outside a board with {} boxes per side",
            self.boxes_per_side()
        );
        pos.row * (self.dots - 1) + pos.col
    }

    /// Returns whether `edge` is already claimed.
    pub fn is_occupied(&self, edge: Move) -> Result<bool, MoveError> {
        self.edge_flag(edge).ok_or(MoveError::OutOfRange { edge })
    }

    /// Claims `edge` for `mover` and awards every box the edge completes.
    ///
    /// Only the (at most two) boxes adjacent to `edge` are inspected. The turn is left
    /// untouched; see [`Self::finish_turn`].
    pub fn apply_move(&mut self, edge: Move, mover: Player) -> Result<MoveOutcome, MoveError> {
        let flag = self
            .edge_flag_mut(edge)
            .ok_or(MoveError::OutOfRange { edge })?;
        if *flag {
            return Err(MoveError::AlreadyClaimed { edge });
        }
        *flag = true;

        let mut completed = ArrayVec::new();
        for pos in self.adjacent_boxes(edge) {
            let slot = self.box_slot(pos);
            if self.owners[slot].is_unclaimed() && self.claimed_sides(pos) == 4 {
                self.owners[slot] = mover.into();
                completed.push(pos);
            }
        }

        let game_over = self.is_game_over();
        tracing::trace!(%edge, %mover, completed = completed.len(), game_over, "edge claimed");
        Ok(MoveOutcome {
            completed,
            game_over,
        })
    }

    /// Applies the extra-turn rule: `mover` keeps the turn iff the move completed a box.
    pub fn finish_turn(&mut self, outcome: &MoveOutcome, mover: Player) {
        self.current_player = if outcome.completed_any() {
            mover
        } else {
            mover.opponent()
        };
    }

    /// Reverts the move described by `record` and hands the turn back to its mover.
    ///
    /// Refused (returns `false`, nothing changes) when the move completed a box, when the
    /// edge is not currently claimed, or when unclaiming it would leave an owned box with a
    /// missing side.
    pub fn undo_last(&mut self, record: &MoveRecord) -> bool {
        if record.completed_any() {
            return false;
        }
        if self
            .adjacent_boxes(record.edge)
            .into_iter()
            .any(|pos| !self.box_owner(pos).is_unclaimed())
        {
            return false;
        }
        match self.edge_flag_mut(record.edge) {
            Some(flag) if *flag => {
                *flag = false;
                self.current_player = record.mover;
                true
            }
            _ => false,
        }
    }

    /// Every edge of the grid, horizontal before vertical and row-major within each.
    pub fn all_edges(&self) -> impl Iterator<Item = Move> + Clone + use<> {
        let dots = self.dots;
        let boxes = dots - 1;
        let horizontal =
            (0..boxes).flat_map(move |row| (0..dots).map(move |col| Move::Horizontal { row, col }));
        let vertical =
            (0..dots).flat_map(move |row| (0..boxes).map(move |col| Move::Vertical { row, col }));
        horizontal.chain(vertical)
    }

    /// Unclaimed edges in [`Self::all_edges`] order.
    ///
    /// The iterator is lazy; call again (or clone it) to restart the enumeration.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + Clone + '_ {
        self.all_edges().filter(move |edge| self.edge_flag(*edge) == Some(false))
    }

    /// Every box position in row-major order.
    pub fn boxes(&self) -> impl Iterator<Item = BoxPos> + Clone + use<> {
        let boxes = self.dots - 1;
        (0..boxes).flat_map(move |row| (0..boxes).map(move |col| BoxPos::new(row, col)))
    }

    /// The four edges of a box: top, bottom, left, right.
    #[must_use]
    pub const fn box_edges(&self, pos: BoxPos) -> [Move; 4] {
        let BoxPos { row, col } = pos;
        [
            Move::Horizontal { row, col },
            Move::Horizontal { row, col: col + 1 },
            Move::Vertical { row, col },
            Move::Vertical { row: row + 1, col },
        ]
    }

    /// Boxes bordered by `edge`; empty for out-of-range edges.
    #[must_use]
    pub fn adjacent_boxes(&self, edge: Move) -> ArrayVec<BoxPos, 2> {
        let mut result = ArrayVec::new();
        if !self.contains_edge(edge) {
            return result;
        }
        let boxes = self.dots - 1;
        match edge {
            Move::Horizontal { row, col } => {
                if col > 0 {
                    result.push(BoxPos::new(row, col - 1));
                }
                if col < boxes {
                    result.push(BoxPos::new(row, col));
                }
            }
            Move::Vertical { row, col } => {
                if row > 0 {
                    result.push(BoxPos::new(row - 1, col));
                }
                if row < boxes {
                    result.push(BoxPos::new(row, col));
                }
            }
        }
        result
    }

    /// Number of claimed edges around a box (0 to 4).
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    #[must_use]
    pub fn claimed_sides(&self, pos: BoxPos) -> usize {
        assert!(self.contains_box(pos), "box {pos} outside the board");
        self.box_edges(pos)
            .into_iter()
            .filter(|edge| self.edge_flag(*edge) == Some(true))
            .count()
    }

    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    #[must_use]
    pub fn box_owner(&self, pos: BoxPos) -> BoxOwner {
        self.owners[self.box_slot(pos)]
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.owners.iter().all(|owner| !owner.is_unclaimed())
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.owners
            .iter()
            .fold(Score::default(), |mut score, owner| {
                match owner {
                    BoxOwner::Player1 => score.player1 += 1,
                    BoxOwner::Player2 => score.player2 += 1,
                    BoxOwner::Unclaimed => {}
                }
                score
            })
    }
}

impl MoveRecord {
    #[must_use]
    pub fn completed_any(&self) -> bool {
        !self.completed.is_empty()
    }
}
