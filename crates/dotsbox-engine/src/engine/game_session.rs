use crate::{
    BoardSizeError, MoveError,
    core::{
        board::{BoardState, MoveOutcome, MoveRecord},
        moves::Move,
        player::Player,
        score::Score,
    },
};

/// A single game in progress: the board plus its move log.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    board: BoardState,
    history: Vec<MoveRecord>,
}

impl GameSession {
    pub fn new(dots_per_side: usize) -> Result<Self, BoardSizeError> {
        Ok(Self {
            board: BoardState::new(dots_per_side)?,
            history: Vec::new(),
        })
    }

    /// Starts over on the same grid size.
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        tracing::debug!("session reset");
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.board.score()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Claims `edge` for `mover`, then passes the turn unless a box was completed.
    ///
    /// A rejected move leaves the session untouched.
    pub fn apply_player_move(
        &mut self,
        edge: Move,
        mover: Player,
    ) -> Result<MoveOutcome, MoveError> {
        let outcome = self.board.apply_move(edge, mover)?;
        self.board.finish_turn(&outcome, mover);
        self.history.push(MoveRecord {
            edge,
            mover,
            completed: outcome.completed.clone(),
        });

        tracing::debug!(
            %edge,
            %mover,
            completed = outcome.completed.len(),
            next = %self.board.current_player(),
            "move applied"
        );
        if outcome.game_over {
            tracing::debug!(score = %self.board.score(), "game over");
        }
        Ok(outcome)
    }

    /// Plays `edge` for whoever is to move.
    pub fn play(&mut self, edge: Move) -> Result<MoveOutcome, MoveError> {
        self.apply_player_move(edge, self.board.current_player())
    }

    /// Takes back the most recent move.
    ///
    /// Returns `false` without changing anything when there is no move to take back or when
    /// the last move completed a box.
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.history.last() else {
            return false;
        };
        if !self.board.undo_last(record) {
            tracing::debug!(edge = %record.edge, "undo refused");
            return false;
        }
        tracing::debug!(edge = %record.edge, mover = %record.mover, "move undone");
        self.history.pop();
        true
    }
}
