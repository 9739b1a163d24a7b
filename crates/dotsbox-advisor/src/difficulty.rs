//! Computer player tiers.
//!
//! | tier     | strategy                                                          |
//! |----------|-------------------------------------------------------------------|
//! | `easy`   | uniform random legal move                                         |
//! | `medium` | missing edge of the first 3-sided box (row-major), else random    |
//! | `hard`   | [`MoveAdvisor::get_best_move`]                                    |
//!
//! Every selector returns `None` only when the board has no legal move left, which callers
//! should read as "game over".

use dotsbox_engine::{BoardState, GameSession, Move, MoveError, MoveOutcome};
use rand::{Rng, seq::IteratorRandom as _};
use serde::{Deserialize, Serialize};

use crate::move_advisor::MoveAdvisor;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    #[display("easy")]
    Easy,
    #[display("medium")]
    Medium,
    #[display("hard")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Picks a move for the player to move on `board`.
    pub fn select_move<R>(
        self,
        board: &BoardState,
        advisor: &MoveAdvisor<'_>,
        rng: &mut R,
    ) -> Option<Move>
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::Easy => easy_move(board, rng),
            Self::Medium => medium_move(board, rng),
            Self::Hard => advisor.get_best_move(board),
        }
    }

    /// Selects a move for the current player and plays it.
    ///
    /// Returns `Ok(None)` when the game is already over.
    pub fn play_turn<R>(
        self,
        session: &mut GameSession,
        advisor: &MoveAdvisor<'_>,
        rng: &mut R,
    ) -> Result<Option<(Move, MoveOutcome)>, MoveError>
    where
        R: Rng + ?Sized,
    {
        let Some(edge) = self.select_move(session.board(), advisor, rng) else {
            return Ok(None);
        };
        tracing::debug!(
            difficulty = %self,
            %edge,
            player = %session.current_player(),
            "computer move"
        );
        let outcome = session.play(edge)?;
        Ok(Some((edge, outcome)))
    }
}

/// Uniformly random legal move.
pub fn easy_move<R>(board: &BoardState, rng: &mut R) -> Option<Move>
where
    R: Rng + ?Sized,
{
    board.legal_moves().choose(rng)
}

/// Missing edge of the first box (row-major) with exactly three claimed sides.
#[must_use]
pub fn completing_move(board: &BoardState) -> Option<Move> {
    board
        .boxes()
        .filter(|pos| board.claimed_sides(*pos) == 3)
        .find_map(|pos| {
            board
                .box_edges(pos)
                .into_iter()
                .find(|edge| board.is_occupied(*edge) == Ok(false))
        })
}

/// Greedy box completion, falling back to [`easy_move`].
pub fn medium_move<R>(board: &BoardState, rng: &mut R) -> Option<Move>
where
    R: Rng + ?Sized,
{
    completing_move(board).or_else(|| easy_move(board, rng))
}

/// Hint for the player to move; same as the hard tier.
#[must_use]
pub fn request_hint(board: &BoardState, advisor: &MoveAdvisor<'_>) -> Option<Move> {
    advisor.get_best_move(board)
}
