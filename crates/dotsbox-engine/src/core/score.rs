use serde::{Deserialize, Serialize};

use super::player::Player;

/// Boxes owned by each player.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
#[display("{player1} - {player2}")]
pub struct Score {
    pub player1: usize,
    pub player2: usize,
}

/// Final verdict of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameResult {
    #[display("Winner: {_0}")]
    Winner(Player),
    #[display("It's a tie")]
    Tie,
}

impl Score {
    #[must_use]
    pub const fn new(player1: usize, player2: usize) -> Self {
        Self { player1, player2 }
    }

    #[must_use]
    pub const fn of(self, player: Player) -> usize {
        match player {
            Player::Player1 => self.player1,
            Player::Player2 => self.player2,
        }
    }

    #[must_use]
    pub const fn total(self) -> usize {
        self.player1 + self.player2
    }

    /// Compares the two counts. Only meaningful once the game is over.
    #[must_use]
    pub fn result(self) -> GameResult {
        match self.player1.cmp(&self.player2) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::Player1),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Player2),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }
}

impl From<Score> for (usize, usize) {
    fn from(score: Score) -> Self {
        (score.player1, score.player2)
    }
}
