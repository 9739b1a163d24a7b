use serde::{Deserialize, Serialize};

/// One of the two players competing for boxes.
///
/// Player 1 always moves first on a fresh or reset board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Player {
    #[display("Player 1")]
    Player1,
    #[display("Player 2")]
    Player2,
}

impl Player {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }
}

/// Ownership tag of a single box.
///
/// A box only ever transitions from [`BoxOwner::Unclaimed`] to one of the player variants.
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
    derive_more::IsVariant,
)]
pub enum BoxOwner {
    #[default]
    Unclaimed,
    Player1,
    Player2,
}

impl BoxOwner {
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Self::Unclaimed => None,
            Self::Player1 => Some(Player::Player1),
            Self::Player2 => Some(Player::Player2),
        }
    }
}

impl From<Player> for BoxOwner {
    fn from(player: Player) -> Self {
        match player {
            Player::Player1 => Self::Player1,
            Player::Player2 => Self::Player2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Player::Player1.opponent(), Player::Player2);
        assert_eq!(Player::Player2.opponent(), Player::Player1);
        assert_eq!(Player::Player1.opponent().opponent(), Player::Player1);
    }

    #[test]
    fn test_box_owner_from_player() {
        assert_eq!(BoxOwner::from(Player::Player1).player(), Some(Player::Player1));
        assert_eq!(BoxOwner::from(Player::Player2).player(), Some(Player::Player2));
        assert_eq!(BoxOwner::Unclaimed.player(), None);
        assert!(BoxOwner::default().is_unclaimed());
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::Player1.to_string(), "Player 1");
        assert_eq!(Player::Player2.to_string(), "Player 2");
    }
}
