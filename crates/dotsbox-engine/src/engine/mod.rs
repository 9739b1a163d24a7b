//! Game orchestration on top of the core board.
//!
//! [`BoardState`](crate::BoardState) only knows how to claim edges and detect completed boxes.
//! [`GameSession`] adds what a front-end needs around it:
//!
//! - the extra-turn rule (a player who completes a box moves again)
//! - an append-only move log, cleared on reset
//! - undo of the most recent move, refused when that move scored
//!
//! # Example
//!
//! ```
//! use dotsbox_engine::{GameSession, Move, Player};
//!
//! let mut session = GameSession::new(6).unwrap();
//!
//! let outcome = session.play(Move::Horizontal { row: 0, col: 0 }).unwrap();
//! assert!(outcome.completed.is_empty());
//! assert_eq!(session.current_player(), Player::Player2);
//!
//! assert!(session.undo());
//! assert_eq!(session.current_player(), Player::Player1);
//! ```

pub use self::game_session::*;

mod game_session;
