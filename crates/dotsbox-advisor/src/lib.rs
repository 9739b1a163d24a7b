//! Move recommendation for dots and boxes.
//!
//! This crate ranks the legal moves of a [`BoardState`](dotsbox_engine::BoardState) and picks
//! moves for computer players. It never mutates the board it is given.
//!
//! 1. **Move Analysis** ([`move_analysis`]) - Applies one candidate edge to a scratch copy of
//!    the board and measures the result (completed boxes, 3-sided and 2-sided boxes, touching
//!    sides).
//!
//! 2. **Move Evaluation** ([`move_evaluator`]) - Turns an analysis into a score using
//!    configurable [`HeuristicWeights`](move_evaluator::HeuristicWeights).
//!
//! 3. **Move Advice** ([`move_advisor`]) - Scores every legal move and returns the best one.
//!    This powers both hints and the hard computer player.
//!
//! 4. **Difficulty** ([`difficulty`]) - Dispatches the three computer tiers: random (easy),
//!    greedy box completion (medium) and the advisor (hard).
//!
//! # Design: Single-Ply Heuristic
//!
//! Only one hypothetical move is ever looked at. There is no game-tree search and no chain
//! tracing; chain potential is approximated by counting boxes with exactly two claimed sides.
//!
//! # Example
//!
//! ```
//! use dotsbox_advisor::move_advisor::MoveAdvisor;
//! use dotsbox_engine::{BoardState, Move};
//!
//! let board = BoardState::new(4).unwrap();
//! let advisor = MoveAdvisor::default();
//!
//! // Every edge of an empty board scores the same, so the first one wins.
//! assert_eq!(
//!     advisor.get_best_move(&board),
//!     Some(Move::Horizontal { row: 0, col: 0 })
//! );
//! ```

pub mod difficulty;
pub mod move_advisor;
pub mod move_analysis;
pub mod move_evaluator;
