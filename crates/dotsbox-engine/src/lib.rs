pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Reasons a move is rejected before it touches the board.
///
/// Rejection never mutates state, so callers can simply re-prompt.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum MoveError {
    #[display("edge {edge} is outside the grid")]
    OutOfRange { edge: Move },
    #[display("edge {edge} is already claimed")]
    AlreadyClaimed { edge: Move },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("board needs at least 2 dots per side, got {dots}")]
pub struct BoardSizeError {
    pub dots: usize,
}
