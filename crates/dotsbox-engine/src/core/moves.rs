use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies one edge of the grid.
///
/// Both variants use the same axis convention as [`BoxPos`]: `row` is the first array
/// index and runs along the display X axis, `col` is the second index and runs along
/// the display Y axis.
///
/// - `Horizontal { row: r, col: c }` joins dots `(r, c)` and `(r + 1, c)`.
/// - `Vertical { row: r, col: c }` joins dots `(r, c)` and `(r, c + 1)`.
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
pub enum Move {
    #[display("h({row},{col})")]
    Horizontal { row: usize, col: usize },
    #[display("v({row},{col})")]
    Vertical { row: usize, col: usize },
}

impl Move {
    #[must_use]
    pub const fn row(self) -> usize {
        match self {
            Self::Horizontal { row, .. } | Self::Vertical { row, .. } => row,
        }
    }

    #[must_use]
    pub const fn col(self) -> usize {
        match self {
            Self::Horizontal { col, .. } | Self::Vertical { col, .. } => col,
        }
    }
}

/// Whether `edge` exists on a grid with `dots` dots per side.
pub(crate) const fn edge_in_grid(dots: usize, edge: Move) -> bool {
    let boxes = dots.saturating_sub(1);
    match edge {
        Move::Horizontal { row, col } => row < boxes && col < dots,
        Move::Vertical { row, col } => row < dots && col < boxes,
    }
}

/// Position of a box, `(row, col)` with the same convention as [`Move`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row},{col})")]
pub struct BoxPos {
    pub row: usize,
    pub col: usize,
}

impl BoxPos {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseMoveError {
    #[display("unknown edge kind in {input:?}, expected `h` or `v`")]
    UnknownKind { input: String },
    #[display("expected two coordinates in {input:?}")]
    InvalidCoordinates { input: String },
}

/// Parses `h R C`, `v R C` and the `h(R,C)` form produced by [`Display`](std::fmt::Display).
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let kind = chars.next().map(|c| c.to_ascii_lowercase());
        let rest: String = chars
            .map(|c| if matches!(c, '(' | ')' | ',') { ' ' } else { c })
            .collect();

        let coords = rest
            .split_whitespace()
            .map(str::parse::<usize>)
            .collect::<Result<Vec<_>, _>>()
            .ok()
            .filter(|coords| coords.len() == 2)
            .ok_or_else(|| ParseMoveError::InvalidCoordinates {
                input: s.to_owned(),
            });

        match kind {
            Some('h') => coords.map(|c| Self::Horizontal {
                row: c[0],
                col: c[1],
            }),
            Some('v') => coords.map(|c| Self::Vertical {
                row: c[0],
                col: c[1],
            }),
            _ => Err(ParseMoveError::UnknownKind {
                input: s.to_owned(),
            }),
        }
    }
}
