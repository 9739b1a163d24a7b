use serde::{Deserialize, Serialize};

use super::moves::{BoxPos, Move, edge_in_grid};

/// Side length, in display units, of the reference square board.
pub const REFERENCE_BOARD_SIZE: f64 = 600.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Display geometry of the grid.
///
/// Dot `(i, j)` sits at `(i * spacing + spacing / 2, j * spacing + spacing / 2)`, so the first
/// index of every [`Move`] and [`BoxPos`] runs along the X axis.
///
/// # Pointer mapping
///
/// A pointer coordinate `p` falls in lattice cell `floor((p - spacing / 4) / (spacing / 2))`
/// on each axis. Even lattice indices are dot columns/rows, odd ones lie between dots:
///
/// ```text
/// lattice x:   0     1     2     3     4
///              o ─────── o ─────── o        (lattice y = 0)
///              │         │         │
///              │    ·    │    ·    │        (lattice y = 1)
///              │         │         │
///              o ─────── o ─────── o        (lattice y = 2)
/// ```
///
/// `(odd, even)` is a horizontal edge midpoint, `(even, odd)` a vertical one. Anything else
/// (a dot or a box interior) is not an edge and is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    dots_per_side: usize,
    dot_spacing: f64,
}

impl GridLayout {
    #[must_use]
    pub const fn new(dots_per_side: usize, dot_spacing: f64) -> Self {
        Self {
            dots_per_side,
            dot_spacing,
        }
    }

    /// Spreads `dots_per_side` dots evenly across a square of side `board_size`.
    #[must_use]
    pub fn from_board_size(board_size: f64, dots_per_side: usize) -> Self {
        #[expect(clippy::cast_precision_loss)]
        let spacing = board_size / dots_per_side.max(1) as f64;
        Self::new(dots_per_side, spacing)
    }

    #[must_use]
    pub const fn dots_per_side(&self) -> usize {
        self.dots_per_side
    }

    #[must_use]
    pub const fn dot_spacing(&self) -> f64 {
        self.dot_spacing
    }

    #[must_use]
    pub fn dot_center(&self, i: usize, j: usize) -> Point {
        #[expect(clippy::cast_precision_loss)]
        let (i, j) = (i as f64, j as f64);
        let half = self.dot_spacing / 2.0;
        Point::new(half + i * self.dot_spacing, half + j * self.dot_spacing)
    }

    /// End points of the segment drawn for `edge`.
    #[must_use]
    pub fn edge_segment(&self, edge: Move) -> (Point, Point) {
        match edge {
            Move::Horizontal { row, col } => {
                (self.dot_center(row, col), self.dot_center(row + 1, col))
            }
            Move::Vertical { row, col } => {
                (self.dot_center(row, col), self.dot_center(row, col + 1))
            }
        }
    }

    /// Top-left and bottom-right corners of a box.
    #[must_use]
    pub fn box_rect(&self, pos: BoxPos) -> (Point, Point) {
        (
            self.dot_center(pos.row, pos.col),
            self.dot_center(pos.row + 1, pos.col + 1),
        )
    }

    fn lattice(&self, coord: f64) -> Option<usize> {
        let cell = ((coord - self.dot_spacing / 4.0) / (self.dot_spacing / 2.0)).floor();
        if !cell.is_finite() || cell < 0.0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cell = cell as usize;
        Some(cell)
    }

    /// Maps a pointer position to the edge whose midpoint region contains it.
    ///
    /// Returns `None` for dots, box interiors and anything outside the grid.
    #[must_use]
    pub fn pointer_to_move(&self, x: f64, y: f64) -> Option<Move> {
        let lx = self.lattice(x)?;
        let ly = self.lattice(y)?;
        let edge = match (lx % 2, ly % 2) {
            (1, 0) => Move::Horizontal {
                row: (lx - 1) / 2,
                col: ly / 2,
            },
            (0, 1) => Move::Vertical {
                row: lx / 2,
                col: (ly - 1) / 2,
            },
            _ => return None,
        };
        edge_in_grid(self.dots_per_side, edge).then_some(edge)
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::from_board_size(REFERENCE_BOARD_SIZE, super::board::DEFAULT_DOTS_PER_SIDE)
    }
}
