//! Full-screen board widget.
//!
//! Dot `(i, j)` is drawn at column `CELL_WIDTH * i` and row `CELL_HEIGHT * j` of the widget
//! area, matching the X/Y orientation of [`GridLayout`]:
//!
//! ```text
//! •─────•     •
//! │  1  │
//! │     │
//! •─────•     •
//! ```
//!
//! Terminal cells are mapped back to board coordinates by [`BoardDisplay::pointer_position`],
//! so a click resolves through [`GridLayout::pointer_to_move`] exactly like a pointer on the
//! reference board.

use dotsbox_engine::{BoardState, BoxOwner, GridLayout, Move, Point};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::Widget,
};

pub const CELL_WIDTH: u16 = 6;
pub const CELL_HEIGHT: u16 = 3;

const DOT: &str = "•";
const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";

const DOT_STYLE: Style = Style::new().fg(Color::White);
const EDGE_STYLE: Style = Style::new().fg(Color::Gray);
const LAST_EDGE_STYLE: Style = Style::new().fg(Color::LightGreen).add_modifier(Modifier::BOLD);
const HINT_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const PLAYER1_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);
const PLAYER2_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Magenta);

#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a BoardState,
    last_move: Option<Move>,
    hint: Option<Move>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a BoardState) -> Self {
        Self {
            board,
            last_move: None,
            hint: None,
        }
    }

    pub fn last_move(self, edge: Option<Move>) -> Self {
        Self {
            last_move: edge,
            ..self
        }
    }

    pub fn hint(self, edge: Option<Move>) -> Self {
        Self { hint: edge, ..self }
    }

    /// Size of the widget for a board with `dots_per_side` dots.
    pub fn size(dots_per_side: usize) -> (u16, u16) {
        let gaps = u16::try_from(dots_per_side.saturating_sub(1)).unwrap_or(u16::MAX);
        (
            gaps.saturating_mul(CELL_WIDTH).saturating_add(1),
            gaps.saturating_mul(CELL_HEIGHT).saturating_add(1),
        )
    }

    /// Board coordinates under the terminal cell `position`, or `None` outside `area`.
    ///
    /// `area` is where the widget is drawn; dot cells land exactly on [`GridLayout::dot_center`].
    pub fn pointer_position(layout: &GridLayout, area: Rect, position: Position) -> Option<Point> {
        if !area.contains(position) {
            return None;
        }
        let dx = f64::from(position.x - area.x) / f64::from(CELL_WIDTH);
        let dy = f64::from(position.y - area.y) / f64::from(CELL_HEIGHT);
        let spacing = layout.dot_spacing();
        Some(Point::new((dx + 0.5) * spacing, (dy + 0.5) * spacing))
    }

    fn edge_style(&self, edge: Move) -> Option<Style> {
        if self.board.is_occupied(edge) == Ok(true) {
            Some(if self.last_move == Some(edge) {
                LAST_EDGE_STYLE
            } else {
                EDGE_STYLE
            })
        } else if self.hint == Some(edge) {
            Some(HINT_STYLE)
        } else {
            None
        }
    }
}

/// Top-left terminal cell of dot `(i, j)`, relative to the widget origin.
fn dot_offset(i: usize, j: usize) -> (u16, u16) {
    let i = u16::try_from(i).unwrap_or(u16::MAX);
    let j = u16::try_from(j).unwrap_or(u16::MAX);
    (i.saturating_mul(CELL_WIDTH), j.saturating_mul(CELL_HEIGHT))
}

fn put(buf: &mut Buffer, area: Rect, (x, y): (u16, u16), symbol: &str, style: Style) {
    let position = Position::new(area.x.saturating_add(x), area.y.saturating_add(y));
    if !area.contains(position) {
        return;
    }
    if let Some(cell) = buf.cell_mut(position) {
        cell.set_symbol(symbol).set_style(style);
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board = self.board;

        for pos in board.boxes() {
            let (label, style) = match board.box_owner(pos) {
                BoxOwner::Unclaimed => continue,
                BoxOwner::Player1 => ("1", PLAYER1_STYLE),
                BoxOwner::Player2 => ("2", PLAYER2_STYLE),
            };
            let (x0, y0) = dot_offset(pos.row, pos.col);
            for dy in 1..CELL_HEIGHT {
                for dx in 1..CELL_WIDTH {
                    let symbol = if dy == 1 && dx == CELL_WIDTH / 2 {
                        label
                    } else {
                        " "
                    };
                    put(buf, area, (x0 + dx, y0 + dy), symbol, style);
                }
            }
        }

        for edge in board.all_edges() {
            let Some(style) = self.edge_style(edge) else {
                continue;
            };
            let (x0, y0) = dot_offset(edge.row(), edge.col());
            match edge {
                Move::Horizontal { .. } => {
                    for dx in 1..CELL_WIDTH {
                        put(buf, area, (x0 + dx, y0), HORIZONTAL, style);
                    }
                }
                Move::Vertical { .. } => {
                    for dy in 1..CELL_HEIGHT {
                        put(buf, area, (x0, y0 + dy), VERTICAL, style);
                    }
                }
            }
        }

        let dots = board.dots_per_side();
        for i in 0..dots {
            for j in 0..dots {
                put(buf, area, dot_offset(i, j), DOT, DOT_STYLE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dotsbox_engine::{BoxPos, Player, REFERENCE_BOARD_SIZE};

    use super::*;

    fn cell_symbol(buf: &Buffer, x: u16, y: u16) -> &str {
        buf[(x, y)].symbol()
    }

    fn render(board: &BoardDisplay<'_>) -> Buffer {
        let (width, height) = BoardDisplay::size(board.board.dots_per_side());
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        board.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_size() {
        assert_eq!(BoardDisplay::size(2), (7, 4));
        assert_eq!(BoardDisplay::size(6), (31, 16));
    }

    #[test]
    fn test_render_edges_and_owner() {
        let mut board = BoardState::new(3).unwrap();
        board
            .apply_move(Move::Horizontal { row: 1, col: 0 }, Player::Player1)
            .unwrap();
        for edge in board.box_edges(BoxPos::new(0, 1)) {
            board.apply_move(edge, Player::Player2).unwrap();
        }
        let buf = render(&BoardDisplay::new(&board));

        assert_eq!(cell_symbol(&buf, 0, 0), DOT);
        assert_eq!(cell_symbol(&buf, 12, 6), DOT);
        // H(1,0) runs from dot (1,0) to dot (2,0) along the top row
        assert_eq!(cell_symbol(&buf, 7, 0), HORIZONTAL);
        assert_eq!(cell_symbol(&buf, 11, 0), HORIZONTAL);
        // H(0,0) is unclaimed
        assert_eq!(cell_symbol(&buf, 3, 0), " ");
        // box (0,1) sits below-left, between rows 3 and 6
        assert_eq!(cell_symbol(&buf, 0, 4), VERTICAL);
        assert_eq!(cell_symbol(&buf, 6, 5), VERTICAL);
        assert_eq!(cell_symbol(&buf, 3, 4), "2");
        assert_eq!(buf[(2, 5)].style().bg, Some(Color::Magenta));
    }

    #[test]
    fn test_render_hint_and_last_move() {
        let mut board = BoardState::new(3).unwrap();
        let last = Move::Vertical { row: 2, col: 1 };
        board.apply_move(last, Player::Player1).unwrap();
        let hint = Move::Horizontal { row: 0, col: 2 };
        let buf = render(&BoardDisplay::new(&board).last_move(Some(last)).hint(Some(hint)));

        assert_eq!(cell_symbol(&buf, 12, 4), VERTICAL);
        assert_eq!(buf[(12, 4)].style().fg, Some(Color::LightGreen));
        assert_eq!(cell_symbol(&buf, 3, 6), HORIZONTAL);
        assert_eq!(buf[(3, 6)].style().fg, Some(Color::Yellow));
    }

    #[test]
    fn test_pointer_position_hits_dot_centers() {
        let layout = GridLayout::from_board_size(REFERENCE_BOARD_SIZE, 6);
        let area = Rect::new(2, 3, 31, 16);
        assert_eq!(
            BoardDisplay::pointer_position(&layout, area, Position::new(2, 3)),
            Some(layout.dot_center(0, 0))
        );
        assert_eq!(
            BoardDisplay::pointer_position(&layout, area, Position::new(2 + 18, 3 + 6)),
            Some(layout.dot_center(3, 2))
        );
        assert_eq!(BoardDisplay::pointer_position(&layout, area, Position::new(1, 3)), None);
    }

    #[test]
    fn test_every_drawn_edge_cell_maps_to_its_edge() {
        for dots in [2, 3, 6] {
            let board = BoardState::new(dots).unwrap();
            let layout = GridLayout::from_board_size(REFERENCE_BOARD_SIZE, dots);
            let (width, height) = BoardDisplay::size(dots);
            let area = Rect::new(0, 0, width, height);
            let click = |x: u16, y: u16| {
                let point = BoardDisplay::pointer_position(&layout, area, Position::new(x, y))?;
                layout.pointer_to_move(point.x, point.y)
            };

            for edge in board.all_edges() {
                let (x0, y0) = dot_offset(edge.row(), edge.col());
                match edge {
                    // the cells next to each dot belong to the dot
                    Move::Horizontal { .. } => {
                        for dx in 2..=4 {
                            assert_eq!(click(x0 + dx, y0), Some(edge), "{edge} +{dx}");
                        }
                    }
                    Move::Vertical { .. } => {
                        for dy in 1..=2 {
                            assert_eq!(click(x0, y0 + dy), Some(edge), "{edge} +{dy}");
                        }
                    }
                }
            }
            for pos in board.boxes() {
                let (x0, y0) = dot_offset(pos.row, pos.col);
                assert_eq!(click(x0 + 3, y0 + 1), None);
                assert_eq!(click(x0, y0), None);
            }
        }
    }
}
