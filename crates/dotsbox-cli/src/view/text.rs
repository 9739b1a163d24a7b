//! Plain-text rendering of a board, printed once the full-screen view has closed.
//!
//! The first coordinate of every edge and box runs left to right, the second top to bottom:
//!
//! ```text
//!     0   1   2
//!  0  +---+   +
//!     | 1 |
//!  1  +---+   +
//!
//!  2  +   +   +
//! ```

use dotsbox_engine::{BoardState, BoxOwner, BoxPos, GameSession, Move};

fn claimed(board: &BoardState, edge: Move) -> bool {
    board.is_occupied(edge) == Ok(true)
}

#[must_use]
pub fn render_board(board: &BoardState) -> String {
    let dots = board.dots_per_side();
    let mut lines = Vec::with_capacity(2 * dots);

    let header: String = (0..dots).map(|i| format!("{i:<4}")).collect();
    lines.push(format!("    {header}"));

    for j in 0..dots {
        let mut line = format!("{j:>2}  ");
        for i in 0..dots {
            line.push('+');
            if i + 1 < dots {
                let edge = Move::Horizontal { row: i, col: j };
                line.push_str(if claimed(board, edge) { "---" } else { "   " });
            }
        }
        lines.push(line);

        if j + 1 == dots {
            break;
        }
        let mut line = String::from("    ");
        for i in 0..dots {
            let edge = Move::Vertical { row: i, col: j };
            line.push(if claimed(board, edge) { '|' } else { ' ' });
            if i + 1 < dots {
                line.push_str(match board.box_owner(BoxPos::new(i, j)) {
                    BoxOwner::Unclaimed => "   ",
                    BoxOwner::Player1 => " 1 ",
                    BoxOwner::Player2 => " 2 ",
                });
            }
        }
        lines.push(line);
    }

    let mut out = lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}

#[must_use]
pub fn render_status(session: &GameSession) -> String {
    let score = session.score();
    if session.is_game_over() {
        format!(
            "Game over. Player 1: {}, Player 2: {}. {}",
            score.player1,
            score.player2,
            score.result()
        )
    } else {
        format!(
            "Player 1: {}, Player 2: {}. Next turn: {}",
            score.player1,
            score.player2,
            session.current_player()
        )
    }
}
