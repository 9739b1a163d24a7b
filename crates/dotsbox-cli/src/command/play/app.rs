use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use dotsbox_advisor::{
    difficulty::{Difficulty, request_hint},
    move_advisor::MoveAdvisor,
};
use dotsbox_engine::{
    GameSession, GridLayout, Move, MoveError, MoveOutcome, MoveRecord, Player,
    REFERENCE_BOARD_SIZE,
};
use rand_pcg::Pcg32;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
};

use crate::{
    tui::{App, Tui},
    view::{BoardDisplay, KeyBinding, KeyBindingDisplay, render_status},
};

/// The computer always plays second.
const COMPUTER: Player = Player::Player2;
/// One computer move per tick, so chained extra turns stay readable.
const COMPUTER_MOVES_PER_SECOND: f64 = 2.0;

/// Terminal cell of dot `(0, 0)`.
const BOARD_ORIGIN: Position = Position::new(2, 2);

const KEY_BINDINGS: &[KeyBinding<'static>] = &[
    ("click", "Draw edge"),
    ("h", "Hint"),
    ("u", "Undo"),
    ("r", "New game"),
    ("q", "Quit"),
];

const STATUS_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Gray);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Hint,
    Undo,
    Reset,
    Quit,
}

impl Action {
    fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Char('h') => Some(Action::Hint),
            KeyCode::Char('u') => Some(Action::Undo),
            KeyCode::Char('r') => Some(Action::Reset),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}

/// Interactive game: mouse clicks claim edges, the computer answers on ticks.
#[derive(Debug)]
pub struct PlayApp<'a> {
    session: GameSession,
    layout: GridLayout,
    computer: Option<Difficulty>,
    advisor: MoveAdvisor<'a>,
    rng: Pcg32,
    hint: Option<Move>,
    message: String,
    is_exiting: bool,
}

impl<'a> PlayApp<'a> {
    pub fn new(
        session: GameSession,
        computer: Option<Difficulty>,
        advisor: MoveAdvisor<'a>,
        rng: Pcg32,
    ) -> Self {
        let layout =
            GridLayout::from_board_size(REFERENCE_BOARD_SIZE, session.board().dots_per_side());
        Self {
            session,
            layout,
            computer,
            advisor,
            rng,
            hint: None,
            message: String::from("Click between two dots to draw an edge"),
            is_exiting: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    fn board_area(&self) -> Rect {
        let (width, height) = BoardDisplay::size(self.session.board().dots_per_side());
        Rect::new(BOARD_ORIGIN.x, BOARD_ORIGIN.y, width, height)
    }

    fn is_computer_turn(&self) -> bool {
        self.computer.is_some() && self.session.current_player() == COMPUTER
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match Action::from_key(*code) {
                Some(Action::Hint) => self.hint(),
                Some(Action::Undo) => self.undo(),
                Some(Action::Reset) => self.reset(),
                Some(Action::Quit) => self.is_exiting = true,
                None => {}
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.click(Position::new(*column, *row)),
            _ => {}
        }
    }

    /// Plays at most one computer move.
    pub fn update(&mut self) {
        let Some(difficulty) = self.computer else {
            return;
        };
        if self.is_exiting || self.session.is_game_over() || !self.is_computer_turn() {
            return;
        }
        match difficulty.play_turn(&mut self.session, &self.advisor, &mut self.rng) {
            Ok(Some((edge, outcome))) => self.report(COMPUTER, edge, &outcome),
            Ok(None) => {}
            Err(e) => {
                tracing::error!(%e, "computer chose an illegal move");
                self.message = e.to_string();
            }
        }
    }

    fn click(&mut self, position: Position) {
        let Some(edge) =
            BoardDisplay::pointer_position(&self.layout, self.board_area(), position)
                .and_then(|point| self.layout.pointer_to_move(point.x, point.y))
        else {
            return;
        };
        if self.session.is_game_over() {
            self.message = String::from("The game is over: press r for a new game or q to quit");
            return;
        }
        if self.is_computer_turn() {
            self.message = String::from("Wait for the computer to move");
            return;
        }

        let mover = self.session.current_player();
        match self.session.play(edge) {
            Ok(outcome) => self.report(mover, edge, &outcome),
            Err(MoveError::AlreadyClaimed { .. }) => {
                self.message = format!("Edge {edge} is already taken");
            }
            Err(e) => self.message = e.to_string(),
        }
    }

    fn report(&mut self, mover: Player, edge: Move, outcome: &MoveOutcome) {
        self.hint = None;
        self.message = if outcome.completed_any() {
            format!(
                "{mover} plays {edge} and completes {} box(es)",
                outcome.completed.len()
            )
        } else {
            format!("{mover} plays {edge}")
        };
    }

    fn hint(&mut self) {
        if self.is_computer_turn() {
            return;
        }
        self.hint = request_hint(self.session.board(), &self.advisor);
        self.message = match self.hint {
            Some(edge) => format!("Hint: {edge}"),
            None => String::from("No moves left"),
        };
    }

    /// Takes back the last move, or against the computer everything since the human's last
    /// move. Either the whole span is undone or nothing is.
    fn undo(&mut self) {
        let history = self.session.history();
        let span = match self.computer {
            None => usize::from(!history.is_empty()),
            Some(_) => history
                .iter()
                .rposition(|record| record.mover != COMPUTER)
                .map_or(0, |i| history.len() - i),
        };
        if span == 0 {
            self.message = String::from("Nothing to undo");
            return;
        }
        if history[history.len() - span..].iter().any(MoveRecord::completed_any) {
            self.message = String::from("Cannot undo past a completed box");
            return;
        }

        let undone = (0..span).take_while(|_| self.session.undo()).count();
        self.hint = None;
        self.message = format!("Undid {undone} move(s)");
    }

    fn reset(&mut self) {
        self.session.reset();
        self.hint = None;
        self.message = String::from("New game");
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let board_area = self.board_area();
        let row = |y: u16| Rect::new(BOARD_ORIGIN.x, y, area.width, 1).intersection(area);

        let status = Line::styled(render_status(&self.session), STATUS_STYLE);
        frame.render_widget(status, row(0));

        let board = BoardDisplay::new(self.session.board())
            .last_move(self.session.history().last().map(|record| record.edge))
            .hint(self.hint);
        frame.render_widget(board, board_area.intersection(area));

        let message = Line::styled(self.message.as_str(), MESSAGE_STYLE);
        frame.render_widget(message, row(board_area.bottom() + 1));
        frame.render_widget(KeyBindingDisplay::new(KEY_BINDINGS), row(board_area.bottom() + 2));
    }
}

impl App for PlayApp<'_> {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_rate(COMPUTER_MOVES_PER_SECOND);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: &Event) {
        PlayApp::handle_event(self, event);
    }

    fn draw(&self, frame: &mut Frame) {
        PlayApp::draw(self, frame);
    }

    fn update(&mut self, _tui: &mut Tui) {
        PlayApp::update(self);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use rand::SeedableRng as _;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn new_app(dots: usize, computer: Option<Difficulty>) -> PlayApp<'static> {
        PlayApp::new(
            GameSession::new(dots).unwrap(),
            computer,
            MoveAdvisor::default(),
            Pcg32::seed_from_u64(17),
        )
    }

    fn press(app: &mut PlayApp<'_>, c: char) {
        app.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
    }

    fn click_cell(app: &mut PlayApp<'_>, column: u16, row: u16) {
        app.handle_event(&Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    /// Clicks the middle of the line drawn for `edge`.
    fn click_edge(app: &mut PlayApp<'_>, edge: Move) {
        let row = u16::try_from(edge.row()).unwrap();
        let col = u16::try_from(edge.col()).unwrap();
        let (x, y) = match edge {
            Move::Horizontal { .. } => (6 * row + 3, 3 * col),
            Move::Vertical { .. } => (6 * row, 3 * col + 1),
        };
        click_cell(app, BOARD_ORIGIN.x + x, BOARD_ORIGIN.y + y);
    }

    fn edges(app: &PlayApp<'_>) -> Vec<Move> {
        app.session.history().iter().map(|record| record.edge).collect()
    }

    #[test]
    fn test_click_claims_edge() {
        let mut app = new_app(6, None);
        click_edge(&mut app, Move::Horizontal { row: 0, col: 0 });
        click_edge(&mut app, Move::Vertical { row: 2, col: 3 });
        assert_eq!(
            edges(&app),
            [
                Move::Horizontal { row: 0, col: 0 },
                Move::Vertical { row: 2, col: 3 },
            ]
        );
        assert_eq!(app.session.current_player(), Player::Player1);
        assert_eq!(app.message, "Player 2 plays v(2,3)");
    }

    #[test]
    fn test_clicks_off_edges_are_ignored() {
        let mut app = new_app(6, None);
        // dot (0,0)
        click_cell(&mut app, BOARD_ORIGIN.x, BOARD_ORIGIN.y);
        // interior of box (0,0)
        click_cell(&mut app, BOARD_ORIGIN.x + 3, BOARD_ORIGIN.y + 1);
        // status line and margins
        click_cell(&mut app, 5, 0);
        click_cell(&mut app, 0, BOARD_ORIGIN.y);
        assert!(app.session.history().is_empty());
    }

    #[test]
    fn test_click_on_taken_edge() {
        let mut app = new_app(3, None);
        let edge = Move::Vertical { row: 1, col: 0 };
        click_edge(&mut app, edge);
        click_edge(&mut app, edge);
        assert_eq!(edges(&app), [edge]);
        assert_eq!(app.message, "Edge v(1,0) is already taken");
        assert_eq!(app.session.current_player(), Player::Player2);
    }

    #[test]
    fn test_two_player_game_to_the_end() {
        let mut app = new_app(2, None);
        for edge in [
            Move::Horizontal { row: 0, col: 0 },
            Move::Horizontal { row: 0, col: 1 },
            Move::Vertical { row: 0, col: 0 },
            Move::Vertical { row: 1, col: 0 },
        ] {
            click_edge(&mut app, edge);
        }
        assert!(app.session.is_game_over());
        assert_eq!(app.message, "Player 2 plays v(1,0) and completes 1 box(es)");
        assert!(render_status(&app.session).ends_with("Winner: Player 2"));

        click_edge(&mut app, Move::Vertical { row: 1, col: 0 });
        assert!(app.message.starts_with("The game is over"));
    }

    #[test]
    fn test_computer_moves_on_update() {
        let mut app = new_app(4, Some(Difficulty::Hard));
        app.update();
        assert!(app.session.history().is_empty());

        click_edge(&mut app, Move::Horizontal { row: 0, col: 0 });
        // the human has to wait for the answer
        click_edge(&mut app, Move::Horizontal { row: 2, col: 2 });
        assert_eq!(app.session.history().len(), 1);
        assert_eq!(app.message, "Wait for the computer to move");

        app.update();
        assert_eq!(app.session.history().len(), 2);
        assert_eq!(app.session.history()[1].mover, Player::Player2);
        assert!(app.message.starts_with("Player 2 plays"));
        assert_eq!(app.session.current_player(), Player::Player1);

        app.update();
        assert_eq!(app.session.history().len(), 2);
    }

    #[test]
    fn test_hint_is_shown_until_next_move() {
        let mut app = new_app(3, None);
        press(&mut app, 'h');
        assert_eq!(app.hint, Some(Move::Horizontal { row: 0, col: 0 }));
        assert_eq!(app.message, "Hint: h(0,0)");
        assert!(app.session.history().is_empty());

        click_edge(&mut app, Move::Vertical { row: 0, col: 0 });
        assert_eq!(app.hint, None);
    }

    #[test]
    fn test_undo_between_two_players() {
        let mut app = new_app(3, None);
        click_edge(&mut app, Move::Vertical { row: 0, col: 0 });
        click_edge(&mut app, Move::Vertical { row: 0, col: 1 });
        press(&mut app, 'u');
        assert_eq!(edges(&app), [Move::Vertical { row: 0, col: 0 }]);
        assert_eq!(app.session.current_player(), Player::Player2);
        press(&mut app, 'u');
        press(&mut app, 'u');
        assert!(app.session.history().is_empty());
        assert_eq!(app.message, "Nothing to undo");
    }

    #[test]
    fn test_undo_rewinds_to_the_human_move() {
        let mut app = new_app(4, Some(Difficulty::Hard));
        click_edge(&mut app, Move::Horizontal { row: 0, col: 0 });
        app.update();
        assert_eq!(app.session.history().len(), 2);

        press(&mut app, 'u');
        assert_eq!(app.message, "Undid 2 move(s)");
        assert!(app.session.history().is_empty());
        assert_eq!(app.session.current_player(), Player::Player1);

        app.update();
        assert!(app.session.history().is_empty());
    }

    #[test]
    fn test_undo_is_refused_across_a_completed_box() {
        let mut app = new_app(3, Some(Difficulty::Hard));
        for edge in [
            Move::Horizontal { row: 0, col: 0 },
            Move::Horizontal { row: 0, col: 1 },
            Move::Vertical { row: 0, col: 0 },
            // completes box (0,0) for the computer, which moves again
            Move::Vertical { row: 1, col: 0 },
            Move::Horizontal { row: 1, col: 1 },
        ] {
            app.session.play(edge).unwrap();
        }
        assert_eq!(app.session.history()[3].mover, Player::Player2);
        assert_eq!(app.session.history()[4].mover, Player::Player2);
        assert_eq!(app.session.current_player(), Player::Player1);
        let before = app.session.board().clone();

        press(&mut app, 'u');
        assert_eq!(app.message, "Cannot undo past a completed box");
        assert_eq!(app.session.history().len(), 5);
        assert_eq!(app.session.board(), &before);

        // still the human's turn, so the computer does not move again
        app.update();
        assert_eq!(app.session.history().len(), 5);
        assert_eq!(app.session.current_player(), Player::Player1);
    }

    #[test]
    fn test_reset_and_quit_keys() {
        let mut app = new_app(3, None);
        click_edge(&mut app, Move::Horizontal { row: 1, col: 1 });
        press(&mut app, 'r');
        assert!(app.session.history().is_empty());
        assert_eq!(app.message, "New game");
        assert!(!app.should_exit());

        press(&mut app, 'x');
        assert!(!app.should_exit());
        press(&mut app, 'q');
        assert!(app.should_exit());
    }

    #[test]
    fn test_draw_screen() {
        let mut app = new_app(3, None);
        click_edge(&mut app, Move::Horizontal { row: 0, col: 0 });

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buf = terminal.backend().buffer();
        let line = |y: u16| -> String { (0..60).map(|x| buf[(x, y)].symbol()).collect() };

        assert!(line(0).contains("Next turn: Player 2"));
        assert_eq!(buf[(BOARD_ORIGIN.x, BOARD_ORIGIN.y)].symbol(), "•");
        assert_eq!(buf[(BOARD_ORIGIN.x + 3, BOARD_ORIGIN.y)].symbol(), "─");
        // 3 dots: the board is 7 rows tall, followed by message and key legend
        assert!(line(BOARD_ORIGIN.y + 8).contains("Player 1 plays h(0,0)"));
        assert!(line(BOARD_ORIGIN.y + 9).contains("h Hint"));
    }
}
