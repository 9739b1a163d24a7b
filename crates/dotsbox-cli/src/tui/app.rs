use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// An application driven by [`Tui::run`].
pub trait App {
    /// Called once before the first event, typically to set the tick rate.
    fn init(&mut self, tui: &mut Tui);

    fn should_exit(&self) -> bool;

    /// Key presses, mouse input and resizes.
    fn handle_event(&mut self, tui: &mut Tui, event: &Event);

    fn draw(&self, frame: &mut Frame);

    /// Called on every tick.
    fn update(&mut self, tui: &mut Tui);
}
