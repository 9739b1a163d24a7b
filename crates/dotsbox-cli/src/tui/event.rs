use crossterm::event::Event as CrosstermEvent;

#[derive(Debug, Clone, derive_more::From)]
pub(super) enum TuiEvent {
    /// A tick interval elapsed.
    Tick,
    /// Something changed since the last frame was drawn.
    Render,
    Crossterm(CrosstermEvent),
}
