use std::{io, time::Duration};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;

use crate::tui::{App, event::TuiEvent, event_loop::EventLoop};

/// Full-screen terminal runtime with mouse capture.
#[derive(Default, Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Tui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tick rate in ticks per second.
    pub fn set_tick_rate(&mut self, rate: f64) {
        self.events.set_tick_interval(Some(Duration::from_secs_f64(1.0 / rate)));
    }

    /// Runs `app` until [`App::should_exit`] returns true, restoring the terminal afterwards.
    ///
    /// - tick: [`App::update`]
    /// - render: [`App::draw`]
    /// - terminal event: [`App::handle_event`]
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            execute!(io::stdout(), EnableMouseCapture)?;
            let result = self.event_loop(terminal, app);
            execute!(io::stdout(), DisableMouseCapture)?;
            result
        })
    }

    fn event_loop<A>(&mut self, terminal: &mut DefaultTerminal, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        while !app.should_exit() {
            match self.events.next()? {
                TuiEvent::Tick => app.update(self),
                TuiEvent::Render => {
                    terminal.draw(|f| app.draw(f))?;
                }
                TuiEvent::Crossterm(event) => app.handle_event(self, &event),
            }
        }
        Ok(())
    }
}
