use std::path::PathBuf;

use dotsbox_advisor::{difficulty::Difficulty, move_advisor::MoveAdvisor};
use dotsbox_engine::{DEFAULT_DOTS_PER_SIDE, GameSession};

use self::app::PlayApp;
use crate::{
    tui::Tui,
    util,
    view::{render_board, render_status},
};

mod app;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Dots per side of the board
    #[arg(long, default_value_t = DEFAULT_DOTS_PER_SIDE)]
    dots: usize,
    /// Let the computer play Player 2 at this difficulty (easy, medium, hard)
    #[arg(long)]
    vs: Option<Difficulty>,
    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,
    /// JSON file overriding the heuristic weights used by hints and the hard tier
    #[arg(long)]
    weights: Option<PathBuf>,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            dots: DEFAULT_DOTS_PER_SIDE,
            vs: None,
            seed: None,
            weights: None,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        dots,
        vs,
        seed,
        weights,
    } = arg;

    let weights = util::load_weights(weights.as_deref())?;
    let mut app = PlayApp::new(
        GameSession::new(*dots)?,
        *vs,
        MoveAdvisor::with_weights(weights),
        util::make_rng(*seed),
    );
    Tui::new().run(&mut app)?;

    let session = app.session();
    print!("{}", render_board(session.board()));
    println!("{}", render_status(session));
    Ok(())
}
