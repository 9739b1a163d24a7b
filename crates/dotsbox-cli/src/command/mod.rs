use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{play::PlayArg, self_play::SelfPlayArg};

mod play;
mod self_play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play on the terminal, against a friend or the computer
    Play(#[clap(flatten)] PlayArg),
    /// Pit two computer players against each other
    SelfPlay(#[clap(flatten)] SelfPlayArg),
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(&args.log_level);

    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::SelfPlay(arg) => self_play::run(&arg)?,
    }
    Ok(())
}
