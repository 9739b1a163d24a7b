use std::path::PathBuf;

use chrono::Utc;
use dotsbox_advisor::{difficulty::Difficulty, move_advisor::MoveAdvisor};
use dotsbox_engine::{DEFAULT_DOTS_PER_SIDE, GameResult, GameSession, Player};
use rand::Rng;

use crate::{
    schema::record::{GameRecord, SelfPlayRecord},
    util,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SelfPlayArg {
    /// Dots per side of the board
    #[arg(long, default_value_t = DEFAULT_DOTS_PER_SIDE)]
    dots: usize,
    /// Difficulty of Player 1
    #[arg(long, default_value_t = Difficulty::Hard)]
    p1: Difficulty,
    /// Difficulty of Player 2
    #[arg(long, default_value_t = Difficulty::Easy)]
    p2: Difficulty,
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: usize,
    /// Seed for the random choices of the easy and medium tiers
    #[arg(long)]
    seed: Option<u64>,
    /// JSON file overriding the heuristic weights of the hard tier
    #[arg(long)]
    weights: Option<PathBuf>,
    /// Save every game as JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Running tally over a batch of games.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Summary {
    player1_wins: usize,
    player2_wins: usize,
    ties: usize,
    player1_boxes: usize,
    player2_boxes: usize,
}

impl Summary {
    fn add(&mut self, record: &GameRecord) {
        match record.result {
            GameResult::Winner(Player::Player1) => self.player1_wins += 1,
            GameResult::Winner(Player::Player2) => self.player2_wins += 1,
            GameResult::Tie => self.ties += 1,
        }
        self.player1_boxes += record.final_score.player1;
        self.player2_boxes += record.final_score.player2;
    }

    fn games(&self) -> usize {
        self.player1_wins + self.player2_wins + self.ties
    }

    fn print(&self, p1: Difficulty, p2: Difficulty) {
        let games = self.games();
        #[expect(clippy::cast_precision_loss)]
        let rate = |n: usize| {
            if games == 0 {
                0.0
            } else {
                100.0 * n as f64 / games as f64
            }
        };
        eprintln!("Results after {games} games:");
        eprintln!(
            "  Player 1 ({p1}): {:5} wins ({:5.1}%), {} boxes",
            self.player1_wins,
            rate(self.player1_wins),
            self.player1_boxes
        );
        eprintln!(
            "  Player 2 ({p2}): {:5} wins ({:5.1}%), {} boxes",
            self.player2_wins,
            rate(self.player2_wins),
            self.player2_boxes
        );
        eprintln!("  Ties: {:5} ({:5.1}%)", self.ties, rate(self.ties));
    }
}

pub(crate) fn run(arg: &SelfPlayArg) -> anyhow::Result<()> {
    let SelfPlayArg {
        dots,
        p1,
        p2,
        games,
        seed,
        weights,
        output,
    } = arg;

    let weights = util::load_weights(weights.as_deref())?;
    let advisor = MoveAdvisor::with_weights(weights);
    let mut rng = util::make_rng(*seed);

    eprintln!("Playing {games} games of {p1} vs {p2} on {dots}x{dots} dots...");

    let mut summary = Summary::default();
    let mut records = Vec::with_capacity(*games);
    for game in 0..*games {
        let record = play_game(game, *dots, [*p1, *p2], &advisor, &mut rng)?;
        tracing::info!(
            game,
            score = %record.final_score,
            result = %record.result,
            moves = record.moves.len(),
            "game finished"
        );
        summary.add(&record);
        records.push(record);
    }
    summary.print(*p1, *p2);

    if let Some(path) = output {
        let record = SelfPlayRecord {
            recorded_at: Utc::now(),
            dots_per_side: *dots,
            seed: *seed,
            player1: *p1,
            player2: *p2,
            weights,
            games: records,
        };
        util::save_json(&record, path)?;
        eprintln!("Saved {} games to {}", record.games.len(), path.display());
    }

    Ok(())
}

/// Plays one game to the end, `players[0]` moving first.
fn play_game<R>(
    game: usize,
    dots: usize,
    players: [Difficulty; 2],
    advisor: &MoveAdvisor<'_>,
    rng: &mut R,
) -> anyhow::Result<GameRecord>
where
    R: Rng + ?Sized,
{
    let mut session = GameSession::new(dots)?;
    while !session.is_game_over() {
        let difficulty = match session.current_player() {
            Player::Player1 => players[0],
            Player::Player2 => players[1],
        };
        if difficulty.play_turn(&mut session, advisor, rng)?.is_none() {
            break;
        }
    }

    let final_score = session.score();
    Ok(GameRecord {
        game,
        final_score,
        result: final_score.result(),
        moves: session.history().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use dotsbox_advisor::move_evaluator::HeuristicWeights;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_play_game_fills_the_board() {
        let advisor = MoveAdvisor::default();
        let mut rng = Pcg32::seed_from_u64(3);
        for players in [
            [Difficulty::Easy, Difficulty::Hard],
            [Difficulty::Medium, Difficulty::Medium],
        ] {
            let record = play_game(0, 4, players, &advisor, &mut rng).unwrap();
            assert_eq!(record.moves.len(), 24);
            assert_eq!(record.final_score.total(), 9);
            assert_eq!(record.result, record.final_score.result());
            assert_eq!(record.moves[0].mover, Player::Player1);
        }
    }

    #[test]
    fn test_play_game_is_reproducible_with_seed() {
        let advisor = MoveAdvisor::default();
        let players = [Difficulty::Easy, Difficulty::Medium];
        let a = play_game(0, 5, players, &advisor, &mut Pcg32::seed_from_u64(9)).unwrap();
        let b = play_game(0, 5, players, &advisor, &mut Pcg32::seed_from_u64(9)).unwrap();
        assert_eq!(a.moves, b.moves);
        assert_eq!(a.final_score, b.final_score);
    }

    #[test]
    fn test_play_game_rejects_bad_size() {
        let advisor = MoveAdvisor::default();
        let mut rng = Pcg32::seed_from_u64(0);
        assert!(play_game(0, 1, [Difficulty::Easy; 2], &advisor, &mut rng).is_err());
    }

    #[test]
    fn test_summary_tally() {
        let advisor = MoveAdvisor::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut summary = Summary::default();
        for game in 0..5 {
            let record =
                play_game(game, 3, [Difficulty::Hard, Difficulty::Easy], &advisor, &mut rng)
                    .unwrap();
            summary.add(&record);
        }
        assert_eq!(summary.games(), 5);
        assert_eq!(summary.player1_boxes + summary.player2_boxes, 20);
    }

    #[test]
    fn test_record_serializes() {
        let advisor = MoveAdvisor::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let game = play_game(0, 2, [Difficulty::Easy; 2], &advisor, &mut rng).unwrap();
        let record = SelfPlayRecord {
            recorded_at: Utc::now(),
            dots_per_side: 2,
            seed: Some(5),
            player1: Difficulty::Easy,
            player2: Difficulty::Easy,
            weights: HeuristicWeights::default(),
            games: vec![game],
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["player1"], "easy");
        assert_eq!(json["games"][0]["moves"].as_array().unwrap().len(), 4);
        let back: SelfPlayRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back.games[0].final_score.total(), 1);
    }

    #[test]
    fn test_run_saves_records() {
        let path = std::env::temp_dir()
            .join(format!("dotsbox-self-play-{}", std::process::id()))
            .join("games.json");
        let arg = SelfPlayArg {
            dots: 3,
            p1: Difficulty::Medium,
            p2: Difficulty::Hard,
            games: 2,
            seed: Some(8),
            weights: None,
            output: Some(path.clone()),
        };
        run(&arg).unwrap();

        let record: SelfPlayRecord = util::read_json_file("self-play record", &path).unwrap();
        assert_eq!(record.games.len(), 2);
        assert_eq!(record.seed, Some(8));
        assert_eq!(record.player2, Difficulty::Hard);
        assert!(record.games.iter().all(|game| game.moves.len() == 12));

        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
