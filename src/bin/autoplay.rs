//! Headless self-play driver.
//!
//! Plays a batch of games with a simple policy, logs each result and
//! optionally records the best score in a high-score log.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rust_2048::{Direction, Game, GameConfig, GameResult, GameRng, HighScoreLog};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// How the driver picks a move.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    /// Uniform over moves that change the board
    Random,
    /// Highest immediate merge score, first direction on ties
    Greedy,
}

#[derive(Parser, Debug)]
#[command(name = "autoplay", about = "Play 2048 games headlessly", version)]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = 10)]
    games: u32,

    /// Base seed; each game forks its own stream from it
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Move selection policy
    #[arg(short, long, value_enum, default_value_t = Policy::Random)]
    policy: Policy,

    /// Winning tile value
    #[arg(long, default_value_t = 2048)]
    win_tile: u32,

    /// Stop a game after this many moves
    #[arg(long, value_name = "N", default_value_t = 100_000)]
    max_moves: u32,

    /// Newline-delimited high-score file to update
    #[arg(long, value_name = "FILE")]
    scores: Option<PathBuf>,
}

#[derive(Debug, Default)]
struct Summary {
    games: u32,
    wins: u32,
    best_score: u64,
    total_score: u64,
    best_tile: u32,
}

fn choose_move(game: &Game, policy: Policy, rng: &mut GameRng) -> Option<Direction> {
    let legal = game.legal_moves();
    match policy {
        Policy::Random => rng.choose(&legal).copied(),
        Policy::Greedy => {
            let mut best: Option<(Direction, u64)> = None;
            for &direction in &legal {
                let gained = game.preview(direction).score;
                if best.map_or(true, |(_, score)| gained > score) {
                    best = Some((direction, gained));
                }
            }
            best.map(|(direction, _)| direction)
        }
    }
}

fn play_one(config: GameConfig, seed: u64, args: &Args, policy_rng: &mut GameRng) -> Game {
    let mut game = Game::with_config(config, seed);
    let mut moves = 0;

    while moves < args.max_moves {
        let Some(direction) = choose_move(&game, args.policy, policy_rng) else {
            break;
        };
        game.apply_move(direction);
        moves += 1;
    }

    if moves >= args.max_moves && game.result().is_none() {
        warn!(seed, moves, "move limit reached before the game ended");
    }
    game
}

fn game_config(args: &Args) -> Result<GameConfig> {
    GameConfig::new()
        .try_with_win_tile(args.win_tile)
        .context("invalid --win-tile")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = game_config(&args)?;

    let log = args
        .scores
        .as_ref()
        .map(HighScoreLog::open)
        .transpose()
        .context("failed to open score log")?;

    info!(games = args.games, seed = args.seed, policy = ?args.policy, "starting autoplay");

    let mut seeds = GameRng::new(args.seed);
    let mut policy_rng = seeds.fork();
    let mut summary = Summary::default();

    for index in 0..args.games {
        let game_seed = seeds.fork().seed();
        let game = play_one(config.clone(), game_seed, &args, &mut policy_rng);

        let max_tile = game.board().max_tile().value();
        let result = match game.result() {
            Some(GameResult::Won) => "won",
            Some(GameResult::Lost) => "lost",
            None => "unfinished",
        };
        info!(
            game = index + 1,
            seed = game_seed,
            score = game.score(),
            moves = game.state().moves,
            max_tile,
            result,
            "game finished"
        );

        summary.games += 1;
        summary.wins += u32::from(game.is_won());
        summary.total_score += game.score();
        summary.best_score = summary.best_score.max(game.score());
        summary.best_tile = summary.best_tile.max(max_tile);
    }

    if let Some(log) = &log {
        match log.record(summary.best_score) {
            Ok(update) => info!(
                best = update.best(summary.best_score),
                new_best = update.is_new_best,
                path = %log.path().display(),
                "score log updated"
            ),
            Err(err) => warn!(error = %err, "could not update score log"),
        }
    }

    let average = if summary.games == 0 {
        0.0
    } else {
        summary.total_score as f64 / f64::from(summary.games)
    };
    println!(
        "games: {}  wins: {}  best score: {}  average score: {:.1}  best tile: {}",
        summary.games, summary.wins, summary.best_score, average, summary.best_tile
    );

    Ok(())
}
