//! Isolation: a 5x5 board game engine.
//!
//! ## Usage
//!
//! - `isolation` - Play every opening at the default depth
//! - `isolation sweep` - Same, with a configurable depth
//! - `isolation duel` - Play a single match between chosen strategies
//!
//! Set `RUST_LOG=debug` for per-search summaries or `RUST_LOG=trace` for
//! the full search tree.

use anyhow::ensure;
use clap::{Parser, Subcommand, ValueEnum};

use isolation::board::{parse_square, Board, Player};
use isolation::constants::DEFAULT_DEPTH;
use isolation::game::{play_match, run_sweep};
use isolation::search::Negamax;
use isolation::strategy::{Mirror, Random, Strategy};

/// Isolation: negamax engine for the 5x5 Isolation game
#[derive(Parser)]
#[command(name = "isolation")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play every opening: One on the corner, Two on each other square
    Sweep {
        /// Search depth in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,
    },
    /// Play a single match between two chosen strategies
    Duel {
        /// Search depth in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,
        /// Strategy for player one
        #[arg(long, value_enum, default_value_t = StrategyKind::Negamax)]
        one: StrategyKind,
        /// Strategy for player two
        #[arg(long, value_enum, default_value_t = StrategyKind::Negamax)]
        two: StrategyKind,
        /// Player one's opening square, as "x,y"
        #[arg(long, value_parser = parse_square, default_value = "0,0")]
        first: (usize, usize),
        /// Player two's opening square, as "x,y"
        #[arg(long, value_parser = parse_square, default_value = "0,1")]
        second: (usize, usize),
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyKind {
    /// Full alpha-beta search
    Negamax,
    /// Reflect the opponent through the center
    Mirror,
    /// Uniformly random legal move
    Random,
}

impl StrategyKind {
    fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Negamax => Box::new(Negamax::new()),
            StrategyKind::Mirror => Box::new(Mirror),
            StrategyKind::Random => Box::new(Random::new()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Duel {
            depth,
            one,
            two,
            first,
            second,
        }) => run_duel(depth, one, two, first, second)?,
        Some(Commands::Sweep { depth }) => {
            ensure!(depth >= 1, "depth must be at least 1");
            sweep(depth);
        }
        None => sweep(DEFAULT_DEPTH),
    }
    Ok(())
}

fn sweep(depth: u32) {
    for ((i, j), outcome) in run_sweep(depth) {
        log::debug!(
            "opening ({i}, {j}): player {} lost after {} plies",
            outcome.loser,
            outcome.plies
        );
    }
}

fn run_duel(
    depth: u32,
    one: StrategyKind,
    two: StrategyKind,
    first: (usize, usize),
    second: (usize, usize),
) -> anyhow::Result<()> {
    ensure!(depth >= 1, "depth must be at least 1");
    ensure!(first != second, "the players cannot open on the same square");

    let mut board = Board::new();
    board.play(first.0, first.1, Player::One);
    board.play(second.0, second.1, Player::Two);

    let mut one = one.build();
    let mut two = two.build();
    log::debug!("duel: {} vs {}", one.name(), two.name());
    play_match(&mut board, Player::One, one.as_mut(), two.as_mut(), depth);
    Ok(())
}
