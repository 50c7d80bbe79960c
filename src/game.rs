//! Match driver: alternates two strategies on one board until a player
//! is isolated, printing the move trace and board after every ply.

use crate::board::{Board, Player};
use crate::constants::*;
use crate::search::Negamax;
use crate::strategy::Strategy;

/// How a finished match ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    pub loser: Player,
    /// Moves actually applied to the board; placements are not counted.
    pub plies: u32,
}

/// Plays one match to the end, `first` moving first. Player One is served
/// by `one`, Player Two by `two`; both tokens must already be placed.
///
/// Each applied move prints a `Moved` line followed by the board. A player
/// loses when isolated, or when their strategy picks an illegal
/// destination (a forfeit; the mirror baseline can do this).
pub fn play_match(
    board: &mut Board,
    first: Player,
    one: &mut dyn Strategy,
    two: &mut dyn Strategy,
    max_depth: u32,
) -> MatchOutcome {
    let mut player = first;
    let mut plies = 0;
    loop {
        if board.has_lost(board.position(player)) {
            println!("Player:{player} Lost.");
            return MatchOutcome { loser: player, plies };
        }

        let strategy: &mut dyn Strategy = match player {
            Player::One => &mut *one,
            Player::Two => &mut *two,
        };
        let dest = strategy.get_move(board, player, max_depth);
        let legal = dest != UNPLACED && board.is_legal(pos_x(dest), pos_y(dest));
        if !legal {
            println!("Player:{player} Lost.");
            return MatchOutcome { loser: player, plies };
        }
        let (x, y) = (pos_x(dest), pos_y(dest));

        println!("Moved {player} M: {x}, {y}");
        board.play(x, y, player);
        println!("{board}");
        plies += 1;
        player = player.opponent();
    }
}

/// Plays every opening: Player One starts on the corner (0,0) and Player
/// Two on each of the 24 other squares, with a full negamax-vs-negamax
/// match per opening. Returns each opening square with its outcome.
pub fn run_sweep(depth: u32) -> Vec<((usize, usize), MatchOutcome)> {
    let mut outcomes = Vec::new();
    for i in 0..SIZE {
        for j in 0..SIZE {
            if i == 0 && j == 0 {
                continue;
            }
            let mut board = Board::new();
            board.play(0, 0, Player::One);
            board.play(i, j, Player::Two);
            let mut one = Negamax::new();
            let mut two = Negamax::new();
            let outcome = play_match(&mut board, Player::One, &mut one, &mut two, depth);
            outcomes.push(((i, j), outcome));
        }
    }
    outcomes
}
