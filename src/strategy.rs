//! Move-selection strategies.
//!
//! A strategy picks a destination cell for the player to move. The search
//! engine implements this trait too ([`crate::search::Negamax`]), so a
//! match driver can pair any two strategies against each other.

use crate::board::{Board, Player, Point};
use crate::constants::*;

/// A move-selection capability: choose a destination for `player`'s token.
///
/// `max_depth` is a search budget in plies; non-searching strategies
/// ignore it. Implementations may return a destination without checking
/// its legality (the driver decides what an illegal choice means) and
/// return `UNPLACED` when they cannot produce a move at all.
pub trait Strategy {
    fn get_move(&mut self, board: &mut Board, player: Player, max_depth: u32) -> Point;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Reflects the opponent's position through the center of the grid.
///
/// A deliberately naive baseline: no search, no legality check. The
/// reflected square can be occupied, in which case the returned move is
/// illegal and the driver treats it as a forfeit.
pub struct Mirror;

impl Strategy for Mirror {
    fn get_move(&mut self, board: &mut Board, player: Player, _max_depth: u32) -> Point {
        let opp = board.position(player.opponent());
        debug_assert!(opp != UNPLACED, "mirroring requires the opponent placed");
        let x = SIZE - 1 - pos_x(opp);
        let y = SIZE - 1 - pos_y(opp);
        to_pos(x, y)
    }

    fn name(&self) -> &str {
        "mirror"
    }
}

/// Picks uniformly among the legal destinations.
pub struct Random {
    rng: fastrand::Rng,
}

impl Random {
    pub fn new() -> Self {
        Random {
            rng: fastrand::Rng::new(),
        }
    }

    /// Seeded variant for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Random {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Random {
    fn get_move(&mut self, board: &mut Board, player: Player, _max_depth: u32) -> Point {
        let moves: Vec<Point> = board.moves_from(board.position(player)).collect();
        if moves.is_empty() {
            return UNPLACED;
        }
        moves[self.rng.usize(..moves.len())]
    }

    fn name(&self) -> &str {
        "random"
    }
}
