//! Position evaluation.
//!
//! The engine's single heuristic is a differential mobility metric: how
//! much of the board each player can still reach, weighted so that nearby
//! cells count more than distant ones. It is computed with a breadth-first
//! flood fill over ray moves from each player's position.

use crate::board::{Board, Cell, Player, Point};
use crate::constants::*;

/// A position evaluation capability.
///
/// Scores are from `player`'s point of view: positive favors `player`,
/// negative favors the opponent. The search relies on the zero-sum
/// property `score(p) == -score(p.opponent())`.
pub trait Scorer {
    fn score(&self, board: &Board, player: Player) -> i32;
}

/// Flood-fill mobility evaluation: `reach(player) - reach(opponent)`.
///
/// `reach` rewards positions with many reachable empty cells while
/// penalizing cells that are far away and therefore harder to use before
/// the opponent interferes. Both fills start at the players' stored
/// positions; cells painted speculatively by the search act as blockers
/// but do not move the fill origins.
#[derive(Copy, Clone, Debug, Default)]
pub struct DistanceScorer;

impl Scorer for DistanceScorer {
    fn score(&self, board: &Board, player: Player) -> i32 {
        reach(board, player) - reach(board, player.opponent())
    }
}

/// Breadth-first flood fill from `player`'s position over all empty cells
/// reachable by ray moves. Returns `cells * SCORE_PER_CELL - distances`,
/// where `cells` counts every discovered cell including the origin and
/// `distances` sums their flood-fill layer numbers.
///
/// A ray walk stops at the first non-empty cell and also at the first
/// already-discovered cell; anything past a discovered cell is picked up
/// when that cell is expanded in turn.
fn reach(board: &Board, player: Player) -> i32 {
    let origin = board.position(player);
    debug_assert!(origin != UNPLACED, "scoring requires both tokens placed");

    let mut steps = [-1i32; BOARD_CELLS];
    let mut queue: Vec<Point> = Vec::with_capacity(BOARD_CELLS);

    steps[origin] = 0;
    queue.push(origin);
    let mut head = 0;

    let mut total_cells = 0;
    let mut total_steps = 0;

    while head < queue.len() {
        let pos = queue[head];
        head += 1;
        total_cells += 1;
        total_steps += steps[pos];

        let step = steps[pos] + 1;
        for &dir in &DIRECTIONS {
            let mut p = pos as isize;
            loop {
                p += dir;
                let cell = p as usize;
                if board.cells[cell] != Cell::Empty {
                    break;
                }
                if steps[cell] != -1 {
                    break;
                }
                steps[cell] = step;
                queue.push(cell);
            }
        }
    }

    total_cells * SCORE_PER_CELL - total_steps
}
