//! Bounded-depth negamax search with alpha-beta pruning.
//!
//! The search explores moves for the active player, recurses with the
//! roles swapped and the window negated, and prunes siblings once the
//! window closes. Candidate moves are played speculatively on the shared
//! board and always unpainted again before the call returns, so the board
//! comes back from [`Negamax::get_move`] exactly as it went in.

use crate::board::{square_str, Board, Cell, Player, Point};
use crate::constants::*;
use crate::eval::{DistanceScorer, Scorer};
use crate::strategy::Strategy;

/// Negamax engine, generic over the evaluation heuristic.
pub struct Negamax<S = DistanceScorer> {
    scorer: S,
    max_depth: u32,
    leaves: u64,
}

impl Negamax<DistanceScorer> {
    /// Engine with the default mobility evaluation.
    pub fn new() -> Self {
        Negamax::with_scorer(DistanceScorer)
    }
}

impl Default for Negamax<DistanceScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scorer> Negamax<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Negamax {
            scorer,
            max_depth: 0,
            leaves: 0,
        }
    }

    /// Number of horizon evaluations in the most recent search.
    pub fn leaves(&self) -> u64 {
        self.leaves
    }

    /// Recursive negamax over the window `(alpha, beta)`.
    ///
    /// `active` moves at this node, `passive` is the opponent's position,
    /// `player` owns the token at `active`, `depth` counts plies from the
    /// root (the root call starts at 1). The best root destination is
    /// written to `best`; deeper calls only need the value. Fail-soft: a
    /// cutoff returns the running best score, which may exceed `beta`.
    #[allow(clippy::too_many_arguments)]
    fn negamax(
        &mut self,
        board: &mut Board,
        active: Point,
        passive: Point,
        player: Player,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        best: &mut Point,
    ) -> i32 {
        if board.has_lost(active) {
            let value = LOSS_VALUE + depth as i32;
            trace(depth, "LOST", value);
            return value;
        }

        if depth == self.max_depth {
            self.leaves += 1;
            let score = self.scorer.score(board, player);
            trace(depth, "SCORE", score);
            return score;
        }

        let mut best_score = -INF;
        let opponent = player.opponent();

        for &dir in &DIRECTIONS {
            let mut pos = active as isize;
            loop {
                pos += dir;
                let dest = pos as usize;
                if board.cells[dest] != Cell::Empty {
                    break;
                }
                if log::log_enabled!(log::Level::Trace) {
                    trace_move(depth, dest);
                }
                board.cells[dest] = Cell::Taken(player);
                let score =
                    -self.negamax(board, passive, dest, opponent, depth + 1, -beta, -alpha, best);
                board.cells[dest] = Cell::Empty;
                if score > best_score {
                    best_score = score;
                    if depth == 1 {
                        *best = dest;
                    }
                }
                if score > alpha {
                    alpha = score;
                }
                if alpha >= beta {
                    trace(depth, "BEST", best_score);
                    return best_score;
                }
            }
        }
        trace(depth, "BEST", best_score);
        best_score
    }
}

impl<S: Scorer> Strategy for Negamax<S> {
    /// Searches `max_depth` plies and returns the best destination for
    /// `player`, or `UNPLACED` if the root position is already lost.
    /// Both tokens must be placed and `max_depth` must be at least 1.
    fn get_move(&mut self, board: &mut Board, player: Player, max_depth: u32) -> Point {
        debug_assert!(max_depth >= 1, "search needs a depth budget");
        let active = board.position(player);
        let passive = board.position(player.opponent());
        debug_assert!(
            active != UNPLACED && passive != UNPLACED,
            "search requires both tokens placed"
        );

        self.max_depth = max_depth;
        self.leaves = 0;
        let mut best = UNPLACED;
        let value = self.negamax(board, active, passive, player, 1, -INF, INF, &mut best);
        if best != UNPLACED {
            log::debug!(
                "player {player}: move {} value {value} after {} leaf evaluations",
                square_str(best),
                self.leaves
            );
        } else {
            log::debug!("player {player}: no move, value {value}");
        }
        best
    }

    fn name(&self) -> &str {
        "negamax"
    }
}

fn trace(depth: u32, action: &str, value: i32) {
    log::trace!(
        "{:width$}{depth} {action} {value}",
        "",
        width = depth as usize * 2
    );
}

fn trace_move(depth: u32, dest: Point) {
    log::trace!(
        "{:width$}{depth} MOVE {}",
        "",
        square_str(dest),
        width = depth as usize * 2
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, squares: &[(usize, usize)], player: Player) {
        for &(x, y) in squares {
            board.play(x, y, player);
        }
    }

    /// Exhaustive negamax without pruning, used as the reference value.
    fn plain_negamax(
        board: &mut Board,
        active: Point,
        passive: Point,
        player: Player,
        depth: u32,
        max_depth: u32,
    ) -> i32 {
        if board.has_lost(active) {
            return LOSS_VALUE + depth as i32;
        }
        if depth == max_depth {
            return DistanceScorer.score(board, player);
        }
        let mut best = -INF;
        let moves: Vec<Point> = board.moves_from(active).collect();
        for dest in moves {
            board.cells[dest] = Cell::Taken(player);
            let score = -plain_negamax(
                board,
                passive,
                dest,
                player.opponent(),
                depth + 1,
                max_depth,
            );
            board.cells[dest] = Cell::Empty;
            if score > best {
                best = score;
            }
        }
        best
    }

    fn pruned_value(board: &mut Board, player: Player, max_depth: u32) -> i32 {
        let mut engine = Negamax::new();
        engine.max_depth = max_depth;
        let active = board.position(player);
        let passive = board.position(player.opponent());
        let mut best = UNPLACED;
        engine.negamax(board, active, passive, player, 1, -INF, INF, &mut best)
    }

    // =====================================================================
    // Pruning correctness
    // =====================================================================

    #[test]
    fn test_pruned_value_matches_exhaustive_search_opening() {
        let mut board = Board::new();
        board.play(0, 0, Player::One);
        board.play(0, 1, Player::Two);
        for depth in 2..=4 {
            let plain = plain_negamax(
                &mut board.clone(),
                board.position(Player::One),
                board.position(Player::Two),
                Player::One,
                1,
                depth,
            );
            let pruned = pruned_value(&mut board.clone(), Player::One, depth);
            assert_eq!(pruned, plain, "pruning changed the value at depth {depth}");
        }
    }

    #[test]
    fn test_pruned_value_matches_exhaustive_search_midgame() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (1, 1), (2, 2)], Player::One);
        place(&mut board, &[(4, 4), (3, 3), (3, 1)], Player::Two);
        for player in [Player::One, Player::Two] {
            let plain = plain_negamax(
                &mut board.clone(),
                board.position(player),
                board.position(player.opponent()),
                player,
                1,
                5,
            );
            let pruned = pruned_value(&mut board.clone(), player, 5);
            assert_eq!(pruned, plain, "pruning changed the value for {player}");
        }
    }

    // =====================================================================
    // Terminal positions
    // =====================================================================

    #[test]
    fn test_lost_root_scores_loss_plus_depth() {
        let mut board = Board::new();
        board.play(0, 0, Player::One);
        place(&mut board, &[(0, 1), (1, 1), (1, 0)], Player::Two);
        let value = pruned_value(&mut board, Player::One, 10);
        assert_eq!(value, LOSS_VALUE + 1, "root is depth 1");
    }

    #[test]
    fn test_get_move_on_lost_position_returns_unplaced() {
        let mut board = Board::new();
        board.play(0, 0, Player::One);
        place(&mut board, &[(0, 1), (1, 1), (1, 0)], Player::Two);
        let mut engine = Negamax::new();
        assert_eq!(engine.get_move(&mut board, Player::One, 10), UNPLACED);
    }

    #[test]
    fn test_finds_immediately_winning_move() {
        // Two's token at (0,4) has a single empty neighbor, (1,3), which
        // One can occupy along the up-right diagonal from (3,1).
        let mut board = Board::new();
        place(&mut board, &[(0, 3), (1, 4), (0, 4)], Player::Two);
        board.play(3, 1, Player::One);
        let mut engine = Negamax::new();
        let dest = engine.get_move(&mut board, Player::One, 5);
        assert_eq!(dest, to_pos(1, 3), "sealing the last exit wins on the spot");
    }

    #[test]
    fn test_prefers_immediate_win_over_deep_win() {
        // The immediate win scores LOSS_VALUE + 2 for the opponent; any
        // longer forced win is at least two plies deeper and scores less
        // after negation, so the value pins the win distance.
        let mut board = Board::new();
        place(&mut board, &[(0, 3), (1, 4), (0, 4)], Player::Two);
        board.play(3, 1, Player::One);
        let value = pruned_value(&mut board, Player::One, 5);
        assert_eq!(value, -(LOSS_VALUE + 2));
    }

    // =====================================================================
    // Board restoration
    // =====================================================================

    #[test]
    fn test_board_is_restored_after_search() {
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (1, 1)], Player::One);
        place(&mut board, &[(4, 4), (3, 3)], Player::Two);
        let before = board.clone();
        let mut engine = Negamax::new();
        engine.get_move(&mut board, Player::One, 6);
        assert_eq!(board, before, "speculative moves must all be unpainted");
    }

    #[test]
    fn test_board_is_restored_even_with_cutoffs() {
        // A cramped position where most branches end in losses and the
        // window closes early at several depths.
        let mut board = Board::new();
        place(&mut board, &[(0, 0), (0, 1), (1, 1)], Player::One);
        place(&mut board, &[(4, 4), (4, 3), (3, 3)], Player::Two);
        place(&mut board, &[(2, 0), (2, 1), (2, 3), (2, 4)], Player::One);
        let before = board.clone();
        let mut engine = Negamax::new();
        engine.get_move(&mut board, Player::Two, 8);
        assert_eq!(board, before);
    }

    // =====================================================================
    // Leaf counting and determinism
    // =====================================================================

    #[test]
    fn test_leaf_count_at_depth_two() {
        // At depth 2 every root move is scored and the open window never
        // closes, so the leaf count equals the number of legal moves.
        let mut board = Board::new();
        board.play(2, 2, Player::One);
        board.play(0, 0, Player::Two);
        let mut engine = Negamax::new();
        engine.get_move(&mut board, Player::One, 2);
        let legal = board.moves_from(board.position(Player::One)).count() as u64;
        assert_eq!(engine.leaves(), legal);
    }

    #[test]
    fn test_leaf_count_resets_between_searches() {
        let mut board = Board::new();
        board.play(2, 2, Player::One);
        board.play(0, 0, Player::Two);
        let mut engine = Negamax::new();
        engine.get_move(&mut board, Player::One, 2);
        let first = engine.leaves();
        engine.get_move(&mut board, Player::One, 2);
        assert_eq!(engine.leaves(), first, "counter restarts on each search");
    }

    #[test]
    fn test_search_is_deterministic() {
        let mut board = Board::new();
        board.play(0, 0, Player::One);
        board.play(2, 3, Player::Two);
        let mut a = Negamax::new();
        let mut b = Negamax::new();
        assert_eq!(
            a.get_move(&mut board.clone(), Player::One, 6),
            b.get_move(&mut board.clone(), Player::One, 6)
        );
    }

    // =====================================================================
    // Evaluator substitution
    // =====================================================================

    /// Counts empty neighbors of the stored position only.
    struct NeighborScorer;

    impl Scorer for NeighborScorer {
        fn score(&self, board: &Board, player: Player) -> i32 {
            let count = |p: Player| {
                let pos = board.position(p);
                DIRECTIONS
                    .iter()
                    .filter(|&&d| board.cells[(pos as isize + d) as usize] == Cell::Empty)
                    .count() as i32
            };
            count(player) - count(player.opponent())
        }
    }

    #[test]
    fn test_search_accepts_alternative_scorer() {
        let mut board = Board::new();
        board.play(0, 0, Player::One);
        board.play(4, 4, Player::Two);
        let mut engine = Negamax::with_scorer(NeighborScorer);
        let dest = engine.get_move(&mut board, Player::One, 2);
        let legal: Vec<Point> = board.moves_from(board.position(Player::One)).collect();
        assert!(legal.contains(&dest));
    }
}
