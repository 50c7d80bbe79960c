//! Constants for board geometry, direction deltas, and search parameters.
//!
//! The board uses a 1D array representation with a border ring for boundary
//! detection: a 5x5 playable grid lives inside a 7x7 array, so every ray
//! walk terminates on a border cell without explicit bounds checks.

// =============================================================================
// Board Geometry
// =============================================================================

/// Playable grid size (NxN). The game is defined on a 5x5 grid.
pub const SIZE: usize = 5;

/// Board width including the border ring on both sides.
pub const W: usize = SIZE + 2;

/// Total board array size including the border ring.
pub const BOARD_CELLS: usize = W * W;

// =============================================================================
// Special Position Values
// =============================================================================

/// Marker for a token that has not been placed yet (index 0 is border,
/// so safe to use).
pub const UNPLACED: usize = 0;

// =============================================================================
// Direction Offsets
// =============================================================================

/// Offsets to neighboring cells in the 1D board array.
///
/// The enumeration order is significant: move generation visits rays in
/// this order, so it decides which of several equally scored moves the
/// search ends up playing.
pub const DIRECTIONS: [isize; 8] = [
    1,              // East (right one column)
    -1,             // West (left one column)
    W as isize,     // South (down one row)
    -(W as isize),  // North (up one row)
    W as isize - 1, // SW (diagonal)
    1 - W as isize, // NE (diagonal)
    W as isize + 1, // SE (diagonal)
    -(W as isize) - 1, // NW (diagonal)
];

// =============================================================================
// Search Parameters
// =============================================================================

/// Value of a lost position, seen from the player to move. The actual
/// terminal score is `LOSS_VALUE + depth`, so losses further from the root
/// score slightly higher and the search prefers to delay them.
pub const LOSS_VALUE: i32 = -1000;

/// Sentinel beyond any reachable score, used for the initial search window.
pub const INF: i32 = 1_000_000;

/// Default search depth in plies. Deep enough to play the 5x5 game out to
/// the end from any opening.
pub const DEFAULT_DEPTH: u32 = 25;

// =============================================================================
// Evaluation Parameters
// =============================================================================

/// Weight of one reachable cell in the mobility score. Each discovered cell
/// contributes this much minus its flood-fill distance, so nearby cells
/// count more than distant ones.
pub const SCORE_PER_CELL: i32 = 16;

// =============================================================================
// Coordinate Translation
// =============================================================================

/// Translates playable grid coordinates (both in `0..SIZE`) to a board
/// array index.
#[inline]
pub const fn to_pos(x: usize, y: usize) -> usize {
    x * W + y + W + 1
}

/// Row of a board index, in playable grid coordinates.
#[inline]
pub const fn pos_x(pos: usize) -> usize {
    (pos - W - 1) / W
}

/// Column of a board index, in playable grid coordinates.
#[inline]
pub const fn pos_y(pos: usize) -> usize {
    (pos - W - 1) % W
}
