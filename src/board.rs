//! Board representation and move generation for 5x5 Isolation.
//!
//! This module provides the core game state, including:
//! - Board state representation using a 1D array with a border ring
//! - Placement and movement of both players' tokens
//! - Loss detection (a player loses when their token cannot move)
//! - Ray-based move enumeration in the eight queen directions
//!
//! Tokens leave a permanent trail: every cell a token has occupied stays
//! blocked for the rest of the game. Only the cell a player's stored
//! position points at counts as their token; the rest of the trail is
//! just blocked terrain.

use std::fmt;

use crate::constants::*;

/// A cell on the board, represented as an index into the 1D board array.
pub type Point = usize;

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index into per-player arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// The player's digit as used in board renders and match traces.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Player::One => '1',
            Player::Two => '2',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// State of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Out of the playable range (the border ring).
    Border,
    /// Free to move onto.
    Empty,
    /// Occupied by a player's token or trail.
    Taken(Player),
}

/// An Isolation board.
///
/// The playable 5x5 grid lives inside a 7x7 array whose outer ring is
/// permanently [`Cell::Border`], so ray walks in any of the eight
/// directions stop without bounds checks. Cells are public because the
/// search speculatively paints and unpaints them in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Cell states, including the border ring.
    pub cells: [Cell; BOARD_CELLS],
    /// Each player's current position, `UNPLACED` before the first placement.
    tokens: [Point; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board: border ring fixed, inner cells empty,
    /// neither player placed.
    pub fn new() -> Self {
        let mut cells = [Cell::Border; BOARD_CELLS];
        for x in 0..SIZE {
            for y in 0..SIZE {
                cells[to_pos(x, y)] = Cell::Empty;
            }
        }
        Board {
            cells,
            tokens: [UNPLACED; 2],
        }
    }

    /// True iff the playable cell at `(x, y)` is empty. Both coordinates
    /// must be in `0..SIZE`.
    pub fn is_legal(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < SIZE && y < SIZE, "coordinates out of range");
        self.cells[to_pos(x, y)] == Cell::Empty
    }

    /// Places or moves `player`'s token to `(x, y)`.
    ///
    /// The vacated cell keeps its mark (the trail). Callers must have
    /// validated the destination via [`Board::is_legal`] or move
    /// generation; playing on a non-empty cell is a precondition
    /// violation.
    pub fn play(&mut self, x: usize, y: usize, player: Player) {
        let pos = to_pos(x, y);
        debug_assert!(self.cells[pos] == Cell::Empty, "play on a non-empty cell");
        self.cells[pos] = Cell::Taken(player);
        self.tokens[player.index()] = pos;
    }

    /// The cell `player`'s token currently occupies, or `UNPLACED`.
    #[inline]
    pub fn position(&self, player: Player) -> Point {
        self.tokens[player.index()]
    }

    /// True iff the token at `pos` has no legal move.
    ///
    /// Only the eight immediate neighbors are probed: a queen move exists
    /// exactly when the first step of some ray lands on an empty cell, so
    /// this is equivalent to full ray enumeration. An unplaced token
    /// (`pos == UNPLACED`) has not lost.
    pub fn has_lost(&self, pos: Point) -> bool {
        if pos == UNPLACED {
            return false;
        }
        DIRECTIONS
            .iter()
            .all(|&d| self.cells[(pos as isize + d) as usize] != Cell::Empty)
    }

    /// Enumerates every legal destination for a token at `from`.
    ///
    /// Walks each of the eight rays in the fixed `DIRECTIONS` order,
    /// yielding cells until the first non-empty one. The search and the
    /// evaluator walk rays inline instead (they interleave mutation and
    /// visited checks with the walk); this enumeration serves strategies,
    /// rendering, and tests.
    pub fn moves_from(&self, from: Point) -> impl Iterator<Item = Point> + '_ {
        debug_assert!(from != UNPLACED, "move enumeration needs a placed token");
        let mut v = Vec::new();
        for &dir in &DIRECTIONS {
            let mut pos = from as isize;
            loop {
                pos += dir;
                if self.cells[pos as usize] != Cell::Empty {
                    break;
                }
                v.push(pos as usize);
            }
        }
        v.into_iter()
    }

    /// Renders the grid with every legal destination of `player` marked `*`.
    pub fn render_moves(&self, player: Player) -> String {
        let mut marked = [false; BOARD_CELLS];
        for pos in self.moves_from(self.position(player)) {
            marked[pos] = true;
        }
        self.render(&marked)
    }

    /// Renders the grid, marking cells flagged in `marked` with `*`.
    /// Empty cells are blank, the two current tokens print their player's
    /// digit, and trail cells print `X`.
    fn render(&self, marked: &[bool; BOARD_CELLS]) -> String {
        let mut out = String::new();
        for x in 0..SIZE {
            out.push_str("| ");
            for y in 0..SIZE {
                let pos = to_pos(x, y);
                if marked[pos] {
                    out.push_str("* | ");
                } else {
                    match self.cells[pos] {
                        Cell::Taken(p) if self.tokens[p.index()] == pos => {
                            out.push(p.as_char());
                            out.push_str(" | ");
                        }
                        Cell::Taken(_) => out.push_str("X | "),
                        _ => out.push_str("  | "),
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[false; BOARD_CELLS]))
    }
}

/// Parses a playable square given as `"x,y"` (both in `0..SIZE`).
///
/// Used by the command line to read opening squares.
pub fn parse_square(s: &str) -> Result<(usize, usize), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected 'x,y', got '{s}'"))?;
    let x: usize = x
        .trim()
        .parse()
        .map_err(|_| format!("bad row in '{s}'"))?;
    let y: usize = y
        .trim()
        .parse()
        .map_err(|_| format!("bad column in '{s}'"))?;
    if x >= SIZE || y >= SIZE {
        return Err(format!("square '{s}' is outside the {SIZE}x{SIZE} grid"));
    }
    Ok((x, y))
}

/// Formats a board index as the `"x, y"` pair used in match traces.
pub fn square_str(pos: Point) -> String {
    format!("{}, {}", pos_x(pos), pos_y(pos))
}
