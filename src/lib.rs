//! Isolation: a 5x5 board game engine.
//!
//! Two tokens move like chess queens over a 5x5 grid, never jumping
//! occupied cells and leaving a permanent trail behind them; the first
//! player without a legal move loses. The engine picks moves with a
//! bounded-depth negamax search over a flood-fill mobility heuristic.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, direction deltas, search parameters
//! - [`board`] - Game state, move generation, loss detection, rendering
//! - [`eval`] - Position evaluation (flood-fill mobility metric)
//! - [`search`] - Negamax with alpha-beta pruning
//! - [`strategy`] - Move-selection strategies (search, mirror, random)
//! - [`game`] - Match driver and the all-openings sweep
//!
//! ## Example
//!
//! ```
//! use isolation::board::{Board, Player};
//! use isolation::constants::UNPLACED;
//! use isolation::search::Negamax;
//! use isolation::strategy::Strategy;
//!
//! // Open the game
//! let mut board = Board::new();
//! board.play(0, 0, Player::One);
//! board.play(0, 1, Player::Two);
//!
//! // Ask the engine for Player One's best reply
//! let mut engine = Negamax::new();
//! let dest = engine.get_move(&mut board, Player::One, 5);
//! assert_ne!(dest, UNPLACED);
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod game;
pub mod search;
pub mod strategy;
