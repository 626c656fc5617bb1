//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the whole game-state engine: grid model, piece
//! transforms, and the per-tick lock/clear/spawn cycle. It has **zero
//! dependencies** on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercisable without a terminal
//! - **Portable**: Any render adapter can consume it
//! - **Fast**: Zero-allocation tick path (flat grid, `ArrayVec` shapes)
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 occupancy matrix with collision queries and line clears
//! - [`piece`]: ragged shape matrices and the clockwise rotation transform
//! - [`engine`]: pure candidate-producing move/rotate/spawn operations
//! - [`game`]: the owning game state and gravity cycle
//! - [`rng`]: seedable LCG behind piece selection
//!
//! # Game Rules
//!
//! This is a deliberately small rule set, close to the earliest
//! falling-block games rather than modern guideline Tetris:
//!
//! - **Uniform randomizer**: each spawn picks one of 7 shapes uniformly
//!   (no bag); the spawn column is uniform over all but the last column
//! - **Matrix rotation**: one clockwise quarter turn; if it collides, a
//!   half turn is tried before rejecting
//! - **Immediate lock**: a piece locks the moment gravity fails (no lock
//!   delay, hold, ghost, or scoring)
//! - **Topped out**: a blocked respawn ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::Game;
//! use blockfall_types::Command;
//!
//! let mut game = Game::new(12345);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//!
//! // Drive gravity until the first piece locks.
//! while game.step() {}
//! assert!(game.grid().filled_count() > 0);
//! ```

pub mod engine;
pub mod game;
pub mod grid;
pub mod piece;
pub mod rng;

pub use game::{Game, GameConfig};
pub use grid::Grid;
pub use piece::{Piece, Shape};
pub use rng::SimpleRng;
