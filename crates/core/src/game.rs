//! Game module - the complete game state and its per-tick cycle
//!
//! One `Game` value owns the grid, the single active piece, and the RNG.
//! Each gravity tick tries to advance the piece one row; when that fails the
//! piece locks, full rows clear, and a replacement spawns. A replacement
//! that collides immediately ends the game (topped out) instead of relocking
//! forever.

use blockfall_types::{Command, TICK_MS};

use crate::engine;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::SimpleRng;

/// Tunable game parameters; defaults match the reference behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Gravity tick period in milliseconds
    pub tick_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { tick_ms: TICK_MS }
    }
}

/// Complete game state: grid, active piece, RNG, terminal flag
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    /// The one active piece; None only after topping out
    active: Option<Piece>,
    rng: SimpleRng,
    config: GameConfig,
    topped_out: bool,
}

impl Game {
    /// Create a game with the default config and spawn the first piece
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    /// Create a game with an explicit config and spawn the first piece
    pub fn with_config(seed: u32, config: GameConfig) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = engine::spawn(&mut rng);

        Self {
            grid: Grid::new(),
            active: Some(active),
            rng,
            config,
            topped_out: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn topped_out(&self) -> bool {
        self.topped_out
    }

    pub fn tick_ms(&self) -> u32 {
        self.config.tick_ms
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// One gravity step: advance the active piece a row, or lock and respawn.
    ///
    /// Returns true if the piece moved down, false if it locked (or the game
    /// is already over). Also driven by the SoftDrop command.
    pub fn step(&mut self) -> bool {
        if self.topped_out {
            return false;
        }
        let Some(active) = self.active.take() else {
            return false;
        };

        match engine::try_shift(&self.grid, &active, 0, 1) {
            Some(candidate) => {
                self.active = Some(candidate);
                true
            }
            None => {
                self.lock_and_respawn(active);
                false
            }
        }
    }

    /// Lock a landed piece, clear rows, and bring in the next piece
    fn lock_and_respawn(&mut self, piece: Piece) {
        self.grid.lock(&piece);
        self.grid.clear_full_rows();

        let next = engine::spawn(&mut self.rng);
        if engine::collides(&self.grid, &next) {
            // No room at the top: terminal state, no further spawns.
            self.topped_out = true;
            self.active = None;
        } else {
            self.active = Some(next);
        }
    }

    /// Apply a player command.
    ///
    /// Horizontal moves and rotation are single attempts that leave the
    /// piece untouched on rejection; SoftDrop is a full gravity step and may
    /// lock the piece. Returns whether the active piece changed.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.topped_out {
            return false;
        }

        match command {
            Command::MoveLeft => self.shift_active(-1, 0),
            Command::MoveRight => self.shift_active(1, 0),
            Command::SoftDrop => self.step(),
            Command::Rotate => self.rotate_active(),
        }
    }

    fn shift_active(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        match engine::try_shift(&self.grid, active, dx, dy) {
            Some(candidate) => {
                self.active = Some(candidate);
                true
            }
            None => false,
        }
    }

    fn rotate_active(&mut self) -> bool {
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        match engine::try_rotate(&self.grid, active) {
            Some(candidate) => {
                self.active = Some(candidate);
                true
            }
            None => false,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
