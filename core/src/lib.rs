#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use coord::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod coord;
mod error;
mod generator;
mod session;
mod types;

/// Validated parameters of one game: hexagon radius and mine density.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    radius: Coord,
    difficulty: f64,
}

impl GameConfig {
    pub const fn new_unchecked(radius: Coord, difficulty: f64) -> Self {
        Self { radius, difficulty }
    }

    /// Rejects negative radii and densities outside the open interval (0, 1).
    pub fn new(radius: Coord, difficulty: f64) -> Result<Self> {
        if radius < 0 {
            return Err(GameError::InvalidRadius);
        }
        if !(difficulty > 0.0 && difficulty < 1.0) {
            return Err(GameError::InvalidDifficulty);
        }
        Ok(Self::new_unchecked(radius, difficulty))
    }

    pub const fn radius(&self) -> Coord {
        self.radius
    }

    pub const fn difficulty(&self) -> f64 {
        self.difficulty
    }

    /// Cell count of the hexagon: `3r^2 + 3r + 1`.
    pub const fn total_cells(&self) -> CellCount {
        let r = self.radius as i64;
        (3 * r * r + 3 * r + 1) as CellCount
    }

    /// Mines placed at game start: `floor(total_cells * difficulty)`.
    pub fn mine_count(&self) -> CellCount {
        (self.total_cells() as f64 * self.difficulty) as CellCount
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(5, 0.25)
    }
}

/// What a reveal call did to the board, for the presentation layer to redraw.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOutcome {
    pub status: GameStatus,
    /// Every cell the call marked revealed, cascade and exposed mines
    /// included.
    pub newly_revealed: Vec<HexCoord>,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game.
    pub fn has_update(&self) -> bool {
        !self.newly_revealed.is_empty()
    }
}
