use alloc::vec::Vec;

use crate::*;

pub use shuffle::*;

mod shuffle;

/// Strategy for drawing mine positions.
pub trait MineGenerator {
    /// Picks `count` distinct indices from `0..len`.
    fn generate(&mut self, len: CellCount, count: CellCount) -> Vec<CellId>;
}
