use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// One cell of the board: identity, mine membership, player-visible state,
/// and the cached adjacency data the board computes for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coord: HexCoord,
    mine: bool,
    revealed: bool,
    flagged: bool,
    neighbor_mines: u8,
    neighbors: SmallVec<[CellId; 6]>,
}

impl Cell {
    pub(crate) fn new(coord: HexCoord) -> Self {
        Self {
            coord,
            mine: false,
            revealed: false,
            flagged: false,
            neighbor_mines: 0,
            neighbors: SmallVec::new(),
        }
    }

    pub const fn coord(&self) -> HexCoord {
        self.coord
    }

    pub const fn is_mine(&self) -> bool {
        self.mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Number of mines among the adjacent cells, as shown to the player once
    /// the cell is revealed. Stale between a mine placement change and the
    /// board's recount.
    pub const fn neighbor_mines(&self) -> u8 {
        self.neighbor_mines
    }

    /// Non-owning links to the adjacent cells, as indices into the board's
    /// storage order.
    pub fn neighbors(&self) -> &[CellId] {
        &self.neighbors
    }

    /// Center of the cell for a renderer drawing cells of the given diameter.
    pub fn pixel_position(&self, diameter: f64) -> (f64, f64) {
        self.coord.to_pixel(diameter)
    }

    pub(crate) fn set_mine(&mut self, mine: bool) {
        self.mine = mine;
    }

    pub(crate) fn mark_revealed(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn set_flagged(&mut self, flagged: bool) {
        self.flagged = flagged;
    }

    pub(crate) fn set_neighbor_mines(&mut self, count: u8) {
        self.neighbor_mines = count;
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: SmallVec<[CellId; 6]>) {
        self.neighbors = neighbors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_start_hidden_and_unflagged() {
        let cell = Cell::new(HexCoord::new(1, -1));
        assert!(!cell.is_mine());
        assert!(!cell.is_revealed());
        assert!(!cell.is_flagged());
        assert_eq!(cell.neighbor_mines(), 0);
        assert!(cell.neighbors().is_empty());
    }

    #[test]
    fn pixel_position_delegates_to_the_coordinate() {
        let cell = Cell::new(HexCoord::new(2, 1));
        assert_eq!(cell.pixel_position(8.0), cell.coord().to_pixel(8.0));
    }
}
