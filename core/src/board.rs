use alloc::collections::VecDeque;
use alloc::vec::Vec;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::*;

/// What revealing a single target did, before the session folds it into a
/// status transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum RevealKind {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

/// Owns every cell of one hexagonal board and executes all state changes on
/// them. Sessions drive it; it knows nothing about turn order or status.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    radius: Coord,
    cells: Vec<Cell>,
    index: HashMap<HexCoord, CellId>,
    mine_ids: Vec<CellId>,
    // safe cells only; mines exposed after a loss are not counted
    revealed_count: CellCount,
    flagged_count: CellCount,
    triggered_mine: Option<HexCoord>,
}

impl Board {
    /// Builds the hexagon of the given radius with no mines placed yet.
    ///
    /// Candidates run over the full square `[-radius, radius]^2`; a candidate
    /// is excluded when `h * k > 0` and `|h + k| > radius`, which carves the
    /// two corners off the square and leaves the hexagon of
    /// `3r^2 + 3r + 1` cells. Insertion order is the scan order, h ascending
    /// then k ascending.
    pub(crate) fn bare(radius: Coord) -> Self {
        debug_assert!(radius >= 0);
        log::debug!("Generating hexagonal grid with radius {}", radius);

        let mut cells = Vec::new();
        let mut index = HashMap::new();
        for h in -radius..=radius {
            for k in -radius..=radius {
                if i32::from(h) * i32::from(k) > 0
                    && (i32::from(h) + i32::from(k)).abs() > i32::from(radius)
                {
                    log::trace!("Skipped cell at ({}, {})", h, k);
                    continue;
                }
                let coord = HexCoord::new(h, k);
                index.insert(coord, cells.len());
                cells.push(Cell::new(coord));
            }
        }

        let mut board = Self {
            radius,
            cells,
            index,
            mine_ids: Vec::new(),
            revealed_count: 0,
            flagged_count: 0,
            triggered_mine: None,
        };
        board.assess_neighbors();
        board
    }

    /// Builds a board with an explicit mine layout. Duplicate coordinates
    /// collapse into one mine.
    pub fn with_mines(radius: Coord, mine_coords: &[HexCoord]) -> Result<Self> {
        if radius < 0 {
            return Err(GameError::InvalidRadius);
        }
        let mut board = Self::bare(radius);
        for &coord in mine_coords {
            let id = board.require_cell(coord)?;
            if !board.cells[id].is_mine() {
                board.cells[id].set_mine(true);
                board.mine_ids.push(id);
            }
        }
        board.recompute_neighbor_counts();
        Ok(board)
    }

    pub const fn radius(&self) -> Coord {
        self.radius
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_ids.len()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    pub const fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub const fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub const fn triggered_mine(&self) -> Option<HexCoord> {
        self.triggered_mine
    }

    /// Cells in insertion order; `Cell::neighbors` indices point into this
    /// slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell_at(&self, coord: HexCoord) -> Option<&Cell> {
        self.index.get(&coord).map(|&id| &self.cells[id])
    }

    pub fn contains(&self, coord: HexCoord) -> bool {
        self.index.contains_key(&coord)
    }

    pub(crate) fn require_cell(&self, coord: HexCoord) -> Result<CellId> {
        self.index.get(&coord).copied().ok_or(GameError::InvalidCoords)
    }

    pub(crate) fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id]
    }

    /// Draws `count` mines from `generator` and refreshes the cached counts.
    pub(crate) fn place_mines(&mut self, count: CellCount, generator: &mut dyn MineGenerator) {
        self.mine_ids = generator.generate(self.cells.len(), count);
        for &id in &self.mine_ids {
            self.cells[id].set_mine(true);
        }
        self.recompute_neighbor_counts();
        log::debug!(
            "Placed {} mines across {} cells",
            self.mine_ids.len(),
            self.cells.len()
        );
    }

    /// Moves every mine out of the target cell and its neighborhood,
    /// preserving the total mine count, so the target ends up with no
    /// adjacent mines. Fails before touching anything when the rest of the
    /// board cannot absorb the displaced mines.
    pub(crate) fn relocate_mines(
        &mut self,
        target: CellId,
        generator: &mut dyn MineGenerator,
    ) -> Result<CellCount> {
        let mut protected: SmallVec<[CellId; 7]> =
            SmallVec::from_slice(self.cells[target].neighbors());
        protected.push(target);

        let displaced = protected
            .iter()
            .filter(|&&id| self.cells[id].is_mine())
            .count();
        if displaced == 0 {
            return Ok(0);
        }

        let candidates: Vec<CellId> = (0..self.cells.len())
            .filter(|id| !protected.contains(id) && !self.cells[*id].is_mine())
            .collect();
        if candidates.len() < displaced {
            return Err(GameError::NoRelocationSpace);
        }

        for &id in &protected {
            self.cells[id].set_mine(false);
        }
        for pick in generator.generate(candidates.len(), displaced) {
            self.cells[candidates[pick]].set_mine(true);
        }
        self.mine_ids = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_mine())
            .map(|(id, _)| id)
            .collect();
        self.recompute_neighbor_counts();
        log::debug!(
            "Relocated {} mines away from {:?}",
            displaced,
            self.cells[target].coord()
        );
        Ok(displaced)
    }

    /// Toggles the flag of an unrevealed cell, returning the new flagged
    /// state. Revealed cells are left alone.
    pub(crate) fn toggle_flag(&mut self, id: CellId) -> bool {
        let cell = &mut self.cells[id];
        if cell.is_revealed() {
            return false;
        }
        let flagged = !cell.is_flagged();
        cell.set_flagged(flagged);
        if flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        flagged
    }

    /// Reveals the cell, flooding through zero-count neighborhoods, and
    /// reports every coordinate that became revealed.
    pub(crate) fn reveal(&mut self, id: CellId) -> (RevealKind, Vec<HexCoord>) {
        let mut newly_revealed = Vec::new();

        if self.cells[id].is_flagged() || self.cells[id].is_revealed() {
            return (RevealKind::NoChange, newly_revealed);
        }

        if self.cells[id].is_mine() {
            self.triggered_mine = Some(self.cells[id].coord());
            self.expose_mines(&mut newly_revealed);
            return (RevealKind::HitMine, newly_revealed);
        }

        let mut to_visit = VecDeque::from([id]);
        while let Some(visit) = to_visit.pop_front() {
            // skip flagged or already revealed cells
            if self.cells[visit].is_revealed() || self.cells[visit].is_flagged() {
                continue;
            }
            self.cells[visit].mark_revealed();
            self.revealed_count += 1;
            newly_revealed.push(self.cells[visit].coord());
            log::trace!(
                "Revealed cell at {:?}, adjacent mines: {}",
                self.cells[visit].coord(),
                self.cells[visit].neighbor_mines()
            );

            // only zero cells extend the flood to their neighbors
            if self.cells[visit].neighbor_mines() == 0 {
                let neighbors: SmallVec<[CellId; 6]> =
                    SmallVec::from_slice(self.cells[visit].neighbors());
                to_visit.extend(neighbors.into_iter().filter(|&neighbor_id| {
                    let cell = &self.cells[neighbor_id];
                    !cell.is_revealed() && !cell.is_flagged()
                }));
            }
        }

        if self.revealed_count == self.safe_cell_count() {
            (RevealKind::Won, newly_revealed)
        } else {
            (RevealKind::Revealed, newly_revealed)
        }
    }

    /// Marks every mine revealed for display after a loss. Flags on mines
    /// stay set; whether to keep drawing them is the renderer's call.
    fn expose_mines(&mut self, newly_revealed: &mut Vec<HexCoord>) {
        for &id in &self.mine_ids {
            let cell = &mut self.cells[id];
            if !cell.is_revealed() {
                cell.mark_revealed();
                newly_revealed.push(cell.coord());
            }
        }
    }

    /// Records each cell's adjacency once; the topology never changes after
    /// construction, only the mine counts do.
    fn assess_neighbors(&mut self) {
        for id in 0..self.cells.len() {
            let mut neighbors: SmallVec<[CellId; 6]> = SmallVec::new();
            for coord in self.cells[id].coord().neighbors() {
                if let Some(&neighbor_id) = self.index.get(&coord) {
                    neighbors.push(neighbor_id);
                }
            }
            self.cells[id].set_neighbors(neighbors);
        }
    }

    /// Refreshes every cached adjacent-mine count; must run after any change
    /// to mine placement.
    fn recompute_neighbor_counts(&mut self) {
        for id in 0..self.cells.len() {
            let count = self.cells[id]
                .neighbors()
                .iter()
                .filter(|&&neighbor_id| self.cells[neighbor_id].is_mine())
                .count() as u8;
            self.cells[id].set_neighbor_mines(count);
        }
    }
}
