use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::board::RevealKind;
use crate::*;

/// Lifecycle of one playthrough.
///
/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Both end states are terminal; only `GameSession::reset` returns to
/// `InProgress`, and it does so with a brand new board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Indicates the game has ended and no moves are accepted anymore.
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Orchestrates one game from creation through win, loss, and reset.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    mines: CellCount,
    board: Board,
    generator: ShuffledMineGenerator,
    first_move_taken: bool,
    status: GameStatus,
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
}

impl GameSession {
    /// Starts a session for `config`, drawing mines from a generator seeded
    /// with `seed`. The core takes no OS entropy of its own; the caller
    /// decides where seeds come from.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        log::debug!("Starting session with {:?}", config);
        let mut generator = ShuffledMineGenerator::from_seed(seed);
        let mines = config.mine_count();
        let mut board = Board::bare(config.radius());
        board.place_mines(mines, &mut generator);
        Self {
            config,
            mines,
            board,
            generator,
            first_move_taken: false,
            status: GameStatus::InProgress,
            started_at: None,
            ended_at: None,
        }
    }

    /// Wraps an explicitly laid out board. The difficulty recorded for later
    /// resets is the board's own mine density; the mine count itself is
    /// carried over exactly.
    pub fn with_board(board: Board, seed: u64) -> Self {
        let mines = board.mine_count();
        let config = GameConfig::new_unchecked(
            board.radius(),
            mines as f64 / board.total_cells() as f64,
        );
        Self {
            config,
            mines,
            board,
            generator: ShuffledMineGenerator::from_seed(seed),
            first_move_taken: false,
            status: GameStatus::InProgress,
            started_at: None,
            ended_at: None,
        }
    }

    pub const fn status(&self) -> GameStatus {
        self.status
    }

    pub const fn config(&self) -> GameConfig {
        self.config
    }

    pub const fn first_move_taken(&self) -> bool {
        self.first_move_taken
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, coord: HexCoord) -> Result<&Cell> {
        self.board.cell_at(coord).ok_or(GameError::InvalidCoords)
    }

    pub fn triggered_mine(&self) -> Option<HexCoord> {
        self.board.triggered_mine()
    }

    /// How many mines have not been flagged yet; negative when the player has
    /// flagged more cells than there are mines.
    pub fn remaining_flag_count(&self) -> isize {
        self.mines as isize - self.board.flagged_count() as isize
    }

    /// Seconds since the first move, frozen once the game ends, 0 before the
    /// first move.
    pub fn elapsed_secs(&self) -> u64 {
        match self.started_at {
            Some(started_at) => self
                .ended_at
                .unwrap_or_else(Instant::now)
                .duration_since(started_at)
                .as_secs(),
            None => 0,
        }
    }

    /// Reveals the cell at `coord`, flooding through zero-count
    /// neighborhoods.
    ///
    /// Flagged targets, revealed targets, and finished sessions are defined
    /// no-ops. The first reveal that actually processes relocates any mines
    /// out of the target's neighborhood beforehand, so an opening move always
    /// starts a cascade.
    pub fn reveal(&mut self, coord: HexCoord) -> Result<RevealOutcome> {
        let id = self.board.require_cell(coord)?;

        if self.status.is_finished() {
            log::debug!("Ignoring reveal at {:?} after game end", coord);
            return Ok(self.unchanged());
        }
        if self.board.cell(id).is_flagged() || self.board.cell(id).is_revealed() {
            return Ok(self.unchanged());
        }

        if !self.first_move_taken {
            if self.board.cell(id).is_mine() || self.board.cell(id).neighbor_mines() != 0 {
                self.board.relocate_mines(id, &mut self.generator)?;
            }
            self.first_move_taken = true;
        }

        self.mark_started();
        let (kind, newly_revealed) = self.board.reveal(id);
        match kind {
            RevealKind::HitMine => self.end_game(false),
            RevealKind::Won => self.end_game(true),
            RevealKind::Revealed | RevealKind::NoChange => {}
        }
        Ok(RevealOutcome {
            status: self.status,
            newly_revealed,
        })
    }

    /// Toggles the flag on an unrevealed cell, reporting the new flagged
    /// state. Revealed cells and finished sessions report their current state
    /// unchanged.
    pub fn toggle_flag(&mut self, coord: HexCoord) -> Result<bool> {
        let id = self.board.require_cell(coord)?;
        if self.status.is_finished() {
            return Ok(self.board.cell(id).is_flagged());
        }
        self.mark_started();
        Ok(self.board.toggle_flag(id))
    }

    /// Discards the board and starts over with freshly drawn mines; available
    /// in any state.
    pub fn reset(&mut self) {
        log::info!("Resetting");
        let mut board = Board::bare(self.config.radius());
        board.place_mines(self.mines, &mut self.generator);
        self.board = board;
        self.first_move_taken = false;
        self.status = GameStatus::InProgress;
        self.started_at = None;
        self.ended_at = None;
    }

    fn unchanged(&self) -> RevealOutcome {
        RevealOutcome {
            status: self.status,
            newly_revealed: Vec::new(),
        }
    }

    fn mark_started(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    fn end_game(&mut self, won: bool) {
        self.status = if won { GameStatus::Won } else { GameStatus::Lost };
        self.ended_at = Some(Instant::now());
        if won {
            log::info!("Game won");
        } else {
            log::info!("Game lost");
        }
    }
}
