use alloc::vec;
use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Owns the minefield, its derived counts, and everything the player changed on it.
///
/// Serializable for inspection only, there is no way back from the serialized form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayEngine {
    mine_layout: MineLayout,
    adjacency: AdjacencyMap,
    board: Array2<EngineCell>,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    outcome: Outcome,
    triggered_mine: Option<Coord2>,
}

impl PlayEngine {
    pub fn new(mine_layout: MineLayout) -> Self {
        let adjacency = AdjacencyMap::from_layout(&mine_layout);
        let size = mine_layout.size();
        Self {
            mine_layout,
            adjacency,
            board: Array2::default(size.to_nd_index()),
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            outcome: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn grid(&self) -> Grid {
        self.mine_layout.grid()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    /// Mines not yet accounted for by a flag, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.mine_layout.mine_count() as isize) - (self.flagged_count.0 as isize)
    }

    pub fn cell_at(&self, coords: Coord2) -> EngineCell {
        self.board[coords.to_nd_index()]
    }

    pub fn board(&self) -> &Array2<EngineCell> {
        &self.board
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<bool> {
        use EngineCell::*;

        let coords = self.mine_layout.validate_coords(coords)?;
        self.check_in_progress()?;

        let flagged = match self.board[coords.to_nd_index()] {
            Hidden => {
                self.board[coords.to_nd_index()] = Flagged;
                self.flagged_count += 1;
                true
            }
            Flagged => {
                self.board[coords.to_nd_index()] = Hidden;
                self.flagged_count -= 1;
                false
            }
            Revealed(_) | Mine => return Err(IllegalAction::CellRevealed.into()),
        };
        log::debug!("Flag at {:?} set to {}", coords, flagged);
        Ok(flagged)
    }

    /// Reveals a hidden cell, flood-filling from it when it has no adjacent mines.
    ///
    /// Flagged cells are rejected, revealed cells are left as they are.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use EngineCell::*;

        let coords = self.mine_layout.validate_coords(coords)?;
        self.check_in_progress()?;

        match self.board[coords.to_nd_index()] {
            Hidden => Ok(self.reveal_hidden_cell(coords)),
            Flagged => Err(IllegalAction::CellFlagged.into()),
            Revealed(_) | Mine => Ok(RevealOutcome::NoChange),
        }
    }

    fn reveal_hidden_cell(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(adjacent_mines) = self.adjacency.count_at(coords) else {
            log::info!("Hit mine at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.end_game(false);
            return RevealOutcome::HitMine;
        };

        self.open_cell(coords, adjacent_mines);
        log::debug!("Open cell at {:?}, mine count: {}", coords, adjacent_mines);

        if adjacent_mines == 0 {
            self.flood_fill(coords);
        }

        if self.revealed_count == Saturating(self.mine_layout.safe_cell_count()) {
            self.end_game(true);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Opens the zero region around `start` and its numbered border.
    ///
    /// Cells are revealed before they are pushed, so the board doubles as the visited set and
    /// no cell is pushed twice. Flagged cells are left alone.
    fn flood_fill(&mut self, start: Coord2) {
        let mut pending = vec![start];

        while let Some(center) = pending.pop() {
            for pos in self.mine_layout.iter_neighbors(center) {
                if self.board[pos.to_nd_index()] != EngineCell::Hidden {
                    continue;
                }

                // a zero cell never borders a mine
                let Some(adjacent_mines) = self.adjacency.count_at(pos) else {
                    continue;
                };

                self.open_cell(pos, adjacent_mines);
                log::trace!("Flood opened cell at {:?}, mine count: {}", pos, adjacent_mines);

                if adjacent_mines == 0 {
                    pending.push(pos);
                }
            }
        }
    }

    fn open_cell(&mut self, coords: Coord2, adjacent_mines: u8) {
        self.board[coords.to_nd_index()] = EngineCell::Revealed(adjacent_mines);
        self.revealed_count += 1;
    }

    fn end_game(&mut self, won: bool) {
        if self.outcome.is_finished() {
            return;
        }

        self.outcome = if won { Outcome::Won } else { Outcome::Lost };
        log::info!("Game ended: {:?}", self.outcome);

        if !won {
            self.expose_board();
        }
    }

    /// Shows every cell after a loss, flags included. Counters keep their gameplay values.
    fn expose_board(&mut self) {
        for coords in self.mine_layout.grid().iter_coords() {
            self.board[coords.to_nd_index()] = match self.adjacency.count_at(coords) {
                Some(count) => EngineCell::Revealed(count),
                None => EngineCell::Mine,
            };
        }
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.outcome.is_finished() {
            Err(IllegalAction::GameOver.into())
        } else {
            Ok(())
        }
    }
}
