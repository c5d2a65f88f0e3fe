#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use session::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod adjacency;
mod engine;
mod error;
mod generator;
mod grid;
mod session;
mod snapshot;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `(height, width)`
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const BEGINNER: Self = Self::new_unchecked((9, 9), 10);
    pub const INTERMEDIATE: Self = Self::new_unchecked((16, 16), 40);
    pub const EXPERT: Self = Self::new_unchecked((16, 30), 99);
    pub const CLASSIC: Self = Self::new_unchecked((20, 40), 150);

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Board dimensions must be non-zero and at least one cell must stay free of mines.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(size, mines).validate()
    }

    pub fn validate(self) -> Result<Self> {
        let (height, width) = self.size;
        if height == 0 || width == 0 || self.mines >= self.total_cells() {
            return Err(GameError::InvalidConfiguration {
                height,
                width,
                mines: self.mines,
            });
        }
        Ok(self)
    }

    pub const fn grid(&self) -> Grid {
        Grid::new(self.size)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Wraps a mask that already went through configuration checks.
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a fixed layout, duplicated coordinates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let grid = GameConfig::new(size, 0)?.grid();
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            let coords = grid.validate_coords(coords)?;
            mine_mask[coords.to_nd_index()] = true;
        }

        let layout = Self::from_mine_mask(mine_mask);
        GameConfig::new(size, layout.mine_count)?;
        Ok(layout)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.size())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.grid().validate_coords(coords)
    }

    pub fn size(&self) -> Coord2 {
        array_size(&self.mine_mask)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn mine_mask(&self) -> &Array2<bool> {
        &self.mine_mask
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_degenerate_boards() {
        assert!(GameConfig::new((0, 5), 0).is_err());
        assert!(GameConfig::new((5, 0), 0).is_err());
        assert_eq!(
            GameConfig::new((3, 3), 9),
            Err(GameError::InvalidConfiguration {
                height: 3,
                width: 3,
                mines: 9
            })
        );
    }

    #[test]
    fn config_accepts_one_safe_cell() {
        let config = GameConfig::new((3, 3), 8).unwrap();
        assert_eq!(config.safe_cell_count(), 1);
        assert_eq!(GameConfig::new((1, 1), 0).unwrap().safe_cell_count(), 1);
    }

    #[test]
    fn presets_are_valid() {
        for preset in [
            GameConfig::BEGINNER,
            GameConfig::INTERMEDIATE,
            GameConfig::EXPERT,
            GameConfig::CLASSIC,
        ] {
            assert_eq!(preset.validate(), Ok(preset));
        }
    }

    #[test]
    fn layout_from_coords_counts_unique_mines() {
        let layout = MineLayout::from_mine_coords((2, 3), &[(0, 0), (1, 2), (0, 0)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.safe_cell_count(), 4);
        assert!(layout.contains_mine((1, 2)));
        assert!(!layout.contains_mine((1, 1)));
    }

    #[test]
    fn layout_from_coords_rejects_bad_input() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::OutOfBounds { coords: (2, 0) })
        );
        assert!(matches!(
            MineLayout::from_mine_coords((1, 2), &[(0, 0), (0, 1)]),
            Err(GameError::InvalidConfiguration { .. })
        ));
    }
}
