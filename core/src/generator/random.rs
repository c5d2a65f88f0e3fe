use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Purely random placement: every cell is equally likely to hold a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Picks a fresh seed from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(random_seed())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

pub fn random_seed() -> u64 {
    SmallRng::from_os_rng().next_u64()
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    /// Rejection sampling: draw a uniformly random cell, keep it only if it holds no mine yet.
    ///
    /// Terminates because validation guarantees at least one cell stays free.
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        let config = config.validate()?;
        let (rows, columns) = config.size;

        log::debug!(
            "Generating {}x{} minefield with {} mines, seed: {}",
            rows,
            columns,
            config.mines,
            self.seed
        );

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut mines_placed: CellCount = 0;
        let mut rejected: u32 = 0;

        while mines_placed < config.mines {
            let coords: Coord2 = (rng.random_range(0..rows), rng.random_range(0..columns));
            let cell = &mut mines[coords.to_nd_index()];
            if *cell {
                rejected += 1;
                continue;
            }
            *cell = true;
            mines_placed += 1;
        }
        log::trace!("Mine placement rejected {} duplicate draws", rejected);

        let layout = MineLayout::from_mine_mask(mines);
        // double check mine count
        if layout.mine_count() != config.mines {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines
            );
        }
        Ok(layout)
    }
}
