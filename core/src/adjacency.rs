use ndarray::{Array2, Zip, s};
use serde::Serialize;

use crate::*;

/// Mine counts of every safe cell, `None` on the mines themselves.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AdjacencyMap {
    counts: Array2<Option<u8>>,
}

impl AdjacencyMap {
    /// Convolves the mine mask with the 3x3 ring kernel.
    ///
    /// The mask is zero-padded by one cell on every side, so each 3x3 window of the padded
    /// array is centred on one board cell and out-of-bounds neighbours contribute nothing.
    pub fn from_layout(layout: &MineLayout) -> Self {
        let mask = layout.mine_mask();
        let (rows, columns) = mask.dim();

        let mut padded: Array2<u8> = Array2::zeros((rows + 2, columns + 2));
        Zip::from(padded.slice_mut(s![1..=rows, 1..=columns]))
            .and(mask)
            .for_each(|cell, &is_mine| *cell = u8::from(is_mine));

        let counts = Zip::from(padded.windows((3, 3)))
            .and(mask)
            .map_collect(|window, &is_mine| {
                if is_mine {
                    None
                } else {
                    Some(window.sum())
                }
            });

        Self { counts }
    }

    pub fn count_at(&self, coords: Coord2) -> Option<u8> {
        self.counts[coords.to_nd_index()]
    }

    pub fn size(&self) -> Coord2 {
        array_size(&self.counts)
    }
}
