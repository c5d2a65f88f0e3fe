use serde::{Deserialize, Serialize};

use crate::*;

/// Cursor movement on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Fixed `(height, width)` coordinate space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: Coord2,
}

impl Grid {
    pub const fn new(size: Coord2) -> Self {
        Self { size }
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn height(&self) -> Coord {
        self.size.0
    }

    pub const fn width(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn center(&self) -> Coord2 {
        (self.size.0 / 2, self.size.1 / 2)
    }

    pub const fn contains(&self, (row, column): Coord2) -> bool {
        row < self.size.0 && column < self.size.1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds { coords })
        }
    }

    /// Every coordinate in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, columns) = self.size;
        (0..rows).flat_map(move |row| (0..columns).map(move |column| (row, column)))
    }

    /// Moves one step in `direction`, wrapping around to the opposite edge.
    pub fn wrapping_step(&self, (row, column): Coord2, direction: Direction) -> Coord2 {
        let (rows, columns) = self.size;
        match direction {
            Direction::Up => (wrap_dec(row, rows), column),
            Direction::Down => (wrap_inc(row, rows), column),
            Direction::Left => (row, wrap_dec(column, columns)),
            Direction::Right => (row, wrap_inc(column, columns)),
        }
    }
}

const fn wrap_inc(value: Coord, bound: Coord) -> Coord {
    if value + 1 >= bound { 0 } else { value + 1 }
}

const fn wrap_dec(value: Coord, bound: Coord) -> Coord {
    if value == 0 { bound - 1 } else { value - 1 }
}
