use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the renderer may show for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleCell {
    Hidden,
    Flagged,
    Revealed(u8),
    RevealedMine,
}

impl From<EngineCell> for VisibleCell {
    fn from(cell: EngineCell) -> Self {
        match cell {
            EngineCell::Hidden => Self::Hidden,
            EngineCell::Flagged => Self::Flagged,
            EngineCell::Revealed(count) => Self::Revealed(count),
            EngineCell::Mine => Self::RevealedMine,
        }
    }
}

/// Read-only copy of a session handed to the renderer after every action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub cells: Array2<VisibleCell>,
    pub cursor: Coord2,
    pub mines_left: isize,
    pub outcome: Outcome,
    /// Set once the player quit, independently of `outcome`.
    pub closed: bool,
}

impl SessionSnapshot {
    pub fn size(&self) -> Coord2 {
        array_size(&self.cells)
    }

    pub fn cell_at(&self, coords: Coord2) -> VisibleCell {
        self.cells[coords.to_nd_index()]
    }

    pub fn rows(&self) -> impl Iterator<Item = ndarray::ArrayView1<'_, VisibleCell>> {
        self.cells.rows().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_tagged_cells() {
        let layout = MineLayout::from_mine_coords((1, 3), &[(0, 2)]).unwrap();
        let mut session = Session::with_layout(layout);
        session.apply_action(Action::ToggleFlag).unwrap();
        let snapshot = session.apply_action(Action::MoveLeft).unwrap();

        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["cursor"][0], 0);
        assert_eq!(json["cursor"][1], 0);
        assert_eq!(json["mines_left"], 0);
        assert_eq!(json["outcome"], "InProgress");
        assert_eq!(json["closed"], false);
        assert_eq!(json["cells"]["data"][0], "Hidden");
        assert_eq!(json["cells"]["data"][1], "Flagged");
        assert_eq!(json["cells"]["data"][2], "Hidden");
    }

    #[test]
    fn rows_follow_board_height() {
        let layout = MineLayout::from_mine_coords((2, 3), &[]).unwrap();
        let snapshot = Session::with_layout(layout).snapshot();

        assert_eq!(snapshot.size(), (2, 3));
        assert_eq!(snapshot.rows().count(), 2);
        assert!(snapshot.rows().all(|row| row.len() == 3));
    }
}
