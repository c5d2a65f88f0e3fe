use termsweep_core::{Coord2, Outcome, SessionSnapshot, VisibleCell};

/// Each cell is drawn as a glyph followed by a space.
pub(crate) const CELL_WIDTH: u16 = 2;

pub(crate) fn glyph(cell: VisibleCell) -> char {
    match cell {
        VisibleCell::Revealed(0) => ' ',
        VisibleCell::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        VisibleCell::Flagged => '⚑',
        VisibleCell::Hidden => '■',
        VisibleCell::RevealedMine => 'X',
    }
}

pub(crate) fn board_lines(snapshot: &SessionSnapshot) -> Vec<String> {
    snapshot
        .rows()
        .map(|row| {
            row.iter()
                .map(|&cell| glyph(cell).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub(crate) fn status_line(snapshot: &SessionSnapshot, message: Option<&str>) -> String {
    match (snapshot.outcome, message) {
        (Outcome::Won, _) => "You win!".to_string(),
        (Outcome::Lost, _) => "You lose!".to_string(),
        (Outcome::InProgress, Some(message)) => message.to_string(),
        (Outcome::InProgress, None) => format!("Mines: {}", snapshot.mines_left),
    }
}

/// Top-left screen position that centres a board of `size` on a screen of `screen` columns by rows.
pub(crate) fn board_origin(screen: (u16, u16), size: Coord2) -> (u16, u16) {
    let (columns, rows) = screen;
    let (height, width) = size;
    let x = (columns / 2).saturating_sub(u16::from(width) * CELL_WIDTH / 2);
    let y = (rows / 2).saturating_sub(u16::from(height) / 2);
    (x, y)
}

/// Screen position of the cell under the cursor.
pub(crate) fn cursor_position(origin: (u16, u16), (row, column): Coord2) -> (u16, u16) {
    (
        origin.0 + u16::from(column) * CELL_WIDTH,
        origin.1 + u16::from(row),
    )
}
