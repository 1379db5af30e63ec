use std::fmt;

use super::{GameState, Position, GRID_SIZE};

/// Renders one cell per column as `<height><owner>`, e.g. `3X`, or the bare
/// height when the cell is empty.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..GRID_SIZE {
            write!(f, " {:>3}", col)?;
        }
        writeln!(f)?;

        for row in 0..GRID_SIZE {
            write!(f, "{:>2}", row)?;
            for col in 0..GRID_SIZE {
                let position = Position::new(row as u8, col as u8);
                let height = self.board().height(position);
                let cell = match self.workers().owner_at(position) {
                    Some(player) => format!("{}{}", height, player),
                    None => format!("{} ", height),
                };
                write!(f, " {:>3}", cell)?;
            }
            writeln!(f)?;
        }

        write!(f, "to move: {}", self.turn())
    }
}
