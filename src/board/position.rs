use std::fmt;

/// Width and height of the square building grid.
pub const GRID_SIZE: usize = 5;

/// The eight neighbouring offsets, ordered by row delta then column delta.
pub const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A (row, column) coordinate. Construction is unchecked; `GameState::new`
/// is where off-grid coordinates are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn is_on_grid(&self) -> bool {
        (self.row as usize) < GRID_SIZE && (self.col as usize) < GRID_SIZE
    }

    /// Returns the position shifted by the given deltas, or `None` if it would
    /// leave the grid.
    #[inline]
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Position> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        let size = GRID_SIZE as i16;
        if row < 0 || row >= size || col < 0 || col >= size {
            return None;
        }
        Some(Position::new(row as u8, col as u8))
    }

    /// All in-grid neighbours, in `NEIGHBOR_OFFSETS` order.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        let offsets: &'static [(i8, i8)] = &NEIGHBOR_OFFSETS;
        offsets
            .iter()
            .filter_map(move |&(d_row, d_col)| self.offset(d_row, d_col))
    }
}

impl From<(u8, u8)> for Position {
    fn from((row, col): (u8, u8)) -> Self {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
