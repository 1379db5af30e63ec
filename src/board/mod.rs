pub mod error;
pub mod game_state;
pub mod player;
pub mod position;
pub mod workers;

mod display;

pub use game_state::GameState;
pub use player::Player;
pub use position::{Position, GRID_SIZE};
pub use workers::WorkerSet;

/// Building heights on the 5x5 grid. `Board` is `Copy`, so every state
/// derived from a transition carries its own copy of all 25 cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    heights: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    pub const fn new(heights: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { heights }
    }

    /// An empty board: every cell at ground level.
    pub fn flat() -> Self {
        Self::default()
    }

    /// Height of the cell at `position`. The position must be on the grid.
    #[inline]
    pub fn height(&self, position: Position) -> u8 {
        self.heights[position.row() as usize][position.col() as usize]
    }

    pub fn rows(&self) -> &[[u8; GRID_SIZE]; GRID_SIZE] {
        &self.heights
    }
}
