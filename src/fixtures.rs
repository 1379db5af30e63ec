//! The four fixed positions used to compare search growth. X is to move in
//! all of them.

use crate::board::{Board, GameState, Player, Position, WorkerSet, GRID_SIZE};

/// A named fixture with enough data to build its `GameState`.
pub struct BenchmarkPosition {
    pub name: &'static str,
    heights: [[u8; GRID_SIZE]; GRID_SIZE],
    x_workers: [Position; 2],
    o_workers: [Position; 2],
}

impl BenchmarkPosition {
    pub fn state(&self) -> GameState {
        GameState::new(
            Board::new(self.heights),
            WorkerSet::new(self.x_workers.iter().copied(), self.o_workers.iter().copied()),
            Player::X,
        )
        .expect("benchmark position should be valid")
    }
}

pub const BENCHMARK_POSITIONS: &[BenchmarkPosition] = &[
    BenchmarkPosition {
        name: "Opening",
        heights: [[0; GRID_SIZE]; GRID_SIZE],
        x_workers: [Position::new(1, 2), Position::new(2, 2)],
        o_workers: [Position::new(3, 1), Position::new(3, 3)],
    },
    BenchmarkPosition {
        name: "Early",
        heights: [
            [0, 0, 1, 2, 0],
            [1, 2, 3, 1, 0],
            [0, 1, 2, 1, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ],
        x_workers: [Position::new(1, 2), Position::new(2, 2)],
        o_workers: [Position::new(3, 1), Position::new(3, 3)],
    },
    BenchmarkPosition {
        name: "Mid",
        heights: [
            [0, 1, 1, 2, 0],
            [1, 2, 3, 2, 0],
            [0, 2, 2, 1, 0],
            [1, 0, 1, 0, 0],
            [0, 0, 0, 1, 0],
        ],
        x_workers: [Position::new(2, 1), Position::new(3, 2)],
        o_workers: [Position::new(1, 3), Position::new(4, 4)],
    },
    BenchmarkPosition {
        name: "Late",
        heights: [
            [0, 1, 2, 3, 1],
            [1, 3, 3, 2, 1],
            [2, 2, 2, 1, 0],
            [1, 3, 1, 0, 0],
            [0, 1, 0, 0, 0],
        ],
        x_workers: [Position::new(1, 2), Position::new(2, 3)],
        o_workers: [Position::new(3, 1), Position::new(4, 4)],
    },
];

pub fn opening_position() -> GameState {
    BENCHMARK_POSITIONS[0].state()
}

pub fn early_game_position() -> GameState {
    BENCHMARK_POSITIONS[1].state()
}

pub fn mid_game_position() -> GameState {
    BENCHMARK_POSITIONS[2].state()
}

pub fn late_game_position() -> GameState {
    BENCHMARK_POSITIONS[3].state()
}
