use crate::action::Action;

use super::error::BoardError;
use super::player::Player;
use super::workers::WorkerSet;
use super::Board;

/// A single node of the game tree: building heights, worker positions and
/// the side to move. States are never mutated once built; `apply` returns
/// a fresh state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    workers: WorkerSet,
    turn: Player,
}

impl GameState {
    /// Builds a state, rejecting any worker that lies outside the grid.
    ///
    /// Overlapping workers are accepted as given.
    pub fn new(board: Board, workers: WorkerSet, turn: Player) -> Result<Self, BoardError> {
        if let Some((player, position)) = workers
            .iter()
            .find(|(_, position)| !position.is_on_grid())
        {
            return Err(BoardError::WorkerOffGrid { player, position });
        }

        Ok(Self {
            board,
            workers,
            turn,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn workers(&self) -> &WorkerSet {
        &self.workers
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Moves one of the side-to-move's workers and hands the turn over.
    ///
    /// The moved worker is placed at the end of its player's list. Heights
    /// are carried over unchanged.
    pub fn apply(&self, action: &Action) -> Result<GameState, BoardError> {
        if !action.to().is_on_grid() {
            return Err(BoardError::TargetOffGrid { to: action.to() });
        }

        let workers = self
            .workers
            .with_worker_moved(self.turn, action.from(), action.to())?;

        Ok(GameState {
            board: self.board,
            workers,
            turn: self.turn.opposite(),
        })
    }
}
