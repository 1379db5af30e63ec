//! Worker move generation.
//!
//! Every worker of the side to move may step to any of its eight neighbouring
//! cells that lie on the grid. Heights, occupancy and climbing limits are not
//! checked. The resulting list is ordered by worker (in stored order), then by
//! row delta, then by column delta, so repeated calls on the same state return
//! identical sequences.

use smallvec::SmallVec;

use crate::action::Action;
use crate::board::GameState;

/// Two workers with eight neighbours each fit inline.
pub type MoveList = SmallVec<[Action; 16]>;

/// Enumerates every action available to the side to move.
#[inline]
pub fn generate_moves(state: &GameState) -> MoveList {
    let mut moves = MoveList::new();
    for &worker in state.workers().for_player(state.turn()) {
        moves.extend(worker.neighbors().map(|target| Action::new(worker, target)));
    }
    moves
}

/// Number of actions available to the side to move.
pub fn branching_factor(state: &GameState) -> usize {
    generate_moves(state).len()
}
