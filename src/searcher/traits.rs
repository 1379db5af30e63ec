//! Core traits for generic game-tree search.

use std::fmt::{Debug, Display};

use smallvec::{Array, SmallVec};

use super::Score;

/// Represents the state of a two-player zero-sum game. States are treated as
/// values: searching never mutates them.
pub trait GameState: Clone {
    /// Returns true if no further play is possible from this state.
    /// Default implementation returns false (search stops on depth only).
    fn is_terminal(&self) -> bool {
        false
    }
}

/// Represents an action that turns one state into the next.
pub trait GameMove: Clone + PartialEq + Debug {
    type State: GameState;
    type Error: Display;

    /// Returns the state reached by playing this move, with the turn passed
    /// to the other side.
    fn apply(&self, state: &Self::State) -> Result<Self::State, Self::Error>;
}

/// Generates all legal moves from a given game state.
pub trait MoveGenerator<S: GameState> {
    type Move: GameMove<State = S>;
    type MoveList: MoveCollection<Self::Move>;

    /// Generates all legal moves for the side to move, in a fixed order.
    fn generate_moves(&self, state: &S) -> Self::MoveList;
}

/// Evaluates a game position and returns a score.
pub trait Evaluator<S: GameState> {
    /// Evaluates the given state. Higher scores favor the maximizing player.
    fn evaluate(&self, state: &S) -> Score;
}

/// Abstraction over move collections (Vec, SmallVec, etc.)
pub trait MoveCollection<M>: AsRef<[M]> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<M> MoveCollection<M> for Vec<M> {}

impl<A: Array> MoveCollection<A::Item> for SmallVec<A> {}
