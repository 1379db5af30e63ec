//! Game-agnostic depth-limited tree search.
//!
//! Two traversals are provided over the same traits: plain minimax, which
//! visits every node down to the requested depth, and alpha-beta, which
//! carries an `(alpha, beta)` window and abandons a node's remaining
//! children once the window closes. Both return the same score for the same
//! input; they differ only in how many nodes they touch, which is recorded in
//! a `SearchMetrics` owned by the top-level call.
//!
//! A node without moves scores as the worst outcome for its side:
//! `-SCORE_INFINITY` when maximizing, `SCORE_INFINITY` when minimizing.

mod alpha_beta;
mod metrics;
mod minimax;
mod traits;


use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use alpha_beta::{alpha_beta, alpha_beta_search};
pub use metrics::SearchMetrics;
pub use minimax::{minimax, minimax_search};
pub use traits::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator};

pub type Score = i16;

/// Stands in for +infinity. The range is symmetric so `-SCORE_INFINITY` is
/// negative infinity.
pub const SCORE_INFINITY: Score = Score::MAX;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("failed to apply move {game_move}: {reason}")]
    MoveApplication { game_move: String, reason: String },
}

/// Score and node counts of one top-level search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub score: Score,
    pub metrics: SearchMetrics,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Minimax, Algorithm::AlphaBeta];

    /// Searches `state` to `depth` plies. Alpha-beta starts from the full
    /// `(-SCORE_INFINITY, SCORE_INFINITY)` window.
    pub fn search<S, G, E>(
        &self,
        state: &S,
        depth: u8,
        maximizing: bool,
        move_generator: &G,
        evaluator: &E,
    ) -> Result<SearchOutcome, SearchError>
    where
        S: GameState,
        G: MoveGenerator<S>,
        E: Evaluator<S>,
    {
        match self {
            Algorithm::Minimax => {
                minimax_search(state, depth, maximizing, move_generator, evaluator)
            }
            Algorithm::AlphaBeta => alpha_beta_search(
                state,
                depth,
                -SCORE_INFINITY,
                SCORE_INFINITY,
                maximizing,
                move_generator,
                evaluator,
            ),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Minimax => "Minimax",
            Algorithm::AlphaBeta => "Alpha-Beta",
        };
        write!(f, "{}", name)
    }
}

// used for parsing cli args
impl FromStr for Algorithm {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(Algorithm::Minimax),
            "alpha-beta" => Ok(Algorithm::AlphaBeta),
            _ => Err("invalid algorithm; options are: minimax, alpha-beta"),
        }
    }
}

/// Worst possible score for the side being searched; the starting value of
/// a node's fold over its children.
#[inline]
pub(crate) fn worst_score(maximizing: bool) -> Score {
    if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    }
}

#[inline]
pub(crate) fn child_state<M: GameMove>(
    game_move: &M,
    state: &M::State,
) -> Result<M::State, SearchError> {
    game_move
        .apply(state)
        .map_err(|err| SearchError::MoveApplication {
            game_move: format!("{:?}", game_move),
            reason: err.to_string(),
        })
}
