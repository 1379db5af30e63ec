//! Santorini-specific trait implementations for the generic search.

use crate::action::Action;
use crate::board::error::BoardError;
use crate::board::GameState;
use crate::evaluate;
use crate::move_generator::{self, MoveList};
use crate::searcher::{
    self, alpha_beta_search, minimax_search, Algorithm, Evaluator, GameMove, MoveGenerator, Score,
    SearchError, SearchOutcome,
};

impl searcher::GameState for GameState {
    #[inline]
    fn is_terminal(&self) -> bool {
        evaluate::is_terminal(self)
    }
}

impl GameMove for Action {
    type State = GameState;
    type Error = BoardError;

    #[inline]
    fn apply(&self, state: &GameState) -> Result<GameState, BoardError> {
        state.apply(self)
    }
}

#[derive(Clone, Copy, Default, Debug)]
pub struct SantoriniMoveGenerator;

impl MoveGenerator<GameState> for SantoriniMoveGenerator {
    type Move = Action;
    type MoveList = MoveList;

    #[inline]
    fn generate_moves(&self, state: &GameState) -> MoveList {
        move_generator::generate_moves(state)
    }
}

#[derive(Clone, Copy, Default, Debug)]
pub struct HeightEvaluator;

impl Evaluator<GameState> for HeightEvaluator {
    #[inline]
    fn evaluate(&self, state: &GameState) -> Score {
        evaluate::score(state)
    }
}

/// Plain minimax from `state`, `depth` plies deep.
#[must_use = "search returns the score and node counts"]
pub fn minimax(
    state: &GameState,
    depth: u8,
    maximizing: bool,
) -> Result<SearchOutcome, SearchError> {
    minimax_search(
        state,
        depth,
        maximizing,
        &SantoriniMoveGenerator,
        &HeightEvaluator,
    )
}

/// Alpha-beta from `state` over the `(alpha, beta)` window.
#[must_use = "search returns the score and node counts"]
pub fn alpha_beta(
    state: &GameState,
    depth: u8,
    alpha: Score,
    beta: Score,
    maximizing: bool,
) -> Result<SearchOutcome, SearchError> {
    alpha_beta_search(
        state,
        depth,
        alpha,
        beta,
        maximizing,
        &SantoriniMoveGenerator,
        &HeightEvaluator,
    )
}

/// Searches `state` as a root node: maximizing when X is to move, and over
/// the full window when using alpha-beta.
#[must_use = "search returns the score and node counts"]
pub fn search_root(
    algorithm: Algorithm,
    state: &GameState,
    depth: u8,
) -> Result<SearchOutcome, SearchError> {
    algorithm.search(
        state,
        depth,
        state.turn().maximize_score(),
        &SantoriniMoveGenerator,
        &HeightEvaluator,
    )
}
