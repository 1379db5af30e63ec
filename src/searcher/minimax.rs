use std::cmp::{max, min};

use log::debug;

use super::{
    child_state, worst_score, Evaluator, GameState, MoveGenerator, Score, SearchError,
    SearchMetrics, SearchOutcome,
};

/// Runs a full-width minimax search with fresh metrics.
#[must_use = "search returns the score and node counts"]
pub fn minimax_search<S, G, E>(
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
    let mut metrics = SearchMetrics::new();
    let score = minimax(
        state,
        depth,
        maximizing,
        move_generator,
        evaluator,
        &mut metrics,
    )?;
    debug!("minimax depth: {}, score: {}, {}", depth, score, metrics);
    Ok(SearchOutcome { score, metrics })
}

/// Scores `state` by visiting every node down to `depth` plies.
///
/// Counts every call as generated and every leaf as evaluated. Children are
/// visited in generation order with `maximizing` flipped at each ply.
pub fn minimax<S, G, E>(
    state: &S,
    depth: u8,
    maximizing: bool,
    move_generator: &G,
    evaluator: &E,
    metrics: &mut SearchMetrics,
) -> Result<Score, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    metrics.increment_generated();

    if depth == 0 || state.is_terminal() {
        metrics.increment_evaluated();
        return Ok(evaluator.evaluate(state));
    }

    let candidates = move_generator.generate_moves(state);
    let mut best_score = worst_score(maximizing);

    for game_move in candidates.as_ref() {
        let child = child_state(game_move, state)?;
        let score = minimax(
            &child,
            depth - 1,
            !maximizing,
            move_generator,
            evaluator,
            metrics,
        )?;
        best_score = if maximizing {
            max(best_score, score)
        } else {
            min(best_score, score)
        };
    }

    Ok(best_score)
}
