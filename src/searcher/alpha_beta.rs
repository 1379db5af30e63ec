use std::cmp::{max, min};

use log::debug;

use super::{
    child_state, worst_score, Evaluator, GameState, MoveGenerator, Score, SearchError,
    SearchMetrics, SearchOutcome,
};

/// Runs an alpha-beta search over the given window with fresh metrics.
#[must_use = "search returns the score and node counts"]
pub fn alpha_beta_search<S, G, E>(
    state: &S,
    depth: u8,
    alpha: Score,
    beta: Score,
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
    let score = alpha_beta(
        state,
        depth,
        alpha,
        beta,
        maximizing,
        move_generator,
        evaluator,
        &mut metrics,
    )?;
    debug!(
        "alpha-beta depth: {}, window: [{}, {}], score: {}, {}",
        depth, alpha, beta, score, metrics
    );
    Ok(SearchOutcome { score, metrics })
}

/// Scores `state` like `minimax`, skipping the remaining children of a node
/// once `alpha >= beta`.
///
/// The window is passed to each child by value. Each early exit counts as a
/// single pruned node regardless of how many siblings it skips. Moves are
/// searched in generation order; no reordering is done.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta<S, G, E>(
    state: &S,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
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
        let score = alpha_beta(
            &child,
            depth - 1,
            alpha,
            beta,
            !maximizing,
            move_generator,
            evaluator,
            metrics,
        )?;

        if maximizing {
            best_score = max(best_score, score);
            alpha = max(alpha, best_score);
        } else {
            best_score = min(best_score, score);
            beta = min(beta, best_score);
        }

        if alpha >= beta {
            metrics.increment_pruned();
            break;
        }
    }

    Ok(best_score)
}
