use crate::board::{GameState, Player};
use crate::searcher::Score;

/// Static score of a state from X's perspective: the heights under X's
/// workers minus the heights under O's workers.
#[inline(always)]
pub fn score(state: &GameState) -> Score {
    player_height_score(state, Player::X).saturating_sub(player_height_score(state, Player::O))
}

/// Sum of the building heights under every worker of `player`. Workers that
/// share a cell are each counted.
#[inline(always)]
pub fn player_height_score(state: &GameState, player: Player) -> Score {
    state
        .workers()
        .for_player(player)
        .iter()
        .fold(0, |total: Score, &worker| {
            total.saturating_add(Score::from(state.board().height(worker)))
        })
}

/// No win or loss condition is modelled, so no state is terminal; searches
/// only stop when their depth runs out.
#[inline(always)]
pub fn is_terminal(_state: &GameState) -> bool {
    false
}
