use thiserror::Error;

use super::player::Player;
use super::position::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid state, worker of player {player} at {position} lies outside the grid")]
    WorkerOffGrid { player: Player, position: Position },
    #[error("Cannot apply move, player {player} has no worker at {from}")]
    WorkerNotFound { player: Player, from: Position },
    #[error("Cannot apply move, the target {to} lies outside the grid")]
    TargetOffGrid { to: Position },
}
