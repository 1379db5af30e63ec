use smallvec::SmallVec;

use super::error::BoardError;
use super::player::Player;
use super::position::Position;

/// Worker positions of one player, in insertion order.
pub type WorkerList = SmallVec<[Position; 2]>;

/// Per-player worker lists. Order within a list is kept because move
/// enumeration walks the workers in the order they are stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct WorkerSet {
    workers: [WorkerList; 2],
}

impl WorkerSet {
    pub fn new<X, O>(x_workers: X, o_workers: O) -> Self
    where
        X: IntoIterator<Item = Position>,
        O: IntoIterator<Item = Position>,
    {
        Self {
            workers: [
                x_workers.into_iter().collect(),
                o_workers.into_iter().collect(),
            ],
        }
    }

    pub fn for_player(&self, player: Player) -> &[Position] {
        &self.workers[player.index()]
    }

    /// Iterates over every worker as `(owner, position)`, X first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, Position)> + '_ {
        let players: &'static [Player] = &Player::ALL;
        players.iter().flat_map(move |&player| {
            self.for_player(player)
                .iter()
                .map(move |&position| (player, position))
        })
    }

    pub fn owner_at(&self, position: Position) -> Option<Player> {
        self.iter()
            .find(|&(_, worker)| worker == position)
            .map(|(player, _)| player)
    }

    /// Returns a copy in which `player`'s worker at `from` has been removed
    /// and `to` appended to the end of that player's list.
    pub fn with_worker_moved(
        &self,
        player: Player,
        from: Position,
        to: Position,
    ) -> Result<WorkerSet, BoardError> {
        let index = self
            .for_player(player)
            .iter()
            .position(|&worker| worker == from)
            .ok_or(BoardError::WorkerNotFound { player, from })?;

        let mut moved = self.clone();
        let list = &mut moved.workers[player.index()];
        list.remove(index);
        list.push(to);
        Ok(moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_workers() -> WorkerSet {
        WorkerSet::new(
            vec![Position::new(1, 2), Position::new(2, 2)],
            vec![Position::new(3, 1), Position::new(3, 3)],
        )
    }

    #[test]
    fn test_for_player_keeps_insertion_order() {
        let workers = sample_workers();
        assert_eq!(
            workers.for_player(Player::X),
            &[Position::new(1, 2), Position::new(2, 2)]
        );
        assert_eq!(
            workers.for_player(Player::O),
            &[Position::new(3, 1), Position::new(3, 3)]
        );
    }

    #[test]
    fn test_iter_lists_x_before_o() {
        let owners: Vec<Player> = sample_workers().iter().map(|(player, _)| player).collect();
        assert_eq!(owners, vec![Player::X, Player::X, Player::O, Player::O]);
    }

    #[test]
    fn test_owner_at() {
        let workers = sample_workers();
        assert_eq!(workers.owner_at(Position::new(2, 2)), Some(Player::X));
        assert_eq!(workers.owner_at(Position::new(3, 3)), Some(Player::O));
        assert_eq!(workers.owner_at(Position::new(0, 0)), None);
    }

    #[test]
    fn test_moved_worker_goes_to_end_of_list() {
        let workers = sample_workers();
        let moved = workers
            .with_worker_moved(Player::X, Position::new(1, 2), Position::new(0, 1))
            .unwrap();
        assert_eq!(
            moved.for_player(Player::X),
            &[Position::new(2, 2), Position::new(0, 1)]
        );
        assert_eq!(moved.for_player(Player::O), workers.for_player(Player::O));
        // original untouched
        assert_eq!(
            workers.for_player(Player::X),
            &[Position::new(1, 2), Position::new(2, 2)]
        );
    }

    #[test]
    fn test_moving_missing_worker_fails() {
        let workers = sample_workers();
        let result = workers.with_worker_moved(Player::O, Position::new(1, 2), Position::new(0, 1));
        assert_eq!(
            result,
            Err(BoardError::WorkerNotFound {
                player: Player::O,
                from: Position::new(1, 2),
            })
        );
    }
}
