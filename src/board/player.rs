use std::fmt;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    X = 0,
    O = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    pub fn opposite(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Scores are reported from X's point of view.
    pub fn maximize_score(&self) -> bool {
        match self {
            Player::X => true,
            Player::O => false,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::X => "X",
            Player::O => "O",
        };
        write!(f, "{}", player_str)
    }
}
