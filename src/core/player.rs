//! Player identities and turn rotation

use std::fmt;

/// One of the three contestants
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    One,
    Two,
    Three,
}

impl Player {
    /// Fixed turn order
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// Number of players at the table
    pub const COUNT: usize = Self::ALL.len();

    /// The player who opens every game
    pub const FIRST: Self = Self::One;

    /// Zero-based seat index in turn order
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
        }
    }

    /// Player sitting at `index`, wrapping around the table
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }
}

/// The player after `current` in turn order, wrapping from last to first
///
/// # Examples
/// ```
/// use wheel_of_fortune::core::{Player, rotate};
///
/// assert_eq!(rotate(Player::One), Player::Two);
/// assert_eq!(rotate(Player::Three), Player::One);
/// ```
#[inline]
#[must_use]
pub const fn rotate(current: Player) -> Player {
    Player::from_index(current.index() + 1)
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}
