//! Player identification for two-player games.
//!
//! ## Player
//!
//! Exactly two players alternate turns. Every applied move flips the
//! active player once, so `opponent()` is the only relation search needs.

use serde::{Deserialize, Serialize};

/// One of the two players of an alternating-turn game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// The first player (`p1`).
    One,
    /// The second player (`p2`).
    Two,
}

impl Player {
    /// Both players, in seat order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Select the player to move from a "is it player one's turn" flag.
    ///
    /// ```
    /// use rust_minimax::core::Player;
    ///
    /// assert_eq!(Player::from_p1_turn(true), Player::One);
    /// assert_eq!(Player::from_p1_turn(false), Player::Two);
    /// ```
    #[must_use]
    pub const fn from_p1_turn(p1_turn: bool) -> Self {
        if p1_turn {
            Player::One
        } else {
            Player::Two
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Seat index (0 for `p1`, 1 for `p2`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Short name used in instructions and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::One => "p1",
            Player::Two => "p2",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
