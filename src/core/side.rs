//! The two seats at the table.

use serde::{Deserialize, Serialize};

/// Who owns a hand or a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human opponent.
    Player,
    /// The search-driven opponent.
    Computer,
}

impl Side {
    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// Both seats, player first (deal order).
    pub fn all() -> impl Iterator<Item = Side> {
        [Side::Player, Side::Computer].into_iter()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Computer => write!(f, "computer"),
        }
    }
}
