//! The chain of played tiles.
//!
//! ## Placement rule
//!
//! - Empty chain: the tile is laid as-is.
//! - Tile fits the left end: oriented so `tile.right == left_end`, prepended.
//! - Otherwise tile fits the right end: oriented so `tile.left == right_end`,
//!   appended.
//! - A double that fits two identical ends goes to the right.
//!
//! Backed by `im::Vector` so search snapshots clone in O(1).

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::tile::{End, Tile};
use crate::error::RulesError;

/// Where a tile landed and how it was oriented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The tile as it now lies in the chain.
    pub tile: Tile,
    pub end: End,
}

/// Ordered chain of played tiles. Adjacent touching pips are always equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Board {
    chain: Vector<Tile>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from an already-laid chain, left to right.
    ///
    /// Rejects chains whose neighbours don't touch on equal pips and chains
    /// that repeat a piece.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Result<Self, RulesError> {
        let chain: Vector<Tile> = tiles.into_iter().collect();

        for (index, (a, b)) in chain.iter().zip(chain.iter().skip(1)).enumerate() {
            if a.right() != b.left() {
                return Err(RulesError::BrokenChain { index });
            }
        }
        for (i, tile) in chain.iter().enumerate() {
            if chain.iter().skip(i + 1).any(|other| other.same_piece(*tile)) {
                return Err(RulesError::DuplicateTile { tile: *tile });
            }
        }

        Ok(Self { chain })
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Tiles from left to right.
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.chain.iter().copied()
    }

    #[must_use]
    pub fn left_end(&self) -> Option<u8> {
        self.chain.front().map(|t| t.left())
    }

    #[must_use]
    pub fn right_end(&self) -> Option<u8> {
        self.chain.back().map(|t| t.right())
    }

    /// `(left_end, right_end)`, or `None` for an empty chain.
    #[must_use]
    pub fn ends(&self) -> Option<(u8, u8)> {
        Some((self.left_end()?, self.right_end()?))
    }

    /// True if this piece (any orientation) is already on the board.
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.chain.iter().any(|t| t.same_piece(tile))
    }

    /// The end `place` would attach `tile` to, or `None` if it fits neither.
    #[must_use]
    pub fn fit(&self, tile: Tile) -> Option<End> {
        let Some((left, right)) = self.ends() else {
            return Some(End::Right);
        };

        if tile.is_double() && left == right && tile.matches(left) {
            return Some(End::Right);
        }

        if tile.matches(left) {
            Some(End::Left)
        } else if tile.matches(right) {
            Some(End::Right)
        } else {
            None
        }
    }

    /// Lay `tile` on the chain.
    ///
    /// Fails with `IllegalPlacement` (leaving the board untouched) if the
    /// tile matches neither open end.
    pub fn place(&mut self, tile: Tile) -> Result<Placement, RulesError> {
        match self.fit(tile) {
            Some(end) => Ok(self.attach(tile, end)),
            None => {
                let (left, right) = self.ends().unwrap_or_default();
                Err(RulesError::IllegalPlacement { tile, left, right })
            }
        }
    }

    /// Orient and insert at `end`. `end` must come from [`Board::fit`].
    pub(crate) fn attach(&mut self, tile: Tile, end: End) -> Placement {
        match end {
            End::Left => {
                let oriented = match self.left_end() {
                    Some(left) if tile.right() != left => tile.flipped(),
                    _ => tile,
                };
                self.chain.push_front(oriented);
                Placement { tile: oriented, end }
            }
            End::Right => {
                let oriented = match self.right_end() {
                    Some(right) if tile.left() != right => tile.flipped(),
                    _ => tile,
                };
                self.chain.push_back(oriented);
                Placement { tile: oriented, end }
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.chain.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Tile>> for Board {
    type Error = RulesError;

    fn try_from(tiles: Vec<Tile>) -> Result<Self, Self::Error> {
        Board::from_tiles(tiles)
    }
}

impl From<Board> for Vec<Tile> {
    fn from(board: Board) -> Self {
        board.chain.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(left: u8, right: u8) -> Tile {
        Tile::new(left, right).unwrap()
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.ends(), None);
        assert_eq!(board.fit(t(2, 3)), Some(End::Right));
    }

    #[test]
    fn test_first_tile_keeps_orientation() {
        let mut board = Board::new();
        let placed = board.place(t(5, 2)).unwrap();
        assert_eq!(placed.tile, t(5, 2));
        assert_eq!(board.ends(), Some((5, 2)));
    }

    #[test]
    fn test_prepend_reorients() {
        let mut board = Board::from_tiles([t(2, 5)]).unwrap();

        // [2|4] touches the left end 2, must lie as [4|2]
        let placed = board.place(t(2, 4)).unwrap();
        assert_eq!(placed, Placement { tile: t(4, 2), end: End::Left });
        assert_eq!(board.ends(), Some((4, 5)));
        assert_eq!(board.to_string(), "[4|2] [2|5]");
    }

    #[test]
    fn test_append_reorients() {
        let mut board = Board::from_tiles([t(2, 5)]).unwrap();

        let placed = board.place(t(6, 5)).unwrap();
        assert_eq!(placed, Placement { tile: t(5, 6), end: End::Right });
        assert_eq!(board.ends(), Some((2, 6)));
    }

    #[test]
    fn test_left_end_wins_when_both_fit() {
        let mut board = Board::from_tiles([t(2, 5)]).unwrap();

        let placed = board.place(t(5, 2)).unwrap();
        assert_eq!(placed.end, End::Left);
        assert_eq!(board.ends(), Some((5, 5)));
    }

    #[test]
    fn test_double_on_equal_ends_goes_right() {
        let mut board = Board::from_tiles([t(3, 1), t(1, 0), t(0, 3)]).unwrap();

        let placed = board.place(t(3, 3)).unwrap();
        assert_eq!(placed.end, End::Right);
        assert_eq!(board.to_string(), "[3|1] [1|0] [0|3] [3|3]");
    }

    #[test]
    fn test_illegal_placement_is_rejected() {
        let mut board = Board::from_tiles([t(2, 5)]).unwrap();

        let err = board.place(t(1, 4)).unwrap_err();
        assert_eq!(
            err,
            RulesError::IllegalPlacement { tile: t(1, 4), left: 2, right: 5 }
        );
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_from_tiles_validates_chain() {
        assert_eq!(
            Board::from_tiles([t(1, 2), t(3, 4)]),
            Err(RulesError::BrokenChain { index: 0 })
        );
        assert_eq!(
            Board::from_tiles([t(1, 2), t(2, 1)]),
            Err(RulesError::DuplicateTile { tile: t(1, 2) })
        );
    }

    #[test]
    fn test_contains() {
        let board = Board::from_tiles([t(1, 2), t(2, 6)]).unwrap();
        assert!(board.contains(t(6, 2)));
        assert!(!board.contains(t(6, 6)));
    }

    #[test]
    fn test_serde_validates_chain() {
        let board = Board::from_tiles([t(1, 2), t(2, 6)]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
        assert!(serde_json::from_str::<Board>("[[1,2],[3,4]]").is_err());
    }
}
