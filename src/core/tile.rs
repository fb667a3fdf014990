//! Domino tiles.
//!
//! A tile is a pair of pip values in `0..=6`. The pair is unordered as a
//! piece (`[3|5]` and `[5|3]` are the same domino) but ordered as it lies in
//! the chain: `left` touches the previous tile, `right` the next one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Highest pip value in a double-six set.
pub const MAX_PIP: u8 = 6;

/// One domino, oriented as it would lie in the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Tile {
    left: u8,
    right: u8,
}

impl Tile {
    /// Create a tile, rejecting pip values above [`MAX_PIP`].
    pub fn new(left: u8, right: u8) -> Result<Self, RulesError> {
        if left > MAX_PIP || right > MAX_PIP {
            return Err(RulesError::PipOutOfRange { left, right });
        }
        Ok(Self { left, right })
    }

    /// Caller guarantees both values are in range.
    pub(crate) const fn pair(left: u8, right: u8) -> Self {
        debug_assert!(left <= MAX_PIP && right <= MAX_PIP);
        Self { left, right }
    }

    #[inline]
    #[must_use]
    pub const fn left(self) -> u8 {
        self.left
    }

    #[inline]
    #[must_use]
    pub const fn right(self) -> u8 {
        self.right
    }

    /// True if either end shows `n`.
    #[inline]
    #[must_use]
    pub const fn matches(self, n: u8) -> bool {
        self.left == n || self.right == n
    }

    #[inline]
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.left == self.right
    }

    /// Swap left and right in place.
    #[inline]
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    /// This tile with left and right swapped.
    #[inline]
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// Same physical domino, ignoring orientation.
    #[inline]
    #[must_use]
    pub const fn same_piece(self, other: Tile) -> bool {
        (self.left == other.left && self.right == other.right)
            || (self.left == other.right && self.right == other.left)
    }

    /// Orientation-free identity: `(low, high)`.
    #[inline]
    #[must_use]
    pub const fn key(self) -> (u8, u8) {
        if self.left <= self.right {
            (self.left, self.right)
        } else {
            (self.right, self.left)
        }
    }

    #[inline]
    #[must_use]
    pub const fn pip_sum(self) -> u8 {
        self.left + self.right
    }

    /// The value opposite `n`, if the tile shows `n` at all.
    #[must_use]
    pub const fn other_end(self, n: u8) -> Option<u8> {
        if self.left == n {
            Some(self.right)
        } else if self.right == n {
            Some(self.left)
        } else {
            None
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

impl TryFrom<(u8, u8)> for Tile {
    type Error = RulesError;

    fn try_from((left, right): (u8, u8)) -> Result<Self, Self::Error> {
        Tile::new(left, right)
    }
}

impl From<Tile> for (u8, u8) {
    fn from(tile: Tile) -> Self {
        (tile.left, tile.right)
    }
}

/// Accepts `3|5`, `[3|5]`, `3-5`, `3,5` and `35`. Orientation is kept.
impl FromStr for Tile {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || RulesError::TileParse { input: s.to_string() };

        let digits: Vec<u8> = s
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .split(|c: char| c == '|' || c == '-' || c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .flat_map(|part| {
                if part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit()) {
                    part.bytes().map(|b| Some(b - b'0')).collect::<Vec<_>>()
                } else {
                    vec![part.parse::<u8>().ok()]
                }
            })
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(bad)?;

        match digits.as_slice() {
            &[left, right] => Tile::new(left, right),
            _ => Err(bad()),
        }
    }
}

/// Which open end of the chain a tile attaches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum End {
    Left,
    Right,
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            End::Left => write!(f, "left"),
            End::Right => write!(f, "right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(left: u8, right: u8) -> Tile {
        Tile::new(left, right).unwrap()
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            Tile::new(7, 2),
            Err(RulesError::PipOutOfRange { left: 7, right: 2 })
        );
        assert!(Tile::new(6, 6).is_ok());
        assert!(Tile::new(0, 0).is_ok());
    }

    #[test]
    fn test_matches() {
        let tile = t(3, 5);
        assert!(tile.matches(3));
        assert!(tile.matches(5));
        assert!(!tile.matches(4));
    }

    #[test]
    fn test_is_double() {
        assert!(t(4, 4).is_double());
        assert!(!t(4, 2).is_double());
    }

    #[test]
    fn test_flip_is_involution() {
        let mut tile = t(1, 6);
        tile.flip();
        assert_eq!((tile.left(), tile.right()), (6, 1));
        tile.flip();
        assert_eq!(tile, t(1, 6));
    }

    #[test]
    fn test_same_piece_ignores_orientation() {
        assert!(t(2, 5).same_piece(t(5, 2)));
        assert!(!t(2, 5).same_piece(t(2, 6)));
        assert_eq!(t(5, 2).key(), (2, 5));
    }

    #[test]
    fn test_other_end() {
        assert_eq!(t(2, 5).other_end(2), Some(5));
        assert_eq!(t(2, 5).other_end(5), Some(2));
        assert_eq!(t(2, 5).other_end(3), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(t(0, 6).to_string(), "[0|6]");
    }

    #[test]
    fn test_parse() {
        assert_eq!("3|5".parse::<Tile>().unwrap(), t(3, 5));
        assert_eq!("[6|1]".parse::<Tile>().unwrap(), t(6, 1));
        assert_eq!("2-4".parse::<Tile>().unwrap(), t(2, 4));
        assert_eq!("42".parse::<Tile>().unwrap(), t(4, 2));
        assert!("9|1".parse::<Tile>().is_err());
        assert!("abc".parse::<Tile>().is_err());
        assert!("1|2|3".parse::<Tile>().is_err());
    }

    #[test]
    fn test_serde_rejects_bad_pips() {
        let json = serde_json::to_string(&t(3, 4)).unwrap();
        assert_eq!(json, "[3,4]");
        assert_eq!(serde_json::from_str::<Tile>(&json).unwrap(), t(3, 4));
        assert!(serde_json::from_str::<Tile>("[8,1]").is_err());
    }
}
