//! A player's tiles.
//!
//! Iteration order is insertion (deal/draw) order, and removing a tile keeps
//! the relative order of the rest. Move generation and search tie-breaks
//! inherit this order, so it is part of the contract.

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::side::Side;
use super::tile::Tile;
use crate::error::RulesError;

/// Insertion-ordered set of tiles held by one side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Hand {
    tiles: Vector<Tile>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand, rejecting repeated pieces.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Result<Self, RulesError> {
        let mut hand = Self::new();
        for tile in tiles {
            hand.push(tile)?;
        }
        Ok(hand)
    }

    /// Add a tile at the end of the hand.
    pub fn push(&mut self, tile: Tile) -> Result<(), RulesError> {
        if self.contains(tile) {
            return Err(RulesError::DuplicateTile { tile });
        }
        self.tiles.push_back(tile);
        Ok(())
    }

    /// Remove a piece (any orientation), returning it as it was held.
    pub fn remove(&mut self, tile: Tile, side: Side) -> Result<Tile, RulesError> {
        self.take(tile).ok_or(RulesError::TileNotInHand { tile, side })
    }

    pub(crate) fn take(&mut self, tile: Tile) -> Option<Tile> {
        let index = self.position(tile)?;
        Some(self.tiles.remove(index))
    }

    /// Index of a piece (any orientation).
    #[must_use]
    pub fn position(&self, tile: Tile) -> Option<usize> {
        self.tiles.iter().position(|t| t.same_piece(tile))
    }

    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.position(tile).is_some()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    /// Sum of all pips held.
    #[must_use]
    pub fn pip_total(&self) -> u32 {
        self.tiles.iter().map(|t| u32::from(t.pip_sum())).sum()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Tile>> for Hand {
    type Error = RulesError;

    fn try_from(tiles: Vec<Tile>) -> Result<Self, Self::Error> {
        Hand::from_tiles(tiles)
    }
}

impl From<Hand> for Vec<Tile> {
    fn from(hand: Hand) -> Self {
        hand.tiles.into_iter().collect()
    }
}
