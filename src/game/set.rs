//! Tile set construction and the boneyard.

use crate::core::{GameRng, Tile, MAX_PIP};
use crate::error::RulesError;

/// Every tile of a double-six set in generation order, `[0|0]` or `[1|1]`
/// first.
#[must_use]
pub fn standard_set(include_blanks: bool) -> Vec<Tile> {
    let low = if include_blanks { 0 } else { 1 };
    (low..=MAX_PIP)
        .flat_map(|i| (i..=MAX_PIP).map(move |j| Tile::pair(i, j)))
        .collect()
}

/// The undrawn pool. Shrinks on every draw and never refills.
#[derive(Clone, Debug)]
pub struct DominoSet {
    tiles: Vec<Tile>,
    rng: GameRng,
}

impl DominoSet {
    /// A shuffled standard set.
    #[must_use]
    pub fn new(include_blanks: bool, mut rng: GameRng) -> Self {
        let mut tiles = standard_set(include_blanks);
        rng.shuffle(&mut tiles);
        Self { tiles, rng }
    }

    /// A pool with exactly these tiles in this order, unshuffled.
    pub fn from_tiles(tiles: Vec<Tile>, rng: GameRng) -> Result<Self, RulesError> {
        for (i, tile) in tiles.iter().enumerate() {
            if tiles[i + 1..].iter().any(|other| other.same_piece(*tile)) {
                return Err(RulesError::DuplicateTile { tile: *tile });
            }
        }
        Ok(Self { tiles, rng })
    }

    /// Take up to `count` tiles from the front of the pool.
    pub fn draw_tiles(&mut self, count: usize) -> Vec<Tile> {
        let count = count.min(self.tiles.len());
        self.tiles.drain(..count).collect()
    }

    /// Take one tile at random, or `None` when the pool is empty.
    pub fn draw_tile(&mut self) -> Option<Tile> {
        if self.tiles.is_empty() {
            return None;
        }
        let index = self.rng.gen_range_usize(0..self.tiles.len());
        Some(self.tiles.remove(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set_sizes() {
        let full = standard_set(true);
        assert_eq!(full.len(), 28);
        assert_eq!(full[0], Tile::new(0, 0).unwrap());
        assert_eq!(full[27], Tile::new(6, 6).unwrap());

        let no_blanks = standard_set(false);
        assert_eq!(no_blanks.len(), 21);
        assert!(no_blanks.iter().all(|t| !t.matches(0)));
    }

    #[test]
    fn test_standard_set_is_unique() {
        let full = standard_set(true);
        let mut keys: Vec<_> = full.iter().map(|t| t.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 28);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a: Vec<_> = DominoSet::new(true, GameRng::new(3)).iter().collect();
        let b: Vec<_> = DominoSet::new(true, GameRng::new(3)).iter().collect();
        let c: Vec<_> = DominoSet::new(true, GameRng::new(4)).iter().collect();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_draws_shrink_the_pool() {
        let mut set = DominoSet::new(true, GameRng::new(1));

        let hand = set.draw_tiles(7);
        assert_eq!(hand.len(), 7);
        assert_eq!(set.len(), 21);
        assert!(hand.iter().all(|t| !set.iter().any(|s| s.same_piece(*t))));

        let tile = set.draw_tile().unwrap();
        assert_eq!(set.len(), 20);
        assert!(!set.iter().any(|s| s.same_piece(tile)));
    }

    #[test]
    fn test_empty_pool() {
        let mut set = DominoSet::from_tiles(vec![Tile::new(1, 2).unwrap()], GameRng::new(0)).unwrap();

        assert_eq!(set.draw_tiles(5).len(), 1);
        assert!(set.is_empty());
        assert_eq!(set.draw_tile(), None);
    }

    #[test]
    fn test_from_tiles_rejects_duplicates() {
        let tiles = vec![Tile::new(1, 2).unwrap(), Tile::new(2, 1).unwrap()];
        assert!(DominoSet::from_tiles(tiles, GameRng::new(0)).is_err());
    }
}
