//! Legal move generation.

use smallvec::SmallVec;

use crate::core::{Board, Hand, Tile};

/// Legal tiles for one hand. Opening hands hold seven tiles.
pub type Moves = SmallVec<[Tile; 8]>;

/// Tiles in `hand` that fit either open end, in hand order.
///
/// On an empty board every tile is legal. Never fails; a stuck hand simply
/// yields no moves.
#[must_use]
pub fn legal_moves(hand: &Hand, board: &Board) -> Moves {
    hand.iter().filter(|&tile| board.fit(tile).is_some()).collect()
}

/// True if `hand` holds at least one legal tile.
#[must_use]
pub fn can_play(hand: &Hand, board: &Board) -> bool {
    hand.iter().any(|tile| board.fit(tile).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(left: u8, right: u8) -> Tile {
        Tile::new(left, right).unwrap()
    }

    #[test]
    fn test_empty_board_allows_whole_hand() {
        let hand = Hand::from_tiles([t(6, 6), t(0, 1), t(3, 2)]).unwrap();

        let moves = legal_moves(&hand, &Board::new());
        assert_eq!(moves.to_vec(), hand.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_filters_by_either_end() {
        let board = Board::from_tiles([t(2, 5)]).unwrap();
        let hand = Hand::from_tiles([t(5, 6), t(1, 4), t(2, 2), t(3, 3)]).unwrap();

        assert_eq!(legal_moves(&hand, &board).to_vec(), vec![t(5, 6), t(2, 2)]);
        assert!(can_play(&hand, &board));
    }

    #[test]
    fn test_stuck_hand() {
        let board = Board::from_tiles([t(2, 5)]).unwrap();
        let hand = Hand::from_tiles([t(1, 4), t(6, 6)]).unwrap();

        assert!(legal_moves(&hand, &board).is_empty());
        assert!(!can_play(&hand, &board));
        assert!(!can_play(&Hand::new(), &Board::new()));
    }
}
