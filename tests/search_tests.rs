//! Search integration tests: the documented scenarios plus tie-break and
//! pruning behaviour.

use domino_ai::search::{evaluate, find_best_move, Minimax, SearchConfig};
use domino_ai::{legal_moves, Board, GameState, Hand, Side, Tile};

fn t(left: u8, right: u8) -> Tile {
    Tile::new(left, right).unwrap()
}

fn state(board: &[Tile], player: &[Tile], computer: &[Tile]) -> GameState {
    GameState::new(
        Board::from_tiles(board.iter().copied()).unwrap(),
        Hand::from_tiles(player.iter().copied()).unwrap(),
        Hand::from_tiles(computer.iter().copied()).unwrap(),
        Side::Computer,
    )
    .unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_only_tile_on_empty_board() {
    let s = state(&[], &[], &[t(3, 3)]);
    assert_eq!(find_best_move(&s, 1), Some(t(3, 3)));
}

#[test]
fn test_single_legal_reply_and_its_score() {
    let s = state(&[t(2, 5)], &[t(6, 6)], &[t(5, 6), t(1, 4)]);

    assert_eq!(
        legal_moves(s.computer_hand(), s.board()).to_vec(),
        vec![t(5, 6)]
    );

    let mut search = Minimax::default();
    assert_eq!(search.find_best_move(&s, 2), Some(t(5, 6)));

    // Right after the move both sides hold one tile.
    let after = s.play(t(5, 6)).unwrap();
    assert_eq!(evaluate(&after), 0);

    // The player's [6|6] reply empties their hand: 1 - 0.
    assert_eq!(search.last_score(), Some(1));
}

#[test]
fn test_equal_scores_keep_hand_order() {
    let s = state(&[], &[t(5, 5)], &[t(1, 2), t(3, 4)]);

    let mut search = Minimax::default();
    let scores = search.evaluate_moves(&s, 2);
    assert_eq!(scores, vec![(t(1, 2), 0), (t(3, 4), 0)]);

    assert_eq!(search.find_best_move(&s, 2), Some(t(1, 2)));

    let swapped = state(&[], &[t(5, 5)], &[t(3, 4), t(1, 2)]);
    assert_eq!(find_best_move(&swapped, 2), Some(t(3, 4)));
}

#[test]
fn test_no_matching_tile_means_no_move() {
    let s = state(&[t(2, 5)], &[t(3, 3)], &[t(1, 4), t(6, 6)]);
    assert_eq!(find_best_move(&s, 2), None);
}

// =============================================================================
// Search Semantics
// =============================================================================

#[test]
fn test_search_does_not_mutate_input() {
    let s = state(&[t(3, 4)], &[t(4, 4), t(0, 3)], &[t(4, 1), t(3, 5), t(6, 6)]);
    let before = s.clone();

    find_best_move(&s, 3);

    assert_eq!(s, before);
}

#[test]
fn test_repeated_searches_agree() {
    let s = state(
        &[t(3, 4)],
        &[t(4, 4), t(0, 3), t(1, 5), t(2, 6)],
        &[t(4, 1), t(3, 5), t(6, 6), t(0, 0)],
    );

    let first = find_best_move(&s, 4);
    for _ in 0..5 {
        assert_eq!(find_best_move(&s, 4), first);
    }
}

#[test]
fn test_choose_uses_hand_size_depth() {
    let s = state(&[t(0, 1)], &[t(2, 4), t(5, 5)], &[t(0, 3), t(1, 2), t(6, 6)]);

    let mut by_hand = Minimax::default();
    let mut explicit = Minimax::default();

    let chosen = by_hand.choose(&s);
    assert_eq!(chosen, explicit.find_best_move(&s, 3));
    assert_eq!(by_hand.last_score(), explicit.last_score());

    let mut fixed = Minimax::new(SearchConfig::default().with_depth(1));
    assert_eq!(fixed.choose(&s), Some(t(0, 3)));
}

#[test]
fn test_stuck_opponent_ends_the_line() {
    // After [5|6] the ends are 2,6 and the player's [0|0] does not fit:
    // the line stops there instead of drawing.
    let s = state(&[t(2, 5)], &[t(0, 0), t(1, 1)], &[t(5, 6), t(3, 3)]);

    let mut search = Minimax::default();
    let scores = search.evaluate_moves(&s, 6);
    assert_eq!(scores, vec![(t(5, 6), -1)]);
    assert_eq!(search.stats().leaves, 1);
}

#[test]
fn test_alpha_beta_prunes_without_changing_choice() {
    let s = state(
        &[],
        &[t(0, 1), t(1, 3), t(2, 2), t(4, 6), t(3, 5)],
        &[t(1, 2), t(2, 4), t(3, 3), t(0, 5), t(5, 6)],
    );

    let mut plain = Minimax::default();
    let mut pruned = Minimax::new(SearchConfig::default().with_alpha_beta(true));

    assert_eq!(plain.find_best_move(&s, 5), pruned.find_best_move(&s, 5));
    assert_eq!(plain.last_score(), pruned.last_score());
    assert!(pruned.stats().nodes <= plain.stats().nodes);
}
