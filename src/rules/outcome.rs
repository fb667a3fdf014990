//! End-of-game detection for the live table.

use serde::{Deserialize, Serialize};

use super::movegen::can_play;
use crate::core::{Board, Hand, Side};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The side that emptied its hand.
    Winner(Side),
    /// Blocked: nobody can play and the boneyard is empty.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

/// Decide whether the game is over.
///
/// Returns `None` while play can continue, either by a legal move or by
/// drawing from a non-empty boneyard.
#[must_use]
pub fn game_result(
    board: &Board,
    player_hand: &Hand,
    computer_hand: &Hand,
    boneyard_empty: bool,
) -> Option<GameResult> {
    if player_hand.is_empty() {
        return Some(GameResult::Winner(Side::Player));
    }
    if computer_hand.is_empty() {
        return Some(GameResult::Winner(Side::Computer));
    }
    if boneyard_empty && !can_play(player_hand, board) && !can_play(computer_hand, board) {
        return Some(GameResult::Draw);
    }
    None
}
