//! Position scoring from the computer's point of view.

use crate::core::GameState;

/// Scores a terminal or depth-limited position. Higher favours the computer.
///
/// Implementations must be pure: the same state always yields the same score.
pub trait Evaluator {
    fn evaluate(&self, state: &GameState) -> i32;
}

/// `computer tiles − player tiles`.
///
/// Only tile counts matter; chain shape, pips and mobility are ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct TileCountEvaluator;

impl Evaluator for TileCountEvaluator {
    fn evaluate(&self, state: &GameState) -> i32 {
        evaluate(state)
    }
}

/// Tile-count score of `state`.
#[must_use]
pub fn evaluate(state: &GameState) -> i32 {
    hand_len(state.computer_hand().len()) - hand_len(state.player_hand().len())
}

fn hand_len(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}
