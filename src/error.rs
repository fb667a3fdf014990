//! Error types.
//!
//! - `RulesError`: a request that would break a tile, chain or hand invariant
//! - `ConfigError`: unusable game configuration
//! - `GameError`: a live-game request that is not allowed right now

use thiserror::Error;

use crate::core::{Side, Tile};

/// Violation of a tile, chain or hand invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("pip values out of range: {left}|{right} (expected 0-6)")]
    PipOutOfRange { left: u8, right: u8 },

    #[error("cannot parse tile from {input:?}")]
    TileParse { input: String },

    #[error("tile {tile} matches neither chain end ({left}, {right})")]
    IllegalPlacement { tile: Tile, left: u8, right: u8 },

    #[error("tile {tile} is not in the {side}'s hand")]
    TileNotInHand { tile: Tile, side: Side },

    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: Tile },

    #[error("chain broken after position {index}")]
    BrokenChain { index: usize },
}

/// Unusable game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("hand size {hand_size} cannot be dealt twice from a {set_size}-tile set")]
    InvalidHandSize { hand_size: usize, set_size: usize },

    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A live-game request that cannot be honored in the current position.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("no tile at index {index} (hand holds {len})")]
    InvalidIndex { index: usize, len: usize },

    #[error("it is the {0}'s turn")]
    NotYourTurn(Side),

    #[error("{0} does not fit either end of the board")]
    IllegalMove(Tile),

    #[error("a playable tile is in hand; drawing is not allowed")]
    MustPlay,

    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
