//! # domino-ai
//!
//! Two-player block dominoes against an exhaustive minimax opponent.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not aliases**: the search works on immutable
//!    `GameState` values. Hands and chain are `im` vectors, so every
//!    successor is an independent O(1) clone.
//!
//! 2. **Deterministic**: no hidden randomness in search. Tie-breaks follow
//!    hand order, which is deal/draw order. Dealing takes an explicit seed.
//!
//! 3. **Checked contracts**: placing a tile that fits neither end is an
//!    error, never a silent no-op.
//!
//! ## Modules
//!
//! - `core`: tiles, board chain, hands, sides, snapshots, RNG
//! - `rules`: legal move generation, end-of-game detection
//! - `search`: evaluator and minimax move selection
//! - `game`: tile set, boneyard and the live table
//!
//! The search never models the boneyard: a side with no legal tile ends
//! the hypothetical line instead of drawing.

pub mod core;
pub mod error;
pub mod rules;
pub mod search;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Board, End, GameRng, GameState, Hand, Placement, Side, Tile, MAX_PIP};

pub use crate::error::{ConfigError, GameError, RulesError};

pub use crate::rules::{can_play, game_result, legal_moves, GameResult, Moves};

pub use crate::search::{
    evaluate, find_best_move, DepthPolicy, Evaluator, Minimax, SearchConfig, SearchStats,
    TileCountEvaluator,
};

pub use crate::game::{standard_set, ComputerAction, DominoSet, Game, GameConfig};
