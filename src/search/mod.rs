//! Adversarial search for the computer's move.
//!
//! ```
//! use domino_ai::core::{Board, GameState, Hand, Side, Tile};
//! use domino_ai::search::find_best_move;
//!
//! let state = GameState::new(
//!     Board::from_tiles([Tile::new(2, 5)?])?,
//!     Hand::from_tiles([Tile::new(6, 6)?])?,
//!     Hand::from_tiles([Tile::new(5, 6)?, Tile::new(1, 4)?])?,
//!     Side::Computer,
//! )?;
//!
//! assert_eq!(find_best_move(&state, 2), Some(Tile::new(5, 6)?));
//! # Ok::<(), domino_ai::RulesError>(())
//! ```
//!
//! `Minimax` carries configuration, a pluggable [`Evaluator`] and per-search
//! statistics; `find_best_move` is the one-shot exhaustive form.

pub mod config;
pub mod evaluator;
pub mod minimax;
pub mod stats;

pub use config::{DepthPolicy, SearchConfig};
pub use evaluator::{evaluate, Evaluator, TileCountEvaluator};
pub use minimax::{find_best_move, Minimax};
pub use stats::SearchStats;
