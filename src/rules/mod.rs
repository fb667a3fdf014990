//! Block-dominoes rules shared by the search and the live table.
//!
//! - `movegen`: which tiles a hand may play
//! - `outcome`: when a game is won or blocked

pub mod movegen;
pub mod outcome;

pub use movegen::{can_play, legal_moves, Moves};
pub use outcome::{game_result, GameResult};
