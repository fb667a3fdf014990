//! Live play around the search: the tile set, dealing and turn steps.
//!
//! `Game` owns the mutable hands, board and boneyard. It only exposes the
//! moves a turn may make; driving the loop and talking to a human are left
//! to the caller (see the `domino` binary).

pub mod config;
pub mod set;
pub mod table;

pub use config::GameConfig;
pub use set::{standard_set, DominoSet};
pub use table::{ComputerAction, Game};
