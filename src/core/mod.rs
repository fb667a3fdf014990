//! Core domino types: tiles, the chain, hands, seats, snapshots, RNG.
//!
//! Everything here is plain data with checked constructors. Search and the
//! live table both build on these types.

pub mod tile;
pub mod side;
pub mod hand;
pub mod board;
pub mod state;
pub mod rng;

pub use tile::{End, Tile, MAX_PIP};
pub use side::Side;
pub use hand::Hand;
pub use board::{Board, Placement};
pub use state::GameState;
pub use rng::GameRng;
