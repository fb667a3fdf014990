//! Search snapshot of a position.
//!
//! `GameState` is an immutable value: {board, player hand, computer hand,
//! side to move}. Successors are fresh values that share structure with
//! their parent through `im`, so no branch of a search can see another
//! branch's changes. The undrawn pool is deliberately absent.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::hand::Hand;
use super::side::Side;
use super::tile::{End, Tile};
use crate::error::RulesError;
use crate::rules::{legal_moves, Moves};

/// Immutable {board, hands, turn} snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateParts")]
pub struct GameState {
    board: Board,
    player_hand: Hand,
    computer_hand: Hand,
    turn: Side,
}

#[derive(Deserialize)]
struct StateParts {
    board: Board,
    player_hand: Hand,
    computer_hand: Hand,
    turn: Side,
}

impl TryFrom<StateParts> for GameState {
    type Error = RulesError;

    fn try_from(parts: StateParts) -> Result<Self, Self::Error> {
        GameState::new(parts.board, parts.player_hand, parts.computer_hand, parts.turn)
    }
}

impl GameState {
    /// Create a snapshot.
    ///
    /// Rejects any piece that appears in more than one of the board and the
    /// two hands. Empty hands and an empty board are valid.
    pub fn new(
        board: Board,
        player_hand: Hand,
        computer_hand: Hand,
        turn: Side,
    ) -> Result<Self, RulesError> {
        let mut seen = FxHashSet::default();
        for tile in board.iter().chain(player_hand.iter()).chain(computer_hand.iter()) {
            if !seen.insert(tile.key()) {
                return Err(RulesError::DuplicateTile { tile });
            }
        }

        Ok(Self::from_trusted(board, player_hand, computer_hand, turn))
    }

    /// Skips disjointness checks; the live table maintains them itself.
    pub(crate) fn from_trusted(
        board: Board,
        player_hand: Hand,
        computer_hand: Hand,
        turn: Side,
    ) -> Self {
        Self {
            board,
            player_hand,
            computer_hand,
            turn,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    #[must_use]
    pub fn computer_hand(&self) -> &Hand {
        &self.computer_hand
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::Player => &self.player_hand,
            Side::Computer => &self.computer_hand,
        }
    }

    fn hand_mut(&mut self, side: Side) -> &mut Hand {
        match side {
            Side::Player => &mut self.player_hand,
            Side::Computer => &mut self.computer_hand,
        }
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.turn == Side::Player
    }

    /// Hand of the side to move.
    #[must_use]
    pub fn active_hand(&self) -> &Hand {
        self.hand(self.turn)
    }

    /// The same position with a different side to move.
    #[must_use]
    pub fn with_turn(&self, turn: Side) -> Self {
        Self {
            turn,
            ..self.clone()
        }
    }

    /// Legal tiles for the side to move, in hand order.
    #[must_use]
    pub fn legal_moves(&self) -> Moves {
        legal_moves(self.active_hand(), &self.board)
    }

    /// Either hand is empty or the side to move is stuck.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.player_hand.is_empty()
            || self.computer_hand.is_empty()
            || !self.active_hand().iter().any(|t| self.board.fit(t).is_some())
    }

    /// Successor after the side to move plays `tile`.
    pub fn play(&self, tile: Tile) -> Result<Self, RulesError> {
        let held = self
            .active_hand()
            .iter()
            .find(|t| t.same_piece(tile))
            .ok_or(RulesError::TileNotInHand { tile, side: self.turn })?;

        match self.board.fit(held) {
            Some(end) => Ok(self.child(held, end)),
            None => {
                let (left, right) = self.board.ends().unwrap_or_default();
                Err(RulesError::IllegalPlacement { tile: held, left, right })
            }
        }
    }

    /// Every legal `(tile, successor)` pair, in hand order.
    pub fn successors(&self) -> impl Iterator<Item = (Tile, GameState)> + '_ {
        self.active_hand()
            .iter()
            .filter_map(move |tile| self.board.fit(tile).map(|end| (tile, self.child(tile, end))))
    }

    fn child(&self, tile: Tile, end: End) -> Self {
        let mover = self.turn;
        let mut next = self.with_turn(mover.opponent());
        next.board.attach(tile, end);
        next.hand_mut(mover).take(tile);
        next
    }
}
