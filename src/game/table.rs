//! The live game: authoritative hands, board and boneyard.
//!
//! Each turn the side to move either plays a tile, draws one tile from the
//! boneyard (only when it cannot play), or passes when the boneyard is also
//! empty. Every play, draw or pass hands the turn to the opponent. On the
//! computer's turn the table snapshots itself into a [`GameState`], asks
//! the search for a tile and commits it with [`Board::place`].

use serde::{Deserialize, Serialize};
use tracing::info;

use super::config::GameConfig;
use super::set::DominoSet;
use crate::core::{Board, GameRng, GameState, Hand, Placement, Side, Tile};
use crate::error::{GameError, RulesError};
use crate::rules::{can_play, game_result, legal_moves, GameResult, Moves};
use crate::search::{Minimax, SearchStats};

/// What the computer did with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComputerAction {
    Played(Placement),
    /// No tile fit; drew this one and ended the turn.
    Drew(Tile),
    /// No tile fit and the boneyard was empty.
    Passed,
}

/// A two-seat game of block dominoes.
pub struct Game {
    config: GameConfig,
    board: Board,
    player_hand: Hand,
    computer_hand: Hand,
    boneyard: DominoSet,
    turn: Side,
    search: Minimax,
}

impl Game {
    /// Shuffle a fresh set and deal the player's hand, then the computer's.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let mut boneyard = DominoSet::new(config.include_blanks, GameRng::new(config.seed));
        let player_hand = Hand::from_tiles(boneyard.draw_tiles(config.hand_size))?;
        let computer_hand = Hand::from_tiles(boneyard.draw_tiles(config.hand_size))?;
        let turn = if config.computer_starts {
            Side::Computer
        } else {
            Side::Player
        };

        info!(
            seed = config.seed,
            hand_size = config.hand_size,
            boneyard = boneyard.len(),
            first = %turn,
            "dealt new game"
        );

        Ok(Self {
            search: Minimax::new(config.search.clone()),
            config,
            board: Board::new(),
            player_hand,
            computer_hand,
            boneyard,
            turn,
        })
    }

    /// Resume from an arbitrary position.
    ///
    /// The boneyard must not share tiles with the board or either hand.
    pub fn from_position(
        config: GameConfig,
        state: GameState,
        boneyard: DominoSet,
    ) -> Result<Self, GameError> {
        for tile in boneyard.iter() {
            if state.board().contains(tile)
                || state.player_hand().contains(tile)
                || state.computer_hand().contains(tile)
            {
                return Err(RulesError::DuplicateTile { tile }.into());
            }
        }

        Ok(Self {
            search: Minimax::new(config.search.clone()),
            config,
            board: state.board().clone(),
            player_hand: state.player_hand().clone(),
            computer_hand: state.computer_hand().clone(),
            boneyard,
            turn: state.turn(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
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
    pub fn boneyard_len(&self) -> usize {
        self.boneyard.len()
    }

    /// Statistics from the computer's most recent search.
    #[must_use]
    pub fn search_stats(&self) -> &SearchStats {
        self.search.stats()
    }

    /// Legal tiles for `side` on the current board.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> Moves {
        legal_moves(self.hand(side), &self.board)
    }

    /// `Some` once a hand is empty or the table is blocked.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        game_result(
            &self.board,
            &self.player_hand,
            &self.computer_hand,
            self.boneyard.is_empty(),
        )
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Search view of the table with the computer to move.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        GameState::from_trusted(
            self.board.clone(),
            self.player_hand.clone(),
            self.computer_hand.clone(),
            Side::Computer,
        )
    }

    /// Play the player's tile at `index` in hand order.
    pub fn play_player(&mut self, index: usize) -> Result<Placement, GameError> {
        self.expect_turn(Side::Player)?;

        let tile = self.player_hand.get(index).ok_or(GameError::InvalidIndex {
            index,
            len: self.player_hand.len(),
        })?;
        self.commit(Side::Player, tile)
    }

    /// Draw for the player when nothing in hand fits.
    ///
    /// Returns `None` if the boneyard is empty, in which case the player
    /// passes.
    pub fn draw_for_player(&mut self) -> Result<Option<Tile>, GameError> {
        self.expect_turn(Side::Player)?;

        if can_play(&self.player_hand, &self.board) {
            return Err(GameError::MustPlay);
        }
        self.draw_or_pass(Side::Player)
    }

    /// Let the search play the computer's turn.
    pub fn computer_turn(&mut self) -> Result<ComputerAction, GameError> {
        self.expect_turn(Side::Computer)?;

        let snapshot = self.snapshot();
        match self.search.choose(&snapshot) {
            Some(tile) => {
                let placement = self.commit(Side::Computer, tile)?;
                Ok(ComputerAction::Played(placement))
            }
            None => Ok(match self.draw_or_pass(Side::Computer)? {
                Some(tile) => ComputerAction::Drew(tile),
                None => ComputerAction::Passed,
            }),
        }
    }

    fn expect_turn(&self, side: Side) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.turn != side {
            return Err(GameError::NotYourTurn(self.turn));
        }
        Ok(())
    }

    fn commit(&mut self, side: Side, tile: Tile) -> Result<Placement, GameError> {
        if self.board.fit(tile).is_none() {
            return Err(GameError::IllegalMove(tile));
        }

        let held = self.hand_mut(side).remove(tile, side)?;
        let placement = self.board.place(held)?;

        info!(side = %side, tile = %placement.tile, end = %placement.end, "tile played");
        self.turn = side.opponent();
        Ok(placement)
    }

    fn draw_or_pass(&mut self, side: Side) -> Result<Option<Tile>, GameError> {
        let drawn = self.boneyard.draw_tile();

        match drawn {
            Some(tile) => {
                self.hand_mut(side).push(tile)?;
                info!(side = %side, tile = %tile, boneyard = self.boneyard.len(), "drew tile");
            }
            None => info!(side = %side, "boneyard empty, passing"),
        }

        self.turn = side.opponent();
        Ok(drawn)
    }
}
