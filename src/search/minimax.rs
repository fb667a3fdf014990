//! Depth-limited minimax over block-dominoes positions.
//!
//! The computer maximizes, the player minimizes. A node is a leaf when
//! either hand is empty, the side to move has no legal tile, or the depth
//! budget is spent. Hypothetical play never draws from the boneyard: a
//! stuck side ends the line, even though the live game would let it draw.
//!
//! Root ties keep the first move in hand order.

use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{GameState, Side, Tile};

use super::config::SearchConfig;
use super::evaluator::{Evaluator, TileCountEvaluator};
use super::stats::SearchStats;

/// Minimax search context.
///
/// Generic over the evaluator. Owns the configuration and the statistics
/// of the most recent search.
pub struct Minimax<EV: Evaluator = TileCountEvaluator> {
    config: SearchConfig,
    evaluator: EV,
    stats: SearchStats,
    last_score: Option<i32>,
}

impl Minimax<TileCountEvaluator> {
    /// Create a search using the tile-count evaluator.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            evaluator: TileCountEvaluator,
            stats: SearchStats::default(),
            last_score: None,
        }
    }
}

impl Default for Minimax<TileCountEvaluator> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<EV: Evaluator> Minimax<EV> {
    /// Swap in a custom evaluator.
    pub fn with_evaluator<E: Evaluator>(self, evaluator: E) -> Minimax<E> {
        Minimax {
            config: self.config,
            evaluator,
            stats: self.stats,
            last_score: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Score of the move returned by the last search, if any.
    #[must_use]
    pub fn last_score(&self) -> Option<i32> {
        self.last_score
    }

    /// Pick a move at the depth the config prescribes for this position.
    pub fn choose(&mut self, state: &GameState) -> Option<Tile> {
        let depth = self.config.depth_for(state.computer_hand().len());
        self.find_best_move(state, depth)
    }

    /// Best computer move from `state`, searching `depth` plies.
    ///
    /// The computer is treated as the side to move regardless of
    /// `state.turn()`. Returns the tile as it is held in hand, or `None` if
    /// nothing fits; the caller then draws instead. A depth of 0 is treated
    /// as 1.
    pub fn find_best_move(&mut self, state: &GameState, depth: u32) -> Option<Tile> {
        let start = Instant::now();
        self.stats.reset();
        self.last_score = None;

        let root = state.with_turn(Side::Computer);
        let child_depth = depth.max(1) - 1;
        let mut best: Option<(Tile, i32)> = None;

        for (tile, child) in root.successors() {
            self.stats.candidates += 1;

            // Only a strictly better score replaces `best`; it bounds the window.
            let alpha = match best {
                Some((_, score)) if self.config.alpha_beta => score,
                _ => i32::MIN,
            };
            let score = self.minimax(&child, child_depth, 1, alpha, i32::MAX);
            trace!(%tile, score, "root candidate");

            if best.map_or(true, |(_, s)| score > s) {
                best = Some((tile, score));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.last_score = best.map(|(_, score)| score);

        debug!(
            depth,
            candidates = self.stats.candidates,
            nodes = self.stats.nodes,
            score = ?self.last_score,
            best = ?best.map(|(tile, _)| tile.to_string()),
            "minimax search finished"
        );

        best.map(|(tile, _)| tile)
    }

    /// Every root move with its exact minimax score, in hand order.
    pub fn evaluate_moves(&mut self, state: &GameState, depth: u32) -> Vec<(Tile, i32)> {
        self.stats.reset();

        let root = state.with_turn(Side::Computer);
        let child_depth = depth.max(1) - 1;

        root.successors()
            .map(|(tile, child)| {
                self.stats.candidates += 1;
                (tile, self.minimax(&child, child_depth, 1, i32::MIN, i32::MAX))
            })
            .collect()
    }

    fn minimax(&mut self, state: &GameState, depth: u32, ply: u32, mut alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(ply);

        if depth == 0 || state.is_terminal() {
            self.stats.leaves += 1;
            return self.evaluator.evaluate(state);
        }

        let pruning = self.config.alpha_beta;

        if state.turn() == Side::Computer {
            let mut value = i32::MIN;
            for (_, child) in state.successors() {
                value = value.max(self.minimax(&child, depth - 1, ply + 1, alpha, beta));
                if pruning {
                    alpha = alpha.max(value);
                    if alpha >= beta {
                        break;
                    }
                }
            }
            value
        } else {
            let mut value = i32::MAX;
            for (_, child) in state.successors() {
                value = value.min(self.minimax(&child, depth - 1, ply + 1, alpha, beta));
                if pruning {
                    beta = beta.min(value);
                    if alpha >= beta {
                        break;
                    }
                }
            }
            value
        }
    }
}

/// Best computer move using the default exhaustive search.
#[must_use]
pub fn find_best_move(state: &GameState, depth: u32) -> Option<Tile> {
    Minimax::default().find_best_move(state, depth)
}
