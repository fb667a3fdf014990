//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// How deep the live game searches on each computer turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthPolicy {
    /// Depth equals the computer's hand size.
    #[default]
    HandSize,
    /// A fixed number of plies.
    Fixed(u32),
}

/// Minimax configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth used by `Minimax::choose`.
    pub depth: DepthPolicy,

    /// Enable alpha-beta cutoffs.
    /// Chooses the same move as the exhaustive search, visiting fewer nodes.
    pub alpha_beta: bool,
}

impl SearchConfig {
    /// Search a fixed number of plies instead of the hand size.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = DepthPolicy::Fixed(depth);
        self
    }

    /// Toggle alpha-beta pruning.
    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }

    /// Resolve the depth for a position whose computer hand holds
    /// `hand_size` tiles.
    #[must_use]
    pub fn depth_for(&self, hand_size: usize) -> u32 {
        match self.depth {
            DepthPolicy::HandSize => u32::try_from(hand_size).unwrap_or(u32::MAX),
            DepthPolicy::Fixed(depth) => depth,
        }
    }
}
