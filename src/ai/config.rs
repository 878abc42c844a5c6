//! AI scoring and selection parameters.

use serde::{Deserialize, Serialize};

/// AI scoring and selection parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Base score of a winning exchange; the margin is added on top.
    pub win_base: f64,

    /// Flat score of a tie.
    pub tie_score: f64,

    /// Weight of the defender's power, added to every score.
    /// Favors high-value targets regardless of outcome.
    pub target_weight: f64,

    /// NORMAL picks uniformly among this many top moves.
    pub normal_top_n: usize,

    /// Chance that EASY ignores the ranking and picks any move.
    pub easy_random_chance: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            win_base: 100.0,
            tie_score: 40.0,
            target_weight: 0.5,
            normal_top_n: 3,
            easy_random_chance: 0.5,
        }
    }
}

impl AiConfig {
    /// Set the target tie-break weight.
    #[must_use]
    pub fn with_target_weight(mut self, weight: f64) -> Self {
        self.target_weight = weight;
        self
    }

    /// Set how many top moves NORMAL chooses from.
    #[must_use]
    pub fn with_normal_top_n(mut self, n: usize) -> Self {
        self.normal_top_n = n.max(1);
        self
    }

    /// Set EASY's random-pick chance.
    #[must_use]
    pub fn with_easy_random_chance(mut self, chance: f64) -> Self {
        self.easy_random_chance = chance;
        self
    }
}
