//! Training selection thresholds and strategy choice

use crate::observation::Stat;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which selection strategy drives training choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Bond/hint score with per-stat thresholds (most recent policy).
    #[default]
    Score,
    /// Maximize total support count (builds bond, any card type).
    TotalSupport,
    /// Rainbow opportunities first, total-support as fallback.
    RainbowFirst,
    /// Year-driven: first year total-support, later years rainbow-first.
    Auto,
}

/// Thresholds and priority order for the training selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Highest acceptable failure percentage (default: 15)
    #[serde(default = "default_maximum_failure")]
    pub maximum_failure: u8,
    /// Minimum score for non-wit stats (default: 1.0)
    #[serde(default = "default_min_score")]
    pub min_score: f64,
    /// Minimum score for wit (default: 1.0) — wit gets its own threshold
    /// because it yields no rainbow bonus from off-type cards
    #[serde(default = "default_min_score")]
    pub min_wit_score: f64,
    /// Tie-break order, lower index = higher priority
    #[serde(default = "default_priority_order", alias = "priority_stat")]
    pub priority_order: Vec<Stat>,
    /// Active selection strategy
    #[serde(default)]
    pub mode: SelectionMode,
    /// Substitute a race attempt when no training is eligible (default: true)
    #[serde(default = "default_race_when_bad")]
    pub do_race_when_bad_training: bool,
}

fn default_maximum_failure() -> u8 {
    15
}
fn default_min_score() -> f64 {
    1.0
}
fn default_priority_order() -> Vec<Stat> {
    vec![Stat::Spd, Stat::Sta, Stat::Wit, Stat::Pwr, Stat::Guts]
}
fn default_race_when_bad() -> bool {
    true
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            maximum_failure: default_maximum_failure(),
            min_score: default_min_score(),
            min_wit_score: default_min_score(),
            priority_order: default_priority_order(),
            mode: SelectionMode::default(),
            do_race_when_bad_training: default_race_when_bad(),
        }
    }
}

impl SelectionConfig {
    /// Score threshold for one stat.
    pub fn score_threshold(&self, stat: Stat) -> f64 {
        if stat == Stat::Wit {
            self.min_wit_score
        } else {
            self.min_score
        }
    }

    /// Rank map computed once per selection: stat -> priority index.
    /// Stats absent from the configured order rank last.
    pub fn priority_ranks(&self) -> HashMap<Stat, usize> {
        self.priority_order.iter().enumerate().map(|(i, &s)| (s, i)).collect()
    }
}

/// Rank lookup against a precomputed map; absent stats rank last.
pub(crate) fn rank_of(ranks: &HashMap<Stat, usize>, stat: Stat) -> usize {
    ranks.get(&stat).copied().unwrap_or(usize::MAX)
}
