//! Training selector: stat-cap prefilter plus strategy dispatch.

use crate::config::{SelectionConfig, SelectionMode};
use crate::observation::{CurrentStats, Stat, StatCaps, TrainingReport};
use serde::{Deserialize, Serialize};

use super::{RainbowFirstStrategy, ScoreThresholdStrategy, SelectionStrategy, TotalSupportStrategy};

/// Outcome of one training selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "stat", rename_all = "snake_case")]
pub enum SelectorDecision {
    /// Train this stat.
    Train(Stat),
    /// Substitute a race attempt for this turn. When the attempt finds no
    /// race, re-decide with the race-attempt-failed flag set: selection
    /// then re-runs constraint-free, resting only if nothing safe remains.
    PrioritizeRace,
    /// Rest this turn.
    Rest,
    /// Nothing eligible — the caller's gating policy decides what to do.
    NoneEligible,
}

impl SelectorDecision {
    pub fn stat(&self) -> Option<Stat> {
        match self {
            SelectorDecision::Train(stat) => Some(*stat),
            _ => None,
        }
    }
}

/// Game-phase context the caller supplies alongside the observations.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SelectionContext {
    /// First career year favors bond building over rainbow chasing.
    #[serde(default)]
    pub is_first_year: bool,
}

/// Applies the stat-cap prefilter and dispatches to the configured
/// strategy. Stateless: one call per training-screen visit.
#[derive(Debug, Clone, Copy)]
pub struct TrainingSelector<'a> {
    config: &'a SelectionConfig,
}

impl<'a> TrainingSelector<'a> {
    pub fn new(config: &'a SelectionConfig) -> Self {
        Self { config }
    }

    /// Select a training stat from a scored report.
    pub fn select(
        &self,
        report: &TrainingReport,
        current_stats: &CurrentStats,
        stat_caps: &StatCaps,
        context: SelectionContext,
    ) -> SelectorDecision {
        let filtered: TrainingReport = report
            .iter()
            .filter(|(stat, _)| stat_caps.below_cap(*stat, current_stats))
            .map(|(stat, obs)| (stat, obs.clone()))
            .collect();

        if filtered.is_empty() {
            log::info!("All stats capped or no training observed");
            return SelectorDecision::NoneEligible;
        }

        let strategy = self.strategy_for(context);
        log::debug!("Selecting training with {} strategy", strategy.name());
        strategy.select(&filtered, self.config)
    }

    fn strategy_for(&self, context: SelectionContext) -> Box<dyn SelectionStrategy> {
        match self.config.mode {
            SelectionMode::Score => Box::new(ScoreThresholdStrategy),
            SelectionMode::TotalSupport => Box::new(TotalSupportStrategy),
            SelectionMode::RainbowFirst => Box::new(RainbowFirstStrategy),
            SelectionMode::Auto => {
                if context.is_first_year {
                    Box::new(TotalSupportStrategy)
                } else {
                    Box::new(RainbowFirstStrategy)
                }
            }
        }
    }
}
