//! Interchangeable training selection strategies.
//!
//! Three policies over the same observation model: total-support
//! maximization (early game, builds bond with any card), rainbow-first
//! (later game, chases friendship bonuses) and score-threshold (bond/hint
//! scoring with per-stat minimums). All of them share the failure-safety
//! filter and the priority-order tie-break.

use crate::config::selection::rank_of;
use crate::config::SelectionConfig;
use crate::observation::{Stat, TrainingObservation, TrainingReport};

use super::SelectorDecision;

/// A selection policy over one scored training report. The report passed
/// in has already been stat-cap filtered by the selector.
pub trait SelectionStrategy {
    fn name(&self) -> &'static str;

    fn select(&self, report: &TrainingReport, config: &SelectionConfig) -> SelectorDecision;
}

/// Pick the candidate maximizing `key`, breaking ties by the lowest
/// priority-order index. Fully tied candidates resolve to the first seen,
/// so the result is deterministic for any input order.
fn pick_best_by<K, F>(
    candidates: &[(Stat, &TrainingObservation)],
    config: &SelectionConfig,
    key: F,
) -> Option<Stat>
where
    K: PartialOrd + Copy,
    F: Fn(Stat, &TrainingObservation) -> K,
{
    let ranks = config.priority_ranks();
    let mut best: Option<(Stat, K, usize)> = None;
    for &(stat, obs) in candidates {
        let k = key(stat, obs);
        let rank = rank_of(&ranks, stat);
        let better = match &best {
            None => true,
            Some((_, best_k, best_rank)) => {
                k > *best_k || (k == *best_k && rank < *best_rank)
            }
        };
        if better {
            best = Some((stat, k, rank));
        }
    }
    best.map(|(stat, _, _)| stat)
}

/// Maximize total support cards of any type.
///
/// Wit is special-cased: it needs at least 2 support cards to be worth a
/// turn, because wit training gives no stat growth to compensate a weak
/// slot. A single-support winner is only taken on a 0% failure read.
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalSupportStrategy;

impl SelectionStrategy for TotalSupportStrategy {
    fn name(&self) -> &'static str {
        "total_support"
    }

    fn select(&self, report: &TrainingReport, config: &SelectionConfig) -> SelectorDecision {
        let max_failure = config.maximum_failure;

        let non_wit_safe: Vec<(Stat, &TrainingObservation)> = report
            .iter()
            .filter(|(stat, obs)| *stat != Stat::Wit && obs.failure.is_safe(max_failure))
            .collect();

        // Everything but wit is unsafe: take wit if it is safe and stacked.
        if non_wit_safe.is_empty() {
            if let Some(wit) = report.get(Stat::Wit) {
                if wit.failure.is_safe(max_failure) && wit.total_support() >= 2 {
                    log::info!("All other trainings unsafe; wit is safe with enough support");
                    return SelectorDecision::Train(Stat::Wit);
                }
            }
        }

        let safe: Vec<(Stat, &TrainingObservation)> =
            report.iter().filter(|(_, obs)| obs.failure.is_safe(max_failure)).collect();
        if safe.is_empty() {
            log::info!("No safe training found; all failure chances too high");
            return SelectorDecision::NoneEligible;
        }

        let Some(best) = pick_best_by(&safe, config, |_, obs| obs.total_support()) else {
            return SelectorDecision::NoneEligible;
        };
        let Some(best_obs) = report.get(best) else {
            return SelectorDecision::NoneEligible;
        };

        if best_obs.total_support() <= 1 {
            if best_obs.failure.rate == 0 {
                if best == Stat::Wit {
                    log::info!("Only 1 support and it's wit; skipping");
                    return SelectorDecision::NoneEligible;
                }
                log::info!("Only 1 support but 0% failure; taking {}", best);
                return SelectorDecision::Train(best);
            }
            log::info!("Low value training (1 support); choosing to rest");
            return SelectorDecision::Rest;
        }

        SelectorDecision::Train(best)
    }
}

/// Restrict to slots where the stat's own card type is present (a rainbow
/// opportunity), maximize own-type count; fall back to total-support when
/// no rainbow candidate exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowFirstStrategy;

impl SelectionStrategy for RainbowFirstStrategy {
    fn name(&self) -> &'static str {
        "rainbow_first"
    }

    fn select(&self, report: &TrainingReport, config: &SelectionConfig) -> SelectorDecision {
        let max_failure = config.maximum_failure;
        let candidates: Vec<(Stat, &TrainingObservation)> = report
            .iter()
            .filter(|(stat, obs)| {
                obs.failure.is_safe(max_failure) && obs.own_type_support(*stat) > 0
            })
            .collect();

        if candidates.is_empty() {
            log::info!("No rainbow training under failure threshold; falling back to total support");
            return TotalSupportStrategy.select(report, config);
        }

        match pick_best_by(&candidates, config, |stat, obs| obs.own_type_support(stat)) {
            Some(stat) => SelectorDecision::Train(stat),
            None => SelectorDecision::NoneEligible,
        }
    }
}

/// Score-based policy: failure-safety filter, per-stat score threshold,
/// then highest score with priority tie-break.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreThresholdStrategy;

impl SelectionStrategy for ScoreThresholdStrategy {
    fn name(&self) -> &'static str {
        "score_threshold"
    }

    fn select(&self, report: &TrainingReport, config: &SelectionConfig) -> SelectorDecision {
        let max_failure = config.maximum_failure;
        let mut eligible: Vec<(Stat, &TrainingObservation)> = Vec::new();

        for (stat, obs) in report.iter() {
            if !obs.failure.is_safe(max_failure) {
                log::debug!("{} filtered out: failure {}% > {}%", stat, obs.failure.rate, max_failure);
                continue;
            }
            let threshold = config.score_threshold(stat);
            if obs.score < threshold {
                log::debug!("{} filtered out: score {} < {}", stat, obs.score, threshold);
                continue;
            }
            eligible.push((stat, obs));
        }

        if eligible.is_empty() {
            log::info!("No eligible training after failure and score filtering");
            return SelectorDecision::NoneEligible;
        }

        match pick_best_by(&eligible, config, |_, obs| obs.score) {
            Some(stat) => SelectorDecision::Train(stat),
            None => SelectorDecision::NoneEligible,
        }
    }
}

/// Constraint-free fallback for a turn where a substituted race attempt
/// found no race: the best safe slot wins regardless of minimum-support
/// and score thresholds. Rest only when nothing safe remains.
pub fn select_any_safe(report: &TrainingReport, config: &SelectionConfig) -> SelectorDecision {
    let safe: Vec<(Stat, &TrainingObservation)> =
        report.iter().filter(|(_, obs)| obs.failure.is_safe(config.maximum_failure)).collect();
    if safe.is_empty() {
        log::info!("No safe training even without constraints; resting");
        return SelectorDecision::Rest;
    }
    match pick_best_by(&safe, config, |_, obs| (obs.score, obs.total_support())) {
        Some(stat) => {
            log::info!("Race attempt failed; taking best safe training {}", stat);
            SelectorDecision::Train(stat)
        }
        None => SelectorDecision::Rest,
    }
}
