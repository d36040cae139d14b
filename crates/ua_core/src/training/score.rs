//! Training scorer: converts one slot observation into a desirability
//! score from the card/bond/hint point system.

use crate::config::ScoringRules;
use crate::observation::{Stat, TrainingObservation, TrainingReport, RAINBOW_BOND_THRESHOLD};

/// Score one training slot.
///
/// Per detected support card: own-type at rainbow bond earns the rainbow
/// points; any card still below rainbow bond earns the low-bond points
/// (training it grows bond); an off-type card already at high bond earns
/// the high-bond points (0 by default — it contributes nothing here). A
/// visible hint adds the hint points. Rounded to 2 decimal places.
///
/// An empty slot with no hint scores 0.0 — valid, never an error.
pub fn calculate_training_score(
    observation: &TrainingObservation,
    training_type: Stat,
    rules: &ScoringRules,
) -> f64 {
    let mut score = 0.0;

    for (&card_type, cards) in &observation.support_detail {
        for card in cards {
            if card.is_rainbow(card_type, training_type) {
                score += rules.rainbow_support;
            } else if card.bond_level < RAINBOW_BOND_THRESHOLD {
                score += rules.not_rainbow_support_low;
            } else {
                score += rules.not_rainbow_support_high;
            }
        }
    }

    if observation.hint_present {
        score += rules.hint;
    }

    (score * 100.0).round() / 100.0
}

/// Score every slot of a report in place.
pub fn score_report(report: &mut TrainingReport, rules: &ScoringRules) {
    for stat in Stat::ALL {
        if let Some(obs) = report.get(stat) {
            let score = calculate_training_score(obs, stat, rules);
            if let Some(obs) = report.get_mut(stat) {
                obs.score = score;
            }
        }
    }
}
