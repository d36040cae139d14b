// Training selection JSON API
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::BotConfig;
use crate::error::CoreError;
use crate::observation::{CurrentStats, Stat, TrainingReport};
use crate::policy::race_or_rest;
use crate::training::{
    score_report, select_any_safe, SelectionContext, SelectorDecision, TrainingSelector,
};

use super::SCHEMA_VERSION;

/// One training-screen scan sent by the observation layer.
#[derive(Debug, Deserialize)]
pub struct TrainingSelectRequest {
    pub schema_version: u8,
    /// Per-stat slot observations.
    pub observations: TrainingReport,
    /// Current stat values, for the stat-cap filter.
    #[serde(default)]
    pub current_stats: CurrentStats,
    /// Year text from the lobby, e.g. "Classic Year Early Jul". Drives
    /// the first-year strategy dispatch and the race substitution.
    #[serde(default)]
    pub year: String,
    /// A substituted race attempt already came up empty this turn;
    /// selection re-runs constraint-free instead of racing again.
    #[serde(default)]
    pub race_attempt_failed: bool,
}

/// The decision plus the per-slot scores that produced it.
#[derive(Debug, Serialize)]
pub struct TrainingSelectResponse {
    pub schema_version: u8,
    pub decision: SelectorDecision,
    pub scores: HashMap<Stat, f64>,
}

/// Score the observations, run the selector and apply the race/rest
/// substitution when nothing is eligible.
pub fn select_training_json(request_json: &str, config_json: &str) -> Result<String, String> {
    let request: TrainingSelectRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid training request: {}", e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::UnsupportedSchemaVersion(request.schema_version).to_string());
    }

    let config: BotConfig =
        serde_json::from_str(config_json).map_err(|e| format!("Invalid config JSON: {}", e))?;

    let mut report = request.observations;
    score_report(&mut report, &config.scoring);

    let selector = TrainingSelector::new(&config.selection);
    let context = SelectionContext { is_first_year: request.year.contains("Junior Year") };
    let mut decision =
        selector.select(&report, &request.current_stats, &config.stat_caps, context);

    if decision == SelectorDecision::NoneEligible {
        decision = if request.race_attempt_failed {
            select_any_safe(&report, &config.selection)
        } else {
            race_or_rest(&report, &config, &request.year)
        };
    }

    let scores: HashMap<Stat, f64> = report.iter().map(|(stat, obs)| (stat, obs.score)).collect();

    let response = TrainingSelectResponse { schema_version: SCHEMA_VERSION, decision, scores };
    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}
