//! Goal-criteria analysis: decides whether the current career goal calls
//! for prioritizing races over training.

use serde::{Deserialize, Serialize};

use super::{is_pre_debut_year, Turn};

/// Result of reading the goal criteria line in the lobby.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalAnalysis {
    /// The goal text reports the criteria as already satisfied.
    pub criteria_met: bool,
    /// Racing should take priority over training this turn.
    pub should_prioritize_racing: bool,
    /// Racing should specifically target G1 races (fan-count goals).
    pub should_prioritize_g1: bool,
}

/// Recognize a satisfied goal from the OCR'd criteria line.
///
/// The game renders satisfied goals as "criteria met" (sometimes clipped
/// to just the leading word) or "Goal achieved".
pub fn criteria_met(criteria_text: &str) -> bool {
    let lower = criteria_text.to_lowercase();
    lower.split_whitespace().next() == Some("criteria")
        || lower.contains("criteria met")
        || lower.contains("goal achieved")
}

/// Analyze the goal state for one lobby turn.
///
/// Race prioritization kicks in only when the goal is unmet, the debut
/// has happened, and fewer than ten turns remain to the deadline —
/// close enough that training detours risk failing the career.
pub fn analyze_goal(
    criteria_text: &str,
    goal_requires_g1: bool,
    year: &str,
    turn: Turn,
) -> GoalAnalysis {
    let met = criteria_met(criteria_text);
    let turns_left_low = match turn {
        Turn::Number(n) => n < 10,
        Turn::RaceDay => false,
    };
    let should_race = !met && !is_pre_debut_year(year) && turns_left_low;

    GoalAnalysis {
        criteria_met: met,
        should_prioritize_racing: should_race,
        should_prioritize_g1: should_race && goal_requires_g1,
    }
}
