//! Lobby gating tunables

use crate::policy::Mood;
use serde::{Deserialize, Serialize};

/// Mood, energy and race-priority gates applied each lobby iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LobbyConfig {
    /// Recreation is taken when mood drops below this (default: Great)
    #[serde(default = "default_minimum_mood")]
    pub minimum_mood: Mood,
    /// Attempt a G1 race every turn when available (default: false)
    #[serde(default)]
    pub prioritize_g1_race: bool,
    /// Rest instead of training below this energy percentage (default: 30.0)
    #[serde(default = "default_min_energy")]
    pub min_energy: f32,
}

fn default_minimum_mood() -> Mood {
    Mood::Great
}
fn default_min_energy() -> f32 {
    30.0
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            minimum_mood: default_minimum_mood(),
            prioritize_g1_race: false,
            min_energy: default_min_energy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = LobbyConfig::default();
        assert_eq!(cfg.minimum_mood, Mood::Great);
        assert!(!cfg.prioritize_g1_race);
        assert!((cfg.min_energy - 30.0).abs() < f32::EPSILON);
    }
}
