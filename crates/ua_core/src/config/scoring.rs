//! Training score point weights

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Point weights for the training scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Own-type support card at rainbow bond (default: 1.0)
    #[serde(default = "default_rainbow_support")]
    pub rainbow_support: f64,
    /// Any support card still below rainbow bond (default: 0.7) — these
    /// grow bond, which is the point of early training
    #[serde(default = "default_not_rainbow_low")]
    pub not_rainbow_support_low: f64,
    /// Off-type support card already at high bond (default: 0.0)
    #[serde(default = "default_not_rainbow_high")]
    pub not_rainbow_support_high: f64,
    /// Skill hint indicator present (default: 0.3)
    #[serde(default = "default_hint")]
    pub hint: f64,
}

fn default_rainbow_support() -> f64 {
    1.0
}
fn default_not_rainbow_low() -> f64 {
    0.7
}
fn default_not_rainbow_high() -> f64 {
    0.0
}
fn default_hint() -> f64 {
    0.3
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            rainbow_support: default_rainbow_support(),
            not_rainbow_support_low: default_not_rainbow_low(),
            not_rainbow_support_high: default_not_rainbow_high(),
            hint: default_hint(),
        }
    }
}

impl ScoringRules {
    /// Load from a JSON file, falling back to defaults on any failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        super::load_json_or_default(path.as_ref(), "scoring rules")
    }
}
