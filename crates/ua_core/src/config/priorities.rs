//! Event good/bad keyword priority lists

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Ordered keyword lists driving event option analysis. Order is
/// significant and total: a lower index means a stronger preference, and
/// the first match in the list wins ties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPriorities {
    /// Rewards worth taking, best first
    #[serde(default, alias = "Good_choices")]
    pub good_choices: Vec<String>,
    /// Rewards to avoid
    #[serde(default, alias = "Bad_choices")]
    pub bad_choices: Vec<String>,
}

impl EventPriorities {
    pub fn new(good_choices: Vec<String>, bad_choices: Vec<String>) -> Self {
        Self { good_choices, bad_choices }
    }

    /// Load from a JSON file (the on-disk shape uses `Good_choices` /
    /// `Bad_choices` keys), falling back to empty lists on any failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        super::load_json_or_default(path.as_ref(), "event priorities")
    }

    /// Rank map computed once per analysis: lowercased keyword -> index in
    /// `good_choices`. Makes rank lookup O(1) instead of a list scan.
    pub fn good_rank_index(&self) -> HashMap<String, usize> {
        self.good_choices.iter().enumerate().map(|(i, k)| (k.to_lowercase(), i)).collect()
    }
}
