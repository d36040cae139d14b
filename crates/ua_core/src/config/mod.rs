//! # Configuration Module
//!
//! All decision tunables live here as explicit structs constructed once at
//! process start and passed by reference into the core functions — no
//! ambient global state.
//!
//! Every loader falls back to documented defaults on missing or malformed
//! files (logged as a warning, never fatal): a bad config file must not be
//! able to stop the automation loop.

mod lobby;
mod priorities;
mod scoring;
pub(crate) mod selection;

pub use lobby::LobbyConfig;
pub use priorities::EventPriorities;
pub use scoring::ScoringRules;
pub use selection::{SelectionConfig, SelectionMode};

use crate::observation::StatCaps;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Aggregate configuration for the whole decision core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    /// Training selection thresholds and priority order
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Training score point weights
    #[serde(default)]
    pub scoring: ScoringRules,
    /// Event good/bad keyword priority lists
    #[serde(default)]
    pub priorities: EventPriorities,
    /// Lobby gating: mood, energy, G1 priority
    #[serde(default)]
    pub lobby: LobbyConfig,
    /// Per-stat training caps
    #[serde(default)]
    pub stat_caps: StatCaps,
}

impl BotConfig {
    /// Load from a JSON file, falling back to defaults on any failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        load_json_or_default(path.as_ref(), "bot config")
    }
}

/// Strict JSON loader for config types.
pub(crate) fn load_json<T>(path: &Path) -> crate::error::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Shared warn-and-default JSON loader for config types.
pub(crate) fn load_json_or_default<T>(path: &Path, what: &str) -> T
where
    T: Default + serde::de::DeserializeOwned,
{
    match load_json(path) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Could not load {} from {}: {} (using defaults)", what, path.display(), e);
            T::default()
        }
    }
}
