//! # ua_core - Career Automation Decision Core
//!
//! This library provides the decision engine for a career-mode automation
//! bot: training scoring and selection, narrative-event option analysis,
//! and race/training gating policy.
//!
//! ## Features
//! - 100% deterministic decisions (same observations = same result)
//! - Fail-safe handling of unreliable sensor data (OCR rates + confidence)
//! - JSON API for easy integration with the screen-reading/input layer
//!
//! The core is stateless and performs no I/O: screen capture, template
//! matching, OCR and tap simulation all live in external collaborators
//! that feed structured observations in and execute decisions out.

// Allow unused code for features under development
#![allow(dead_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod event;
pub mod observation;
pub mod policy;
pub mod training;

// Re-export main API functions
pub use api::{analyze_event_json, select_training_json};
pub use api::{EventAnalyzeRequest, EventAnalyzeResponse, TrainingSelectRequest, TrainingSelectResponse};

// Re-export core types
pub use config::{BotConfig, EventPriorities, LobbyConfig, ScoringRules, SelectionConfig, SelectionMode};
pub use error::{CoreError, Result};
pub use event::{analyze_event_options, map_choice_number, EventAnalysis, MappedChoice, OptionAnalysis};
pub use observation::{
    CardInstance, CardType, CurrentStats, EventOption, FailureReading, Stat, StatCaps,
    TrainingObservation, TrainingReport,
};
pub use policy::{
    decide_lobby_action, decide_training, is_pre_debut_year, is_racing_available, GoalAnalysis,
    LobbyAction, LobbyContext, Mood, Turn,
};
pub use training::{
    calculate_training_score, select_any_safe, RainbowFirstStrategy, ScoreThresholdStrategy,
    SelectionStrategy, SelectorDecision, TotalSupportStrategy, TrainingSelector,
};
