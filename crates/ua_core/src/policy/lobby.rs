//! Per-turn lobby decision: the fixed-priority ladder a career iteration
//! walks before it ever opens the training screen, plus the race/rest
//! substitution applied when training comes up empty.

use serde::{Deserialize, Serialize};

use crate::config::BotConfig;
use crate::error::CoreError;
use crate::observation::{CurrentStats, StatCaps, TrainingReport};
use crate::training::{
    score_report, select_any_safe, SelectionContext, SelectorDecision, TrainingSelector,
};

use super::{analyze_goal, is_racing_available};

/// Mood as shown in the lobby, ordered worst to best. `Unknown` sorts
/// above everything so an unreadable mood never triggers recreation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mood {
    Awful,
    Bad,
    Normal,
    Good,
    Great,
    Unknown,
}

impl Mood {
    /// Parse the OCR'd mood label; anything unrecognized is `Unknown`.
    pub fn parse(text: &str) -> Mood {
        match text.trim().to_uppercase().as_str() {
            "AWFUL" => Mood::Awful,
            "BAD" => Mood::Bad,
            "NORMAL" => Mood::Normal,
            "GOOD" => Mood::Good,
            "GREAT" => Mood::Great,
            _ => Mood::Unknown,
        }
    }
}

/// The turn counter, which reads either as a number of turns to the next
/// goal deadline or as the literal "Race Day".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Turn {
    Number(u32),
    RaceDay,
}

impl Turn {
    pub fn parse(text: &str) -> Option<Turn> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("race day") {
            return Some(Turn::RaceDay);
        }
        trimmed.parse().ok().map(Turn::Number)
    }

    pub fn is_race_day(&self) -> bool {
        matches!(self, Turn::RaceDay)
    }
}

impl TryFrom<String> for Turn {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Turn::parse(&value)
            .ok_or_else(|| CoreError::InvalidParameter(format!("unrecognized turn text: '{}'", value)))
    }
}

impl From<Turn> for String {
    fn from(turn: Turn) -> String {
        match turn {
            Turn::Number(n) => n.to_string(),
            Turn::RaceDay => "Race Day".to_string(),
        }
    }
}

/// Everything read off the lobby screen for one decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LobbyContext {
    /// Year text, e.g. "Classic Year Early Jul".
    pub year: String,
    pub turn: Turn,
    pub mood: Mood,
    /// Energy bar fill, 0-100.
    pub energy_percent: f32,
    /// The goal criteria line as read.
    #[serde(default)]
    pub criteria_text: String,
    /// The active goal counts G1 race results (fan goals).
    #[serde(default)]
    pub goal_requires_g1: bool,
    /// A race attempt already came up empty this turn; skip the racing
    /// rungs and fall through to training.
    #[serde(default)]
    pub race_attempt_failed: bool,
}

impl LobbyContext {
    pub fn is_first_year(&self) -> bool {
        self.year.contains("Junior Year")
    }
}

/// What to do with this lobby turn, in the ladder's own priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LobbyAction {
    /// Look for a race to enter. If none is found, re-decide with
    /// `race_attempt_failed` set.
    RaceAttempt { prioritize_g1: bool },
    /// Finale career race.
    UraFinale,
    /// Scheduled goal race; no choice this turn.
    RaceDay,
    /// Low mood, enough energy: restore mood.
    Recreation,
    Rest,
    /// Open the training screen and run the selector.
    Training,
}

/// Walk the lobby ladder top to bottom and return the first rung that
/// fires. Pure; callers re-invoke with `race_attempt_failed` when a
/// `RaceAttempt` finds no race.
pub fn decide_lobby_action(ctx: &LobbyContext, config: &BotConfig) -> LobbyAction {
    let goal = analyze_goal(&ctx.criteria_text, ctx.goal_requires_g1, &ctx.year, ctx.turn);
    if goal.should_prioritize_racing && !ctx.race_attempt_failed {
        log::info!("Goal criteria not met with deadline near; looking for a race");
        return LobbyAction::RaceAttempt { prioritize_g1: goal.should_prioritize_g1 };
    }

    if ctx.year.contains("Finale Season") && ctx.turn.is_race_day() {
        return LobbyAction::UraFinale;
    }

    if ctx.turn.is_race_day() {
        return LobbyAction::RaceDay;
    }

    // Recreation is wasteful at high energy even when the mood is low;
    // a race or training will spend the surplus first.
    if ctx.mood < config.lobby.minimum_mood && ctx.energy_percent <= 90.0 {
        log::info!("Mood {:?} below minimum; taking recreation", ctx.mood);
        return LobbyAction::Recreation;
    }

    if config.lobby.prioritize_g1_race
        && !ctx.race_attempt_failed
        && is_racing_available(&ctx.year)
    {
        return LobbyAction::RaceAttempt { prioritize_g1: true };
    }

    if ctx.energy_percent < config.lobby.min_energy {
        log::info!(
            "Energy {:.0}% below minimum {:.0}%; resting",
            ctx.energy_percent,
            config.lobby.min_energy
        );
        return LobbyAction::Rest;
    }

    LobbyAction::Training
}

/// Score the report, run the selector, and apply the race/rest
/// substitution when nothing is eligible.
///
/// An empty selection becomes a race attempt only when the config allows
/// it, at least one reading was trustworthy and safe, and racing is open
/// this turn; otherwise the turn is spent resting. When a substituted
/// race attempt already failed this turn (`ctx.race_attempt_failed`),
/// selection re-runs with the minimum-support and score constraints
/// dropped, resting only if nothing safe remains.
pub fn decide_training(
    report: &TrainingReport,
    current_stats: &CurrentStats,
    stat_caps: &StatCaps,
    config: &BotConfig,
    ctx: &LobbyContext,
) -> SelectorDecision {
    let mut scored = report.clone();
    score_report(&mut scored, &config.scoring);

    let selector = TrainingSelector::new(&config.selection);
    let context = SelectionContext { is_first_year: ctx.is_first_year() };
    let decision = selector.select(&scored, current_stats, stat_caps, context);

    match decision {
        SelectorDecision::NoneEligible => {
            if ctx.race_attempt_failed {
                return select_any_safe(&scored, &config.selection);
            }
            race_or_rest(&scored, config, &ctx.year)
        }
        other => other,
    }
}

/// The race/rest substitution for a turn where nothing was worth training.
///
/// Racing substitutes only when the config allows it, at least one reading
/// was trustworthy and safe (an all-unsafe screen means the reads cannot
/// be relied on, so the only sound move is resting) and races are open
/// this turn.
pub fn race_or_rest(report: &TrainingReport, config: &BotConfig, year: &str) -> SelectorDecision {
    if !config.selection.do_race_when_bad_training {
        log::info!("No eligible training and racing substitution disabled; resting");
        return SelectorDecision::Rest;
    }
    if report.all_unsafe(config.selection.maximum_failure) {
        log::info!("Every training is over the failure limit; resting");
        return SelectorDecision::Rest;
    }
    if !is_racing_available(year) {
        log::info!("No eligible training and no races this turn; resting");
        return SelectorDecision::Rest;
    }
    SelectorDecision::PrioritizeRace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::{CardType, FailureReading, Stat, TrainingObservation};

    fn ctx(year: &str, turn: Turn) -> LobbyContext {
        LobbyContext {
            year: year.to_string(),
            turn,
            mood: Mood::Great,
            energy_percent: 80.0,
            criteria_text: "criteria met!".to_string(),
            goal_requires_g1: false,
            race_attempt_failed: false,
        }
    }

    #[test]
    fn test_mood_ordering_matches_lobby_scale() {
        assert!(Mood::Awful < Mood::Bad);
        assert!(Mood::Bad < Mood::Normal);
        assert!(Mood::Good < Mood::Great);
        assert!(Mood::Unknown > Mood::Great);
    }

    #[test]
    fn test_turn_parsing() {
        assert_eq!(Turn::parse("14"), Some(Turn::Number(14)));
        assert_eq!(Turn::parse("Race Day"), Some(Turn::RaceDay));
        assert_eq!(Turn::parse("???"), None);
    }

    #[test]
    fn test_urgent_goal_outranks_race_day() {
        let mut context = ctx("Classic Year Early Apr", Turn::Number(5));
        context.criteria_text = "Place 3rd or above".to_string();
        let action = decide_lobby_action(&context, &BotConfig::default());
        assert_eq!(action, LobbyAction::RaceAttempt { prioritize_g1: false });
    }

    #[test]
    fn test_failed_race_attempt_falls_through() {
        let mut context = ctx("Classic Year Early Apr", Turn::Number(5));
        context.criteria_text = "Place 3rd or above".to_string();
        context.race_attempt_failed = true;
        let action = decide_lobby_action(&context, &BotConfig::default());
        assert_eq!(action, LobbyAction::Training);
    }

    #[test]
    fn test_finale_race_day() {
        let action = decide_lobby_action(&ctx("Finale Season", Turn::RaceDay), &BotConfig::default());
        assert_eq!(action, LobbyAction::UraFinale);
    }

    #[test]
    fn test_regular_race_day() {
        let action =
            decide_lobby_action(&ctx("Classic Year Late Oct", Turn::RaceDay), &BotConfig::default());
        assert_eq!(action, LobbyAction::RaceDay);
    }

    #[test]
    fn test_low_mood_takes_recreation() {
        let mut context = ctx("Classic Year Early Apr", Turn::Number(12));
        context.mood = Mood::Bad;
        let action = decide_lobby_action(&context, &BotConfig::default());
        assert_eq!(action, LobbyAction::Recreation);
    }

    #[test]
    fn test_low_mood_high_energy_skips_recreation() {
        let mut context = ctx("Classic Year Early Apr", Turn::Number(12));
        context.mood = Mood::Bad;
        context.energy_percent = 95.0;
        let action = decide_lobby_action(&context, &BotConfig::default());
        assert_eq!(action, LobbyAction::Training);
    }

    #[test]
    fn test_g1_priority_config_races_every_open_turn() {
        let mut config = BotConfig::default();
        config.lobby.prioritize_g1_race = true;
        let action = decide_lobby_action(&ctx("Senior Year Early May", Turn::Number(20)), &config);
        assert_eq!(action, LobbyAction::RaceAttempt { prioritize_g1: true });

        // Summer camp closes the race entry even with the flag on.
        let action = decide_lobby_action(&ctx("Senior Year Early Jul", Turn::Number(16)), &config);
        assert_eq!(action, LobbyAction::Training);
    }

    #[test]
    fn test_low_energy_rests() {
        let mut context = ctx("Classic Year Early Apr", Turn::Number(12));
        context.energy_percent = 20.0;
        let action = decide_lobby_action(&context, &BotConfig::default());
        assert_eq!(action, LobbyAction::Rest);
    }

    fn unsafe_report() -> TrainingReport {
        let mut report = TrainingReport::new();
        for stat in Stat::ALL {
            let mut o = TrainingObservation::default();
            o.failure = FailureReading::new(60, 0.9);
            o.support_counts.insert(CardType::from(stat), 2);
            report.insert(stat, o);
        }
        report
    }

    #[test]
    fn test_all_unsafe_rests_instead_of_racing() {
        let context = ctx("Classic Year Early Apr", Turn::Number(12));
        let decision = decide_training(
            &unsafe_report(),
            &CurrentStats::new(),
            &StatCaps::default(),
            &BotConfig::default(),
            &context,
        );
        assert_eq!(decision, SelectorDecision::Rest);
    }

    #[test]
    fn test_below_threshold_substitutes_race() {
        // Safe but worthless training: one speed card, no score.
        let mut report = TrainingReport::new();
        for stat in Stat::ALL {
            let mut o = TrainingObservation::default();
            o.failure = FailureReading::new(5, 0.9);
            report.insert(stat, o);
        }
        report
            .get_mut(Stat::Spd)
            .unwrap()
            .support_counts
            .insert(CardType::Guts, 1);

        let context = ctx("Classic Year Early Apr", Turn::Number(12));
        let decision = decide_training(
            &report,
            &CurrentStats::new(),
            &StatCaps::default(),
            &BotConfig::default(),
            &context,
        );
        assert_eq!(decision, SelectorDecision::PrioritizeRace);
    }

    #[test]
    fn test_race_substitution_respects_summer_camp() {
        let mut report = TrainingReport::new();
        for stat in Stat::ALL {
            let mut o = TrainingObservation::default();
            o.failure = FailureReading::new(5, 0.9);
            report.insert(stat, o);
        }

        let context = ctx("Classic Year Early Aug", Turn::Number(12));
        let decision = decide_training(
            &report,
            &CurrentStats::new(),
            &StatCaps::default(),
            &BotConfig::default(),
            &context,
        );
        assert_eq!(decision, SelectorDecision::Rest);
    }

    #[test]
    fn test_failed_race_attempt_takes_any_safe_training() {
        // Safe but below every threshold: the first pass would substitute
        // a race, but once that attempt failed the same screen must yield
        // a training, not another race.
        let mut report = TrainingReport::new();
        for stat in Stat::ALL {
            let mut o = TrainingObservation::default();
            o.failure = FailureReading::new(5, 0.9);
            report.insert(stat, o);
        }

        let mut context = ctx("Classic Year Early Apr", Turn::Number(12));
        let first_pass = decide_training(
            &report,
            &CurrentStats::new(),
            &StatCaps::default(),
            &BotConfig::default(),
            &context,
        );
        assert_eq!(first_pass, SelectorDecision::PrioritizeRace);

        context.race_attempt_failed = true;
        let second_pass = decide_training(
            &report,
            &CurrentStats::new(),
            &StatCaps::default(),
            &BotConfig::default(),
            &context,
        );
        assert_eq!(second_pass, SelectorDecision::Train(Stat::Spd));
    }

    #[test]
    fn test_failed_race_attempt_with_unsafe_screen_rests() {
        let mut context = ctx("Classic Year Early Apr", Turn::Number(12));
        context.race_attempt_failed = true;
        let decision = decide_training(
            &unsafe_report(),
            &CurrentStats::new(),
            &StatCaps::default(),
            &BotConfig::default(),
            &context,
        );
        assert_eq!(decision, SelectorDecision::Rest);
    }

    #[test]
    fn test_race_substitution_disabled_rests() {
        let mut report = TrainingReport::new();
        for stat in Stat::ALL {
            let mut o = TrainingObservation::default();
            o.failure = FailureReading::new(5, 0.9);
            report.insert(stat, o);
        }

        let mut config = BotConfig::default();
        config.selection.do_race_when_bad_training = false;
        let context = ctx("Classic Year Early Apr", Turn::Number(12));
        let decision = decide_training(
            &report,
            &CurrentStats::new(),
            &StatCaps::default(),
            &config,
            &context,
        );
        assert_eq!(decision, SelectorDecision::Rest);
    }
}
