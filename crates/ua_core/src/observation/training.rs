// Training screen observation types
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bond level at which an own-type support card counts as rainbow.
pub const RAINBOW_BOND_THRESHOLD: u8 = 4;

/// Stat cap assumed when configuration does not provide one.
pub const DEFAULT_STAT_CAP: u16 = 1200;

/// Trainable stat (one training slot per stat on the training screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Spd,
    Sta,
    Pwr,
    Guts,
    Wit,
}

impl Stat {
    /// Canonical on-screen order (left to right).
    pub const ALL: [Stat; 5] = [Stat::Spd, Stat::Sta, Stat::Pwr, Stat::Guts, Stat::Wit];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Spd => "spd",
            Stat::Sta => "sta",
            Stat::Pwr => "pwr",
            Stat::Guts => "guts",
            Stat::Wit => "wit",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stat::Spd => "Speed",
            Stat::Sta => "Stamina",
            Stat::Pwr => "Power",
            Stat::Guts => "Guts",
            Stat::Wit => "Wit",
        }
    }

    pub fn parse(s: &str) -> Option<Stat> {
        match s.trim().to_lowercase().as_str() {
            "spd" => Some(Stat::Spd),
            "sta" => Some(Stat::Sta),
            "pwr" => Some(Stat::Pwr),
            "guts" => Some(Stat::Guts),
            "wit" => Some(Stat::Wit),
            _ => None,
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Support card type detected from its icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Spd,
    Sta,
    Pwr,
    Guts,
    Wit,
    Friend,
}

impl CardType {
    /// True when this card type is the stat being trained.
    pub fn matches(&self, stat: Stat) -> bool {
        matches!(
            (self, stat),
            (CardType::Spd, Stat::Spd)
                | (CardType::Sta, Stat::Sta)
                | (CardType::Pwr, Stat::Pwr)
                | (CardType::Guts, Stat::Guts)
                | (CardType::Wit, Stat::Wit)
        )
    }
}

impl From<Stat> for CardType {
    fn from(stat: Stat) -> Self {
        match stat {
            Stat::Spd => CardType::Spd,
            Stat::Sta => CardType::Sta,
            Stat::Pwr => CardType::Pwr,
            Stat::Guts => CardType::Guts,
            Stat::Wit => CardType::Wit,
        }
    }
}

/// One detected support card instance on a training slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Bond level 1..=5, classified from the bond gauge color.
    pub bond_level: u8,
}

impl CardInstance {
    pub fn new(bond_level: u8) -> Self {
        Self { bond_level }
    }

    /// Rainbow: the card's type matches the stat being trained and the bond
    /// gauge is high enough for friendship training.
    pub fn is_rainbow(&self, card_type: CardType, training: Stat) -> bool {
        card_type.matches(training) && self.bond_level >= RAINBOW_BOND_THRESHOLD
    }
}

/// OCR'd failure percentage with the read's confidence.
///
/// Sentinels: a negative rate means the read was undetermined, 100 is the
/// detection-failed fallback. Both are treated as unsafe, never as errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FailureReading {
    pub rate: i16,
    pub confidence: f32,
}

impl FailureReading {
    pub const UNDETERMINED_RATE: i16 = -1;

    pub fn new(rate: i16, confidence: f32) -> Self {
        Self { rate, confidence }
    }

    /// A read the OCR layer could not resolve at all.
    pub fn undetermined() -> Self {
        Self { rate: Self::UNDETERMINED_RATE, confidence: 0.0 }
    }

    /// True when the rate is a real in-range percentage backed by a
    /// non-zero confidence. Untrusted reads never qualify as safe.
    pub fn is_trusted(&self) -> bool {
        (0..=100).contains(&self.rate) && self.confidence > 0.0
    }

    /// Safety filter: trusted and at or below the configured maximum.
    /// The 100 detection-failed sentinel always fails this check.
    pub fn is_safe(&self, maximum_failure: u8) -> bool {
        self.is_trusted() && self.rate < 100 && self.rate <= i16::from(maximum_failure)
    }
}

impl Default for FailureReading {
    fn default() -> Self {
        Self::undetermined()
    }
}

/// One scan of a single training slot: support cards, bond levels, hint
/// presence and the failure read. Built fresh per training-screen visit,
/// immutable once built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingObservation {
    /// Unique icon detections per card type.
    #[serde(default)]
    pub support_counts: HashMap<CardType, u8>,
    /// Per-type card instances with classified bond levels.
    #[serde(default)]
    pub support_detail: HashMap<CardType, Vec<CardInstance>>,
    /// Hint indicator detected on this slot.
    #[serde(default)]
    pub hint_present: bool,
    /// Failure percentage + OCR confidence.
    #[serde(default)]
    pub failure: FailureReading,
    /// Desirability score, filled in by the scorer.
    #[serde(default)]
    pub score: f64,
}

impl TrainingObservation {
    /// Total support cards of any type on this slot.
    pub fn total_support(&self) -> u32 {
        self.support_counts.values().map(|&c| u32::from(c)).sum()
    }

    /// Support cards whose type matches the given training stat.
    pub fn own_type_support(&self, stat: Stat) -> u8 {
        self.support_counts.get(&CardType::from(stat)).copied().unwrap_or(0)
    }
}

/// Per-stat observations for one training-screen visit.
///
/// Iteration follows the canonical stat order so that downstream
/// tie-breaking is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainingReport {
    observations: HashMap<Stat, TrainingObservation>,
}

impl TrainingReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, stat: Stat, observation: TrainingObservation) {
        self.observations.insert(stat, observation);
    }

    pub fn get(&self, stat: Stat) -> Option<&TrainingObservation> {
        self.observations.get(&stat)
    }

    pub fn get_mut(&mut self, stat: Stat) -> Option<&mut TrainingObservation> {
        self.observations.get_mut(&stat)
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Iterate observations in canonical stat order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, &TrainingObservation)> {
        Stat::ALL.iter().filter_map(move |&stat| self.observations.get(&stat).map(|o| (stat, o)))
    }

    /// True when every observed slot fails the safety filter. An empty
    /// report is vacuously all-unsafe: there is nothing safe to train.
    pub fn all_unsafe(&self, maximum_failure: u8) -> bool {
        self.observations.values().all(|o| !o.failure.is_safe(maximum_failure))
    }
}

impl FromIterator<(Stat, TrainingObservation)> for TrainingReport {
    fn from_iter<T: IntoIterator<Item = (Stat, TrainingObservation)>>(iter: T) -> Self {
        Self { observations: iter.into_iter().collect() }
    }
}

/// Current stat values OCR'd from the lobby, keyed by stat.
pub type CurrentStats = HashMap<Stat, u16>;

/// Configured per-stat training caps. Stats at or above their cap are
/// excluded from selection. Missing entries fall back to a default cap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatCaps {
    #[serde(default)]
    caps: HashMap<Stat, u16>,
}

impl StatCaps {
    pub fn new(caps: HashMap<Stat, u16>) -> Self {
        Self { caps }
    }

    pub fn cap_for(&self, stat: Stat) -> u16 {
        self.caps.get(&stat).copied().unwrap_or(DEFAULT_STAT_CAP)
    }

    /// True when the stat still has room to grow.
    pub fn below_cap(&self, stat: Stat, current: &CurrentStats) -> bool {
        current.get(&stat).copied().unwrap_or(0) < self.cap_for(stat)
    }
}
