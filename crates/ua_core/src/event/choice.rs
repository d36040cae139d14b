//! Maps a recommended option name to a 1-based on-screen choice index.

use serde::{Deserialize, Serialize};

/// A resolved choice index. `clamped` marks a fail-safe fall back to the
/// first choice because the mapped index did not fit the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedChoice {
    pub index: usize,
    pub clamped: bool,
}

impl MappedChoice {
    fn first(clamped: bool) -> Self {
        Self { index: 1, clamped }
    }
}

/// Map an option name ("top option", "middle option", "bottom option",
/// "option3", ...) onto `choices_found` detected choice positions.
///
/// "bottom" means the last choice, "middle" the second (only meaningful
/// with 3+ choices), "top" the first; otherwise a trailing "option N"
/// number is used. Anything out of range clamps to the first choice and
/// logs a warning — always recoverable, never an error.
pub fn map_choice_number(recommended_option: &str, choices_found: usize) -> MappedChoice {
    if choices_found == 0 {
        log::warn!("No choices on screen to map '{}' onto", recommended_option);
        return MappedChoice::first(true);
    }

    let rec_lower = recommended_option.to_lowercase();
    let mut index = 1;

    if rec_lower.contains("bottom") {
        index = choices_found;
    } else if rec_lower.contains("middle") {
        // The middle heuristic only makes sense with 3+ choices; with
        // fewer, keep the first-choice default.
        if choices_found >= 3 {
            index = 2;
        }
    } else if rec_lower.contains("top") {
        index = 1;
    } else if let Some(n) = parse_option_number(&rec_lower) {
        index = n;
    }

    if index > choices_found {
        log::warn!(
            "Recommended choice {} exceeds available choices ({}); falling back to first",
            index,
            choices_found
        );
        return MappedChoice::first(true);
    }

    MappedChoice { index, clamped: false }
}

/// Parse the number of an "option N" style name: the word "option",
/// optional whitespace, then digits.
fn parse_option_number(name_lower: &str) -> Option<usize> {
    let start = name_lower.find("option")? + "option".len();
    let rest = name_lower[start..].trim_start();
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
