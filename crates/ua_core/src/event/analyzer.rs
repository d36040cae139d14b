//! Event option analyzer.
//!
//! Matches each option's free-text reward against the ordered good/bad
//! keyword lists and picks the best option under a layered fallback:
//! clean option first, then good-despite-bad, then fewest-bad, then first
//! choice. The intent: never deliberately pick a bad outcome if a good one
//! exists, but never leave a decision unmade.

use crate::config::EventPriorities;
use crate::observation::EventOption;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Keyword matches for one option.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionAnalysis {
    pub name: String,
    pub reward: String,
    /// Matched good keywords, in priority-list order.
    pub good_matches: Vec<String>,
    /// Matched bad keywords, in priority-list order.
    pub bad_matches: Vec<String>,
    pub has_good: bool,
    pub has_bad: bool,
}

/// Result of analyzing one event dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventAnalysis {
    pub recommended_option: Option<String>,
    pub reason: String,
    /// Per-option analysis in first-seen order.
    pub options: Vec<OptionAnalysis>,
    /// True when no option matched any good keyword.
    pub all_options_bad: bool,
}

impl EventAnalysis {
    pub fn analysis_for(&self, name: &str) -> Option<&OptionAnalysis> {
        self.options.iter().find(|o| o.name == name)
    }
}

/// Analyze event options and recommend the best choice.
///
/// Matching is case-insensitive substring search; every matching keyword
/// is recorded, preserving priority-list order, so the first recorded
/// match is always the strongest one.
pub fn analyze_event_options(
    options: &[EventOption],
    priorities: &EventPriorities,
) -> EventAnalysis {
    // Nothing to even default to: surface "no action possible".
    if options.is_empty() {
        log::warn!("Event analysis called with no options");
        return EventAnalysis {
            recommended_option: None,
            reason: "No options provided for analysis.".to_string(),
            options: Vec::new(),
            all_options_bad: true,
        };
    }

    let analyses: Vec<OptionAnalysis> = options
        .iter()
        .map(|option| {
            let reward_lower = option.reward_text.to_lowercase();
            let good_matches: Vec<String> = priorities
                .good_choices
                .iter()
                .filter(|k| reward_lower.contains(&k.to_lowercase()))
                .cloned()
                .collect();
            let bad_matches: Vec<String> = priorities
                .bad_choices
                .iter()
                .filter(|k| reward_lower.contains(&k.to_lowercase()))
                .cloned()
                .collect();
            OptionAnalysis {
                name: option.name.clone(),
                reward: option.reward_text.clone(),
                has_good: !good_matches.is_empty(),
                has_bad: !bad_matches.is_empty(),
                good_matches,
                bad_matches,
            }
        })
        .collect();

    let all_options_bad = !analyses.iter().any(|a| a.has_good);

    // Single-option shortcut.
    if options.len() == 1 {
        return EventAnalysis {
            recommended_option: Some(options[0].name.clone()),
            reason: "Only option available.".to_string(),
            options: analyses,
            all_options_bad,
        };
    }

    // Unique-hint shortcut: exactly one option carries a skill hint.
    let hint_indices: Vec<usize> = options
        .iter()
        .enumerate()
        .filter(|(_, o)| o.reward_text.to_lowercase().contains("hint +"))
        .map(|(i, _)| i)
        .collect();
    if hint_indices.len() == 1 {
        let idx = hint_indices[0];
        return EventAnalysis {
            recommended_option: Some(options[idx].name.clone()),
            reason: format!("Unique skill hint: '{}'", options[idx].reward_text),
            options: analyses,
            all_options_bad,
        };
    }

    let good_rank = priorities.good_rank_index();
    let all_have_bad = analyses.iter().all(|a| a.has_bad);

    let (recommended, reason) = if all_have_bad {
        // Every option is tainted: ignore bad matches and chase the
        // highest-priority good one.
        let with_good: Vec<usize> =
            (0..analyses.len()).filter(|&i| analyses[i].has_good).collect();
        match find_best_option_by_priority(&analyses, &good_rank, &with_good) {
            Some(best) => (
                Some(best),
                format!(
                    "All options have bad choices. Recommended based on highest priority good choice: '{}'",
                    analyses[best].good_matches[0]
                ),
            ),
            None => match fewest_bad(&analyses, 0..analyses.len()) {
                Some(best) => (
                    Some(best),
                    format!(
                        "All options have bad choices. Selected option with least bad choices: {}",
                        analyses[best].bad_matches.len()
                    ),
                ),
                None => (None, "All options have bad choices. No recommendation possible.".to_string()),
            },
        }
    } else {
        // Some option is clean: good matches without bad ones.
        let clean: Vec<usize> = (0..analyses.len())
            .filter(|&i| analyses[i].has_good && !analyses[i].has_bad)
            .collect();
        match find_best_option_by_priority(&analyses, &good_rank, &clean) {
            Some(best) => (
                Some(best),
                format!(
                    "Recommended based on highest priority good choice: '{}'",
                    analyses[best].good_matches[0]
                ),
            ),
            None => {
                // Widen to good-despite-bad, preferring fewer bad matches.
                let with_good: Vec<usize> =
                    (0..analyses.len()).filter(|&i| analyses[i].has_good).collect();
                match fewest_bad(&analyses, with_good.into_iter()) {
                    Some(best) => (
                        Some(best),
                        format!(
                            "No clean options available. Selected option with good choices but fewest bad choices: {}",
                            analyses[best].bad_matches.len()
                        ),
                    ),
                    None => match fewest_bad(&analyses, 0..analyses.len()) {
                        Some(best) => (
                            Some(best),
                            format!(
                                "No good choices found. Selected option with least bad choices: {}",
                                analyses[best].bad_matches.len()
                            ),
                        ),
                        None => {
                            (None, "No good choices found. No recommendation possible.".to_string())
                        }
                    },
                }
            }
        }
    };

    EventAnalysis {
        recommended_option: recommended.map(|i| analyses[i].name.clone()),
        reason,
        options: analyses,
        all_options_bad,
    }
}

/// Best candidate by good-keyword priority: lowest rank of each option's
/// strongest match, ties broken by more good matches, then fewer bad
/// matches, then first-seen order.
fn find_best_option_by_priority(
    analyses: &[OptionAnalysis],
    good_rank: &HashMap<String, usize>,
    candidates: &[usize],
) -> Option<usize> {
    let mut best_rank: Option<usize> = None;
    let mut tied: Vec<usize> = Vec::new();

    for &i in candidates {
        let rank = analyses[i]
            .good_matches
            .iter()
            .filter_map(|k| good_rank.get(&k.to_lowercase()).copied())
            .min();
        let Some(rank) = rank else { continue };
        match best_rank {
            None => {
                best_rank = Some(rank);
                tied.push(i);
            }
            Some(br) if rank < br => {
                best_rank = Some(rank);
                tied.clear();
                tied.push(i);
            }
            Some(br) if rank == br => tied.push(i),
            _ => {}
        }
    }

    if tied.len() <= 1 {
        return tied.first().copied();
    }

    let mut best: Option<usize> = None;
    let mut max_good = 0usize;
    let mut min_bad = usize::MAX;
    for &i in &tied {
        let good = analyses[i].good_matches.len();
        let bad = analyses[i].bad_matches.len();
        if best.is_none() || good > max_good || (good == max_good && bad < min_bad) {
            best = Some(i);
            max_good = good;
            min_bad = bad;
        }
    }
    best
}

/// Candidate with the fewest bad matches; first-seen order breaks ties.
fn fewest_bad(
    analyses: &[OptionAnalysis],
    candidates: impl Iterator<Item = usize>,
) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut min_bad = usize::MAX;
    for i in candidates {
        let bad = analyses[i].bad_matches.len();
        if bad < min_bad {
            min_bad = bad;
            best = Some(i);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn priorities(good: &[&str], bad: &[&str]) -> EventPriorities {
        EventPriorities::new(
            good.iter().map(|s| s.to_string()).collect(),
            bad.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn opt(name: &str, reward: &str) -> EventOption {
        EventOption::new(name, reward)
    }

    #[test]
    fn test_clean_option_beats_bad_one() {
        // Scenario: top has a good clean reward, bottom is purely bad
        let options = vec![
            opt("top option", "Speed +10, Power +5"),
            opt("bottom option", "Mood Down"),
        ];
        let analysis =
            analyze_event_options(&options, &priorities(&["Speed"], &["Mood Down"]));

        let top = analysis.analysis_for("top option").unwrap();
        assert!(top.has_good && !top.has_bad);
        let bottom = analysis.analysis_for("bottom option").unwrap();
        assert!(!bottom.has_good && bottom.has_bad);
        assert_eq!(analysis.recommended_option.as_deref(), Some("top option"));
    }

    #[test]
    fn test_unique_hint_overrides_everything() {
        let options = vec![
            opt("option1", "Energy -20"),
            opt("option2", "Skill hint +"),
            opt("option3", "Energy -10"),
        ];
        // Priorities would otherwise steer elsewhere
        let analysis =
            analyze_event_options(&options, &priorities(&["Energy"], &["Skill"]));
        assert_eq!(analysis.recommended_option.as_deref(), Some("option2"));
        assert!(analysis.reason.contains("skill hint"));
    }

    #[test]
    fn test_hint_shortcut_needs_uniqueness() {
        let options = vec![
            opt("top option", "Charming hint +1"),
            opt("bottom option", "Swinging Maestro hint +1, Speed +5"),
        ];
        let analysis = analyze_event_options(&options, &priorities(&["Speed"], &[]));
        // Two hints: normal priority logic applies
        assert_eq!(analysis.recommended_option.as_deref(), Some("bottom option"));
    }

    #[test]
    fn test_single_option_recommended_immediately() {
        let options = vec![opt("top option", "Nothing happens")];
        let analysis = analyze_event_options(&options, &priorities(&[], &[]));
        assert_eq!(analysis.recommended_option.as_deref(), Some("top option"));
        assert_eq!(analysis.reason, "Only option available.");
    }

    #[test]
    fn test_no_options_yields_no_recommendation() {
        let analysis = analyze_event_options(&[], &priorities(&["Speed"], &[]));
        assert!(analysis.recommended_option.is_none());
        assert!(analysis.all_options_bad);
    }

    #[test]
    fn test_all_bad_still_follows_good_priority() {
        // Every option has a bad match; the one with a good match wins
        // even though another has fewer bad matches overall.
        let options = vec![
            opt("top option", "Mood Down"),
            opt("bottom option", "Speed +10, Mood Down, Energy -10"),
        ];
        let analysis = analyze_event_options(
            &options,
            &priorities(&["Speed"], &["Mood Down", "Energy -"]),
        );
        assert_eq!(analysis.recommended_option.as_deref(), Some("bottom option"));
        assert!(analysis.reason.contains("All options have bad choices"));
    }

    #[test]
    fn test_all_bad_no_good_picks_fewest_bad() {
        let options = vec![
            opt("top option", "Mood Down, Energy -20"),
            opt("bottom option", "Mood Down"),
        ];
        let analysis = analyze_event_options(
            &options,
            &priorities(&["Speed"], &["Mood Down", "Energy -"]),
        );
        assert_eq!(analysis.recommended_option.as_deref(), Some("bottom option"));
        assert!(analysis.all_options_bad);
    }

    #[test]
    fn test_priority_rank_decides_between_clean_options() {
        let options = vec![
            opt("top option", "Power +15"),
            opt("bottom option", "Speed +5"),
        ];
        // Speed outranks Power in the list
        let analysis =
            analyze_event_options(&options, &priorities(&["Speed", "Power"], &[]));
        assert_eq!(analysis.recommended_option.as_deref(), Some("bottom option"));
    }

    #[test]
    fn test_rank_tie_broken_by_more_good_matches() {
        let options = vec![
            opt("top option", "Speed +10"),
            opt("bottom option", "Speed +5, Power +5"),
        ];
        let analysis =
            analyze_event_options(&options, &priorities(&["Speed", "Power"], &[]));
        assert_eq!(analysis.recommended_option.as_deref(), Some("bottom option"));
    }

    #[test]
    fn test_good_despite_bad_prefers_fewer_bad() {
        // No clean option with a good match exists, so the widened pool
        // picks the good option with the fewest bad matches.
        let options = vec![
            opt("option1", "Speed +10, Mood Down, Energy -20"),
            opt("option2", "Speed +10, Mood Down"),
            opt("option3", "Nothing happens"),
        ];
        let analysis = analyze_event_options(
            &options,
            &priorities(&["Speed"], &["Mood Down", "Energy -"]),
        );
        assert_eq!(analysis.recommended_option.as_deref(), Some("option2"));
        assert!(analysis.reason.contains("fewest bad choices"));
    }

    #[test]
    fn test_no_keywords_at_all_picks_first() {
        let options = vec![
            opt("top option", "Nothing happens"),
            opt("bottom option", "Also nothing"),
        ];
        let analysis = analyze_event_options(&options, &priorities(&[], &[]));
        // Zero bad matches everywhere: first-seen wins
        assert_eq!(analysis.recommended_option.as_deref(), Some("top option"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let options = vec![
            opt("top option", "SPEED +10"),
            opt("bottom option", "mood down"),
        ];
        let analysis =
            analyze_event_options(&options, &priorities(&["speed"], &["Mood Down"]));
        assert_eq!(analysis.recommended_option.as_deref(), Some("top option"));
        assert!(analysis.analysis_for("bottom option").unwrap().has_bad);
    }

    proptest! {
        // Same dialog twice gives the identical recommendation.
        #[test]
        fn prop_analysis_deterministic(rewards in proptest::collection::vec("[a-zA-Z +\\-0-9]{0,24}", 2..4)) {
            let options: Vec<EventOption> = rewards
                .iter()
                .enumerate()
                .map(|(i, r)| EventOption::new(format!("option{}", i + 1), r.clone()))
                .collect();
            let p = priorities(&["Speed", "Energy"], &["Mood", "-"]);
            let a = analyze_event_options(&options, &p);
            let b = analyze_event_options(&options, &p);
            prop_assert_eq!(a.recommended_option, b.recommended_option);
            prop_assert_eq!(a.reason, b.reason);
        }

        // When every option is bad but some have good matches, the pick
        // always comes from the good-match pool.
        #[test]
        fn prop_all_bad_never_ignores_good(n_good in 1usize..3, n_pure_bad in 1usize..3) {
            let mut options = Vec::new();
            for i in 0..n_pure_bad {
                options.push(EventOption::new(format!("option{}", i + 1), "Mood Down"));
            }
            for i in 0..n_good {
                options.push(EventOption::new(
                    format!("option{}", n_pure_bad + i + 1),
                    "Speed +10, Mood Down",
                ));
            }
            let analysis = analyze_event_options(&options, &priorities(&["Speed"], &["Mood Down"]));
            let rec = analysis.recommended_option.clone().expect("recommendation exists");
            let picked = analysis.analysis_for(&rec).unwrap();
            prop_assert!(picked.has_good);
        }
    }
}
