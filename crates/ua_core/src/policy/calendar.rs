//! Career calendar rules derived from the on-screen year text.
//!
//! The year text reads like "Classic Year Early Jul" — year name, half,
//! month. Pre-debut and summer-camp phases are recognized from it.

/// Pre-debut turns carry "Pre-Debut" in the year text.
pub fn is_pre_debut_year(year: &str) -> bool {
    year.contains("Pre")
}

/// Whether entering a race is possible this turn.
///
/// Races are unavailable before the debut, during the finale (its races
/// are scripted, not chosen), and during the July/August summer camp.
pub fn is_racing_available(year: &str) -> bool {
    if is_pre_debut_year(year) {
        return false;
    }
    if year.contains("Finale Season") {
        return false;
    }
    let parts: Vec<&str> = year.split(' ').collect();
    if parts.len() > 3 && matches!(parts[3], "Jul" | "Aug") {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_debut_blocks_racing() {
        assert!(is_pre_debut_year("Junior Year Pre-Debut"));
        assert!(!is_racing_available("Junior Year Pre-Debut"));
    }

    #[test]
    fn test_finale_season_blocks_racing() {
        assert!(!is_racing_available("Finale Season"));
    }

    #[test]
    fn test_summer_camp_blocks_racing() {
        assert!(!is_racing_available("Classic Year Early Jul"));
        assert!(!is_racing_available("Classic Year Late Aug"));
        assert!(is_racing_available("Classic Year Early Jun"));
    }

    #[test]
    fn test_regular_turn_allows_racing() {
        assert!(is_racing_available("Senior Year Late Dec"));
    }
}
