//! Static game catalog used by the search box
//!
//! The search box does not hit the network; it matches against this fixed
//! list of titles.

/// Titles the search box knows about
pub static GAMES: [&str; 16] = [
    "The Legend of Zelda: Breath of the Wild",
    "Super Mario Odyssey",
    "Red Dead Redemption 2",
    "The Witcher 3: Wild Hunt",
    "God of War",
    "Minecraft",
    "Fortnite",
    "Grand Theft Auto V",
    "Cyberpunk 2077",
    "Elden Ring",
    "Hollow Knight",
    "Stardew Valley",
    "Hades",
    "Celeste",
    "Animal Crossing: New Horizons",
    "Mario Kart 8 Deluxe",
];

/// Returns the titles containing `query`, ignoring case, in catalog order
///
/// Leading and trailing whitespace is ignored; a blank query matches nothing.
pub fn search_games(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    GAMES
        .iter()
        .copied()
        .filter(|title| title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_matches_nothing() {
        assert!(search_games("").is_empty());
        assert!(search_games("   ").is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(search_games("ELDEN"), vec!["Elden Ring"]);
        assert_eq!(search_games("hades"), vec!["Hades"]);
    }

    #[test]
    fn test_substring_matches_keep_catalog_order() {
        assert_eq!(
            search_games("mario"),
            vec!["Super Mario Odyssey", "Mario Kart 8 Deluxe"]
        );
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(search_games("  celeste \n"), vec!["Celeste"]);
    }

    #[test]
    fn test_no_match() {
        assert!(search_games("tetris").is_empty());
    }
}
