use serde::Serialize;

/// Game classification taken from the log's game-type label.
/// Serialized under the same names as [`GameType::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameType {
    #[serde(rename = "exhibition")]
    Exhibition,
    #[serde(rename = "regular")]
    Regular,
    #[serde(rename = "Wild Card")]
    WildCard,
    Divisional,
    Conference,
    Bowl,
}

impl GameType {
    /// Classify a label by prefix. Anything unrecognised is the bowl game.
    pub fn classify(label: &str) -> Self {
        if label.starts_with("Ex.") {
            GameType::Exhibition
        } else if label.starts_with("Reg.") {
            GameType::Regular
        } else if label.starts_with("Wild") {
            GameType::WildCard
        } else if label.starts_with("Divisional") {
            GameType::Divisional
        } else if label.starts_with("Conference") {
            GameType::Conference
        } else {
            GameType::Bowl
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Exhibition => "exhibition",
            GameType::Regular => "regular",
            GameType::WildCard => "Wild Card",
            GameType::Divisional => "Divisional",
            GameType::Conference => "Conference",
            GameType::Bowl => "Bowl",
        }
    }

    /// Fixed week code for playoff stages. `None` for exhibition and regular games.
    pub fn playoff_week(&self) -> Option<&'static str> {
        match self {
            GameType::WildCard => Some("22"),
            GameType::Divisional => Some("23"),
            GameType::Conference => Some("24"),
            GameType::Bowl => Some("25"),
            GameType::Exhibition | GameType::Regular => None,
        }
    }
}

/// Compute the two-digit week code for a game.
///
/// Regular season: trailing integer of the label plus `offset`.
/// Playoffs: the stage's fixed code, whatever the label says.
/// Returns `None` when a regular label has no trailing number, or for exhibitions.
pub fn parse_week(label: &str, game_type: GameType, offset: u32) -> Option<String> {
    match game_type {
        GameType::Regular => trailing_number(label).map(|n| format!("{:02}", n + offset)),
        other => other.playoff_week().map(str::to_string),
    }
}

/// Human-readable week: "Week 5" for regular games, the stage name otherwise.
pub fn week_label(label: &str, game_type: GameType) -> Option<String> {
    match game_type {
        GameType::Regular => trailing_number(label).map(|n| format!("Week {n}")),
        other => Some(other.as_str().to_string()),
    }
}

fn trailing_number(label: &str) -> Option<u32> {
    label.split_whitespace().last()?.parse().ok()
}

/// One normalized, non-exhibition game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub id: u64,
    pub year: u32,
    pub week: String,
    pub game_type: GameType,
    pub winning_score: u32,
    pub winning_team: String,
    pub losing_score: u32,
    pub losing_team: String,
    pub home_team_id: String,
    pub away_team_id: String,
    pub week_label: String,
}

impl GameRecord {
    /// (losing, winning): the matrix key.
    pub fn score_key(&self) -> (u32, u32) {
        (self.losing_score, self.winning_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_name_matches_display_name() {
        for ty in [
            GameType::Exhibition,
            GameType::Regular,
            GameType::WildCard,
            GameType::Divisional,
            GameType::Conference,
            GameType::Bowl,
        ] {
            assert_eq!(serde_json::to_string(&ty).unwrap(), format!("\"{}\"", ty.as_str()));
        }
        assert_eq!(serde_json::to_string(&GameType::WildCard).unwrap(), "\"Wild Card\"");
    }

    #[test]
    fn test_classify_prefixes() {
        assert_eq!(GameType::classify("Ex. Game 2"), GameType::Exhibition);
        assert_eq!(GameType::classify("Reg. Week 5"), GameType::Regular);
        assert_eq!(GameType::classify("Wild Card Round"), GameType::WildCard);
        assert_eq!(GameType::classify("Divisional Playoff"), GameType::Divisional);
        assert_eq!(GameType::classify("Conference Championship"), GameType::Conference);
        assert_eq!(GameType::classify("Championship"), GameType::Bowl);
        assert_eq!(GameType::classify(""), GameType::Bowl);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(GameType::classify("reg. week 1"), GameType::Bowl);
    }

    #[test]
    fn test_parse_week_regular_offset() {
        assert_eq!(parse_week("Week 5", GameType::Regular, 4).as_deref(), Some("09"));
        assert_eq!(parse_week("Reg. Week 1", GameType::Regular, 4).as_deref(), Some("05"));
        assert_eq!(parse_week("Reg. Week 17", GameType::Regular, 4).as_deref(), Some("21"));
    }

    #[test]
    fn test_parse_week_playoff_codes_ignore_label() {
        assert_eq!(parse_week("Week 5", GameType::WildCard, 4).as_deref(), Some("22"));
        assert_eq!(parse_week("anything", GameType::Divisional, 4).as_deref(), Some("23"));
        assert_eq!(parse_week("", GameType::Conference, 4).as_deref(), Some("24"));
        assert_eq!(parse_week("Bowl 7", GameType::Bowl, 0).as_deref(), Some("25"));
    }

    #[test]
    fn test_parse_week_regular_without_number() {
        assert_eq!(parse_week("Reg. Week", GameType::Regular, 4), None);
        assert_eq!(parse_week("Ex. 1", GameType::Exhibition, 4), None);
    }

    #[test]
    fn test_week_label() {
        assert_eq!(week_label("Reg. Week 5", GameType::Regular).as_deref(), Some("Week 5"));
        assert_eq!(week_label("Wild Card", GameType::WildCard).as_deref(), Some("Wild Card"));
        assert_eq!(week_label("Championship", GameType::Bowl).as_deref(), Some("Bowl"));
        assert_eq!(week_label("Reg.", GameType::Regular), None);
    }
}
