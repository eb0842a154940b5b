// Integration tests for building the scorigami from league CSV exports

#[cfg(test)]
mod tests {
    use scorigami::config::{LeagueConfig, ParsingConfig};
    use scorigami::feed::game_log::parse_game_log;
    use scorigami::feed::teams::TeamDirectory;
    use scorigami::feed::{CsvLeagueFeed, GameSource};
    use scorigami::pipeline::build_scorigami;
    use std::fs;

    fn team_row(id: &str, city: &str) -> String {
        let mut fields = vec![id.to_string()];
        fields.extend((1..14).map(|i| format!("col{i}")));
        fields.push(city.to_string());
        fields.join(",")
    }

    fn team_table() -> String {
        [
            team_row("Team", "City"),
            team_row("1", "Austin"),
            team_row("2", "Boston"),
            team_row("7", "Chicago"),
        ]
        .join("\n")
    }

    // Newest first, header on top.
    const GAME_LOG: &str = "\
Year,Game,Type,Score1,Team1,Score2,Team2,Attendance
2032,9,Championship,30,2,33,1,0
2032,8,Reg. Week 5,7,7,14,2,0
2031,7,Reg. Week 2,20,2,10,1,0
2031,6,Ex. Game 4,99,1,0,2,0
2031,5,Reg. Week 1,10,1,20,7,0
2030,4,Ex. Game 1,3,7,60,1,0
";

    fn write_league(dir: &std::path::Path) -> LeagueConfig {
        fs::write(dir.join("team_information.csv"), team_table()).unwrap();
        fs::write(dir.join("game_information.csv"), GAME_LOG).unwrap();
        LeagueConfig {
            data_dir: dir.to_path_buf(),
            ..LeagueConfig::default()
        }
    }

    #[test]
    fn test_counts_repeats_and_keeps_first_game() {
        let dir = tempfile::tempdir().unwrap();
        let feed = CsvLeagueFeed::new(write_league(dir.path()), ParsingConfig::default());
        let s = build_scorigami(&feed).unwrap();

        let repeat = s.get(10, 20).unwrap();
        assert_eq!(repeat.occurrences, 2);
        assert_eq!(repeat.first.id, 5);
        assert_eq!(repeat.first.winning_team, "Chicago");
        assert_eq!(repeat.first.week, "05");

        let single = s.get(7, 14).unwrap();
        assert_eq!(single.occurrences, 1);
        assert_eq!(single.first.week, "09");
        assert_eq!(single.first.week_label, "Week 5");

        let bowl = s.get(30, 33).unwrap();
        assert_eq!(bowl.first.week, "25");
        assert_eq!(bowl.first.winning_team, "Austin");
        assert_eq!(bowl.first.home_team_id, "01");
        assert_eq!(bowl.first.away_team_id, "02");
    }

    #[test]
    fn test_exhibitions_do_not_count() {
        let dir = tempfile::tempdir().unwrap();
        let feed = CsvLeagueFeed::new(write_league(dir.path()), ParsingConfig::default());
        let s = build_scorigami(&feed).unwrap();

        // The 2030 exhibition would otherwise set first_year and the 60-point high.
        assert_eq!(s.first_year(), 2031);
        assert_eq!(s.last_year(), 2032);
        assert_eq!(s.highest_score(), 33);
        assert!(s.get(3, 60).is_none());
        assert!(s.get(0, 99).is_none());
        assert_eq!(s.total_games(), 4);
        assert_eq!(s.years(), vec![2031, 2032]);
    }

    #[test]
    fn test_rebuild_from_same_log_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let feed = CsvLeagueFeed::new(write_league(dir.path()), ParsingConfig::default());
        let first = build_scorigami(&feed).unwrap();
        let second = build_scorigami(&feed).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn test_winner_normalization_from_csv() {
        let teams = TeamDirectory::from_reader(team_table().as_bytes()).unwrap();
        let log = "header\n2031,2,Reg. Week 1,17,1,17,2\n2031,1,Reg. Week 1,3,1,9,7\n";
        let games = parse_game_log(log.as_bytes(), &teams, &ParsingConfig::default()).unwrap();
        assert_eq!(games.len(), 2);

        // score A < score B: side B wins
        assert_eq!(games[0].winning_score, 9);
        assert_eq!(games[0].winning_team, "Chicago");
        assert_eq!(games[0].losing_score, 3);
        assert_eq!(games[0].losing_team, "Austin");

        // equal scores: side B is recorded as the winner
        assert_eq!(games[1].winning_team, "Boston");
        assert_eq!(games[1].losing_team, "Austin");
    }

    #[test]
    fn test_unknown_team_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let league = write_league(dir.path());
        fs::write(
            dir.path().join("game_information.csv"),
            "header\n2031,1,Reg. Week 1,10,1,20,42\n",
        )
        .unwrap();
        let err = CsvLeagueFeed::new(league, ParsingConfig::default())
            .load_games()
            .unwrap_err();
        assert!(format!("{err:#}").contains("unknown team id \"42\""));
    }

    #[test]
    fn test_missing_log_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("team_information.csv"), team_table()).unwrap();
        let league = LeagueConfig {
            data_dir: dir.path().to_path_buf(),
            ..LeagueConfig::default()
        };
        let err = build_scorigami(&CsvLeagueFeed::new(league, ParsingConfig::default())).unwrap_err();
        assert!(err.to_string().contains("game_information.csv"));
    }
}
