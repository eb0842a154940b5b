use crate::config::{ParsingConfig, TiePolicy};
use crate::error::IngestError;
use crate::feed::decode_record;
use crate::feed::teams::TeamDirectory;
use crate::feed::types::{parse_week, week_label, GameRecord, GameType};
use anyhow::{Context, Result};
use csv::StringRecord;
use std::cmp::Ordering;
use std::io::Read;
use std::path::Path;

// Column layout of game_information.csv. Later columns are ignored.
const YEAR: usize = 0;
const GAME_ID: usize = 1;
const GAME_TYPE: usize = 2;
const SCORE_A: usize = 3;
const TEAM_A: usize = 4;
const SCORE_B: usize = 5;
const TEAM_B: usize = 6;

/// Turns raw log rows into [`GameRecord`]s.
pub struct RowParser<'a> {
    teams: &'a TeamDirectory,
    parsing: &'a ParsingConfig,
}

impl<'a> RowParser<'a> {
    pub fn new(teams: &'a TeamDirectory, parsing: &'a ParsingConfig) -> Self {
        Self { teams, parsing }
    }

    /// Parse one row. `Ok(None)` means the row is an exhibition and does not count.
    pub fn parse(&self, row: usize, record: &StringRecord) -> Result<Option<GameRecord>, IngestError> {
        let label = field(record, row, GAME_TYPE, "game type")?;
        let game_type = GameType::classify(label);
        if game_type == GameType::Exhibition {
            return Ok(None);
        }

        let year: u32 = number(record, row, YEAR, "year")?;
        let id: u64 = number(record, row, GAME_ID, "game id")?;
        let missing_week = || IngestError::MissingWeekNumber { row, label: label.to_string() };
        let week = parse_week(label, game_type, self.parsing.week_offset).ok_or_else(missing_week)?;
        let week_label = week_label(label, game_type).ok_or_else(missing_week)?;

        let score_a: u32 = number(record, row, SCORE_A, "score A")?;
        let raw_team_a = field(record, row, TEAM_A, "team A")?;
        let team_a_id = padded_id(raw_team_a, row, "team A")?;
        let team_a = self.teams.city(raw_team_a, row)?;

        let score_b: u32 = number(record, row, SCORE_B, "score B")?;
        let raw_team_b = field(record, row, TEAM_B, "team B")?;
        let team_b_id = padded_id(raw_team_b, row, "team B")?;
        let team_b = self.teams.city(raw_team_b, row)?;

        let side_b_wins = match score_a.cmp(&score_b) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => match self.parsing.tie_policy {
                TiePolicy::SideTwoWins => true,
                TiePolicy::Reject => return Err(IngestError::TiedScore { row, score: score_a }),
            },
        };

        let ((winning_score, winning_team), (losing_score, losing_team)) = if side_b_wins {
            ((score_b, team_b), (score_a, team_a))
        } else {
            ((score_a, team_a), (score_b, team_b))
        };

        Ok(Some(GameRecord {
            id,
            year,
            week,
            game_type,
            winning_score,
            winning_team: winning_team.to_string(),
            losing_score,
            losing_team: losing_team.to_string(),
            home_team_id: team_b_id,
            away_team_id: team_a_id,
            week_label,
        }))
    }
}

fn field<'r>(
    record: &'r StringRecord,
    row: usize,
    index: usize,
    name: &'static str,
) -> Result<&'r str, IngestError> {
    record.get(index).ok_or(IngestError::MissingField { row, field: name })
}

fn number<T: std::str::FromStr>(
    record: &StringRecord,
    row: usize,
    index: usize,
    name: &'static str,
) -> Result<T, IngestError> {
    let raw = field(record, row, index, name)?;
    raw.trim().parse().map_err(|_| IngestError::InvalidNumber {
        row,
        field: name,
        value: raw.to_string(),
    })
}

/// Team ids stored on records are two-digit, zero-padded.
fn padded_id(raw: &str, row: usize, name: &'static str) -> Result<String, IngestError> {
    let id: u32 = raw.trim().parse().map_err(|_| IngestError::InvalidNumber {
        row,
        field: name,
        value: raw.to_string(),
    })?;
    Ok(format!("{:02}", id))
}

/// Read every row of a newest-first log and return them oldest-first.
///
/// The log's first line is not a game; after reversal it is the last entry and
/// is dropped. Row numbers are the 1-based line positions in the file.
pub fn read_chronological<R: Read>(reader: R) -> Result<Vec<(usize, StringRecord)>, IngestError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, raw) in csv.byte_records().enumerate() {
        let raw = raw?;
        let row = raw.position().map(|p| p.line() as usize).unwrap_or(i + 1);
        rows.push((row, decode_record(&raw)));
    }
    rows.reverse();
    rows.pop();
    Ok(rows)
}

/// Parse a whole log into chronological game records, exhibitions removed.
pub fn parse_game_log<R: Read>(
    reader: R,
    teams: &TeamDirectory,
    parsing: &ParsingConfig,
) -> Result<Vec<GameRecord>, IngestError> {
    let parser = RowParser::new(teams, parsing);
    let mut games = Vec::new();
    for (row, record) in read_chronological(reader)? {
        if let Some(game) = parser.parse(row, &record)? {
            games.push(game);
        }
    }
    Ok(games)
}

pub fn load_games(path: &Path, teams: &TeamDirectory, parsing: &ParsingConfig) -> Result<Vec<GameRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open game log: {}", path.display()))?;
    let games = parse_game_log(file, teams, parsing)
        .with_context(|| format!("Failed to parse game log: {}", path.display()))?;
    tracing::info!(games = games.len(), path = %path.display(), "parsed game log");
    Ok(games)
}
