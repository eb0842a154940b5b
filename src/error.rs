use thiserror::Error;

/// Failures while turning raw league files into game records.
///
/// `row` is the 1-based line number in the source file.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("row {row}: missing field {field}")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: {field} is not a number: {value:?}")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: no week number in game type label {label:?}")]
    MissingWeekNumber { row: usize, label: String },

    #[error("row {row}: unknown team id {id:?}")]
    UnknownTeam { row: usize, id: String },

    #[error("row {row}: tied score {score}-{score} rejected")]
    TiedScore { row: usize, score: u32 },

    #[error("team table row {row}: expected at least 15 fields, found {found}")]
    ShortTeamRow { row: usize, found: usize },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}
