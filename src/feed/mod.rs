pub mod game_log;
pub mod teams;
pub mod types;

use crate::config::{LeagueConfig, ParsingConfig};
use anyhow::Result;
use csv::{ByteRecord, StringRecord};
use std::borrow::Cow;
use teams::TeamDirectory;
use types::GameRecord;

/// Supplies a league's counted games, oldest first.
pub trait GameSource {
    fn load_games(&self) -> Result<Vec<GameRecord>>;
}

/// The league's exported CSV files on disk.
pub struct CsvLeagueFeed {
    league: LeagueConfig,
    parsing: ParsingConfig,
}

impl CsvLeagueFeed {
    pub fn new(league: LeagueConfig, parsing: ParsingConfig) -> Self {
        Self { league, parsing }
    }
}

impl GameSource for CsvLeagueFeed {
    fn load_games(&self) -> Result<Vec<GameRecord>> {
        let teams = TeamDirectory::load(&self.league.team_info_path())?;
        game_log::load_games(&self.league.game_log_path(), &teams, &self.parsing)
    }
}

impl GameSource for Vec<GameRecord> {
    fn load_games(&self) -> Result<Vec<GameRecord>> {
        Ok(self.clone())
    }
}

/// Decode a raw CSV record field by field.
///
/// Exports written on Windows are often Windows-1252 rather than UTF-8. A
/// field that is not valid UTF-8 is read as Latin-1, which agrees with
/// Windows-1252 on accented letters.
pub(crate) fn decode_record(record: &ByteRecord) -> StringRecord {
    let mut out = StringRecord::with_capacity(record.as_slice().len(), record.len());
    for field in record.iter() {
        out.push_field(&decode_field(field));
    }
    out
}

fn decode_field(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_keeps_utf8() {
        let record = ByteRecord::from(vec!["S\u{e3}o Paulo".as_bytes(), &b"7"[..]]);
        let decoded = decode_record(&record);
        assert_eq!(&decoded[0], "S\u{e3}o Paulo");
        assert_eq!(&decoded[1], "7");
    }

    #[test]
    fn test_decode_windows_1252_field() {
        let record = ByteRecord::from(vec![&b"S\xE3o Paulo"[..], &b"Reg. Week 1"[..]]);
        let decoded = decode_record(&record);
        assert_eq!(&decoded[0], "S\u{e3}o Paulo");
        assert_eq!(&decoded[1], "Reg. Week 1");
        assert_eq!(decoded.len(), 2);
    }
}
