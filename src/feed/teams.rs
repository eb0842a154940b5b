use crate::error::IngestError;
use crate::feed::decode_record;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

const ID_FIELD: usize = 0;
const CITY_FIELD: usize = 14;

/// Team id -> city, read from the league's team information export.
///
/// Keys are the raw id strings exactly as written in the file (`"5"`, not
/// `"05"`). Game records carry padded ids; the two are never mixed.
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    cities: HashMap<String, String>,
}

impl TeamDirectory {
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open team table: {}", path.display()))?;
        let directory = Self::from_reader(file)
            .with_context(|| format!("Failed to parse team table: {}", path.display()))?;
        tracing::debug!(teams = directory.len(), path = %path.display(), "loaded team table");
        Ok(directory)
    }

    /// Every row is mapped, header included; a header's id never matches a game row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, IngestError> {
        let mut csv = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut cities = HashMap::new();
        for (i, raw) in csv.byte_records().enumerate() {
            let raw = raw?;
            let row = raw.position().map(|p| p.line() as usize).unwrap_or(i + 1);
            let record = decode_record(&raw);
            match (record.get(ID_FIELD), record.get(CITY_FIELD)) {
                (Some(id), Some(city)) => {
                    cities.insert(id.to_string(), city.to_string());
                }
                _ => return Err(IngestError::ShortTeamRow { row, found: record.len() }),
            }
        }
        Ok(Self { cities })
    }

    /// Exact-match lookup; `row` only labels the error.
    pub fn city(&self, id: &str, row: usize) -> Result<&str, IngestError> {
        self.cities
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| IngestError::UnknownTeam { row, id: id.to_string() })
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TeamDirectory {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cities: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
