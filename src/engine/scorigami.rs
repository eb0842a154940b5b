use crate::feed::types::GameRecord;
use serde::Serialize;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// losing score -> winning score -> entry.
pub type ScoreMatrix = BTreeMap<u32, BTreeMap<u32, ScoreEntry>>;

/// The game that first produced a score pair, and how often the pair has occurred since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    pub first: GameRecord,
    pub occurrences: u32,
}

/// Folds chronological game records into a [`Scorigami`].
///
/// Records must arrive oldest first: the first record for a pair is kept
/// forever, later ones only bump the counter.
#[derive(Debug, Default)]
pub struct ScorigamiBuilder {
    scores: ScoreMatrix,
    highest_score: u32,
    first_year: u32,
    last_year: u32,
    total_games: usize,
}

impl ScorigamiBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one game. Returns `true` if it produced a never-seen score.
    pub fn push(&mut self, record: GameRecord) -> bool {
        if self.first_year == 0 {
            self.first_year = record.year;
        }
        self.last_year = self.last_year.max(record.year);
        self.total_games += 1;

        let (losing, winning) = record.score_key();
        match self.scores.entry(losing).or_default().entry(winning) {
            Entry::Vacant(slot) => {
                self.highest_score = self.highest_score.max(winning);
                tracing::debug!(
                    year = record.year,
                    week = %record.week,
                    game_id = record.id,
                    "scorigami {}-{}",
                    winning,
                    losing
                );
                slot.insert(ScoreEntry { first: record, occurrences: 1 });
                true
            }
            Entry::Occupied(mut slot) => {
                slot.get_mut().occurrences += 1;
                false
            }
        }
    }

    pub fn highest_score(&self) -> u32 {
        self.highest_score
    }

    pub fn finish(self) -> Scorigami {
        Scorigami {
            scores: self.scores,
            highest_score: self.highest_score,
            first_year: self.first_year,
            last_year: self.last_year,
            total_games: self.total_games,
        }
    }
}

/// Read-only aggregate of every score pair a league has produced.
///
/// `first_year` is the year of the first counted game (0 if there were none),
/// `last_year` the latest year seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scorigami {
    scores: ScoreMatrix,
    highest_score: u32,
    first_year: u32,
    last_year: u32,
    total_games: usize,
}

impl Scorigami {
    pub fn from_records<I: IntoIterator<Item = GameRecord>>(records: I) -> Self {
        let mut builder = ScorigamiBuilder::new();
        for record in records {
            builder.push(record);
        }
        builder.finish()
    }

    pub fn get(&self, losing: u32, winning: u32) -> Option<&ScoreEntry> {
        self.scores.get(&losing)?.get(&winning)
    }

    pub fn scores(&self) -> &ScoreMatrix {
        &self.scores
    }

    pub fn entries(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.scores.values().flat_map(|row| row.values())
    }

    pub fn highest_score(&self) -> u32 {
        self.highest_score
    }

    pub fn first_year(&self) -> u32 {
        self.first_year
    }

    pub fn last_year(&self) -> u32 {
        self.last_year
    }

    pub fn total_games(&self) -> usize {
        self.total_games
    }

    pub fn distinct_scores(&self) -> usize {
        self.scores.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_games == 0
    }

    /// Every year from the first to the last, inclusive.
    pub fn years(&self) -> Vec<u32> {
        if self.is_empty() {
            return Vec::new();
        }
        (self.first_year..=self.last_year).collect()
    }

    /// Score pairs first realized during `year`, in matrix order.
    pub fn new_in(&self, year: u32) -> Vec<&ScoreEntry> {
        self.entries().filter(|e| e.first.year == year).collect()
    }
}
