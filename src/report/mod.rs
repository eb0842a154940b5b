pub mod html;
pub mod json;

use crate::config::{OutputFormat, ReportConfig};
use crate::engine::{ScoreMatrix, Scorigami};
use anyhow::Result;
use serde::Serialize;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;

/// Data behind the index page: every season, plus the same list split into display rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexPage {
    pub league: String,
    pub all_years: Vec<u32>,
    pub row_years: Vec<Vec<u32>>,
}

impl IndexPage {
    pub fn new(league: &str, all_years: Vec<u32>, years_per_row: usize) -> Self {
        let row_years = chunk_years(&all_years, years_per_row);
        Self { league: league.to_string(), all_years, row_years }
    }

    pub fn for_scorigami(league: &str, scorigami: &Scorigami, years_per_row: usize) -> Self {
        Self::new(league, scorigami.years(), years_per_row)
    }
}

/// Data behind one season page. Borrows the matrix from the aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonPage<'a> {
    pub first_year: u32,
    pub highest_score: u32,
    pub scores: &'a ScoreMatrix,
    pub current_year: u32,
    pub last_year: u32,
    /// Seasons this page links to. `None` when that page is not published.
    pub prev_year: Option<u32>,
    pub next_year: Option<u32>,
}

impl<'a> SeasonPage<'a> {
    /// `None` selects the latest season.
    pub fn new(scorigami: &'a Scorigami, current_year: Option<u32>) -> Self {
        let first_year = scorigami.first_year();
        let last_year = scorigami.last_year();
        let current_year = current_year.unwrap_or(last_year);
        Self {
            first_year,
            highest_score: scorigami.highest_score(),
            scores: scorigami.scores(),
            current_year,
            last_year,
            prev_year: (current_year > first_year).then(|| current_year - 1),
            next_year: (current_year < last_year).then(|| current_year + 1),
        }
    }

    /// Drop the neighbour links, for a page published on its own.
    pub fn standalone(mut self) -> Self {
        self.prev_year = None;
        self.next_year = None;
        self
    }
}

/// Split years into rows of at most `per_row` (a zero width is treated as one).
pub fn chunk_years(years: &[u32], per_row: usize) -> Vec<Vec<u32>> {
    years.chunks(per_row.max(1)).map(<[u32]>::to_vec).collect()
}

/// Turns page payloads into file contents.
pub trait Renderer {
    /// File extension of rendered pages, without the dot.
    fn extension(&self) -> &'static str;
    fn render_index(&self, page: &IndexPage) -> Result<String>;
    fn render_season(&self, page: &SeasonPage<'_>) -> Result<String>;
}

pub fn renderer_for(config: &ReportConfig) -> Box<dyn Renderer> {
    match config.format {
        OutputFormat::Html => Box::new(HtmlRenderer::new(config)),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
